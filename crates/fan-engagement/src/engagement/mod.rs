mod domain;
pub mod quiz;

pub use domain::{EngagementKind, EngagementRecord, FanRecord};
