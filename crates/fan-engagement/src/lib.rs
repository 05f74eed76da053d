pub mod config;
pub mod engagement;
pub mod error;
pub mod store;
pub mod surveys;
pub mod telemetry;
