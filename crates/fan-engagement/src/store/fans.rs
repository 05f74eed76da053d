use super::{append_row, StoreError};
use crate::engagement::FanRecord;
use std::path::PathBuf;
use tracing::info;

/// Append-only store for fan registrations.
#[derive(Debug, Clone)]
pub struct FanStore {
    path: PathBuf,
}

impl FanStore {
    pub const HEADER: [&'static str; 2] = ["Name", "Email"];

    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn append(&self, record: &FanRecord) -> Result<(), StoreError> {
        append_row(&self.path, &[record.name.as_str(), record.email.as_str()])?;
        info!(name = %record.name, "fan recorded");
        Ok(())
    }
}
