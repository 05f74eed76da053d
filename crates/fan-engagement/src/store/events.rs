use super::{append_row, StoreError};
use crate::engagement::EngagementRecord;
use std::path::PathBuf;
use tracing::info;

/// Append-only store for event participation entries.
#[derive(Debug, Clone)]
pub struct EngagementStore {
    path: PathBuf,
}

impl EngagementStore {
    pub const HEADER: [&'static str; 3] = ["Type", "Participant", "Details"];

    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn append(&self, record: &EngagementRecord) -> Result<(), StoreError> {
        append_row(
            &self.path,
            &[
                record.kind.label(),
                record.participant.as_str(),
                record.details.as_str(),
            ],
        )?;
        info!(kind = record.kind.label(), participant = %record.participant, "participation recorded");
        Ok(())
    }
}
