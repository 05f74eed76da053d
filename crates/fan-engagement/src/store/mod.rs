mod events;
mod fans;
mod surveys;

pub use events::EngagementStore;
pub use fans::FanStore;
pub use surveys::SurveyStore;

use crate::config::StorageConfig;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed csv data: {0}")]
    Csv(#[from] csv::Error),
}

/// Create the data directory and seed each flat file with its header row if
/// it does not exist yet.
pub fn ensure_data_files(storage: &StorageConfig) -> Result<(), StoreError> {
    fs::create_dir_all(&storage.data_dir)?;
    ensure_file_with_header(&storage.fan_data_path(), &FanStore::HEADER)?;
    ensure_file_with_header(&storage.engagement_data_path(), &EngagementStore::HEADER)?;
    ensure_file_with_header(&storage.survey_responses_path(), &SurveyStore::HEADER)?;
    Ok(())
}

fn ensure_file_with_header(path: &Path, header: &[&str]) -> Result<(), StoreError> {
    if path.exists() {
        return Ok(());
    }
    let file = fs::File::create(path)?;
    write_row(file, header)
}

/// Append a single csv row through any writer. Used by the stores for both
/// headers and records.
pub(crate) fn write_row<W: Write>(writer: W, fields: &[&str]) -> Result<(), StoreError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(fields)?;
    csv_writer.flush()?;
    Ok(())
}

pub(crate) fn append_row(path: &Path, fields: &[&str]) -> Result<(), StoreError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    write_row(file, fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_row_emits_one_terminated_line() {
        let mut buffer = Vec::new();
        write_row(&mut buffer, &["Name", "Email"]).expect("row writes");
        assert_eq!(String::from_utf8(buffer).expect("utf8"), "Name,Email\n");
    }

    #[test]
    fn write_row_quotes_fields_with_commas() {
        let mut buffer = Vec::new();
        write_row(&mut buffer, &["Bob", "b@x.com", "Terrible, worst experience"])
            .expect("row writes");
        let line = String::from_utf8(buffer).expect("utf8");
        assert_eq!(line, "Bob,b@x.com,\"Terrible, worst experience\"\n");
    }
}
