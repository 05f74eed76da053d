use super::{append_row, StoreError};
use crate::surveys::SurveyResponse;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

/// Append-only store for survey submissions, and the loader feeding the
/// report aggregator.
#[derive(Debug, Clone)]
pub struct SurveyStore {
    path: PathBuf,
}

impl SurveyStore {
    pub const HEADER: [&'static str; 3] = ["Name", "Email", "Feedback"];

    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn append(&self, response: &SurveyResponse) -> Result<(), StoreError> {
        append_row(
            &self.path,
            &[
                response.name.as_str(),
                response.email.as_str(),
                response.feedback.as_str(),
            ],
        )?;
        info!(name = %response.name, "survey response recorded");
        Ok(())
    }

    /// Load every stored data row, one `Vec` of fields per row. Returns an
    /// empty list when the file has not been created yet, so a fresh install
    /// reports "nothing to tally" rather than failing.
    pub fn load_rows(&self) -> Result<Vec<Vec<String>>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = std::fs::File::open(&self.path)?;
        Self::parse_rows(file)
    }

    /// Parse survey rows from any reader. The first row is the header and is
    /// excluded; short rows are kept as-is so the aggregator can apply its
    /// own malformed-row policy.
    pub fn parse_rows<R: Read>(reader: R) -> Result<Vec<Vec<String>>, StoreError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.records().skip(1) {
            let record = record?;
            rows.push(record.iter().map(|field| field.to_string()).collect());
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_rows_excludes_the_header() {
        let data = "Name,Email,Feedback\nAlice,a@x.com,great day\n";
        let rows = SurveyStore::parse_rows(Cursor::new(data)).expect("rows parse");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["Alice", "a@x.com", "great day"]);
    }

    #[test]
    fn parse_rows_keeps_short_rows_for_the_aggregator() {
        let data = "Name,Email,Feedback\nAlice,a@x.com\nBob,b@x.com,fine\n";
        let rows = SurveyStore::parse_rows(Cursor::new(data)).expect("rows parse");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 3);
    }

    #[test]
    fn header_only_input_yields_no_rows() {
        let data = "Name,Email,Feedback\n";
        let rows = SurveyStore::parse_rows(Cursor::new(data)).expect("rows parse");
        assert!(rows.is_empty());
    }

    #[test]
    fn quoted_feedback_round_trips_through_the_csv_layer() {
        let mut buffer = Vec::new();
        super::super::write_row(&mut buffer, &SurveyStore::HEADER).expect("header writes");
        super::super::write_row(&mut buffer, &["Bob", "b@x.com", "Terrible, worst experience"])
            .expect("row writes");
        let rows = SurveyStore::parse_rows(Cursor::new(buffer)).expect("rows parse");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][2], "Terrible, worst experience");
    }
}
