use super::errors::{DomainError, DomainResult};
use super::models::Record;

/// Renders submissions as text for copying out of the application.
pub struct SubmissionExporter;

impl SubmissionExporter {
    /// Pretty-printed JSON array, one object per record.
    pub fn to_json(records: &[Record]) -> DomainResult<String> {
        serde_json::to_string_pretty(records).map_err(|e| DomainError::Export(e.to_string()))
    }

    /// Single record as a pretty-printed JSON object.
    pub fn record_to_json(record: &Record) -> DomainResult<String> {
        serde_json::to_string_pretty(record).map_err(|e| DomainError::Export(e.to_string()))
    }

    /// CSV with a `name,age,email` header row. The header is written even
    /// when there are no records.
    pub fn to_csv(records: &[Record]) -> DomainResult<String> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer
            .write_record(["name", "age", "email"])
            .map_err(|e| DomainError::Export(e.to_string()))?;
        for record in records {
            writer
                .serialize(record)
                .map_err(|e| DomainError::Export(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| DomainError::Export(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| DomainError::Export(e.to_string()))
    }
}
