use srg_core::{ErrorInfo, SrgError};

use crate::RegularityReport;

/// Serialises a regularity report into indented JSON.
pub fn report_to_json(report: &RegularityReport) -> Result<String, SrgError> {
    serde_json::to_string_pretty(report)
        .map_err(|err| SrgError::Serde(ErrorInfo::new("report-serialize", err.to_string())))
}

/// Deserialises a regularity report from JSON text.
pub fn report_from_json(json: &str) -> Result<RegularityReport, SrgError> {
    serde_json::from_str(json)
        .map_err(|err| SrgError::Serde(ErrorInfo::new("report-deserialize", err.to_string())))
}
