pub mod request;
pub mod response;

pub use request::{ACCEPTED_EXTENSIONS, ANALYZE_PATH, FILE_FIELD, PROMPT_FIELD};
pub use response::{AnalysisBody, AnalysisCounts, AnalysisSummary, ErrorEnvelope};

use crate::usecases::common::UseCaseMetadata;

pub struct AnalyzeLogs;

impl UseCaseMetadata for AnalyzeLogs {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "analyze_logs"
    }

    fn display_name() -> &'static str {
        "Log Analyzer"
    }

    fn description() -> &'static str {
        "Upload an NDJSON log file with an incident prompt and view the analysis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(AnalyzeLogs::full_name(), "u501_analyze_logs");
        assert_eq!(AnalyzeLogs::page_id(), "u501_analyze_logs--usecase");
    }

    #[test]
    fn test_heading_and_description() {
        assert_eq!(AnalyzeLogs::display_name(), "Log Analyzer");
        assert!(AnalyzeLogs::description().contains("NDJSON"));
    }
}
