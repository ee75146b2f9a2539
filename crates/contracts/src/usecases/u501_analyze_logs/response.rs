//! Known shapes of the analysis response.
//!
//! The client treats the body as opaque JSON and always renders it verbatim.
//! These types only add a summary strip when the body happens to match what
//! the log analysis backend returns.

use serde::Deserialize;
use serde_json::Value;

/// Record counts reported by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnalysisCounts {
    #[serde(default)]
    pub total_records: u64,
    #[serde(default)]
    pub filtered_records: u64,
    #[serde(default)]
    pub highlighted_records: u64,
}

/// Successful analysis: triage summary of the uploaded logs
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisSummary {
    #[serde(default)]
    pub counts: Option<AnalysisCounts>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub model: Option<String>,
}

/// Error body, e.g. `{"error": "No file uploaded."}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisBody {
    Analysis(AnalysisSummary),
    Error(ErrorEnvelope),
    /// Anything else; rendered as raw JSON only
    Opaque,
}

impl AnalysisBody {
    pub fn classify(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return AnalysisBody::Opaque;
        };

        if object.contains_key("error") {
            if let Ok(envelope) = ErrorEnvelope::deserialize(value) {
                return AnalysisBody::Error(envelope);
            }
        }

        if object.contains_key("summary") || object.contains_key("counts") {
            if let Ok(summary) = AnalysisSummary::deserialize(value) {
                return AnalysisBody::Analysis(summary);
            }
        }

        AnalysisBody::Opaque
    }
}
