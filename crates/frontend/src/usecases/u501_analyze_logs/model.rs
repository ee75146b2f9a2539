//! Analyze Logs - Model (submission service)

use contracts::usecases::u501_analyze_logs::{ANALYZE_PATH, FILE_FIELD, PROMPT_FIELD};
use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;
use web_sys::FormData;

use crate::shared::api_utils::api_url;

/// A file picked by the user.
pub trait LogFile: Clone + 'static {
    fn file_name(&self) -> String;
    fn size_bytes(&self) -> u64;
}

impl LogFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn size_bytes(&self) -> u64 {
        self.size() as u64
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to build multipart body: {0}")]
    Form(String),
    #[error("request to analysis endpoint failed: {0}")]
    Transport(String),
    #[error("response body is not JSON: {0}")]
    Decode(String),
}

/// Sends one file and prompt to the analysis endpoint and yields the parsed
/// JSON body.
#[allow(async_fn_in_trait)]
pub trait SubmissionService<F: LogFile> {
    async fn submit(&self, file: &F, prompt: &str) -> Result<Value, SubmitError>;
}

/// Multipart POST through `fetch`.
///
/// Any response whose body parses as JSON resolves successfully, whatever
/// the HTTP status; error bodies from the backend are rendered like any
/// other result.
#[derive(Debug, Clone)]
pub struct HttpSubmissionService {
    endpoint: String,
}

impl HttpSubmissionService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint derived from the page location, see [`api_url`].
    pub fn from_location() -> Self {
        Self::new(api_url(ANALYZE_PATH))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SubmissionService<web_sys::File> for HttpSubmissionService {
    async fn submit(&self, file: &web_sys::File, prompt: &str) -> Result<Value, SubmitError> {
        let form = build_form(file, prompt)?;

        let response = Request::post(&self.endpoint)
            .body(form)
            .map_err(|e| SubmitError::Form(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        if !response.ok() {
            log::warn!(
                "analysis endpoint answered HTTP {}, rendering its body",
                response.status()
            );
        }

        let text = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        parse_body(&text)
    }
}

fn build_form(file: &web_sys::File, prompt: &str) -> Result<FormData, SubmitError> {
    let form = FormData::new().map_err(|e| SubmitError::Form(format!("{e:?}")))?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(|e| SubmitError::Form(format!("{e:?}")))?;
    form.append_with_str(PROMPT_FIELD, prompt)
        .map_err(|e| SubmitError::Form(format!("{e:?}")))?;
    Ok(form)
}

pub(crate) fn parse_body(text: &str) -> Result<Value, SubmitError> {
    serde_json::from_str(text).map_err(|e| SubmitError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(r#"{"errors": 3}"#).unwrap(), json!({"errors": 3}));
        assert_eq!(
            parse_body(r#"{"error": "No file uploaded."}"#).unwrap(),
            json!({"error": "No file uploaded."})
        );
    }

    #[test]
    fn test_parse_body_rejects_non_json() {
        assert!(matches!(
            parse_body("<html>502 Bad Gateway</html>"),
            Err(SubmitError::Decode(_))
        ));
        assert!(matches!(parse_body(""), Err(SubmitError::Decode(_))));
    }

    #[test]
    fn test_endpoint() {
        let service = HttpSubmissionService::new("http://localhost:8000/analyze");
        assert_eq!(service.endpoint(), "http://localhost:8000/analyze");
    }
}
