//! Analyze Logs - interaction state and its transitions

use serde_json::Value;

use super::model::LogFile;

/// User-visible notice raised by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    MissingInput,
    ApiError,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::MissingInput => "Please select a file and enter a prompt",
            Notice::ApiError => "Error calling API",
        }
    }
}

/// Inputs captured for one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionInput<F> {
    pub file: F,
    pub prompt: String,
}

/// Everything the form knows. Only the controller mutates it.
#[derive(Debug, Clone)]
pub struct InteractionState<F> {
    selected_file: Option<F>,
    prompt: String,
    is_submitting: bool,
    last_result: Option<Value>,
}

impl<F> Default for InteractionState<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            prompt: String::new(),
            is_submitting: false,
            last_result: None,
        }
    }
}

impl<F> InteractionState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn last_result(&self) -> Option<&Value> {
        self.last_result.as_ref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            "Analyzing..."
        } else {
            "Analyze Logs"
        }
    }

    pub(super) fn select_file(&mut self, file: F) {
        self.selected_file = Some(file);
    }

    pub(super) fn set_prompt(&mut self, text: String) {
        self.prompt = text;
    }

    pub(super) fn start_submission(&mut self) {
        self.is_submitting = true;
        self.last_result = None;
    }

    /// Result and flag change together, so a result is never visible while
    /// the flag is still up.
    pub(super) fn finish_submission(&mut self, result: Option<Value>) {
        self.last_result = result;
        self.is_submitting = false;
    }
}

impl<F: LogFile> InteractionState<F> {
    /// Both a file and a non-empty prompt are required.
    pub(super) fn validate(&self) -> Result<SubmissionInput<F>, Notice> {
        match &self.selected_file {
            Some(file) if !self.prompt.is_empty() => Ok(SubmissionInput {
                file: file.clone(),
                prompt: self.prompt.clone(),
            }),
            _ => Err(Notice::MissingInput),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct TestFile {
        pub name: String,
        pub size: u64,
    }

    impl TestFile {
        pub(crate) fn new(name: &str, size: u64) -> Self {
            Self {
                name: name.to_string(),
                size,
            }
        }
    }

    impl LogFile for TestFile {
        fn file_name(&self) -> String {
            self.name.clone()
        }

        fn size_bytes(&self) -> u64 {
            self.size
        }
    }

    #[test]
    fn test_initial_state() {
        let state = InteractionState::<TestFile>::new();
        assert!(state.selected_file().is_none());
        assert_eq!(state.prompt(), "");
        assert!(!state.is_submitting());
        assert!(state.last_result().is_none());
        assert_eq!(state.submit_label(), "Analyze Logs");
    }

    #[test]
    fn test_validate_requires_file_and_prompt() {
        let mut state = InteractionState::<TestFile>::new();
        assert_eq!(state.validate(), Err(Notice::MissingInput));

        state.set_prompt("summarize".to_string());
        assert_eq!(state.validate(), Err(Notice::MissingInput));

        state.set_prompt(String::new());
        state.select_file(TestFile::new("logs.ndjson", 10));
        assert_eq!(state.validate(), Err(Notice::MissingInput));

        state.set_prompt("find errors".to_string());
        assert_eq!(
            state.validate(),
            Ok(SubmissionInput {
                file: TestFile::new("logs.ndjson", 10),
                prompt: "find errors".to_string(),
            })
        );
    }

    #[test]
    fn test_whitespace_prompt_counts_as_present() {
        let mut state = InteractionState::<TestFile>::new();
        state.select_file(TestFile::new("logs.ndjson", 10));
        state.set_prompt(" ".to_string());
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_reselect_replaces_file() {
        let mut state = InteractionState::<TestFile>::new();
        state.select_file(TestFile::new("a.ndjson", 1));
        state.select_file(TestFile::new("b.txt", 2));
        assert_eq!(state.selected_file(), Some(&TestFile::new("b.txt", 2)));
    }

    #[test]
    fn test_submission_transitions() {
        let mut state = InteractionState::<TestFile>::new();
        state.finish_submission(Some(json!({"old": true})));

        state.start_submission();
        assert!(state.is_submitting());
        assert!(state.last_result().is_none());
        assert_eq!(state.submit_label(), "Analyzing...");

        state.finish_submission(Some(json!({"errors": 3})));
        assert!(!state.is_submitting());
        assert_eq!(state.last_result(), Some(&json!({"errors": 3})));

        state.start_submission();
        state.finish_submission(None);
        assert!(!state.is_submitting());
        assert!(state.last_result().is_none());
    }
}
