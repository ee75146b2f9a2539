//! Wire shape of the analysis request.
//!
//! The request is a single `multipart/form-data` POST with exactly two
//! parts: the log file under [`FILE_FIELD`] and the prompt text under
//! [`PROMPT_FIELD`].

/// Path of the analysis endpoint, relative to the API base.
pub const ANALYZE_PATH: &str = "/analyze";

/// Multipart part carrying the log file (original filename preserved).
pub const FILE_FIELD: &str = "file";

/// Multipart part carrying the free-text prompt.
pub const PROMPT_FIELD: &str = "prompt";

/// Extensions offered by the file picker. Advisory only: any file is sent.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = [".ndjson", ".json"];

/// Value for the `accept` attribute of the file input.
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS.join(",")
}

/// Case-insensitive check of a file name against [`ACCEPTED_EXTENSIONS`].
pub fn has_accepted_extension(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipart_fields() {
        assert_eq!(ANALYZE_PATH, "/analyze");
        assert_eq!(FILE_FIELD, "file");
        assert_eq!(PROMPT_FIELD, "prompt");
        assert_ne!(FILE_FIELD, PROMPT_FIELD);
    }

    #[test]
    fn test_accept_attribute() {
        assert_eq!(accept_attribute(), ".ndjson,.json");
    }

    #[test]
    fn test_has_accepted_extension() {
        assert!(has_accepted_extension("logs.ndjson"));
        assert!(has_accepted_extension("Export.JSON"));
        assert!(!has_accepted_extension("logs.txt"));
        assert!(!has_accepted_extension("ndjson"));
    }
}
