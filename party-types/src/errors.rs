use thiserror::Error;

/// Failures while assembling the theme word pool at startup. All of these
/// block game start and are shown to the user instead of hanging.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to fetch word source {location}: {message}")]
    Fetch { location: String, message: String },

    #[error("word source {location} is not valid corpus JSON: {message}")]
    Malformed { location: String, message: String },

    #[error("word source {location} timed out after {seconds}s")]
    Timeout { location: String, seconds: u64 },

    #[error("merged word pool is empty")]
    EmptyCorpus,
}
