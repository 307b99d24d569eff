use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid coordinate '{input}': {reason}")]
    InvalidCoordinate { input: String, reason: String },

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_coordinate(input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidCoordinate {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
