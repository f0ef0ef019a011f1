/// Failure of a single remote read.
///
/// `Display` is the bare underlying description; controllers prefix it with
/// their own context before publishing it.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Request(String),
    #[error("HTTP {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("{0}")]
    Decode(String),
    #[error("unrecognized resource url: {0}")]
    ResourceUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
