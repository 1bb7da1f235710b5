#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    RequestFailed(String),
    BadStatus(u16),
    InvalidResponse(String),
    Rejected(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::RequestFailed(msg) => {
                write!(f, "Request failed: {}", msg)
            }
            ApiError::BadStatus(status) => {
                write!(f, "Server responded with status {}", status)
            }
            ApiError::InvalidResponse(msg) => {
                write!(f, "Invalid response - {}", msg)
            }
            ApiError::Rejected(msg) => {
                write!(f, "{}", msg)
            }
        }
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;
