//! Remote Store Errors

/// Common result type for Remote Store calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Why a Remote Store call failed
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response (network down, CORS, DNS)
    Transport(String),
    /// Server answered with a non-success status
    Status { status: u16, body: String },
    /// Server does not know the todo
    NotFound(u32),
    /// Response body was not the expected JSON
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Status { status, body } if body.is_empty() => {
                write!(f, "Server responded with status {}", status)
            }
            ApiError::Status { status, body } => {
                write!(f, "Server responded with status {}: {}", status, body)
            }
            ApiError::NotFound(id) => write!(f, "Todo {} not found", id),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ApiError::NotFound(4).to_string(), "Todo 4 not found");
        assert_eq!(
            ApiError::Status { status: 500, body: String::new() }.to_string(),
            "Server responded with status 500"
        );
        assert_eq!(
            ApiError::Status { status: 400, body: "title should not be empty".into() }.to_string(),
            "Server responded with status 400: title should not be empty"
        );
    }
}
