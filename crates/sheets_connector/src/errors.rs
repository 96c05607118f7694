use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum SheetsError {
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlParseError(String),

    #[error("Request errored with status code: {0}")]
    HttpError(StatusCode),

    #[error("Sheets API error ({status}): {message}")]
    ApiError {
        code: i64,
        status: String,
        message: String,
    },

    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Column number must be a positive integer, got {0}")]
    InvalidColumnNumber(i64),

    #[error("Worksheet not found: {0}")]
    WorksheetNotFound(String),
}

impl SheetsError {
    /// True only for the duplicate-title conflict returned by a worksheet
    /// creation call. Every other remote failure propagates unmodified.
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            SheetsError::ApiError { status, message, .. }
                if status == "INVALID_ARGUMENT" && message.contains("already exists")
        )
    }
}

pub type Result<T, E = SheetsError> = std::result::Result<T, E>;
