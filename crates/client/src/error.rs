use serde::Deserialize;
use thiserror::Error;

/// Structured code the backend attaches to duplicate-booking rejections.
pub const DUPLICATE_RECORD_CODE: &str = "duplicate_record";

/// Older backends only ship the English message; keep matching it so the
/// classification survives a rollout skew.
const DUPLICATE_RECORD_LEGACY: &str = "already has a record";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The payload failed local validation and was never sent.
    #[error(transparent)]
    Invalid(#[from] slotbook_core::errors::BookingError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("An active record already exists for this slot and client")]
    DuplicateBooking,

    #[error("Backend rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_duplicate_booking(&self) -> bool {
        matches!(self, ApiError::DuplicateBooking)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Error envelope the backend uses: `error` carries the human message,
/// `code` the machine-readable kind. Both are optional in the wild.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

/// Turns a non-success response into an [`ApiError`], recognizing the
/// duplicate-booking case by structured code first and by the legacy
/// message substring second.
pub fn classify_failure(status: u16, body: &str) -> ApiError {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
    let (message, code) = match parsed {
        Some(parsed) => (
            parsed.error.or(parsed.message).unwrap_or_default(),
            parsed.code,
        ),
        None => (body.trim().to_string(), None),
    };

    if code.as_deref() == Some(DUPLICATE_RECORD_CODE)
        || message.contains(DUPLICATE_RECORD_LEGACY)
    {
        return ApiError::DuplicateBooking;
    }

    ApiError::Rejected { status, message }
}
