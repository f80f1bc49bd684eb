//! Application error taxonomy.
//!
//! Every failure the API can emit is one of the eight [`ErrorCode`] kinds,
//! each pairing one HTTP status with one stable wire code. [`AppError`]
//! instances are only built through the named factories, which keeps the set
//! of (status, code) pairs the system can produce closed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
///
/// The serialized form is the wire code (`NOT_FOUND`, `VALIDATION_ERROR`,
/// ...). Adding a variant requires choosing its status in [`ErrorCode::status`]
/// at the same time; a kind without a status does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The request is malformed.
    BadRequest,
    /// Authentication failed or is missing.
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    Forbidden,
    /// The requested resource does not exist.
    NotFound,
    /// The request conflicts with existing state.
    Conflict,
    /// The request body or parameters failed validation.
    ValidationError,
    /// An unexpected error occurred.
    InternalServerError,
    /// A required collaborator (such as the database) is unavailable.
    ServiceUnavailable,
}

impl ErrorCode {
    /// HTTP status paired with this code.
    #[must_use]
    pub const fn status(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::ValidationError => 422,
            Self::InternalServerError => 500,
            Self::ServiceUnavailable => 503,
        }
    }

    /// Wire representation of the code, identical to its serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }
}

/// One application failure: a paired status/code, a human-readable message,
/// and the instant it was detected.
///
/// # Examples
/// ```
/// use backend::domain::AppError;
///
/// let err = AppError::not_found("User not found");
/// assert_eq!(err.status(), 404);
/// assert_eq!(err.code().as_str(), "NOT_FOUND");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    code: ErrorCode,
    message: String,
    timestamp: DateTime<Utc>,
}

impl AppError {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// 400 `BAD_REQUEST`.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// 401 `UNAUTHORIZED`.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// 403 `FORBIDDEN`.
    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// 404 `NOT_FOUND`.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// 409 `CONFLICT`.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// 422 `VALIDATION_ERROR`.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// 500 `INTERNAL_SERVER_ERROR`.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalServerError, message)
    }

    /// 503 `SERVICE_UNAVAILABLE`.
    #[must_use]
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Coerce an ordered list of validation issues into a single 422 error.
    ///
    /// Issue messages are joined with `", "`. An empty list still produces a
    /// non-empty message.
    #[must_use]
    pub fn from_issues<E: IssueList>(source: &E) -> Self {
        let message = source.issue_messages().collect::<Vec<_>>().join(", ");
        if message.is_empty() {
            Self::validation("Validation failed")
        } else {
            Self::validation(message)
        }
    }

    /// Fallback coercion for errors with no mapping of their own.
    ///
    /// The message derives from the source error's display form, never its
    /// backtrace, and is never empty.
    #[must_use]
    pub fn internal_from(source: impl std::fmt::Display) -> Self {
        let message = source.to_string();
        if message.trim().is_empty() {
            Self::internal("Unknown error")
        } else {
            Self::internal(message)
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// HTTP status paired with the code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.code.status()
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Instant the failure was detected. The response envelope stamps its own
    /// serialization time instead of reusing this one.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::internal_from(value)
    }
}

impl From<Box<dyn std::error::Error>> for AppError {
    fn from(value: Box<dyn std::error::Error>) -> Self {
        Self::internal_from(value)
    }
}

/// Ordered sequence of human-readable validation issues.
///
/// Any validator error exposing this shape coerces to one `VALIDATION_ERROR`
/// at the adapter boundary, without the boundary depending on the validator
/// itself.
pub trait IssueList {
    /// Issue messages in the order the rules were checked.
    fn issue_messages(&self) -> impl Iterator<Item = &str>;
}
