//! Wire-level response envelopes.
//!
//! Every API response is one of three shapes: success, paginated success, or
//! error. Field names are part of the contract; clients match on `success`
//! and read `data`, `pagination`, or `error`. Constructors are pure and
//! stamp the envelope with its serialization instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::error::{AppError, ErrorCode};

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationInfo {
    /// Total matching items across all pages
    pub total_items: u64,
    /// Total number of pages at this page size
    pub total_pages: u64,
    /// 1-based index of the returned page
    pub current_page: u64,
    /// Items per page
    pub page_size: u64,
    /// Whether pages beyond `current_page` exist
    pub has_more: bool,
}

impl PaginationInfo {
    /// Derive pagination metadata from the total count and requested window.
    ///
    /// `total_pages` rounds up; `has_more` is true while the current page is
    /// before the last one.
    ///
    /// # Examples
    /// ```
    /// use backend::api::response::PaginationInfo;
    ///
    /// let info = PaginationInfo::new(45, 2, 20);
    /// assert_eq!(info.total_pages, 3);
    /// assert!(info.has_more);
    /// ```
    #[must_use]
    pub fn new(total_items: u64, page: u64, page_size: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_items.div_ceil(page_size)
        };
        Self {
            total_items,
            total_pages,
            current_page: page,
            page_size,
            has_more: page < total_pages,
        }
    }
}

/// Error detail embedded in [`ErrorBody`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorInfo {
    /// HTTP status the transport responds with
    pub status: u16,
    /// Stable machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<&AppError> for ErrorInfo {
    /// Project an error onto its wire shape.
    ///
    /// The error's own creation timestamp is dropped; the envelope carries a
    /// serialization timestamp instead.
    fn from(error: &AppError) -> Self {
        Self {
            status: error.status(),
            code: error.code(),
            message: error.message().to_owned(),
        }
    }
}

/// Success envelope wrapping a route payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessBody<T> {
    /// Always `true`
    pub success: bool,
    /// Serialization instant (RFC 3339)
    pub timestamp: DateTime<Utc>,
    /// Route payload
    pub data: T,
}

impl<T> SuccessBody<T> {
    /// Wrap a payload, stamping the current instant.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            timestamp: Utc::now(),
            data,
        }
    }
}

/// Success envelope for list payloads, with pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedBody<T> {
    /// Always `true`
    pub success: bool,
    /// Serialization instant (RFC 3339)
    pub timestamp: DateTime<Utc>,
    /// One page of items
    pub data: T,
    /// Pagination metadata for the window
    pub pagination: PaginationInfo,
}

impl<T> PaginatedBody<T> {
    /// Wrap one page of items with its pagination metadata.
    pub fn new(data: T, pagination: PaginationInfo) -> Self {
        Self {
            success: true,
            timestamp: Utc::now(),
            data,
            pagination,
        }
    }
}

/// Error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `false`
    pub success: bool,
    /// Serialization instant (RFC 3339)
    pub timestamp: DateTime<Utc>,
    /// Failure detail
    pub error: ErrorInfo,
}

impl ErrorBody {
    /// Wrap failure detail, stamping the current instant.
    #[must_use]
    pub fn new(error: ErrorInfo) -> Self {
        Self {
            success: false,
            timestamp: Utc::now(),
            error,
        }
    }
}

impl From<&AppError> for ErrorBody {
    fn from(error: &AppError) -> Self {
        Self::new(ErrorInfo::from(error))
    }
}
