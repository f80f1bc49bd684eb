//! Transport-agnostic core: error taxonomy, result combinators, and input
//! validation.
//!
//! Nothing in this module knows about HTTP. Inbound adapters in [`crate::api`]
//! translate these types into wire envelopes and status codes.

pub mod error;
pub mod result;
pub mod validation;

pub use error::{AppError, ErrorCode, IssueList};
pub use result::AppResult;
