//! Request input validation.
//!
//! Validators collect every failed rule into a [`ValidationError`] issue list
//! rather than stopping at the first, so clients see all problems at once.
//! The list shape is what [`crate::domain::error::IssueList`] describes; any
//! other validator producing it integrates the same way.

use serde::Deserialize;
use url::Url;

use crate::domain::error::{AppError, IssueList};
use crate::models::{NewUser, NewUserInput};

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u64 = 20;
/// Upper bound on the `limit` query parameter.
pub const MAX_PAGE_SIZE: u64 = 100;

const MIN_NAME_CHARS: usize = 2;
const MAX_NAME_CHARS: usize = 100;

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Human-readable description of the failed rule.
    pub message: String,
}

/// Ordered set of failed rules for one request input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    /// Issues in the order the rules were checked.
    pub issues: Vec<Issue>,
}

impl ValidationError {
    fn push(&mut self, message: impl Into<String>) {
        self.issues.push(Issue {
            message: message.into(),
        });
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.issues.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .issue_messages()
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{joined}")
    }
}

impl std::error::Error for ValidationError {}

impl IssueList for ValidationError {
    fn issue_messages(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().map(|issue| issue.message.as_str())
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        Self::from_issues(&value)
    }
}

/// Raw pagination parameters as they arrive on the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    /// 1-based page number; defaults to 1.
    pub page: Option<String>,
    /// Items per page; defaults to 20, capped at 100.
    pub limit: Option<String>,
}

/// Validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based page number.
    pub page: u64,
    /// Items per page.
    pub page_size: u64,
}

fn parse_positive(raw: Option<&str>, default: u64) -> Option<u64> {
    match raw {
        None => Some(default),
        Some(value) => value.trim().parse::<u64>().ok().filter(|parsed| *parsed >= 1),
    }
}

/// Validate raw pagination parameters into a [`PageQuery`].
pub fn validate_page_params(params: &PageParams) -> Result<PageQuery, ValidationError> {
    let mut error = ValidationError::default();

    let page = parse_positive(params.page.as_deref(), 1);
    if page.is_none() {
        error.push("page must be a positive integer");
    }

    let page_size = parse_positive(params.limit.as_deref(), DEFAULT_PAGE_SIZE)
        .filter(|parsed| *parsed <= MAX_PAGE_SIZE);
    if page_size.is_none() {
        error.push("limit must be an integer between 1 and 100");
    }

    let window = PageQuery {
        page: page.unwrap_or(1),
        page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE),
    };
    error.into_result(window)
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Validate a raw create-user body into a [`NewUser`].
pub fn validate_new_user(input: &NewUserInput) -> Result<NewUser, ValidationError> {
    let mut error = ValidationError::default();

    let email = input.email.as_deref().unwrap_or_default().trim();
    if !is_email(email) {
        error.push("Invalid email address");
    }

    let name = input.name.as_deref().unwrap_or_default().trim();
    if name.chars().count() < MIN_NAME_CHARS {
        error.push("Name must be at least 2 characters");
    } else if name.chars().count() > MAX_NAME_CHARS {
        error.push("Name must be at most 100 characters");
    }

    if let Some(avatar_url) = input.avatar_url.as_deref() {
        if Url::parse(avatar_url).is_err() {
            error.push("Avatar URL must be a valid URL");
        }
    }

    let user = NewUser {
        email: email.to_owned(),
        name: name.to_owned(),
        avatar_url: input.avatar_url.clone(),
    };
    error.into_result(user)
}
