//! User data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Application user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Stable numeric identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Unique email address
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Display name shown to other users
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Optional avatar image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Whether the account is active
    pub is_active: bool,
    /// Creation instant
    pub created_at: DateTime<Utc>,
    /// Last update instant
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Email address; must be unique across users.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Optional avatar image URL.
    pub avatar_url: Option<String>,
}

/// Raw create-user request body before validation.
///
/// Fields are optional so that missing values surface as validation issues
/// instead of deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewUserInput {
    /// Email address
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    /// Display name
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    /// Avatar image URL
    pub avatar_url: Option<String>,
}
