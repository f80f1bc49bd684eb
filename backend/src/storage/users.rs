//! In-memory user store standing in for the database collaborator.
//!
//! The starter degrades gracefully without a configured database: a
//! disconnected store reports `SERVICE_UNAVAILABLE` from every operation, so
//! routes behave the same way they would before persistence is wired up.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::Utc;

use crate::domain::error::AppError;
use crate::domain::result::AppResult;
use crate::models::{NewUser, User};

#[derive(Debug, Default)]
struct StoreState {
    next_id: i64,
    users: BTreeMap<i64, User>,
}

/// Narrow persistence interface used by the user routes.
#[derive(Debug)]
pub struct UserStore {
    state: Option<RwLock<StoreState>>,
}

fn poisoned() -> AppError {
    AppError::internal("user store lock poisoned")
}

impl UserStore {
    /// Store backed by in-memory state.
    #[must_use]
    pub fn connected() -> Self {
        Self {
            state: Some(RwLock::new(StoreState {
                next_id: 1,
                users: BTreeMap::new(),
            })),
        }
    }

    /// Store with no backing database; every operation fails with 503.
    #[must_use]
    pub fn disconnected() -> Self {
        Self { state: None }
    }

    fn state(&self) -> AppResult<&RwLock<StoreState>> {
        self.state
            .as_ref()
            .ok_or_else(|| AppError::service_unavailable("Database not available"))
    }

    /// List one page of users ordered by id, together with the total count.
    pub fn list(&self, page: u64, page_size: u64) -> AppResult<(Vec<User>, u64)> {
        let state = self.state()?.read().map_err(|_| poisoned())?;
        let total = u64::try_from(state.users.len()).unwrap_or(u64::MAX);
        let offset =
            usize::try_from(page.saturating_sub(1).saturating_mul(page_size)).unwrap_or(usize::MAX);
        let limit = usize::try_from(page_size).unwrap_or(usize::MAX);
        let items = state
            .users
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        Ok((items, total))
    }

    /// Fetch a user by id.
    pub fn get(&self, id: i64) -> AppResult<User> {
        let state = self.state()?.read().map_err(|_| poisoned())?;
        state
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Insert a new user, enforcing email uniqueness.
    pub fn insert(&self, new_user: NewUser) -> AppResult<User> {
        let mut state = self.state()?.write().map_err(|_| poisoned())?;
        if state.users.values().any(|user| user.email == new_user.email) {
            return Err(AppError::conflict("A user with this email already exists"));
        }
        let id = state.next_id;
        state.next_id += 1;
        let now = Utc::now();
        let user = User {
            id,
            email: new_user.email,
            name: new_user.name,
            avatar_url: new_user.avatar_url,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        state.users.insert(id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests;
