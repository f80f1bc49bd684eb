//! Tests for the in-memory user store.

use rstest::{fixture, rstest};

use super::UserStore;
use crate::domain::error::ErrorCode;
use crate::models::NewUser;

#[fixture]
fn store() -> UserStore {
    UserStore::connected()
}

fn draft(email: &str, name: &str) -> NewUser {
    NewUser {
        email: email.to_owned(),
        name: name.to_owned(),
        avatar_url: None,
    }
}

#[rstest]
fn insert_assigns_monotonic_ids(store: UserStore) {
    let first = store.insert(draft("ada@example.com", "Ada")).expect("insert");
    let second = store
        .insert(draft("grace@example.com", "Grace"))
        .expect("insert");

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert!(first.is_active);
    assert_eq!(first.created_at, first.updated_at);
}

#[rstest]
fn insert_rejects_duplicate_emails(store: UserStore) {
    store.insert(draft("ada@example.com", "Ada")).expect("insert");
    let error = store
        .insert(draft("ada@example.com", "Imposter"))
        .expect_err("duplicate");
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[rstest]
fn get_reports_missing_users(store: UserStore) {
    let error = store.get(99).expect_err("missing");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "User not found");
}

#[rstest]
fn get_returns_inserted_users(store: UserStore) {
    let inserted = store.insert(draft("ada@example.com", "Ada")).expect("insert");
    let fetched = store.get(inserted.id).expect("present");
    assert_eq!(fetched, inserted);
}

#[rstest]
fn list_windows_and_counts(store: UserStore) {
    for (email, name) in [
        ("a@example.com", "Aa"),
        ("b@example.com", "Bb"),
        ("c@example.com", "Cc"),
    ] {
        store.insert(draft(email, name)).expect("insert");
    }

    let (page, total) = store.list(2, 1).expect("list");
    assert_eq!(total, 3);
    assert_eq!(page.len(), 1);
    assert_eq!(page.first().map(|user| user.id), Some(2));
}

#[rstest]
fn list_beyond_the_last_page_is_empty(store: UserStore) {
    store.insert(draft("a@example.com", "Aa")).expect("insert");
    let (page, total) = store.list(5, 20).expect("list");
    assert_eq!(total, 1);
    assert!(page.is_empty());
}

#[test]
fn disconnected_store_reports_service_unavailable() {
    let store = UserStore::disconnected();

    let list_error = store.list(1, 20).expect_err("disconnected");
    assert_eq!(list_error.code(), ErrorCode::ServiceUnavailable);

    let get_error = store.get(1).expect_err("disconnected");
    assert_eq!(get_error.code(), ErrorCode::ServiceUnavailable);

    let insert_error = store
        .insert(NewUser {
            email: "ada@example.com".to_owned(),
            name: "Ada".to_owned(),
            avatar_url: None,
        })
        .expect_err("disconnected");
    assert_eq!(insert_error.code(), ErrorCode::ServiceUnavailable);
    assert_eq!(insert_error.message(), "Database not available");
}
