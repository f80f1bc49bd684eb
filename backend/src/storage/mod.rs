//! Persistence collaborators consumed by the API through narrow interfaces.

pub mod users;

pub use users::UserStore;
