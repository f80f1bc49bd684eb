//! Wire and data models.

pub mod user;

pub use user::{NewUser, NewUserInput, User};
