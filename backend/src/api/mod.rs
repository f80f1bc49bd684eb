//! HTTP surface: response envelopes, handler adapters, and route handlers.

pub mod error;
pub mod handler;
pub mod health;
pub mod response;
pub mod users;
