//! Backend library modules.
//!
//! A small CRUD API starter built around three pieces: a transport-agnostic
//! error and result core ([`domain`]), the uniform response envelope and the
//! handler adapters every route goes through ([`api`]), and narrow
//! collaborators for persistence and configuration ([`storage`], [`server`]).

pub mod api;
pub mod doc;
pub mod domain;
pub mod models;
pub mod server;
pub mod storage;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
