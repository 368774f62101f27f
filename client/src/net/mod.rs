//! Networking modules for the users REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the `UsersApi` capability and its `fetch` implementation,
//! `error` the call failure type, and `types` the wire schema.

pub mod api;
pub mod error;
pub mod types;
