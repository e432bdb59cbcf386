//! Networking modules for the placeholder photo API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and derives card colors, `types` defines the
//! response schema.

pub mod api;
pub mod types;
