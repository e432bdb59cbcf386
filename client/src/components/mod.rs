//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render board chrome and the canvas surface while reading and
//! writing shared state from Leptos context providers.

pub mod canvas_host;
pub mod header;
pub mod status_bar;
