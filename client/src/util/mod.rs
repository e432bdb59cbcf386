//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser event plumbing from page and component
//! logic so the canvas host stays small.

pub mod canvas_input;
pub mod canvas_viewport;
