//! Shared numeric constants for the canvas crate.

// ── Cards ───────────────────────────────────────────────────────

/// Width and height of a freshly added card, in CSS pixels.
pub const DEFAULT_CARD_SIZE: i32 = 100;

/// Smallest width or height a resize gesture may produce.
pub const MIN_CARD_SIZE: i32 = 10;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels around each resize handle.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Drawn side length of a resize handle square.
pub const HANDLE_SIZE_PX: f64 = 8.0;

// ── Affordances ─────────────────────────────────────────────────

/// Width of an affordance button attached to the selected card.
pub const AFFORDANCE_WIDTH: i32 = 64;

/// Height of an affordance button attached to the selected card.
pub const AFFORDANCE_HEIGHT: i32 = 24;

/// Gap between the card edge and its affordance button.
pub const AFFORDANCE_GAP: i32 = 6;
