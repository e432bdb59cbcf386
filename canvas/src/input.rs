//! Input model: mouse buttons, keys, and the gesture state machine.
//!
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up. Each active variant carries the card's box at gesture start so
//! every pointer-move recomputes the transform from the same origin instead
//! of accumulating rounding error.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::CardId;
use crate::geometry::{Point, Rect};
use crate::hit::ResizeAnchor;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this key deletes the current selection.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected card, if any.
    pub selected_id: Option<CardId>,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving a card across the container.
    DraggingCard {
        /// Id of the card being dragged.
        id: CardId,
        /// Pointer position at pointer-down.
        start: Point,
        /// Card box at pointer-down.
        orig: Rect,
    },
    /// The user is resizing a card by dragging one of its eight handles.
    ResizingCard {
        /// Id of the card being resized.
        id: CardId,
        /// Which corner/edge handle is being dragged.
        anchor: ResizeAnchor,
        /// Pointer position at pointer-down.
        start: Point,
        /// Card box at pointer-down.
        orig: Rect,
    },
}

impl InputState {
    /// The card being transformed by the active gesture, if any.
    #[must_use]
    pub fn active_card(&self) -> Option<CardId> {
        match self {
            Self::Idle => None,
            Self::DraggingCard { id, .. } | Self::ResizingCard { id, .. } => Some(*id),
        }
    }
}
