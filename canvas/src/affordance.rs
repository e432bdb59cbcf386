//! Affordances: buttons attached to the selected card.
//!
//! An affordance knows where it sits relative to a card and what action it
//! produces when clicked. The engine hit-tests affordances before resize
//! handles and card bodies, and the renderer draws them as labelled buttons.

#[cfg(test)]
#[path = "affordance_test.rs"]
mod affordance_test;

use crate::consts::{AFFORDANCE_GAP, AFFORDANCE_HEIGHT, AFFORDANCE_WIDTH};
use crate::doc::{Card, CardId};
use crate::engine::Action;
use crate::geometry::{Bounds, Rect};

/// A clickable control rendered next to the selected card.
pub trait Affordance {
    /// Stable name used for logging and lookups.
    fn name(&self) -> &'static str;

    /// Text drawn on the button.
    fn label(&self) -> &str;

    /// Where the button sits for `card` inside a container of `bounds`.
    fn rect(&self, card: &Card, bounds: Bounds) -> Rect;

    /// The action emitted when the button is clicked on card `id`.
    fn activate(&self, id: CardId) -> Action;
}

/// Removes the card it is attached to.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveButton;

impl Affordance for RemoveButton {
    fn name(&self) -> &'static str {
        "removeable"
    }

    fn label(&self) -> &str {
        "Remove"
    }

    /// Centered under the card when it fits inside the container, otherwise
    /// tucked inside the card's top edge.
    fn rect(&self, card: &Card, bounds: Bounds) -> Rect {
        let rect = card.rect();
        let left = rect.left + (rect.width - AFFORDANCE_WIDTH) / 2;
        let left = left.clamp(0, (bounds.width - AFFORDANCE_WIDTH).max(0));
        let below = rect.bottom() + AFFORDANCE_GAP;
        let top = if below + AFFORDANCE_HEIGHT <= bounds.height {
            below
        } else {
            rect.top + AFFORDANCE_GAP
        };
        Rect::new(left, top, AFFORDANCE_WIDTH, AFFORDANCE_HEIGHT)
    }

    fn activate(&self, id: CardId) -> Action {
        Action::CardRemoved { id }
    }
}

/// The affordances every engine starts with.
#[must_use]
pub fn default_affordances() -> Vec<Box<dyn Affordance>> {
    vec![Box::new(RemoveButton)]
}
