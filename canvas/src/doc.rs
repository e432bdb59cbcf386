//! Document model: cards, their display properties, and the ordered list.
//!
//! This module defines the only entity on the board (`Card`), the wholesale
//! replacement payload used by updates (`CardPatch`), the identifier counter
//! (`CardIds`), and the runtime collection (`CardList`).
//!
//! `CardList` is ordered: insertion order is z-order is render order. Its
//! `add`, `update` and `remove` operations are pure: they leave `self`
//! untouched and return the next list, so the engine can swap the whole
//! collection in one assignment.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Unique identifier for a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the card's image is fitted inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fit {
    /// Natural size, centered.
    #[default]
    Auto,
    /// Scaled down to fit entirely inside the box.
    Contain,
    /// Scaled to cover the whole box, cropping the overflow.
    Cover,
}

impl Fit {
    /// Every fit mode, in selection order.
    pub const ALL: [Fit; 3] = [Fit::Auto, Fit::Contain, Fit::Cover];

    /// CSS `background-size` keyword for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Contain => "contain",
            Self::Cover => "cover",
        }
    }

    /// Pick a mode from a uniform sample in `[0, 1)`.
    ///
    /// Out-of-range samples are clamped to the first or last mode.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn from_unit(sample: f64) -> Self {
        let len = Self::ALL.len();
        let idx = if sample.is_nan() || sample <= 0.0 {
            0
        } else {
            ((sample * len as f64).floor() as usize).min(len - 1)
        };
        Self::ALL[idx]
    }
}

/// A card as stored in the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card.
    pub id: CardId,
    /// Offset of the top edge from the container origin, in pixels.
    pub top: i32,
    /// Offset of the left edge from the container origin, in pixels.
    pub left: i32,
    /// Box width in pixels.
    pub width: i32,
    /// Box height in pixels.
    pub height: i32,
    /// CSS color drawn as the card background.
    pub color: String,
    /// Display fit mode.
    pub fit: Fit,
    /// `true` once the last transform was committed by a finished gesture.
    pub update_end: bool,
}

impl Card {
    /// The card's box as a rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }
}

/// Everything a card carries except its identity and commit flag.
///
/// `CardList::update` replaces the matching card wholesale with these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPatch {
    pub top: i32,
    pub left: i32,
    pub width: i32,
    pub height: i32,
    pub color: String,
    pub fit: Fit,
}

impl CardPatch {
    /// Snapshot the replaceable fields of an existing card.
    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        Self {
            top: card.top,
            left: card.left,
            width: card.width,
            height: card.height,
            color: card.color.clone(),
            fit: card.fit,
        }
    }

    /// Replace the geometry of this patch with `rect`.
    #[must_use]
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.left = rect.left;
        self.top = rect.top;
        self.width = rect.width;
        self.height = rect.height;
        self
    }
}

/// Monotonic identifier source. Never hands out the same id twice.
#[derive(Debug, Clone, Default)]
pub struct CardIds {
    next: u64,
}

impl CardIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next identifier.
    pub fn next_id(&mut self) -> CardId {
        self.next += 1;
        CardId(self.next)
    }
}

/// Ordered collection of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardList {
    cards: Vec<Card>,
}

impl CardList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Return a list with `card` appended at the top of the stack.
    ///
    /// Identifier collisions are not checked.
    #[must_use]
    pub fn add(&self, card: Card) -> Self {
        let mut cards = Vec::with_capacity(self.cards.len() + 1);
        cards.extend(self.cards.iter().cloned());
        cards.push(card);
        Self { cards }
    }

    /// Return a list where every card with `id` is replaced by
    /// `{id, ...patch, update_end}`. Unknown ids leave the list unchanged.
    #[must_use]
    pub fn update(&self, id: CardId, patch: &CardPatch, update_end: bool) -> Self {
        let cards = self
            .cards
            .iter()
            .map(|card| {
                if card.id == id {
                    Card {
                        id,
                        top: patch.top,
                        left: patch.left,
                        width: patch.width,
                        height: patch.height,
                        color: patch.color.clone(),
                        fit: patch.fit,
                        update_end,
                    }
                } else {
                    card.clone()
                }
            })
            .collect();
        Self { cards }
    }

    /// Return a list without any card carrying `id`.
    #[must_use]
    pub fn remove(&self, id: CardId) -> Self {
        let cards = self
            .cards
            .iter()
            .filter(|card| card.id != id)
            .cloned()
            .collect();
        Self { cards }
    }

    /// First card with `id`, if any.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Whether any card carries `id`.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    /// Number of cards carrying `id`.
    #[must_use]
    pub fn count(&self, id: CardId) -> usize {
        self.cards.iter().filter(|card| card.id == id).count()
    }

    /// Cards in render order (bottom first).
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Cards as a slice in render order.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the list holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<'a> IntoIterator for &'a CardList {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
