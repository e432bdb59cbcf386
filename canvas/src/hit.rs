#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::affordance::Affordance;
use crate::consts::HANDLE_RADIUS_PX;
use crate::doc::{CardId, CardList};
use crate::geometry::{Bounds, Point, Rect};

/// Which part of a card was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeAnchor),
    /// Index into the engine's affordance list.
    Affordance(usize),
}

/// Anchor position for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

/// Which edges of the box a resize handle moves.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub west: bool,
    pub east: bool,
    pub north: bool,
    pub south: bool,
}

impl ResizeAnchor {
    /// All eight handles, clockwise from the top edge.
    pub const ALL: [ResizeAnchor; 8] = [
        ResizeAnchor::N,
        ResizeAnchor::Ne,
        ResizeAnchor::E,
        ResizeAnchor::Se,
        ResizeAnchor::S,
        ResizeAnchor::Sw,
        ResizeAnchor::W,
        ResizeAnchor::Nw,
    ];

    /// The edges dragged by this handle.
    #[must_use]
    pub fn edges(self) -> Edges {
        match self {
            Self::N => Edges { north: true, ..Edges::default() },
            Self::Ne => Edges { north: true, east: true, ..Edges::default() },
            Self::E => Edges { east: true, ..Edges::default() },
            Self::Se => Edges { south: true, east: true, ..Edges::default() },
            Self::S => Edges { south: true, ..Edges::default() },
            Self::Sw => Edges { south: true, west: true, ..Edges::default() },
            Self::W => Edges { west: true, ..Edges::default() },
            Self::Nw => Edges { north: true, west: true, ..Edges::default() },
        }
    }

    /// Center of this handle on the boundary of `rect`.
    #[must_use]
    pub fn handle_point(self, rect: Rect) -> Point {
        let left = f64::from(rect.left);
        let top = f64::from(rect.top);
        let right = f64::from(rect.right());
        let bottom = f64::from(rect.bottom());
        let mid_x = (left + right) / 2.0;
        let mid_y = (top + bottom) / 2.0;
        match self {
            Self::N => Point::new(mid_x, top),
            Self::Ne => Point::new(right, top),
            Self::E => Point::new(right, mid_y),
            Self::Se => Point::new(right, bottom),
            Self::S => Point::new(mid_x, bottom),
            Self::Sw => Point::new(left, bottom),
            Self::W => Point::new(left, mid_y),
            Self::Nw => Point::new(left, top),
        }
    }

    /// CSS cursor shown while hovering or dragging this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::N | Self::S => "ns-resize",
            Self::E | Self::W => "ew-resize",
            Self::Ne | Self::Sw => "nesw-resize",
            Self::Nw | Self::Se => "nwse-resize",
        }
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub card_id: CardId,
    pub part: HitPart,
}

/// Test which card (if any) is under `pt`.
///
/// The selected card's affordances and resize handles win over any card
/// body; bodies are tested topmost first.
#[must_use]
pub fn hit_test(
    pt: Point,
    cards: &CardList,
    bounds: Bounds,
    selected_id: Option<CardId>,
    affordances: &[Box<dyn Affordance>],
) -> Option<Hit> {
    if let Some(card) = selected_id.and_then(|id| cards.get(id)) {
        for (idx, affordance) in affordances.iter().enumerate() {
            if affordance.rect(card, bounds).contains(pt) {
                return Some(Hit { card_id: card.id, part: HitPart::Affordance(idx) });
            }
        }
        let rect = card.rect();
        for anchor in ResizeAnchor::ALL {
            let handle = anchor.handle_point(rect);
            if (pt.x - handle.x).abs() <= HANDLE_RADIUS_PX && (pt.y - handle.y).abs() <= HANDLE_RADIUS_PX {
                return Some(Hit { card_id: card.id, part: HitPart::ResizeHandle(anchor) });
            }
        }
    }

    cards
        .iter()
        .rev()
        .find(|card| card.rect().contains(pt))
        .map(|card| Hit { card_id: card.id, part: HitPart::Body })
}
