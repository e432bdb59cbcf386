use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::affordance::{Affordance, default_affordances};
use crate::consts::DEFAULT_CARD_SIZE;
use crate::doc::{Card, CardId, CardIds, CardList, CardPatch, Fit};
use crate::geometry::{Bounds, Point, Rect, clamp_size, drag_rect, fit_rect, pixel_delta, resize_rect};
use crate::hit::{HitPart, hit_test};
use crate::input::{Button, InputState, Key, UiState};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CardAdded(Card),
    /// A card changed; `update_end` on the card tells preview from commit.
    CardUpdated(Card),
    CardRemoved { id: CardId },
    SelectionChanged(Option<CardId>),
    SetCursor(String),
    RenderNeeded,
}

/// Core engine state: all logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub cards: CardList,
    pub ids: CardIds,
    pub ui: UiState,
    pub input: InputState,
    pub bounds: Bounds,
    pub dpr: f64,
    affordances: Vec<Box<dyn Affordance>>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            cards: CardList::new(),
            ids: CardIds::new(),
            ui: UiState::default(),
            input: InputState::default(),
            bounds: Bounds::default(),
            dpr: 1.0,
            affordances: default_affordances(),
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a known container size.
    #[must_use]
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self { bounds, ..Self::default() }
    }

    // --- Collection ---

    /// Append a new card at the container origin.
    ///
    /// The default size is clamped to the container once its bounds are known.
    pub fn add_card(&mut self, color: String, fit: Fit) -> Action {
        let (width, height) = if self.bounds.is_valid() {
            clamp_size(0, 0, DEFAULT_CARD_SIZE, DEFAULT_CARD_SIZE, self.bounds)
        } else {
            (DEFAULT_CARD_SIZE, DEFAULT_CARD_SIZE)
        };
        let card = Card {
            id: self.ids.next_id(),
            top: 0,
            left: 0,
            width,
            height,
            color,
            fit,
            update_end: true,
        };
        self.cards = self.cards.add(card.clone());
        Action::CardAdded(card)
    }

    /// Replace card `id` wholesale. Returns the updated card, or `None` when
    /// no card has that id.
    pub fn update_card(&mut self, id: CardId, patch: &CardPatch, update_end: bool) -> Option<Action> {
        self.cards = self.cards.update(id, patch, update_end);
        self.cards.get(id).cloned().map(Action::CardUpdated)
    }

    /// Remove card `id`, dropping it from the selection and any active gesture.
    pub fn remove_card(&mut self, id: CardId) -> Vec<Action> {
        let mut actions = Vec::new();
        if !self.cards.contains(id) {
            return actions;
        }
        self.cards = self.cards.remove(id);
        if self.input.active_card() == Some(id) {
            self.input = InputState::Idle;
        }
        actions.push(Action::CardRemoved { id });
        if self.ui.selected_id == Some(id) {
            self.ui.selected_id = None;
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Viewport ---

    /// Resize the container. Cards that no longer fit are pulled back inside
    /// and reported as committed updates. Empty sizes are ignored.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
        let bounds = Bounds::from_css(width_css, height_css);
        if !bounds.is_valid() || bounds == self.bounds {
            return Vec::new();
        }
        self.bounds = bounds;

        let mut actions = Vec::new();
        let misfits: Vec<(CardId, CardPatch, Rect)> = self
            .cards
            .iter()
            .filter_map(|card| {
                let fitted = fit_rect(card.rect(), bounds);
                (fitted != card.rect()).then(|| (card.id, CardPatch::from_card(card), fitted))
            })
            .collect();
        for (id, patch, fitted) in misfits {
            actions.extend(self.update_card(id, &patch.with_rect(fitted), true));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        // A lost pointer-up leaves the previous gesture open; commit it where it stands.
        let mut actions: Vec<Action> = self.commit_active().into_iter().collect();
        let hit = hit_test(pt, &self.cards, self.bounds, self.ui.selected_id, &self.affordances);

        match hit {
            Some(hit) => match hit.part {
                HitPart::Affordance(idx) => {
                    if let Some(affordance) = self.affordances.get(idx) {
                        let action = affordance.activate(hit.card_id);
                        actions.extend(self.apply_affordance_action(action));
                    }
                }
                HitPart::ResizeHandle(anchor) => {
                    if let Some(card) = self.cards.get(hit.card_id) {
                        self.input = InputState::ResizingCard { id: card.id, anchor, start: pt, orig: card.rect() };
                        actions.push(Action::SetCursor(anchor.cursor().to_owned()));
                    }
                }
                HitPart::Body => {
                    if let Some(card) = self.cards.get(hit.card_id) {
                        self.input = InputState::DraggingCard { id: card.id, start: pt, orig: card.rect() };
                        actions.push(Action::SetCursor("move".to_owned()));
                    }
                    actions.extend(self.select(Some(hit.card_id)));
                }
            },
            None => actions.extend(self.select(None)),
        }

        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        if matches!(self.input, InputState::Idle) {
            return vec![Action::SetCursor(self.hover_cursor(pt).to_owned())];
        }
        let mut actions: Vec<Action> = self.transform_active(pt, false).into_iter().collect();
        if !actions.is_empty() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    pub fn on_pointer_up(&mut self, pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || matches!(self.input, InputState::Idle) {
            return Vec::new();
        }
        let mut actions: Vec<Action> = self.transform_active(pt, true).into_iter().collect();
        self.input = InputState::Idle;
        actions.push(Action::SetCursor(self.hover_cursor(pt).to_owned()));
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        if key.is_delete() {
            return self.remove_card(id);
        }
        if key.is_escape() {
            let mut actions: Vec<Action> = self.cancel_active().into_iter().collect();
            actions.extend(self.select(None));
            actions.push(Action::RenderNeeded);
            return actions;
        }
        Vec::new()
    }

    // --- Queries ---

    /// The currently selected card, if any.
    #[must_use]
    pub fn selection(&self) -> Option<CardId> {
        self.ui.selected_id
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// The affordances offered on the selected card.
    #[must_use]
    pub fn affordances(&self) -> &[Box<dyn Affordance>] {
        &self.affordances
    }

    // --- Internals ---

    fn select(&mut self, id: Option<CardId>) -> Option<Action> {
        if self.ui.selected_id == id {
            return None;
        }
        self.ui.selected_id = id;
        Some(Action::SelectionChanged(id))
    }

    fn apply_affordance_action(&mut self, action: Action) -> Vec<Action> {
        match action {
            Action::CardRemoved { id } => self.remove_card(id),
            other => vec![other],
        }
    }

    /// Close the active gesture, committing the card at its current box.
    fn commit_active(&mut self) -> Option<Action> {
        let id = self.input.active_card()?;
        self.input = InputState::Idle;
        let card = self.cards.get(id)?;
        if card.update_end {
            return None;
        }
        let patch = CardPatch::from_card(card);
        self.update_card(id, &patch, true)
    }

    /// Abort the active gesture, restoring the card's box from before it began.
    fn cancel_active(&mut self) -> Option<Action> {
        let (id, orig) = match self.input {
            InputState::Idle => return None,
            InputState::DraggingCard { id, orig, .. } | InputState::ResizingCard { id, orig, .. } => (id, orig),
        };
        self.input = InputState::Idle;
        let card = self.cards.get(id)?;
        if card.update_end && card.rect() == orig {
            return None;
        }
        let patch = CardPatch::from_card(card).with_rect(orig);
        self.update_card(id, &patch, true)
    }

    /// Recompute the active gesture's box from its start state and write it
    /// to the card list. Live moves and the final commit share this path.
    fn transform_active(&mut self, pt: Point, update_end: bool) -> Option<Action> {
        let (id, rect) = match self.input {
            InputState::Idle => return None,
            InputState::DraggingCard { id, start, orig } => {
                let (dx, dy) = pixel_delta(start, pt);
                (id, drag_rect(orig, dx, dy, self.bounds))
            }
            InputState::ResizingCard { id, anchor, start, orig } => {
                let (dx, dy) = pixel_delta(start, pt);
                (id, resize_rect(orig, anchor, dx, dy, self.bounds))
            }
        };
        let card = self.cards.get(id)?;
        if !update_end && card.rect() == rect && !card.update_end {
            return None;
        }
        let patch = CardPatch::from_card(card).with_rect(rect);
        self.update_card(id, &patch, update_end)
    }

    fn hover_cursor(&self, pt: Point) -> &'static str {
        match hit_test(pt, &self.cards, self.bounds, self.ui.selected_id, &self.affordances).map(|h| h.part) {
            Some(HitPart::ResizeHandle(anchor)) => anchor.cursor(),
            Some(HitPart::Affordance(_)) => "pointer",
            Some(HitPart::Body) => "move",
            None => "default",
        }
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    // --- Delegated collection operations ---

    pub fn add_card(&mut self, color: String, fit: Fit) -> Action {
        self.core.add_card(color, fit)
    }

    pub fn update_card(&mut self, id: CardId, patch: &CardPatch, update_end: bool) -> Option<Action> {
        self.core.update_card(id, patch, update_end)
    }

    pub fn remove_card(&mut self, id: CardId) -> Vec<Action> {
        self.core.remove_card(id)
    }

    // --- Viewport ---

    /// Update the container size and device pixel ratio, resizing the
    /// canvas backing store to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        let actions = self.core.set_viewport(width_css, height_css, dpr);
        let backing_w = (width_css * self.core.dpr).round().max(0.0) as u32;
        let backing_h = (height_css * self.core.dpr).round().max(0.0) as u32;
        if self.canvas.width() != backing_w {
            self.canvas.set_width(backing_w);
        }
        if self.canvas.height() != backing_h {
            self.canvas.set_height(backing_h);
        }
        actions
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(pt, button)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_up(&mut self, pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(pt, button)
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        self.core.on_key_down(key)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&ctx, &self.core.cards, &self.core.ui, self.core.affordances(), self.core.bounds, self.core.dpr)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<CardId> {
        self.core.selection()
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.core.card(id)
    }

    #[must_use]
    pub fn cards(&self) -> &CardList {
        &self.core.cards
    }
}
