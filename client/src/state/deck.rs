//! Deck state shared between the header, canvas host and status bar.
//!
//! DATA FLOW
//! =========
//! 1. The header calls `begin_fetch` and starts the color request.
//! 2. On completion `finish_fetch` either queues a `PendingCard` or records
//!    the failure.
//! 3. The canvas host drains the queue with `take_pending`, adds the cards to
//!    the engine, and mirrors the engine's count and selection back here.

#[cfg(test)]
#[path = "deck_test.rs"]
mod deck_test;

use std::collections::VecDeque;

/// A card whose color is known but which the engine has not created yet.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingCard {
    /// CSS color string, e.g. `#92c952`.
    pub color: String,
    /// Unit sample used to pick the card's fit mode.
    pub fit_sample: f64,
}

/// Progress of the most recent color request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// Chrome-facing view of the board.
#[derive(Clone, Debug, Default)]
pub struct DeckState {
    pub pending: VecDeque<PendingCard>,
    pub card_count: usize,
    pub selected: Option<u64>,
    pub fetch: FetchStatus,
    pub in_flight: usize,
    pub last_color: Option<String>,
}

impl DeckState {
    /// Record that a color request has started.
    pub fn begin_fetch(&mut self) {
        self.in_flight += 1;
        self.fetch = FetchStatus::Loading;
    }

    /// Record the outcome of a color request.
    ///
    /// A success queues a pending card. A failure is kept for display until
    /// the next `begin_fetch` and adds nothing.
    pub fn finish_fetch(&mut self, result: Result<String, String>, fit_sample: f64) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(color) => {
                self.last_color = Some(color.clone());
                self.pending.push_back(PendingCard { color, fit_sample });
                // A failure stays visible until the next click starts a request.
                if !matches!(self.fetch, FetchStatus::Failed(_)) {
                    self.fetch = if self.in_flight > 0 { FetchStatus::Loading } else { FetchStatus::Idle };
                }
            }
            Err(message) => {
                self.fetch = FetchStatus::Failed(message);
            }
        }
    }

    /// Drain every queued card in arrival order.
    pub fn take_pending(&mut self) -> Vec<PendingCard> {
        self.pending.drain(..).collect()
    }

    /// Whether at least one color request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}
