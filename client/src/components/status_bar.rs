//! Bottom status bar showing card count, selection and color-fetch status.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders low-frequency board telemetry. Color lookup failures land here so
//! a failed "Add Moveable" click is visible without opening the console.

#[cfg(test)]
#[path = "status_bar_test.rs"]
mod status_bar_test;

use leptos::prelude::*;

use crate::state::deck::{DeckState, FetchStatus};

/// Status bar at the bottom of the board page.
#[component]
pub fn StatusBar() -> impl IntoView {
    let deck = expect_context::<RwSignal<DeckState>>();

    let count = move || format_card_count(deck.get().card_count);
    let selection = move || format_selection(deck.get().selected);
    let fetch_class = move || fetch_status_class(&deck.get().fetch);
    let fetch_label = move || format_fetch_status(&deck.get().fetch);
    let last_color = move || deck.get().last_color;

    view! {
        <div class="status-bar">
            <div class="status-bar__section">
                <span class="status-bar__item">{count}</span>
                <span class="status-bar__divider"></span>
                <span class="status-bar__item">{selection}</span>
            </div>

            <span class="status-bar__spacer"></span>

            <div class="status-bar__section">
                {move || {
                    last_color()
                        .map(|color| {
                            view! {
                                <span class="status-bar__item">
                                    <span class="status-bar__swatch" style=format!("background: {color};")></span>
                                    {color.clone()}
                                </span>
                                <span class="status-bar__divider"></span>
                            }
                        })
                }}
                <span class=fetch_class>{fetch_label}</span>
            </div>
        </div>
    }
}

fn format_card_count(count: usize) -> String {
    match count {
        1 => "1 card".to_owned(),
        n => format!("{n} cards"),
    }
}

fn format_selection(selected: Option<u64>) -> String {
    match selected {
        Some(id) => format!("selected #{id}"),
        None => "no selection".to_owned(),
    }
}

fn format_fetch_status(status: &FetchStatus) -> String {
    match status {
        FetchStatus::Idle => "ready".to_owned(),
        FetchStatus::Loading => "fetching color…".to_owned(),
        FetchStatus::Failed(message) => format!("color fetch failed: {message}"),
    }
}

fn fetch_status_class(status: &FetchStatus) -> &'static str {
    match status {
        FetchStatus::Idle => "status-bar__item",
        FetchStatus::Loading => "status-bar__item status-bar__item--loading",
        FetchStatus::Failed(_) => "status-bar__item status-bar__item--error",
    }
}
