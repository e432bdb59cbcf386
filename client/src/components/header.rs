//! Top bar with the board title and the "Add Moveable" control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Adding a card is a two-step flow: fetch a color, then queue the card in
//! `DeckState` for the canvas host to create. The button stays enabled while
//! a request is in flight so repeated clicks queue several cards.

use leptos::prelude::*;

use crate::state::deck::DeckState;

/// Top header for the board page.
#[component]
pub fn Header() -> impl IntoView {
    let deck = expect_context::<RwSignal<DeckState>>();

    let on_add = move |_| {
        deck.update(DeckState::begin_fetch);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_random_color().await;
                match &result {
                    Ok(color) => log::info!("fetched card color {color}"),
                    Err(e) => log::warn!("color fetch failed: {e}"),
                }
                let fit_sample = js_sys::Math::random();
                deck.update(|d| d.finish_fetch(result, fit_sample));
            });
        }
    };

    let button_class = move || {
        if deck.get().is_loading() { "btn toolbar__add toolbar__add--busy" } else { "btn toolbar__add" }
    };

    view! {
        <div class="toolbar">
            <span class="toolbar__board-name">"Moveboard"</span>
            <span class="toolbar__divider"></span>
            <span class="toolbar__spacer"></span>

            <button
                class=button_class
                on:click=on_add
                title="Add a card with a random color"
            >
                "Add Moveable"
            </button>
        </div>
    }
}
