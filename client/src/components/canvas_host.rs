//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns the card collection, the gesture state machine and
//! drawing. This host feeds it DOM pointer/keyboard events, drains cards
//! queued by the header, and mirrors count and selection back into
//! `DeckState` for the chrome.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::deck::DeckState;
#[cfg(feature = "hydrate")]
use crate::util::canvas_input::{map_button, map_key, pointer_point, should_prevent_default_key};
#[cfg(feature = "hydrate")]
use crate::util::canvas_viewport::sync_viewport;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use canvas::doc::Fit;
#[cfg(feature = "hydrate")]
use canvas::engine::{Action, Engine};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
fn render_now(engine: &Engine) {
    if let Err(e) = engine.render() {
        log::warn!("canvas render failed: {e:?}");
    }
}

/// Coalesce render requests into one draw per animation frame.
#[cfg(feature = "hydrate")]
fn request_render(engine: &Rc<RefCell<Option<Engine>>>, raf_pending: RwSignal<bool>) {
    if raf_pending.get_untracked() {
        return;
    }
    raf_pending.set(true);

    let Some(window) = web_sys::window() else {
        raf_pending.set(false);
        if let Some(engine) = engine.borrow().as_ref() {
            render_now(engine);
        }
        return;
    };

    let engine_for_cb = Rc::clone(engine);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        raf_pending.set(false);
        if let Some(engine) = engine_for_cb.borrow().as_ref() {
            render_now(engine);
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else {
        raf_pending.set(false);
        if let Some(engine) = engine.borrow().as_ref() {
            render_now(engine);
        }
    }
}

/// Canvas host component.
///
/// On hydration, this mounts `canvas::engine::Engine`, keeps its container
/// bounds in sync with the element size, and renders on updates.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let deck = expect_context::<RwSignal<DeckState>>();
    #[cfg(feature = "hydrate")]
    let engine: Rc<RefCell<Option<Engine>>> = Rc::new(RefCell::new(None));
    #[cfg(feature = "hydrate")]
    let render_raf_pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let mut instance = Engine::new(canvas);
            let actions = sync_viewport(&mut instance, &canvas_ref);
            process_actions(actions, &instance, deck, &canvas_ref);
            drain_pending(&mut instance, deck, &canvas_ref);
            render_now(&instance);
            log::info!("canvas engine mounted ({}x{})", instance.core.bounds.width, instance.core.bounds.height);
            *engine.borrow_mut() = Some(instance);
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            if deck.with(|d| d.pending.is_empty()) {
                return;
            }
            let mounted = {
                let mut engine_ref = engine.borrow_mut();
                match engine_ref.as_mut() {
                    Some(engine) => {
                        drain_pending(engine, deck, &canvas_ref);
                        true
                    }
                    None => false,
                }
            };
            if mounted {
                request_render(&engine, render_raf_pending);
            }
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let resize_listener = window_event_listener(leptos::ev::resize, move |_ev| {
            let resized = {
                let mut engine_ref = engine.borrow_mut();
                match engine_ref.as_mut() {
                    Some(engine) => {
                        let actions = sync_viewport(engine, &canvas_ref);
                        process_actions(actions, engine, deck, &canvas_ref);
                        true
                    }
                    None => false,
                }
            };
            if resized {
                request_render(&engine, render_raf_pending);
            }
        });
        on_cleanup(move || resize_listener.remove());
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get() {
                    let _ = canvas.focus();
                    let _ = canvas.set_pointer_capture(ev.pointer_id());
                }
                let point = pointer_point(&ev);
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_down(point, map_button(ev.button()));
                    process_actions(actions, engine, deck, &canvas_ref);
                }
                request_render(&engine, render_raf_pending);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let point = pointer_point(&ev);
                let changed = {
                    let mut engine_ref = engine.borrow_mut();
                    match engine_ref.as_mut() {
                        Some(engine) => {
                            let actions = engine.on_pointer_move(point);
                            process_actions(actions, engine, deck, &canvas_ref)
                        }
                        None => false,
                    }
                };
                if changed {
                    request_render(&engine, render_raf_pending);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get() {
                    let _ = canvas.release_pointer_capture(ev.pointer_id());
                }
                let point = pointer_point(&ev);
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_up(point, map_button(ev.button()));
                    process_actions(actions, engine, deck, &canvas_ref);
                }
                request_render(&engine, render_raf_pending);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_key_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::KeyboardEvent| {
                let key = ev.key();
                if should_prevent_default_key(&key) {
                    ev.prevent_default();
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_key_down(&map_key(key));
                    process_actions(actions, engine, deck, &canvas_ref);
                }
                request_render(&engine, render_raf_pending);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::KeyboardEvent| {}
        }
    };

    view! {
        <div class="canvas-container">
            <canvas
                class="canvas-host"
                node_ref=canvas_ref
                tabindex="0"
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up.clone()
                on:pointercancel=on_pointer_up
                on:keydown=on_key_down
            >
                "Your browser does not support canvas."
            </canvas>
        </div>
    }
}

/// Move cards queued by the header into the engine.
#[cfg(feature = "hydrate")]
fn drain_pending(engine: &mut Engine, deck: RwSignal<DeckState>, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let pending = deck.try_update(DeckState::take_pending).unwrap_or_default();
    for card in pending {
        let action = engine.add_card(card.color, Fit::from_unit(card.fit_sample));
        process_actions(vec![action, Action::RenderNeeded], engine, deck, canvas_ref);
    }
}

/// Apply engine actions to the surrounding page. Returns whether a redraw is
/// needed.
#[cfg(feature = "hydrate")]
fn process_actions(
    actions: Vec<Action>,
    engine: &Engine,
    deck: RwSignal<DeckState>,
    canvas_ref: &NodeRef<leptos::html::Canvas>,
) -> bool {
    let mut needs_render = false;
    for action in actions {
        match action {
            Action::CardAdded(card) => {
                log::info!("card {} added ({}, {})", card.id, card.color, card.fit.as_str());
                needs_render = true;
            }
            Action::CardUpdated(card) => {
                if card.update_end {
                    log::debug!(
                        "card {} committed at ({}, {}) {}x{}",
                        card.id,
                        card.left,
                        card.top,
                        card.width,
                        card.height
                    );
                }
                needs_render = true;
            }
            Action::CardRemoved { id } => {
                log::info!("card {id} removed");
                needs_render = true;
            }
            Action::SelectionChanged(selected) => {
                let selected = selected.map(|id| id.0);
                if deck.with_untracked(|d| d.selected != selected) {
                    deck.update(|d| d.selected = selected);
                }
                needs_render = true;
            }
            Action::SetCursor(cursor) => {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    if let Err(e) = canvas.style().set_property("cursor", &cursor) {
                        log::warn!("failed to set cursor: {e:?}");
                    }
                }
            }
            Action::RenderNeeded => needs_render = true,
        }
    }

    let count = engine.cards().len();
    if deck.with_untracked(|d| d.card_count != count) {
        deck.update(|d| d.card_count = count);
    }
    needs_render
}
