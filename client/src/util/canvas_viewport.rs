//! Canvas viewport synchronization shared by the canvas host.
//!
//! These helpers bridge the Leptos reactive world and the imperative canvas
//! engine. They are `#[cfg(feature = "hydrate")]` because they depend on
//! `web_sys` and DOM nodes that only exist in the browser.

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use canvas::engine::{Action, Engine};

/// Read the canvas element's CSS dimensions and device pixel ratio, then push
/// them to the engine as the container bounds.
///
/// Must be called on every resize event. Cards that no longer fit are pulled
/// back inside and reported through the returned actions.
#[cfg(feature = "hydrate")]
pub fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) -> Vec<Action> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let Some(canvas) = canvas_ref.get() else {
        return Vec::new();
    };
    let width = f64::from(canvas.client_width());
    let height = f64::from(canvas.client_height());
    let dpr = window.device_pixel_ratio().max(1.0);
    engine.set_viewport(width, height, dpr)
}
