//! Canvas input mapping and pointer helper utilities.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

#[cfg(feature = "hydrate")]
use canvas::geometry::Point as CanvasPoint;
#[cfg(feature = "hydrate")]
use canvas::input::{Button as CanvasButton, Key as CanvasKey};

#[cfg(feature = "hydrate")]
pub fn map_button(button: i16) -> CanvasButton {
    match button {
        1 => CanvasButton::Middle,
        2 => CanvasButton::Secondary,
        _ => CanvasButton::Primary,
    }
}

#[cfg(feature = "hydrate")]
pub fn map_key(key: String) -> CanvasKey {
    CanvasKey(key)
}

/// Keys the board consumes; the browser default would scroll or navigate back.
#[cfg(any(test, feature = "hydrate"))]
pub fn should_prevent_default_key(key: &str) -> bool {
    matches!(key, "Delete" | "Backspace" | "Escape")
}

#[cfg(feature = "hydrate")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}
