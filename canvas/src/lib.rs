//! Canvas engine for the moveable card board.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! card collection, the geometry that keeps every card inside its container,
//! the pointer gesture state machine (select, drag, resize, remove), and the
//! 2D rendering of the scene. The host UI layer only wires DOM events to the
//! engine and reacts to the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Card type and the ordered [`doc::CardList`] |
//! | [`geometry`] | Points, rectangles, container bounds and the clamp rules |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing against cards, handles and affordances |
//! | [`affordance`] | Buttons attached to the selected card (e.g. "Remove") |
//! | [`render`] | Scene rendering to a `CanvasRenderingContext2d` |
//! | [`consts`] | Shared numeric constants (default sizes, handle slop, etc.) |

pub mod affordance;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod render;
