//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The card collection itself lives inside the canvas engine. `deck` only
//! mirrors what the surrounding chrome needs to display and queues cards
//! whose colors have arrived but have not reached the engine yet.

pub mod deck;
