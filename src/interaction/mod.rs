//! Per-item gesture state machine for edit mode, dragging, and resizing.

pub mod controller;
pub mod gesture;

pub use controller::{EditSession, InteractionController, TimeChange};
pub use gesture::{GestureState, ResizeHandle};
