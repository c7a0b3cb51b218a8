//! Keyboard input.
//!
//! The public API is platform-agnostic and does not expose winit types; the
//! runtime translates window-system events into `InputEvent`s. The viewer is
//! keyboard-driven, so pointer input is out of scope here.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, Modifiers};
