/// Keyboard key identifier.
///
/// Minimal set covering what the viewer binds (camera movement, exit) plus the
/// common surrounding keys. Unmapped platform keys arrive as `Key::Unknown`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    /// Platform-dependent key not represented above.
    Unknown,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Modifier keys state.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        /// True when the event is a key-repeat.
        repeat: bool,
    },

    /// Window focus change.
    Focused(bool),
}
