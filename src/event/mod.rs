//! Window-system independent input events.

/// The state of a keyboard key reported by an event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// The key was released.
    Release,
    /// The key was pressed.
    Press,
    /// The key is held down and the platform emitted an auto-repeat.
    Repeat,
}

impl Action {
    /// Returns `true` for `Press` and `Repeat`.
    #[inline]
    pub fn is_down(self) -> bool {
        matches!(self, Action::Press | Action::Repeat)
    }
}

/// Keyboard keys, identified by their physical location on a US layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Escape,
    Space,
    /// Any key without a dedicated variant.
    Unknown,
}

bitflags! {
    #[doc = "Key modifiers held while an event was emitted."]
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: u32 {
        #[allow(missing_docs)]
        const Shift   = 0b0001;
        #[allow(missing_docs)]
        const Control = 0b0010;
        #[allow(missing_docs)]
        const Alt     = 0b0100;
        #[allow(missing_docs)]
        const Super   = 0b1000;
    }
}

/// An event received by a window.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowEvent {
    /// The user asked the window to close (e.g. using the title bar).
    Close,
    /// The framebuffer was resized to the given physical size.
    FramebufferSize(u32, u32),
    /// A key changed state.
    Key(Key, Action, Modifiers),
}
