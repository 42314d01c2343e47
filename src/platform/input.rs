//! Input events delivered by the host

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    Space,
    /// Flash
    F,
    /// Pause
    P,
    /// Save
    S,
    /// Restart (runner)
    R,
}

/// One event from the host's event queue
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Window closed
    Quit,
    Key(Key),
    MouseMotion { x: f32, y: f32 },
}
