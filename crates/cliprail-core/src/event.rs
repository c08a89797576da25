#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! A UI layer translates its platform pointer events into [`PointerEvent`]
//! before handing them to the reorder driver. All events derive `Clone`,
//! `PartialEq`, and `Eq` for use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - Coordinates are viewport pixels; the engine converts to
//!   container-relative values itself.
//! - Events arrive as a serialized stream: one press, any number of moves,
//!   one release (or a cancel).

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// X coordinate in viewport pixels.
    pub x: i32,

    /// Y coordinate in viewport pixels.
    pub y: i32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: i32, y: i32) -> Self {
        Self { kind, x, y }
    }

    /// Primary-button press at the given point.
    #[must_use]
    pub const fn down(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Down(PointerButton::Primary), x, y)
    }

    /// Pointer move at the given point.
    #[must_use]
    pub const fn moved(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    /// Primary-button release at the given point.
    #[must_use]
    pub const fn up(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Up(PointerButton::Primary), x, y)
    }

    /// Get the position as a tuple.
    #[must_use]
    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Returns true if this event involves the primary button.
    #[must_use]
    pub const fn is_primary(&self) -> bool {
        matches!(
            self.kind,
            PointerEventKind::Down(PointerButton::Primary)
                | PointerEventKind::Up(PointerButton::Primary)
        )
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed down.
    Down(PointerButton),

    /// Button released.
    Up(PointerButton),

    /// Pointer moved, with or without a button held.
    Move,

    /// The platform aborted the pointer stream (focus loss, capture lost).
    Cancel,
}

impl PointerEventKind {
    /// Returns the stable string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Down(_) => "down",
            Self::Up(_) => "up",
            Self::Move => "move",
            Self::Cancel => "cancel",
        }
    }
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (usually left).
    Primary,

    /// Secondary button (usually right).
    Secondary,

    /// Middle button (scroll wheel click).
    Middle,
}
