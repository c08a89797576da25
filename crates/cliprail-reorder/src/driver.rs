#![forbid(unsafe_code)]

//! Pointer adapter for the reorder engine.
//!
//! [`PointerDriver`] is the thin layer between a platform's pointer stream
//! and [`ReorderEngine`]. It resolves presses to items through a
//! [`HitResolver`] and maps the stream onto the engine's three entry points:
//!
//! | Event | Engine call |
//! |-------|-------------|
//! | primary `Down` | `begin_drag(hit.draggable())` |
//! | `Move` | `update_drag(y)` |
//! | primary `Up`, `Cancel` | `end_drag()` |
//!
//! Secondary and middle buttons are ignored. A press inside an item's drop
//! zone resolves to [`Hit::Excluded`] and never starts a drag.

use cliprail_core::debug_span;
use cliprail_core::event::{PointerEvent, PointerEventKind};

use crate::engine::{ReorderConfig, ReorderEngine, ReorderOutcome};
use crate::item::ItemId;
use crate::layout::{ClipLayout, Hit, HitResolver};

/// What a single pointer event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverOutcome {
    /// A press started a drag on the item.
    Started(ItemId),
    /// A press did not start a drag (off-item, drop zone, or already dragging).
    Rejected(Hit),
    /// A move was forwarded to the engine.
    Updated(ReorderOutcome),
    /// A release or cancel ended the drag.
    Ended,
    /// The event had no effect.
    Ignored,
}

impl DriverOutcome {
    /// Returns the stable string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Started(_) => "started",
            Self::Rejected(_) => "rejected",
            Self::Updated(ReorderOutcome::Idle) => "idle",
            Self::Updated(ReorderOutcome::Unchanged { .. }) => "unchanged",
            Self::Updated(ReorderOutcome::Moved { .. }) => "moved",
            Self::Ended => "ended",
            Self::Ignored => "ignored",
        }
    }
}

/// Routes pointer events into an owned [`ReorderEngine`].
#[derive(Debug, Default)]
pub struct PointerDriver {
    engine: ReorderEngine,
}

impl PointerDriver {
    /// Create a driver with a fresh engine.
    #[must_use]
    pub fn new(config: ReorderConfig) -> Self {
        Self {
            engine: ReorderEngine::new(config),
        }
    }

    /// Wrap an existing engine.
    #[must_use]
    pub fn with_engine(engine: ReorderEngine) -> Self {
        Self { engine }
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &ReorderEngine {
        &self.engine
    }

    /// Consume the driver and return its engine.
    #[must_use]
    pub fn into_engine(self) -> ReorderEngine {
        self.engine
    }

    /// Handle one pointer event.
    pub fn handle<L>(&mut self, layout: &mut L, event: PointerEvent) -> DriverOutcome
    where
        L: ClipLayout + HitResolver + ?Sized,
    {
        let span = debug_span!("pointer_event", kind = event.kind.as_str(), y = event.y);
        let _guard = span.enter();

        let (x, y) = event.position();
        match event.kind {
            PointerEventKind::Move => DriverOutcome::Updated(self.engine.update_drag(layout, y)),
            PointerEventKind::Cancel => self.finish(layout),
            _ if !event.is_primary() => DriverOutcome::Ignored,
            PointerEventKind::Down(_) => {
                let hit = layout.resolve(x, y);
                if !self.engine.begin_drag(layout, hit.draggable()) {
                    return DriverOutcome::Rejected(hit);
                }
                match self.engine.active_item() {
                    Some(item) => DriverOutcome::Started(item),
                    None => DriverOutcome::Rejected(hit),
                }
            }
            PointerEventKind::Up(_) => self.finish(layout),
        }
    }

    fn finish<L: ClipLayout + ?Sized>(&mut self, layout: &mut L) -> DriverOutcome {
        if self.engine.end_drag(layout) {
            DriverOutcome::Ended
        } else {
            DriverOutcome::Ignored
        }
    }
}
