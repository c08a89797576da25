#![forbid(unsafe_code)]

//! Drag reorder engine.
//!
//! [`ReorderEngine`] owns the transient [`DragSession`] and the
//! sibling-reinsertion algorithm. A UI layer drives it with three calls:
//! [`begin_drag`](ReorderEngine::begin_drag) on press,
//! [`update_drag`](ReorderEngine::update_drag) on every pointer move, and
//! [`end_drag`](ReorderEngine::end_drag) on release. Every move is applied to
//! the [`ClipLayout`] immediately; there is no commit or cancel step.
//!
//! # Algorithm
//!
//! On each move the pointer Y is made container-relative, then compared with
//! the previous Y to get a [`DragDirection`]. The active item is inserted
//! before the first same-group sibling whose threshold is `>= mouse_y`, or
//! moved to the end when no sibling qualifies:
//!
//! - moving down: the sibling's top edge
//! - moving up or standing still: the sibling's bottom edge
//!
//! Using different edges per direction gives directional hysteresis. While
//! the pointer sits in the gap between two items, the item being passed over
//! does not alternately win and lose the comparison as the stack reflows.
//!
//! # Invariants
//!
//! 1. At most one session per engine. `begin_drag` during a session is a no-op.
//! 2. Only the active item changes index; the order stays a permutation.
//! 3. Items of other groups are never candidates and never change relative order.
//! 4. `update_drag` and `end_drag` while idle leave everything untouched.
//! 5. A move that resolves to the item's current same-group successor is
//!    `Unchanged`, even when other groups sit between them.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | Press off any item | Target did not resolve | Session not started |
//! | Press during a session | Duplicate press event | Ignored, session kept |
//! | Active item removed mid-drag | Container edited externally | Session dropped |
//! | Missing sibling geometry | Layout cannot measure an item | Sibling skipped |

use cliprail_core::geometry::Rect;
use cliprail_core::{debug, trace, warn};

use crate::item::{GroupTag, ItemId};
use crate::layout::ClipLayout;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Which edge of a sibling the pointer is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdPolicy {
    /// Top edge when moving down, bottom edge otherwise.
    #[default]
    Directional,
    /// Vertical midpoint regardless of direction.
    Midpoint,
}

impl ThresholdPolicy {
    /// Threshold a sibling at `top` with `height` must reach (`>= mouse_y`)
    /// to become the insertion point.
    #[must_use]
    pub const fn threshold(self, direction: DragDirection, top: i32, height: i32) -> i32 {
        let row = Rect::span(top, height);
        match self {
            Self::Directional => match direction {
                DragDirection::Down => row.top(),
                DragDirection::Up | DragDirection::Still => row.bottom(),
            },
            Self::Midpoint => row.mid_y(),
        }
    }
}

/// Previous pointer Y assumed before the first move of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialPointer {
    /// No previous Y: the first move is direction-neutral and uses the
    /// bottom-edge rule.
    #[default]
    Unset,
    /// Previous Y starts at the container top (`0`), so any first move into
    /// the container counts as downward.
    Origin,
}

impl InitialPointer {
    const fn previous_y(self) -> Option<i32> {
        match self {
            Self::Unset => None,
            Self::Origin => Some(0),
        }
    }
}

/// Configuration for a [`ReorderEngine`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReorderConfig {
    /// Sibling edge comparison (default: [`ThresholdPolicy::Directional`]).
    pub threshold: ThresholdPolicy,
    /// Previous Y at session start (default: [`InitialPointer::Unset`]).
    pub initial_pointer: InitialPointer,
}

impl ReorderConfig {
    /// Set the threshold policy.
    #[must_use]
    pub fn with_threshold(mut self, threshold: ThresholdPolicy) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the initial pointer policy.
    #[must_use]
    pub fn with_initial_pointer(mut self, initial: InitialPointer) -> Self {
        self.initial_pointer = initial;
        self
    }
}

// ---------------------------------------------------------------------------
// DragDirection
// ---------------------------------------------------------------------------

/// Vertical direction of a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragDirection {
    /// Pointer Y increased.
    Down,
    /// Pointer Y decreased.
    Up,
    /// Pointer Y unchanged, or no previous Y known.
    Still,
}

impl DragDirection {
    /// Direction from `previous` to `current`.
    #[must_use]
    pub const fn between(previous: Option<i32>, current: i32) -> Self {
        match previous {
            Some(prev) if current > prev => Self::Down,
            Some(prev) if current < prev => Self::Up,
            _ => Self::Still,
        }
    }

    /// Returns the stable string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::Still => "still",
        }
    }
}

// ---------------------------------------------------------------------------
// DragSession
// ---------------------------------------------------------------------------

/// State of one drag, from press to release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    item: ItemId,
    group: GroupTag,
    previous_y: Option<i32>,
    updates: u32,
}

impl DragSession {
    /// The item being dragged.
    #[must_use]
    pub fn item(&self) -> ItemId {
        self.item
    }

    /// Group of the item being dragged.
    #[must_use]
    pub fn group(&self) -> &GroupTag {
        &self.group
    }

    /// Container-relative Y of the last move, if any.
    #[must_use]
    pub fn previous_y(&self) -> Option<i32> {
        self.previous_y
    }

    /// Number of moves processed in this session.
    #[must_use]
    pub fn updates(&self) -> u32 {
        self.updates
    }
}

// ---------------------------------------------------------------------------
// ReorderOutcome
// ---------------------------------------------------------------------------

/// What a call to [`ReorderEngine::update_drag`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// No session was active.
    Idle,
    /// The active item already sat before the resolved sibling.
    Unchanged {
        /// Resolved next sibling (`None` = end of the container).
        before: Option<ItemId>,
    },
    /// The active item was moved.
    Moved {
        /// Index before the move.
        from: usize,
        /// Index after the move.
        to: usize,
        /// Sibling the item now sits before (`None` = end of the container).
        before: Option<ItemId>,
    },
}

impl ReorderOutcome {
    /// Returns true if the order changed.
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    /// Resolved insertion point, if a session was active.
    #[must_use]
    pub fn before(&self) -> Option<Option<ItemId>> {
        match self {
            Self::Idle => None,
            Self::Unchanged { before } | Self::Moved { before, .. } => Some(*before),
        }
    }
}

// ---------------------------------------------------------------------------
// ReorderStats
// ---------------------------------------------------------------------------

/// Diagnostic counters, cumulative over the engine's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReorderStats {
    /// Sessions started.
    pub sessions_started: u64,
    /// `begin_drag` calls that did not start a session.
    pub begins_rejected: u64,
    /// Moves that changed the order.
    pub moves_applied: u64,
    /// `update_drag` calls received while idle.
    pub idle_updates: u64,
}

// ---------------------------------------------------------------------------
// ReorderEngine
// ---------------------------------------------------------------------------

/// Pointer-driven reordering of clips within a container.
///
/// Each engine owns its own session, so one engine per container is the
/// usual arrangement.
///
/// ```
/// use cliprail_reorder::engine::ReorderEngine;
/// use cliprail_reorder::item::ItemId;
/// use cliprail_reorder::layout::ClipLayout;
/// use cliprail_reorder::stack::{StackItem, StackLayout};
///
/// let mut layout = StackLayout::new(vec![
///     StackItem::new(ItemId(1), "background", 40),
///     StackItem::new(ItemId(2), "background", 40),
///     StackItem::new(ItemId(3), "background", 40),
/// ])
/// .unwrap();
///
/// let mut engine = ReorderEngine::default();
/// assert!(engine.begin_drag(&mut layout, Some(ItemId(3))));
/// engine.update_drag(&mut layout, 10);
/// engine.end_drag(&mut layout);
///
/// assert_eq!(layout.current_order(), &[ItemId(3), ItemId(1), ItemId(2)]);
/// ```
#[derive(Debug, Default)]
pub struct ReorderEngine {
    config: ReorderConfig,
    session: Option<DragSession>,
    stats: ReorderStats,
}

impl ReorderEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: ReorderConfig) -> Self {
        Self {
            config,
            session: None,
            stats: ReorderStats::default(),
        }
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Check if a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    #[must_use = "use the returned session (if any)"]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// The item being dragged, if any.
    #[must_use]
    pub fn active_item(&self) -> Option<ItemId> {
        self.session.as_ref().map(DragSession::item)
    }

    /// Diagnostic counters.
    #[must_use]
    pub fn stats(&self) -> ReorderStats {
        self.stats
    }

    /// Start dragging `target`.
    ///
    /// `target` is `None` when the press did not resolve to a reorderable
    /// item. Returns `true` if a session started. Returns `false`, changing
    /// nothing, if a session is already active or the target is not an item
    /// of `layout`.
    pub fn begin_drag<L: ClipLayout + ?Sized>(
        &mut self,
        layout: &mut L,
        target: Option<ItemId>,
    ) -> bool {
        if self.session.is_some() {
            self.stats.begins_rejected += 1;
            debug!(active = ?self.active_item(), "begin_drag ignored: session already active");
            return false;
        }
        let Some(item) = target else {
            self.stats.begins_rejected += 1;
            trace!("begin_drag ignored: no reorderable target");
            return false;
        };
        let Some(group) = layout.group_of(item).cloned() else {
            self.stats.begins_rejected += 1;
            debug!(item = %item, "begin_drag ignored: item not in container");
            return false;
        };

        debug!(item = %item, group = %group, "drag session started");
        self.session = Some(DragSession {
            item,
            group,
            previous_y: self.config.initial_pointer.previous_y(),
            updates: 0,
        });
        self.stats.sessions_started += 1;
        layout.on_drag_start(item);
        true
    }

    /// Reposition the active item for a pointer at viewport Y `pointer_y`.
    ///
    /// Safe to call while idle; returns [`ReorderOutcome::Idle`] then.
    pub fn update_drag<L: ClipLayout + ?Sized>(
        &mut self,
        layout: &mut L,
        pointer_y: i32,
    ) -> ReorderOutcome {
        let Some(mut session) = self.session.take() else {
            self.stats.idle_updates += 1;
            trace!(pointer_y, "update_drag ignored: idle");
            return ReorderOutcome::Idle;
        };
        let Some(from) = layout.index_of(session.item) else {
            warn!(item = %session.item, "active item left the container; dropping session");
            layout.on_drag_end(session.item);
            return ReorderOutcome::Idle;
        };

        let mouse_y = pointer_y.saturating_sub(layout.container_top());
        let direction = DragDirection::between(session.previous_y, mouse_y);
        let before = next_sibling(
            &*layout,
            session.item,
            &session.group,
            mouse_y,
            direction,
            self.config.threshold,
        );
        session.previous_y = Some(mouse_y);
        session.updates = session.updates.saturating_add(1);

        let in_place = current_next_sibling(&*layout, from, &session.group) == before;
        let item = session.item;
        self.session = Some(session);

        if in_place {
            trace!(item = %item, mouse_y, direction = direction.as_str(), "drag move: in place");
            return ReorderOutcome::Unchanged { before };
        }

        layout.reorder(item, before);
        let to = layout.index_of(item).unwrap_or(from);
        self.stats.moves_applied += 1;
        debug!(
            item = %item,
            mouse_y,
            direction = direction.as_str(),
            from,
            to,
            "drag move: reordered"
        );
        ReorderOutcome::Moved { from, to, before }
    }

    /// Finish the active drag, leaving the order as the last move left it.
    ///
    /// Returns `true` if a session ended; `false` while idle.
    pub fn end_drag<L: ClipLayout + ?Sized>(&mut self, layout: &mut L) -> bool {
        let Some(session) = self.session.take() else {
            trace!("end_drag ignored: idle");
            return false;
        };
        layout.on_drag_end(session.item);
        debug!(
            item = %session.item,
            updates = session.updates,
            "drag session ended"
        );
        true
    }
}

/// First same-group sibling (excluding `active`) whose threshold reaches
/// `mouse_y`, in sequence order. `None` means the end of the container.
fn next_sibling<L: ClipLayout + ?Sized>(
    layout: &L,
    active: ItemId,
    group: &GroupTag,
    mouse_y: i32,
    direction: DragDirection,
    policy: ThresholdPolicy,
) -> Option<ItemId> {
    layout
        .current_order()
        .iter()
        .copied()
        .filter(|&id| id != active && layout.group_of(id) == Some(group))
        .find(|&id| {
            let (Some(top), Some(height)) = (layout.top_offset(id), layout.height(id)) else {
                return false;
            };
            policy.threshold(direction, top, height) >= mouse_y
        })
}

/// Same-group item that currently follows the one at `from`, if any.
fn current_next_sibling<L: ClipLayout + ?Sized>(
    layout: &L,
    from: usize,
    group: &GroupTag,
) -> Option<ItemId> {
    layout
        .current_order()
        .iter()
        .skip(from + 1)
        .copied()
        .find(|&id| layout.group_of(id) == Some(group))
}
