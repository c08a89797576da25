#![forbid(unsafe_code)]

//! Capability interface between the reorder engine and a container surface.
//!
//! The engine never touches a rendering surface directly. Everything it needs
//! (container offset, item geometry, the current order, and the ability to
//! splice one item) comes through [`ClipLayout`]. Hit resolution for pointer
//! presses comes through [`HitResolver`].
//!
//! # Invariants
//!
//! 1. `current_order` contains every item exactly once, across all groups.
//! 2. `reorder` only changes the index of the given item; no item is added
//!    or removed.
//! 3. Geometry is queried live. Implementations must reflect the latest
//!    `reorder` in `top_offset` (layout reflows after every splice).

use crate::item::{GroupTag, ItemId};

// ---------------------------------------------------------------------------
// ClipLayout
// ---------------------------------------------------------------------------

/// A container of clips the engine can inspect and reorder.
///
/// # Example
///
/// ```
/// use cliprail_reorder::item::{GroupTag, ItemId};
/// use cliprail_reorder::layout::ClipLayout;
///
/// struct Column {
///     group: GroupTag,
///     order: Vec<ItemId>,
/// }
///
/// impl ClipLayout for Column {
///     fn container_top(&self) -> i32 { 0 }
///     fn current_order(&self) -> &[ItemId] { &self.order }
///     fn group_of(&self, _id: ItemId) -> Option<&GroupTag> { Some(&self.group) }
///     fn top_offset(&self, id: ItemId) -> Option<i32> {
///         self.order.iter().position(|&i| i == id).map(|i| i as i32 * 10)
///     }
///     fn height(&self, _id: ItemId) -> Option<i32> { Some(10) }
///     fn reorder(&mut self, id: ItemId, before: Option<ItemId>) {
///         self.order.retain(|&i| i != id);
///         let at = before
///             .and_then(|b| self.order.iter().position(|&i| i == b))
///             .unwrap_or(self.order.len());
///         self.order.insert(at, id);
///     }
/// }
/// ```
pub trait ClipLayout {
    /// Top offset of the container in viewport coordinates.
    ///
    /// Queried on every pointer move; layout may shift during a drag.
    fn container_top(&self) -> i32;

    /// Every item in the container, in sequence order, all groups included.
    fn current_order(&self) -> &[ItemId];

    /// Group tag of an item, or `None` if the id is not in this container.
    fn group_of(&self, id: ItemId) -> Option<&GroupTag>;

    /// Top edge of an item relative to the container top.
    fn top_offset(&self, id: ItemId) -> Option<i32>;

    /// Height of an item.
    fn height(&self, id: ItemId) -> Option<i32>;

    /// Move `id` so it sits immediately before `before`, or at the end when
    /// `before` is `None`.
    fn reorder(&mut self, id: ItemId, before: Option<ItemId>);

    /// Called when a drag starts on `id`.
    ///
    /// Use this to apply the "dragging" marker and suspend text selection.
    fn on_drag_start(&mut self, _id: ItemId) {}

    /// Called when the drag on `id` ends.
    ///
    /// Use this to clear the "dragging" marker and restore text selection.
    fn on_drag_end(&mut self, _id: ItemId) {}

    /// Index of `id` in [`current_order`](Self::current_order).
    fn index_of(&self, id: ItemId) -> Option<usize> {
        self.current_order().iter().position(|&i| i == id)
    }
}

// ---------------------------------------------------------------------------
// Hit resolution
// ---------------------------------------------------------------------------

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A reorderable item.
    Item(ItemId),
    /// A zone nested inside an item that must not start a drag
    /// (for example a file-drop region).
    Excluded(ItemId),
    /// Nothing reorderable.
    Empty,
}

impl Hit {
    /// The item a drag may start on, if any.
    #[must_use]
    pub fn draggable(self) -> Option<ItemId> {
        match self {
            Self::Item(id) => Some(id),
            Self::Excluded(_) | Self::Empty => None,
        }
    }
}

/// Resolves raw viewport points to items.
pub trait HitResolver {
    /// Resolve the point `(x, y)` in viewport coordinates.
    fn resolve(&self, x: i32, y: i32) -> Hit;
}
