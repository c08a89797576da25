#![forbid(unsafe_code)]

//! In-memory vertical stack of clips.
//!
//! [`StackLayout`] is a concrete [`ClipLayout`] that lays items out top to
//! bottom with a fixed padding and inter-item gap, the way a clip column is
//! styled in a browser. Tops are recomputed after every change to the order,
//! so the stack reflows exactly like a live container while an item is being
//! dragged through it.
//!
//! It also tracks the presentation state the engine delegates to its layout:
//! which item carries the dragging marker and whether text selection is
//! suppressed.

use std::fmt;

use ahash::AHashMap;
use cliprail_core::geometry::Rect;

use crate::item::{GroupTag, ItemId};
use crate::layout::{ClipLayout, Hit, HitResolver};

// ---------------------------------------------------------------------------
// LayoutError
// ---------------------------------------------------------------------------

/// Errors raised while building or editing a [`StackLayout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The same id was added twice.
    DuplicateItem(ItemId),
    /// An item was given a negative height.
    NegativeHeight {
        /// Offending item.
        id: ItemId,
        /// Height that was supplied.
        height: i32,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateItem(id) => write!(f, "duplicate item {id}"),
            Self::NegativeHeight { id, height } => {
                write!(f, "item {id} has negative height {height}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

// ---------------------------------------------------------------------------
// StackItem
// ---------------------------------------------------------------------------

/// One clip in a [`StackLayout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackItem {
    /// Item handle.
    pub id: ItemId,
    /// Group the item reorders within.
    pub group: GroupTag,
    /// Height in pixels.
    pub height: i32,
    /// Region inside the item, relative to its top-left corner, where a
    /// press must not start a drag.
    pub drop_zone: Option<Rect>,
}

impl StackItem {
    /// Create an item without a drop zone.
    #[must_use]
    pub fn new(id: ItemId, group: impl Into<GroupTag>, height: i32) -> Self {
        Self {
            id,
            group: group.into(),
            height,
            drop_zone: None,
        }
    }

    /// Attach a nested drop zone (item-relative coordinates). An empty zone
    /// clears it.
    #[must_use]
    pub fn with_drop_zone(mut self, zone: Rect) -> Self {
        self.drop_zone = (!zone.is_empty()).then_some(zone);
        self
    }
}

// ---------------------------------------------------------------------------
// StackLayout
// ---------------------------------------------------------------------------

/// A vertical stack of clips that reflows after every reorder.
///
/// ```
/// use cliprail_reorder::item::ItemId;
/// use cliprail_reorder::layout::ClipLayout;
/// use cliprail_reorder::stack::{StackItem, StackLayout};
///
/// let layout = StackLayout::new(vec![
///     StackItem::new(ItemId(1), "background", 40),
///     StackItem::new(ItemId(2), "background", 40),
/// ])
/// .unwrap()
/// .with_gap(10);
/// assert_eq!(layout.top_offset(ItemId(2)), Some(50));
/// ```
#[derive(Debug, Clone)]
pub struct StackLayout {
    items: AHashMap<ItemId, StackItem>,
    order: Vec<ItemId>,
    tops: AHashMap<ItemId, i32>,
    origin_x: i32,
    container_top: i32,
    width: Option<i32>,
    padding_top: i32,
    gap: i32,
    dragging: Option<ItemId>,
    selection_suppressed: bool,
}

impl StackLayout {
    /// Build a stack from items in display order.
    pub fn new(items: Vec<StackItem>) -> Result<Self, LayoutError> {
        let mut layout = Self {
            items: AHashMap::with_capacity(items.len()),
            order: Vec::with_capacity(items.len()),
            tops: AHashMap::with_capacity(items.len()),
            origin_x: 0,
            container_top: 0,
            width: None,
            padding_top: 0,
            gap: 0,
            dragging: None,
            selection_suppressed: false,
        };
        for item in items {
            layout.admit(item)?;
        }
        layout.reflow();
        Ok(layout)
    }

    /// Set the container's viewport origin.
    #[must_use]
    pub fn with_origin(mut self, x: i32, top: i32) -> Self {
        self.origin_x = x;
        self.container_top = top;
        self
    }

    /// Bound hit testing horizontally to `width` pixels.
    #[must_use]
    pub fn with_width(mut self, width: i32) -> Self {
        self.width = Some(width.max(0));
        self
    }

    /// Space above the first item (clamped to zero).
    #[must_use]
    pub fn with_padding_top(mut self, padding: i32) -> Self {
        self.padding_top = padding.max(0);
        self.reflow();
        self
    }

    /// Space between consecutive items (clamped to zero).
    #[must_use]
    pub fn with_gap(mut self, gap: i32) -> Self {
        self.gap = gap.max(0);
        self.reflow();
        self
    }

    /// Move the container, e.g. after the page scrolls.
    pub fn set_container_top(&mut self, top: i32) {
        self.container_top = top;
    }

    /// Append an item to the end of the stack.
    pub fn push(&mut self, item: StackItem) -> Result<(), LayoutError> {
        self.admit(item)?;
        self.reflow();
        Ok(())
    }

    /// Remove an item, returning it if it was present.
    pub fn remove(&mut self, id: ItemId) -> Option<StackItem> {
        let item = self.items.remove(&id)?;
        self.order.retain(|&i| i != id);
        if self.dragging == Some(id) {
            self.dragging = None;
            self.selection_suppressed = false;
        }
        self.reflow();
        Some(item)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the stack holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up an item.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&StackItem> {
        self.items.get(&id)
    }

    /// Ids of one group in sequence order.
    #[must_use]
    pub fn group_order(&self, group: &GroupTag) -> Vec<ItemId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.items.get(id).is_some_and(|item| &item.group == group))
            .collect()
    }

    /// Container-relative bounds of an item.
    #[must_use]
    pub fn bounds(&self, id: ItemId) -> Option<Rect> {
        let item = self.items.get(&id)?;
        let top = *self.tops.get(&id)?;
        Some(Rect::new(0, top, self.width.unwrap_or(0), item.height))
    }

    /// Total height occupied by padding, items, and gaps.
    #[must_use]
    pub fn content_height(&self) -> i32 {
        match self.order.last() {
            Some(&last) => self
                .bounds(last)
                .map_or(self.padding_top, |rect| rect.bottom()),
            None => self.padding_top,
        }
    }

    /// Item currently carrying the dragging marker.
    #[must_use]
    pub fn dragging(&self) -> Option<ItemId> {
        self.dragging
    }

    /// Whether text selection is currently suppressed.
    #[must_use]
    pub fn selection_suppressed(&self) -> bool {
        self.selection_suppressed
    }

    fn admit(&mut self, item: StackItem) -> Result<(), LayoutError> {
        if item.height < 0 {
            return Err(LayoutError::NegativeHeight {
                id: item.id,
                height: item.height,
            });
        }
        if self.items.contains_key(&item.id) {
            return Err(LayoutError::DuplicateItem(item.id));
        }
        self.order.push(item.id);
        self.items.insert(item.id, item);
        Ok(())
    }

    fn reflow(&mut self) {
        self.tops.clear();
        let mut y = self.padding_top;
        for (index, id) in self.order.iter().enumerate() {
            if index > 0 {
                y = y.saturating_add(self.gap);
            }
            self.tops.insert(*id, y);
            let height = self.items.get(id).map_or(0, |item| item.height);
            y = y.saturating_add(height);
        }
    }
}

impl ClipLayout for StackLayout {
    fn container_top(&self) -> i32 {
        self.container_top
    }

    fn current_order(&self) -> &[ItemId] {
        &self.order
    }

    fn group_of(&self, id: ItemId) -> Option<&GroupTag> {
        self.items.get(&id).map(|item| &item.group)
    }

    fn top_offset(&self, id: ItemId) -> Option<i32> {
        self.tops.get(&id).copied()
    }

    fn height(&self, id: ItemId) -> Option<i32> {
        self.items.get(&id).map(|item| item.height)
    }

    fn reorder(&mut self, id: ItemId, before: Option<ItemId>) {
        let Some(from) = self.order.iter().position(|&i| i == id) else {
            return;
        };
        if before == Some(id) {
            return;
        }
        self.order.remove(from);
        let to = before
            .and_then(|b| self.order.iter().position(|&i| i == b))
            .unwrap_or(self.order.len());
        self.order.insert(to, id);
        self.reflow();
    }

    fn on_drag_start(&mut self, id: ItemId) {
        self.dragging = Some(id);
        self.selection_suppressed = true;
    }

    fn on_drag_end(&mut self, _id: ItemId) {
        self.dragging = None;
        self.selection_suppressed = false;
    }
}

impl HitResolver for StackLayout {
    fn resolve(&self, x: i32, y: i32) -> Hit {
        let rx = x.saturating_sub(self.origin_x);
        let ry = y.saturating_sub(self.container_top);
        if let Some(width) = self.width
            && (rx < 0 || rx >= width)
        {
            return Hit::Empty;
        }

        for &id in &self.order {
            let (Some(item), Some(&top)) = (self.items.get(&id), self.tops.get(&id)) else {
                continue;
            };
            if !Rect::span(top, item.height).contains_y(ry) {
                continue;
            }
            if let Some(zone) = item.drop_zone
                && zone.offset(0, top).contains(rx, ry)
            {
                return Hit::Excluded(id);
            }
            return Hit::Item(id);
        }
        Hit::Empty
    }
}
