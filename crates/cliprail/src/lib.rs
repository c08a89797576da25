#![forbid(unsafe_code)]

//! cliprail public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.
//!
//! ```
//! use cliprail::prelude::*;
//!
//! let mut layout = StackLayout::new(vec![
//!     StackItem::new(ItemId(1), "video", 40),
//!     StackItem::new(ItemId(2), "video", 40),
//! ])
//! .unwrap();
//! let mut driver = PointerDriver::default();
//! driver.handle(&mut layout, PointerEvent::down(0, 50));
//! driver.handle(&mut layout, PointerEvent::moved(0, 5));
//! driver.handle(&mut layout, PointerEvent::up(0, 5));
//! assert_eq!(layout.current_order(), &[ItemId(2), ItemId(1)]);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use cliprail_core::event::{PointerButton, PointerEvent, PointerEventKind};
pub use cliprail_core::geometry::Rect;

// --- Reorder re-exports ----------------------------------------------------

pub use cliprail_reorder::{
    ClipLayout, DragDirection, DragSession, DriverOutcome, GroupTag, Hit, HitResolver,
    InitialPointer, ItemId, LayoutError, PointerDriver, ReorderConfig, ReorderEngine,
    ReorderOutcome, ReorderStats, StackItem, StackLayout, ThresholdPolicy,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ClipLayout, DriverOutcome, GroupTag, Hit, HitResolver, ItemId, PointerDriver,
        PointerEvent, PointerEventKind, Rect, ReorderConfig, ReorderEngine, ReorderOutcome,
        StackItem, StackLayout,
    };

    pub use crate::{core, reorder};
}

pub use cliprail_core as core;
pub use cliprail_reorder as reorder;
