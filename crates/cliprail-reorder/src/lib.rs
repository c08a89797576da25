#![forbid(unsafe_code)]

//! Pointer-driven reordering of clips within a container.
//!
//! - [`item`]: opaque item handles and group tags.
//! - [`layout`]: the [`ClipLayout`](layout::ClipLayout) capability trait and hit resolution.
//! - [`stack`]: an in-memory vertical stack implementing both.
//! - [`engine`]: the [`ReorderEngine`](engine::ReorderEngine) and its drag session.
//! - [`driver`]: an adapter from pointer events to engine calls.

pub mod driver;
pub mod engine;
pub mod item;
pub mod layout;
pub mod stack;

pub use driver::{DriverOutcome, PointerDriver};
pub use engine::{
    DragDirection, DragSession, InitialPointer, ReorderConfig, ReorderEngine, ReorderOutcome,
    ReorderStats, ThresholdPolicy,
};
pub use item::{GroupTag, ItemId};
pub use layout::{ClipLayout, Hit, HitResolver};
pub use stack::{LayoutError, StackItem, StackLayout};
