#![forbid(unsafe_code)]

//! Scenario replay harness for the cliprail reorder engine.
//!
//! A scenario describes a clip column and a scripted pointer stream. The
//! harness replays the stream through a `PointerDriver` over a `StackLayout`
//! and reports each step, so drag behaviour can be inspected and diffed
//! without a UI.

pub mod error;
pub mod replay;
pub mod scenario;

pub use error::{HarnessError, Result};
pub use replay::{ReplayRecord, ReplaySummary, replay, replay_path};
pub use scenario::Scenario;
