#![forbid(unsafe_code)]

//! Replay a scenario through a [`PointerDriver`] and record every step.

use std::path::Path;

use serde::Serialize;

use cliprail::prelude::*;
use cliprail::{ReorderOutcome, ReorderStats};

use crate::error::Result;
use crate::scenario::Scenario;

/// One replayed event, serialized as a JSONL line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayRecord {
    pub index: usize,
    pub kind: &'static str,
    pub x: i32,
    pub y: i32,
    pub outcome: &'static str,
    /// Item the dragged clip now sits before, when a move resolved one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<u64>,
    pub order: Vec<u64>,
}

/// Result of a full replay.
#[derive(Debug, Clone)]
pub struct ReplaySummary {
    pub records: Vec<ReplayRecord>,
    pub final_order: Vec<u64>,
    pub stats: ReorderStats,
    pub still_dragging: bool,
}

impl ReplaySummary {
    /// Render records as newline-terminated JSON lines.
    pub fn to_jsonl(&self) -> Result<String> {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        Ok(out)
    }
}

fn order_ids(layout: &StackLayout) -> Vec<u64> {
    layout.current_order().iter().map(|id| id.0).collect()
}

/// Replay every event of `scenario` against a fresh layout and engine.
pub fn replay(scenario: &Scenario) -> Result<ReplaySummary> {
    let mut layout = scenario.build_layout()?;
    let mut driver = PointerDriver::new(scenario.reorder_config());
    let mut records = Vec::with_capacity(scenario.events.len());

    for (index, spec) in scenario.events.iter().enumerate() {
        let event = spec.to_event();
        let outcome = driver.handle(&mut layout, event);
        let before = match outcome {
            DriverOutcome::Updated(ReorderOutcome::Moved { before, .. })
            | DriverOutcome::Updated(ReorderOutcome::Unchanged { before }) => {
                before.map(|id| id.0)
            }
            _ => None,
        };
        records.push(ReplayRecord {
            index,
            kind: event.kind.as_str(),
            x: event.x,
            y: event.y,
            outcome: outcome.as_str(),
            before,
            order: order_ids(&layout),
        });
    }

    let engine = driver.into_engine();
    Ok(ReplaySummary {
        records,
        final_order: order_ids(&layout),
        stats: engine.stats(),
        still_dragging: engine.is_dragging(),
    })
}

/// Read a scenario file and replay it.
pub fn replay_path(path: &Path) -> Result<ReplaySummary> {
    let text = std::fs::read_to_string(path)?;
    let scenario = Scenario::from_json(&text)?;
    replay(&scenario)
}
