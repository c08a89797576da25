#![forbid(unsafe_code)]

//! Replay a drag scenario and print the resulting clip order.
//!
//! Environment:
//!
//! - `CLIPRAIL_HARNESS_SCENARIO`: path to the scenario JSON (required).
//! - `CLIPRAIL_HARNESS_JSONL`: write per-event records here instead of stdout.
//! - `CLIPRAIL_HARNESS_LOG_JSON`: emit logs as JSON lines.
//! - `CLIPRAIL_LOG`: log filter directives (default `warn`).

use std::io;
use std::path::Path;

use cliprail_harness::replay_path;

fn env_flag(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let enabled = matches!(
        trimmed,
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON"
    );
    Some(enabled)
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn main() -> io::Result<()> {
    let filter = env_string("CLIPRAIL_LOG").unwrap_or_else(|| "warn".to_string());
    let json_logs = env_flag("CLIPRAIL_HARNESS_LOG_JSON").unwrap_or(false);
    if let Err(err) = cliprail_core::logging::init_subscriber(&filter, json_logs) {
        eprintln!("logging disabled: {err}");
    }

    let scenario_path = env_string("CLIPRAIL_HARNESS_SCENARIO").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CLIPRAIL_HARNESS_SCENARIO must be set",
        )
    })?;

    let summary = match replay_path(Path::new(&scenario_path)) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("scenario replay failed: {err}");
            std::process::exit(2);
        }
    };

    let jsonl = match summary.to_jsonl() {
        Ok(jsonl) => jsonl,
        Err(err) => {
            eprintln!("trace encoding failed: {err}");
            std::process::exit(2);
        }
    };
    if let Some(output_path) = env_string("CLIPRAIL_HARNESS_JSONL") {
        std::fs::write(&output_path, jsonl.as_bytes())?;
    } else {
        print!("{jsonl}");
    }

    eprintln!(
        "scenario replay OK: events={} moves={} sessions={} dragging={} order={:?}",
        summary.records.len(),
        summary.stats.moves_applied,
        summary.stats.sessions_started,
        summary.still_dragging,
        summary.final_order
    );
    Ok(())
}
