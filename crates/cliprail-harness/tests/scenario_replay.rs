#![forbid(unsafe_code)]

//! Scenario replay tests.

use cliprail_harness::{HarnessError, Scenario, replay};

const BACKGROUND_TO_TOP: &str = r#"{
    "container": { "top": 100 },
    "items": [
        { "id": 1, "group": "background", "height": 40 },
        { "id": 2, "group": "background", "height": 40 },
        { "id": 3, "group": "background", "height": 40 }
    ],
    "events": [
        { "kind": "down", "x": 5, "y": 190 },
        { "kind": "move", "x": 5, "y": 110 },
        { "kind": "move", "x": 5, "y": 110 },
        { "kind": "up", "x": 5, "y": 110 }
    ]
}"#;

#[test]
fn replay_moves_clip_to_top() {
    let scenario = Scenario::from_json(BACKGROUND_TO_TOP).unwrap();
    let summary = replay(&scenario).unwrap();

    assert_eq!(summary.final_order, vec![3, 1, 2]);
    assert_eq!(summary.stats.sessions_started, 1);
    assert_eq!(summary.stats.moves_applied, 1);
    assert!(!summary.still_dragging);

    let outcomes: Vec<&str> = summary.records.iter().map(|r| r.outcome).collect();
    assert_eq!(outcomes, vec!["started", "moved", "unchanged", "ended"]);
    assert_eq!(summary.records[1].before, Some(1));
    assert_eq!(summary.records[1].order, vec![3, 1, 2]);
}

#[test]
fn jsonl_has_one_line_per_event() {
    let scenario = Scenario::from_json(BACKGROUND_TO_TOP).unwrap();
    let jsonl = replay(&scenario).unwrap().to_jsonl().unwrap();
    let lines: Vec<&str> = jsonl.lines().collect();
    assert_eq!(lines.len(), 4);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["kind"], "down");
    assert_eq!(first["outcome"], "started");
    assert!(first.get("before").is_none());

    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["before"], 1);
    assert_eq!(second["order"], serde_json::json!([3, 1, 2]));
}

#[test]
fn press_in_drop_zone_never_drags() {
    let scenario = Scenario::from_json(
        r#"{
            "items": [
                { "id": 1, "group": "video", "height": 40 },
                { "id": 2, "group": "video", "height": 40,
                  "drop_zone": { "x": 0, "y": 0, "width": 100, "height": 40 } }
            ],
            "events": [
                { "kind": "down", "x": 5, "y": 50 },
                { "kind": "move", "x": 5, "y": 0 },
                { "kind": "up", "x": 5, "y": 0 }
            ]
        }"#,
    )
    .unwrap();
    let summary = replay(&scenario).unwrap();
    let outcomes: Vec<&str> = summary.records.iter().map(|r| r.outcome).collect();
    assert_eq!(outcomes, vec!["rejected", "idle", "ignored"]);
    assert_eq!(summary.final_order, vec![1, 2]);
    assert_eq!(summary.stats.begins_rejected, 1);
}

#[test]
fn unfinished_drag_is_reported() {
    let scenario = Scenario::from_json(
        r#"{
            "items": [
                { "id": 1, "group": "video", "height": 40 },
                { "id": 2, "group": "video", "height": 40 }
            ],
            "events": [ { "kind": "down", "x": 0, "y": 10 } ]
        }"#,
    )
    .unwrap();
    assert!(replay(&scenario).unwrap().still_dragging);
}

#[test]
fn duplicate_ids_fail_with_layout_error() {
    let scenario = Scenario::from_json(
        r#"{ "items": [
            { "id": 7, "group": "video", "height": 10 },
            { "id": 7, "group": "video", "height": 10 }
        ] }"#,
    )
    .unwrap();
    let err = replay(&scenario).unwrap_err();
    assert!(matches!(err, HarnessError::Layout(_)));
    assert_eq!(err.to_string(), "invalid layout: duplicate item #7");
}

#[test]
fn malformed_json_fails_with_json_error() {
    let err = Scenario::from_json(r#"{ "items": [ { "id": "x" } ] }"#).unwrap_err();
    assert!(matches!(err, HarnessError::Json(_)));
    assert!(err.to_string().starts_with("invalid scenario:"));
}

#[test]
fn missing_file_fails_with_io_error() {
    let err = cliprail_harness::replay_path(std::path::Path::new(
        "/nonexistent/cliprail/scenario.json",
    ))
    .unwrap_err();
    assert!(matches!(err, HarnessError::Io(_)));
}
