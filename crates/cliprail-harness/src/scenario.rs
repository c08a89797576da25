#![forbid(unsafe_code)]

//! Scenario files: a clip column plus a scripted pointer stream.
//!
//! ```json
//! {
//!   "container": { "top": 100, "gap": 10 },
//!   "config": { "threshold": "directional", "initial_pointer": "unset" },
//!   "items": [
//!     { "id": 1, "group": "background", "height": 40 },
//!     { "id": 2, "group": "background", "height": 40,
//!       "drop_zone": { "x": 0, "y": 0, "width": 200, "height": 10 } }
//!   ],
//!   "events": [
//!     { "kind": "down", "x": 5, "y": 175 },
//!     { "kind": "move", "x": 5, "y": 105 },
//!     { "kind": "up", "x": 5, "y": 105 }
//!   ]
//! }
//! ```

use serde::Deserialize;

use cliprail::prelude::*;
use cliprail::{InitialPointer, PointerButton, ThresholdPolicy};

use crate::error::Result;

/// A complete replay scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Container placement and spacing.
    #[serde(default)]
    pub container: ContainerSpec,
    /// Engine configuration.
    #[serde(default)]
    pub config: ConfigSpec,
    /// Items in initial display order.
    pub items: Vec<ItemSpec>,
    /// Pointer stream to replay.
    #[serde(default)]
    pub events: Vec<EventSpec>,
}

/// Container placement and spacing, in viewport pixels.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContainerSpec {
    pub left: i32,
    pub top: i32,
    pub width: Option<i32>,
    pub padding_top: i32,
    pub gap: i32,
}

/// Engine configuration as written in scenario files.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ConfigSpec {
    pub threshold: ThresholdSpec,
    pub initial_pointer: InitialPointerSpec,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdSpec {
    #[default]
    Directional,
    Midpoint,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialPointerSpec {
    #[default]
    Unset,
    Origin,
}

/// One clip.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemSpec {
    pub id: u64,
    pub group: String,
    pub height: i32,
    #[serde(default)]
    pub drop_zone: Option<ZoneSpec>,
}

/// Item-relative rectangle.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ZoneSpec {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonSpec {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// One scripted pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventSpec {
    Down {
        x: i32,
        y: i32,
        #[serde(default)]
        button: ButtonSpec,
    },
    Move {
        x: i32,
        y: i32,
    },
    Up {
        x: i32,
        y: i32,
        #[serde(default)]
        button: ButtonSpec,
    },
    Cancel,
}

impl ButtonSpec {
    fn to_button(self) -> PointerButton {
        match self {
            Self::Primary => PointerButton::Primary,
            Self::Secondary => PointerButton::Secondary,
            Self::Middle => PointerButton::Middle,
        }
    }
}

impl EventSpec {
    /// Convert to an engine pointer event. `Cancel` carries no position.
    #[must_use]
    pub fn to_event(self) -> PointerEvent {
        match self {
            Self::Down { x, y, button } => {
                PointerEvent::new(PointerEventKind::Down(button.to_button()), x, y)
            }
            Self::Move { x, y } => PointerEvent::moved(x, y),
            Self::Up { x, y, button } => {
                PointerEvent::new(PointerEventKind::Up(button.to_button()), x, y)
            }
            Self::Cancel => PointerEvent::new(PointerEventKind::Cancel, 0, 0),
        }
    }
}

impl Scenario {
    /// Parse a scenario from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Engine configuration for this scenario.
    #[must_use]
    pub fn reorder_config(&self) -> ReorderConfig {
        let threshold = match self.config.threshold {
            ThresholdSpec::Directional => ThresholdPolicy::Directional,
            ThresholdSpec::Midpoint => ThresholdPolicy::Midpoint,
        };
        let initial = match self.config.initial_pointer {
            InitialPointerSpec::Unset => InitialPointer::Unset,
            InitialPointerSpec::Origin => InitialPointer::Origin,
        };
        ReorderConfig::default()
            .with_threshold(threshold)
            .with_initial_pointer(initial)
    }

    /// Build the initial layout.
    pub fn build_layout(&self) -> Result<StackLayout> {
        let items = self
            .items
            .iter()
            .map(|spec| {
                let item = StackItem::new(ItemId(spec.id), spec.group.as_str(), spec.height);
                match spec.drop_zone {
                    Some(z) => item.with_drop_zone(Rect::new(z.x, z.y, z.width, z.height)),
                    None => item,
                }
            })
            .collect();
        let c = &self.container;
        let mut layout = StackLayout::new(items)?
            .with_origin(c.left, c.top)
            .with_padding_top(c.padding_top)
            .with_gap(c.gap);
        if let Some(width) = c.width {
            layout = layout.with_width(width);
        }
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_scenario_uses_defaults() {
        let s = Scenario::from_json(r#"{ "items": [] }"#).unwrap();
        assert!(s.events.is_empty());
        assert_eq!(s.container.top, 0);
        assert_eq!(s.config.threshold, ThresholdSpec::Directional);
        assert_eq!(s.reorder_config(), ReorderConfig::default());
    }

    #[test]
    fn events_decode_with_default_button() {
        let s = Scenario::from_json(
            r#"{ "items": [], "events": [
                { "kind": "down", "x": 1, "y": 2 },
                { "kind": "up", "x": 1, "y": 2, "button": "secondary" },
                { "kind": "cancel" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(s.events[0].to_event(), PointerEvent::down(1, 2));
        assert_eq!(
            s.events[1].to_event().kind,
            PointerEventKind::Up(PointerButton::Secondary)
        );
        assert_eq!(s.events[2].to_event().kind, PointerEventKind::Cancel);
    }

    #[test]
    fn config_variants_map_to_engine_policies() {
        let s = Scenario::from_json(
            r#"{ "items": [], "config": { "threshold": "midpoint", "initial_pointer": "origin" } }"#,
        )
        .unwrap();
        let cfg = s.reorder_config();
        assert_eq!(cfg.threshold, ThresholdPolicy::Midpoint);
        assert_eq!(cfg.initial_pointer, InitialPointer::Origin);
    }

    #[test]
    fn layout_applies_container_spec() {
        let s = Scenario::from_json(
            r#"{
                "container": { "left": 10, "top": 100, "width": 50, "padding_top": 4, "gap": 6 },
                "items": [
                    { "id": 1, "group": "video", "height": 20 },
                    { "id": 2, "group": "video", "height": 20,
                      "drop_zone": { "x": 0, "y": 0, "width": 50, "height": 5 } }
                ]
            }"#,
        )
        .unwrap();
        let layout = s.build_layout().unwrap();
        assert_eq!(layout.container_top(), 100);
        assert_eq!(layout.top_offset(ItemId(2)), Some(30));
        assert_eq!(layout.resolve(20, 131), Hit::Excluded(ItemId(2)));
        assert_eq!(layout.resolve(70, 131), Hit::Empty);
    }
}
