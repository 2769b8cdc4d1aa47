//! Drawing attributes and interaction-state style precedence
//!
//! A dial carries one fully-populated [`DialStyle`] plus sparse override
//! sets for the dragging and hovered states. The overrides are merged over
//! the base style at paint time, dragging taking precedence over hovered.

use serde::{Deserialize, Serialize};

/// Which interaction state the dial is rendering for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Hovered,
    Dragging,
}

/// Fully-populated drawing attributes for the three dial shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialStyle {
    /// Stroke color of the angle wedge
    pub stroke: String,
    /// Fill color of the angle wedge
    pub fill: String,
    /// Stroke width of the angle wedge
    pub line_width: f64,
    /// Stroke color of the background disc
    pub background_stroke: String,
    /// Fill color of the background disc
    pub background_fill: String,
    /// Stroke width of the background disc
    pub background_line_width: f64,
    /// Stroke color of the axis indicator
    pub axis_stroke: String,
    /// Stroke width of the axis indicator
    pub axis_line_width: f64,
}

impl Default for DialStyle {
    fn default() -> Self {
        Self {
            stroke: "rgba(0,0,255,0.5)".into(),
            fill: "rgba(0,0,255,0.4)".into(),
            line_width: 1.0,
            background_stroke: "#aaaaaa".into(),
            background_fill: "#dddddd".into(),
            background_line_width: 1.0,
            axis_stroke: "black".into(),
            axis_line_width: 1.0,
        }
    }
}

impl DialStyle {
    /// Return a copy with every key present in `overrides` replaced.
    pub fn apply(&self, overrides: &StyleOverrides) -> DialStyle {
        DialStyle {
            stroke: overrides.stroke.clone().unwrap_or_else(|| self.stroke.clone()),
            fill: overrides.fill.clone().unwrap_or_else(|| self.fill.clone()),
            line_width: overrides.line_width.unwrap_or(self.line_width),
            background_stroke: overrides
                .background_stroke
                .clone()
                .unwrap_or_else(|| self.background_stroke.clone()),
            background_fill: overrides
                .background_fill
                .clone()
                .unwrap_or_else(|| self.background_fill.clone()),
            background_line_width: overrides
                .background_line_width
                .unwrap_or(self.background_line_width),
            axis_stroke: overrides
                .axis_stroke
                .clone()
                .unwrap_or_else(|| self.axis_stroke.clone()),
            axis_line_width: overrides.axis_line_width.unwrap_or(self.axis_line_width),
        }
    }
}

/// Sparse style override set, deserialized with the widget's wire names
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub stroke: Option<String>,
    pub fill: Option<String>,
    #[serde(rename = "linewidth")]
    pub line_width: Option<f64>,
    #[serde(rename = "bgstroke")]
    pub background_stroke: Option<String>,
    #[serde(rename = "bgfill")]
    pub background_fill: Option<String>,
    #[serde(rename = "bglinewidth")]
    pub background_line_width: Option<f64>,
    #[serde(rename = "axisstroke")]
    pub axis_stroke: Option<String>,
    #[serde(rename = "axislinewidth")]
    pub axis_line_width: Option<f64>,
}

impl StyleOverrides {
    /// Fill unset keys from `fallback`, keeping keys already present.
    pub fn or(self, fallback: &StyleOverrides) -> StyleOverrides {
        StyleOverrides {
            stroke: self.stroke.or_else(|| fallback.stroke.clone()),
            fill: self.fill.or_else(|| fallback.fill.clone()),
            line_width: self.line_width.or(fallback.line_width),
            background_stroke: self
                .background_stroke
                .or_else(|| fallback.background_stroke.clone()),
            background_fill: self
                .background_fill
                .or_else(|| fallback.background_fill.clone()),
            background_line_width: self
                .background_line_width
                .or(fallback.background_line_width),
            axis_stroke: self.axis_stroke.or_else(|| fallback.axis_stroke.clone()),
            axis_line_width: self.axis_line_width.or(fallback.axis_line_width),
        }
    }

    /// Built-in overrides applied while the dial is being dragged
    pub fn dragging_defaults() -> StyleOverrides {
        StyleOverrides {
            stroke: Some("blue".into()),
            fill: Some("rgba(0,0,255,0.7)".into()),
            axis_line_width: Some(2.0),
            ..StyleOverrides::default()
        }
    }

    /// Built-in overrides applied while the pointer hovers the dial
    pub fn hovered_defaults() -> StyleOverrides {
        StyleOverrides {
            stroke: Some("blue".into()),
            fill: Some("rgba(0,0,255,0.5)".into()),
            ..StyleOverrides::default()
        }
    }
}
