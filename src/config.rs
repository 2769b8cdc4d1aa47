//! Widget options and typed configuration resolution
//!
//! [`DialOptions`] is the sparse, serde-deserializable object a host hands
//! to the widget (all fields optional, original wire names). Resolution
//! merges it over the built-in defaults key by key and derives any unset
//! radius from the surface size, producing an immutable [`DialConfig`]
//! that never changes for the widget's lifetime.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SIZE, DEFAULT_VALUE, GOLDEN_RATIO};
use crate::style::{DialStyle, Interaction, StyleOverrides};

/// Sparse construction options, deserialized with the widget's wire names
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialOptions {
    /// Initial angle in radians
    pub value: Option<f64>,
    /// Side length of the square canvas in pixels
    pub size: Option<u32>,
    /// Radius of the angle wedge
    #[serde(rename = "rad")]
    pub radius: Option<f64>,
    /// Radius of the background disc
    #[serde(rename = "bgrad")]
    pub background_radius: Option<f64>,
    /// Radius of the axis indicator
    #[serde(rename = "axisrad")]
    pub axis_radius: Option<f64>,
    /// Zero-reference direction in radians
    #[serde(rename = "angle0")]
    pub start_angle: Option<f64>,
    /// Sweep and hit-test direction
    pub clockwise: Option<bool>,
    /// Mirror the value into the bound field in degrees (true) or radians
    #[serde(rename = "deg")]
    pub degrees: Option<bool>,
    /// Base drawing attributes
    pub style: StyleOverrides,
    /// Overrides applied while dragging
    #[serde(rename = "draggingstyle")]
    pub dragging_style: StyleOverrides,
    /// Overrides applied while hovered
    #[serde(rename = "hoveredstyle")]
    pub hovered_style: StyleOverrides,
}

impl DialOptions {
    /// Parse an options object from its JSON form.
    pub fn from_json(json: &str) -> Result<DialOptions, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve these options over the built-in defaults.
    pub fn resolve(&self) -> DialConfig {
        let size = self.size.unwrap_or(DEFAULT_SIZE);
        let radius = self.radius.unwrap_or(0.5 * f64::from(size) / GOLDEN_RATIO);
        let background_radius = self.background_radius.unwrap_or(radius / GOLDEN_RATIO);
        let axis_radius = self.axis_radius.unwrap_or(0.5 * f64::from(size));
        // half-pixel offset keeps one-pixel strokes crisp
        let mid = f64::from(size) / 2.0 + 0.5;

        DialConfig {
            size,
            radius,
            background_radius,
            axis_radius,
            start_angle: self.start_angle.unwrap_or(0.0),
            clockwise: self.clockwise.unwrap_or(true),
            degrees: self.degrees.unwrap_or(true),
            initial_value: self.value.unwrap_or(DEFAULT_VALUE),
            center: DVec2::new(mid, mid),
            style: DialStyle::default().apply(&self.style),
            dragging_style: self
                .dragging_style
                .clone()
                .or(&StyleOverrides::dragging_defaults()),
            hovered_style: self
                .hovered_style
                .clone()
                .or(&StyleOverrides::hovered_defaults()),
        }
    }
}

/// Fully resolved widget configuration, immutable after construction
#[derive(Debug, Clone)]
pub struct DialConfig {
    pub size: u32,
    pub radius: f64,
    pub background_radius: f64,
    pub axis_radius: f64,
    pub start_angle: f64,
    pub clockwise: bool,
    pub degrees: bool,
    pub initial_value: f64,
    /// Midpoint of the canvas in both axes
    pub center: DVec2,
    pub style: DialStyle,
    pub dragging_style: StyleOverrides,
    pub hovered_style: StyleOverrides,
}

impl DialConfig {
    /// Style snapshot for an interaction state: dragging overrides beat
    /// hovered overrides, hovered beat idle.
    pub fn style_for(&self, interaction: Interaction) -> DialStyle {
        match interaction {
            Interaction::Dragging => self.style.apply(&self.dragging_style),
            Interaction::Hovered => self.style.apply(&self.hovered_style),
            Interaction::Idle => self.style.clone(),
        }
    }
}

impl Default for DialConfig {
    fn default() -> Self {
        DialOptions::default().resolve()
    }
}
