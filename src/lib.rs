//! Angle Dial - a drag-to-set angle input widget on an HTML canvas
//!
//! Core modules:
//! - `config`: Options parsing and typed configuration resolution
//! - `style`: Drawing attributes and interaction-state precedence
//! - `state`: Value normalization, hit mapping, interaction state machine
//! - `render`: Canvas 2-D painting (wasm)
//! - `widget`: The DOM-attached dial itself (wasm)
//!
//! The portable modules carry the widget's whole observable contract and
//! are unit-tested natively; only `render` and `widget` touch the DOM.

pub mod config;
pub mod state;
pub mod style;

#[cfg(target_arch = "wasm32")]
pub mod render;
#[cfg(target_arch = "wasm32")]
pub mod widget;

pub use config::{DialConfig, DialOptions};
pub use state::DialState;
pub use style::{DialStyle, Interaction, StyleOverrides};

#[cfg(target_arch = "wasm32")]
pub use widget::AngleDial;

use glam::DVec2;

/// Widget configuration constants
pub mod consts {
    /// Golden ratio, used to derive the dial radii from the surface size
    pub const GOLDEN_RATIO: f64 = 1.618_033_988_75;
    /// Default side length of the square canvas, in pixels
    pub const DEFAULT_SIZE: u32 = 64;
    /// Default initial angle when no `value` option is given
    pub const DEFAULT_VALUE: f64 = 0.789 * std::f64::consts::PI;
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_turn(angle: f64) -> f64 {
    use std::f64::consts::TAU;
    let turn = angle.rem_euclid(TAU);
    // rem_euclid of a tiny negative can round up to exactly TAU
    if turn >= TAU { 0.0 } else { turn }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}
