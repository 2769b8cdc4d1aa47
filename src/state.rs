//! Runtime state and pointer-to-angle mapping
//!
//! [`DialState`] owns the mutable part of a dial: the normalized angle and
//! the two interaction flags. The free functions map pointer offsets to
//! angles in the widget's convention and compute the wedge sweep endpoint
//! used by the renderer. Everything here is platform-independent.

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::config::DialConfig;
use crate::normalize_turn;
use crate::style::Interaction;

/// Pointer offsets within half a pixel of an axis snap to the cardinal
/// directions instead of going through `atan2`.
const AXIS_SNAP: f64 = 0.5;

/// Mutable widget state: normalized angle plus interaction flags
#[derive(Debug, Clone, Default)]
pub struct DialState {
    angle: f64,
    dragging: bool,
    hovered: bool,
}

impl DialState {
    pub fn new(initial: f64) -> Self {
        let mut state = DialState::default();
        state.set_angle(initial);
        state
    }

    /// Current angle, always in [0, 2π)
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Store a new angle, normalized to [0, 2π). Non-finite inputs are
    /// ignored so a NaN from the host cannot poison the stored value.
    pub fn set_angle(&mut self, angle: f64) {
        if angle.is_finite() {
            self.angle = normalize_turn(angle);
        }
    }

    #[inline]
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Interaction state for style selection, dragging before hovered
    pub fn interaction(&self) -> Interaction {
        if self.dragging {
            Interaction::Dragging
        } else if self.hovered {
            Interaction::Hovered
        } else {
            Interaction::Idle
        }
    }

    /// Press: a drag begins
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Release: the drag ends. The hover flag keeps its prior value, so a
    /// pointer still over the surface renders hovered.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Pointer enters the surface
    pub fn enter(&mut self) {
        self.hovered = true;
    }

    /// Pointer leaves the surface; clears dragging as well
    pub fn leave(&mut self) {
        self.hovered = false;
        self.dragging = false;
    }
}

/// Map a pointer offset from the dial midpoint to an angle in the widget's
/// convention.
///
/// The three cases are mutually exclusive, checked in priority order:
/// vertical axis (|dx| < 0.5), horizontal axis (|dy| < 0.5), then the
/// general `atan2` direction subtracted from `start_angle`. A clockwise
/// dial mirrors the result as `2π − ret`. The caller normalizes.
pub fn angle_from_offset(config: &DialConfig, offset: DVec2) -> f64 {
    let ret = if offset.x.abs() < AXIS_SNAP {
        if offset.y < 0.0 {
            config.start_angle + FRAC_PI_2
        } else {
            config.start_angle + 3.0 * FRAC_PI_2
        }
    } else if offset.y.abs() < AXIS_SNAP {
        if offset.x < 0.0 {
            config.start_angle + PI
        } else {
            config.start_angle
        }
    } else {
        config.start_angle - offset.y.atan2(offset.x)
    };

    if config.clockwise { TAU - ret } else { ret }
}

/// Endpoint angle of the rendered sweep wedge.
///
/// Some engines draw a full circle once an arc endpoint passes one turn,
/// so whole turns are dropped (truncation toward zero); the result stays
/// in (-2π, 2π).
pub fn sweep_end(config: &DialConfig, angle: f64) -> f64 {
    let mut d = config.start_angle - angle;
    if config.clockwise {
        d = TAU - d;
    }
    d - TAU * (d / TAU).trunc()
}

/// Value mirrored into the bound field: degrees or radians per the config
pub fn display_value(config: &DialConfig, angle: f64) -> f64 {
    if config.degrees { angle.to_degrees() } else { angle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DialOptions;

    fn counter_clockwise() -> DialConfig {
        DialOptions {
            clockwise: Some(false),
            ..DialOptions::default()
        }
        .resolve()
    }

    #[test]
    fn test_set_angle_normalizes() {
        let mut state = DialState::new(0.0);
        state.set_angle(-FRAC_PI_2);
        assert!((state.angle() - 3.0 * FRAC_PI_2).abs() < 1e-12);
        state.set_angle(5.0 * PI);
        assert!((state.angle() - PI).abs() < 1e-12);
    }

    #[test]
    fn test_set_angle_ignores_non_finite() {
        let mut state = DialState::new(1.0);
        state.set_angle(f64::NAN);
        assert!((state.angle() - 1.0).abs() < 1e-12);
        state.set_angle(f64::INFINITY);
        assert!((state.angle() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cardinal_vertical_arm() {
        let cfg = counter_clockwise();
        // dx rounds to zero, pointer above the midpoint
        let up = angle_from_offset(&cfg, DVec2::new(0.2, -10.0));
        assert!((up - (cfg.start_angle + FRAC_PI_2)).abs() < 1e-12);
        let down = angle_from_offset(&cfg, DVec2::new(-0.4, 10.0));
        assert!((down - (cfg.start_angle + 3.0 * FRAC_PI_2)).abs() < 1e-12);
    }

    #[test]
    fn test_cardinal_horizontal_arm() {
        let cfg = counter_clockwise();
        let left = angle_from_offset(&cfg, DVec2::new(-10.0, 0.3));
        assert!((left - (cfg.start_angle + PI)).abs() < 1e-12);
        let right = angle_from_offset(&cfg, DVec2::new(10.0, -0.3));
        assert!((right - cfg.start_angle).abs() < 1e-12);
    }

    #[test]
    fn test_cardinal_priority_at_center() {
        // both components round to zero: the vertical arm wins
        let cfg = counter_clockwise();
        let center = angle_from_offset(&cfg, DVec2::new(0.0, 0.0));
        assert!((center - (cfg.start_angle + 3.0 * FRAC_PI_2)).abs() < 1e-12);
    }

    #[test]
    fn test_general_case_uses_atan2() {
        let cfg = counter_clockwise();
        let diagonal = angle_from_offset(&cfg, DVec2::new(10.0, 10.0));
        assert!((diagonal - (cfg.start_angle - FRAC_PI_2 / 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_clockwise_mirrors_last() {
        let cw = DialOptions::default().resolve();
        let ccw = counter_clockwise();
        let offset = DVec2::new(7.0, -3.0);
        let mirrored = angle_from_offset(&cw, offset);
        let plain = angle_from_offset(&ccw, offset);
        assert!((mirrored - (TAU - plain)).abs() < 1e-12);
    }

    #[test]
    fn test_start_angle_shifts_hit_mapping() {
        let cfg = DialOptions {
            clockwise: Some(false),
            start_angle: Some(1.0),
            ..DialOptions::default()
        }
        .resolve();
        let up = angle_from_offset(&cfg, DVec2::new(0.0, -5.0));
        assert!((up - (1.0 + FRAC_PI_2)).abs() < 1e-12);
    }

    #[test]
    fn test_sweep_end_bounded() {
        let cfg = DialOptions::default().resolve();
        for angle in [0.0, 1.0, PI, 5.0, TAU - 1e-9] {
            let d = sweep_end(&cfg, angle);
            assert!(d > -TAU && d < TAU, "sweep {d} out of range for {angle}");
        }
    }

    #[test]
    fn test_sweep_end_matches_convention() {
        // counter-clockwise: plain difference from the start angle
        let ccw = counter_clockwise();
        assert!((sweep_end(&ccw, FRAC_PI_2) - (-FRAC_PI_2)).abs() < 1e-12);
        // clockwise: mirrored, then whole turns dropped
        let cw = DialOptions::default().resolve();
        assert!((sweep_end(&cw, FRAC_PI_2) - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_display_value_honors_degrees_flag() {
        let deg = DialOptions::default().resolve();
        assert!((display_value(&deg, PI) - 180.0).abs() < 1e-9);

        let rad = DialOptions {
            degrees: Some(false),
            ..DialOptions::default()
        }
        .resolve();
        assert!((display_value(&rad, PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_drag_lifecycle() {
        let cfg = counter_clockwise();
        let mut state = DialState::new(cfg.initial_value);

        state.begin_drag();
        state.set_angle(angle_from_offset(&cfg, DVec2::new(10.0, 10.0)));
        assert!(state.dragging());

        let last = angle_from_offset(&cfg, DVec2::new(-8.0, 2.0));
        state.set_angle(last);
        state.end_drag();

        assert!(!state.dragging());
        assert!((state.angle() - normalize_turn(last)).abs() < 1e-12);
    }

    #[test]
    fn test_leave_clears_dragging_and_hover() {
        let mut state = DialState::new(0.0);
        state.enter();
        state.begin_drag();
        state.leave();
        assert!(!state.dragging());
        assert!(!state.hovered());
        assert_eq!(state.interaction(), Interaction::Idle);
    }

    #[test]
    fn test_interaction_precedence() {
        let mut state = DialState::new(0.0);
        state.enter();
        assert_eq!(state.interaction(), Interaction::Hovered);
        state.begin_drag();
        // both flags set: dragging wins
        assert_eq!(state.interaction(), Interaction::Dragging);
        state.end_drag();
        assert_eq!(state.interaction(), Interaction::Hovered);
    }
}
