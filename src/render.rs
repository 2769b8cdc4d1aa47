//! Canvas 2-D painting
//!
//! One full repaint per state change: clear, background disc, angle wedge,
//! axis indicator. Painting is idempotent - repeated calls with unchanged
//! state produce identical pixels.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::DialConfig;
use crate::polar_to_cartesian;
use crate::state::sweep_end;
use crate::style::DialStyle;

/// Scoped save/restore over a 2-D context. Drawing state is restored when
/// the frame drops, on every exit path including `?` returns.
pub struct Frame<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> Frame<'a> {
    pub fn begin(ctx: &'a CanvasRenderingContext2d) -> Frame<'a> {
        ctx.save();
        Frame { ctx }
    }
}

impl Drop for Frame<'_> {
    fn drop(&mut self) {
        self.ctx.restore();
    }
}

/// Paint the dial at `angle` with a merged style snapshot.
///
/// # Errors
///
/// Returns `Err` if a `Canvas2D` call fails.
pub fn paint(
    ctx: &CanvasRenderingContext2d,
    config: &DialConfig,
    style: &DialStyle,
    angle: f64,
) -> Result<(), JsValue> {
    let size = f64::from(config.size);
    let center = config.center;
    let d = sweep_end(config, angle);

    ctx.clear_rect(0.0, 0.0, size, size);
    let _frame = Frame::begin(ctx);

    // background disc
    ctx.begin_path();
    ctx.arc(center.x, center.y, config.background_radius, 0.0, TAU)?;
    ctx.set_fill_style_str(&style.background_fill);
    ctx.set_line_width(style.background_line_width);
    ctx.set_stroke_style_str(&style.background_stroke);
    ctx.fill();
    ctx.stroke();

    // angle wedge, swept opposite the configured direction
    ctx.begin_path();
    ctx.move_to(center.x, center.y);
    ctx.arc_with_anticlockwise(
        center.x,
        center.y,
        config.radius,
        config.start_angle,
        d,
        !config.clockwise,
    )?;
    ctx.close_path();
    ctx.set_fill_style_str(&style.fill);
    ctx.set_line_width(style.line_width);
    ctx.set_stroke_style_str(&style.stroke);
    ctx.fill();
    ctx.stroke();

    // axis indicator through the center
    let axis_start = center + polar_to_cartesian(config.axis_radius, config.start_angle);
    let axis_end = center + polar_to_cartesian(config.axis_radius, d);
    ctx.begin_path();
    ctx.move_to(axis_start.x, axis_start.y);
    ctx.line_to(center.x, center.y);
    ctx.line_to(axis_end.x, axis_end.y);
    ctx.set_stroke_style_str(&style.axis_stroke);
    ctx.set_line_width(style.axis_line_width);
    ctx.stroke();

    Ok(())
}
