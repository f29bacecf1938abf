//! Rendering: draws the particle field to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only view of the
//! field and produces pixels; it does not mutate any field state.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::constants::{ACCENT_RGB, LINK_WIDTH_PX, PARTICLE_FILL};
use crate::core::{Link, ParticleField};

/// Draw the full field: clear, then every particle as a filled circle, then
/// the proximity links. `links` is a scratch buffer reused across frames.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    field: &ParticleField,
    links: &mut Vec<Link>,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, f64::from(field.width()), f64::from(field.height()));

    ctx.set_fill_style_str(PARTICLE_FILL);
    for p in &field.particles {
        ctx.begin_path();
        ctx.arc(
            f64::from(p.pos.x),
            f64::from(p.pos.y),
            f64::from(p.radius),
            0.0,
            PI * 2.0,
        )?;
        ctx.fill();
    }

    field.links(links);
    ctx.set_line_width(LINK_WIDTH_PX);
    for link in links.iter() {
        let a = field.particles[link.a].pos;
        let b = field.particles[link.b].pos;
        ctx.begin_path();
        ctx.move_to(f64::from(a.x), f64::from(a.y));
        ctx.line_to(f64::from(b.x), f64::from(b.y));
        ctx.set_stroke_style_str(&format!("rgba({ACCENT_RGB}, {:.3})", link.alpha));
        ctx.stroke();
    }

    Ok(())
}
