#![cfg(target_arch = "wasm32")]
//! Interactive effects for the Vela signup page: particle backdrop, tilt
//! cards, scroll reveals with count-up stats, parallax layers, magnetic
//! buttons and the signup form helpers.

use crate::core::{CountUp, ParticleField, RevealOptions, DEFAULT_PARTICLE_COUNT};
use crate::frame::{CounterBinding, FrameContext, ParticleSurface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod observe;
mod render;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Counter registry shared between the reveal observer, which triggers,
    // and the frame loop, which advances and displays.
    let counters = Rc::new(RefCell::new(collect_counters(&document)));

    let tilt_count = events::pointer::wire_tilt_cards(&document);
    let magnet_count = events::pointer::wire_magnetic_buttons(&document);
    let parallax_count = events::scroll::wire_parallax(&document);
    events::forms::wire_forms(&document);

    let card_reveals = observe::observe_reveals(
        &document,
        CARD_REVEAL_SELECTOR,
        RevealOptions {
            threshold: CARD_REVEAL_THRESHOLD,
            animate_once: true,
        },
        counters.clone(),
    );
    let header_reveals = observe::observe_reveals(
        &document,
        HEADER_REVEAL_SELECTOR,
        RevealOptions {
            threshold: HEADER_REVEAL_THRESHOLD,
            animate_once: true,
        },
        counters.clone(),
    );

    let surface = build_particle_surface(&document);
    log::info!(
        "[wire] tilt={} magnets={} parallax={} reveals={} counters={} particles={}",
        tilt_count,
        magnet_count,
        parallax_count,
        card_reveals + header_reveals,
        counters.borrow().len(),
        surface.is_some()
    );

    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(surface, counters)));
    frame::start_loop(frame_ctx);

    Ok(())
}

/// One counter per `[data-counter]` element, its target read from the
/// attribute; a missing or malformed target counts to 0.
fn collect_counters(document: &web::Document) -> Vec<CounterBinding> {
    dom::query_all(document, COUNTER_SELECTOR)
        .into_iter()
        .map(|el| {
            let target = el
                .get_attribute(COUNTER_ATTR)
                .and_then(|v| v.parse().ok())
                .unwrap_or(0);
            CounterBinding {
                el,
                count: CountUp::with_default_duration(target),
            }
        })
        .collect()
}

/// The particle backdrop is optional: pages without the canvas simply skip
/// it, and the frame loop still runs for the counters.
fn build_particle_surface(document: &web::Document) -> Option<ParticleSurface> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(PARTICLES_CANVAS_ID)?
        .dyn_into()
        .ok()?;
    dom::sync_canvas_backing_size(&canvas);
    wire_canvas_resize(&canvas);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()??
        .dyn_into()
        .ok()?;
    let field = ParticleField::new(
        canvas.width() as f32,
        canvas.height() as f32,
        DEFAULT_PARTICLE_COUNT,
        rand::random(),
    );
    Some(ParticleSurface::new(canvas, ctx, field))
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
