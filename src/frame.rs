use crate::core::{CountUp, Link, ParticleField};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A counter element paired with its count-up state. Shared between the
/// reveal observer, which triggers, and the frame loop, which advances.
pub struct CounterBinding {
    pub el: web::Element,
    pub count: CountUp,
}

/// The particle backdrop: canvas, 2D context and the field drawn onto it.
pub struct ParticleSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: ParticleField,
    links: Vec<Link>,
}

impl ParticleSurface {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        field: ParticleField,
    ) -> Self {
        Self {
            canvas,
            ctx,
            field,
            links: Vec::new(),
        }
    }

    fn frame(&mut self) {
        // The resize listener only updates the canvas backing store; the
        // field follows here, regenerating for the new bounds.
        self.resize_if_needed(self.canvas.width(), self.canvas.height());
        self.field.step();
        if let Err(e) = render::draw(&self.ctx, &self.field, &mut self.links) {
            log::error!("render error: {:?}", e);
        }
    }

    fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let (w, h) = (width as f32, height as f32);
        if w != self.field.width() || h != self.field.height() {
            self.field.resize(w, h);
        }
    }
}

pub struct FrameContext {
    pub surface: Option<ParticleSurface>,
    pub counters: Rc<RefCell<Vec<CounterBinding>>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        surface: Option<ParticleSurface>,
        counters: Rc<RefCell<Vec<CounterBinding>>>,
    ) -> Self {
        Self {
            surface,
            counters,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_ms = dt.as_secs_f64() * 1000.0;

        for binding in self.counters.borrow_mut().iter_mut() {
            if let Some(value) = binding.count.advance(dt_ms) {
                binding.el.set_text_content(Some(&value.to_string()));
            }
        }

        if let Some(surface) = &mut self.surface {
            surface.frame();
        }
    }
}

/// Drive the context from requestAnimationFrame until the page unloads.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
