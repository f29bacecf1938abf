//! Viewport-visibility wiring: hides observed elements up front, reveals
//! them once they cross the configured threshold, and fires any counter a
//! revealed element contains.

use crate::constants::{
    COUNTER_SELECTOR, REVEAL_HIDDEN_OFFSET_PX, REVEAL_SLOT_ATTR, REVEAL_TRANSITION,
};
use crate::core::{RevealAction, RevealGate, RevealOptions};
use crate::dom;
use crate::frame::CounterBinding;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe every `selector` match and reveal it on viewport entry. Returns
/// how many elements are being observed.
pub fn observe_reveals(
    document: &web::Document,
    selector: &str,
    options: RevealOptions,
    counters: Rc<RefCell<Vec<CounterBinding>>>,
) -> usize {
    let targets = dom::query_all(document, selector);
    if targets.is_empty() {
        return 0;
    }

    for (slot, el) in targets.iter().enumerate() {
        dom::set_style(el, "opacity", "0");
        dom::set_style(
            el,
            "transform",
            &format!("translateY({REVEAL_HIDDEN_OFFSET_PX}px)"),
        );
        _ = el.set_attribute(REVEAL_SLOT_ATTR, &slot.to_string());
    }

    let gate = RefCell::new(RevealGate::new(targets.len(), options));
    let counters_cb = counters;
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(slot) = target
                    .get_attribute(REVEAL_SLOT_ATTR)
                    .and_then(|s| s.parse::<usize>().ok())
                else {
                    continue;
                };
                // The observer only wakes us at the configured threshold, but
                // the reported ratio can land fractionally below it; an
                // intersecting entry counts as at least at the threshold.
                let fraction = (entry.intersection_ratio() as f32).max(options.threshold);
                match gate.borrow_mut().on_visibility(slot, fraction) {
                    RevealAction::Ignore => {}
                    RevealAction::Reveal { stop_observing } => {
                        dom::set_style(&target, "transition", REVEAL_TRANSITION);
                        dom::set_style(&target, "opacity", "1");
                        dom::set_style(&target, "transform", "translateY(0)");
                        trigger_counter_within(&target, &counters_cb);
                        if stop_observing {
                            observer.unobserve(&target);
                        }
                    }
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from(f64::from(options.threshold)));
    let Ok(observer) =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
    else {
        return 0;
    };
    callback.forget();

    for el in &targets {
        observer.observe(el);
    }
    targets.len()
}

/// Fire the counter inside a freshly revealed element, if it has one.
fn trigger_counter_within(target: &web::Element, counters: &Rc<RefCell<Vec<CounterBinding>>>) {
    let Ok(Some(counter_el)) = target.query_selector(COUNTER_SELECTOR) else {
        return;
    };
    let node: &web::Node = counter_el.as_ref();
    for binding in counters.borrow_mut().iter_mut() {
        if binding.el.is_same_node(Some(node)) {
            binding.count.trigger();
            break;
        }
    }
}
