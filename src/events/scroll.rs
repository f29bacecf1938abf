use crate::constants::{PARALLAX_SELECTOR, PARALLAX_SPEED};
use crate::core::parallax_offset;
use crate::dom;
use web_sys as web;

/// Translate every parallax element by a fraction of the scroll distance.
/// Purely reactive: driven by the window scroll stream, no owned loop.
pub fn wire_parallax(document: &web::Document) -> usize {
    let targets = dom::query_all(document, PARALLAX_SELECTOR);
    if targets.is_empty() {
        return 0;
    }
    let count = targets.len();
    let Some(window) = web::window() else {
        return 0;
    };
    let window_for_handler = window.clone();
    dom::add_event_listener(&window, "scroll", move |_| {
        let scroll_y = window_for_handler.page_y_offset().unwrap_or(0.0);
        for el in &targets {
            let element_doc_y = el.get_bounding_client_rect().top() + scroll_y;
            let offset = parallax_offset(scroll_y, element_doc_y, PARALLAX_SPEED);
            dom::set_style(el, "transform", &format!("translateY({offset}px)"));
        }
    });
    count
}
