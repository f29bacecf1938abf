use crate::constants::{
    CARD_INDEX_ATTR, GLARE_SELECTOR, MAGNET_SELECTOR, MAGNET_STRENGTH, TILT_CARD_SELECTOR,
    TILT_STAGGER_STEP_SEC,
};
use crate::core::{magnet_offset, GlareFrame, TiltMapper, TiltSettings, TiltTransform};
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the 3D tilt onto every matching card. Returns how many were wired.
pub fn wire_tilt_cards(document: &web::Document) -> usize {
    let cards = dom::query_all(document, TILT_CARD_SELECTOR);
    for card in &cards {
        // Stagger the entrance transition by the card's declared index.
        let index: u32 = card
            .get_attribute(CARD_INDEX_ATTR)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        dom::set_style(
            card,
            "transition-delay",
            &format!("{}s", index as f32 * TILT_STAGGER_STEP_SEC),
        );
        wire_tilt(card.clone());
    }
    cards.len()
}

fn wire_tilt(card: web::Element) {
    let settings = TiltSettings::default();
    let mut mapper = TiltMapper::new(settings);
    if let Some(html) = card.dyn_ref::<web::HtmlElement>() {
        mapper.set_bounds(html.offset_width() as f32, html.offset_height() as f32);
    }
    let mapper = Rc::new(RefCell::new(mapper));

    dom::set_style(
        &card,
        "transform",
        &format!("perspective({}px)", settings.perspective_px),
    );

    // pointerenter: refresh the cached bounds so responsive layout changes
    // are picked up.
    {
        let mapper = mapper.clone();
        let card_enter = card.clone();
        dom::add_event_listener(&card, "pointerenter", move |_| {
            if let Some(html) = card_enter.dyn_ref::<web::HtmlElement>() {
                mapper
                    .borrow_mut()
                    .set_bounds(html.offset_width() as f32, html.offset_height() as f32);
            }
        });
    }

    // pointermove: map the sample to rotation plus glare.
    {
        let mapper = mapper.clone();
        let card_move = card.clone();
        dom::add_event_listener(&card, "pointermove", move |ev| {
            let Some(pointer) = ev
                .dyn_ref::<web::MouseEvent>()
                .map(|m| Vec2::new(m.client_x() as f32, m.client_y() as f32))
            else {
                return;
            };
            let rect = card_move.get_bounding_client_rect();
            let local = pointer - Vec2::new(rect.left() as f32, rect.top() as f32);
            let mapper = mapper.borrow();
            apply_tilt(&card_move, &mapper.sample(local));
            apply_glare(&card_move, Some(mapper.glare(local)));
        });
    }

    // pointerleave: settle back to rest over the card's own transition.
    let card_leave = card.clone();
    dom::add_event_listener(&card, "pointerleave", move |_| {
        apply_tilt(&card_leave, &mapper.borrow().rest());
        apply_glare(&card_leave, None);
    });
}

fn apply_tilt(card: &web::Element, transform: &TiltTransform) {
    dom::set_style(card, "transform", &transform.to_css());
}

fn apply_glare(card: &web::Element, frame: Option<GlareFrame>) {
    let Ok(Some(glare)) = card.query_selector(GLARE_SELECTOR) else {
        return;
    };
    match frame {
        Some(frame) => {
            dom::set_style(&glare, "opacity", &frame.opacity.to_string());
            dom::set_style(&glare, "background", &frame.background_css());
        }
        None => dom::set_style(&glare, "opacity", "0"),
    }
}

/// Wire the magnetic pull onto every matching button.
pub fn wire_magnetic_buttons(document: &web::Document) -> usize {
    let buttons = dom::query_all(document, MAGNET_SELECTOR);
    for button in &buttons {
        wire_magnet(button.clone());
    }
    buttons.len()
}

fn wire_magnet(button: web::Element) {
    {
        let button_move = button.clone();
        dom::add_event_listener(&button, "pointermove", move |ev| {
            let Some(m) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let rect = button_move.get_bounding_client_rect();
            let local = Vec2::new(
                m.client_x() as f32 - rect.left() as f32,
                m.client_y() as f32 - rect.top() as f32,
            );
            let size = Vec2::new(rect.width() as f32, rect.height() as f32);
            let offset = magnet_offset(local, size, MAGNET_STRENGTH);
            dom::set_style(
                &button_move,
                "transform",
                &format!("translate({}px, {}px)", offset.x, offset.y),
            );
        });
    }
    let button_leave = button.clone();
    dom::add_event_listener(&button, "pointerleave", move |_| {
        dom::set_style(&button_leave, "transform", "translate(0, 0)");
    });
}
