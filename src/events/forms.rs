//! Signup form and navigation wiring: input masks, the account-kind switch,
//! the custom dropdown, the mobile menu and the sub-header scroll arrows.
//! Every block silently no-ops when its elements are not on the page.

use crate::constants::{
    ACCOUNT_SELECT_ID, ACTIVE_CLASS, BUSINESS_INPUTS_ID, CPF_INPUT_ID, DROPDOWN_OPEN_CLASS,
    DROPDOWN_OPTION_SELECTOR, DROPDOWN_SELECTED_CLASS, DROPDOWN_SELECTOR,
    DROPDOWN_TRIGGER_SELECTOR, DROPDOWN_VALUE_ATTR, DROPDOWN_VALUE_ID, HEADER_ACTIONS_SELECTOR,
    INDIVIDUAL_INPUTS_ID, MOBILE_MENU_BTN_SELECTOR, NAV_LEFT_ARROW_SELECTOR, NAV_MENU_SELECTOR,
    NAV_RIGHT_ARROW_SELECTOR, NAV_SCROLL_STEP_PX, NAV_VISIBLE_CLASS, NUMERIC_INPUT_IDS,
};
use crate::core::{arrow_visibility, digits_only, mask_cpf, AccountKind, DropdownState};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_forms(document: &web::Document) {
    wire_numeric_inputs(document);
    wire_cpf_mask(document);
    wire_account_kind(document);
    wire_custom_dropdown(document);
    wire_mobile_menu(document);
    wire_nav_arrows(document);
}

fn input_by_id(document: &web::Document, id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

/// Branch and account number fields accept digits only.
fn wire_numeric_inputs(document: &web::Document) {
    for id in NUMERIC_INPUT_IDS {
        let Some(input) = input_by_id(document, id) else {
            continue;
        };
        let input_for_handler = input.clone();
        dom::add_event_listener(&input, "input", move |_| {
            input_for_handler.set_value(&digits_only(&input_for_handler.value()));
        });
    }
}

fn wire_cpf_mask(document: &web::Document) {
    let Some(input) = input_by_id(document, CPF_INPUT_ID) else {
        return;
    };
    let input_for_handler = input.clone();
    dom::add_event_listener(&input, "input", move |_| {
        input_for_handler.set_value(&mask_cpf(&input_for_handler.value()));
    });
}

/// Show the input group for the selected account kind and hide the other;
/// evaluated once at wiring time and again on every change event.
fn wire_account_kind(document: &web::Document) {
    let Some(select) = document
        .get_element_by_id(ACCOUNT_SELECT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
    else {
        return;
    };
    let (Some(business), Some(individual)) = (
        document.get_element_by_id(BUSINESS_INPUTS_ID),
        document.get_element_by_id(INDIVIDUAL_INPUTS_ID),
    ) else {
        return;
    };

    let apply = {
        let select = select.clone();
        move || {
            let kind = AccountKind::from_value(&select.value()).unwrap_or(AccountKind::Business);
            let (show, hide) = match kind {
                AccountKind::Individual => (&individual, &business),
                AccountKind::Business => (&business, &individual),
            };
            dom::set_style(show, "display", "flex");
            dom::set_style(hide, "display", "none");
        }
    };
    apply();
    dom::add_event_listener(&select, "change", move |_| apply());
}

fn wire_custom_dropdown(document: &web::Document) {
    let Ok(Some(container)) = document.query_selector(DROPDOWN_SELECTOR) else {
        return;
    };
    let Ok(Some(trigger)) = document.query_selector(DROPDOWN_TRIGGER_SELECTOR) else {
        return;
    };
    let Some(select) = document
        .get_element_by_id(ACCOUNT_SELECT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
    else {
        return;
    };
    let options = dom::query_all(document, DROPDOWN_OPTION_SELECTOR);
    let label = document.get_element_by_id(DROPDOWN_VALUE_ID);

    let state = Rc::new(RefCell::new(DropdownState::default()));

    // Trigger click flips the panel; stop propagation so the document-level
    // close handler does not immediately undo it.
    {
        let state = state.clone();
        let container = container.clone();
        dom::add_event_listener(&trigger, "click", move |ev| {
            let open = state.borrow_mut().toggle();
            set_open_class(&container, open);
            ev.stop_propagation();
        });
    }

    // Option clicks: record the choice, update the visible label, write
    // through to the native select and re-dispatch its change event so the
    // account-kind switch runs.
    for (index, option) in options.iter().enumerate() {
        let state = state.clone();
        let container = container.clone();
        let select = select.clone();
        let label = label.clone();
        let all_options = options.clone();
        let option_for_handler = option.clone();
        dom::add_click_listener(option, move || {
            state.borrow_mut().select(index);
            for other in &all_options {
                _ = other.class_list().remove_1(DROPDOWN_SELECTED_CLASS);
            }
            _ = option_for_handler
                .class_list()
                .add_1(DROPDOWN_SELECTED_CLASS);
            if let Some(label) = &label {
                label.set_text_content(option_for_handler.text_content().as_deref());
            }
            if let Some(value) = option_for_handler.get_attribute(DROPDOWN_VALUE_ATTR) {
                select.set_value(&value);
            }
            set_open_class(&container, false);
            if let Ok(ev) = web::Event::new("change") {
                _ = select.dispatch_event(&ev);
            }
        });
    }

    // Click anywhere else closes the panel.
    let state_doc = state;
    let container_doc = container;
    dom::add_event_listener(document, "click", move |ev| {
        let target_node = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
        if !container_doc.contains(target_node.as_ref()) {
            state_doc.borrow_mut().close();
            set_open_class(&container_doc, false);
        }
    });
}

fn set_open_class(container: &web::Element, open: bool) {
    let cl = container.class_list();
    if open {
        _ = cl.add_1(DROPDOWN_OPEN_CLASS);
    } else {
        _ = cl.remove_1(DROPDOWN_OPEN_CLASS);
    }
}

fn wire_mobile_menu(document: &web::Document) {
    let Ok(Some(button)) = document.query_selector(MOBILE_MENU_BTN_SELECTOR) else {
        return;
    };
    let Ok(Some(actions)) = document.query_selector(HEADER_ACTIONS_SELECTOR) else {
        return;
    };
    let button_for_handler = button.clone();
    dom::add_click_listener(&button, move || {
        _ = actions.class_list().toggle(ACTIVE_CLASS);
        _ = button_for_handler.class_list().toggle(ACTIVE_CLASS);
    });
}

/// Sub-header menu arrows: visibility follows the scroll position, clicks
/// nudge the menu by a fixed step.
fn wire_nav_arrows(document: &web::Document) {
    let Ok(Some(menu)) = document.query_selector(NAV_MENU_SELECTOR) else {
        return;
    };
    let Ok(Some(left)) = document.query_selector(NAV_LEFT_ARROW_SELECTOR) else {
        return;
    };
    let Ok(Some(right)) = document.query_selector(NAV_RIGHT_ARROW_SELECTOR) else {
        return;
    };

    let update = {
        let menu = menu.clone();
        let left = left.clone();
        let right = right.clone();
        move || {
            let vis = arrow_visibility(
                f64::from(menu.scroll_left()),
                f64::from(menu.scroll_width()),
                f64::from(menu.client_width()),
            );
            set_visible_class(&left, vis.left);
            set_visible_class(&right, vis.right);
        }
    };
    update();

    {
        let update = update.clone();
        dom::add_event_listener(&menu, "scroll", move |_| update());
    }
    if let Some(window) = web::window() {
        let update = update.clone();
        dom::add_event_listener(&window, "resize", move |_| update());
    }

    let menu_left = menu.clone();
    dom::add_click_listener(&left, move || {
        scroll_menu_by(&menu_left, -NAV_SCROLL_STEP_PX);
    });
    let menu_right = menu.clone();
    dom::add_click_listener(&right, move || {
        scroll_menu_by(&menu_right, NAV_SCROLL_STEP_PX);
    });
}

fn set_visible_class(arrow: &web::Element, visible: bool) {
    let cl = arrow.class_list();
    if visible {
        _ = cl.add_1(NAV_VISIBLE_CLASS);
    } else {
        _ = cl.remove_1(NAV_VISIBLE_CLASS);
    }
}

fn scroll_menu_by(menu: &web::Element, dx: f64) {
    let opts = web::ScrollToOptions::new();
    opts.set_left(dx);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    menu.scroll_by_with_scroll_to_options(&opts);
}
