// Host-side tests for scroll-derived values.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scroll {
    include!("../src/core/scroll.rs");
}

use scroll::*;

#[test]
fn zero_speed_never_translates() {
    for scroll_y in [0.0, 120.0, 999.5, 12_000.0] {
        assert_eq!(parallax_offset(scroll_y, 1234.0, 0.0), 0.0);
    }
}

#[test]
fn parallax_is_proportional_to_scroll_distance() {
    assert_eq!(parallax_offset(1000.0, 400.0, 0.5), 300.0);
    assert_eq!(parallax_offset(2000.0, 400.0, 0.5), 800.0);
}

#[test]
fn element_at_the_scroll_origin_stays_put() {
    assert_eq!(parallax_offset(500.0, 500.0, 0.5), 0.0);
}

#[test]
fn elements_below_the_fold_translate_upward() {
    // Element further down the document than the scroll position moves the
    // other way.
    assert!(parallax_offset(100.0, 900.0, 0.5) < 0.0);
}

#[test]
fn arrows_hidden_when_the_menu_fits() {
    let vis = arrow_visibility(0.0, 300.0, 300.0);
    assert!(!vis.left && !vis.right);
}

#[test]
fn only_right_arrow_at_the_start() {
    let vis = arrow_visibility(0.0, 600.0, 300.0);
    assert!(!vis.left);
    assert!(vis.right);
}

#[test]
fn both_arrows_mid_scroll() {
    let vis = arrow_visibility(150.0, 600.0, 300.0);
    assert!(vis.left && vis.right);
}

#[test]
fn only_left_arrow_at_the_end() {
    let vis = arrow_visibility(300.0, 600.0, 300.0);
    assert!(vis.left);
    assert!(!vis.right);
}

#[test]
fn edge_tolerance_absorbs_subpixel_rounding() {
    assert!(!arrow_visibility(4.0, 600.0, 300.0).left);
    assert!(arrow_visibility(6.0, 600.0, 300.0).left);
    assert!(!arrow_visibility(296.0, 600.0, 300.0).right);
    assert!(arrow_visibility(294.0, 600.0, 300.0).right);
}
