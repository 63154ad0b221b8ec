use super::*;

// =============================================================
// wrap_focus
// =============================================================

#[test]
fn tab_on_last_element_wraps_to_first() {
    assert_eq!(wrap_focus(3, Some(2), false), Some(0));
}

#[test]
fn shift_tab_on_first_element_wraps_to_last() {
    assert_eq!(wrap_focus(3, Some(0), true), Some(2));
}

#[test]
fn inner_moves_are_left_to_the_browser() {
    assert_eq!(wrap_focus(3, Some(1), false), None);
    assert_eq!(wrap_focus(3, Some(1), true), None);
    assert_eq!(wrap_focus(3, Some(0), false), None);
    assert_eq!(wrap_focus(3, Some(2), true), None);
}

#[test]
fn focus_outside_panel_or_empty_panel_is_ignored() {
    assert_eq!(wrap_focus(3, None, false), None);
    assert_eq!(wrap_focus(0, Some(0), false), None);
}

#[test]
fn single_element_keeps_focus() {
    assert_eq!(wrap_focus(1, Some(0), false), Some(0));
    assert_eq!(wrap_focus(1, Some(0), true), Some(0));
}

#[test]
fn focusable_selector_skips_disabled_controls() {
    assert!(FOCUSABLE_SELECTOR.contains("textarea:not([disabled])"));
    assert!(FOCUSABLE_SELECTOR.contains("button:not([disabled])"));
    assert!(FOCUSABLE_SELECTOR.contains("[tabindex]:not([tabindex=\"-1\"])"));
}
