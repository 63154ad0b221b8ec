//! Modal dialog helpers: Tab focus trapping and body scroll locking.
//!
//! The DOM-touching functions require a browser environment and exist only
//! in hydrate builds; [`wrap_focus`] is the pure part of the trap.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Elements that take part in the panel's Tab order.
pub const FOCUSABLE_SELECTOR: &str = "a[href], button:not([disabled]), textarea:not([disabled]), \
                                      input:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

/// Index to move focus to when Tab would leave a panel of `count` focusable
/// elements, or `None` to let the browser handle it.
///
/// Only the edges wrap: Tab on the last element goes to the first, Shift+Tab
/// on the first goes to the last. Focus outside the panel is left alone.
pub fn wrap_focus(count: usize, active: Option<usize>, backwards: bool) -> Option<usize> {
    let last = count.checked_sub(1)?;
    match active? {
        0 if backwards => Some(last),
        i if !backwards && i == last => Some(0),
        _ => None,
    }
}

/// Keep Tab / Shift+Tab focus inside `panel`.
#[cfg(feature = "hydrate")]
pub fn trap_tab_focus(panel: &web_sys::Element, ev: &web_sys::KeyboardEvent) {
    use wasm_bindgen::JsCast;

    if ev.key() != "Tab" {
        return;
    }
    let Ok(nodes) = panel.query_selector_all(FOCUSABLE_SELECTOR) else {
        return;
    };
    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());
    let active_index = active.and_then(|el| {
        let active_node: &web_sys::Node = &el;
        (0..nodes.length()).find(|&i| nodes.item(i).is_some_and(|n| n.is_same_node(Some(active_node))))
    });

    let Some(target) = wrap_focus(nodes.length() as usize, active_index.map(|i| i as usize), ev.shift_key()) else {
        return;
    };
    let target = u32::try_from(target).ok().and_then(|i| nodes.item(i));
    if let Some(el) = target.and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok()) {
        ev.prevent_default();
        let _ = el.focus();
    }
}

/// Hide body overflow; returns the previous inline value for [`restore_body_scroll`].
#[cfg(feature = "hydrate")]
pub fn lock_body_scroll() -> String {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return String::new();
    };
    let style = body.style();
    let previous = style.get_property_value("overflow").unwrap_or_default();
    let _ = style.set_property("overflow", "hidden");
    previous
}

/// Put back the body overflow saved by [`lock_body_scroll`].
#[cfg(feature = "hydrate")]
pub fn restore_body_scroll(previous: &str) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    if previous.is_empty() {
        let _ = style.remove_property("overflow");
    } else {
        let _ = style.set_property("overflow", previous);
    }
}
