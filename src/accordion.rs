//! FAQ accordion with delegated click handling.
//!
//! One listener on the `#faq` container; clicks are resolved to the nearest
//! `button[data-faq-toggle]` ancestor. The button's `aria-expanded` attribute
//! is the source of truth, and its next element sibling is the panel whose
//! `hidden` attribute mirrors it.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::context::PageContext;
use crate::dom;

const FAQ_ID: &str = "faq";
const TOGGLE_SELECTOR: &str = "button[data-faq-toggle]";

/// Only the literal `"true"` counts as expanded; a missing or malformed
/// attribute is treated as collapsed.
#[must_use]
pub fn is_expanded(aria_expanded: Option<&str>) -> bool {
    aria_expanded == Some("true")
}

/// Wire the delegated click handler, if the FAQ container exists.
pub fn init(ctx: &Rc<PageContext>) {
    let Some(container) = ctx.document.get_element_by_id(FAQ_ID) else {
        log::debug!("no #{FAQ_ID} container, accordion inactive");
        return;
    };

    let faq = container.clone();
    dom::on_click(&container, move |event| {
        let Some(button) = trigger_for(&faq, &event) else {
            return;
        };
        toggle(&button);
    });
}

/// Resolve a click inside the container to its trigger button, if any.
fn trigger_for(container: &Element, event: &web_sys::Event) -> Option<Element> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let button = target.closest(TOGGLE_SELECTOR).ok()??;
    // Guard against a match above the container.
    container.contains(Some(button.as_ref())).then_some(button)
}

/// Flip a trigger's expanded state and its sibling panel's visibility.
fn toggle(button: &Element) {
    let expanded = !is_expanded(button.get_attribute("aria-expanded").as_deref());
    let _ = button.set_attribute("aria-expanded", if expanded { "true" } else { "false" });

    if let Some(panel) = button.next_element_sibling() {
        if expanded {
            let _ = panel.remove_attribute("hidden");
        } else {
            let _ = panel.set_attribute("hidden", "");
        }
    }
}
