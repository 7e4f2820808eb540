//! Small web-sys helpers shared by the controllers.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget, NodeList, ScrollBehavior, ScrollIntoViewOptions};

/// Attach a click listener that lives for the lifetime of the page.
///
/// The closure is intentionally leaked with `forget`; every listener in this
/// crate is attached once at startup and never removed.
pub fn on_click(target: &EventTarget, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let _ = target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Collect a `NodeList` into the elements it contains, skipping non-elements.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Smooth-scroll the viewport so `element` is in view.
pub fn smooth_scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
