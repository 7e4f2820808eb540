//! Jump-to-section and back-to-top buttons.

use std::rc::Rc;

use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::context::PageContext;
use crate::dom;

const JUMP_ID: &str = "jump-start";
const JUMP_TARGET_ID: &str = "get-started";
const TOP_ID: &str = "back-to-top";

/// Wire both buttons; each is optional.
pub fn init(ctx: &Rc<PageContext>) {
    if let Some(button) = ctx.document.get_element_by_id(JUMP_ID) {
        let ctx = Rc::clone(ctx);
        dom::on_click(&button, move |_| {
            // No-op when the section is missing from the page.
            if let Some(section) = ctx.document.get_element_by_id(JUMP_TARGET_ID) {
                dom::smooth_scroll_into_view(&section);
            }
        });
    }

    if let Some(button) = ctx.document.get_element_by_id(TOP_ID) {
        let ctx = Rc::clone(ctx);
        dom::on_click(&button, move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            ctx.window.scroll_to_with_scroll_to_options(&options);
        });
    }
}
