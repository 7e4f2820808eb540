//! Single-slot transient status message.
//!
//! The page carries one `#toast` element. Showing a message sets its text,
//! adds the visible class, and arms an auto-hide timer. A new message while
//! one is pending replaces the text and restarts the clock, so at most one
//! toast is ever visible.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::context::InitError;

const TOAST_ID: &str = "toast";
const VISIBLE_CLASS: &str = "toast--visible";

/// How long a toast stays up before auto-hiding.
pub const TOAST_HIDE_MS: u32 = 2600;

/// Handle to the page's toast element and its pending hide timer.
pub struct Toast {
    element: HtmlElement,
    timer: RefCell<Option<Timeout>>,
}

impl Toast {
    /// Find the toast element in the document.
    ///
    /// # Errors
    /// The toast is required markup; returns [`InitError::MissingElement`]
    /// when `#toast` is absent or not an HTML element.
    pub fn locate(document: &Document) -> Result<Self, InitError> {
        let element = document
            .get_element_by_id(TOAST_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(InitError::MissingElement(TOAST_ID))?;
        Ok(Self { element, timer: RefCell::new(None) })
    }

    /// Show `msg`, restarting the auto-hide timer.
    pub fn show(&self, msg: &str) {
        self.element.set_text_content(Some(msg));
        let _ = self.element.class_list().add_1(VISIBLE_CLASS);

        // Dropping a pending Timeout cancels it, so the clock restarts
        // instead of stacking.
        let element = self.element.clone();
        let hide = Timeout::new(TOAST_HIDE_MS, move || {
            let _ = element.class_list().remove_1(VISIBLE_CLASS);
        });
        *self.timer.borrow_mut() = Some(hide);
    }
}
