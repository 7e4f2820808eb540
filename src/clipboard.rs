//! Copy-to-clipboard buttons with toast feedback.
//!
//! The async clipboard API is tried first; when it rejects or is missing
//! (insecure context, older browser) a hidden textarea plus the legacy
//! `execCommand("copy")` path takes over. Overlapping copies are not
//! serialized; each runs its own success or failure path and the toast shows
//! whichever finishes last.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use crate::context::PageContext;
use crate::dom;

const COPY_SELECTOR: &str = "button[data-copy]";
const ENV_BUTTON_ID: &str = "copy-env";
const ENV_LABEL: &str = "env template";

/// Placeholder lines copied by the aggregate `#copy-env` button, in order.
const ENV_LINES: [&str; 4] = [
    "LANDING_API_KEY=<your api key>",
    "LANDING_API_SECRET=<your api secret>",
    "LANDING_REGION=<region>",
    "LANDING_ENDPOINT=https://api.example.com/v1",
];

pub const FAILED_MESSAGE: &str = "Copy failed — copy manually";

/// A payload bound to one copy button.
#[derive(Clone, Debug)]
pub struct CopyTarget {
    pub text: String,
    pub label: String,
}

/// The aggregate env-template payload, newline-joined.
#[must_use]
pub fn env_payload() -> String {
    ENV_LINES.join("\n")
}

/// Toast wording for a successful copy.
#[must_use]
pub fn copied_message(label: &str) -> String {
    format!("{label} copied")
}

/// Bind every `data-copy` button plus the aggregate env button.
pub fn init(ctx: &Rc<PageContext>) {
    if let Ok(list) = ctx.document.query_selector_all(COPY_SELECTOR) {
        for button in dom::elements(&list) {
            let Some(text) = button.get_attribute("data-copy") else {
                continue;
            };
            let label = button
                .get_attribute("data-copy-label")
                .unwrap_or_else(|| "text".to_owned());
            let ctx = Rc::clone(ctx);
            dom::on_click(&button, move |_| {
                copy(&ctx, CopyTarget { text: text.clone(), label: label.clone() });
            });
        }
    }

    if let Some(button) = ctx.document.get_element_by_id(ENV_BUTTON_ID) {
        let ctx = Rc::clone(ctx);
        dom::on_click(&button, move |_| {
            copy(&ctx, CopyTarget { text: env_payload(), label: ENV_LABEL.to_owned() });
        });
    }
}

/// Write `target.text` to the clipboard and toast the outcome.
pub fn copy(ctx: &Rc<PageContext>, target: CopyTarget) {
    let clipboard = ctx.window.navigator().clipboard();
    if AsRef::<JsValue>::as_ref(&clipboard).is_undefined() {
        fallback_copy(ctx, &target);
        return;
    }

    let ctx = Rc::clone(ctx);
    spawn_local(async move {
        match JsFuture::from(clipboard.write_text(&target.text)).await {
            Ok(_) => ctx.toast.show(&copied_message(&target.label)),
            Err(err) => {
                log::warn!("clipboard write rejected: {err:?}");
                fallback_copy(&ctx, &target);
            }
        }
    });
}

fn fallback_copy(ctx: &PageContext, target: &CopyTarget) {
    if legacy_copy(ctx, &target.text) {
        ctx.toast.show(&copied_message(&target.label));
    } else {
        ctx.toast.show(FAILED_MESSAGE);
    }
}

/// Select `text` in an off-screen textarea and run `execCommand("copy")`.
/// The textarea is removed on every exit path after insertion.
fn legacy_copy(ctx: &PageContext, text: &str) -> bool {
    let Some(body) = ctx.document.body() else {
        return false;
    };
    let Ok(element) = ctx.document.create_element("textarea") else {
        return false;
    };
    let Ok(textarea) = element.dyn_into::<HtmlTextAreaElement>() else {
        return false;
    };
    textarea.set_value(text);
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("left", "-9999px");

    if body.append_child(&textarea).is_err() {
        return false;
    }
    textarea.select();
    let copied = ctx
        .document
        .dyn_ref::<HtmlDocument>()
        .is_some_and(|doc| doc.exec_command("copy").unwrap_or(false));
    textarea.remove();
    copied
}
