//! Light/dark theme preference.
//!
//! The choice is persisted as a single `localStorage` key and applied as a
//! `data-theme` attribute on the `<html>` element so the stylesheet can key
//! off it. A stored value always wins; with nothing stored the system
//! color-scheme preference decides, defaulting to dark.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::rc::Rc;

use crate::context::PageContext;
use crate::dom;

const STORAGE_KEY: &str = "landing-ui.theme";
const THEME_ATTR: &str = "data-theme";
const TOGGLE_ID: &str = "theme-toggle";

/// The two supported themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The literal persisted to storage and set on the document root.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but the two literals counts as absent.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Option<Self> {
        match value {
            Some("light") => Some(Self::Light),
            Some("dark") => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toast wording for a theme change.
    #[must_use]
    pub fn confirmation(self) -> &'static str {
        match self {
            Self::Light => "Light theme enabled",
            Self::Dark => "Dark theme enabled",
        }
    }
}

/// Startup policy: a stored value always wins; otherwise go light only when
/// the system prefers light.
#[must_use]
pub fn resolve(stored: Option<&str>, system_prefers_light: bool) -> Theme {
    Theme::from_stored(stored).unwrap_or(if system_prefers_light {
        Theme::Light
    } else {
        Theme::Dark
    })
}

/// Read the persisted theme, defaulting to dark.
#[must_use]
pub fn get_theme(ctx: &PageContext) -> Theme {
    Theme::from_stored(read_stored(ctx).as_deref()).unwrap_or(Theme::Dark)
}

/// Apply `theme` to the document root, persist it, and confirm via toast.
pub fn set_theme(ctx: &PageContext, theme: Theme) {
    apply(ctx, theme);
    if let Ok(Some(storage)) = ctx.window.local_storage() {
        // Storage write failure (private mode, quota) is not surfaced.
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
    ctx.toast.show(theme.confirmation());
}

/// Apply the initial theme and wire the toggle button.
pub fn init(ctx: &Rc<PageContext>) {
    apply(ctx, resolve(read_stored(ctx).as_deref(), system_prefers_light(ctx)));

    let Some(button) = ctx.document.get_element_by_id(TOGGLE_ID) else {
        log::debug!("no #{TOGGLE_ID} button, theme toggle inactive");
        return;
    };

    let ctx = Rc::clone(ctx);
    dom::on_click(&button, move |_| {
        // Re-read the live attribute rather than trusting captured state.
        set_theme(&ctx, current(&ctx).toggled());
    });
}

fn read_stored(ctx: &PageContext) -> Option<String> {
    let storage = ctx.window.local_storage().ok().flatten()?;
    storage.get_item(STORAGE_KEY).ok().flatten()
}

fn system_prefers_light(ctx: &PageContext) -> bool {
    ctx.window
        .match_media("(prefers-color-scheme: light)")
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}

/// The theme currently on the document root, defaulting to dark.
fn current(ctx: &PageContext) -> Theme {
    ctx.document
        .document_element()
        .and_then(|root| Theme::from_stored(root.get_attribute(THEME_ATTR).as_deref()))
        .unwrap_or(Theme::Dark)
}

fn apply(ctx: &PageContext, theme: Theme) {
    if let Some(root) = ctx.document.document_element() {
        let _ = root.set_attribute(THEME_ATTR, theme.as_str());
    }
}
