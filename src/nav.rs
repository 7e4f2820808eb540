//! Section spy: keeps the table-of-contents link for the most-visible
//! section highlighted, and smooth-scrolls on link clicks.
//!
//! DESIGN
//! ======
//! An `IntersectionObserver` over every resolved section feeds a ratio map
//! keyed by section id. After each batch of entries the winner (highest
//! ratio) gets the active class; when nothing intersects the previous state
//! is left alone. Clicks mark their link active immediately instead of
//! waiting for the observer to catch up.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::context::PageContext;
use crate::dom;

const TOC_ID: &str = "toc";
const ACTIVE_CLASS: &str = "active";

/// Visibility ratios at which the observer re-reports.
const THRESHOLDS: [f64; 5] = [0.15, 0.25, 0.35, 0.5, 0.65];

/// Among currently-intersecting sections, the id with the highest ratio.
/// Ties go to the lexicographically first id so the outcome is stable.
#[must_use]
pub fn most_visible(ratios: &HashMap<String, f64>) -> Option<&str> {
    ratios
        .iter()
        .max_by(|a, b| {
            a.1.partial_cmp(b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.0.cmp(a.0))
        })
        .map(|(id, _)| id.as_str())
}

/// The fragment a TOC anchor points at, if it is an in-page link.
#[must_use]
pub fn fragment_of(href: Option<&str>) -> Option<&str> {
    let id = href?.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Collect TOC anchors, wire click handlers, and start the observer.
pub fn init(ctx: &Rc<PageContext>) {
    let Some(toc) = ctx.document.get_element_by_id(TOC_ID) else {
        log::debug!("no #{TOC_ID} container, section spy inactive");
        return;
    };
    let Ok(anchor_list) = toc.query_selector_all("a[href^='#']") else {
        return;
    };

    // (fragment id, link element) for every anchor; a fragment that resolves
    // to no element stays indexed so its active class still gets cleared,
    // but is never observed and never wins.
    let mut links: Vec<(String, Element)> = Vec::new();
    let mut sections: Vec<Element> = Vec::new();
    for link in dom::elements(&anchor_list) {
        let href = link.get_attribute("href");
        let Some(id) = fragment_of(href.as_deref()) else {
            continue;
        };
        if let Some(section) = ctx.document.get_element_by_id(id) {
            sections.push(section);
        }
        links.push((id.to_owned(), link));
    }
    if links.is_empty() {
        return;
    }
    let links = Rc::new(links);

    for (id, link) in links.iter() {
        let Some(section) = ctx.document.get_element_by_id(id) else {
            continue;
        };
        let links = Rc::clone(&links);
        let id = id.clone();
        dom::on_click(link, move |event| {
            event.prevent_default();
            dom::smooth_scroll_into_view(&section);
            set_active(&links, &id);
        });
    }

    observe_sections(&links, &sections);
}

/// Mark the link for `id` active and clear every other TOC link.
fn set_active(links: &[(String, Element)], id: &str) {
    for (link_id, link) in links {
        let classes = link.class_list();
        if link_id == id {
            let _ = classes.add_1(ACTIVE_CLASS);
        } else {
            let _ = classes.remove_1(ACTIVE_CLASS);
        }
    }
}

fn observe_sections(links: &Rc<Vec<(String, Element)>>, sections: &[Element]) {
    if sections.is_empty() {
        return;
    }

    let ratios: Rc<RefCell<HashMap<String, f64>>> = Rc::new(RefCell::new(HashMap::new()));

    let cb = {
        let links = Rc::clone(links);
        let ratios = Rc::clone(&ratios);
        Closure::wrap(Box::new(move |entries: js_sys::Array| {
            {
                let mut ratios = ratios.borrow_mut();
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let id = entry.target().id();
                    if entry.is_intersecting() {
                        ratios.insert(id, entry.intersection_ratio());
                    } else {
                        ratios.remove(&id);
                    }
                }
            }
            // Nothing intersecting leaves the previous highlight in place.
            let winner = most_visible(&ratios.borrow()).map(ToOwned::to_owned);
            if let Some(id) = winner {
                set_active(&links, &id);
            }
        }) as Box<dyn FnMut(js_sys::Array)>)
    };

    let options = IntersectionObserverInit::new();
    let thresholds = js_sys::Array::new();
    for t in THRESHOLDS {
        thresholds.push(&t.into());
    }
    options.set_threshold(thresholds.as_ref());

    if let Ok(observer) = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options) {
        for section in sections {
            observer.observe(section);
        }
    }
    cb.forget();
}
