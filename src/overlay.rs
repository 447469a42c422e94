use crate::constants::SPLASH_FADE_MS;
use crate::core::content::{BRAND, SPLASH_SUBTITLE};
use web_sys as web;

const SPLASH_ID: &str = "splash";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SPLASH_ID) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        _ = el.set_attribute("aria-hidden", "false");
        _ = el.set_attribute("style", "");
    }
    for (id, text) in [("splash-title", BRAND), ("splash-subtitle", SPLASH_SUBTITLE)] {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }
}

/// Fade the splash out, then take it out of hit-testing and layout.
#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SPLASH_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        _ = el.set_attribute("aria-hidden", "true");
        // fallback for stylesheets without the .hidden rule
        let style = format!(
            "opacity:0;pointer-events:none;visibility:hidden;\
             transition:opacity {ms}ms cubic-bezier(0.19,1,0.22,1),visibility 0s {ms}ms",
            ms = SPLASH_FADE_MS
        );
        _ = el.set_attribute("style", &style);
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(SPLASH_ID)
        .map(|el| el.class_list().contains("hidden"))
        .unwrap_or(true)
}
