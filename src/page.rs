//! Scroll overlay: nav, the four content sections and their interactions.

use crate::audio;
use crate::core::content::{Block, Feedback, Link, SectionContent, BRAND, NAV_LINKS, SECTIONS};
use crate::core::{ProfileImage, RevealTracker, ScrollState, SectionId, SectionLayout};
use crate::dom;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct Page {
    pub scroll: Rc<RefCell<ScrollState>>,
    _reveals: Rc<RefCell<RevealTracker>>,
    _observer: Option<web::IntersectionObserver>,
}

#[inline]
fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent.append_child(child).map(|_| ()).map_err(js_err)
}

fn wire_feedback(el: &web::Element, feedback: Feedback) {
    if feedback.hover {
        dom::add_listener(el, "mouseenter", audio::hover);
    }
    if feedback.click {
        dom::add_listener(el, "click", audio::click);
    }
}

fn link_element(document: &web::Document, link: &Link, class: &str) -> anyhow::Result<web::Element> {
    let a = dom::text_element(document, "a", class, link.label)?;
    _ = a.set_attribute("href", link.href);
    if link.new_tab {
        _ = a.set_attribute("target", "_blank");
        _ = a.set_attribute("rel", "noopener noreferrer");
    }
    wire_feedback(&a, link.feedback);
    Ok(a)
}

pub fn build(document: &web::Document) -> anyhow::Result<Page> {
    let container = document
        .get_element_by_id("scroll")
        .ok_or_else(|| anyhow::anyhow!("missing #scroll"))?;
    match document.get_element_by_id("nav") {
        Some(nav) => build_nav(document, &nav)?,
        None => log::warn!("[page] no #nav, skipping navigation"),
    }

    let column = dom::element(document, "div", "pages")?;
    let mut sections: SmallVec<[web::Element; 4]> = SmallVec::new();
    for content in SECTIONS {
        let el = build_section(document, content)?;
        append(&column, &el)?;
        sections.push(el);
    }
    append(&container, &column)?;

    let reveals = Rc::new(RefCell::new(RevealTracker::default()));
    let observer = match observe_reveals(&container, &sections, reveals.clone()) {
        Ok(o) => Some(o),
        Err(e) => {
            // no observer support: show everything up front
            log::warn!("[page] IntersectionObserver unavailable: {:?}", e);
            for el in &sections {
                if let Some(id) = SectionId::from_anchor(&el.id()) {
                    if reveals.borrow_mut().observe(id, true, 1.0) {
                        _ = el.class_list().add_1("revealed");
                    }
                }
            }
            None
        }
    };

    let scroll = Rc::new(RefCell::new(ScrollState::default()));
    scroll.borrow_mut().set_layout(measure_layout(&container, &sections));
    wire_scroll(&container, sections.clone(), scroll.clone());
    log::info!("[page] built {} sections", sections.len());

    Ok(Page {
        scroll,
        _reveals: reveals,
        _observer: observer,
    })
}

fn build_nav(document: &web::Document, nav: &web::Element) -> anyhow::Result<()> {
    let brand = dom::element(document, "div", "brand")?;
    append(&brand, &dom::text_element(document, "span", "brand-name", BRAND)?)?;
    append(&brand, &dom::element(document, "div", "brand-underline")?)?;
    wire_feedback(&brand, Feedback::CLICK);
    append(nav, &brand)?;

    let links = dom::element(document, "div", "nav-links")?;
    for link in NAV_LINKS {
        append(&links, &link_element(document, link, "nav-link")?)?;
    }
    append(nav, &links)
}

fn build_section(document: &web::Document, content: &SectionContent) -> anyhow::Result<web::Element> {
    let section = dom::element(document, "section", "section")?;
    section.set_id(content.id.anchor());
    _ = section.set_attribute("style", &format!("min-height:{}vh", content.id.min_height_vh()));
    let inner = dom::element(document, "div", "reveal")?;
    for block in content.blocks {
        append(&inner, &render_block(document, content.id, block)?)?;
    }
    append(&section, &inner)?;
    Ok(section)
}

fn render_block(document: &web::Document, id: SectionId, block: &Block) -> anyhow::Result<web::Element> {
    let el = match *block {
        Block::Eyebrow(t) => dom::text_element(document, "div", "eyebrow mono", t)?,
        Block::Title(t) => {
            let tag = if id == SectionId::Home { "h1" } else { "h2" };
            dom::text_element(document, tag, "title gold-text", t)?
        }
        Block::Heading(t) => dom::text_element(document, "h2", "heading", t)?,
        Block::Lead(t) => dom::text_element(document, "p", "lead", t)?,
        Block::Paragraph(t) => dom::text_element(document, "p", "body", t)?,
        Block::Quote(t) => dom::text_element(document, "p", "quote", t)?,
        Block::Tags(tags) => {
            let row = dom::element(document, "div", "tags")?;
            for t in tags {
                let tag = dom::text_element(document, "div", "tag glass mono", t)?;
                wire_feedback(&tag, Feedback::HOVER);
                append(&row, &tag)?;
            }
            row
        }
        Block::ProfileCard { name, caption } => {
            let card = dom::element(document, "div", "profile-card glass")?;
            append(&card, &profile_image(document)?)?;
            append(&card, &dom::element(document, "div", "profile-shade")?)?;
            let label = dom::element(document, "div", "profile-label")?;
            append(&label, &dom::text_element(document, "h3", "gold-text", name)?)?;
            append(&label, &dom::text_element(document, "p", "mono", caption)?)?;
            append(&card, &label)?;
            wire_feedback(&card, Feedback::CLICK);
            card
        }
        Block::ScrollHint => {
            let hint = dom::text_element(document, "div", "scroll-hint", "\u{2304}")?;
            wire_feedback(&hint, Feedback::CLICK);
            hint
        }
        Block::Cta(ref link) => link_element(document, link, "cta")?,
        Block::Icons(links) => {
            let row = dom::element(document, "div", "icons")?;
            for link in links {
                append(&row, &link_element(document, link, "icon")?)?;
            }
            row
        }
        Block::Footer(lines) => {
            let foot = dom::element(document, "div", "footer mono")?;
            for line in lines {
                append(&foot, &dom::text_element(document, "span", "", line)?)?;
            }
            foot
        }
    };
    Ok(el)
}

/// Profile picture with a single switch to the fallback URL on error.
fn profile_image(document: &web::Document) -> anyhow::Result<web::HtmlImageElement> {
    let img: web::HtmlImageElement = dom::element(document, "img", "profile-img")?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("<img> is not an HtmlImageElement"))?;
    let state = Rc::new(RefCell::new(ProfileImage::default()));
    img.set_alt("SO Hid Profile");

    // listener goes on before src so an immediate failure is still seen
    let img_err = img.clone();
    let state_err = state.clone();
    dom::add_listener(&img, "error", move || {
        let next = state_err.borrow_mut().on_error();
        match next {
            Some(url) => {
                log::warn!("[page] profile image failed, switching to fallback");
                img_err.set_src(url);
            }
            None => log::warn!("[page] fallback image failed too"),
        }
    });
    img.set_src(state.borrow().current_url());
    Ok(img)
}

type ObserverCallback = dyn FnMut(js_sys::Array, web::IntersectionObserver);

fn observe_reveals(
    root: &web::Element,
    sections: &[web::Element],
    reveals: Rc<RefCell<RevealTracker>>,
) -> Result<web::IntersectionObserver, JsValue> {
    let threshold = reveals.borrow().threshold();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = SectionId::from_anchor(&target.id()) else {
                    continue;
                };
                let first = reveals.borrow_mut().observe(
                    id,
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                );
                if first {
                    _ = target.class_list().add_1("revealed");
                    observer.unobserve(&target);
                    log::info!("[page] revealed #{}", id.anchor());
                }
            }
        },
    ) as Box<ObserverCallback>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_root(Some(root));
    opts.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)?;
    callback.forget();
    for s in sections {
        observer.observe(s);
    }
    Ok(observer)
}

/// Section tops in the container's content coordinates.
fn measure_layout(container: &web::Element, sections: &[web::Element]) -> SectionLayout {
    let origin = container.get_bounding_client_rect().top() - container.scroll_top() as f64;
    let tops = sections.iter().filter_map(|el| {
        SectionId::from_anchor(&el.id()).map(|id| (id, el.get_bounding_client_rect().top() - origin))
    });
    SectionLayout::new(
        tops,
        container.scroll_height() as f64,
        container.client_height() as f64,
    )
}

fn wire_scroll(
    container: &web::Element,
    sections: SmallVec<[web::Element; 4]>,
    scroll: Rc<RefCell<ScrollState>>,
) {
    let c = container.clone();
    dom::add_listener(container, "scroll", move || {
        let target = ScrollState::fraction(
            c.scroll_top() as f64,
            c.scroll_height() as f64,
            c.client_height() as f64,
        );
        // heights depend on content and viewport, so measure on every scroll
        let layout = measure_layout(&c, &sections);
        let mut s = scroll.borrow_mut();
        s.set_target(target);
        s.set_layout(layout);
    });
}

/// Expose the section under the damped scroll offset to the stylesheet.
pub fn mark_section(document: &web::Document, id: SectionId) {
    if let Some(body) = document.body() {
        _ = body.set_attribute("data-section", id.anchor());
    }
}
