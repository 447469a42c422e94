// Host-side tests for page state: sections, reveals, scroll, copy and images.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod site {
    pub mod sections {
        include!("../src/core/sections.rs");
    }
    pub mod content {
        include!("../src/core/content.rs");
    }
    pub mod image {
        include!("../src/core/image.rs");
    }
}

use site::content::*;
use site::image::*;
use site::sections::*;
use std::collections::HashSet;

#[test]
fn anchors_round_trip() {
    for id in SectionId::ORDER {
        assert_eq!(SectionId::from_anchor(id.anchor()), Some(id));
        assert_eq!(SectionId::from_anchor(&format!("#{}", id.anchor())), Some(id));
    }
    assert_eq!(SectionId::from_anchor("projects"), None);
    assert_eq!(SectionId::from_anchor(""), None);
}

#[test]
fn contact_is_shorter_than_the_rest() {
    assert_eq!(SectionId::Contact.min_height_vh(), 60);
    for id in [SectionId::Home, SectionId::About, SectionId::Facebook] {
        assert_eq!(id.min_height_vh(), 100);
    }
}

// 100/100/100/60 vh sections in a 1000 px viewport
fn page_layout() -> SectionLayout {
    SectionLayout::new(
        [
            (SectionId::Home, 0.0),
            (SectionId::About, 1000.0),
            (SectionId::Facebook, 2000.0),
            (SectionId::Contact, 3000.0),
        ],
        3600.0,
        1000.0,
    )
}

#[test]
fn section_follows_unequal_heights() {
    let layout = page_layout();
    // #facebook fills the viewport at scroll_top 2000
    let f = ScrollState::fraction(2000.0, 3600.0, 1000.0);
    assert_eq!(layout.section_at(f), SectionId::Facebook);
    assert_eq!(layout.section_at(0.0), SectionId::Home);
    assert_eq!(layout.section_at(ScrollState::fraction(1000.0, 3600.0, 1000.0)), SectionId::About);
    assert_eq!(layout.section_at(1.0), SectionId::Contact);
}

#[test]
fn section_switches_at_viewport_middle() {
    let layout = page_layout();
    // middle of the viewport is scroll_top + 500
    assert_eq!(layout.section_at(ScrollState::fraction(499.0, 3600.0, 1000.0)), SectionId::Home);
    assert_eq!(layout.section_at(ScrollState::fraction(501.0, 3600.0, 1000.0)), SectionId::About);
    assert_eq!(layout.section_at(-3.0), SectionId::Home);
    assert_eq!(layout.section_at(7.0), SectionId::Contact);
}

#[test]
fn layout_sorts_tops_and_defaults_to_home() {
    let shuffled = SectionLayout::new(
        [
            (SectionId::Contact, 3000.0),
            (SectionId::Home, 0.0),
            (SectionId::Facebook, 2000.0),
            (SectionId::About, 1000.0),
        ],
        3600.0,
        1000.0,
    );
    assert_eq!(shuffled, page_layout());
    assert_eq!(SectionLayout::default().section_at(0.7), SectionId::Home);
}

#[test]
fn reveal_fires_once_per_section() {
    let mut r = RevealTracker::default();
    assert!(r.observe(SectionId::About, true, 0.5));
    // leaving and re-entering never replays
    assert!(!r.observe(SectionId::About, false, 0.0));
    assert!(!r.observe(SectionId::About, true, 1.0));
    assert!(r.is_revealed(SectionId::About));
    assert_eq!(r.revealed_order(), &[SectionId::About]);
}

#[test]
fn reveal_respects_threshold() {
    let mut r = RevealTracker::default();
    assert_eq!(r.threshold(), constants::REVEAL_THRESHOLD);
    assert!(!r.observe(SectionId::Home, true, 0.1));
    assert!(!r.observe(SectionId::Home, false, 0.9));
    assert!(!r.is_revealed(SectionId::Home));
    assert!(r.observe(SectionId::Home, true, 0.15));
}

#[test]
fn reveal_order_follows_observations() {
    let mut r = RevealTracker::new(0.0);
    for id in [SectionId::Contact, SectionId::Home, SectionId::About] {
        assert!(r.observe(id, true, 0.0));
    }
    assert!(!r.all_revealed());
    assert!(r.observe(SectionId::Facebook, true, 1.0));
    assert!(r.all_revealed());
    assert_eq!(
        r.revealed_order(),
        &[SectionId::Contact, SectionId::Home, SectionId::About, SectionId::Facebook]
    );
}

#[test]
fn scroll_fraction_handles_short_pages() {
    assert_eq!(ScrollState::fraction(0.0, 800.0, 800.0), 0.0);
    assert_eq!(ScrollState::fraction(100.0, 500.0, 800.0), 0.0);
    assert_eq!(ScrollState::fraction(600.0, 2000.0, 800.0), 0.5);
    assert_eq!(ScrollState::fraction(5000.0, 2000.0, 800.0), 1.0);
}

#[test]
fn scroll_offset_eases_toward_target() {
    let mut s = ScrollState::default();
    s.set_target(3.0);
    assert_eq!(s.target, 1.0);

    let mut prev = s.offset;
    for _ in 0..60 {
        s.step(1.0 / 60.0);
        assert!(s.offset > prev && s.offset <= 1.0);
        prev = s.offset;
    }
    // one second is many damping constants
    assert!(s.offset > 0.99);
    assert_eq!(s.section(), SectionId::Home);
    s.set_layout(page_layout());
    assert_eq!(s.section(), SectionId::Contact);
}

#[test]
fn scroll_step_ignores_negative_dt() {
    let mut s = ScrollState::default();
    s.set_target(0.5);
    s.step(-1.0);
    assert_eq!(s.offset, 0.0);
}

#[test]
fn sections_listed_in_page_order() {
    let ids: Vec<SectionId> = SECTIONS.iter().map(|s| s.id).collect();
    assert_eq!(ids, SectionId::ORDER.to_vec());
    for s in SECTIONS {
        assert!(!s.blocks.is_empty());
    }
}

#[test]
fn home_opens_with_title_and_scroll_hint() {
    let home = &SECTIONS[0];
    assert!(home.blocks.iter().any(|b| matches!(b, Block::Title(_))));
    assert!(home.blocks.contains(&Block::ScrollHint));
}

#[test]
fn nav_points_at_real_sections() {
    assert_eq!(BRAND, "SO HID");
    for link in NAV_LINKS {
        assert!(SectionId::from_anchor(link.href).is_some(), "{}", link.href);
        assert!(!link.new_tab);
        assert!(link.feedback.hover);
    }
}

fn body_links() -> Vec<Link> {
    SECTIONS
        .iter()
        .flat_map(|s| s.blocks.iter())
        .flat_map(|b| match *b {
            Block::Cta(l) => vec![l],
            Block::Icons(ls) => ls.to_vec(),
            _ => vec![],
        })
        .collect()
}

#[test]
fn only_the_profile_cta_opens_a_new_tab() {
    let links = body_links();
    let new_tab: Vec<&Link> = links.iter().filter(|l| l.new_tab).collect();
    assert_eq!(new_tab.len(), 1);
    assert_eq!(new_tab[0].href, constants::SOCIAL_PROFILE_URL);
    assert_eq!(new_tab[0].label, "Visit Facebook Profile");
}

#[test]
fn body_links_play_both_sounds() {
    for link in body_links() {
        assert!(link.feedback.hover && link.feedback.click, "{}", link.label);
    }
}

#[test]
fn link_labels_are_unique() {
    let links = body_links();
    let labels: HashSet<&str> = links.iter().map(|l| l.label).collect();
    assert_eq!(labels.len(), links.len());
}

#[test]
fn profile_image_starts_on_primary() {
    let img = ProfileImage::default();
    assert_eq!(img.source(), ImageSource::Primary);
    assert_eq!(img.current_url(), constants::PROFILE_IMAGE_URL);
}

#[test]
fn profile_image_falls_back_once() {
    let mut img = ProfileImage::new("a.png", "b.png");
    assert_eq!(img.on_error(), Some("b.png"));
    assert_eq!(img.current_url(), "b.png");
    assert_eq!(img.source(), ImageSource::Fallback);
    assert_eq!(img.on_error(), None);
    assert_eq!(img.on_error(), None);
    assert_eq!(img.current_url(), "b.png");
}
