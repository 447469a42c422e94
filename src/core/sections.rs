// Page sections, one-shot reveal tracking and the damped scroll offset.

use crate::constants::{REVEAL_THRESHOLD, SCROLL_DAMPING_SEC};
use fnv::FnvHashSet;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Facebook,
    Contact,
}

impl SectionId {
    /// Top-to-bottom page order.
    pub const ORDER: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Facebook,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Facebook => "facebook",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        Self::ORDER.into_iter().find(|s| s.anchor() == anchor)
    }

    /// Minimum height as a fraction of the viewport.
    pub fn min_height_vh(self) -> u32 {
        match self {
            SectionId::Contact => 60,
            _ => 100,
        }
    }
}

/// Remembers which sections have played their entrance animation.
///
/// Reveal is one-directional: once seen, a section never replays, no matter
/// how often it leaves and re-enters the viewport.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    threshold: f64,
    revealed: FnvHashSet<SectionId>,
    order: SmallVec<[SectionId; 4]>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: FnvHashSet::default(),
            order: SmallVec::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed one intersection observation. Returns true exactly when this
    /// observation is the section's first qualifying one.
    pub fn observe(&mut self, id: SectionId, intersecting: bool, ratio: f64) -> bool {
        if !intersecting || ratio < self.threshold {
            return false;
        }
        if self.revealed.insert(id) {
            self.order.push(id);
            return true;
        }
        false
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed.contains(&id)
    }

    /// Sections in the order they were first revealed.
    pub fn revealed_order(&self) -> &[SectionId] {
        &self.order
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.len() == SectionId::ORDER.len()
    }
}

/// Content-space top of each section inside the scroll container, plus the
/// container metrics they were measured against.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionLayout {
    tops: SmallVec<[(SectionId, f64); 4]>,
    scroll_height: f64,
    client_height: f64,
}

impl SectionLayout {
    pub fn new(
        tops: impl IntoIterator<Item = (SectionId, f64)>,
        scroll_height: f64,
        client_height: f64,
    ) -> Self {
        let mut tops: SmallVec<[(SectionId, f64); 4]> = tops.into_iter().collect();
        tops.sort_by(|a, b| a.1.total_cmp(&b.1));
        Self {
            tops,
            scroll_height,
            client_height,
        }
    }

    /// Section holding the middle of the viewport when the container is
    /// scrolled to `offset` of its range.
    pub fn section_at(&self, offset: f32) -> SectionId {
        let range = (self.scroll_height - self.client_height).max(0.0);
        let middle = offset.clamp(0.0, 1.0) as f64 * range + self.client_height * 0.5;
        self.tops
            .iter()
            .rev()
            .find(|(_, top)| *top <= middle)
            .or_else(|| self.tops.first())
            .map(|(id, _)| *id)
            .unwrap_or(SectionId::Home)
    }
}

/// Scroll fraction smoothed toward the container's raw position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f32,
    pub target: f32,
    layout: SectionLayout,
}

impl ScrollState {
    /// Raw fraction from container metrics; 0 when nothing can scroll.
    pub fn fraction(scroll_top: f64, scroll_height: f64, client_height: f64) -> f32 {
        let range = scroll_height - client_height;
        if range <= 0.0 {
            return 0.0;
        }
        (scroll_top / range).clamp(0.0, 1.0) as f32
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target.clamp(0.0, 1.0);
    }

    pub fn set_layout(&mut self, layout: SectionLayout) {
        self.layout = layout;
    }

    pub fn step(&mut self, dt_sec: f32) {
        let alpha = 1.0 - (-dt_sec.max(0.0) / SCROLL_DAMPING_SEC).exp();
        self.offset += (self.target - self.offset) * alpha;
    }

    /// Section under the damped offset; `Home` until a layout is measured.
    pub fn section(&self) -> SectionId {
        self.layout.section_at(self.offset)
    }
}
