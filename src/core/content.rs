// Static page copy and links, section by section.
//
// The page builder walks these blocks in order; nothing here is fetched.

use super::sections::SectionId;
use crate::constants::SOCIAL_PROFILE_URL;

/// Which sound an interactive element plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub hover: bool,
    pub click: bool,
}

impl Feedback {
    pub const HOVER: Feedback = Feedback { hover: true, click: false };
    pub const CLICK: Feedback = Feedback { hover: false, click: true };
    pub const BOTH: Feedback = Feedback { hover: true, click: true };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    /// Opens in a new browsing context without an opener.
    pub new_tab: bool,
    pub feedback: Feedback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Eyebrow(&'static str),
    Title(&'static str),
    Heading(&'static str),
    Lead(&'static str),
    Paragraph(&'static str),
    Quote(&'static str),
    Tags(&'static [&'static str]),
    ProfileCard { name: &'static str, caption: &'static str },
    ScrollHint,
    Cta(Link),
    Icons(&'static [Link]),
    Footer(&'static [&'static str]),
}

#[derive(Clone, Copy, Debug)]
pub struct SectionContent {
    pub id: SectionId,
    pub blocks: &'static [Block],
}

pub const BRAND: &str = "SO HID";
pub const SPLASH_SUBTITLE: &str = "Optimizing Engine...";

pub const NAV_LINKS: &[Link] = &[
    Link {
        label: "About",
        href: "#about",
        new_tab: false,
        feedback: Feedback::HOVER,
    },
    Link {
        label: "Facebook",
        href: "#facebook",
        new_tab: false,
        feedback: Feedback::HOVER,
    },
];

const CONTACT_ICONS: &[Link] = &[
    Link {
        label: "Instagram",
        href: "#",
        new_tab: false,
        feedback: Feedback::BOTH,
    },
    Link {
        label: "Facebook",
        href: SOCIAL_PROFILE_URL,
        new_tab: false,
        feedback: Feedback::BOTH,
    },
    Link {
        label: "Twitter",
        href: "#",
        new_tab: false,
        feedback: Feedback::BOTH,
    },
];

pub const SECTIONS: &[SectionContent] = &[
    SectionContent {
        id: SectionId::Home,
        blocks: &[
            Block::Eyebrow("ESTABLISHED 2026 // STUDENT"),
            Block::Title(BRAND),
            Block::Lead("A journey of learning, creativity, and digital exploration."),
            Block::ScrollHint,
        ],
    },
    SectionContent {
        id: SectionId::About,
        blocks: &[
            Block::Eyebrow("My Profile"),
            Block::Heading("Student. Creative. Visionary."),
            Block::Paragraph(
                "I am a student currently living in Joypurhat, Bangladesh. I am passionate about \
                 how technology and design come together to create beautiful things.",
            ),
            Block::Paragraph(
                "Even as a student, I spend my time exploring the digital world and learning how \
                 to build high-quality, impactful projects.",
            ),
            Block::Tags(&["LEARNER", "CREATIVE MIND"]),
            Block::ProfileCard {
                name: BRAND,
                caption: "LOC_JOYPURHAT // BANGLADESH",
            },
        ],
    },
    SectionContent {
        id: SectionId::Facebook,
        blocks: &[
            Block::Heading("Follow My Journey"),
            Block::Quote("\"Every step forward is a new discovery.\""),
            Block::Cta(Link {
                label: "Visit Facebook Profile",
                href: SOCIAL_PROFILE_URL,
                new_tab: true,
                feedback: Feedback::BOTH,
            }),
        ],
    },
    SectionContent {
        id: SectionId::Contact,
        blocks: &[
            Block::Title("SAY HI."),
            Block::Icons(CONTACT_ICONS),
            Block::Paragraph(
                "SO HID // Student & Learner from Joypurhat. Dedicated to personal growth and \
                 exploring the future of the digital world.",
            ),
            Block::Cta(Link {
                label: "LET'S TALK",
                href: SOCIAL_PROFILE_URL,
                new_tab: false,
                feedback: Feedback::BOTH,
            }),
            Block::Footer(&["\u{a9} 2026 SO HID", "JOYPURHAT, BANGLADESH"]),
        ],
    },
];
