//! Built-in Brainwave copy.
//!
//! Used when the site generator is not given a content file, and as the
//! template printed by `brainwave content`.

use crate::types::{
    BenefitsContent, ContentItem, ContentList, HeadingContent, NavItem, ServiceBlock,
    ServicesContent, SiteContent,
};

const ANSWERS_TEXT: &str = "Lets users quickly find answers to their questions without having to search through multiple sources.";

fn nav(id: &str, title: &str, url: &str, only_mobile: bool) -> NavItem {
    NavItem {
        id: id.into(),
        title: title.into(),
        url: url.into(),
        only_mobile,
    }
}

/// Header navigation entries.
pub fn navigation() -> Vec<NavItem> {
    vec![
        nav("0", "Features", "#features", false),
        nav("1", "Pricing", "#pricing", false),
        nav("2", "How to use", "#how-to-use", false),
        nav("3", "Roadmap", "#roadmap", false),
        nav("4", "New account", "#signup", true),
        nav("5", "Sign in", "#login", true),
    ]
}

fn benefit(
    id: &str,
    title: &str,
    text: &str,
    card: u8,
    icon: u8,
    image: Option<&str>,
    highlighted: bool,
) -> ContentItem {
    ContentItem {
        id: id.into(),
        title: title.into(),
        text: text.into(),
        icon: format!("benefits/icon-{icon}.svg"),
        image: image.map(Into::into),
        background: Some(format!("benefits/card-{card}.svg")),
        highlighted,
    }
}

/// Benefit tiles, in display order.
pub fn benefit_items() -> Vec<ContentItem> {
    vec![
        benefit("0", "Ask anything", ANSWERS_TEXT, 1, 1, Some("benefits/image-2.png"), true),
        benefit(
            "1",
            "Improve everyday",
            "The app uses natural language processing to understand user queries and provide accurate and relevant responses.",
            2,
            2,
            Some("benefits/image-2.png"),
            false,
        ),
        benefit(
            "2",
            "Connect everywhere",
            "Connect with the AI chatbot from anywhere, on any device, making it more accessible and convenient.",
            3,
            3,
            Some("benefits/image-2.png"),
            true,
        ),
        benefit("3", "Fast responding", ANSWERS_TEXT, 4, 4, Some("benefits/image-2.png"), true),
        benefit("4", "Ask anything", ANSWERS_TEXT, 5, 1, Some("benefits/image-2.png"), false),
        benefit("5", "Improve everyday", ANSWERS_TEXT, 6, 2, None, false),
    ]
}

/// Benefits section content.
pub fn benefits() -> BenefitsContent {
    BenefitsContent {
        heading: HeadingContent::titled("Chat Smarter, Not Harder with Brainwave"),
        // Literal ids above are unique.
        items: ContentList::new(benefit_items()).unwrap_or_default(),
    }
}

/// Services section content.
pub fn services() -> ServicesContent {
    ServicesContent {
        heading: HeadingContent {
            title: Some("Generative AI made for creators.".into()),
            text: Some("Brainwave unlocks the potential of AI-powered applications".into()),
        },
        spotlight: ServiceBlock {
            title: "Smartest AI".into(),
            text: "Brainwave unlocks the potential of AI-powered applications".into(),
            image: "services/service-1.png".into(),
            image_alt: "Smartest AI".into(),
        },
        features: vec![
            "Photo generating".into(),
            "Photo enhance".into(),
            "Seamless Integration".into(),
        ],
        photo: ServiceBlock {
            title: "Photo editing".into(),
            text: "Automatically enhance your photos using our AI app's photo editing feature. Try it now!".into(),
            image: "services/service-2.png".into(),
            image_alt: "robot".into(),
        },
        photo_prompt: "Hey Brainwave, enhance this photo".into(),
        video: ServiceBlock {
            title: "Video generation".into(),
            text: "The world's most powerful AI photo and video art generation engine. What will you create?".into(),
            image: "services/service-3.png".into(),
            image_alt: "Scary robot".into(),
        },
        video_tools: vec![
            "services/recording-03.svg".into(),
            "services/recording-01.svg".into(),
            "services/disc-02.svg".into(),
            "services/chrome-cast.svg".into(),
            "services/sliders-04.svg".into(),
        ],
        active_tool: 2,
        video_notice: "Video generated!".into(),
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            navigation: navigation(),
            benefits: benefits(),
            services: services(),
        }
    }
}
