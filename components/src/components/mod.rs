//! Leptos UI components of the Brainwave landing page.
//!
//! Every component is a Leptos `#[component]` function rendered through
//! SSR. The shared layer (buttons, headings, sections) is what the page
//! sections are built from.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! ├── Header
//! │   ├── Button (sign in, menu toggle)
//! │   └── HamburgerMenu (open menu only)
//! └── main
//!     ├── Benefits
//!     │   └── Section #features
//!     │       ├── Heading
//!     │       └── ContentTiles
//!     │           └── one tile per ContentItem
//!     └── Services
//!         └── Section #how-to-use
//!             ├── Heading
//!             └── spotlight / photo / video cards
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but the
//! shared layer composes on its own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use brainwave_leptos::components::{Button, ButtonAction, Heading, Section};
//!
//! view! {
//!     <Section anchor_id="pricing" decorated=true>
//!         <Heading title="Pay once, use forever" />
//!         <Button action=ButtonAction::link("/pricing")>"Get started"</Button>
//!     </Section>
//! }
//! ```

mod benefits;
mod button;
mod design;
mod document;
mod generating;
mod header;
mod heading;
mod icons;
mod section;
mod services;

pub use benefits::{Benefits, ContentTiles, EXPLORE_LABEL};
pub use button::{Button, ButtonAction, ButtonFrame, OnActivate, button_classes};
pub use design::{
    BackgroundCircles, Gradient, GradientLight, HamburgerMenu, PhotoChatMessage, Rings, SideLines,
    VideoBar, VideoChatMessage,
};
pub use document::LandingDocument;
pub use generating::Generating;
pub use header::{Header, MENU_SCRIPT, nav_link_classes};
pub use heading::Heading;
pub use icons::{Arrow, BENEFITS_CLIP_ID, BenefitsClipPath, ChatBubbleWing, MenuSvg, PlusSvg};
pub use section::{Crosses, Section, SectionDecoration, section_classes};
pub use services::Services;
