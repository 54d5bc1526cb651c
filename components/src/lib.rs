//! # brainwave-leptos
//!
//! Leptos SSR components for the Brainwave landing page.
//!
//! The crate renders the page's presentational layer to static HTML: a
//! shared button/heading/section layer and the content-driven sections
//! built on it.
//!
//! ## Quick Start
//!
//! ```rust
//! use brainwave_leptos::{render_page, AssetResolver, PageMeta};
//! use brainwave_leptos::styles::Theme;
//! use brainwave_leptos::types::SiteContent;
//!
//! let html = render_page(
//!     &SiteContent::default(),
//!     &Theme::default(),
//!     &AssetResolver::new("/assets"),
//!     &PageMeta::default(),
//! );
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - content model (items, lists, section copy)
//! - [`content`] - the built-in Brainwave copy
//! - [`components`] - Leptos UI components
//! - [`styles`] - theme tokens and the page stylesheet
//! - [`assets`] - asset reference resolution
//! - [`error`] - content validation errors
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <Heading title="Hello" /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![recursion_limit = "256"]

pub mod assets;
pub mod components;
pub mod content;
pub mod error;
pub mod styles;
pub mod types;

pub use assets::AssetResolver;
pub use error::ContentError;

use components::LandingDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use serde::{Deserialize, Serialize};
use styles::Theme;
use types::SiteContent;

/// Render the complete landing page.
///
/// Produces a full HTML document, including `<!DOCTYPE html>`. Rendering
/// has no side effects: the same inputs always yield the same string.
pub fn render_page(
    content: &SiteContent,
    theme: &Theme,
    assets: &AssetResolver,
    meta: &PageMeta,
) -> String {
    let doc = view! {
        <LandingDocument
            content=content.clone()
            theme=theme.clone()
            assets=assets.clone()
            meta=meta.clone()
        />
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Document-level metadata of the rendered page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageMeta {
    /// `<title>` text
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
    /// Compiled utility stylesheet, resolved through the asset base
    pub stylesheet: Option<String>,
    /// `lang` attribute of the root element
    pub lang: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "Brainwave".into(),
            description: "Explore the possibilities of AI chatting with Brainwave.".into(),
            stylesheet: None,
            lang: "en".into(),
        }
    }
}
