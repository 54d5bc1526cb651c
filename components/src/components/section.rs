//! Section wrapper - consistent spacing, boundary strokes and anchor id.
//!
//! Edge graphics are delegated to a [`SectionDecoration`], so pages can swap
//! the default boundary crosses for their own artwork.

use std::sync::Arc;

use leptos::prelude::*;

use super::PlusSvg;
use crate::styles::{Theme, class_list};

/// Passive graphics drawn along a decorated section's top edge.
pub trait SectionDecoration: Send + Sync {
    /// Render the graphics. `offset` carries the caller's alignment classes
    /// so the output lines up with the horizontal boundary stroke.
    fn render(&self, offset: Option<&str>) -> AnyView;
}

/// Default decoration: a plus-shaped cross at each end of the top stroke.
#[derive(Clone, Copy, Debug, Default)]
pub struct Crosses;

impl SectionDecoration for Crosses {
    fn render(&self, offset: Option<&str>) -> AnyView {
        let offset = offset.unwrap_or_default();
        let left = class_list([
            "hidden absolute -top-[0.3125rem] left-[1.5625rem]",
            offset,
            "pointer-events-none lg:block xl:left-[2.1875rem]",
        ]);
        let right = class_list([
            "hidden absolute -top-[0.3125rem] right-[1.5625rem]",
            offset,
            "pointer-events-none lg:block xl:right-[2.1875rem]",
        ]);
        view! {
            <PlusSvg class=left />
            <PlusSvg class=right />
        }
        .into_any()
    }
}

/// Root class list: caller spacing replaces the default scale entirely.
pub fn section_classes(
    theme: &Theme,
    layout_override: Option<&str>,
    decorated: bool,
    class: Option<&str>,
) -> String {
    let spacing = match layout_override {
        Some(custom) => custom.to_string(),
        None if decorated => class_list([
            theme.section_padding.as_str(),
            theme.section_padding_crossed.as_str(),
        ]),
        None => theme.section_padding.clone(),
    };
    class_list(["relative", spacing.as_str(), class.unwrap_or_default()])
}

/// Spaced container every content section is built from.
#[component]
pub fn Section(
    /// Anchor for in-page navigation
    #[prop(optional, into)]
    anchor_id: Option<String>,
    /// Draw the horizontal boundary and edge decoration
    #[prop(optional)]
    decorated: bool,
    /// Alignment classes forwarded to the decoration
    #[prop(optional, into)]
    decoration_offset: Option<String>,
    /// Replaces the default vertical spacing
    #[prop(optional, into)]
    layout_override: Option<String>,
    /// Extra root classes
    #[prop(optional, into)]
    class: Option<String>,
    /// Edge graphics, [`Crosses`] when not given
    #[prop(optional)]
    decoration: Option<Arc<dyn SectionDecoration>>,
    #[prop(optional)] theme: Theme,
    children: Children,
) -> impl IntoView {
    let classes = section_classes(
        &theme,
        layout_override.as_deref(),
        decorated,
        class.as_deref(),
    );
    let stroke = theme.stroke.as_str();
    let left = class_list([
        "hidden absolute top-0 left-5 w-0.25 h-full",
        stroke,
        "pointer-events-none md:block lg:left-7.5 xl:left-10",
    ]);
    let right = class_list([
        "hidden absolute top-0 right-5 w-0.25 h-full",
        stroke,
        "pointer-events-none md:block lg:right-7.5 xl:right-10",
    ]);

    let edge = decorated.then(|| {
        let offset = decoration_offset.filter(|o| !o.trim().is_empty());
        let horizontal = class_list([
            "hidden absolute top-0 left-7.5 right-7.5 h-0.25",
            stroke,
            offset.as_deref().unwrap_or_default(),
            "pointer-events-none lg:block xl:left-10 right-10",
        ]);
        let decoration = decoration.unwrap_or_else(|| Arc::new(Crosses));
        let graphics = decoration.render(offset.as_deref());
        view! {
            <div class=horizontal></div>
            {graphics}
        }
    });

    view! {
        <div id=anchor_id class=classes>
            {children()}
            <div class=left></div>
            <div class=right></div>
            {edge}
        </div>
    }
}
