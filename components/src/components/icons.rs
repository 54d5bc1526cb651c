//! Inline SVG glyphs used across the landing page.
//!
//! All glyphs are passive decoration: none of them carries data or handles
//! pointer events.

use leptos::prelude::*;

/// Right-pointing chevron of the "explore" affordance
pub const PATH_ARROW: &str = "M8.293 5.293a1 1 0 0 1 1.414 0l6 6a1 1 0 0 1 0 1.414l-6 6a1 1 0 0 1-1.414-1.414L13.586 12 8.293 6.707a1 1 0 0 1 0-1.414z";

/// Plus-shaped cross drawn at section boundaries
pub const PATH_PLUS: &str = "M7 1a1 1 0 0 0-1-1H5a1 1 0 0 0-1 1v2a1 1 0 0 1-1 1H1a1 1 0 0 0-1 1v1a1 1 0 0 0 1 1h2a1 1 0 0 1 1 1v2a1 1 0 0 0 1 1h1a1 1 0 0 0 1-1V8a1 1 0 0 1 1-1h2a1 1 0 0 0 1-1V5a1 1 0 0 0-1-1H8a1 1 0 0 1-1-1V1z";

/// Tail of a chat bubble
pub const PATH_BUBBLE_WING: &str = "M21.843 37.001c3.564 0 5.348-4.309 2.829-6.828L3.515 9.015A12 12 0 0 1 0 .53v36.471h21.843z";

/// Clip outline of a benefit tile (object bounding box units)
pub const PATH_BENEFITS_CLIP: &str = "M0.079,0 h0.756 a0.079,0.083,0,0,1,0.058,0.026 l0.086,0.096 A0.079,0.083,0,0,1,1,0.179 V0.917 c0,0.046,-0.035,0.083,-0.079,0.083 H0.079 c-0.044,0,-0.079,-0.037,-0.079,-0.083 V0.083 C0,0.037,0.035,0,0.079,0";

/// Element id of the tile clip path, referenced by `clip-path: url(#benefits)`.
pub const BENEFITS_CLIP_ID: &str = "benefits";

/// Directional glyph next to the "explore" label.
#[component]
pub fn Arrow() -> impl IntoView {
    view! {
        <svg class="ml-5 fill-n-1" width="24" height="24" viewBox="0 0 24 24">
            <path d=PATH_ARROW></path>
        </svg>
    }
}

/// Plus-shaped boundary cross.
#[component]
pub fn PlusSvg(
    /// Positioning classes
    #[prop(into, default = String::new())]
    class: String,
) -> impl IntoView {
    view! {
        <svg class=class width="11" height="11" fill="none">
            <path d=PATH_PLUS fill="#ada8c4"></path>
        </svg>
    }
}

/// Tail attached to chat bubble mockups.
#[component]
pub fn ChatBubbleWing(
    /// Positioning classes of the svg
    #[prop(into, default = String::new())]
    class: String,
    /// Fill classes of the path
    #[prop(into, default = "fill-n-8".to_string())]
    path_class: String,
) -> impl IntoView {
    view! {
        <svg class=class xmlns="http://www.w3.org/2000/svg" width="26" height="37">
            <path class=path_class d=PATH_BUBBLE_WING></path>
        </svg>
    }
}

/// Zero-size SVG holding the clip path shared by all benefit tiles.
#[component]
pub fn BenefitsClipPath() -> impl IntoView {
    view! {
        <svg class="block" width="0" height="0">
            <clipPath id=BENEFITS_CLIP_ID clipPathUnits="objectBoundingBox">
                <path d=PATH_BENEFITS_CLIP></path>
            </clipPath>
        </svg>
    }
}

/// Hamburger / close glyph of the mobile menu toggle.
#[component]
pub fn MenuSvg(open: bool) -> impl IntoView {
    // Open: the bars rotate into a cross.
    let (top, bottom) = if open {
        ("rotate(45 10 7)", "rotate(-45 10 7)")
    } else {
        ("", "")
    };
    let bottom_y = if open { "5" } else { "10" };
    let top_y = if open { "5" } else { "0" };

    view! {
        <svg class="overflow-visible" width="20" height="12" viewBox="0 0 20 12">
            <rect class="transition-all origin-center" y=top_y width="20" height="2" rx="1" fill="white" transform=top></rect>
            <rect class="transition-all origin-center" y=bottom_y width="20" height="2" rx="1" fill="white" transform=bottom></rect>
        </svg>
    }
}
