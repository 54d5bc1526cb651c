//! Style tokens and base CSS for the landing page.
//!
//! Components never inline spacing or colour literals; they read them from a
//! [`Theme`], so the rendering core stays independent of any particular
//! visual theme. The defaults reproduce the Brainwave look on top of a
//! Tailwind build (`n-*` neutrals, `color-*` accents, `stroke-1` hairlines).
//!
//! # Customization
//!
//! Every token can be overridden individually; untouched fields keep their
//! defaults:
//!
//! ```rust
//! use brainwave_leptos::styles::Theme;
//!
//! let theme = Theme {
//!     button_padding: "px-10".into(),
//!     ..Default::default()
//! };
//! assert_eq!(theme.section_padding, "py-10 lg:py-16 xl:py-20");
//! ```

use serde::{Deserialize, Serialize};

/// Style-token table passed into every component.
///
/// Values are class lists (or raw colour values for SVG fills). The table
/// deserializes with `#[serde(default)]`, so a config file only lists the
/// tokens it wants to change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    // Section
    /// Default vertical spacing of a section.
    pub section_padding: String,
    /// Extra spacing added when the section draws boundary crosses.
    pub section_padding_crossed: String,
    /// Background of the hairline boundary marks.
    pub stroke: String,

    // Heading
    /// Wrapper of the heading block.
    pub heading_layout: String,
    /// The prominent title text.
    pub heading_title: String,
    /// Reserved slot under the title.
    pub heading_slot: String,
    /// Secondary text inside the reserved slot.
    pub heading_text: String,

    // Button
    /// Shared button/link classes.
    pub button_base: String,
    /// Horizontal padding unless the caller overrides it.
    pub button_padding: String,
    /// Text colour of the default variant.
    pub button_text: String,
    /// Text colour of the inverted (light) variant.
    pub button_text_inverted: String,
    /// SVG fill of the inverted button frame.
    pub button_frame_inverted: String,

    // Content tiles
    /// Outer tile container.
    pub tile_layout: String,
    /// Clipped surface behind the tile content.
    pub tile_surface: String,
    /// Ambient light decoration of highlighted tiles.
    pub ambient_overlay: String,
    /// Hover-revealed illustration overlay (dormant at zero opacity).
    pub hover_overlay: String,

    // Services
    /// Bordered card used by service blocks.
    pub card: String,
    /// Muted body copy.
    pub muted_text: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            section_padding: "py-10 lg:py-16 xl:py-20".into(),
            section_padding_crossed: "lg:py-32 xl:py-40".into(),
            stroke: "bg-stroke-1".into(),

            heading_layout: "max-w-[50rem] mx-auto mb-12 lg:mb-20".into(),
            heading_title: "h2".into(),
            heading_slot: "flex flex-wrap gap-10 mb-10".into(),
            heading_text: "body-2 mt-4 text-n-4".into(),

            button_base: "button relative inline-flex items-center justify-center h-11 transition-colors hover:text-color-1".into(),
            button_padding: "px-7".into(),
            button_text: "text-n-1".into(),
            button_text_inverted: "text-n-8".into(),
            button_frame_inverted: "white".into(),

            tile_layout: "block relative p-0.5 bg-no-repeat bg-[length:100%_100%] md:max-w-[24rem]".into(),
            tile_surface: "absolute inset-0.5 bg-n-8".into(),
            ambient_overlay: "absolute top-0 left-1/4 w-full aspect-square bg-radial-gradient from-[#28206C] to-[#28206C]/0 to-70% pointer-events-none".into(),
            hover_overlay: "absolute inset-0 opacity-0 transition-opacity hover:opacity-10".into(),

            card: "border border-n-1/10 rounded-3xl overflow-hidden".into(),
            muted_text: "text-n-3".into(),
        }
    }
}

/// Join class fragments with single spaces, skipping empty ones.
///
/// ```rust
/// use brainwave_leptos::styles::class_list;
///
/// assert_eq!(class_list(["relative", "", "  py-10 "]), "relative py-10");
/// ```
pub fn class_list<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inline base CSS shipped with every page.
///
/// Covers the custom utilities the components reference (typography
/// helpers, gradients, colour variables) plus the utilities whose absence
/// changes what is visible: display toggles, overlay opacity and the
/// positioning of stacked layers. The rest of the layout comes from the
/// optional stylesheet linked through `PageMeta::stylesheet`.
pub const SITE_CSS: &str = r#"
:root {
    --color-1: #AC6AFF;
    --color-2: #FFC876;
    --color-3: #FF776F;
    --color-4: #7ADB78;
    --color-5: #858DFF;
    --color-6: #FF98E2;
    --n-1: #FFFFFF;
    --n-2: #CAC6DD;
    --n-3: #ADA8C3;
    --n-4: #757185;
    --n-6: #252134;
    --n-7: #15131D;
    --n-8: #0E0C15;
    --stroke-1: #26242C;
    --font-sans: 'Sora', sans-serif;
    --font-code: 'Source Code Pro', monospace;
    --font-grotesk: 'Space Grotesk', sans-serif;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--n-8);
    color: var(--n-1);
    font-family: var(--font-sans);
}

.container {
    max-width: 77.5rem;
    margin: 0 auto;
    padding: 0 1.25rem;
}

.h2 {
    font-size: 1.75rem;
    line-height: 2.5rem;
}

.h4 {
    font-size: 2rem;
    line-height: normal;
}

.h5 {
    font-size: 1.5rem;
    line-height: normal;
}

.body-2 {
    font-size: 0.875rem;
    line-height: 1.5rem;
}

.tagline {
    font-family: var(--font-grotesk);
    font-weight: 300;
    letter-spacing: 0.15em;
}

.button {
    font-family: var(--font-code);
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.bg-radial-gradient {
    background-image: radial-gradient(var(--tw-gradient-stops));
}

.bg-conic-gradient {
    background: conic-gradient(from 225deg, var(--color-2), var(--color-1), var(--color-3), var(--color-5), var(--color-6), var(--color-4), var(--color-2));
}

.hidden { display: none; }
.block { display: block; }
.flex { display: flex; }
.relative { position: relative; }
.absolute { position: absolute; }
.fixed { position: fixed; }
.inset-0 { inset: 0; }
.inset-0\.5 { inset: 0.125rem; }
.overflow-hidden { overflow: hidden; }
.pointer-events-none { pointer-events: none; }
.opacity-0 { opacity: 0; }
.transition-opacity { transition: opacity 150ms cubic-bezier(0.4, 0, 0.2, 1); }
.hover\:opacity-10:hover { opacity: 0.1; }

@media (min-width: 768px) {
    .md\:block { display: block; }
}

@media (min-width: 1024px) {
    .lg\:hidden { display: none; }
    .lg\:block { display: block; }
    .lg\:flex { display: flex; }
    .lg\:static { position: static; }

    .h2 {
        font-size: 2.5rem;
        line-height: 3.25rem;
    }
}
"#;
