//! Dual-mode button: navigational link or activatable control.
//!
//! The mode is a [`ButtonAction`] chosen once when the action is built, so a
//! rendered button never re-derives it from optional fields.

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

use crate::styles::{Theme, class_list};

/// Synchronous, fire-and-forget activation handler.
#[derive(Clone)]
pub struct OnActivate(Arc<dyn Fn() + Send + Sync>);

impl OnActivate {
    /// Wrap a handler.
    pub fn new(handler: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    /// Invoke the handler.
    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for OnActivate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnActivate(..)")
    }
}

/// What a button does when used.
#[derive(Clone, Debug)]
pub enum ButtonAction {
    /// Renders an `<a>` targeting the destination.
    Navigate(String),
    /// Renders a `<button>`; the handler (if any) runs on activation.
    Activate(Option<OnActivate>),
}

impl Default for ButtonAction {
    fn default() -> Self {
        Self::Activate(None)
    }
}

impl ButtonAction {
    /// Link to `destination`.
    pub fn link(destination: impl Into<String>) -> Self {
        Self::Navigate(destination.into())
    }

    /// Control invoking `handler`.
    pub fn activate(handler: OnActivate) -> Self {
        Self::Activate(Some(handler))
    }

    /// Pick the mode from optional parts.
    ///
    /// A non-empty destination (any string but `""`) selects link mode and
    /// the handler is discarded; otherwise the result is an activatable
    /// control.
    pub fn from_parts(destination: Option<String>, on_activate: Option<OnActivate>) -> Self {
        match destination.filter(|d| !d.is_empty()) {
            Some(href) => Self::Navigate(href),
            None => Self::Activate(on_activate),
        }
    }

    /// Link target in navigation mode.
    pub fn destination(&self) -> Option<&str> {
        match self {
            Self::Navigate(href) => Some(href),
            Self::Activate(_) => None,
        }
    }

    /// Activate the control. Returns whether a handler ran.
    ///
    /// Links never run handlers; following them is the browser's job.
    pub fn trigger(&self) -> bool {
        match self {
            Self::Activate(Some(handler)) => {
                handler.call();
                true
            }
            Self::Activate(None) | Self::Navigate(_) => false,
        }
    }
}

/// Class list shared by both button modes.
pub fn button_classes(
    theme: &Theme,
    padding: Option<&str>,
    inverted: bool,
    class: Option<&str>,
) -> String {
    let text = if inverted {
        theme.button_text_inverted.as_str()
    } else {
        theme.button_text.as_str()
    };
    class_list([
        theme.button_base.as_str(),
        padding.unwrap_or(theme.button_padding.as_str()),
        text,
        class.unwrap_or_default(),
    ])
}

/// Button or link with the Brainwave frame.
#[component]
pub fn Button(
    /// Link target or activation handler
    #[prop(optional)]
    action: ButtonAction,
    /// Light-on-dark variant
    #[prop(optional)]
    inverted: bool,
    /// Replaces the default horizontal padding
    #[prop(optional, into)]
    padding: Option<String>,
    /// Extra classes appended last
    #[prop(optional, into)]
    class: Option<String>,
    #[prop(optional)] theme: Theme,
    children: Children,
) -> impl IntoView {
    let classes = button_classes(&theme, padding.as_deref(), inverted, class.as_deref());
    let content = view! {
        <span class="relative z-10">{children()}</span>
        <ButtonFrame inverted=inverted fill=theme.button_frame_inverted.clone() />
    };

    match action {
        ButtonAction::Navigate(href) => view! {
            <a href=href class=classes>
                {content}
            </a>
        }
        .into_any(),
        action @ ButtonAction::Activate(_) => view! {
            <button type="button" class=classes on:click=move |_| {
                action.trigger();
            }>
                {content}
            </button>
        }
        .into_any(),
    }
}

/// Three-piece outline drawn behind button text.
#[component]
pub fn ButtonFrame(
    inverted: bool,
    /// Fill of the inverted variant
    #[prop(into)]
    fill: String,
) -> impl IntoView {
    let (side_fill, side_stroke_left, side_stroke_right) = if inverted {
        (fill.clone(), fill.clone(), fill.clone())
    } else {
        (
            "none".to_string(),
            "url(#btn-left)".to_string(),
            "url(#btn-right)".to_string(),
        )
    };

    let middle = if inverted {
        view! {
            <polygon fill=fill.clone() fill-rule="nonzero" points="100 0 100 44 0 44 0 0"></polygon>
        }
        .into_any()
    } else {
        view! {
            <polygon fill="url(#btn-top)" fill-rule="nonzero" points="100 44 100 42 0 42 0 44"></polygon>
            <polygon fill="url(#btn-bottom)" fill-rule="nonzero" points="100 0 100 2 0 2 0 0"></polygon>
        }
        .into_any()
    };

    view! {
        <svg class="absolute top-0 left-0" width="21" height="44" viewBox="0 0 21 44">
            <path
                fill=side_fill.clone()
                stroke=side_stroke_left
                stroke-width="2"
                d="M21,43.00005 L8.11111,43.00005 C4.18375,43.00005 1,39.58105 1,35.36365 L1,8.63637 C1,4.41892 4.18375,1 8.11111,1 L21,1"
            ></path>
        </svg>
        <svg
            class="absolute top-0 left-[1.3125rem] w-[calc(100%-2.625rem)]"
            height="44"
            viewBox="0 0 100 44"
            preserveAspectRatio="none"
        >
            {middle}
        </svg>
        <svg class="absolute top-0 right-0" width="21" height="44" viewBox="0 0 21 44">
            <path
                fill=side_fill
                stroke=side_stroke_right
                stroke-width="2"
                d="M0,43.00005 L5.028,43.00005 L12.24,43.00005 C16.526,43.00005 20,39.58105 20,35.36365 L20,16.85855 C20,14.59295 18.978,12.44425 17.209,10.99335 L7.187,2.77111 C5.792,1.62675 4.034,1 2.217,1 L0,1"
            ></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, OnActivate) {
        let hits = Arc::new(AtomicUsize::new(0));
        let handle = hits.clone();
        let handler = OnActivate::new(move || {
            handle.fetch_add(1, Ordering::SeqCst);
        });
        (hits, handler)
    }

    #[test]
    fn destination_selects_link_and_drops_handler() {
        let (hits, handler) = counter();
        let action = ButtonAction::from_parts(Some("#pricing".into()), Some(handler));

        assert_eq!(action.destination(), Some("#pricing"));
        assert!(!action.trigger());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_destination_falls_back_to_control() {
        let action = ButtonAction::from_parts(Some(String::new()), None);
        assert!(matches!(action, ButtonAction::Activate(None)));
    }

    #[test]
    fn whitespace_destination_is_still_a_link() {
        let action = ButtonAction::from_parts(Some(" ".into()), None);
        assert_eq!(action.destination(), Some(" "));
    }

    #[test]
    fn one_activation_runs_handler_once() {
        let (hits, handler) = counter();
        let action = ButtonAction::from_parts(None, Some(handler));

        assert!(action.trigger());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn control_without_handler_is_a_no_op() {
        assert!(!ButtonAction::default().trigger());
    }

    #[test]
    fn link_mode_renders_anchor_with_exact_target() {
        let html = view! {
            <Button action=ButtonAction::link("https://brainwave.app/signup")>"Sign up"</Button>
        }
        .to_html();

        assert!(html.starts_with("<a href=\"https://brainwave.app/signup\""));
        assert!(!html.contains("<button"));
        assert!(html.contains("<span class=\"relative z-10\">Sign up</span>"));
    }

    #[test]
    fn control_mode_renders_button() {
        let (_, handler) = counter();
        let html = view! {
            <Button action=ButtonAction::activate(handler)>"Menu"</Button>
        }
        .to_html();

        assert!(html.starts_with("<button type=\"button\""));
        assert!(!html.contains("href="));
    }

    #[test]
    fn inverted_variant_swaps_text_colour_and_frame() {
        let theme = Theme::default();
        let html = view! { <Button inverted=true>"Go"</Button> }.to_html();

        assert!(html.contains(&theme.button_text_inverted));
        assert!(!html.contains(&format!(" {} ", theme.button_text)));
        assert!(html.contains("points=\"100 0 100 44 0 44 0 0\""));
        assert!(!html.contains("url(#btn-left)"));
    }

    #[test]
    fn classes_respect_padding_override() {
        let theme = Theme::default();
        assert_eq!(
            button_classes(&theme, Some("px-3"), false, Some("ml-auto")),
            format!("{} px-3 text-n-1 ml-auto", theme.button_base)
        );
        assert_eq!(
            button_classes(&theme, None, true, None),
            format!("{} px-7 text-n-8", theme.button_base)
        );
    }
}
