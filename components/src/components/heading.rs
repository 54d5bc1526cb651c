//! Section heading with a reserved slot for follow-on content.

use leptos::prelude::*;

use crate::styles::{Theme, class_list};

/// Optional title above a reserved slot.
///
/// An absent or empty title is not an error: the wrapper and slot are still
/// rendered so the layout spacing stays intact. Only the empty string counts
/// as empty; whitespace is rendered as given.
#[component]
pub fn Heading(
    /// Prominent title text
    #[prop(optional, into)]
    title: Option<String>,
    /// Secondary text placed in the reserved slot
    #[prop(optional, into)]
    text: Option<String>,
    /// Extra wrapper classes
    #[prop(optional, into)]
    class: Option<String>,
    #[prop(optional)] theme: Theme,
) -> impl IntoView {
    let wrapper = class_list([class.as_deref().unwrap_or_default(), theme.heading_layout.as_str()]);
    let title_class = theme.heading_title.clone();
    let text_class = theme.heading_text.clone();

    let title = title
        .filter(|t| !t.is_empty())
        .map(|t| view! { <h2 class=title_class>{t}</h2> });
    let text = text
        .filter(|t| !t.is_empty())
        .map(|t| view! { <p class=text_class>{t}</p> });

    view! {
        <div class=wrapper>
            {title}
            <div class=theme.heading_slot>{text}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_and_missing_title_render_identically() {
        let missing = view! { <Heading /> }.to_html();
        let empty = view! { <Heading title="" /> }.to_html();

        assert_eq!(missing, empty);
        assert!(!missing.contains("<h2"));
    }

    #[test]
    fn whitespace_title_is_still_a_title() {
        let html = view! { <Heading title="  " /> }.to_html();
        assert_eq!(html.matches("<h2").count(), 1);
    }

    #[test]
    fn title_renders_one_prominent_node() {
        let html = view! { <Heading title="X" /> }.to_html();

        assert_eq!(html.matches("<h2").count(), 1);
        assert!(html.contains("<h2 class=\"h2\">X</h2>"));
    }

    #[test]
    fn slot_is_reserved_without_title() {
        let theme = Theme::default();
        let html = view! { <Heading /> }.to_html();
        assert!(html.contains(&format!("<div class=\"{}\">", theme.heading_slot)));
    }

    #[test]
    fn secondary_text_fills_the_slot() {
        let html = view! {
            <Heading title="Generative AI" text="Made for creators" class="md:max-w-md" />
        }
        .to_html();

        assert!(html.starts_with("<div class=\"md:max-w-md max-w-[50rem]"));
        assert!(html.contains(">Made for creators</p></div>"));
        assert_eq!(html.matches("<h2").count(), 1);
    }
}
