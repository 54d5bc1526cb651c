//! Benefits section - one clipped tile per content item.

use leptos::prelude::*;

use super::{Arrow, BenefitsClipPath, GradientLight, Heading, Section, BENEFITS_CLIP_ID};
use crate::assets::AssetResolver;
use crate::styles::Theme;
use crate::types::{ContentItem, ContentList, HeadingContent};

/// Label of the affordance at the bottom of every tile.
pub const EXPLORE_LABEL: &str = "Explore more";

/// Tiles for every item of `items`, in order.
///
/// The list is validated at construction, so keys (`data-key`) are unique.
#[component]
pub fn ContentTiles(
    items: ContentList,
    #[prop(optional)] assets: AssetResolver,
    #[prop(optional)] theme: Theme,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-10 mb-10">
            {items
                .iter()
                .cloned()
                .map(|item| {
                    view! { <Tile item=item assets=assets.clone() theme=theme.clone() /> }
                })
                .collect::<Vec<_>>()}
        </div>
        <BenefitsClipPath />
    }
}

#[component]
fn Tile(item: ContentItem, assets: AssetResolver, theme: Theme) -> impl IntoView {
    let background = item
        .background()
        .map(|token| format!("background-image: url({})", assets.resolve(token)));
    let ambient = item
        .highlighted
        .then(|| view! { <GradientLight class=theme.ambient_overlay.clone() /> });
    let overlay = item.decoration().map(|token| {
        view! {
            <div class=theme.hover_overlay.clone()>
                <img
                    src=assets.resolve(token)
                    width="380"
                    height="362"
                    alt=item.title.clone()
                    class="w-full h-full object-cover"
                />
            </div>
        }
    });
    let clip = format!("clip-path: url(#{BENEFITS_CLIP_ID})");

    view! {
        <div data-key=item.id.clone() class=theme.tile_layout.clone() style=background>
            <div class="relative z-2 flex flex-col min-h-[22rem] p-[2.4rem] pointer-events-none">
                <h5 class="h5 mb-5">{item.title.clone()}</h5>
                <p class=format!("body-2 mb-6 {}", theme.muted_text)>{item.text.clone()}</p>
                <div class="flex items-center mt-auto">
                    <img src=assets.resolve(&item.icon) width="48" height="48" alt=item.title.clone() />
                    <p class="ml-auto font-code text-xs font-bold text-n-1 uppercase tracking-wider">
                        {EXPLORE_LABEL}
                    </p>
                    <Arrow />
                </div>
            </div>
            {ambient}
            <div class=theme.tile_surface.clone() style=clip>
                {overlay}
            </div>
        </div>
    }
}

/// The "features" section: heading plus benefit tiles.
#[component]
pub fn Benefits(
    heading: HeadingContent,
    items: ContentList,
    #[prop(optional)] assets: AssetResolver,
    #[prop(optional)] theme: Theme,
) -> impl IntoView {
    let HeadingContent { title, text } = heading;

    view! {
        <Section anchor_id="features" theme=theme.clone()>
            <div class="container relative z-2">
                <Heading
                    class="md:max-w-md lg:max-w-2xl"
                    title=title.clone().unwrap_or_default()
                    text=text.clone().unwrap_or_default()
                    theme=theme.clone()
                />
                <ContentTiles items=items.clone() assets=assets.clone() theme=theme.clone() />
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn item(id: &str, highlighted: bool, image: Option<&str>) -> ContentItem {
        ContentItem {
            id: id.into(),
            title: format!("Tile {id}"),
            text: format!("Body {id}"),
            icon: format!("icon-{id}.svg"),
            image: image.map(Into::into),
            background: None,
            highlighted,
        }
    }

    /// Split rendered tiles apart on their keys.
    fn tiles(html: &str) -> Vec<&str> {
        html.split("<div data-key=").skip(1).collect()
    }

    #[test]
    fn one_tile_per_item_in_order() {
        let items = ContentList::new(vec![item("b", false, None), item("a", false, None)]).unwrap();
        let html = view! { <ContentTiles items=items /> }.to_html();

        let rendered = tiles(&html);
        assert_eq!(rendered.len(), 2);
        assert!(rendered[0].starts_with("\"b\""));
        assert!(rendered[1].starts_with("\"a\""));
        assert_eq!(html.matches(EXPLORE_LABEL).count(), 2);
    }

    #[test]
    fn ambient_overlay_only_on_highlighted_tiles() {
        let theme = Theme::default();
        let items = ContentList::new(vec![item("1", true, None), item("2", false, None)]).unwrap();
        let html = view! { <ContentTiles items=items /> }.to_html();

        let rendered = tiles(&html);
        assert!(rendered[0].contains(&theme.ambient_overlay));
        assert!(!rendered[1].contains(&theme.ambient_overlay));
    }

    #[test]
    fn hover_overlay_only_with_decoration() {
        let theme = Theme::default();
        let items = ContentList::new(vec![
            item("1", false, Some("hover.png")),
            item("2", false, Some("")),
            item("3", false, None),
        ])
        .unwrap();
        let html = view! { <ContentTiles items=items /> }.to_html();

        let rendered = tiles(&html);
        assert!(rendered[0].contains(&theme.hover_overlay));
        assert!(rendered[0].contains("src=\"hover.png\""));
        assert!(!rendered[1].contains(&theme.hover_overlay));
        assert!(!rendered[2].contains(&theme.hover_overlay));
    }

    #[test]
    fn tile_assets_go_through_resolver() {
        let mut with_background = item("1", false, None);
        with_background.background = Some("card-1.svg".into());
        let items = ContentList::new(vec![with_background]).unwrap();
        let assets = AssetResolver::new("/static");
        let html = view! { <ContentTiles items=items assets=assets /> }.to_html();

        assert!(html.contains("src=\"/static/icon-1.svg\""));
        assert!(html.contains("background-image: url(/static/card-1.svg)"));
    }

    #[test]
    fn clip_path_is_defined_once() {
        let items = ContentList::new(vec![item("1", false, None), item("2", false, None)]).unwrap();
        let html = view! { <ContentTiles items=items /> }.to_html();
        assert_eq!(html.matches("<clipPath").count(), 1);
    }

    #[test]
    fn rendering_is_idempotent() {
        let items = ContentList::new(vec![item("1", true, Some("x.png")), item("2", false, None)]).unwrap();
        let first = view! { <ContentTiles items=items.clone() /> }.to_html();
        let second = view! { <ContentTiles items=items /> }.to_html();
        assert_eq!(first, second);
    }

    #[test]
    fn benefits_section_is_anchored_and_titled() {
        let items = ContentList::new(vec![item("1", false, None)]).unwrap();
        let html = view! {
            <Benefits heading=HeadingContent::titled("Chat Smarter") items=items />
        }
        .to_html();

        assert!(html.starts_with("<div id=\"features\""));
        assert!(html.contains("<h2 class=\"h2\">Chat Smarter</h2>"));
        assert_eq!(tiles(&html).len(), 1);
    }
}
