//! Landing page with the built-in copy and a highlighted extra tile.
//!
//! Run with: `cargo run --example landing_page`

use brainwave_leptos::{
    render_page,
    styles::Theme,
    types::{ContentItem, ContentList, SiteContent},
    AssetResolver, PageMeta,
};

fn main() {
    let mut content = SiteContent::default();

    // Append one more benefit tile to the built-in six
    let mut items: Vec<ContentItem> = content.benefits.items.items().to_vec();
    items.push(ContentItem {
        id: "6".into(),
        title: "Offline drafts".into(),
        text: "Keep writing on the train; Brainwave syncs once you are back online.".into(),
        icon: "benefits/icon-1.svg".into(),
        image: None,
        background: Some("benefits/card-1.svg".into()),
        highlighted: true,
    });
    content.benefits.items = ContentList::new(items).expect("tile ids are unique");

    let meta = PageMeta {
        stylesheet: Some("site.css".into()),
        ..PageMeta::default()
    };
    let html = render_page(&content, &Theme::default(), &AssetResolver::new("assets"), &meta);

    let output_path = "landing_page.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
