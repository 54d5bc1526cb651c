//! Root document component - the complete landing page

use super::{Benefits, Header, MENU_SCRIPT, Services};
use crate::PageMeta;
use crate::assets::AssetResolver;
use crate::styles::{SITE_CSS, Theme};
use crate::types::SiteContent;
use leptos::prelude::*;

/// The complete HTML document for the landing page
#[component]
pub fn LandingDocument(
    content: SiteContent,
    #[prop(optional)] theme: Theme,
    #[prop(optional)] assets: AssetResolver,
    #[prop(optional)] meta: PageMeta,
) -> impl IntoView {
    let SiteContent {
        navigation,
        benefits,
        services,
    } = content;
    let stylesheet = meta
        .stylesheet
        .filter(|href| !href.trim().is_empty())
        .map(|href| view! { <link rel="stylesheet" href=assets.resolve(&href) /> });

    view! {
        <html lang=meta.lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=meta.description />
                <title>{meta.title}</title>
                {stylesheet}
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <div class="pt-[4.75rem] lg:pt-[5.25rem] overflow-hidden">
                    <Header navigation=navigation assets=assets.clone() theme=theme.clone() />
                    <main>
                        <Benefits
                            heading=benefits.heading
                            items=benefits.items
                            assets=assets.clone()
                            theme=theme.clone()
                        />
                        <Services content=services assets=assets theme=theme />
                    </main>
                </div>
                <script>{MENU_SCRIPT}</script>
            </body>
        </html>
    }
}
