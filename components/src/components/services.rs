//! Services ("how to use") section.
//!
//! Three showcase cards built on the same Section/Heading layer as the
//! benefits tiles:
//!
//! ```text
//! Section #how-to-use
//! ├── Heading
//! ├── spotlight card  (feature checklist + Generating pill)
//! └── grid
//!     ├── photo card  (PhotoChatMessage)
//!     └── video card  (tool strip, VideoChatMessage, VideoBar)
//! ```

use leptos::prelude::*;

use super::{
    Generating, Gradient, Heading, PhotoChatMessage, Section, VideoBar, VideoChatMessage,
};
use crate::assets::AssetResolver;
use crate::styles::{Theme, class_list};
use crate::types::{ServiceBlock, ServicesContent};

/// Services section.
#[component]
pub fn Services(
    content: ServicesContent,
    #[prop(optional)] assets: AssetResolver,
    #[prop(optional)] theme: Theme,
) -> impl IntoView {
    let ServicesContent {
        heading,
        spotlight,
        features,
        photo,
        photo_prompt,
        video,
        video_tools,
        active_tool,
        video_notice,
    } = content;

    let muted = theme.muted_text.clone();
    let spotlight_card = class_list([
        "relative z-1 flex items-center h-[39rem] mb-5 p-8",
        theme.card.as_str(),
        "lg:p-20 xl:h-[46rem]",
    ]);
    let photo_card = class_list(["relative min-h-[39rem]", theme.card.as_str()]);

    view! {
        <Section anchor_id="how-to-use" theme=theme.clone()>
            <div class="container">
                <Heading
                    title=heading.title.clone().unwrap_or_default()
                    text=heading.text.clone().unwrap_or_default()
                    theme=theme.clone()
                />

                <div class="relative">
                    <div class=spotlight_card.clone()>
                        <div class="absolute top-0 left-0 w-full h-full pointer-events-none md:w-3/5 xl:w-auto">
                            <img
                                class="w-full h-full object-cover md:object-right"
                                width="800"
                                height="730"
                                alt=spotlight.image_alt.clone()
                                src=assets.resolve(&spotlight.image)
                            />
                        </div>

                        <div class="relative z-1 max-w-[17rem] ml-auto">
                            <h4 class="h4 mb-4">{spotlight.title.clone()}</h4>
                            <p class=format!("body-2 mb-[3rem] {muted}")>{spotlight.text.clone()}</p>
                            <FeatureChecklist features=features.clone() assets=assets.clone() />
                        </div>

                        <Generating
                            class="absolute left-4 right-4 bottom-4 border-n-1/10 border lg:left-1/2 lg-right-auto lg:bottom-8 lg:-translate-x-1/2"
                            assets=assets.clone()
                        />
                    </div>

                    <div class="relative z-1 grid gap-5 lg:grid-cols-2">
                        <div class=photo_card.clone()>
                            <div class="absolute inset-0">
                                <img
                                    src=assets.resolve(&photo.image)
                                    class="h-full w-full object-cover"
                                    width="630"
                                    height="750"
                                    alt=photo.image_alt.clone()
                                />
                            </div>
                            <div class="absolute inset-0 flex flex-col justify-end p-8 bg-gradient-to-b from-n-8/0 to-n-8/90 lg:p-15">
                                <h4 class="h4 mb-4">{photo.title.clone()}</h4>
                                <p class=format!("body-2 mb-[3rem] {muted}")>{photo.text.clone()}</p>
                            </div>
                            <PhotoChatMessage prompt=photo_prompt.clone() />
                        </div>

                        <VideoCard
                            block=video.clone()
                            tools=video_tools.clone()
                            active_tool=active_tool
                            notice=video_notice.clone()
                            assets=assets.clone()
                            muted=muted.clone()
                        />
                    </div>

                    <Gradient assets=assets.clone() />
                </div>
            </div>
        </Section>
    }
}

/// Check-marked feature list, keyed by position.
#[component]
fn FeatureChecklist(features: Vec<String>, assets: AssetResolver) -> impl IntoView {
    let check = assets.resolve("check.svg");

    view! {
        <ul class="body-2">
            {features
                .into_iter()
                .enumerate()
                .map(|(index, feature)| {
                    view! {
                        <li data-key=index.to_string() class="flex items-start py-4 border-t border-n-6">
                            <img width="24" height="24" src=check.clone() alt="" />
                            <p class="ml-4">{feature}</p>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

/// Class of a tool icon tile; the active one gets the conic ring.
fn tool_classes(active: bool) -> (&'static str, &'static str) {
    if active {
        (
            "rounded-2xl flex items-center justify-center w-[3rem] h-[3rem] p-0.25 bg-conic-gradient md:w-[4.5rem] md:h-[4.5rem]",
            "flex items-center justify-center w-full h-full bg-n-7 rounded-[1rem]",
        )
    } else {
        (
            "rounded-2xl flex items-center justify-center w-10 h-10 bg-n-6 md:w-15 md:h-15",
            "",
        )
    }
}

#[component]
fn VideoCard(
    block: ServiceBlock,
    tools: Vec<String>,
    active_tool: usize,
    notice: String,
    assets: AssetResolver,
    muted: String,
) -> impl IntoView {
    let tool_items = tools
        .into_iter()
        .enumerate()
        .map(|(index, tool)| {
            let (outer, inner) = tool_classes(index == active_tool);
            view! {
                <li data-key=index.to_string() class=outer>
                    <div class=inner>
                        <img src=assets.resolve(&tool) width="24" height="24" alt=tool.clone() />
                    </div>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="p-4 bg-n-7 rounded-3xl overflow-hidden lg:min-h-[46rem]">
            <div class="py-12 px-4 xl:px-8">
                <h4 class="h4 mb-4">{block.title}</h4>
                <p class=format!("body-2 mb-[2rem] {muted}")>{block.text}</p>
                <ul class="flex items-center justify-between">{tool_items}</ul>
            </div>

            <div class="relative h-[20rem] bg-n-8 rounded-xl overflow-hidden md:h-[25rem]">
                <img
                    src=assets.resolve(&block.image)
                    class="w-full h-full object-cover"
                    width="520"
                    height="400"
                    alt=block.image_alt
                />
                <VideoChatMessage notice=notice assets=assets.clone() />
                <VideoBar assets=assets />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use leptos::tachys::view::RenderHtml;

    fn render(content: ServicesContent) -> String {
        view! { <Services content=content /> }.to_html()
    }

    #[test]
    fn section_is_anchored_for_navigation() {
        let html = render(content::services());
        assert!(html.starts_with("<div id=\"how-to-use\""));
        assert!(html.contains("Generative AI made for creators."));
    }

    #[test]
    fn checklist_keeps_feature_order() {
        let html = render(content::services());
        let generating = html.find("Photo generating").unwrap();
        let enhance = html.find("Photo enhance").unwrap();
        let integration = html.find("Seamless Integration").unwrap();
        assert!(generating < enhance && enhance < integration);
    }

    #[test]
    fn only_active_tool_gets_conic_ring() {
        let mut services = content::services();
        services.active_tool = 0;
        let html = render(services.clone());
        assert_eq!(html.matches("bg-conic-gradient").count(), 1);

        services.active_tool = services.video_tools.len();
        let html = render(services);
        assert_eq!(html.matches("bg-conic-gradient").count(), 0);
    }

    #[test]
    fn chat_mockups_carry_configured_copy() {
        let mut services = content::services();
        services.photo_prompt = "Make it brighter".into();
        services.video_notice = "Render finished".into();
        let html = render(services);

        assert!(html.contains("Make it brighter"));
        assert!(html.contains("Render finished"));
        assert!(html.contains("AI is generating"));
    }
}
