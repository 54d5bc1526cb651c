//! Status pill shown while a result is being produced.

use leptos::prelude::*;

use crate::assets::AssetResolver;
use crate::styles::class_list;

/// "AI is generating" status pill.
#[component]
pub fn Generating(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] assets: AssetResolver,
) -> impl IntoView {
    let classes = class_list([
        "flex items-center h-[3.5rem] px-6 bg-n-8/80 rounded-[1.7rem]",
        class.as_deref().unwrap_or_default(),
        "text-base",
    ]);

    view! {
        <div class=classes>
            <img class="w-5 h-5 mr-4" src=assets.resolve("loading.png") alt="Loading" />
            "AI is generating"
        </div>
    }
}
