//! Chat mockups and backdrop of the services section.

use leptos::prelude::*;

use crate::assets::AssetResolver;
use crate::components::ChatBubbleWing;

/// Blurred colour wash behind the service cards.
#[component]
pub fn Gradient(assets: AssetResolver) -> impl IntoView {
    view! {
        <div class="absolute top-0 -left-[10rem] w-[56.625rem] h-[56.625rem] opacity-50 mix-blend-color-dodge pointer-events-none">
            <img
                class="absolute top-1/2 left-1/2 w-[79.5625rem] max-w-[79.5625rem] h-[88.5625rem] -translate-x-1/2 -translate-y-1/2"
                src=assets.resolve("gradient.png")
                width="1417"
                height="1417"
                alt="Gradient"
            />
        </div>
    }
}

/// Outgoing chat bubble over the photo editing card.
#[component]
pub fn PhotoChatMessage(#[prop(into)] prompt: String) -> impl IntoView {
    view! {
        <div class="absolute top-8 right-8 max-w-[17.5rem] py-6 px-8 bg-black rounded-t-xl rounded-bl-xl font-code text-base lg:top-16 lg:right-[8.75rem] lg:max-w-[17.5rem]">
            {prompt}
            <ChatBubbleWing class="absolute left-full bottom-0" path_class="fill-black" />
        </div>
    }
}

/// Incoming chat bubble over the video preview.
#[component]
pub fn VideoChatMessage(#[prop(into)] notice: String, assets: AssetResolver) -> impl IntoView {
    view! {
        <div class="absolute top-8 left-[3.125rem] w-full max-w-[14rem] pt-2.5 pr-2.5 pb-7 pl-5 bg-n-6 rounded-t-xl rounded-br-xl font-code text-base md:max-w-[17.5rem]">
            {notice}
            <div class="absolute left-5 -bottom-[1.125rem] flex items-center justify-center w-[2.25rem] h-[2.25rem] bg-color-1 rounded-[0.75rem]">
                <img src=assets.resolve("brainwave-symbol-white.svg") width="26" height="26" alt="Brainwave" />
            </div>
            <p class="tagline absolute right-2.5 bottom-1 text-[0.625rem] text-n-3 uppercase">
                "just now"
            </p>
            <ChatBubbleWing class="absolute right-full bottom-0 -scale-x-100" path_class="fill-n-6" />
        </div>
    }
}

/// Play button and half-filled progress track.
#[component]
pub fn VideoBar(assets: AssetResolver) -> impl IntoView {
    view! {
        <div class="absolute left-0 bottom-0 w-full flex items-center p-6">
            <img src=assets.resolve("play.svg") width="24" height="24" alt="Play" class="object-contain mr-3" />
            <div class="flex-1 bg-[#D9D9D9]">
                <div class="w-1/2 h-0.5 bg-color-1"></div>
            </div>
        </div>
    }
}
