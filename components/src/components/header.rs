//! Fixed site header with navigation and the mobile menu toggle.

use leptos::prelude::*;

use super::{Button, ButtonAction, HamburgerMenu, MenuSvg, OnActivate};
use crate::assets::AssetResolver;
use crate::styles::{Theme, class_list};
use crate::types::NavItem;

const NAV_LINK: &str = "block relative font-code text-2xl uppercase text-n-1 transition-colors hover:text-color-1 px-6 py-6 md:py-8 lg:-mr-0.25 lg:text-xs lg:font-semibold lg:leading-5 lg:hover:text-n-1 xl:px-12";

/// Inline script opening and closing the mobile menu in the static page.
///
/// Hooks: `[data-menu-toggle]` wraps the toggle button, `[data-menu]` is the
/// nav whose `hidden` class is flipped. Following a link closes the menu.
pub const MENU_SCRIPT: &str = r#"
(() => {
  const toggle = document.querySelector('[data-menu-toggle]');
  const nav = document.querySelector('[data-menu]');
  if (!toggle || !nav) return;
  const setOpen = (open) => {
    nav.classList.toggle('hidden', !open);
    nav.classList.toggle('flex', open);
    toggle.dataset.open = String(open);
    toggle.querySelectorAll('rect').forEach((bar, i) => {
      bar.setAttribute('y', open ? '5' : String(i * 10));
      bar.setAttribute('transform', open ? (i ? 'rotate(-45 10 7)' : 'rotate(45 10 7)') : '');
    });
    document.body.classList.toggle('overflow-hidden', open);
  };
  toggle.addEventListener('click', () => setOpen(toggle.dataset.open !== 'true'));
  nav.querySelectorAll('a').forEach(link => link.addEventListener('click', () => setOpen(false)));
})();
"#;

/// Classes of one navigation link. Mobile-only entries are hidden on
/// large screens.
pub fn nav_link_classes(item: &NavItem) -> String {
    class_list([
        NAV_LINK,
        if item.only_mobile { "lg:hidden" } else { "" },
    ])
}

/// Site header.
///
/// `open` is the initial state of the mobile menu. The toggle button
/// reports presses through `on_toggle`; in the static page [`MENU_SCRIPT`]
/// flips the menu through the `data-menu*` hooks.
#[component]
pub fn Header(
    navigation: Vec<NavItem>,
    #[prop(optional)] open: bool,
    #[prop(optional)] on_toggle: Option<OnActivate>,
    #[prop(optional)] assets: AssetResolver,
    #[prop(optional)] theme: Theme,
) -> impl IntoView {
    let shell = if open {
        "fixed top-0 left-0 w-full z-50 border-b border-n-6 lg:bg-n-8/90 lg:backdrop-blur-sm bg-n-8"
    } else {
        "fixed top-0 left-0 w-full z-50 border-b border-n-6 lg:bg-n-8/90 lg:backdrop-blur-sm bg-n-8/90 backdrop-blur-sm"
    };
    let nav_class = if open {
        "fixed top-[5rem] left-0 right-0 bottom-0 bg-n-8 flex lg:static lg:flex lg:mx-auto lg:bg-transparent"
    } else {
        "hidden fixed top-[5rem] left-0 right-0 bottom-0 bg-n-8 lg:static lg:flex lg:mx-auto lg:bg-transparent"
    };

    let links = navigation
        .into_iter()
        .map(|item| {
            let classes = nav_link_classes(&item);
            view! {
                <a data-key=item.id href=item.url class=classes>
                    {item.title}
                </a>
            }
        })
        .collect::<Vec<_>>();

    let backdrop = open.then(|| view! { <HamburgerMenu assets=assets.clone() /> });

    view! {
        <div class=shell>
            <div class="flex items-center px-5 lg:px-7.5 xl:px-10 max-lg:py-4">
                <a class="block w-[12rem] xl:mr-8" href="#hero">
                    <img src=assets.resolve("brainwave.svg") width="190" height="40" alt="Brainwave" />
                </a>

                <nav data-menu="mobile" class=nav_class>
                    <div class="relative z-2 flex flex-col items-center justify-center m-auto lg:flex-row">
                        {links}
                    </div>
                    {backdrop}
                </nav>

                <a
                    href="#signup"
                    class="button hidden mr-8 text-n-1/50 transition-colors hover:text-n-1 lg:block"
                >
                    "New account"
                </a>
                <Button class="hidden lg:flex" action=ButtonAction::link("#login") theme=theme.clone()>
                    "Sign in"
                </Button>

                <div data-menu-toggle="mobile" data-open=open.to_string() class="ml-auto lg:hidden">
                    <Button
                        padding="px-3"
                        action=ButtonAction::from_parts(None, on_toggle)
                        theme=theme
                    >
                        <MenuSvg open=open />
                    </Button>
                </div>
            </div>
        </div>
    }
}
