// src/components/nav.rs
use yew::prelude::*;

use super::icons::{Glyph, Icon};
use crate::content::{Section, BRAND_ACCENT, BRAND_LEAD};

/// Bar background: transparent over the hero, solid white once scrolled.
pub fn nav_classes(scrolled: bool) -> Classes {
    let look = if scrolled {
        "bg-white/95 backdrop-blur-md shadow-md py-3"
    } else {
        "bg-transparent py-6"
    };
    classes!("fixed", "w-full", "z-40", "transition-all", "duration-300", look)
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<MouseEvent>,
    pub on_support: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let scrolled = props.scrolled;

    let brand_color = if scrolled { "text-teal-900" } else { "text-white drop-shadow-md" };
    let link_color = if scrolled { "text-stone-600" } else { "text-white/90 drop-shadow-sm" };
    let support_look = if scrolled {
        "bg-teal-600 hover:bg-teal-700 text-white"
    } else {
        "bg-white text-teal-700 hover:bg-stone-100"
    };

    html! {
        <nav class={nav_classes(scrolled)}>
            <div class="container mx-auto px-6 flex justify-between items-center">
                <div class={classes!("text-2xl", "font-serif", "font-bold", "tracking-tighter", "transition-colors", brand_color)}>
                    { BRAND_LEAD }<span class="text-teal-500">{ BRAND_ACCENT }</span>
                </div>

                <div class="hidden lg:flex space-x-8 items-center">
                    { for Section::ALL.iter().map(|s| html! {
                        <a
                            key={s.id()}
                            href={s.href()}
                            class={classes!("font-medium", "hover:text-teal-500", "transition-colors", link_color)}
                        >
                            { s.label() }
                        </a>
                    })}
                    <button
                        onclick={props.on_support.clone()}
                        class={classes!("px-6", "py-2", "rounded-full", "font-medium", "transition-all", "shadow-lg", "hover:shadow-teal-500/30", support_look)}
                    >
                        { "Apoiar" }
                    </button>
                </div>

                <button
                    class="lg:hidden text-teal-600"
                    aria-label={if props.menu_open { "Fechar menu" } else { "Abrir menu" }}
                    onclick={props.on_toggle_menu.clone()}
                >
                    if props.menu_open {
                        <Icon glyph={Glyph::X} size={28} />
                    } else {
                        <Icon glyph={Glyph::Menu} size={28} class={if scrolled { "text-stone-800" } else { "text-white" }} />
                    }
                </button>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub on_navigate: Callback<Section>,
    pub on_support: Callback<MouseEvent>,
}

/// Full-screen overlay shown below `lg` while the menu is open.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    html! {
        <div class="fixed inset-0 z-30 bg-white pt-24 px-6 lg:hidden animate-fade-in">
            <div class="flex flex-col gap-6 text-xl text-stone-800 font-medium text-center">
                { for Section::ALL.iter().map(|s| {
                    let section = *s;
                    let onclick = props.on_navigate.reform(move |_: MouseEvent| section);
                    html! {
                        <a key={section.id()} href={section.href()} {onclick}>{ section.label() }</a>
                    }
                })}
                <button onclick={props.on_support.clone()} class="bg-teal-600 text-white py-3 rounded-xl mt-4">
                    { "Quero Apoiar" }
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[test]
    fn nav_turns_solid_when_scrolled() {
        let solid = nav_classes(true).to_string();
        assert!(solid.contains("bg-white/95"));
        assert!(!solid.contains("bg-transparent"));

        let clear = nav_classes(false).to_string();
        assert!(clear.contains("bg-transparent"));
        assert!(!clear.contains("bg-white/95"));
    }

    #[tokio::test]
    async fn nav_lists_sections_and_support_button() {
        let html = ServerRenderer::<Nav>::with_props(|| NavProps {
            scrolled: true,
            menu_open: false,
            on_toggle_menu: Callback::noop(),
            on_support: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        for href in ["#informativo", "#sobre", "#participe"] {
            assert!(html.contains(href), "missing {href}");
        }
        assert!(html.contains("Apoiar"));
        assert!(html.contains("Abrir menu"));
        assert!(html.contains("bg-teal-600"));
    }

    #[tokio::test]
    async fn open_menu_swaps_button_label() {
        let html = ServerRenderer::<Nav>::with_props(|| NavProps {
            scrolled: false,
            menu_open: true,
            on_toggle_menu: Callback::noop(),
            on_support: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("Fechar menu"));
        assert!(html.contains("bg-transparent"));
    }

    #[tokio::test]
    async fn mobile_menu_offers_support() {
        let html = ServerRenderer::<MobileMenu>::with_props(|| MobileMenuProps {
            on_navigate: Callback::noop(),
            on_support: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("Quero Apoiar"));
        assert!(html.contains("href=\"#sobre\""));
    }
}
