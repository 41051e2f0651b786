// src/main.rs — Tradução da Bíblia newsletter page (Rust + Yew + WASM)
mod clipboard;
mod components;
mod content;
mod state;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console::{error, log};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use clipboard::{CopyError, CopyRoute};
use components::modals::{ContributionModal, PrayerModal};
use components::nav::{MobileMenu, Nav};
use components::sections::{About, Footer, Hero, Newsletter, Participate};
use content::Section;
use state::{PageAction, PageState, COPY_RESET_MS};

/// The pending "copied" reset and the tag handed to the next successful copy.
#[derive(Default)]
struct CopyReset {
    generation: u32,
    pending: Option<Timeout>,
}

type CopyResetSlot = Rc<RefCell<CopyReset>>;

fn finish_copy(
    result: Result<(), CopyError>,
    page: &UseReducerDispatcher<PageState>,
    slot: &CopyResetSlot,
) {
    if let Err(e) = result {
        error!(format!("pix: copy failed: {e}"));
        return;
    }
    log!("pix: key copied");

    let generation = {
        let mut reset = slot.borrow_mut();
        reset.generation = reset.generation.wrapping_add(1);
        reset.generation
    };
    page.dispatch(PageAction::Copied(generation));

    let expire = page.clone();
    let timeout = Timeout::new(COPY_RESET_MS, move || {
        expire.dispatch(PageAction::CopyExpired(generation))
    });
    // Replacing the previous timeout drops (cancels) it.
    slot.borrow_mut().pending = Some(timeout);
}

#[function_component(App)]
fn app() -> Html {
    let page = use_reducer_eq(PageState::default);

    let copy_reset = use_mut_ref(CopyReset::default);

    // Scroll observer, alive while the page is mounted.
    {
        let page = page.dispatcher();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|win| {
                if let Ok(offset) = win.scroll_y() {
                    page.dispatch(PageAction::Scrolled(offset));
                }
                EventListener::new(&win, "scroll", move |_| {
                    if let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                        page.dispatch(PageAction::Scrolled(offset));
                    }
                })
            });
            move || drop(listener)
        });
    }

    // Don't let a pending reset fire after unmount.
    {
        let copy_reset = copy_reset.clone();
        use_effect_with((), move |_| {
            move || {
                copy_reset.borrow_mut().pending.take();
            }
        });
    }

    let on = |action: PageAction| {
        let page = page.dispatcher();
        Callback::from(move |_: MouseEvent| page.dispatch(action))
    };

    let on_navigate = {
        let page = page.dispatcher();
        Callback::from(move |section: Section| page.dispatch(PageAction::NavigateTo(section)))
    };

    let on_copy = {
        let page = page.dispatcher();
        let copy_reset = copy_reset.clone();
        Callback::from(move |_: MouseEvent| {
            match CopyRoute::pick(clipboard::has_async_clipboard()) {
                CopyRoute::Textarea => {
                    finish_copy(clipboard::copy_with_textarea(content::PIX_KEY), &page, &copy_reset)
                }
                CopyRoute::AsyncApi => {
                    let page = page.clone();
                    let copy_reset = copy_reset.clone();
                    spawn_local(async move {
                        let result = clipboard::write_text(content::PIX_KEY).await;
                        finish_copy(result, &page, &copy_reset);
                    });
                }
            }
        })
    };

    html! {
        <div class="font-sans text-stone-800 bg-stone-50 selection:bg-teal-200 selection:text-teal-900 relative">
            <Nav
                scrolled={page.scrolled}
                menu_open={page.mobile_menu_open}
                on_toggle_menu={on(PageAction::ToggleMenu)}
                on_support={on(PageAction::OpenContribution)}
            />

            if page.mobile_menu_open {
                <MobileMenu {on_navigate} on_support={on(PageAction::SupportFromMenu)} />
            }

            <Hero />
            <Newsletter />
            <About />
            <Participate
                on_pray={on(PageAction::OpenPrayer)}
                on_give={on(PageAction::OpenContribution)}
            />
            <Footer />

            if page.contribution_open {
                <ContributionModal
                    copied={page.copied}
                    {on_copy}
                    on_close={on(PageAction::CloseContribution)}
                />
            }

            if page.prayer_open {
                <PrayerModal on_close={on(PageAction::ClosePrayer)} />
            }
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn first_paint_has_sections_and_no_dialogs() {
        let html = ServerRenderer::<App>::new().hydratable(false).render().await;

        for section in Section::ALL {
            assert!(html.contains(&format!("id=\"{}\"", section.id())));
        }
        assert!(html.contains("bg-transparent"));
        assert!(!html.contains("Chave Pix"));
        assert!(!html.contains("Motivos de Oração"));
        assert!(!html.contains("Quero Apoiar"));
    }
}
