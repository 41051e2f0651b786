// src/components/modals.rs
use yew::prelude::*;

use super::icons::{Glyph, Icon};
use crate::content::{ACCOUNT_HOLDER, PIX_KEY, PRAYER_REQUESTS};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Gradient classes for the strip along the top edge.
    pub accent: Classes,
    pub on_close: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Html,
}

/// Overlay shell shared by both dialogs. Clicking the backdrop or the corner
/// button emits `on_close`; clicks inside the panel never reach the backdrop.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4" role="dialog" aria-modal="true">
            <div
                class="modal-backdrop absolute inset-0 bg-stone-900/70 backdrop-blur-sm transition-opacity"
                onclick={props.on_close.clone()}
            ></div>

            <div class="relative bg-white rounded-3xl shadow-2xl p-8 max-w-md w-full animate-fade-in-up transform scale-100 overflow-hidden">
                <div class={classes!("absolute", "top-0", "left-0", "w-full", "h-2", "bg-gradient-to-r", props.accent.clone())}></div>

                <button
                    onclick={props.on_close.clone()}
                    aria-label="Fechar"
                    class="absolute top-4 right-4 text-stone-400 hover:text-stone-800 bg-stone-100 hover:bg-stone-200 rounded-full p-2 transition-colors"
                >
                    <Icon glyph={Glyph::X} size={20} />
                </button>

                { props.children.clone() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContributionModalProps {
    pub copied: bool,
    pub on_copy: Callback<MouseEvent>,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(ContributionModal)]
pub fn contribution_modal(props: &ContributionModalProps) -> Html {
    let copy_look = if props.copied {
        "bg-green-100 text-green-700"
    } else {
        "bg-teal-50 hover:bg-teal-100 text-teal-700"
    };

    html! {
        <Modal accent={classes!("from-teal-400", "to-teal-600")} on_close={props.on_close.clone()}>
            <div class="text-center mb-8 mt-2">
                <div class="bg-teal-50 w-20 h-20 rounded-full flex items-center justify-center mx-auto mb-4 text-teal-600 ring-4 ring-teal-50">
                    <Icon glyph={Glyph::Heart} size={36} filled=true />
                </div>
                <h3 class="text-2xl font-serif font-bold text-stone-900">{ "Faça sua Contribuição" }</h3>
                <p class="text-stone-500 mt-2 text-sm leading-relaxed">
                    { "Seu apoio acelera a tradução e leva a Palavra a quem nunca ouviu." }
                </p>
            </div>

            <div class="bg-stone-50 border border-stone-200 rounded-2xl p-6 mb-6 relative overflow-hidden group">
                <div class="absolute top-0 right-0 p-2 opacity-10">
                    <Icon glyph={Glyph::Globe} size={100} />
                </div>

                <div class="text-xs font-bold text-stone-400 uppercase tracking-wider mb-3">{ "Chave Pix" }</div>
                <div class="flex items-center justify-between gap-3 bg-white p-3 rounded-xl border border-stone-200 shadow-sm">
                    <code class="text-xl font-mono font-bold text-stone-800 break-all">{ PIX_KEY }</code>
                    <button
                        onclick={props.on_copy.clone()}
                        class={classes!("p-3", "rounded-lg", "transition-all", "flex-shrink-0", copy_look)}
                        title="Copiar chave Pix"
                    >
                        <Icon glyph={if props.copied { Glyph::Check } else { Glyph::Copy }} size={20} />
                    </button>
                </div>
                if props.copied {
                    <div class="text-green-600 text-xs mt-2 font-bold flex items-center gap-1 justify-center" aria-live="polite">
                        <Icon glyph={Glyph::Check} size={12} />
                        { "Chave copiada!" }
                    </div>
                }
            </div>

            <div class="text-center pt-2 pb-4">
                <div class="text-xs text-stone-400 uppercase tracking-widest mb-1">{ "Titular da conta" }</div>
                <div class="font-bold text-stone-800 text-lg flex items-center justify-center gap-2">
                    <div class="w-2 h-2 bg-teal-500 rounded-full"></div>
                    { ACCOUNT_HOLDER }
                </div>
            </div>

            <button
                onclick={props.on_close.clone()}
                class="w-full mt-4 bg-stone-900 hover:bg-stone-800 text-white font-bold py-4 px-4 rounded-xl transition-all shadow-lg hover:shadow-stone-900/20 active:scale-95"
            >
                { "Fechar" }
            </button>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
pub struct PrayerModalProps {
    pub on_close: Callback<MouseEvent>,
}

#[function_component(PrayerModal)]
pub fn prayer_modal(props: &PrayerModalProps) -> Html {
    html! {
        <Modal accent={classes!("from-stone-400", "to-stone-600")} on_close={props.on_close.clone()}>
            <div class="text-center mb-8 mt-2">
                <div class="bg-stone-100 w-20 h-20 rounded-full flex items-center justify-center mx-auto mb-4 text-stone-600 ring-4 ring-stone-50">
                    <Icon glyph={Glyph::HandHeart} size={36} />
                </div>
                <h3 class="text-2xl font-serif font-bold text-stone-900">{ "Motivos de Oração" }</h3>
                <p class="text-stone-500 mt-2 text-sm leading-relaxed">
                    { "\"A oração do justo é poderosa e eficaz.\" (Tiago 5:16)" }
                </p>
            </div>

            <div class="space-y-4 mb-8">
                { for PRAYER_REQUESTS.iter().map(|req| {
                    let (row, glyph) = if req.highlighted {
                        ("bg-teal-50 hover:bg-teal-100 border border-teal-100", Glyph::Heart)
                    } else {
                        ("bg-stone-50 hover:bg-stone-100", Glyph::Check)
                    };
                    html! {
                        <div class={classes!("flex", "gap-4", "items-start", "p-3", "rounded-xl", "transition-colors", row)}>
                            <div class="mt-1 text-teal-600"><Icon {glyph} size={18} /></div>
                            <div class="text-stone-700 text-sm">
                                { req.lead }<strong>{ req.emphasis }</strong>{ req.tail }
                            </div>
                        </div>
                    }
                })}
            </div>

            <button
                onclick={props.on_close.clone()}
                class="w-full bg-stone-900 hover:bg-stone-800 text-white font-bold py-4 px-4 rounded-xl transition-all shadow-lg hover:shadow-stone-900/20 active:scale-95"
            >
                { "Vou Orar" }
            </button>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render_contribution(copied: bool) -> String {
        ServerRenderer::<ContributionModal>::with_props(move || ContributionModalProps {
            copied,
            on_copy: Callback::noop(),
            on_close: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn contribution_shows_key_and_holder() {
        let html = render_contribution(false).await;
        assert!(html.contains("4301947894"));
        assert!(html.contains("Marcelo Alonso Junior"));
        assert!(html.contains("modal-backdrop"));
        assert!(!html.contains("Chave copiada!"));
    }

    #[tokio::test]
    async fn confirmation_only_while_copied() {
        let html = render_contribution(true).await;
        assert!(html.contains("Chave copiada!"));
        assert!(html.contains("bg-green-100"));
    }

    #[tokio::test]
    async fn prayer_modal_lists_every_request() {
        let html = ServerRenderer::<PrayerModal>::with_props(|| PrayerModalProps {
            on_close: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        for req in PRAYER_REQUESTS {
            assert!(html.contains(req.emphasis), "missing {}", req.emphasis);
        }
        assert!(html.contains("Vou Orar"));
        assert_eq!(html.matches("border-teal-100").count(), 1);
    }
}
