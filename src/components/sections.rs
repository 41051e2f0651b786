// src/components/sections.rs
// Page body: hero, the three anchored sections and the footer.

use gloo::console::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use super::icons::{Glyph, Icon};
use super::image::ImageWithFallback;
use crate::content::{
    ImageKey, Section, ACTIVITIES, BRAND_ACCENT, BRAND_LEAD, SOCIAL_LINKS, YEAR_GOALS,
};

fn scroll_to(section: Section) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));
    let Some(el) = target else {
        warn!(format!("hero: no #{} element to scroll to", section.id()));
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let on_read = Callback::from(|_: MouseEvent| scroll_to(Section::Informativo));

    html! {
        <header class="relative min-h-screen flex items-center justify-center overflow-hidden bg-stone-900">
            <div class="absolute inset-0 z-0">
                <ImageWithFallback
                    src={ImageKey::HeroGroup.src()}
                    alt="Grupo de pessoas na praia sorrindo"
                    class="w-full h-full object-cover opacity-80"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-stone-900 via-stone-900/40 to-black/30"></div>
            </div>

            <div class="relative z-10 container mx-auto px-6 text-center pt-32 pb-20">
                <span class="inline-block py-1 px-4 rounded-full bg-white/10 backdrop-blur-md text-white text-xs font-bold tracking-[0.2em] mb-6 border border-white/20 uppercase">
                    { "Informativo de Fevereiro" }
                </span>
                <h1 class="text-5xl md:text-7xl lg:text-8xl font-serif font-bold text-white mb-8 leading-[1.1] max-w-5xl mx-auto drop-shadow-2xl">
                    { "A Palavra de Deus na " }<br />
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-teal-200 to-teal-500 italic">{ "Língua do Coração" }</span>
                </h1>
                <p class="text-xl md:text-2xl text-stone-200 mb-10 max-w-2xl mx-auto font-light leading-relaxed drop-shadow-lg">
                    { "\"Quando Deus fala nossa língua, a mensagem não toca apenas a mente, ela transforma a alma.\"" }
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button
                        onclick={on_read}
                        class="bg-teal-500 hover:bg-teal-600 text-white px-8 py-4 rounded-full font-bold text-lg transition-all transform hover:scale-105 shadow-xl hover:shadow-teal-500/40 flex items-center justify-center gap-2"
                    >
                        { "Acesse o informativo" }
                        <Icon glyph={Glyph::ArrowRight} size={20} />
                    </button>
                </div>
            </div>
        </header>
    }
}

#[function_component(Newsletter)]
pub fn newsletter() -> Html {
    html! {
        <section id={Section::Informativo.id()} class="py-24 bg-white relative">
            <div class="container mx-auto px-6">
                <div class="flex flex-col lg:flex-row gap-16 items-start">
                    <div class="lg:w-3/5 order-2 lg:order-1">
                        <div class="flex items-center gap-3 mb-6">
                            <div class="bg-teal-100 p-3 rounded-full text-teal-700">
                                <Icon glyph={Glyph::BookOpen} />
                            </div>
                            <h3 class="text-teal-700 font-bold tracking-wide uppercase text-sm">{ "Carta aos Parceiros" }</h3>
                        </div>

                        <h2 class="text-3xl md:text-4xl font-serif font-bold text-stone-900 mb-8 leading-tight">
                            { "Gratidão e Avanço no Reino" }
                        </h2>

                        <div class="prose prose-lg text-stone-600 text-justify leading-relaxed">
                            <p class="mb-6">
                                { "Queridos amigos, gostaria de começar este informativo expressando minha gratidão ao Senhor, que, por meio de Sua Palavra, tem sustentado meus dias, providenciado e revelado Sua graça e amor de maneira extraordinária!" }
                            </p>
                            <p class="mb-6">
                                { "A cada dia, tenho presenciado e testemunhado o poder do evangelho, bem como os desafios que vêm com uma vida de devoção. Amigos, Satanás não está nada contente com aqueles que caminham em obediência à vontade do Senhor; ele não se alegra com você, que tem colocado seu coração não nas riquezas, mas no reino de Deus. E, em meio a todas essas questões, dificuldades surgirão, armadilhas serão lançadas para nos desviar do verdadeiro propósito: encontrar alegria em viver uma vida de obediência a Ele." }
                            </p>
                            <blockquote class="border-l-4 border-teal-500 pl-6 italic text-stone-700 font-serif my-8 bg-stone-50 py-4 pr-4 rounded-r-lg">
                                { "\"Minha oração é que o ladrão da alegria não tenha domínio sobre nossas vidas, que o Senhor nos revista com Sua proteção e bondade. Lembrem-se, o Senhor é e sempre será fiel; continuem crendo em Suas promessas e obedecendo ao Seu chamado.\"" }
                            </blockquote>

                            <h3 class="text-2xl font-serif font-bold text-stone-800 mt-10 mb-4">{ "Escola de Missões em Férias (EMF)" }</h3>
                            <p class="mb-6">
                                { "No mês de janeiro, participei da EMF. Durante esses 20 dias, tivemos um tempo teórico, onde os alunos foram treinados em ferramentas de evangelismo, como: dança, teatro, louvor e porte. Além disso, foram ministradas aulas para o aperfeiçoamento do caráter, abordando temas como: Paternidade de Deus, Sexualidade, Devoção, Coração Missionário de Deus e Vocação. Essas aulas visam preparar os alunos para a vida, o engajamento na Grande Comissão e as próximas fases de suas jornadas." }
                            </p>

                            <h3 class="text-2xl font-serif font-bold text-stone-800 mt-10 mb-4">{ "Prática em Indaiatuba" }</h3>
                            <p class="mb-6">
                                { "Uma parte importante foi o período prático, em que eu e mais três obreiros lideramos uma equipe de 14 jovens. Fomos para a cidade de Indaiatuba, onde a igreja \"Nazareno\" abriu suas portas para nos receber durante uma semana." }
                            </p>
                            <p class="mb-6">
                                { "Durante esse tempo, visitamos casas de recuperação, realizamos evangelismos na praça, na feira e com crianças. Também conduzimos treinamentos de evangelismo com os jovens da igreja e realizamos um grande workshop sobre evangelismo para toda a congregação. Durante as evangelizações e visitas, muitas pessoas foram tocadas pelo amor de Cristo." }
                            </p>

                            <h3 class="text-2xl font-serif font-bold text-stone-800 mt-10 mb-4">{ "Próximos Passos" }</h3>
                            <p class="mb-6">
                                { "Em fevereiro, começarei a trabalhar em tempo integral com a tribo Kamaiura, que atualmente reside em São Paulo e está se dedicando arduamente à tradução da Bíblia para sua língua materna." }
                            </p>

                            <div class="bg-stone-50 border-l-4 border-teal-500 p-6 my-8 rounded-r-lg shadow-sm">
                                <h4 class="font-bold text-stone-900 mb-4 text-lg">{ "Objetivos do Ano:" }</h4>
                                <ul class="space-y-4">
                                    { for YEAR_GOALS.iter().map(|goal| html! {
                                        <li class="flex items-start gap-3">
                                            <div class="bg-teal-100 p-1 rounded-full mt-0.5">
                                                <Icon glyph={Glyph::Check} size={14} class="text-teal-600" />
                                            </div>
                                            <span class="text-stone-700 font-medium">{ *goal }</span>
                                        </li>
                                    })}
                                </ul>
                            </div>
                        </div>
                    </div>

                    <div class="lg:w-2/5 order-1 lg:order-2 space-y-6">
                        <div class="relative">
                            <div class="absolute -inset-2 bg-teal-100 rounded-3xl transform rotate-2"></div>
                            <div class="relative rounded-2xl overflow-hidden shadow-xl">
                                <ImageWithFallback src={ImageKey::Soccer.src()} alt="Futebol com crianças" class="w-full h-72 object-cover" />
                                <div class="absolute bottom-0 left-0 right-0 bg-gradient-to-t from-black/70 to-transparent p-4">
                                    <p class="text-white font-medium text-sm">{ "Evangelismo e esporte com crianças" }</p>
                                </div>
                            </div>
                        </div>

                        <div class="grid grid-cols-2 gap-4">
                            <div class="rounded-2xl overflow-hidden shadow-lg h-48">
                                <ImageWithFallback src={ImageKey::KidsFruit.src()} alt="Crianças" class="w-full h-full object-cover" />
                            </div>
                            <div class="rounded-2xl overflow-hidden shadow-lg h-48 bg-stone-100 flex items-center justify-center text-center p-4">
                                <div>
                                    <span class="block text-3xl font-bold text-teal-600 mb-1">{ "20" }</span>
                                    <span class="text-sm text-stone-600 font-medium">{ "Dias de treinamento intensivo" }</span>
                                </div>
                            </div>
                        </div>

                        <div class="bg-stone-50 rounded-2xl p-6 border border-stone-100">
                            <h4 class="font-bold text-stone-800 mb-3 flex items-center gap-2">
                                <Icon glyph={Glyph::Check} size={18} class="text-teal-500" />
                                { "Atividades Realizadas" }
                            </h4>
                            <ul class="space-y-2 text-sm text-stone-600">
                                { for ACTIVITIES.iter().map(|activity| html! {
                                    <li class="flex items-start gap-2">
                                        <span class="w-1.5 h-1.5 rounded-full bg-stone-400 mt-2"></span>
                                        { *activity }
                                    </li>
                                })}
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Section::Sobre.id()} class="py-24 bg-stone-50 border-t border-stone-200">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto">
                    <div class="flex items-center justify-center gap-3 mb-8">
                        <div class="bg-stone-200 p-3 rounded-full text-stone-700">
                            <Icon glyph={Glyph::User} />
                        </div>
                        <h3 class="text-stone-500 font-bold tracking-wide uppercase text-sm">{ "Quem sou eu" }</h3>
                    </div>

                    <h2 class="text-4xl md:text-5xl font-serif font-bold text-stone-900 mb-2 text-center">
                        { "Marcelo Alonso Jr." }
                    </h2>
                    <p class="text-teal-600 font-medium text-lg text-center mb-10">{ "JOCUM – Jovens com Uma Missão" }</p>

                    <div class="bg-white p-8 md:p-12 rounded-3xl shadow-sm border border-stone-100">
                        <div class="flex flex-col md:flex-row gap-10 items-center">
                            <div class="w-full md:w-1/3 flex-shrink-0">
                                <div class="aspect-[3/4] rounded-2xl overflow-hidden shadow-lg relative">
                                    <ImageWithFallback src={ImageKey::ExtraLandscape.src()} alt="Marcelo Alonso Jr." class="w-full h-full object-cover" />
                                    <div class="absolute inset-0 bg-gradient-to-t from-stone-900/60 to-transparent flex items-end p-6">
                                        <span class="text-white font-serif italic text-xl">{ "\"Vem, Senhor Jesus\"" }</span>
                                    </div>
                                </div>
                            </div>

                            <div class="md:w-2/3 prose prose-stone text-justify leading-relaxed text-stone-600">
                                <p>
                                    { "Tenho 27 anos e há três anos sirvo em missões através da JOCUM (Jovens com Uma Missão), atuando principalmente na tradução da Bíblia, além de evangelismo e discipulado entre povos e culturas diversas." }
                                </p>
                                <p>
                                    { "Em 2022, a palavra " }<strong>{ "Maranata" }</strong>
                                    { " — \"Ora vem, Senhor Jesus\" — deixou de ser apenas uma expressão bíblica e passou a queimar profundamente em meu coração. Não como um desejo passivo pela volta de Cristo, mas como uma convocação à obediência. Entendi que desejar a vinda do Senhor está diretamente ligado a viver para apressá-la, alcançando povos, línguas e nações com a revelação do Evangelho." }
                                </p>
                                <p>
                                    { "Esse chamado tem se expressado de forma prática através da tradução das Escrituras, servindo comunidades que ainda não têm acesso pleno à Palavra de Deus em sua língua materna. A tradução não é apenas um trabalho linguístico, mas um ato missionário: permitir que Cristo fale ao coração de cada povo dentro da sua própria cultura." }
                                </p>
                                <p>
                                    { "Além disso, seguimos comprometidos com o evangelismo relacional e o discipulado, crendo que a missão não termina na conversão, mas no estabelecimento de discípulos que vivam o Reino de Deus em suas realidades locais." }
                                </p>
                                <p class="font-medium text-stone-800 italic border-l-2 border-teal-500 pl-4">
                                    { "\"Minha oração é que o corpo de Cristo seja fortalecido, que tradutores, líderes e igrejas locais sejam levantados pelo Espírito Santo e que cada povo possa ouvir, compreender e responder ao chamado do Rei que está voltando.\"" }
                                </p>
                                <p class="text-right font-bold text-stone-900 mt-4">
                                    { "Seguimos firmes, com os olhos no campo e o coração na promessa:" }<br />
                                    <span class="text-teal-600">{ "Maranata. Vem, Senhor Jesus." }</span>
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticipateProps {
    pub on_pray: Callback<MouseEvent>,
    pub on_give: Callback<MouseEvent>,
}

#[function_component(Participate)]
pub fn participate(props: &ParticipateProps) -> Html {
    html! {
        <section id={Section::Participe.id()} class="py-24 bg-stone-100 border-t border-stone-200">
            <div class="container mx-auto px-6 text-center max-w-4xl">
                <Icon glyph={Glyph::BookOpen} size={56} class="text-teal-600 mx-auto mb-8" />
                <h2 class="text-3xl md:text-5xl font-serif font-bold text-stone-900 mb-6">
                    { "A História Ainda Não Acabou" }
                </h2>
                <p class="text-xl text-stone-600 mb-12 leading-relaxed">
                    { "Você pode ser parte da resposta de oração. Junte-se a nós nesta caminhada de fé." }
                </p>
                <div class="flex flex-col sm:flex-row gap-5 justify-center items-center">
                    <button
                        onclick={props.on_pray.clone()}
                        class="w-full sm:w-auto bg-stone-900 hover:bg-stone-800 text-white px-10 py-4 rounded-full font-medium transition-all shadow-lg hover:shadow-xl"
                    >
                        { "Quero Orar" }
                    </button>
                    <button
                        onclick={props.on_give.clone()}
                        class="w-full sm:w-auto bg-teal-600 hover:bg-teal-700 text-white px-10 py-4 rounded-full font-bold text-lg transition-all shadow-lg hover:shadow-teal-500/40 hover:-translate-y-1"
                    >
                        { "Quero Contribuir" }
                    </button>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-stone-900 text-stone-400 py-12 border-t border-stone-800">
            <div class="container mx-auto px-6 flex flex-col md:flex-row justify-between items-center gap-6">
                <div class="text-2xl font-serif font-bold text-white tracking-tighter">
                    { BRAND_LEAD }<span class="text-teal-500">{ BRAND_ACCENT }</span>
                </div>
                <div class="text-sm text-center md:text-left">
                    { "© 2025 Projeto Tradução. Imagens reais do campo missionário." }
                </div>
                <div class="flex gap-6">
                    { for SOCIAL_LINKS.iter().map(|link| {
                        let (target, rel) = if link.opens_new_tab() {
                            (Some("_blank"), Some("noopener noreferrer"))
                        } else {
                            (None, None)
                        };
                        html! {
                            <a
                                key={link.label}
                                href={link.href}
                                {target}
                                {rel}
                                title={link.title}
                                class="hover:text-white hover:scale-110 transition-all flex items-center gap-2"
                            >
                                <Icon glyph={link.glyph} />
                                <span class="sr-only">{ link.label }</span>
                            </a>
                        }
                    })}
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn footer_links_open_outside_except_mail() {
        let html = ServerRenderer::<Footer>::new().hydratable(false).render().await;

        assert!(html.contains("https://wa.me/5511958139868"));
        assert!(html.contains("mailto:contato@exemplo.com"));
        assert_eq!(html.matches("target=\"_blank\"").count(), 3);
        assert_eq!(html.matches("noopener noreferrer").count(), 3);
    }

    #[tokio::test]
    async fn sections_carry_their_anchor_ids() {
        let newsletter = ServerRenderer::<Newsletter>::new().hydratable(false).render().await;
        assert!(newsletter.contains("id=\"informativo\""));
        assert!(newsletter.contains("Objetivos do Ano:"));
        assert!(newsletter.contains("Teatro e Dança"));

        let about = ServerRenderer::<About>::new().hydratable(false).render().await;
        assert!(about.contains("id=\"sobre\""));
        assert!(about.contains(&ImageKey::ExtraLandscape.src()));
    }

    #[tokio::test]
    async fn participate_offers_both_actions() {
        let html = ServerRenderer::<Participate>::with_props(|| ParticipateProps {
            on_pray: Callback::noop(),
            on_give: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("id=\"participe\""));
        assert!(html.contains("Quero Orar"));
        assert!(html.contains("Quero Contribuir"));
    }
}
