// src/components/image.rs
use gloo::console::warn;
use yew::prelude::*;

use super::icons::{Glyph, Icon};

/// Load status of one `<img>`. `Failed` is terminal for the lifetime of the component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageState {
    Loading,
    Loaded,
    Failed,
}

impl ImageState {
    pub fn on_load(self) -> Self {
        match self {
            ImageState::Failed => ImageState::Failed,
            _ => ImageState::Loaded,
        }
    }

    pub fn on_error(self) -> Self {
        ImageState::Failed
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ImageWithFallback)]
pub fn image_with_fallback(props: &ImageProps) -> Html {
    let state = use_state_eq(|| ImageState::Loading);

    if *state == ImageState::Failed {
        return html! { <MissingImage src={props.src.clone()} class={props.class.clone()} /> };
    }

    let onload = {
        let state = state.clone();
        Callback::from(move |_: Event| state.set(state.on_load()))
    };

    let onerror = {
        let state = state.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            warn!(format!("image: failed to load {src}"));
            state.set(state.on_error());
        })
    };

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            {onload}
            {onerror}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct MissingImageProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Placeholder shown in place of an image that could not be loaded. Keeps the
/// caller's sizing classes and prints the path that was requested.
#[function_component(MissingImage)]
pub fn missing_image(props: &MissingImageProps) -> Html {
    html! {
        <div class={classes!(
            props.class.clone(),
            "bg-stone-200", "flex", "flex-col", "items-center", "justify-center",
            "text-stone-500", "border-2", "border-dashed", "border-stone-300", "p-4", "text-center"
        )}>
            <Icon glyph={Glyph::Image} size={32} class="mb-2 opacity-50" />
            <span class="text-xs font-mono break-all">{ props.src.clone() }</span>
            <span class="text-[10px] mt-1 text-stone-400">{ "(Imagem não encontrada)" }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[test]
    fn failure_is_terminal() {
        let failed = ImageState::Loading.on_error();
        assert_eq!(failed, ImageState::Failed);
        assert_eq!(failed.on_load(), ImageState::Failed);
        assert_eq!(ImageState::Loaded.on_error(), ImageState::Failed);
    }

    #[test]
    fn load_moves_loading_to_loaded() {
        assert_eq!(ImageState::Loading.on_load(), ImageState::Loaded);
        assert_eq!(ImageState::Loaded.on_load(), ImageState::Loaded);
    }

    #[tokio::test]
    async fn placeholder_shows_requested_path() {
        let html = ServerRenderer::<MissingImage>::with_props(|| MissingImageProps {
            src: "img/IMG_20251102_172913274_HDR.jpg".into(),
            class: classes!("w-full", "h-72"),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("img/IMG_20251102_172913274_HDR.jpg"));
        assert!(html.contains("(Imagem não encontrada)"));
        assert!(html.contains("border-dashed"));
        assert!(html.contains("h-72"), "caller sizing lost: {html}");
        assert!(!html.contains("<img"));
    }

    #[tokio::test]
    async fn image_renders_img_before_any_error() {
        let html = ServerRenderer::<ImageWithFallback>::with_props(|| ImageProps {
            src: "img/IMG_20251104_101548670.jpg".into(),
            alt: "Crianças".into(),
            class: Classes::new(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("<img"));
        assert!(html.contains("src=\"img/IMG_20251104_101548670.jpg\""));
        assert!(!html.contains("Imagem não encontrada"));
    }
}
