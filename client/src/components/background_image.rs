//! Background image with loading placeholder and one-shot fallback.
//!
//! A hidden `<img>` probes the source so load/error events fire (CSS
//! backgrounds never report them); the visible layer is a `div` whose
//! `background-image` follows the probe.

use leptos::prelude::*;

use crate::state::image::{ImageLoader, ImageStatus};

#[component]
pub fn BackgroundImage(
    #[prop(into)] src: String,
    #[prop(optional, into)] fallback_src: Option<String>,
    #[prop(into, default = "Background image".to_owned())] alt: String,
    #[prop(optional)] blur: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let loader = RwSignal::new(ImageLoader::new(src, fallback_src));
    let probe = NodeRef::<leptos::html::Img>::new();

    // The server-rendered probe may load or fail before hydration attaches
    // `on:load` / `on:error`.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(img) = probe.get() {
            let (complete, width) = (img.complete(), img.natural_width());
            loader.update(|l| l.reconcile(complete, width));
        }
    });

    let current_src = move || loader.with(|l| l.current_src().to_owned());
    let background = move || format!("url('{}')", current_src());
    let layer_class = move || {
        let mut class = String::from("background-image__layer");
        if blur {
            class.push_str(" background-image__layer--blur");
        }
        if loader.with(|l| l.status() == ImageStatus::Loaded) {
            class.push_str(" background-image__layer--visible");
        }
        class
    };
    let is_loading = move || loader.with(|l| l.status() == ImageStatus::Loading);
    let is_failed = move || loader.with(ImageLoader::is_failed);

    view! {
        <div class="background-image">
            <img
                node_ref=probe
                class="background-image__probe"
                src=current_src
                alt=""
                aria-hidden="true"
                on:load=move |_| loader.update(ImageLoader::on_load)
                on:error=move |_| loader.update(ImageLoader::on_error)
            />
            <div class=layer_class style:background-image=background role="img" aria-label=alt></div>
            <Show when=is_loading>
                <div class="background-image__placeholder"></div>
            </Show>
            <Show when=is_failed>
                <div class="background-image__fallback"></div>
            </Show>
            <div class="background-image__overlay"></div>
            {children.map(|children| view! { <div class="background-image__content">{children()}</div> })}
        </div>
    }
}
