//! Product image that falls back to the merchandise placeholder.
//!
//! Used by both the carousel card and the detail modal. When the slide
//! changes, the loader is re-pointed at the new image so each slide gets its
//! own fallback attempt.

use leptos::prelude::*;

use crate::state::carousel::ImageHandle;
use crate::state::image::ImageLoader;

#[component]
pub fn SlideImage(#[prop(into)] image: Signal<ImageHandle>, class: &'static str) -> impl IntoView {
    let loader = RwSignal::new(image.with_untracked(|handle| ImageLoader::from(handle)));
    let node = NodeRef::<leptos::html::Img>::new();

    Effect::new(move || {
        image.with(|handle| loader.update(|l| l.retarget(handle)));
    });

    // Server-rendered carousel images can fail before `on:error` exists.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(img) = node.get() {
            let (complete, width) = (img.complete(), img.natural_width());
            loader.update(|l| l.reconcile(complete, width));
        }
    });

    let alt = move || image.with(|handle| handle.alt.clone());
    let is_available = move || !loader.with(ImageLoader::is_failed);

    view! {
        <Show
            when=is_available
            fallback=move || {
                view! { <div class=format!("{class} slide-image--failed") role="img" aria-label=alt></div> }
            }
        >
            <img
                node_ref=node
                class=class
                src=move || loader.with(|l| l.current_src().to_owned())
                alt=alt
                on:load=move |_| loader.update(ImageLoader::on_load)
                on:error=move |_| loader.update(ImageLoader::on_error)
            />
        </Show>
    }
}
