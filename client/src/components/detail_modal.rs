//! Lightbox for the carousel's current slide.

#[cfg(test)]
#[path = "detail_modal_test.rs"]
mod detail_modal_test;

use leptos::prelude::*;

use crate::components::slide_image::SlideImage;
use crate::state::carousel::CarouselState;

/// Fullscreen detail view. Closes on the close button, a backdrop click, or
/// Escape; every path goes through `close_detail` so autoplay resumes.
#[component]
pub fn DetailModal() -> impl IntoView {
    let carousel = expect_context::<RwSignal<CarouselState>>();
    let current = Memo::new(move |_| carousel.with(|c| c.current_slide().clone()));
    let image = Memo::new(move |_| current.with(|s| s.image.clone()));
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    // `autofocus` is ignored for nodes inserted after load; focus explicitly
    // so Escape reaches `on:keydown` without a click first.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.focus();
        }
    });

    let close = move || carousel.update(CarouselState::close_detail);
    let on_backdrop = move |_| close();
    let on_close_click = move |_| close();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            close();
        }
    };

    view! {
        <div class="detail-modal__backdrop" on:click=on_backdrop>
            <div
                class="detail-modal"
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="detail-modal__media">
                    <SlideImage image=image class="detail-modal__image"/>
                    <button type="button" class="detail-modal__close" aria-label="Cerrar" on:click=on_close_click>
                        "✕"
                    </button>
                </div>
                <div class="detail-modal__body">
                    <h3 class="detail-modal__title">{move || current.with(|s| s.title.clone())}</h3>
                    <p class="detail-modal__description">{move || current.with(|s| s.description.clone())}</p>
                </div>
            </div>
        </div>
    }
}

fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}
