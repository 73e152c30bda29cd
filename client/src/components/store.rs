//! Merchandise store section hosting the carousel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the shared `RwSignal<CarouselState>` and maps touch, click, and
//! indicator input onto its operations. Autoplay is bound to this component's
//! lifetime, so unmounting the store cancels the timer.

use leptos::prelude::*;

use crate::components::slide_image::SlideImage;
use crate::state::carousel::CarouselState;
use crate::util::autoplay::bind_autoplay;

#[component]
pub fn Store() -> impl IntoView {
    let carousel = expect_context::<RwSignal<CarouselState>>();
    bind_autoplay(carousel);

    let current = Memo::new(move |_| carousel.with(|c| c.current_slide().clone()));
    let image = Memo::new(move |_| current.with(|s| s.image.clone()));
    let slide_count = carousel.with_untracked(|c| c.slides().len());

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        if let Some(x) = first_touch_x(&ev, false) {
            carousel.update(|c| c.gesture_start(x));
        }
    };
    let on_touch_end = move |ev: leptos::ev::TouchEvent| {
        if let Some(x) = first_touch_x(&ev, true) {
            carousel.update(|c| {
                c.gesture_end(x);
            });
        }
    };
    let on_open = move |_| carousel.update(CarouselState::open_detail);
    let on_prev = move |_| carousel.update(CarouselState::previous);
    let on_next = move |_| carousel.update(CarouselState::next);

    view! {
        <section id="tienda" class="store">
            <div class="store__inner">
                <div class="store__intro reveal">
                    <h2 class="section-title section-title--lg">"Tienda PRO&PRO"</h2>
                    <p class="store__lead">
                        "Merchandising para acompañar la experiencia PRO&PRO en eventos, escuelas y espacios de orientación."
                    </p>
                </div>

                <div class="carousel">
                    <div class="carousel__card" on:touchstart=on_touch_start on:touchend=on_touch_end>
                        <button type="button" class="carousel__image-button" on:click=on_open>
                            <SlideImage image=image class="carousel__image"/>
                        </button>
                        <span class="carousel__tag">{move || current.with(|s| s.tag.clone())}</span>
                        <p class="carousel__title">{move || current.with(|s| s.title.clone())}</p>
                    </div>

                    <div class="carousel__indicators">
                        {(0..slide_count)
                            .map(|index| {
                                let is_active = move || carousel.with(|c| c.current_index() == index);
                                view! {
                                    <button
                                        type="button"
                                        class=move || indicator_class(is_active())
                                        aria-label=format!("Ir al producto {}", index + 1)
                                        on:click=move |_| {
                                            carousel.update(|c| {
                                                if let Err(e) = c.go_to(index) {
                                                    leptos::logging::warn!("carousel indicator ignored: {e}");
                                                }
                                            });
                                        }
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="carousel__arrows">
                        <button type="button" class="carousel__arrow" aria-label="Anterior" on:click=on_prev>
                            "\u{2039}"
                        </button>
                        <button type="button" class="carousel__arrow" aria-label="Siguiente" on:click=on_next>
                            "\u{203a}"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn indicator_class(active: bool) -> &'static str {
    if active { "carousel__dot carousel__dot--active" } else { "carousel__dot" }
}

/// Horizontal client coordinate of the first touch point.
///
/// `touchend` carries its lifted points in `changedTouches`; `touchstart`
/// reads `touches`.
fn first_touch_x(ev: &leptos::ev::TouchEvent, changed: bool) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        let list = if changed { ev.changed_touches() } else { ev.touches() };
        list.get(0).map(|touch| f64::from(touch.client_x()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ev, changed);
        None
    }
}
