//! Hero banner over the blurred map background.

use leptos::prelude::*;

use crate::components::background_image::BackgroundImage;
use crate::content::{APP_URL, HERO_BACKGROUND};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="top" class="hero">
            <BackgroundImage src=HERO_BACKGROUND alt="Mapa PRO&PRO" blur=true>
                <div class="hero__content">
                    <span class="hero__badge reveal">"Propósito Profesional"</span>
                    <h2 class="hero__title reveal">
                        "Tú guía"
                        <span class="hero__title-accent">" de exploración vocacional"</span>
                    </h2>
                    <p class="hero__subtitle reveal">"UNLP"</p>
                    <a href=APP_URL target="_blank" rel="noopener noreferrer" class="btn btn--primary btn--lg reveal">
                        "¡Comenzar aventura! \u{2192}"
                    </a>
                </div>
            </BackgroundImage>
        </section>
    }
}
