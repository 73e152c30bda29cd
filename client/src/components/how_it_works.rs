//! Four-step video walkthrough with a closing call to action.

use leptos::prelude::*;

use crate::content::{APP_URL, MediaSide, STEPS, Step};

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <div class="how-it-works__inner">
                <h2 class="section-title section-title--lg reveal">"¿Cómo funciona PRO&PRO?"</h2>
                <div class="how-it-works__steps">
                    {STEPS.iter().map(|step| view! { <StepCard step=*step/> }).collect_view()}
                </div>
                <div class="how-it-works__cta reveal">
                    <a href=APP_URL target="_blank" rel="noopener noreferrer" class="btn btn--primary btn--lg">
                        "Comenzar ahora"
                    </a>
                </div>
            </div>
        </section>
    }
}

/// One walkthrough row: looping muted video next to the step text.
#[component]
pub fn StepCard(step: Step) -> impl IntoView {
    view! {
        <div class=step_class(step.media_side)>
            <div class="step__media">
                <video
                    class="step__video"
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                    controls=true
                    preload="metadata"
                >
                    <source src=step.video_src type="video/mp4"/>
                    "Tu navegador no soporta video HTML5."
                </video>
            </div>
            <div class="step__text">
                <h3 class="step__title">{format!("{}. {}", step.number, step.title)}</h3>
                <p class="step__body">{step.body}</p>
            </div>
        </div>
    }
}

fn step_class(side: MediaSide) -> &'static str {
    match side {
        MediaSide::Left => "step slide-in slide-in--left",
        MediaSide::Right => "step step--media-right slide-in slide-in--right",
    }
}
