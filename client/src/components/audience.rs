//! "Who is PRO&PRO for" section.

use leptos::prelude::*;

use crate::content::AUDIENCE;

#[component]
pub fn Audience() -> impl IntoView {
    view! {
        <section class="audience">
            <div class="audience__inner">
                <h2 class="section-title reveal">"¿Para quién pensamos PRO&PRO?"</h2>
                <div class="audience__grid reveal">
                    {AUDIENCE
                        .iter()
                        .map(|(icon, text)| {
                            view! {
                                <p class="audience__item">
                                    <span aria-hidden="true">{*icon}</span>
                                    " "
                                    {*text}
                                </p>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
