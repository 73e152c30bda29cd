//! Sticky page header: wordmark, section anchors, and theme toggle.

use leptos::prelude::*;

use crate::content::NAV_LINKS;
use crate::state::theme::ThemePreference;
use crate::util::dark_mode::BrowserThemeEnvironment;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a href="#top" class="site-header__brand">
                    <h1 class="wordmark">
                        <span>"PRO"</span>
                        <span class="wordmark__amp">"&"</span>
                        <span>"PRO"</span>
                    </h1>
                </a>
                <nav class="site-header__nav">
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| view! { <a href=*href class="site-header__link">{*label}</a> })
                        .collect_view()}
                </nav>
                <ThemeToggle/>
            </div>
        </header>
    }
}

/// Button flipping the page theme through the shared `ThemePreference`.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemePreference>>();
    let is_dark = move || theme.with(ThemePreference::is_dark);

    let on_toggle = move |_| {
        theme.update(|t| {
            t.toggle(&BrowserThemeEnvironment);
        });
    };

    view! {
        <button
            class="theme-toggle"
            on:click=on_toggle
            title=move || toggle_title(is_dark())
        >
            <span class="theme-toggle__icon" aria-hidden="true">{move || toggle_icon(is_dark())}</span>
            {move || toggle_label(is_dark())}
        </button>
    }
}

fn toggle_title(dark: bool) -> &'static str {
    if dark { "Cambiar a claro" } else { "Cambiar a oscuro" }
}

fn toggle_icon(dark: bool) -> &'static str {
    if dark { "\u{2600}" } else { "\u{263e}" }
}

fn toggle_label(dark: bool) -> &'static str {
    if dark { "Claro" } else { "Oscuro" }
}
