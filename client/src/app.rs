//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};

use crate::content::merch_slides;
use crate::pages::landing::LandingPage;
use crate::state::carousel::CarouselState;
use crate::state::theme::ThemePreference;
use crate::util::dark_mode::BrowserThemeEnvironment;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme and carousel state as context. The theme starts light
/// (what the server renders) and is resolved from the browser once, right
/// after hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemePreference::default());
    let carousel = RwSignal::new(CarouselState::new(merch_slides()));

    provide_context(theme);
    provide_context(carousel);

    // Reads no signals, so this runs exactly once per page load.
    Effect::new(move || {
        let resolved = ThemePreference::initialize(&BrowserThemeEnvironment);
        leptos::logging::log!("theme initialized: {}", resolved.mode());
        theme.set(resolved);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/propro.css"/>
        <Title text="PRO&PRO | Tu guía de exploración vocacional"/>
        <Meta name="description" content="PRO&PRO: exploración vocacional interactiva de la UNLP."/>
        <LandingPage/>
    }
}
