//! The PRO&PRO landing page.

use leptos::prelude::*;

use crate::components::audience::Audience;
use crate::components::detail_modal::DetailModal;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::how_it_works::HowItWorks;
use crate::components::store::Store;
use crate::state::carousel::CarouselState;

/// Full page: header, sections in reading order, footer, and the store's
/// detail overlay while it is open.
#[component]
pub fn LandingPage() -> impl IntoView {
    let carousel = expect_context::<RwSignal<CarouselState>>();
    let modal_open = move || carousel.with(CarouselState::is_modal_open);

    view! {
        <Header/>
        <main class="landing">
            <Hero/>
            <Audience/>
            <HowItWorks/>
            <Store/>
            <Show when=modal_open>
                <DetailModal/>
            </Show>
            <Footer/>
        </main>
    }
}
