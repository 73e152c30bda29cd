//! Browser timer binding for carousel autoplay.
//!
//! ARCHITECTURE
//! ============
//! `CarouselState` decides *when* the interval must restart (its autoplay key
//! changes); this module owns the single live `Interval` and swaps it out on
//! every key change. Dropping a `gloo_timers` interval clears it, so there is
//! never more than one timer per mounted carousel.

use leptos::prelude::*;

use crate::state::carousel::CarouselState;

/// Drive `carousel` autoplay from a browser interval for the current owner.
///
/// The interval is recreated whenever the carousel's timer generation or
/// play/pause mode changes, and is dead once the owner is cleaned up.
/// Outside `hydrate` this does nothing.
pub fn bind_autoplay(carousel: RwSignal<CarouselState>) {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use gloo_timers::callback::Interval;

        use crate::state::carousel::AUTOPLAY_INTERVAL_MS;

        let alive = Arc::new(AtomicBool::new(true));
        let timer = Rc::new(RefCell::new(None::<Interval>));
        let autoplay_key = Memo::new(move |_| carousel.with(CarouselState::autoplay_key));
        let period_ms = u32::try_from(AUTOPLAY_INTERVAL_MS).unwrap_or(u32::MAX);

        {
            let alive = Arc::clone(&alive);
            Effect::new(move || {
                let (generation, playing) = autoplay_key.get();
                // Cancel whatever was running before deciding on a new one.
                timer.borrow_mut().take();
                if !playing {
                    leptos::logging::log!("carousel autoplay paused (generation {generation})");
                    return;
                }
                let alive = Arc::clone(&alive);
                let tick = Interval::new(period_ms, move || {
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    carousel.update(|c| {
                        c.autoplay_tick();
                    });
                });
                *timer.borrow_mut() = Some(tick);
            });
        }

        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = carousel;
    }
}
