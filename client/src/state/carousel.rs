//! Merchandise carousel state machine.
//!
//! DESIGN
//! ======
//! The carousel is an explicit two-state machine (`Playing` / `Paused`) over
//! an immutable slide collection. Timers never write the index directly: they
//! feed elapsed time through `advance_time`, and every event that must restart
//! the autoplay interval bumps `timer_generation` so the browser binding can
//! drop its `Interval` and start a fresh one.
//!
//! Nothing here touches browser APIs, so the whole protocol is exercised by
//! host tests.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::sync::Arc;

/// Autoplay period in milliseconds.
pub const AUTOPLAY_INTERVAL_MS: u64 = 8000;

/// Minimum horizontal travel, in CSS pixels, for a touch drag to navigate.
pub const SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("slide collection must contain at least one slide")]
    EmptyCollection,
    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Image reference for a slide, with an optional fallback source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageHandle {
    pub src: String,
    pub alt: String,
    pub fallback_src: Option<String>,
}

/// One merchandise item shown by the carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub tag: String,
    pub description: String,
    pub image: ImageHandle,
}

/// Non-empty, immutable, cheaply clonable slide sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideCollection {
    slides: Arc<[Slide]>,
}

impl SlideCollection {
    /// Build a collection from a list that must contain at least one slide.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::EmptyCollection`] for an empty list.
    pub fn new(slides: Vec<Slide>) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::EmptyCollection);
        }
        Ok(Self { slides: slides.into() })
    }

    /// Build a collection whose non-emptiness is guaranteed by construction.
    pub fn with_first(first: Slide, rest: impl IntoIterator<Item = Slide>) -> Self {
        let slides: Vec<Slide> = std::iter::once(first).chain(rest).collect();
        Self { slides: slides.into() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: a collection is non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

/// Whether autoplay is running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AutoplayMode {
    /// Detail view closed, interval running.
    #[default]
    Playing,
    /// Detail view open, interval cancelled.
    Paused,
}

/// Which way a completed swipe moved the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// Classify a horizontal drag from `start_x` to `end_x`.
///
/// Dragging right-to-left (finger moves toward smaller x) advances.
#[must_use]
pub fn classify_swipe(start_x: f64, end_x: f64) -> Option<SwipeDirection> {
    let delta = start_x - end_x;
    if delta > SWIPE_THRESHOLD {
        Some(SwipeDirection::Next)
    } else if delta < -SWIPE_THRESHOLD {
        Some(SwipeDirection::Previous)
    } else {
        None
    }
}

/// Carousel state: current slide, modal visibility, and autoplay bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    slides: SlideCollection,
    current_index: usize,
    mode: AutoplayMode,
    gesture_start_x: Option<f64>,
    /// Milliseconds accumulated toward the next autoplay advance.
    elapsed_ms: u64,
    timer_generation: u64,
}

impl CarouselState {
    #[must_use]
    pub fn new(slides: SlideCollection) -> Self {
        Self {
            slides,
            current_index: 0,
            mode: AutoplayMode::Playing,
            gesture_start_x: None,
            elapsed_ms: 0,
            timer_generation: 0,
        }
    }

    #[must_use]
    pub fn slides(&self) -> &SlideCollection {
        &self.slides
    }

    fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_slide(&self) -> &Slide {
        &self.slides.slides[self.current_index]
    }

    #[must_use]
    pub fn mode(&self) -> AutoplayMode {
        self.mode
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.mode == AutoplayMode::Paused
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.mode == AutoplayMode::Playing
    }

    /// Identity of the interval the browser timer should be running.
    ///
    /// Changes exactly when the interval must be cancelled and recreated.
    #[must_use]
    pub fn autoplay_key(&self) -> (u64, bool) {
        (self.timer_generation, self.is_playing())
    }

    /// Advance one slide, wrapping at the end.
    pub fn next(&mut self) {
        self.step_forward();
        self.restart_timer();
    }

    /// Go back one slide, wrapping at the start.
    pub fn previous(&mut self) {
        self.current_index = if self.current_index == 0 {
            self.len() - 1
        } else {
            self.current_index - 1
        };
        self.restart_timer();
    }

    /// Jump directly to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::IndexOutOfRange`] and leaves the state
    /// untouched when `index >= len`.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        let len = self.len();
        if index >= len {
            return Err(CarouselError::IndexOutOfRange { index, len });
        }
        self.current_index = index;
        self.restart_timer();
        Ok(())
    }

    /// Open the detail view and suspend autoplay.
    pub fn open_detail(&mut self) {
        if self.mode == AutoplayMode::Paused {
            return;
        }
        self.mode = AutoplayMode::Paused;
        self.restart_timer();
    }

    /// Close the detail view and resume autoplay from a fresh interval.
    pub fn close_detail(&mut self) {
        if self.mode == AutoplayMode::Playing {
            return;
        }
        self.mode = AutoplayMode::Playing;
        self.restart_timer();
    }

    pub fn gesture_start(&mut self, x: f64) {
        self.gesture_start_x = Some(x);
    }

    /// Finish a drag at `x`, navigating when it crossed the swipe threshold.
    ///
    /// The recorded start is consumed; an end without a start is ignored.
    pub fn gesture_end(&mut self, x: f64) -> Option<SwipeDirection> {
        let start_x = self.gesture_start_x.take()?;
        let direction = classify_swipe(start_x, x)?;
        match direction {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Previous => self.previous(),
        }
        Some(direction)
    }

    /// Feed `ms` of wall-clock time into the autoplay clock.
    ///
    /// Returns how many slides autoplay advanced. Time spent paused is
    /// discarded.
    pub fn advance_time(&mut self, ms: u64) -> u64 {
        if self.mode == AutoplayMode::Paused {
            return 0;
        }
        let total = self.elapsed_ms.saturating_add(ms);
        let advanced = total / AUTOPLAY_INTERVAL_MS;
        self.elapsed_ms = total % AUTOPLAY_INTERVAL_MS;
        let len = self.len() as u64;
        // The result is below len, so it always fits back into usize.
        #[allow(clippy::cast_possible_truncation)]
        let next_index = ((self.current_index as u64 + advanced % len) % len) as usize;
        self.current_index = next_index;
        advanced
    }

    /// One firing of the browser interval.
    pub fn autoplay_tick(&mut self) -> u64 {
        self.advance_time(AUTOPLAY_INTERVAL_MS)
    }

    fn step_forward(&mut self) {
        self.current_index = (self.current_index + 1) % self.len();
    }

    fn restart_timer(&mut self) {
        self.elapsed_ms = 0;
        self.timer_generation = self.timer_generation.wrapping_add(1);
    }
}
