//! Load tracking for images that may be missing on the server.
//!
//! DESIGN
//! ======
//! One `ImageLoader` per rendered `<img>`. The browser reports `load` and
//! `error`; the loader decides which source to show next. A fallback is tried
//! at most once, after which the image is `Failed` and the component shows a
//! styled placeholder instead.
//!
//! Server-rendered images can settle before hydration attaches listeners, so
//! `reconcile` replays the outcome from the element's `complete` and
//! `naturalWidth` properties.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use crate::state::carousel::ImageHandle;

/// Load status of the current image source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// Tracks which source is displayed and whether it loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageLoader {
    primary_src: String,
    fallback_src: Option<String>,
    current_src: String,
    status: ImageStatus,
}

impl ImageLoader {
    #[must_use]
    pub fn new(src: impl Into<String>, fallback_src: Option<String>) -> Self {
        let src = src.into();
        Self { primary_src: src.clone(), fallback_src, current_src: src, status: ImageStatus::Loading }
    }

    #[must_use]
    pub fn current_src(&self) -> &str {
        &self.current_src
    }

    #[must_use]
    pub fn status(&self) -> ImageStatus {
        self.status
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status == ImageStatus::Failed
    }

    pub fn on_load(&mut self) {
        self.status = ImageStatus::Loaded;
    }

    /// Switch to the fallback once; a second failure is terminal.
    pub fn on_error(&mut self) {
        match self.fallback_src.take() {
            Some(fallback) if fallback != self.current_src => {
                self.current_src = fallback;
                self.status = ImageStatus::Loading;
            }
            _ => self.status = ImageStatus::Failed,
        }
    }

    /// Apply an outcome the element reached before listeners were attached.
    ///
    /// Only acts while `Loading` on an element that reports `complete`: a
    /// non-zero natural width means it loaded, zero means it failed.
    pub fn reconcile(&mut self, complete: bool, natural_width: u32) {
        if self.status != ImageStatus::Loading || !complete {
            return;
        }
        if natural_width > 0 {
            self.on_load();
        } else {
            self.on_error();
        }
    }

    /// Point the loader at a new image, restarting from its primary source.
    ///
    /// Re-targeting the image already tracked keeps the current state, so a
    /// fallback swap is not undone by an unrelated re-render.
    pub fn retarget(&mut self, image: &ImageHandle) {
        if image.src != self.primary_src {
            *self = Self::from(image);
        }
    }
}

impl From<&ImageHandle> for ImageLoader {
    fn from(image: &ImageHandle) -> Self {
        Self::new(image.src.clone(), image.fallback_src.clone())
    }
}
