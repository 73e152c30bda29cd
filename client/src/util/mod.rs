//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, media
//! queries, timers, clocks) from component logic to improve reuse and
//! testability.

pub mod autoplay;
pub mod calendar;
pub mod dark_mode;
