//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing page sections while reading/writing shared
//! state (`CarouselState`, `ThemePreference`) from Leptos context providers.

pub mod audience;
pub mod background_image;
pub mod detail_modal;
pub mod footer;
pub mod header;
pub mod hero;
pub mod how_it_works;
pub mod slide_image;
pub mod store;
