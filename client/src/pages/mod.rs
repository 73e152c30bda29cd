//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; `landing` owns section order and the modal
//! overlay and delegates rendering details to `components`.

pub mod landing;
