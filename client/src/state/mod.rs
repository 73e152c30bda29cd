//! Client-side state for the landing page.
//!
//! DESIGN
//! ======
//! Each stateful widget gets one focused model (`carousel`, `image`, `theme`)
//! with no browser types, so components stay thin and the models run under
//! host tests.

pub mod carousel;
pub mod image;
pub mod theme;
