//! Prelude module for `ppete_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use ppete_internal::prelude::*;
//!
//! let palette = Palette::grayscale();
//! let sink = RgbaBuffer::new(32, 32);
//! assert_eq!(sink.width(), 32);
//! ```

// Re-export everything from ppete_types::prelude
#[doc(inline)]
pub use ppete_types::prelude::*;

// Re-export the entire ppete_types module for advanced usage
#[doc(inline)]
pub use ppete_types;
