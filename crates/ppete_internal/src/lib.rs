//! This module is separated into its own crate to keep the public facade of
//! `powerpete-rs` thin, and should not be used directly.

/// `use powerpete_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export ppete_types for convenience
pub use ppete_types;

// Re-export the asset types at crate root
pub use ppete_types::file::{
	AssetError, Color, DecodeOptions, Palette, PaletteImage, TileMap, TileSet,
};
