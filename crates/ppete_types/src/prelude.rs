//! Prelude module for `ppete_types`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```no_run
//! use ppete_types::prelude::*;
//!
//! let palette = Palette::grayscale();
//! let options = DecodeOptions::new().with_palette_mode(PaletteMode::Wide);
//! ```

#[doc(inline)]
pub use crate::file::{
	AssetError,
	Color,
	ContainerHeader,
	DecodeOptions,
	FileType,
	IndexedBuffer,
	MapCell,
	Palette,
	PaletteImage,
	PaletteMode,
	PixelSink,
	RgbaBuffer,
	Tile,
	TileFlags,
	TileMap,
	TileSet,
	TileView,
	UnderrunPolicy,
};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
