//! Asset format support for `powerpete-rs`.
//!
//! Data flows `raw bytes → container → codec → parser`:
//!
//! - [`container`] unpacks images and tilesets with one of the [`codec`]s
//! - [`PaletteImage`], [`TileSet`] and [`TileMap`] read their fields from
//!   the offsets in [`layout`]
//!
//! Decoded assets are immutable and `Send + Sync`, so independent assets may be
//! decoded and shared across threads freely.

mod bytes;
mod error;

pub mod buffer;
pub mod codec;
pub mod container;
pub mod image;
pub mod layout;
pub mod map;
pub mod options;
pub mod palette;
pub mod tileset;

// Re-export unified error types
pub use error::{AssetError, FileType, RunLengthError};

// Re-export main asset types
pub use buffer::{IndexedBuffer, PixelSink, RgbaBuffer, RowIterator};
pub use container::{Compression, Header as ContainerHeader};
pub use image::PaletteImage;
pub use map::{MapCell, TileMap};
pub use options::{DecodeOptions, PaletteMode, UnderrunPolicy};
pub use palette::{Color, Palette};
pub use tileset::{Tile, TileFlags, TileSet, TileView};
