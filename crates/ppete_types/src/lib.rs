//! This crate provides the asset decoders for the `powerpete-rs` project.
//!
//! # Asset Formats
//!
//! - **Container**: 8-byte header selecting one of two run-length codecs
//! - **Palette image**: 256-colour packed palette plus an indexed pixel plane
//! - **Tileset**: bank of 32×32 indexed tiles, a remap table and per-tile flags
//! - **Tile map**: grid of tile references stored as a word-oriented run-length stream
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use ppete_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let image = PaletteImage::open("LEVEL1.IMG")?;
//! let tileset = TileSet::open("LEVEL1.TILES", image.palette().clone())?;
//! let map = TileMap::open("LEVEL1.MAP")?;
//!
//! if let Some(cell) = map.resolve(&tileset, 4, 7) {
//!     println!("tile {} solid: {}", cell.tile_ref, cell.is_solid());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use ppete_types::file::codec::byte_run;
//!
//! let bytes = byte_run::decode(&[0xFD, 0x11]).unwrap();
//! assert_eq!(bytes, [0x11; 4]);
//! ```

pub mod file;

/// `use ppete_types::prelude::*;` to import commonly used items.
pub mod prelude;
