//! Tile map assets.
//!
//! Maps are not wrapped in a compression container. The raw file carries the
//! dimensions at fixed offsets and a tile-run stream of cells after them:
//!
//! | Offset  | Size | Field                          |
//! |---------|------|--------------------------------|
//! | `0x17`  | 2    | width in cells (u16)           |
//! | `0x19`  | 2    | height in cells (u16)          |
//! | `0x1B`  | ..   | tile-run compressed cell words |
//!
//! Each cell word holds a tile reference in its low 14 bits; the top two bits are
//! orientation / marker flags that only the renderer interprets.

use std::{fmt, io::Read, path::Path};

use log::{debug, warn};

use crate::file::{
	AssetError, DecodeOptions, FileType, TileFlags, TileSet, UnderrunPolicy, bytes,
	codec::tile_run,
	layout::map::{CELLS_OFFSET, HEIGHT_OFFSET, MARKER_MASK, TILE_REF_MASK, WIDTH_OFFSET},
};

/// A map cell resolved against a tileset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapCell {
	/// Raw cell word
	pub raw: u16,
	/// Tile reference into the tileset remap table (`raw & 0x3FFF`)
	pub tile_ref: u16,
	/// Orientation / marker bits (`raw & 0xC000`)
	pub marker_bits: u16,
	/// Bank position the reference resolved to
	pub bank_index: usize,
	/// Flags of the resolved bank tile
	pub flags: TileFlags,
}

impl MapCell {
	/// Whether the resolved tile is marked solid.
	#[inline]
	pub fn is_solid(&self) -> bool {
		self.flags.is_solid()
	}
}

/// Splits a cell word into its tile reference and marker bits.
#[inline]
pub const fn split_cell(raw: u16) -> (u16, u16) {
	(raw & TILE_REF_MASK, raw & MARKER_MASK)
}

/// A decoded tile map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
	width: u16,
	height: u16,
	cells: Vec<u16>,
}

impl TileMap {
	/// Opens and decodes a map from `path`.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, AssetError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data)
	}

	/// Decodes a map from any reader.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, AssetError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	/// Decodes a raw map file with default options.
	pub fn from_bytes(raw: &[u8]) -> Result<Self, AssetError> {
		Self::from_bytes_with(raw, &DecodeOptions::default())
	}

	/// Decodes a raw map file.
	///
	/// Cells beyond `width * height` are dropped. A stream with fewer cells is
	/// handled according to `options.map_underrun`.
	///
	/// # Errors
	///
	/// - [`AssetError::InsufficientData`] if the dimensions are missing
	/// - [`AssetError::Truncated`] if the cell stream ends mid-token
	/// - [`AssetError::MapUnderrun`] for short streams under [`UnderrunPolicy::Reject`]
	pub fn from_bytes_with(raw: &[u8], options: &DecodeOptions) -> Result<Self, AssetError> {
		let width = bytes::read_u16_be(raw, WIDTH_OFFSET, FileType::Map)?;
		let height = bytes::read_u16_be(raw, HEIGHT_OFFSET, FileType::Map)?;
		let expected = usize::from(width) * usize::from(height);

		let mut cells = tile_run::decode(&raw[CELLS_OFFSET..])?;

		if cells.len() > expected {
			warn!("Map stream has {} cells, keeping {}", cells.len(), expected);
			cells.truncate(expected);
		} else if cells.len() < expected {
			match options.map_underrun {
				UnderrunPolicy::Reject => {
					return Err(AssetError::MapUnderrun {
						expected,
						actual: cells.len(),
					});
				}
				UnderrunPolicy::Pad => {
					warn!(
						"Map stream has {} of {} cells, padding with tile 0",
						cells.len(),
						expected
					);
					cells.resize(expected, 0);
				}
			}
		}

		debug!("Decoded map: {}x{} cells", width, height);

		Ok(Self {
			width,
			height,
			cells,
		})
	}

	/// Returns the width in cells.
	pub fn width(&self) -> u16 {
		self.width
	}

	/// Returns the height in cells.
	pub fn height(&self) -> u16 {
		self.height
	}

	/// Returns all cell words in row-major order.
	pub fn cells(&self) -> &[u16] {
		&self.cells
	}

	/// Returns the raw cell word at `(x, y)`.
	pub fn cell(&self, x: u16, y: u16) -> Option<u16> {
		if x >= self.width || y >= self.height {
			return None;
		}
		self.cells.get(usize::from(y) * usize::from(self.width) + usize::from(x)).copied()
	}

	/// Resolves the cell at `(x, y)` against `tileset`.
	///
	/// Out-of-range tile references follow the tileset's fallback to bank tile 0.
	pub fn resolve(&self, tileset: &TileSet, x: u16, y: u16) -> Option<MapCell> {
		let raw = self.cell(x, y)?;
		let (tile_ref, marker_bits) = split_cell(raw);
		let bank_index = tileset.bank_index(usize::from(tile_ref));
		let flags = tileset.bank_flags_or_default(bank_index);

		Some(MapCell {
			raw,
			tile_ref,
			marker_bits,
			bank_index,
			flags,
		})
	}

	/// Iterates over `(x, y, raw)` for every cell in row-major order.
	pub fn iter_cells(&self) -> impl Iterator<Item = (u16, u16, u16)> + '_ {
		let width = usize::from(self.width.max(1));
		self.cells
			.iter()
			.enumerate()
			.map(move |(i, &raw)| ((i % width) as u16, (i / width) as u16, raw))
	}
}

impl fmt::Display for TileMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Tile Map: {}x{} cells", self.width, self.height)
	}
}
