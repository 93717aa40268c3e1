//! Tileset assets.
//!
//! A tileset is a bank of 32×32 indexed tiles plus two tables: a remap table
//! translating the tile references used by maps into bank positions, and a flag
//! table holding two 32-bit words per bank tile. Tiles carry no palette of their
//! own; the caller supplies one (usually taken from a [`PaletteImage`]) when the
//! tileset is loaded.
//!
//! ## Layout (after container unpacking)
//!
//! | Offset            | Size        | Field                                 |
//! |-------------------|-------------|---------------------------------------|
//! | `0x26`            | 2           | filename count `N`                    |
//! | `0x28`            | N × 256     | filename records (Pascal strings)     |
//! | `0x28 + N*256`    | 2           | tile count `T`                        |
//! | `+2`              | T × 1024    | tile bank                             |
//! | after bank        | 2 + R × 2   | remap count `R`, then u16 entries     |
//! | after remap       | 2 + F × 8   | flag count `F`, then (u32, u32) pairs |
//!
//! ## Lookup fallback
//!
//! [`TileSet::get_tile`] never fails: a reference outside the remap table, or a
//! remap entry pointing past the bank, resolves to bank tile 0 and logs a warning.
//! Maps routinely contain references the tables do not cover.
//!
//! [`PaletteImage`]: crate::file::PaletteImage

use std::{fmt, io::Read, path::Path, sync::Arc};

use log::{debug, warn};

use crate::file::{
	AssetError, Color, FileType, IndexedBuffer, Palette, PixelSink, bytes, container,
	layout::{
		flags::SOLID_MASK,
		tile,
		tileset::{self, FILENAME_COUNT_OFFSET, FILENAME_RECORD_SIZE, FLAG_ENTRY_SIZE},
	},
};

/// A single 32×32 tile of palette indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
	pixels: IndexedBuffer,
}

impl Tile {
	/// Width and height in pixels
	pub const DIMENSION: u16 = tile::DIMENSION;

	/// Number of indexed pixels in a tile
	pub const SIZE: usize = tile::SIZE;

	/// Builds a tile from exactly [`Tile::SIZE`] palette indices.
	pub fn from_indices(indices: &[u8]) -> Result<Self, AssetError> {
		let pixels = IndexedBuffer::new(Self::DIMENSION, Self::DIMENSION, indices.to_vec())?;
		Ok(Self {
			pixels,
		})
	}

	/// Returns the indexed pixels.
	pub fn pixels(&self) -> &IndexedBuffer {
		&self.pixels
	}

	/// Returns the palette index at `(x, y)`.
	pub fn get(&self, x: u16, y: u16) -> Option<u8> {
		self.pixels.get(x, y)
	}
}

/// The pair of flag words stored for each bank tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TileFlags {
	/// First flag word
	pub primary: u32,
	/// Second flag word
	pub secondary: u32,
}

impl TileFlags {
	/// Creates a flag pair.
	pub const fn new(primary: u32, secondary: u32) -> Self {
		Self {
			primary,
			secondary,
		}
	}

	/// Whether any of the "solid" bits (`0xF0000`) of the primary word is set.
	///
	/// This reading comes from observed rendering, not from a format description.
	#[inline]
	pub const fn is_solid(&self) -> bool {
		self.primary & SOLID_MASK != 0
	}
}

impl fmt::Display for TileFlags {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:#010X}, {:#010X}", self.primary, self.secondary)
	}
}

/// A tile resolved through a tileset, paired with the palette it renders with.
#[derive(Debug, Clone, Copy)]
pub struct TileView<'a> {
	tile: &'a Tile,
	palette: &'a Palette,
	bank_index: usize,
}

impl<'a> TileView<'a> {
	/// Returns the tile.
	pub fn tile(&self) -> &'a Tile {
		self.tile
	}

	/// Returns the palette shared by the tileset.
	pub fn palette(&self) -> &'a Palette {
		self.palette
	}

	/// Returns the position of the tile in the bank.
	pub fn bank_index(&self) -> usize {
		self.bank_index
	}

	/// Returns the 1024 palette indices of the tile.
	pub fn indices(&self) -> &'a [u8] {
		self.tile.pixels.pixels()
	}

	/// Returns the colour at `(x, y)` within the tile.
	pub fn color_at(&self, x: u16, y: u16) -> Option<Color> {
		self.tile.pixels.color_at(x, y, self.palette)
	}

	/// Draws the tile into `sink` at `(x, y)`.
	pub fn blit<S: PixelSink + ?Sized>(&self, sink: &mut S, x: u32, y: u32) {
		self.tile.pixels.blit(self.palette, sink, x, y);
	}
}

/// A decoded tileset.
#[derive(Debug, Clone)]
pub struct TileSet {
	header: container::Header,
	filenames: Vec<String>,
	tiles: Vec<Tile>,
	remap: Vec<u16>,
	flags: Vec<TileFlags>,
	palette: Arc<Palette>,
}

impl TileSet {
	/// Opens and decodes a tileset asset from `path`.
	pub fn open(
		path: impl AsRef<Path>,
		palette: impl Into<Arc<Palette>>,
	) -> Result<Self, AssetError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data, palette)
	}

	/// Decodes a tileset asset from any reader.
	pub fn from_reader<R: Read>(
		reader: &mut R,
		palette: impl Into<Arc<Palette>>,
	) -> Result<Self, AssetError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data, palette)
	}

	/// Decodes a raw (still packed) tileset asset.
	///
	/// # Errors
	///
	/// - Container errors from [`container::unpack`]
	/// - [`AssetError::InsufficientData`] if any count or table runs past the data
	/// - [`AssetError::EmptyTileBank`] if the tileset declares no tiles
	pub fn from_bytes(raw: &[u8], palette: impl Into<Arc<Palette>>) -> Result<Self, AssetError> {
		let (header, data) = container::unpack_with_header(raw)?;

		let filename_count = bytes::read_u16_be(&data, FILENAME_COUNT_OFFSET, FileType::TileSet)?;
		let filenames = read_filenames(&data, filename_count)?;

		let mut offset = tileset::tile_count_offset(filename_count);
		let tile_count = usize::from(bytes::read_u16_be(&data, offset, FileType::TileSet)?);
		offset += 2;

		if tile_count == 0 {
			return Err(AssetError::EmptyTileBank);
		}

		let bank = bytes::slice(&data, offset, tile_count * Tile::SIZE, FileType::TileSet)?;
		let tiles = bank
			.chunks_exact(Tile::SIZE)
			.map(Tile::from_indices)
			.collect::<Result<Vec<_>, _>>()?;
		offset += bank.len();

		let (remap, offset) = read_remap_table(&data, offset)?;
		let (flags, _) = read_flag_table(&data, offset)?;

		if flags.len() != tiles.len() {
			warn!(
				"Tileset flag table has {} entries for {} tiles",
				flags.len(),
				tiles.len()
			);
		}

		debug!(
			"Decoded tileset: {} filenames, {} tiles, {} remap entries, {} flag entries",
			filenames.len(),
			tiles.len(),
			remap.len(),
			flags.len()
		);

		Ok(Self {
			header,
			filenames,
			tiles,
			remap,
			flags,
			palette: palette.into(),
		})
	}

	/// Returns the container header.
	pub fn header(&self) -> &container::Header {
		&self.header
	}

	/// Returns the filenames recorded in the tileset header.
	pub fn filenames(&self) -> &[String] {
		&self.filenames
	}

	/// Returns the tile bank.
	pub fn tiles(&self) -> &[Tile] {
		&self.tiles
	}

	/// Returns the remap table.
	pub fn remap(&self) -> &[u16] {
		&self.remap
	}

	/// Returns the flag table, parallel to the tile bank.
	pub fn flags(&self) -> &[TileFlags] {
		&self.flags
	}

	/// Returns the palette tiles render with.
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Returns a shared handle to the palette.
	pub fn shared_palette(&self) -> Arc<Palette> {
		Arc::clone(&self.palette)
	}

	/// Resolves a tile reference to a bank position.
	///
	/// References outside the remap table, and remap entries outside the bank,
	/// resolve to 0 with a warning.
	pub fn bank_index(&self, tile_ref: usize) -> usize {
		match self.remap.get(tile_ref) {
			Some(&bank_index) if usize::from(bank_index) < self.tiles.len() => {
				usize::from(bank_index)
			}
			Some(&bank_index) => {
				warn!(
					"Remap entry {} points to tile {} of {}, using tile 0",
					tile_ref,
					bank_index,
					self.tiles.len()
				);
				0
			}
			None => {
				warn!(
					"Tile reference {} outside remap table of {} entries, using tile 0",
					tile_ref,
					self.remap.len()
				);
				0
			}
		}
	}

	/// Looks up a tile by reference, falling back to bank tile 0.
	pub fn get_tile(&self, tile_ref: usize) -> TileView<'_> {
		let bank_index = self.bank_index(tile_ref);
		TileView {
			tile: &self.tiles[bank_index],
			palette: &self.palette,
			bank_index,
		}
	}

	/// Returns the tile at a bank position, without remapping.
	pub fn bank_tile(&self, bank_index: usize) -> Option<TileView<'_>> {
		self.tiles.get(bank_index).map(|tile| TileView {
			tile,
			palette: &self.palette,
			bank_index,
		})
	}

	/// Returns the flags of the tile at a bank position.
	pub fn bank_flags(&self, bank_index: usize) -> Option<TileFlags> {
		self.flags.get(bank_index).copied()
	}

	/// Returns the flags of a bank tile, or empty flags with a warning when the
	/// flag table has no entry for it.
	pub fn bank_flags_or_default(&self, bank_index: usize) -> TileFlags {
		self.bank_flags(bank_index).unwrap_or_else(|| {
			warn!("No flags for bank tile {}, assuming none set", bank_index);
			TileFlags::default()
		})
	}

	/// Returns the flags for a tile reference, after remapping.
	///
	/// Bank tiles without a flag entry report empty flags.
	pub fn flags_for(&self, tile_ref: usize) -> TileFlags {
		self.bank_flags_or_default(self.bank_index(tile_ref))
	}
}

impl fmt::Display for TileSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Tileset:\n\
			- Compression: {}\n\
			- Filenames: {:?}\n\
			- Tiles: {}\n\
			- Remap entries: {}\n\
			- Flag entries: {}",
			self.header.compression(),
			self.filenames,
			self.tiles.len(),
			self.remap.len(),
			self.flags.len(),
		)
	}
}

/// Decodes the filename records as Mac OS Roman Pascal strings.
fn read_filenames(data: &[u8], count: u16) -> Result<Vec<String>, AssetError> {
	let records = bytes::slice(
		data,
		tileset::FILENAMES_OFFSET,
		usize::from(count) * FILENAME_RECORD_SIZE,
		FileType::TileSet,
	)?;

	Ok(records
		.chunks_exact(FILENAME_RECORD_SIZE)
		.map(|record| {
			let len = usize::from(record[0]);
			let (name, _) = encoding_rs::MACINTOSH.decode_without_bom_handling(&record[1..=len]);
			name.into_owned()
		})
		.collect())
}

/// Reads a count-prefixed table of u16, returning it and the offset after it.
fn read_remap_table(data: &[u8], offset: usize) -> Result<(Vec<u16>, usize), AssetError> {
	let count = usize::from(bytes::read_u16_be(data, offset, FileType::TileSet)?);
	let entries = bytes::slice(data, offset + 2, count * 2, FileType::TileSet)?;

	let table = entries.chunks_exact(2).map(|e| u16::from_be_bytes([e[0], e[1]])).collect();
	Ok((table, offset + 2 + entries.len()))
}

/// Reads a count-prefixed table of u32 pairs, returning it and the offset after it.
fn read_flag_table(data: &[u8], offset: usize) -> Result<(Vec<TileFlags>, usize), AssetError> {
	let count = usize::from(bytes::read_u16_be(data, offset, FileType::TileSet)?);
	let entries = bytes::slice(data, offset + 2, count * FLAG_ENTRY_SIZE, FileType::TileSet)?;

	let table = entries
		.chunks_exact(FLAG_ENTRY_SIZE)
		.map(|e| {
			TileFlags::new(
				u32::from_be_bytes([e[0], e[1], e[2], e[3]]),
				u32::from_be_bytes([e[4], e[5], e[6], e[7]]),
			)
		})
		.collect();
	Ok((table, offset + 2 + entries.len()))
}
