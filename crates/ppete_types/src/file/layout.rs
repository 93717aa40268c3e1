//! Field offsets for every asset layout.
//!
//! All multi-byte integers are big-endian. Offsets for images and tilesets are
//! absolute positions in the *unpacked* buffer (header + decompressed payload);
//! map offsets are absolute positions in the raw file, which is never wrapped in
//! a container.
//!
//! | Asset     | Offset          | Field                                        |
//! |-----------|-----------------|----------------------------------------------|
//! | container | `0x00..0x07`    | opaque magic / reserved                      |
//! | container | `0x07`          | compression type (0, 1 = byte-run; 6 = tile-run) |
//! | image     | `0x08..0x608`   | packed palette (256 × 6 bytes)               |
//! | image     | `0x608`         | width (u16)                                  |
//! | image     | `0x60A`         | height (u16)                                 |
//! | image     | `0x60C..`       | indexed pixel plane                          |
//! | tileset   | `0x26`          | filename count (u16)                         |
//! | tileset   | `0x28`          | filename records, 256 bytes each             |
//! | tileset   | `0x28 + N*256`  | tile count (u16)                             |
//! | tileset   | `+2..`          | tile bank, 1024 bytes per tile               |
//! | tileset   | after bank      | remap table: count (u16) + u16 entries       |
//! | tileset   | after remap     | flag table: count (u16) + (u32, u32) entries |
//! | map       | `0x17`          | width (u16)                                  |
//! | map       | `0x19`          | height (u16)                                 |
//! | map       | `0x1B..`        | tile-run compressed cell stream              |

/// Container header fields.
pub mod container {
	/// Size of the container header passed through untouched
	pub const HEADER_SIZE: usize = 0x08;

	/// Offset of the compression type byte
	pub const COMPRESSION_OFFSET: usize = 0x07;
}

/// Packed palette layout.
pub mod palette {
	/// Number of colours in a palette
	pub const COLOR_COUNT: usize = 256;

	/// Bytes per packed palette entry
	pub const ENTRY_SIZE: usize = 6;

	/// Size of the packed palette region
	pub const PACKED_SIZE: usize = COLOR_COUNT * ENTRY_SIZE;
}

/// Palette image fields.
pub mod image {
	/// Offset of the packed palette
	pub const PALETTE_OFFSET: usize = 0x08;

	/// Offset of the width field
	pub const WIDTH_OFFSET: usize = PALETTE_OFFSET + super::palette::PACKED_SIZE;

	/// Offset of the height field
	pub const HEIGHT_OFFSET: usize = WIDTH_OFFSET + 2;

	/// Offset of the indexed pixel plane
	pub const PIXELS_OFFSET: usize = HEIGHT_OFFSET + 2;
}

/// Tileset fields.
pub mod tileset {
	/// Offset of the filename count
	pub const FILENAME_COUNT_OFFSET: usize = 0x26;

	/// Offset of the first filename record
	pub const FILENAMES_OFFSET: usize = 0x28;

	/// Size of one filename record
	pub const FILENAME_RECORD_SIZE: usize = 0x100;

	/// Size of one flag table entry (two u32 words)
	pub const FLAG_ENTRY_SIZE: usize = 8;

	/// Offset of the tile count for a tileset with `filename_count` filename records.
	pub const fn tile_count_offset(filename_count: u16) -> usize {
		FILENAMES_OFFSET + filename_count as usize * FILENAME_RECORD_SIZE
	}
}

/// Tile geometry.
pub mod tile {
	/// Width and height of a tile in pixels
	pub const DIMENSION: u16 = 32;

	/// Bytes of indexed pixel data per tile
	pub const SIZE: usize = DIMENSION as usize * DIMENSION as usize;
}

/// Tile map fields.
pub mod map {
	/// Offset of the width field
	pub const WIDTH_OFFSET: usize = 0x17;

	/// Offset of the height field
	pub const HEIGHT_OFFSET: usize = 0x19;

	/// Offset of the compressed cell stream
	pub const CELLS_OFFSET: usize = 0x1B;

	/// Bits of a cell that reference the tileset remap table
	pub const TILE_REF_MASK: u16 = 0x3FFF;

	/// Orientation / marker bits left for the renderer
	pub const MARKER_MASK: u16 = !TILE_REF_MASK;
}

/// Tile flag bits.
pub mod flags {
	/// "Solid" bits of the primary flag word, inferred from rendering behaviour
	pub const SOLID_MASK: u32 = 0x000F_0000;
}
