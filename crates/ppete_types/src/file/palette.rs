//! Packed colour tables.
//!
//! A palette is stored as 256 entries of 6 bytes each (1536 bytes). Only every
//! other byte carries data in the assets seen so far: entry `i` yields
//! `Color(bytes[6i], bytes[6i + 2], bytes[6i + 4], 0xFF)`. The same bytes can also
//! be read as three big-endian u16 channels; [`PaletteMode::Wide`] selects that
//! reading.

use std::fmt;

use crate::file::{
	AssetError, FileType, PaletteMode, bytes,
	layout::palette::{COLOR_COUNT, ENTRY_SIZE, PACKED_SIZE},
};

/// RGBA color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
	/// Alpha component (0-255)
	pub a: u8,
}

impl Color {
	/// Creates a new RGBA color.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}

	/// Creates a new RGB color with full opacity.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::new(r, g, b, 0xFF)
	}

	/// Creates a new opaque grayscale color.
	pub const fn gray(value: u8) -> Self {
		Self::rgb(value, value, value)
	}

	/// Creates a transparent black color.
	pub const fn transparent() -> Self {
		Self::new(0, 0, 0, 0)
	}

	/// Returns the color as a 32-bit RGBA value.
	pub const fn to_rgba32(&self) -> u32 {
		((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | (self.a as u32)
	}

	/// Creates a color from a 32-bit RGBA value.
	pub const fn from_rgba32(rgba: u32) -> Self {
		Self {
			r: ((rgba >> 24) & 0xFF) as u8,
			g: ((rgba >> 16) & 0xFF) as u8,
			b: ((rgba >> 8) & 0xFF) as u8,
			a: (rgba & 0xFF) as u8,
		}
	}

	/// Returns the channels in R, G, B, A byte order.
	pub const fn to_rgba(&self) -> [u8; 4] {
		[self.r, self.g, self.b, self.a]
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::transparent()
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// 256-color palette.
///
/// Built once from packed data and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	colors: [Color; COLOR_COUNT],
}

impl Palette {
	/// Number of colors in a palette
	pub const COLOR_COUNT: usize = COLOR_COUNT;

	/// Size of the packed palette region in bytes
	pub const PACKED_SIZE: usize = PACKED_SIZE;

	/// Decodes a packed palette using the narrow (every-other-byte) layout.
	///
	/// Only the first [`Palette::PACKED_SIZE`] bytes of `data` are read.
	///
	/// # Errors
	///
	/// Returns [`AssetError::InsufficientData`] if `data` is shorter than 1536 bytes.
	pub fn from_bytes(data: &[u8]) -> Result<Self, AssetError> {
		Self::from_bytes_with(data, PaletteMode::Narrow)
	}

	/// Decodes a packed palette with an explicit entry layout.
	pub fn from_bytes_with(data: &[u8], mode: PaletteMode) -> Result<Self, AssetError> {
		let packed = bytes::slice(data, 0, PACKED_SIZE, FileType::Palette)?;

		let mut colors = [Color::transparent(); COLOR_COUNT];
		for (color, entry) in colors.iter_mut().zip(packed.chunks_exact(ENTRY_SIZE)) {
			*color = match mode {
				PaletteMode::Narrow => Color::rgb(entry[0], entry[2], entry[4]),
				PaletteMode::Wide => Color::rgb(
					wide_channel(entry[0], entry[1]),
					wide_channel(entry[2], entry[3]),
					wide_channel(entry[4], entry[5]),
				),
			};
		}

		Ok(Self {
			colors,
		})
	}

	/// Creates a palette where every index maps to the matching gray level.
	pub fn grayscale() -> Self {
		Self {
			colors: std::array::from_fn(|i| Color::gray(i as u8)),
		}
	}

	/// Gets a color by index.
	#[inline]
	pub fn get(&self, index: u8) -> Color {
		self.colors[index as usize]
	}

	/// Returns a reference to the color array.
	#[inline]
	pub fn colors(&self) -> &[Color; COLOR_COUNT] {
		&self.colors
	}

	/// Returns an iterator over palette colors.
	pub fn iter(&self) -> impl Iterator<Item = &Color> {
		self.colors.iter()
	}
}

impl fmt::Display for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Palette: {} colors", COLOR_COUNT)
	}
}

impl std::ops::Index<u8> for Palette {
	type Output = Color;

	fn index(&self, index: u8) -> &Self::Output {
		&self.colors[index as usize]
	}
}

/// Scales a big-endian u16 channel down to 8 bits, rounding to nearest.
fn wide_channel(hi: u8, lo: u8) -> u8 {
	let value = u32::from(u16::from_be_bytes([hi, lo]));
	((value + 0x80) >> 8).min(0xFF) as u8
}
