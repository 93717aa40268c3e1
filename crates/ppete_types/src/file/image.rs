//! Palette image assets.
//!
//! ## Layout (after container unpacking)
//!
//! | Offset        | Size        | Field                     |
//! |---------------|-------------|---------------------------|
//! | `0x000`       | 8           | container header          |
//! | `0x008`       | 1536        | packed palette            |
//! | `0x608`       | 2           | width (u16, big-endian)   |
//! | `0x60A`       | 2           | height (u16, big-endian)  |
//! | `0x60C`       | w × h       | palette indices           |
//!
//! Bytes after the pixel plane are ignored.
//!
//! # Example
//!
//! ```no_run
//! use ppete_types::file::PaletteImage;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let image = PaletteImage::open("TITLE.IMG")?;
//! println!("{}", image);
//!
//! if let Some(color) = image.pixel(10, 20) {
//!     println!("(10, 20) = {}", color);
//! }
//! # Ok(())
//! # }
//! ```

use std::{fmt, io::Read, path::Path};

use log::debug;

use crate::file::{
	AssetError, Color, DecodeOptions, FileType, IndexedBuffer, Palette, PixelSink, RgbaBuffer,
	bytes, container,
	layout::{self, image::*},
};

/// A decoded palette image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteImage {
	header: container::Header,
	palette: Palette,
	pixels: IndexedBuffer,
}

impl PaletteImage {
	/// Opens and decodes an image asset from `path`.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, AssetError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data)
	}

	/// Decodes an image asset from any reader.
	///
	/// The whole asset is read into memory first.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, AssetError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	/// Decodes a raw (still packed) image asset with default options.
	pub fn from_bytes(raw: &[u8]) -> Result<Self, AssetError> {
		Self::from_bytes_with(raw, &DecodeOptions::default())
	}

	/// Decodes a raw (still packed) image asset.
	///
	/// # Errors
	///
	/// - Container errors from [`container::unpack`]
	/// - [`AssetError::InsufficientData`] if the palette, dimensions or pixel
	///   plane run past the end of the unpacked data
	pub fn from_bytes_with(raw: &[u8], options: &DecodeOptions) -> Result<Self, AssetError> {
		let (header, data) = container::unpack_with_header(raw)?;

		let packed_palette =
			bytes::slice(&data, PALETTE_OFFSET, layout::palette::PACKED_SIZE, FileType::Image)?;
		let palette = Palette::from_bytes_with(packed_palette, options.palette_mode)?;

		let width = bytes::read_u16_be(&data, WIDTH_OFFSET, FileType::Image)?;
		let height = bytes::read_u16_be(&data, HEIGHT_OFFSET, FileType::Image)?;
		let pixel_count = usize::from(width) * usize::from(height);

		let plane = bytes::slice(&data, PIXELS_OFFSET, pixel_count, FileType::Image)?;
		let pixels = IndexedBuffer::new(width, height, plane.to_vec())?;

		debug!("Decoded image: {}x{}, {}", width, height, header.compression());

		Ok(Self {
			header,
			palette,
			pixels,
		})
	}

	/// Returns the container header.
	pub fn header(&self) -> &container::Header {
		&self.header
	}

	/// Returns the image palette.
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Returns the indexed pixel plane.
	pub fn pixels(&self) -> &IndexedBuffer {
		&self.pixels
	}

	/// Returns the width in pixels.
	pub fn width(&self) -> u16 {
		self.pixels.width()
	}

	/// Returns the height in pixels.
	pub fn height(&self) -> u16 {
		self.pixels.height()
	}

	/// Returns the colour at `(x, y)`, or `None` outside the image.
	pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
		self.pixels.color_at(x, y, &self.palette)
	}

	/// Draws the image into `sink` at `(x, y)`.
	pub fn render_into<S: PixelSink + ?Sized>(&self, sink: &mut S, x: u32, y: u32) {
		self.pixels.blit(&self.palette, sink, x, y);
	}

	/// Renders the image into a new RGBA buffer.
	pub fn to_rgba_buffer(&self) -> RgbaBuffer {
		let mut buffer = RgbaBuffer::new(u32::from(self.width()), u32::from(self.height()));
		self.render_into(&mut buffer, 0, 0);
		buffer
	}
}

impl fmt::Display for PaletteImage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Palette Image:\n\
			- Compression: {}\n\
			- Width: {} pixels\n\
			- Height: {} pixels",
			self.header.compression(),
			self.width(),
			self.height(),
		)
	}
}
