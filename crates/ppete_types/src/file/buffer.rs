//! Indexed pixel buffers and output sinks.
//!
//! [`IndexedBuffer`] holds palette indices for a `width × height` plane and is
//! validated once at construction, so every later access is a plain bounds check.
//! Rendering goes through the [`PixelSink`] trait: the parsers never know whether
//! colours end up in memory ([`RgbaBuffer`]) or on a window surface owned by the
//! caller.

use std::fmt;

use crate::file::{AssetError, Color, Palette};

/// Destination for palette-resolved pixels.
pub trait PixelSink {
	/// Width of the sink in pixels.
	fn width(&self) -> u32;

	/// Height of the sink in pixels.
	fn height(&self) -> u32;

	/// Writes one pixel. Callers only pass coordinates inside `width × height`.
	fn put_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// A `width × height` plane of palette indices in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedBuffer {
	width: u16,
	height: u16,
	pixels: Vec<u8>,
}

impl IndexedBuffer {
	/// Wraps pixel data after checking it holds exactly `width * height` indices.
	///
	/// # Errors
	///
	/// Returns [`AssetError::PixelCountMismatch`] on a length mismatch.
	pub fn new(width: u16, height: u16, pixels: Vec<u8>) -> Result<Self, AssetError> {
		let expected = usize::from(width) * usize::from(height);
		if pixels.len() != expected {
			return Err(AssetError::PixelCountMismatch {
				expected,
				actual: pixels.len(),
			});
		}

		Ok(Self {
			width,
			height,
			pixels,
		})
	}

	/// Returns the width in pixels.
	#[inline]
	pub fn width(&self) -> u16 {
		self.width
	}

	/// Returns the height in pixels.
	#[inline]
	pub fn height(&self) -> u16 {
		self.height
	}

	/// Returns the raw palette indices.
	#[inline]
	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	/// Gets the palette index at `(x, y)`, or `None` outside the plane.
	#[inline]
	pub fn get(&self, x: u16, y: u16) -> Option<u8> {
		if x >= self.width || y >= self.height {
			return None;
		}
		self.pixels.get(usize::from(y) * usize::from(self.width) + usize::from(x)).copied()
	}

	/// Gets the colour at `(x, y)` through `palette`.
	pub fn color_at(&self, x: u16, y: u16, palette: &Palette) -> Option<Color> {
		self.get(x, y).map(|index| palette.get(index))
	}

	/// Returns an iterator over the rows of the plane.
	pub fn rows(&self) -> RowIterator<'_> {
		RowIterator::new(&self.pixels, usize::from(self.width))
	}

	/// Applies `palette`, returning RGBA bytes in row-major order.
	pub fn to_rgba(&self, palette: &Palette) -> Vec<u8> {
		let mut rgba = Vec::with_capacity(self.pixels.len() * 4);
		for &index in &self.pixels {
			rgba.extend_from_slice(&palette.get(index).to_rgba());
		}
		rgba
	}

	/// Draws the plane into `sink` with its top-left corner at `(origin_x, origin_y)`.
	///
	/// Pixels falling outside the sink are clipped.
	pub fn blit<S: PixelSink + ?Sized>(
		&self,
		palette: &Palette,
		sink: &mut S,
		origin_x: u32,
		origin_y: u32,
	) {
		let (sink_width, sink_height) = (sink.width(), sink.height());

		for (row_index, row) in self.rows().enumerate() {
			let Some(y) = origin_y.checked_add(row_index as u32) else {
				break;
			};
			if y >= sink_height {
				break;
			}

			for (col_index, &index) in row.iter().enumerate() {
				let Some(x) = origin_x.checked_add(col_index as u32) else {
					break;
				};
				if x >= sink_width {
					break;
				}
				sink.put_pixel(x, y, palette.get(index));
			}
		}
	}
}

impl fmt::Display for IndexedBuffer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}×{} indexed ({} pixels)", self.width, self.height, self.pixels.len())
	}
}

/// Iterator over rows of an indexed plane.
#[derive(Debug, Clone)]
pub struct RowIterator<'a> {
	pixels: &'a [u8],
	width: usize,
	current_row: usize,
	total_rows: usize,
}

impl<'a> RowIterator<'a> {
	fn new(pixels: &'a [u8], width: usize) -> Self {
		let total_rows = if width > 0 {
			pixels.len() / width
		} else {
			0
		};

		Self {
			pixels,
			width,
			current_row: 0,
			total_rows,
		}
	}
}

impl<'a> Iterator for RowIterator<'a> {
	type Item = &'a [u8];

	fn next(&mut self) -> Option<Self::Item> {
		if self.current_row >= self.total_rows {
			return None;
		}

		let start = self.current_row * self.width;
		self.current_row += 1;

		Some(&self.pixels[start..start + self.width])
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.total_rows - self.current_row;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for RowIterator<'_> {}

/// In-memory RGBA sink, 4 bytes per pixel in R, G, B, A order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
	width: u32,
	height: u32,
	data: Vec<u8>,
}

impl RgbaBuffer {
	/// Creates a buffer filled with transparent black.
	pub fn new(width: u32, height: u32) -> Self {
		Self::filled(width, height, Color::transparent())
	}

	/// Creates a buffer filled with `color`.
	pub fn filled(width: u32, height: u32, color: Color) -> Self {
		let pixel_count = width as usize * height as usize;
		let data = color.to_rgba().repeat(pixel_count);

		Self {
			width,
			height,
			data,
		}
	}

	/// Reads back the pixel at `(x, y)`.
	pub fn get(&self, x: u32, y: u32) -> Option<Color> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let offset = (y as usize * self.width as usize + x as usize) * 4;
		let px = &self.data[offset..offset + 4];
		Some(Color::new(px[0], px[1], px[2], px[3]))
	}

	/// Fills a rectangle with `color`, clipped to the buffer.
	pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
		let x_end = x.saturating_add(width).min(self.width);
		let y_end = y.saturating_add(height).min(self.height);

		for py in y..y_end {
			for px in x..x_end {
				self.put_pixel(px, py, color);
			}
		}
	}

	/// Returns the raw RGBA bytes.
	pub fn as_bytes(&self) -> &[u8] {
		&self.data
	}

	/// Consumes the buffer, returning the raw RGBA bytes.
	pub fn into_raw(self) -> Vec<u8> {
		self.data
	}
}

impl PixelSink for RgbaBuffer {
	fn width(&self) -> u32 {
		self.width
	}

	fn height(&self) -> u32 {
		self.height
	}

	fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
		let offset = (y as usize * self.width as usize + x as usize) * 4;
		self.data[offset..offset + 4].copy_from_slice(&color.to_rgba());
	}
}
