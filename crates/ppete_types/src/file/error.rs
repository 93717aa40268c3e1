//! Error types for asset decoding.

use std::fmt;

use thiserror::Error;

/// The kind of asset a decoding error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
	/// The 8-byte compression container wrapping images and tilesets
	Container,
	/// A packed 256-entry colour table
	Palette,
	/// A palette image asset
	Image,
	/// A tileset asset
	TileSet,
	/// A tile map asset
	Map,
}

impl fmt::Display for FileType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Container => write!(f, "container"),
			Self::Palette => write!(f, "palette"),
			Self::Image => write!(f, "image"),
			Self::TileSet => write!(f, "tileset"),
			Self::Map => write!(f, "map"),
		}
	}
}

/// Errors raised by the run-length codecs when a token runs off the end of the stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunLengthError {
	/// A repeat token had no value following it
	#[error(
		"Truncated repeat token at offset {offset}: needs {needed} bytes, {available} available"
	)]
	TruncatedRepeat {
		/// Offset of the control byte
		offset: usize,
		/// Bytes the token needs after the control byte
		needed: usize,
		/// Bytes actually left after the control byte
		available: usize,
	},

	/// A literal run declared more data than the stream holds
	#[error(
		"Truncated literal run at offset {offset}: needs {needed} bytes, {available} available"
	)]
	TruncatedLiteral {
		/// Offset of the control byte
		offset: usize,
		/// Bytes the run needs after the control byte
		needed: usize,
		/// Bytes actually left after the control byte
		available: usize,
	},
}

/// Errors that can occur while decoding any asset.
#[derive(Debug, Error)]
pub enum AssetError {
	/// Not enough data to read a field or section
	#[error("Insufficient {file_type} data: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Asset being decoded
		file_type: FileType,
		/// Number of bytes required
		expected: usize,
		/// Number of bytes available
		actual: usize,
	},

	/// A compressed stream ended in the middle of a token
	#[error("Malformed compressed stream: {0}")]
	Truncated(#[from] RunLengthError),

	/// Compression type byte outside of the supported set
	#[error("Unsupported compression type: {0:#04X}")]
	UnsupportedCompression(u8),

	/// Pixel plane length does not match the declared dimensions
	#[error("Pixel count mismatch: expected {expected} pixels, got {actual}")]
	PixelCountMismatch {
		/// `width * height`
		expected: usize,
		/// Pixels supplied
		actual: usize,
	},

	/// A tileset declares no tiles, so no fallback tile exists
	#[error("Tileset contains no tiles")]
	EmptyTileBank,

	/// The map cell stream decoded to fewer cells than `width * height`
	#[error("Map stream underrun: expected {expected} cells, decoded {actual}")]
	MapUnderrun {
		/// `width * height`
		expected: usize,
		/// Cells actually decoded
		actual: usize,
	},

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl AssetError {
	/// Shorthand for [`AssetError::InsufficientData`].
	pub fn insufficient_data(file_type: FileType, expected: usize, actual: usize) -> Self {
		Self::InsufficientData {
			file_type,
			expected,
			actual,
		}
	}

	/// Returns `true` for truncated or malformed data and length mismatches.
	pub fn is_format_error(&self) -> bool {
		matches!(
			self,
			Self::InsufficientData { .. }
				| Self::Truncated(_)
				| Self::PixelCountMismatch { .. }
				| Self::EmptyTileBank
				| Self::MapUnderrun { .. }
		)
	}

	/// Returns `true` when the data uses a compression scheme this crate cannot decode.
	pub fn is_unsupported(&self) -> bool {
		matches!(self, Self::UnsupportedCompression(_))
	}
}
