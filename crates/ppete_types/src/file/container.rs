//! Compression container shared by image and tileset assets.
//!
//! Every packed asset starts with an 8-byte header. The byte at offset `0x07`
//! selects the codec used for everything after the header; the other seven
//! bytes are passed through unexamined. Unpacking yields the header followed by
//! the decompressed payload, so downstream parsers address fields by their
//! absolute offsets in [`layout`](crate::file::layout).

use std::fmt;

use log::debug;

use crate::file::{
	AssetError, FileType,
	codec::{byte_run, tile_run},
	layout::container::{COMPRESSION_OFFSET, HEADER_SIZE},
};

/// Compression scheme selected by the container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
	/// Byte-run stream; the raw type byte (0 or 1) is preserved
	ByteRun(u8),
	/// Tile-run stream of big-endian words (type 6)
	TileRun,
}

impl Compression {
	/// Maps a compression type byte to a scheme.
	pub fn from_u8(value: u8) -> Result<Self, AssetError> {
		match value {
			0 | 1 => Ok(Self::ByteRun(value)),
			6 => Ok(Self::TileRun),
			_ => Err(AssetError::UnsupportedCompression(value)),
		}
	}

	/// Returns the raw compression type byte.
	pub fn to_u8(self) -> u8 {
		match self {
			Self::ByteRun(value) => value,
			Self::TileRun => 6,
		}
	}

	/// Decompresses a payload with this scheme.
	pub fn decompress(self, payload: &[u8]) -> Result<Vec<u8>, AssetError> {
		Ok(match self {
			Self::ByteRun(_) => byte_run::decode(payload)?,
			Self::TileRun => tile_run::words_to_be_bytes(&tile_run::decode(payload)?),
		})
	}
}

impl fmt::Display for Compression {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ByteRun(value) => write!(f, "Byte-run (type {value})"),
			Self::TileRun => write!(f, "Tile-run (type 6)"),
		}
	}
}

/// The 8-byte container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
	bytes: [u8; HEADER_SIZE],
	compression: Compression,
}

impl Header {
	/// Size of the header in bytes
	pub const SIZE: usize = HEADER_SIZE;

	/// Parses the header from the start of a raw asset.
	///
	/// # Errors
	///
	/// Fails if `data` is shorter than the header or the compression type is unknown.
	pub fn from_bytes(data: &[u8]) -> Result<Self, AssetError> {
		let Some(head) = data.get(..HEADER_SIZE) else {
			return Err(AssetError::insufficient_data(FileType::Container, HEADER_SIZE, data.len()));
		};

		let mut bytes = [0u8; HEADER_SIZE];
		bytes.copy_from_slice(head);
		let compression = Compression::from_u8(bytes[COMPRESSION_OFFSET])?;

		Ok(Self {
			bytes,
			compression,
		})
	}

	/// Returns the raw header bytes.
	pub fn bytes(&self) -> &[u8; HEADER_SIZE] {
		&self.bytes
	}

	/// Returns the compression scheme.
	pub fn compression(&self) -> Compression {
		self.compression
	}
}

impl fmt::Display for Header {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Container Header:\n\
			- Bytes: {:02X?}\n\
			- Compression: {}",
			self.bytes, self.compression,
		)
	}
}

/// Unpacks a raw container into `header ++ decompressed payload`.
///
/// # Errors
///
/// - [`AssetError::InsufficientData`] if the header is incomplete
/// - [`AssetError::UnsupportedCompression`] for type bytes other than 0, 1 or 6
/// - [`AssetError::Truncated`] if the payload ends mid-token
pub fn unpack(raw: &[u8]) -> Result<Vec<u8>, AssetError> {
	unpack_with_header(raw).map(|(_, data)| data)
}

/// Like [`unpack`], also returning the parsed header.
pub fn unpack_with_header(raw: &[u8]) -> Result<(Header, Vec<u8>), AssetError> {
	let header = Header::from_bytes(raw)?;
	let payload = header.compression().decompress(&raw[HEADER_SIZE..])?;

	debug!(
		"Unpacked container: {}, {} -> {} payload bytes",
		header.compression(),
		raw.len() - HEADER_SIZE,
		payload.len()
	);

	let mut data = Vec::with_capacity(HEADER_SIZE + payload.len());
	data.extend_from_slice(header.bytes());
	data.extend_from_slice(&payload);
	Ok((header, data))
}
