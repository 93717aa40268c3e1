//! Bounds-checked big-endian field readers.

use crate::file::{AssetError, FileType};

/// Returns `data[offset..offset + len]`, or an `InsufficientData` error tagged with `file_type`.
pub(crate) fn slice(
	data: &[u8],
	offset: usize,
	len: usize,
	file_type: FileType,
) -> Result<&[u8], AssetError> {
	let end = offset.saturating_add(len);
	data.get(offset..end).ok_or_else(|| AssetError::insufficient_data(file_type, end, data.len()))
}

/// Reads a big-endian u16 at `offset`.
pub(crate) fn read_u16_be(data: &[u8], offset: usize, file_type: FileType) -> Result<u16, AssetError> {
	let bytes = slice(data, offset, 2, file_type)?;
	Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}
