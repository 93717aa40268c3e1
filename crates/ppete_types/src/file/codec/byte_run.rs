//! Byte-oriented run-length decoding.
//!
//! ## Stream Format
//!
//! The stream is a sequence of tokens, each starting with a control byte `b`:
//!
//! | Control byte   | Token      | Payload          | Output                         |
//! |----------------|------------|------------------|--------------------------------|
//! | `0x81..=0xFF`  | repeat     | 1 byte `v`       | `v` repeated `0xFF - b + 2` times (2..=128) |
//! | `0x00..=0x80`  | literal    | `b + 1` bytes    | the payload verbatim (1..=129) |
//!
//! `0x80` is a literal run of 129 bytes, not a repeat. The stream must end exactly
//! on a token boundary.

use crate::file::RunLengthError;

/// Control bytes above this value start a repeat token
const REPEAT_THRESHOLD: u8 = 0x80;

/// Number of output bytes produced by a repeat token with control byte `control`.
#[inline]
pub const fn repeat_count(control: u8) -> usize {
	0xFF - control as usize + 2
}

/// Number of payload bytes following a literal control byte `control`.
#[inline]
pub const fn literal_count(control: u8) -> usize {
	control as usize + 1
}

/// Decodes a complete byte-run stream.
///
/// # Errors
///
/// Returns [`RunLengthError`] if any token needs bytes past the end of `data`.
pub fn decode(data: &[u8]) -> Result<Vec<u8>, RunLengthError> {
	let mut output = Vec::with_capacity(data.len() * 2);
	let mut cursor = 0;

	while cursor < data.len() {
		let control = data[cursor];
		let available = data.len() - cursor - 1;

		if control > REPEAT_THRESHOLD {
			let Some(&value) = data.get(cursor + 1) else {
				return Err(RunLengthError::TruncatedRepeat {
					offset: cursor,
					needed: 1,
					available,
				});
			};
			output.resize(output.len() + repeat_count(control), value);
			cursor += 2;
		} else {
			let count = literal_count(control);
			let Some(run) = data.get(cursor + 1..cursor + 1 + count) else {
				return Err(RunLengthError::TruncatedLiteral {
					offset: cursor,
					needed: count,
					available,
				});
			};
			output.extend_from_slice(run);
			cursor += count + 1;
		}
	}

	Ok(output)
}
