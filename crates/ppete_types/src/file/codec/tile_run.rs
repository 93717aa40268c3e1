//! Word-oriented run-length decoding for tile streams.
//!
//! ## Stream Format
//!
//! Each token starts with a control byte `b`; values are big-endian u16:
//!
//! | Control byte     | Token   | Payload             | Output                           |
//! |------------------|---------|---------------------|----------------------------------|
//! | bit 7 set        | repeat  | 1 word `v`          | `v` repeated `(b & 0x7F) + 1` times |
//! | bit 7 clear      | literal | `b + 1` words       | the words in order               |
//!
//! Both counts range over 1..=128.

use crate::file::RunLengthError;

/// Bit of the control byte selecting a repeat token
const REPEAT_FLAG: u8 = 0x80;

/// Decodes a complete tile-run stream into big-endian words.
///
/// # Errors
///
/// Returns [`RunLengthError`] if any token needs bytes past the end of `data`.
pub fn decode(data: &[u8]) -> Result<Vec<u16>, RunLengthError> {
	let mut output = Vec::with_capacity(data.len());
	let mut cursor = 0;

	while cursor < data.len() {
		let control = data[cursor];
		let count = usize::from(control & !REPEAT_FLAG) + 1;
		let available = data.len() - cursor - 1;

		if control & REPEAT_FLAG != 0 {
			let Some(&[hi, lo]) = data.get(cursor + 1..cursor + 3) else {
				return Err(RunLengthError::TruncatedRepeat {
					offset: cursor,
					needed: 2,
					available,
				});
			};
			output.resize(output.len() + count, u16::from_be_bytes([hi, lo]));
			cursor += 3;
		} else {
			let needed = count * 2;
			let Some(run) = data.get(cursor + 1..cursor + 1 + needed) else {
				return Err(RunLengthError::TruncatedLiteral {
					offset: cursor,
					needed,
					available,
				});
			};
			output.extend(run.chunks_exact(2).map(|w| u16::from_be_bytes([w[0], w[1]])));
			cursor += needed + 1;
		}
	}

	Ok(output)
}

/// Serializes decoded words back to big-endian bytes.
pub fn words_to_be_bytes(words: &[u16]) -> Vec<u8> {
	words.iter().flat_map(|w| w.to_be_bytes()).collect()
}
