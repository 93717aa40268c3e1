//! Benchmark helper utilities for powerpete-rs
//!
//! This module generates synthetic packed assets for the benchmark suite. The
//! encoders emit both token kinds of each codec: long flat areas become repeat
//! tokens and noisy areas become literal tokens, roughly the mix seen in real
//! level art.

/// Generates a byte-run stream that unpacks to `payload`.
pub fn pack_byte_run(payload: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(payload.len() / 2);
	let mut literal_start = 0;
	let mut i = 0;

	while i < payload.len() {
		let run = payload[i..].iter().take(128).take_while(|&&b| b == payload[i]).count();
		if run < 3 {
			i += 1;
			if i - literal_start == 128 {
				push_byte_literal(&mut out, &payload[literal_start..i]);
				literal_start = i;
			}
			continue;
		}

		push_byte_literal(&mut out, &payload[literal_start..i]);
		out.push((0x101 - run) as u8);
		out.push(payload[i]);
		i += run;
		literal_start = i;
	}

	push_byte_literal(&mut out, &payload[literal_start..]);
	out
}

fn push_byte_literal(out: &mut Vec<u8>, literal: &[u8]) {
	if !literal.is_empty() {
		out.push((literal.len() - 1) as u8);
		out.extend_from_slice(literal);
	}
}

/// Generates a tile-run stream that unpacks to `words`.
pub fn pack_tile_run(words: &[u16]) -> Vec<u8> {
	let mut out = Vec::with_capacity(words.len());
	let mut literal_start = 0;
	let mut i = 0;

	while i < words.len() {
		let run = words[i..].iter().take(128).take_while(|&&w| w == words[i]).count();
		if run < 2 {
			i += 1;
			if i - literal_start == 128 {
				push_word_literal(&mut out, &words[literal_start..i]);
				literal_start = i;
			}
			continue;
		}

		push_word_literal(&mut out, &words[literal_start..i]);
		out.push(0x80 | (run - 1) as u8);
		out.extend_from_slice(&words[i].to_be_bytes());
		i += run;
		literal_start = i;
	}

	push_word_literal(&mut out, &words[literal_start..]);
	out
}

fn push_word_literal(out: &mut Vec<u8>, literal: &[u16]) {
	if !literal.is_empty() {
		out.push((literal.len() - 1) as u8);
		for word in literal {
			out.extend_from_slice(&word.to_be_bytes());
		}
	}
}

/// Generates an indexed pixel plane with flat bands and noisy stripes.
pub fn generate_pixels(width: u16, height: u16) -> Vec<u8> {
	let (width, height) = (usize::from(width), usize::from(height));
	let mut pixels = Vec::with_capacity(width * height);

	for y in 0..height {
		for x in 0..width {
			let index = if (y / 8) % 4 == 3 {
				(x.wrapping_mul(31) ^ y.wrapping_mul(17)) as u8
			} else {
				(y / 8) as u8
			};
			pixels.push(index);
		}
	}
	pixels
}

/// Generates a packed palette image asset.
///
/// `compression` is the container type byte: 0 or 1 for byte-run, 6 for tile-run.
pub fn generate_image(width: u16, height: u16, compression: u8) -> Vec<u8> {
	let mut payload = Vec::with_capacity(1540 + usize::from(width) * usize::from(height));
	for i in 0..=255u8 {
		payload.extend_from_slice(&[i, 0, i.wrapping_mul(3), 0, i.wrapping_mul(7), 0]);
	}
	payload.extend_from_slice(&width.to_be_bytes());
	payload.extend_from_slice(&height.to_be_bytes());
	payload.extend(generate_pixels(width, height));
	if payload.len() % 2 == 1 {
		payload.push(0);
	}

	let mut raw = vec![0, 0, 0, 0, 0, 0, 0, compression];
	if compression == 6 {
		let words: Vec<u16> =
			payload.chunks_exact(2).map(|w| u16::from_be_bytes([w[0], w[1]])).collect();
		raw.extend(pack_tile_run(&words));
	} else {
		raw.extend(pack_byte_run(&payload));
	}
	raw
}

/// Generates a raw map asset of `width × height` cells.
pub fn generate_map(width: u16, height: u16) -> Vec<u8> {
	let mut raw = vec![0u8; 0x17];
	raw.extend_from_slice(&width.to_be_bytes());
	raw.extend_from_slice(&height.to_be_bytes());

	let cells: Vec<u16> = (0..usize::from(width) * usize::from(height))
		.map(|i| match i % 64 {
			0..48 => 0,
			48..56 => 0x4000 | (i % 7) as u16,
			_ => (i % 300) as u16,
		})
		.collect();
	raw.extend(pack_tile_run(&cells));
	raw
}

/// Common benchmark sizes for synthetic test data
pub mod sizes {
	/// Tiny image: 64x64 (4,096 pixels)
	pub const TINY: (u16, u16) = (64, 64);
	/// Title screen: 640x480 (307,200 pixels)
	pub const SCREEN: (u16, u16) = (640, 480);
	/// Large backdrop: 1024x768 (786,432 pixels)
	pub const LARGE: (u16, u16) = (1024, 768);
	/// Typical level map: 128x64 cells
	pub const LEVEL: (u16, u16) = (128, 64);
}

#[cfg(test)]
mod tests {
	use super::*;
	use ppete_types::file::{PaletteImage, TileMap, codec};

	#[test]
	fn test_byte_run_matches_payload() {
		let payload = generate_pixels(100, 40);
		let packed = pack_byte_run(&payload);
		assert!(packed.len() < payload.len());
		assert_eq!(codec::byte_run::decode(&packed).unwrap(), payload);
	}

	#[test]
	fn test_tile_run_matches_words() {
		let words: Vec<u16> = (0..1000u16).map(|i| if i % 10 < 6 { 7 } else { i }).collect();
		assert_eq!(codec::tile_run::decode(&pack_tile_run(&words)).unwrap(), words);
	}

	#[test]
	fn test_generated_image_decodes() {
		for compression in [0, 6] {
			let image = PaletteImage::from_bytes(&generate_image(33, 9, compression)).unwrap();
			assert_eq!((image.width(), image.height()), (33, 9));
			assert_eq!(image.pixels().pixels(), &generate_pixels(33, 9)[..]);
		}
	}

	#[test]
	fn test_generated_map_decodes() {
		let map = TileMap::from_bytes(&generate_map(20, 10)).unwrap();
		assert_eq!(map.cells().len(), 200);
		assert_eq!(map.cell(0, 0), Some(0));
	}
}
