//! Benchmark suite for asset decoding
//!
//! Measures the two run-length codecs on their own and the full image and map
//! parsers on top of them.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ppete_benches::{
	generate_image, generate_map, generate_pixels, pack_byte_run, pack_tile_run, sizes,
};
use ppete_types::file::{IndexedBuffer, Palette, PaletteImage, RgbaBuffer, TileMap, codec};
use std::hint::black_box;

/// Benchmark the byte-run codec on synthetic pixel planes
fn bench_byte_run(c: &mut Criterion) {
	let mut group = c.benchmark_group("byte_run");

	let cases = [("tiny", sizes::TINY), ("screen", sizes::SCREEN), ("large", sizes::LARGE)];
	for (name, (width, height)) in cases {
		let payload = generate_pixels(width, height);
		let packed = pack_byte_run(&payload);

		group.throughput(Throughput::Bytes(payload.len() as u64));
		group.bench_with_input(BenchmarkId::new("decode", name), &packed, |b, packed| {
			b.iter(|| black_box(codec::byte_run::decode(black_box(packed))));
		});
	}

	group.finish();
}

/// Benchmark the tile-run codec on map-like word streams
fn bench_tile_run(c: &mut Criterion) {
	let mut group = c.benchmark_group("tile_run");

	let words: Vec<u16> =
		(0..65536u32).map(|i| if i % 64 < 40 { 0 } else { (i % 500) as u16 }).collect();
	let packed = pack_tile_run(&words);

	group.throughput(Throughput::Elements(words.len() as u64));
	group.bench_function("decode", |b| {
		b.iter(|| black_box(codec::tile_run::decode(black_box(&packed))));
	});

	group.bench_function("to_be_bytes", |b| {
		b.iter(|| black_box(codec::tile_run::words_to_be_bytes(black_box(&words))));
	});

	group.finish();
}

/// Benchmark full image parsing for each container type
fn bench_image(c: &mut Criterion) {
	let mut group = c.benchmark_group("image");
	let (width, height) = sizes::SCREEN;

	for compression in [1u8, 6] {
		let raw = generate_image(width, height, compression);
		group.throughput(Throughput::Elements(u64::from(width) * u64::from(height)));
		group.bench_with_input(BenchmarkId::new("decode", compression), &raw, |b, raw| {
			b.iter(|| black_box(PaletteImage::from_bytes(black_box(raw))));
		});
	}

	let image = match PaletteImage::from_bytes(&generate_image(width, height, 1)) {
		Ok(image) => image,
		Err(e) => {
			eprintln!("Warning: Could not decode synthetic image: {}", e);
			return;
		}
	};
	group.bench_function("to_rgba_buffer", |b| {
		b.iter(|| black_box(image.to_rgba_buffer()));
	});

	group.finish();
}

/// Benchmark palette application through a pixel sink
fn bench_palette_apply(c: &mut Criterion) {
	let mut group = c.benchmark_group("palette_apply");

	let palette = Palette::grayscale();
	let (width, height) = sizes::SCREEN;
	let pixels = match IndexedBuffer::new(width, height, generate_pixels(width, height)) {
		Ok(pixels) => pixels,
		Err(e) => {
			eprintln!("Warning: Could not build pixel plane: {}", e);
			return;
		}
	};

	group.throughput(Throughput::Elements(pixels.pixels().len() as u64));
	group.bench_function("blit", |b| {
		let mut sink = RgbaBuffer::new(u32::from(width), u32::from(height));
		b.iter(|| {
			pixels.blit(&palette, &mut sink, 0, 0);
			black_box(sink.as_bytes().len())
		});
	});
	group.bench_function("to_rgba", |b| {
		b.iter(|| black_box(pixels.to_rgba(&palette)));
	});

	group.finish();
}

/// Benchmark map parsing
fn bench_map(c: &mut Criterion) {
	let mut group = c.benchmark_group("map");
	let (width, height) = sizes::LEVEL;
	let raw = generate_map(width, height);

	group.throughput(Throughput::Elements(u64::from(width) * u64::from(height)));
	group.bench_function("decode", |b| {
		b.iter(|| black_box(TileMap::from_bytes(black_box(&raw))));
	});

	group.finish();
}

criterion_group!(
	benches,
	bench_byte_run,
	bench_tile_run,
	bench_image,
	bench_palette_apply,
	bench_map
);
criterion_main!(benches);
