//! Asset inspection and export utility.
//!
//! # Features
//!
//! - **info**: print the decoded header of an image, tileset or map asset
//! - **image**: export a palette image as PNG or BMP
//! - **tileset**: export every remapped tile of a tileset as one atlas image
//! - **map**: compose a full level from a map and its tileset
//!
//! # Usage
//!
//! ```bash
//! cargo run --example pp_utils info --kind image TITLE.IMG --json
//! cargo run --example pp_utils image TITLE.IMG title.png
//! cargo run --example pp_utils tileset JUNGLE.TIL jungle.png --palette JUNGLE.IMG
//! cargo run --example pp_utils map LEVEL1.MAP level1.png --tileset JUNGLE.TIL --palette JUNGLE.IMG --mark-solid
//! ```
//!
//! Decode options come from `--config <FILE>` (TOML) and from `PPETE_*`
//! environment variables, e.g. `PPETE_PALETTE_MODE=wide`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use image::RgbaImage;
use log::{info, warn};
use powerpete_rs::prelude::*;

/// Marker colour for solid tiles
const SOLID_MARKER: Color = Color::from_rgba32(0xFFFF_00FF);

/// Thickness of the solid marker lines in pixels
const SOLID_MARKER_WIDTH: u32 = 2;

#[derive(Parser)]
#[command(name = "pp_utils")]
#[command(author = "powerpete-rs project")]
#[command(version)]
#[command(about = "Inspect and export packed image, tileset and map assets", long_about = None)]
struct Cli {
	/// TOML file with decode options
	#[arg(short, long, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Print information about an asset
	Info(InfoArgs),
	/// Export a palette image
	Image(ImageArgs),
	/// Export a tileset as an atlas
	Tileset(TilesetArgs),
	/// Compose a map into a single image
	Map(MapArgs),
}

#[derive(Clone, Copy, ValueEnum)]
enum AssetKind {
	Image,
	Tileset,
	Map,
}

#[derive(Args)]
struct InfoArgs {
	/// Asset file
	#[arg(value_name = "FILE")]
	input: PathBuf,

	/// What the asset contains
	#[arg(short, long, value_enum)]
	kind: AssetKind,

	/// Print JSON instead of text
	#[arg(long, default_value_t = false)]
	json: bool,
}

#[derive(Args)]
struct ImageArgs {
	/// Packed image asset
	#[arg(value_name = "INPUT")]
	input: PathBuf,

	/// Output image, format chosen by extension
	#[arg(value_name = "OUTPUT")]
	output: PathBuf,
}

#[derive(Args)]
struct TilesetArgs {
	/// Packed tileset asset
	#[arg(value_name = "INPUT")]
	input: PathBuf,

	/// Output atlas image
	#[arg(value_name = "OUTPUT")]
	output: PathBuf,

	/// Image asset whose palette the tiles use
	#[arg(short, long, value_name = "IMAGE")]
	palette: PathBuf,

	/// Tiles per atlas row
	#[arg(long, value_name = "COUNT", default_value_t = 16)]
	columns: u32,
}

#[derive(Args)]
struct MapArgs {
	/// Raw map asset
	#[arg(value_name = "INPUT")]
	input: PathBuf,

	/// Output image
	#[arg(value_name = "OUTPUT")]
	output: PathBuf,

	/// Packed tileset asset
	#[arg(short, long, value_name = "TILESET")]
	tileset: PathBuf,

	/// Image asset whose palette the tiles use
	#[arg(short, long, value_name = "IMAGE")]
	palette: PathBuf,

	/// Outline tiles whose flags mark them solid
	#[arg(long, default_value_t = false)]
	mark_solid: bool,
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let options = load_options(cli.config.as_deref())?;

	match cli.command {
		Command::Info(args) => run_info(args, &options),
		Command::Image(args) => run_image(args, &options),
		Command::Tileset(args) => run_tileset(args, &options),
		Command::Map(args) => run_map(args, &options),
	}
}

/// Layers the optional config file under `PPETE_*` environment variables.
fn load_options(path: Option<&Path>) -> Result<DecodeOptions> {
	let mut builder = config::Config::builder();
	if let Some(path) = path {
		builder = builder.add_source(config::File::from(path));
	}
	builder = builder.add_source(config::Environment::with_prefix("PPETE"));

	let options = builder
		.build()
		.context("failed to load decode options")?
		.try_deserialize::<DecodeOptions>()
		.context("invalid decode options")?;
	info!("Decode options: {:?}", options);
	Ok(options)
}

fn read_asset(path: &Path) -> Result<Vec<u8>> {
	std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_palette(path: &Path, options: &DecodeOptions) -> Result<Palette> {
	let image = PaletteImage::from_bytes_with(&read_asset(path)?, options)
		.with_context(|| format!("failed to decode palette image {}", path.display()))?;
	Ok(image.palette().clone())
}

fn load_tileset(path: &Path, palette: Palette) -> Result<TileSet> {
	TileSet::from_bytes(&read_asset(path)?, palette)
		.with_context(|| format!("failed to decode tileset {}", path.display()))
}

fn save_rgba(buffer: RgbaBuffer, path: &Path) -> Result<()> {
	let (width, height) = (buffer.width(), buffer.height());
	let Some(image) = RgbaImage::from_raw(width, height, buffer.into_raw()) else {
		bail!("buffer does not hold {}x{} pixels", width, height);
	};
	image.save(path).with_context(|| format!("failed to write {}", path.display()))?;
	info!("Wrote {}x{} image to {}", width, height, path.display());
	Ok(())
}

fn run_info(args: InfoArgs, options: &DecodeOptions) -> Result<()> {
	let raw = read_asset(&args.input)?;

	let report = match args.kind {
		AssetKind::Image => {
			let image = PaletteImage::from_bytes_with(&raw, options)?;
			let header = image.header();
			if !args.json {
				println!("{}\n{}", header, image);
				return Ok(());
			}
			serde_json::json!({
				"kind": "image",
				"header": hex::encode(header.bytes()),
				"compression": header.compression().to_u8(),
				"width": image.width(),
				"height": image.height(),
			})
		}
		AssetKind::Tileset => {
			let set = TileSet::from_bytes(&raw, Palette::grayscale())?;
			let header = set.header();
			if !args.json {
				println!("{}\n{}", header, set);
				return Ok(());
			}
			let solid = set.flags().iter().filter(|flags| flags.is_solid()).count();
			serde_json::json!({
				"kind": "tileset",
				"header": hex::encode(header.bytes()),
				"compression": header.compression().to_u8(),
				"filenames": set.filenames(),
				"tiles": set.tiles().len(),
				"remap_entries": set.remap().len(),
				"flag_entries": set.flags().len(),
				"solid_tiles": solid,
			})
		}
		AssetKind::Map => {
			let map = TileMap::from_bytes_with(&raw, options)?;
			if !args.json {
				println!("{}", map);
				return Ok(());
			}
			let marked = map.cells().iter().filter(|&&cell| cell & 0xC000 != 0).count();
			serde_json::json!({
				"kind": "map",
				"width": map.width(),
				"height": map.height(),
				"marked_cells": marked,
			})
		}
	};

	println!("{}", serde_json::to_string_pretty(&report)?);
	Ok(())
}

fn run_image(args: ImageArgs, options: &DecodeOptions) -> Result<()> {
	let image = PaletteImage::from_bytes_with(&read_asset(&args.input)?, options)
		.with_context(|| format!("failed to decode {}", args.input.display()))?;
	info!("{}", image);
	save_rgba(image.to_rgba_buffer(), &args.output)
}

fn run_tileset(args: TilesetArgs, options: &DecodeOptions) -> Result<()> {
	let palette = load_palette(&args.palette, options)?;
	let set = load_tileset(&args.input, palette)?;
	info!("{}", set);

	let count = u32::try_from(set.remap().len().max(1))?;
	let size = u32::from(Tile::DIMENSION);
	let (width, height) = atlas_size(count, args.columns, size)?;
	let mut atlas = RgbaBuffer::new(width, height);

	for tile_ref in 0..count {
		let x = (tile_ref % args.columns) * size;
		let y = (tile_ref / args.columns) * size;
		set.get_tile(tile_ref as usize).blit(&mut atlas, x, y);
	}

	save_rgba(atlas, &args.output)
}

/// Pixel dimensions of an atlas holding `count` tiles of `size` pixels.
fn atlas_size(count: u32, columns: u32, size: u32) -> Result<(u32, u32)> {
	if columns == 0 {
		bail!("--columns must be at least 1");
	}

	let rows = count.div_ceil(columns);
	let (Some(width), Some(height)) = (columns.checked_mul(size), rows.checked_mul(size)) else {
		bail!("atlas of {} columns by {} rows does not fit in u32 pixels", columns, rows);
	};
	Ok((width, height))
}

fn run_map(args: MapArgs, options: &DecodeOptions) -> Result<()> {
	let palette = load_palette(&args.palette, options)?;
	let set = load_tileset(&args.tileset, palette)?;
	let map = TileMap::from_bytes_with(&read_asset(&args.input)?, options)
		.with_context(|| format!("failed to decode map {}", args.input.display()))?;
	info!("{}", map);

	// one empty tile of border on every side
	let size = u32::from(Tile::DIMENSION);
	let width = (u32::from(map.width()) + 2) * size;
	let height = (u32::from(map.height()) + 2) * size;
	let mut canvas = RgbaBuffer::filled(width, height, Color::rgb(0, 0, 0));

	let mut solid = 0usize;
	for (x, y, _) in map.iter_cells() {
		let Some(cell) = map.resolve(&set, x, y) else {
			continue;
		};
		let px = (u32::from(x) + 1) * size;
		let py = (u32::from(y) + 1) * size;

		if let Some(tile) = set.bank_tile(cell.bank_index) {
			tile.blit(&mut canvas, px, py);
		}

		if args.mark_solid && cell.is_solid() {
			canvas.fill_rect(px, py, SOLID_MARKER_WIDTH, size, SOLID_MARKER);
			canvas.fill_rect(px, py, size, SOLID_MARKER_WIDTH, SOLID_MARKER);
			solid += 1;
		}
	}

	if args.mark_solid {
		info!("Marked {} solid cells", solid);
	}
	if map.cells().is_empty() {
		warn!("Map {} has no cells", args.input.display());
	}

	save_rgba(canvas, &args.output)
}
