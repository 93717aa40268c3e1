use config::{Config, Environment, File, FileFormat};
use powerpete_rs::prelude::*;
use serde::Deserialize;

/// Application settings with decode options under their own table.
#[derive(Debug, Deserialize)]
struct Settings {
	#[serde(default)]
	decode: DecodeOptions,
}

fn from_toml(toml: &str) -> DecodeOptions {
	Config::builder()
		.add_source(File::from_str(toml, FileFormat::Toml))
		.build()
		.unwrap()
		.try_deserialize()
		.unwrap()
}

fn env_source(vars: &[(&str, &str)]) -> Environment {
	let mut map = config::Map::new();
	for (key, value) in vars {
		map.insert(key.to_string(), value.to_string());
	}
	Environment::with_prefix("PPETE").source(Some(map))
}

#[test_log::test]
fn options_from_toml() {
	let options = from_toml("palette_mode = \"wide\"\nmap_underrun = \"pad\"\n");
	assert_eq!(options.palette_mode, PaletteMode::Wide);
	assert_eq!(options.map_underrun, UnderrunPolicy::Pad);
}

#[test_log::test]
fn partial_toml_keeps_defaults() {
	let options = from_toml("map_underrun = \"pad\"\n");
	assert_eq!(options.palette_mode, PaletteMode::Narrow);
	assert_eq!(options.map_underrun, UnderrunPolicy::Pad);

	let options = from_toml("palette_mode = \"wide\"\n");
	assert_eq!(options.palette_mode, PaletteMode::Wide);
	assert_eq!(options.map_underrun, UnderrunPolicy::Reject);

	assert_eq!(from_toml(""), DecodeOptions::default());
}

#[test_log::test]
fn unknown_mode_is_rejected() {
	let result = Config::builder()
		.add_source(File::from_str("palette_mode = \"Wide\"\n", FileFormat::Toml))
		.build()
		.unwrap()
		.try_deserialize::<DecodeOptions>();
	assert!(result.is_err());
}

#[test_log::test]
fn environment_overrides_file() {
	let options: DecodeOptions = Config::builder()
		.add_source(File::from_str("palette_mode = \"wide\"\n", FileFormat::Toml))
		.add_source(env_source(&[("PPETE_MAP_UNDERRUN", "pad")]))
		.build()
		.unwrap()
		.try_deserialize()
		.unwrap();
	assert_eq!(options.palette_mode, PaletteMode::Wide);
	assert_eq!(options.map_underrun, UnderrunPolicy::Pad);

	let options: DecodeOptions = Config::builder()
		.add_source(File::from_str("palette_mode = \"wide\"\n", FileFormat::Toml))
		.add_source(env_source(&[("PPETE_PALETTE_MODE", "narrow")]))
		.build()
		.unwrap()
		.try_deserialize()
		.unwrap();
	assert_eq!(options.palette_mode, PaletteMode::Narrow);
}

#[test_log::test]
fn nested_options_table() {
	let settings: Settings = Config::builder()
		.add_source(File::from_str("[decode]\npalette_mode = \"wide\"\n", FileFormat::Toml))
		.build()
		.unwrap()
		.try_deserialize()
		.unwrap();
	assert_eq!(settings.decode.palette_mode, PaletteMode::Wide);
	assert_eq!(settings.decode.map_underrun, UnderrunPolicy::Reject);

	let settings: Settings = Config::builder().build().unwrap().try_deserialize().unwrap();
	assert_eq!(settings.decode, DecodeOptions::default());
}

#[test_log::test]
fn loaded_options_drive_decoding() {
	let options = from_toml("map_underrun = \"pad\"\n");
	let raw = crate::fixtures::map_file(2, 2, &[7]);

	assert!(TileMap::from_bytes(&raw).is_err());
	let map = TileMap::from_bytes_with(&raw, &options).unwrap();
	assert_eq!(map.cells(), &[7, 0, 0, 0]);
}
