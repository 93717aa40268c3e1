//! Decoding options.
//!
//! Options only cover behaviour the asset format leaves open; the defaults are the
//! conservative reading. They deserialize from any serde source, e.g. a TOML file:
//!
//! ```toml
//! palette_mode = "wide"
//! map_underrun = "pad"
//! ```

use serde::{Deserialize, Serialize};

/// How the six bytes of a packed palette entry map to a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteMode {
	/// Bytes 0, 2 and 4 are the red, green and blue channels; 1, 3 and 5 are ignored
	#[default]
	Narrow,

	/// Three big-endian u16 channels scaled by 1/256, rounded to nearest and saturated
	Wide,
}

/// What to do when a map stream decodes to fewer cells than `width * height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnderrunPolicy {
	/// Fail the decode with [`AssetError::MapUnderrun`](crate::file::AssetError::MapUnderrun)
	#[default]
	Reject,

	/// Fill the missing cells with 0 and log a warning
	Pad,
}

/// Options shared by all asset parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
	/// Palette entry interpretation
	pub palette_mode: PaletteMode,

	/// Map underrun handling
	pub map_underrun: UnderrunPolicy,
}

impl DecodeOptions {
	/// Returns the default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the palette mode.
	pub fn with_palette_mode(mut self, mode: PaletteMode) -> Self {
		self.palette_mode = mode;
		self
	}

	/// Sets the map underrun policy.
	pub fn with_map_underrun(mut self, policy: UnderrunPolicy) -> Self {
		self.map_underrun = policy;
		self
	}
}
