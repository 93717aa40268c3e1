//! Run-length codecs used by packed assets.
//!
//! Two unrelated schemes share the same "control byte, then payload" shape but
//! differ in unit size and in how the control byte is tested, so each lives in
//! its own module:
//!
//! - [`byte_run`]: single-byte units, repeat when the control byte is `> 0x80`.
//!   Used by images and tilesets (container types 0 and 1).
//! - [`tile_run`]: big-endian u16 units, repeat when bit 7 of the control byte is set.
//!   Used by tile maps and container type 6.
//!
//! Both are decode-only.

pub mod byte_run;
pub mod tile_run;
