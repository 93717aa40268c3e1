#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `powerpete-rs` decodes the packed image, tileset and map assets of an old Mac
//! platform game into plain in-memory structures.
//!
pub use ppete_internal::*;
