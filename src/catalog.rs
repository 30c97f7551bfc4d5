//! Catalog module: static reference data the player browses and plays.
//!
//! Tracks, albums and playlists are immutable once loaded. The catalog is
//! either the built-in seed data or a TOML file named in the config.

mod builtin;
mod format;
mod load;
mod model;

pub use format::*;
pub use load::CatalogError;
pub use model::*;
