//! Player module: the playback state store shared by every display surface.
//!
//! `PlayerStore` owns the current track, transport state and queue. Surfaces
//! read it and call its operations; they never touch its fields directly.

mod store;
mod types;

pub use store::*;
pub use types::*;
