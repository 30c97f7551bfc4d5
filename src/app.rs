//! Application module: view state of the display surfaces.
//!
//! The `App` model lives in `app::model` and holds navigation, selection,
//! the search query and mute state. It never mutates the player store; it
//! hands back `Action`s for the runtime to apply.

mod model;

pub use model::*;
