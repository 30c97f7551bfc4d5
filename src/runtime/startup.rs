use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config;
use crate::error::AppError;
use crate::player::{PlayerStore, RepeatMode};

/// Load the configured catalog, or the built-in one when none is set or the
/// file cannot be used.
pub fn load_catalog(settings: &config::LibrarySettings) -> Catalog {
    match configured_catalog(settings) {
        Ok(Some(catalog)) => catalog,
        Ok(None) => Catalog::builtin(),
        Err(e) => {
            warn!("using built-in catalog: {e}");
            Catalog::builtin()
        }
    }
}

fn configured_catalog(settings: &config::LibrarySettings) -> Result<Option<Catalog>, AppError> {
    let Some(path) = settings.catalog_path.as_deref() else {
        return Ok(None);
    };
    Ok(Some(Catalog::load(path)?))
}

pub fn repeat_mode(setting: config::RepeatModeSetting) -> RepeatMode {
    match setting {
        config::RepeatModeSetting::Off => RepeatMode::Off,
        config::RepeatModeSetting::All => RepeatMode::All,
        config::RepeatModeSetting::One => RepeatMode::One,
    }
}

/// Seed the store with every catalog track, paused on the first, and apply
/// the playback defaults.
pub fn build_store(catalog: &Catalog, settings: &config::Settings) -> PlayerStore {
    let playback = &settings.playback;
    let store = PlayerStore::new(catalog.tracks().to_vec())
        .with_volume(playback.volume)
        .with_shuffle(playback.shuffle)
        .with_repeat_mode(repeat_mode(playback.repeat_mode));
    info!(
        tracks = store.queue().len(),
        volume = store.volume(),
        repeat = %store.repeat_mode(),
        "player ready"
    );
    store
}

#[cfg(test)]
mod tests;
