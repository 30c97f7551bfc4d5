use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{Album, AlbumId, Catalog, Playlist, Track, TrackId};

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate {kind} id `{id}`")]
    DuplicateId { kind: &'static str, id: String },

    #[error("track `{0}` has a zero duration")]
    ZeroDuration(TrackId),

    #[error("track `{track}` references unknown album `{album}`")]
    UnknownAlbum { track: TrackId, album: AlbumId },
}

/// On-disk layout: `[[albums]]`, `[[tracks]]` and `[[playlists]]` tables.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
    albums: Vec<Album>,
    tracks: Vec<Track>,
    playlists: Vec<Playlist>,
}

impl Catalog {
    /// Parse and validate a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text)?;
        validate(&file)?;
        Ok(Self::from_parts(file.albums, file.tracks, file.playlists))
    }

    /// Read a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&text)?;
        tracing::info!(
            path = %path.display(),
            albums = catalog.albums().len(),
            tracks = catalog.tracks().len(),
            playlists = catalog.playlists().len(),
            "loaded catalog"
        );
        Ok(catalog)
    }
}

fn validate(file: &CatalogFile) -> Result<(), CatalogError> {
    unique("album", file.albums.iter().map(|a| &a.id))?;
    unique("track", file.tracks.iter().map(|t| &t.id))?;
    unique("playlist", file.playlists.iter().map(|p| &p.id))?;

    let album_ids: HashSet<&AlbumId> = file.albums.iter().map(|a| &a.id).collect();
    for track in &file.tracks {
        if track.duration == 0 {
            return Err(CatalogError::ZeroDuration(track.id.clone()));
        }
        if !album_ids.contains(&track.album_id) {
            return Err(CatalogError::UnknownAlbum {
                track: track.id.clone(),
                album: track.album_id.clone(),
            });
        }
    }

    Ok(())
}

fn unique<'a, T, I>(kind: &'static str, ids: I) -> Result<(), CatalogError>
where
    T: Eq + Hash + fmt::Display + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
