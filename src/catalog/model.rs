//! Catalog model types: `Track`, `Album`, `Playlist` and the `Catalog` index.

use std::fmt;

use serde::Deserialize;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

string_id!(
    /// Stable identifier of a track. Queue lookups compare these by value.
    TrackId
);
string_id!(
    /// Identifier of an album.
    AlbumId
);
string_id!(
    /// Identifier of a playlist.
    PlaylistId
);

/// Encoding label shown next to a track.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub enum Quality {
    #[serde(rename = "FLAC", alias = "flac")]
    Flac,
    #[serde(rename = "WAV", alias = "wav")]
    Wav,
    #[serde(rename = "MP3", alias = "mp3")]
    Mp3,
    #[serde(rename = "320kbps")]
    Kbps320,
}

impl Quality {
    pub fn label(self) -> &'static str {
        match self {
            Self::Flac => "FLAC",
            Self::Wav => "WAV",
            Self::Mp3 => "MP3",
            Self::Kbps320 => "320kbps",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single playable item with fixed metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub album_id: AlbumId,
    /// Length in whole seconds, always > 0.
    pub duration: u32,
    pub quality: Quality,
    pub artwork_url: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
}

impl Track {
    /// `"Artist - Title"`, used by list rows.
    pub fn display(&self) -> String {
        let artist = self.artist.trim();
        if artist.is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", artist, self.title)
        }
    }
}

/// Album metadata. `track_count` and `duration` are the advertised values,
/// not derived from the tracks present in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub artwork_url: String,
    pub year: u16,
    pub genre: String,
    pub track_count: u32,
    pub duration: u32,
    pub quality: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub track_count: u32,
    pub artwork_url: String,
    #[serde(default)]
    pub tracks: Vec<TrackId>,
}

/// Albums and tracks matching a search query, in catalog order.
#[derive(Debug, Default)]
pub struct SearchResults<'a> {
    pub albums: Vec<&'a Album>,
    pub tracks: Vec<&'a Track>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty() && self.tracks.is_empty()
    }
}

/// Read-only index over albums, tracks and playlists.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    albums: Vec<Album>,
    tracks: Vec<Track>,
    playlists: Vec<Playlist>,
}

const RECENTLY_PLAYED: std::ops::Range<usize> = 0..6;
const RECENTLY_ADDED: std::ops::Range<usize> = 3..9;

impl Catalog {
    /// Build a catalog without validation. Use `Catalog::from_toml_str` for
    /// untrusted input.
    pub fn from_parts(albums: Vec<Album>, tracks: Vec<Track>, playlists: Vec<Playlist>) -> Self {
        Self {
            albums,
            tracks,
            playlists,
        }
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn track(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| &t.id == id)
    }

    pub fn album(&self, id: &AlbumId) -> Option<&Album> {
        self.albums.iter().find(|a| &a.id == id)
    }

    pub fn playlist(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == id)
    }

    /// Tracks belonging to `id`, in catalog order.
    pub fn album_tracks(&self, id: &AlbumId) -> Vec<&Track> {
        self.tracks.iter().filter(|t| &t.album_id == id).collect()
    }

    /// Tracks of a playlist in playlist order. Identifiers that do not
    /// resolve are skipped.
    pub fn playlist_tracks(&self, id: &PlaylistId) -> Vec<&Track> {
        self.playlist(id)
            .map(|p| p.tracks.iter().filter_map(|tid| self.track(tid)).collect())
            .unwrap_or_default()
    }

    /// Home shelf: the first six albums.
    pub fn recently_played(&self) -> &[Album] {
        self.shelf(RECENTLY_PLAYED)
    }

    /// Home shelf: albums four through nine.
    pub fn recently_added(&self) -> &[Album] {
        self.shelf(RECENTLY_ADDED)
    }

    fn shelf(&self, range: std::ops::Range<usize>) -> &[Album] {
        let end = range.end.min(self.albums.len());
        let start = range.start.min(end);
        &self.albums[start..end]
    }

    /// Case-insensitive substring match on title and artist.
    ///
    /// An empty query matches everything; callers decide whether to show
    /// results for it.
    pub fn search(&self, query: &str) -> SearchResults<'_> {
        let needle = query.to_lowercase();
        let hit = |title: &str, artist: &str| {
            title.to_lowercase().contains(&needle) || artist.to_lowercase().contains(&needle)
        };

        SearchResults {
            albums: self
                .albums
                .iter()
                .filter(|a| hit(&a.title, &a.artist))
                .collect(),
            tracks: self
                .tracks
                .iter()
                .filter(|t| hit(&t.title, &t.artist))
                .collect(),
        }
    }
}
