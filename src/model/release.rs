//! Release records and their streaming links

use super::row::{self, Row};

/// A streaming platform a release can link out to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamingPlatform {
    Spotify,
    AppleMusic,
    Bandcamp,
    Deezer,
    YouTube,
}

impl StreamingPlatform {
    /// Display order of links everywhere on the page
    pub const ALL: [StreamingPlatform; 5] = [
        Self::Spotify,
        Self::AppleMusic,
        Self::Bandcamp,
        Self::Deezer,
        Self::YouTube,
    ];

    pub fn icon(self) -> &'static str {
        match self {
            Self::Spotify => "fab fa-spotify",
            Self::AppleMusic => "fab fa-apple",
            Self::Bandcamp => "fab fa-bandcamp",
            Self::Deezer => "fab fa-deezer",
            Self::YouTube => "fab fa-youtube",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Spotify => "Spotify",
            Self::AppleMusic => "Apple Music",
            Self::Bandcamp => "Bandcamp",
            Self::Deezer => "Deezer",
            Self::YouTube => "YouTube",
        }
    }

    /// Column names holding this platform's URL, newest name first
    fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Spotify => &["spotify_url", "spotify"],
            Self::AppleMusic => &["apple_url", "apple_music"],
            Self::Bandcamp => &["bandcamp_url"],
            Self::Deezer => &["deezer_url"],
            Self::YouTube => &["youtube"],
        }
    }
}

/// Per-platform URLs of one release; `None` means no link
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamingUrls {
    pub spotify: Option<String>,
    pub apple_music: Option<String>,
    pub bandcamp: Option<String>,
    pub deezer: Option<String>,
    pub youtube: Option<String>,
}

impl StreamingUrls {
    pub fn get(&self, platform: StreamingPlatform) -> Option<&str> {
        match platform {
            StreamingPlatform::Spotify => self.spotify.as_deref(),
            StreamingPlatform::AppleMusic => self.apple_music.as_deref(),
            StreamingPlatform::Bandcamp => self.bandcamp.as_deref(),
            StreamingPlatform::Deezer => self.deezer.as_deref(),
            StreamingPlatform::YouTube => self.youtube.as_deref(),
        }
    }

    /// Every candidate in display order, present or not
    pub fn candidates(&self) -> impl Iterator<Item = (Option<&str>, StreamingPlatform)> {
        StreamingPlatform::ALL
            .into_iter()
            .map(move |platform| (self.get(platform), platform))
    }

    /// Only the links that should actually be rendered
    pub fn present(&self) -> impl Iterator<Item = (&str, StreamingPlatform)> {
        self.candidates()
            .filter_map(|(url, platform)| url.map(|url| (url, platform)))
    }
}

/// A published work, snapshotted at fetch time
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Release {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub artwork_url: Option<String>,
    pub release_date: Option<String>,
    pub links: StreamingUrls,
}

impl Release {
    pub fn from_row(row: &Row) -> Self {
        let url = |platform: StreamingPlatform| row::first_present(row, platform.columns());

        Self {
            id: row::identifier(row),
            title: row::first_present(row, &["title"]).unwrap_or_default(),
            description: row::first_present(row, &["description"]),
            artwork_url: row::first_present(row, &["artwork_url", "cover_url"]),
            release_date: row::first_present(row, &["release_date"]),
            links: StreamingUrls {
                spotify: url(StreamingPlatform::Spotify),
                apple_music: url(StreamingPlatform::AppleMusic),
                bandcamp: url(StreamingPlatform::Bandcamp),
                deezer: url(StreamingPlatform::Deezer),
                youtube: url(StreamingPlatform::YouTube),
            },
        }
    }
}
