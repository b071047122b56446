/// Error types shared across the gallery
///
/// Each layer owns one enum:
/// - `GalleryError` for problems with the user's date input
/// - `FetchError` for a single failed record request
/// - `MediaError` for thumbnail download and decoding
/// - `ConfigError` for the optional config file

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two date inputs a problem refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateField::Start => write!(f, "start date"),
            DateField::End => write!(f, "end date"),
        }
    }
}

/// Errors raised before a fetch cycle starts
#[derive(Debug, Error)]
pub enum GalleryError {
    /// One of the date inputs is empty. Reported to the user, never rendered.
    #[error("Please select both a start and an end date (missing {0}).")]
    MissingDate(DateField),

    /// A date input could not be parsed as `YYYY-MM-DD`
    #[error("'{input}' is not a valid {field} (expected YYYY-MM-DD)")]
    InvalidDate {
        field: DateField,
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Why one date's record could not be retrieved
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS or body-read failure. The URL is stripped so the
    /// API key in the query string never reaches a log line.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("server responded with {0}")]
    Status(reqwest::StatusCode),

    /// The body was not a record with the expected fields
    #[error("unexpected response body: {0}")]
    Body(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.without_url())
    }
}

/// Thumbnail download and decode failures
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("download failed: {0}")]
    Download(#[source] reqwest::Error),

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("decode task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<reqwest::Error> for MediaError {
    fn from(err: reqwest::Error) -> Self {
        MediaError::Download(err.without_url())
    }
}

/// Config file failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
