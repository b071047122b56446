/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the API layer and the UI layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of media a record points at
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    /// Anything the API may add later. Rendered like a video.
    #[serde(other)]
    Other,
}

impl MediaType {
    /// True when the url can be downloaded and shown as a picture
    pub fn is_image(self) -> bool {
        self == MediaType::Image
    }
}

/// One day's entry from the picture-of-the-day API
///
/// Passed through unchanged from the response body to the tile
/// and from the tile to the detail overlay.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub title: String,
    pub date: NaiveDate,
    /// Media url (sized for the web for images, embed url for videos)
    pub url: String,
    pub media_type: MediaType,
    pub explanation: String,
    /// High-resolution variant, only present for some images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}
