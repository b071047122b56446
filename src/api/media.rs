/// Picture download and thumbnail generation
///
/// Each image record's url is downloaded once. The bytes are decoded and
/// resized to a grid thumbnail on a blocking thread, and kept as-is for
/// the full-size overlay.

use iced::widget::image::Handle;
use image::imageops::FilterType;
use reqwest::Client;

use crate::error::MediaError;

/// Size of generated thumbnails (square bound)
pub const THUMBNAIL_SIZE: u32 = 256;

/// Decoded picture ready for display
#[derive(Debug, Clone)]
pub struct Preview {
    /// Downscaled RGBA for the gallery tile
    pub thumbnail: Handle,
    /// Original bytes for the overlay
    pub full: Handle,
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
}

/// Download a picture and build its preview
pub async fn load_preview(http: Client, url: String) -> Result<Preview, MediaError> {
    let bytes = http.get(&url).send().await?.error_for_status()?.bytes().await?;
    let bytes = bytes.to_vec();

    tracing::debug!(size_kb = bytes.len() / 1024, "downloaded picture");

    // Spawn blocking task for CPU-bound work
    tokio::task::spawn_blocking(move || decode_preview(bytes)).await?
}

/// Decode picture bytes and build the thumbnail
pub fn decode_preview(bytes: Vec<u8>) -> Result<Preview, MediaError> {
    let img = image::load_from_memory(&bytes)?;
    let thumbnail = img
        .resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3)
        .to_rgba8();

    let (thumbnail_width, thumbnail_height) = thumbnail.dimensions();

    Ok(Preview {
        thumbnail: Handle::from_rgba(thumbnail_width, thumbnail_height, thumbnail.into_raw()),
        full: Handle::from_bytes(bytes),
        thumbnail_width,
        thumbnail_height,
    })
}
