/// Network access module
///
/// This module handles:
/// - Requesting one day's record from the picture-of-the-day API
/// - Fanning a date range out into concurrent requests
/// - Downloading pictures and generating thumbnails

pub mod batch;
pub mod client;
pub mod media;

pub use batch::fetch_batch;
pub use client::{ApodClient, RecordSource};
