/// Rendering module
///
/// - `gallery.rs` builds the tile grid and the placeholders
/// - `detail.rs` builds the full-detail overlay
/// - `notify.rs` shows blocking notifications

pub mod detail;
pub mod gallery;
pub mod notify;
