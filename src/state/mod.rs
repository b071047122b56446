/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Date range expansion (range.rs)
/// - Gallery contents and fetch cycles (gallery.rs)
/// - The detail overlay (detail.rs)

pub mod data;
pub mod detail;
pub mod gallery;
pub mod range;
