use chrono::NaiveDate;
use std::collections::HashMap;

use super::data::ImageRecord;
use super::range::{build_date_range, parse_input};
use crate::api::media::Preview;
use crate::error::{DateField, GalleryError};

/// What the gallery area currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryView {
    /// Nothing requested yet
    Idle,
    Loading,
    /// A batch could not be started; no partial gallery
    Failed(String),
    /// Empty or reversed range, or every date failed
    Empty,
    Loaded(Vec<ImageRecord>),
}

/// Thumbnail state for one image record
#[derive(Debug, Clone)]
pub enum PreviewSlot {
    Ready(Preview),
    Unavailable,
}

/// Outcome of a fetch trigger that passed input checks
#[derive(Debug, PartialEq)]
pub enum FetchPlan {
    /// Requests to issue, tagged with the cycle they belong to
    Fetch { generation: u64, dates: Vec<String> },
    /// Nothing to request; the view already shows the final state
    Settled,
}

/// Gallery contents, replaced wholesale on every fetch cycle.
///
/// Each cycle bumps `generation`; completions carrying an older
/// generation belong to a superseded cycle and are ignored.
#[derive(Debug)]
pub struct GalleryState {
    view: GalleryView,
    generation: u64,
    previews: HashMap<NaiveDate, PreviewSlot>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            view: GalleryView::Idle,
            generation: 0,
            previews: HashMap::new(),
        }
    }
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &GalleryView {
        &self.view
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn preview(&self, date: NaiveDate) -> Option<&PreviewSlot> {
        self.previews.get(&date)
    }

    /// Start a new cycle from the raw input values.
    ///
    /// A missing date is returned as an error and leaves the gallery
    /// untouched. Any other problem is rendered as the error placeholder.
    pub fn begin(&mut self, start: &str, end: &str) -> Result<FetchPlan, GalleryError> {
        if start.trim().is_empty() {
            return Err(GalleryError::MissingDate(DateField::Start));
        }
        if end.trim().is_empty() {
            return Err(GalleryError::MissingDate(DateField::End));
        }

        self.generation += 1;
        self.previews.clear();

        let dates = match parse_input(DateField::Start, start)
            .and_then(|start| Ok((start, parse_input(DateField::End, end)?)))
        {
            Ok((start, end)) => build_date_range(start, end),
            Err(err) => {
                tracing::error!(error = %err, "could not build date range");
                self.view = GalleryView::Failed(err.to_string());
                return Ok(FetchPlan::Settled);
            }
        };

        if dates.is_empty() {
            tracing::info!("date range is empty, nothing to fetch");
            self.view = GalleryView::Empty;
            return Ok(FetchPlan::Settled);
        }

        tracing::info!(generation = self.generation, count = dates.len(), "starting batch");
        self.view = GalleryView::Loading;
        Ok(FetchPlan::Fetch {
            generation: self.generation,
            dates,
        })
    }

    /// Install a finished batch. Returns false if the batch was superseded.
    pub fn complete(&mut self, generation: u64, records: Vec<ImageRecord>) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "dropping stale batch");
            return false;
        }

        self.view = if records.is_empty() {
            GalleryView::Empty
        } else {
            GalleryView::Loaded(records)
        };
        true
    }

    /// Image records of the current cycle, as (date, url) pairs to download
    pub fn pending_previews(&self) -> Vec<(NaiveDate, String)> {
        match &self.view {
            GalleryView::Loaded(records) => records
                .iter()
                .filter(|r| r.media_type.is_image() && !self.previews.contains_key(&r.date))
                .map(|r| (r.date, r.url.clone()))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Store a thumbnail result. Returns false if it belongs to an old cycle.
    pub fn attach_preview(&mut self, generation: u64, date: NaiveDate, slot: PreviewSlot) -> bool {
        if generation != self.generation {
            return false;
        }
        self.previews.insert(date, slot);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::MediaType;

    fn record(date: &str, media_type: MediaType) -> ImageRecord {
        ImageRecord {
            title: format!("Picture {date}"),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            url: format!("https://example.org/{date}.jpg"),
            media_type,
            explanation: String::new(),
            hdurl: None,
            copyright: None,
        }
    }

    #[test]
    fn test_starts_idle() {
        let state = GalleryState::new();
        assert_eq!(state.view(), &GalleryView::Idle);
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn test_missing_end_leaves_gallery_unchanged() {
        let mut state = GalleryState::new();
        state.begin("2024-01-01", "2024-01-01").unwrap();
        state.complete(1, vec![record("2024-01-01", MediaType::Image)]);
        let before = state.view().clone();

        let err = state.begin("2024-01-01", "").unwrap_err();
        assert!(matches!(err, GalleryError::MissingDate(DateField::End)));
        assert_eq!(state.view(), &before);
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_missing_start_is_reported_first() {
        let mut state = GalleryState::new();
        let err = state.begin("  ", "").unwrap_err();
        assert!(matches!(err, GalleryError::MissingDate(DateField::Start)));
        assert_eq!(state.view(), &GalleryView::Idle);
    }

    #[test]
    fn test_reversed_range_settles_empty() {
        let mut state = GalleryState::new();
        let plan = state.begin("2024-03-05", "2024-02-28").unwrap();
        assert_eq!(plan, FetchPlan::Settled);
        assert_eq!(state.view(), &GalleryView::Empty);
    }

    #[test]
    fn test_invalid_date_shows_error() {
        let mut state = GalleryState::new();
        let plan = state.begin("2024-01-01", "tomorrow").unwrap();
        assert_eq!(plan, FetchPlan::Settled);
        assert!(matches!(state.view(), GalleryView::Failed(msg) if msg.contains("tomorrow")));
    }

    #[test]
    fn test_fetch_plan_and_completion() {
        let mut state = GalleryState::new();
        let plan = state.begin("2024-01-01", "2024-01-03").unwrap();
        assert_eq!(
            plan,
            FetchPlan::Fetch {
                generation: 1,
                dates: vec![
                    "2024-01-01".to_string(),
                    "2024-01-02".to_string(),
                    "2024-01-03".to_string()
                ],
            }
        );
        assert_eq!(state.view(), &GalleryView::Loading);

        let records = vec![
            record("2024-01-01", MediaType::Image),
            record("2024-01-03", MediaType::Video),
        ];
        assert!(state.complete(1, records.clone()));
        assert_eq!(state.view(), &GalleryView::Loaded(records));
    }

    #[test]
    fn test_all_failed_is_empty() {
        let mut state = GalleryState::new();
        state.begin("2024-01-01", "2024-01-02").unwrap();
        assert!(state.complete(1, Vec::new()));
        assert_eq!(state.view(), &GalleryView::Empty);
    }

    #[test]
    fn test_latest_cycle_wins() {
        let mut state = GalleryState::new();
        state.begin("2024-01-01", "2024-01-01").unwrap();
        state.begin("2024-02-01", "2024-02-01").unwrap();

        let newer = vec![record("2024-02-01", MediaType::Image)];
        assert!(state.complete(2, newer.clone()));
        assert!(!state.complete(1, vec![record("2024-01-01", MediaType::Image)]));
        assert_eq!(state.view(), &GalleryView::Loaded(newer));
    }

    #[test]
    fn test_pending_previews_only_for_images() {
        let mut state = GalleryState::new();
        state.begin("2024-01-01", "2024-01-03").unwrap();
        state.complete(
            1,
            vec![
                record("2024-01-01", MediaType::Image),
                record("2024-01-02", MediaType::Video),
                record("2024-01-03", MediaType::Other),
            ],
        );

        let pending = state.pending_previews();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].1, "https://example.org/2024-01-01.jpg");

        let date = pending[0].0;
        assert!(state.attach_preview(1, date, PreviewSlot::Unavailable));
        assert!(state.pending_previews().is_empty());
        assert!(matches!(state.preview(date), Some(PreviewSlot::Unavailable)));
    }

    #[test]
    fn test_stale_preview_is_dropped() {
        let mut state = GalleryState::new();
        state.begin("2024-01-01", "2024-01-01").unwrap();
        state.begin("2024-01-01", "2024-01-01").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(!state.attach_preview(1, date, PreviewSlot::Unavailable));
        assert!(state.preview(date).is_none());
    }
}
