use super::data::ImageRecord;

/// The single full-detail overlay.
///
/// Holds a copy of the record it shows. `open` and `close` are the only
/// mutators; opening while already open replaces the record in place.
#[derive(Debug, Default)]
pub struct DetailView {
    current: Option<ImageRecord>,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, record: ImageRecord) {
        tracing::debug!(date = %record.date, "opening detail view");
        self.current = Some(record);
    }

    /// No-op when nothing is open
    pub fn close(&mut self) {
        if let Some(record) = self.current.take() {
            tracing::debug!(date = %record.date, "closing detail view");
        }
    }

    pub fn current(&self) -> Option<&ImageRecord> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
