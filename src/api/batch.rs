use futures::future::join_all;
use std::sync::Arc;

use super::client::RecordSource;
use crate::state::data::ImageRecord;

/// Fetch every date concurrently and keep the successes.
///
/// All requests are in flight before any is awaited. The result follows
/// the order of `dates`, not completion order. Failed dates are logged
/// and dropped.
pub async fn fetch_batch(source: Arc<dyn RecordSource>, dates: Vec<String>) -> Vec<ImageRecord> {
    let outcomes = join_all(dates.iter().map(|date| source.fetch(date))).await;

    let records: Vec<ImageRecord> = dates
        .iter()
        .zip(outcomes)
        .filter_map(|(date, outcome)| match outcome {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(%date, error = %err, "skipping date");
                None
            }
        })
        .collect();

    tracing::info!(requested = dates.len(), received = records.len(), "batch settled");
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::state::data::MediaType;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Answers after a per-date delay; dates without a delay fail
    struct ScriptedSource {
        delays: HashMap<String, u64>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedSource {
        fn new(delays: &[(&str, u64)]) -> Self {
            Self {
                delays: delays.iter().map(|(d, ms)| (d.to_string(), *ms)).collect(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RecordSource for ScriptedSource {
        async fn fetch(&self, date: &str) -> Result<ImageRecord, FetchError> {
            self.calls.lock().unwrap().push(date.to_string());
            let Some(delay) = self.delays.get(date) else {
                return Err(FetchError::Status(reqwest::StatusCode::NOT_FOUND));
            };
            tokio::time::sleep(Duration::from_millis(*delay)).await;
            Ok(ImageRecord {
                title: format!("Picture {date}"),
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                url: format!("https://example.org/{date}.jpg"),
                media_type: MediaType::Image,
                explanation: String::new(),
                hdurl: None,
                copyright: None,
            })
        }
    }

    fn dates(list: &[&str]) -> Vec<String> {
        list.iter().map(|d| d.to_string()).collect()
    }

    fn titles(records: &[ImageRecord]) -> Vec<String> {
        records.iter().map(|r| r.title.clone()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_keeps_input_order_when_completion_is_reversed() {
        let source = Arc::new(ScriptedSource::new(&[
            ("2024-01-01", 300),
            ("2024-01-02", 200),
            ("2024-01-03", 100),
        ]));

        let records = fetch_batch(
            source.clone(),
            dates(&["2024-01-01", "2024-01-02", "2024-01-03"]),
        )
        .await;

        assert_eq!(
            titles(&records),
            vec!["Picture 2024-01-01", "Picture 2024-01-02", "Picture 2024-01-03"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_concurrently() {
        let source = Arc::new(ScriptedSource::new(&[
            ("2024-01-01", 500),
            ("2024-01-02", 500),
            ("2024-01-03", 500),
            ("2024-01-04", 500),
        ]));

        let started = tokio::time::Instant::now();
        let records = fetch_batch(
            source,
            dates(&["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"]),
        )
        .await;

        assert_eq!(records.len(), 4);
        // Bounded by the slowest request, not the sum of all four
        assert!(started.elapsed() < Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_date_is_dropped() {
        let source = Arc::new(ScriptedSource::new(&[("2024-01-01", 50), ("2024-01-03", 10)]));

        let records = fetch_batch(
            source.clone(),
            dates(&["2024-01-01", "2024-01-02", "2024-01-03"]),
        )
        .await;

        assert_eq!(titles(&records), vec!["Picture 2024-01-01", "Picture 2024-01-03"]);
        assert_eq!(source.calls.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_batch_issues_no_requests() {
        let source = Arc::new(ScriptedSource::new(&[]));
        let records = fetch_batch(source.clone(), Vec::new()).await;
        assert!(records.is_empty());
        assert!(source.calls.lock().unwrap().is_empty());
    }
}
