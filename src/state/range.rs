/// Date range expansion
///
/// Turns the two date inputs into the list of calendar days to request.

use chrono::NaiveDate;

use crate::error::{DateField, GalleryError};

/// Most days requested in one batch
pub const MAX_DATES: usize = 9;

/// Format used by the date inputs and the API's `date` parameter
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse one date input. Empty input is a missing date, not a parse failure.
pub fn parse_input(field: DateField, input: &str) -> Result<NaiveDate, GalleryError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(GalleryError::MissingDate(field));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| GalleryError::InvalidDate {
        field,
        input: input.to_string(),
        source,
    })
}

/// Every day from `start` to `end` inclusive, capped at [`MAX_DATES`].
///
/// A reversed range yields nothing.
pub fn build_date_range(start: NaiveDate, end: NaiveDate) -> Vec<String> {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .take(MAX_DATES)
        .map(|day| day.format(DATE_FORMAT).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_three_day_range() {
        let dates = build_date_range(date("2024-01-01"), date("2024-01-03"));
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn test_single_day() {
        let dates = build_date_range(date("2024-02-29"), date("2024-02-29"));
        assert_eq!(dates, vec!["2024-02-29"]);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        assert!(build_date_range(date("2024-03-05"), date("2024-02-28")).is_empty());
    }

    #[test]
    fn test_capped_at_nine() {
        let dates = build_date_range(date("2023-12-28"), date("2024-02-01"));
        assert_eq!(dates.len(), MAX_DATES);
        assert_eq!(dates.first().map(String::as_str), Some("2023-12-28"));
        assert_eq!(dates.last().map(String::as_str), Some("2024-01-05"));
    }

    #[test]
    fn test_lengths_and_steps() {
        let start = date("2024-02-25");
        for span in 0..15i64 {
            let end = start + chrono::Duration::days(span);
            let dates = build_date_range(start, end);
            assert_eq!(dates.len(), ((span + 1) as usize).min(MAX_DATES));
            assert_eq!(dates[0], "2024-02-25");

            let parsed: Vec<NaiveDate> = dates.iter().map(|d| date(d)).collect();
            for pair in parsed.windows(2) {
                assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
            }
        }
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input(DateField::Start, " 2024-01-01 ").unwrap(), date("2024-01-01"));
        assert!(matches!(
            parse_input(DateField::End, "   "),
            Err(GalleryError::MissingDate(DateField::End))
        ));
        assert!(matches!(
            parse_input(DateField::Start, "01/02/2024"),
            Err(GalleryError::InvalidDate { field: DateField::Start, .. })
        ));
    }
}
