//! Ordering of the supplementary-information feed shown on a detail page.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::model::InfoEntry;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses the date shapes the backend emits.
///
/// Accepts RFC 3339 (`2024-05-10T12:00:00Z`), naive date-times with `T` or
/// a space separator, and plain dates (midnight UTC). Naive values are
/// taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Returns the entries sorted newest first.
///
/// The sort is stable: entries with equal timestamps keep their input
/// order. Entries whose date cannot be parsed go last.
pub fn sort_newest_first(entries: &[InfoEntry]) -> Vec<InfoEntry> {
    let mut keyed: Vec<(Option<DateTime<Utc>>, InfoEntry)> = entries
        .iter()
        .map(|e| (parse_timestamp(&e.date), e.clone()))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));
    keyed.into_iter().map(|(_, e)| e).collect()
}

/// Puts a freshly accepted entry at the top of the current feed.
pub fn prepend(feed: &[InfoEntry], entry: InfoEntry) -> Vec<InfoEntry> {
    let mut out = Vec::with_capacity(feed.len() + 1);
    out.push(entry);
    out.extend_from_slice(feed);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, date: &str) -> InfoEntry {
        InfoEntry {
            occurrence_id: 1,
            text: format!("info {id}"),
            date: date.to_string(),
            id,
            attachments: Vec::new(),
        }
    }

    fn ids(entries: &[InfoEntry]) -> Vec<u64> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn parses_supported_shapes() {
        assert!(parse_timestamp("2024-05-10").is_some());
        assert!(parse_timestamp("2024-05-10T08:30:00").is_some());
        assert!(parse_timestamp("2024-05-10T08:30:00.123").is_some());
        assert!(parse_timestamp("2024-05-10 08:30:00").is_some());
        assert!(parse_timestamp("2024-05-10T08:30:00-04:00").is_some());
        assert!(parse_timestamp("10/05/2024").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn offset_is_normalised_to_utc() {
        let a = parse_timestamp("2024-05-10T08:00:00-04:00").unwrap();
        let b = parse_timestamp("2024-05-10T12:00:00Z").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sorts_descending_by_date() {
        let feed = vec![
            entry(1, "2024-01-01"),
            entry(2, "2024-03-01T10:00:00"),
            entry(3, "2024-02-15"),
        ];
        assert_eq!(ids(&sort_newest_first(&feed)), vec![2, 3, 1]);
    }

    #[test]
    fn equal_dates_keep_input_order() {
        let feed = vec![
            entry(1, "2024-01-01"),
            entry(2, "2024-01-01T00:00:00"),
            entry(3, "2024-01-01"),
        ];
        assert_eq!(ids(&sort_newest_first(&feed)), vec![1, 2, 3]);
    }

    #[test]
    fn unparseable_dates_sort_last() {
        let feed = vec![entry(1, "sem data"), entry(2, "2020-01-01"), entry(3, "")];
        assert_eq!(ids(&sort_newest_first(&feed)), vec![2, 1, 3]);
    }

    #[test]
    fn input_is_not_mutated() {
        let feed = vec![entry(1, "2020-01-01"), entry(2, "2021-01-01")];
        let _ = sort_newest_first(&feed);
        assert_eq!(ids(&feed), vec![1, 2]);
    }

    #[test]
    fn prepend_puts_new_entry_first() {
        let feed = vec![entry(1, "2024-01-01"), entry(2, "2023-01-01")];
        let updated = prepend(&feed, entry(9, "2020-01-01"));
        assert_eq!(ids(&updated), vec![9, 1, 2]);
    }
}
