//! Date ordering for job records.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::JobRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Newest,
    Oldest,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Newest => "newest",
            SortDirection::Oldest => "oldest",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Newest => SortDirection::Oldest,
            SortDirection::Oldest => SortDirection::Newest,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortDirection::Newest),
            "oldest" => Ok(SortDirection::Oldest),
            other => Err(Error::InvalidArgument(format!(
                "unknown sort direction '{other}' (expected newest|oldest)"
            ))),
        }
    }
}

/// Parse an ISO-ish date. Accepts `YYYY-MM-DD`, RFC 3339 timestamps and
/// naive `YYYY-MM-DDTHH:MM:SS`; only the calendar date is kept.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .map(|stamp| stamp.date())
}

fn record_date(record: &JobRecord) -> Option<NaiveDate> {
    record.date.as_deref().and_then(parse_date)
}

/// Compare two optional dates. Undated sorts after dated in both directions.
fn compare_dates(
    left: Option<NaiveDate>,
    right: Option<NaiveDate>,
    direction: SortDirection,
) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => match direction {
            SortDirection::Newest => right.cmp(&left),
            SortDirection::Oldest => left.cmp(&right),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort by date. Records with missing or unparseable dates go
/// last; ties keep their input order.
pub fn sort_by_date(records: &mut [JobRecord], direction: SortDirection) {
    // Parse once per record instead of once per comparison.
    let mut keyed: Vec<(Option<NaiveDate>, JobRecord)> = records
        .iter()
        .map(|record| (record_date(record), record.clone()))
        .collect();
    keyed.sort_by(|left, right| compare_dates(left.0, right.0, direction));
    for (slot, (_, record)) in records.iter_mut().zip(keyed) {
        *slot = record;
    }
}

/// Sorted copy of `records`.
pub fn sorted_by_date(records: &[JobRecord], direction: SortDirection) -> Vec<JobRecord> {
    let mut sorted = records.to_vec();
    sort_by_date(&mut sorted, direction);
    sorted
}
