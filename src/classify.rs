//! Status classification into board columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Board lane a record is shown in. Derived from the free-text status on
/// every read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Applied,
    Interview,
    Offer,
}

impl Column {
    /// Lanes in display order.
    pub const ALL: [Column; 3] = [Column::Applied, Column::Interview, Column::Offer];

    pub fn key(self) -> &'static str {
        match self {
            Column::Applied => "applied",
            Column::Interview => "interview",
            Column::Offer => "offer",
        }
    }

    /// Status written to a record moved into this lane.
    pub fn canonical_status(self) -> &'static str {
        match self {
            Column::Applied => "Applied",
            Column::Interview => "Interview",
            Column::Offer => "Offer",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Column {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        Column::ALL
            .into_iter()
            .find(|column| column.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "unknown column '{trimmed}' (expected applied|interview|offer)"
                ))
            })
    }
}

/// Map a free-text status to its lane.
///
/// Only `interview*` and `offer*` prefixes are recognised; everything else,
/// including the empty string, lands in `Applied`.
pub fn classify(status: &str) -> Column {
    let status = status.to_lowercase();
    if status.starts_with("interview") {
        Column::Interview
    } else if status.starts_with("offer") {
        Column::Offer
    } else {
        Column::Applied
    }
}
