// Ordering of visible records

use crate::record::VehicleRecord;
use eyre::{Report, eyre};
use std::borrow::Borrow;
use std::cmp::Reverse;
use std::str::FromStr;
use tracing::warn;

/// Display order for the visible records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Most recent purchase first, unreadable dates last
    #[default]
    Date,
    /// Largest amount first
    Amount,
    /// Fewest aging days first
    Aging,
    /// Input order, untouched
    Insertion,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Amount => "amount",
            SortKey::Aging => "aging",
            SortKey::Insertion => "insertion",
        }
    }

    /// Parse, falling back to `Insertion` for anything unrecognized
    pub fn lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|e| {
            warn!(value = raw, error = %e, "Unknown sort key, keeping input order");
            SortKey::Insertion
        })
    }
}

impl FromStr for SortKey {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "amount" => Ok(SortKey::Amount),
            "aging" => Ok(SortKey::Aging),
            "insertion" | "none" => Ok(SortKey::Insertion),
            other => Err(eyre!("Unknown sort key: {}", other)),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Return a reordered copy of `records`
///
/// The sort is stable: records with equal keys keep their relative input order.
pub fn sort_records<R>(records: &[R], key: SortKey) -> Vec<R>
where
    R: Borrow<VehicleRecord> + Clone,
{
    let mut sorted = records.to_vec();
    match key {
        SortKey::Date => sorted.sort_by_cached_key(|r| {
            let purchased = Borrow::<VehicleRecord>::borrow(r).purchased_on();
            (purchased.is_none(), Reverse(purchased))
        }),
        SortKey::Amount => sorted.sort_by_key(|r| Reverse(Borrow::<VehicleRecord>::borrow(r).amount_cents)),
        SortKey::Aging => sorted.sort_by_key(|r| Borrow::<VehicleRecord>::borrow(r).aging_days),
        SortKey::Insertion => {}
    }
    sorted
}
