// In-memory vehicle ledger and its derived views

use crate::filter::{SearchTerm, StatusFilter, filter_records};
use crate::jsonl;
use crate::record::VehicleRecord;
use crate::seed;
use crate::sort::{SortKey, sort_records};
use crate::stats::{Statistics, compute_statistics};
use eyre::{Context, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Message shown when a query leaves nothing visible
pub const EMPTY_VIEW_MESSAGE: &str = "No vehicles found matching your criteria";

/// Immutable collection of purchases
///
/// Statistics are computed once on construction since records never change
/// afterwards.
#[derive(Debug, Clone)]
pub struct VehicleLedger {
    records: Vec<VehicleRecord>,
    statistics: Statistics,
}

/// What the user asked to see
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LedgerQuery {
    pub search: SearchTerm,
    pub status: StatusFilter,
    pub sort: SortKey,
}

impl LedgerQuery {
    /// Build a query from raw text inputs, tolerating unknown values
    pub fn from_text(search: &str, status: &str, sort: &str) -> Self {
        Self {
            search: SearchTerm::new(search),
            status: StatusFilter::lenient(status),
            sort: SortKey::lenient(sort),
        }
    }
}

/// Statistics plus the filtered, sorted records for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerView<'a> {
    pub statistics: &'a Statistics,
    pub visible: Vec<&'a VehicleRecord>,
}

impl LedgerView<'_> {
    /// True when the renderer should show [`EMPTY_VIEW_MESSAGE`]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

impl VehicleLedger {
    /// Build a ledger, keeping the first record for each id
    pub fn new(records: Vec<VehicleRecord>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let records: Vec<VehicleRecord> = records
            .into_iter()
            .filter(|r| {
                let fresh = seen.insert(r.id);
                if !fresh {
                    warn!(id = r.id, vin = %r.vin, "Duplicate record id, keeping first occurrence");
                }
                fresh
            })
            .collect();

        let statistics = compute_statistics(&records);
        debug!(count = records.len(), "Built vehicle ledger");

        Self { records, statistics }
    }

    /// Ledger over the built-in sample purchases
    pub fn seeded() -> Self {
        Self::new(seed::sample_records())
    }

    /// Ledger over the records in a JSONL file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let records = jsonl::read_records(path).with_context(|| format!("Failed to load ledger from {}", path.display()))?;
        info!(file = ?path, count = records.len(), "Loaded vehicle ledger");
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    /// Statistics over every record, regardless of any query
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn get(&self, id: u64) -> Option<&VehicleRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Filter then sort for display
    pub fn visible_records(&self, query: &LedgerQuery) -> Vec<&VehicleRecord> {
        let all: Vec<&VehicleRecord> = self.records.iter().collect();
        let filtered = filter_records(&all, &query.search, query.status);
        sort_records(&filtered, query.sort)
    }

    pub fn view(&self, query: &LedgerQuery) -> LedgerView<'_> {
        LedgerView {
            statistics: &self.statistics,
            visible: self.visible_records(query),
        }
    }
}

/// Recompute the visible records only when the query changes
#[derive(Debug)]
pub struct ViewCache<'a> {
    ledger: &'a VehicleLedger,
    last: Option<(LedgerQuery, Vec<&'a VehicleRecord>)>,
    recomputations: usize,
}

impl<'a> ViewCache<'a> {
    pub fn new(ledger: &'a VehicleLedger) -> Self {
        Self {
            ledger,
            last: None,
            recomputations: 0,
        }
    }

    pub fn view(&mut self, query: &LedgerQuery) -> LedgerView<'a> {
        let hit = matches!(&self.last, Some((cached, _)) if cached == query);
        if hit {
            debug!(?query, "View cache hit");
        } else {
            debug!(?query, "View cache miss, recomputing");
            self.last = Some((query.clone(), self.ledger.visible_records(query)));
            self.recomputations += 1;
        }

        LedgerView {
            statistics: self.ledger.statistics(),
            visible: self.last.as_ref().map(|(_, visible)| visible.clone()).unwrap_or_default(),
        }
    }

    /// How many times the pipeline actually ran
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
