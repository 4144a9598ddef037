// Aggregate statistics over the full record collection

use crate::record::{Status, VehicleRecord};
use serde::Serialize;
use std::borrow::Borrow;

/// Summary counters shown above the record list
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub cleared_count: usize,
    pub pending_count: usize,
    /// Wide enough that summing any number of `u64` amounts cannot overflow
    pub total_amount_cents: u128,
    /// `None` when there are no records to average over
    pub average_amount_cents: Option<f64>,
}

/// Count and sum over every record given
pub fn compute_statistics<R: Borrow<VehicleRecord>>(records: &[R]) -> Statistics {
    let mut stats = records.iter().fold(Statistics::default(), |mut acc, r| {
        let record: &VehicleRecord = r.borrow();
        acc.total += 1;
        match record.status {
            Status::Cleared => acc.cleared_count += 1,
            Status::Pending => acc.pending_count += 1,
        }
        acc.total_amount_cents += u128::from(record.amount_cents);
        acc
    });

    if stats.total > 0 {
        stats.average_amount_cents = Some(stats.total_amount_cents as f64 / stats.total as f64);
    }
    stats
}
