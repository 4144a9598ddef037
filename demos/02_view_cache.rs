//! Demo 02: View cache
//!
//! This demo shows that repeated reads with an unchanged query reuse the
//! previously computed view.
//!
//! Run with: cargo run --example 02_view_cache

use vehicle_ledger::{LedgerQuery, VehicleLedger, ViewCache};

fn main() {
    let ledger = VehicleLedger::seeded();
    let mut cache = ViewCache::new(&ledger);

    println!("Vehicle Ledger View Cache Demo");
    println!("==============================\n");

    let by_aging = LedgerQuery::from_text("", "all", "aging");
    let by_amount = LedgerQuery::from_text("", "all", "amount");

    for query in [&by_aging, &by_aging, &by_amount, &by_amount, &by_aging] {
        let view = cache.view(query);
        let ids: Vec<u64> = view.visible.iter().map(|r| r.id).collect();
        println!("sort={:<7} ids={:?} recomputations={}", query.sort.as_str(), ids, cache.recomputations());
    }
}
