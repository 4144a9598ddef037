//! Demo 01: Dashboard
//!
//! This demo builds a ledger from the built-in sample purchases and renders
//! the dashboard for a few queries.
//!
//! Run with: cargo run --example 01_dashboard

use vehicle_ledger::{LedgerQuery, VehicleLedger, render};

fn main() {
    let ledger = VehicleLedger::seeded();

    println!("Vehicle Ledger Dashboard Demo");
    println!("=============================\n");

    let queries = [
        ("All vehicles, most recent first", LedgerQuery::default()),
        ("Cleared only", LedgerQuery::from_text("", "cleared", "date")),
        ("Chevrolets by amount", LedgerQuery::from_text("chevrolet", "all", "amount")),
        ("Nothing matches", LedgerQuery::from_text("tesla", "all", "date")),
    ];

    for (title, query) in queries {
        println!("--- {} ---\n", title);
        print!("{}", render::render_dashboard(&ledger.view(&query)));
        println!();
    }
}
