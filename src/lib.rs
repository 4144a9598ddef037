// VehicleLedger - Filtering, sorting and statistics over vehicle purchase records

pub mod config;
pub mod filter;
pub mod jsonl;
pub mod ledger;
pub mod record;
pub mod render;
pub mod seed;
pub mod sort;
pub mod stats;

// Re-export main types for convenience
pub use config::LedgerConfig;
pub use filter::{SearchTerm, StatusFilter, filter_records};
pub use ledger::{EMPTY_VIEW_MESSAGE, LedgerQuery, LedgerView, VehicleLedger, ViewCache};
pub use record::{Status, VehicleRecord};
pub use sort::{SortKey, sort_records};
pub use stats::{Statistics, compute_statistics};
