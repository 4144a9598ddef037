// Vehicle purchase records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date layouts accepted for purchase and status dates
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%Y/%m/%d"];

/// Clearance status of a purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(alias = "cleared", alias = "CLEARED")]
    Cleared,
    #[serde(alias = "pending", alias = "PENDING")]
    Pending,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Cleared => "Cleared",
            Status::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One tracked vehicle acquisition
///
/// Dates are kept as supplied and parsed on demand, so a record with an
/// unreadable date still loads and displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: u64,
    pub purchase_date: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub vin: String,
    pub mileage_miles: u64,
    pub dealer_name: String,
    pub amount_cents: u64,
    pub status: Status,
    pub status_date: String,
    /// Days in the current status, as supplied
    pub aging_days: u32,
}

impl VehicleRecord {
    /// Purchase date as a comparable day, `None` when unparseable
    pub fn purchased_on(&self) -> Option<NaiveDate> {
        parse_date(&self.purchase_date)
    }

    pub fn status_changed_on(&self) -> Option<NaiveDate> {
        parse_date(&self.status_date)
    }

    /// `{year} {make} {model}`
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    /// Fields consulted by free-text search
    pub(crate) fn search_fields(&self) -> [&str; 4] {
        [
            self.make.as_str(),
            self.model.as_str(),
            self.dealer_name.as_str(),
            self.vin.as_str(),
        ]
    }
}

/// Parse a calendar date in any of the accepted layouts
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}
