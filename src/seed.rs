// Built-in sample purchases

use crate::record::{Status, VehicleRecord};

/// The four purchases the dashboard ships with
pub fn sample_records() -> Vec<VehicleRecord> {
    vec![
        VehicleRecord {
            id: 1,
            purchase_date: "9/2/2025".to_string(),
            year: 2019,
            make: "JEEP".to_string(),
            model: "GRAND CHEROKEE SRT".to_string(),
            vin: "1C4RJFDJ9KC551524".to_string(),
            mileage_miles: 44_500,
            dealer_name: "UNDER THE BRIDGE".to_string(),
            amount_cents: 2_920_000,
            status: Status::Cleared,
            status_date: "2025-09-02".to_string(),
            aging_days: 33,
        },
        VehicleRecord {
            id: 2,
            purchase_date: "9/4/2025".to_string(),
            year: 2025,
            make: "Chevrolet".to_string(),
            model: "Malibu".to_string(),
            vin: "1G1ZD5STXSF118372".to_string(),
            mileage_miles: 12_500,
            dealer_name: "N&J AUTO SALES".to_string(),
            amount_cents: 1_490_000,
            status: Status::Cleared,
            status_date: "2025-09-04".to_string(),
            aging_days: 31,
        },
        VehicleRecord {
            id: 3,
            purchase_date: "9/4/2025".to_string(),
            year: 2023,
            make: "Chevrolet".to_string(),
            model: "Traverse".to_string(),
            vin: "1GNEVKKW7PJ167939".to_string(),
            mileage_miles: 4_000,
            dealer_name: "S&I AUTO SALES INC".to_string(),
            amount_cents: 2_600_000,
            status: Status::Cleared,
            status_date: "2025-09-04".to_string(),
            aging_days: 31,
        },
        VehicleRecord {
            id: 4,
            purchase_date: "9/11/2025".to_string(),
            year: 2023,
            make: "Cadillac".to_string(),
            model: "XT4".to_string(),
            vin: "1GYFZDR4GPF125772".to_string(),
            mileage_miles: 12_500,
            dealer_name: "TRUBLUE".to_string(),
            amount_cents: 2_050_000,
            status: Status::Pending,
            status_date: "2025-09-11".to_string(),
            aging_days: 24,
        },
    ]
}
