// JSONL loading of vehicle records

use crate::record::VehicleRecord;
use eyre::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Read one record per line, in file order
///
/// Blank lines are ignored. Lines that fail to read or parse are skipped with
/// a warning; only failing to open the file is an error.
pub fn read_records(path: &Path) -> Result<Vec<VehicleRecord>> {
    let file = File::open(path).with_context(|| format!("Failed to open JSONL file {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(
                    file = ?path,
                    line = line_num + 1,
                    error = ?e,
                    "Failed to read line, skipping"
                );
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<VehicleRecord>(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(
                    file = ?path,
                    line = line_num + 1,
                    error = ?e,
                    "Failed to parse JSON, skipping"
                );
            }
        }
    }

    info!(file = ?path, count = records.len(), "Loaded records from JSONL");

    Ok(records)
}

/// Serialize records as JSONL text
pub fn to_jsonl(records: &[&VehicleRecord]) -> Result<String> {
    let mut out = String::new();
    for record in records {
        let json = serde_json::to_string(record).context("Failed to serialize record")?;
        out.push_str(&json);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_records;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_records_preserves_order() {
        let temp = TempDir::new().unwrap();
        let jsonl_path = temp.path().join("vehicles.jsonl");

        let records = sample_records();
        let refs: Vec<&VehicleRecord> = records.iter().rev().collect();
        fs::write(&jsonl_path, to_jsonl(&refs).unwrap()).unwrap();

        let loaded = read_records(&jsonl_path).unwrap();
        let ids: Vec<u64> = loaded.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
        assert_eq!(loaded[3], records[0]);
    }

    #[test]
    fn test_read_records_nonexistent_file() {
        let temp = TempDir::new().unwrap();
        let jsonl_path = temp.path().join("nonexistent.jsonl");

        let err = read_records(&jsonl_path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to open JSONL file"));
    }

    #[test]
    fn test_read_records_skips_malformed_and_blank_lines() {
        let temp = TempDir::new().unwrap();
        let jsonl_path = temp.path().join("vehicles.jsonl");

        fs::write(
            &jsonl_path,
            r#"{"id":7,"purchase_date":"10/1/2025","year":2020,"make":"Ford","model":"F-150","vin":"1FTEW1E5XLFA00001","mileage_miles":30000,"dealer_name":"LOT 9","amount_cents":3100000,"status":"Pending","status_date":"2025-10-01","aging_days":5}
{malformed json}

{"id":8,"purchase_date":"10/2/2025","year":2021,"make":"Honda","model":"Civic","vin":"2HGFC2F5XMH000002","mileage_miles":21000,"dealer_name":"LOT 9","amount_cents":1800000,"status":"sold","status_date":"2025-10-02","aging_days":4}
{"id":9,"purchase_date":"10/3/2025","year":2022,"make":"Toyota","model":"Camry","vin":"4T1B11HK5NU000003","mileage_miles":15000,"dealer_name":"LOT 9","amount_cents":2400000,"status":"cleared","status_date":"2025-10-03","aging_days":3}
"#,
        )
        .unwrap();

        let loaded = read_records(&jsonl_path).unwrap();
        // Unknown status "sold" is skipped along with the malformed line
        let ids: Vec<u64> = loaded.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![7, 9]);
    }

    #[test]
    fn test_to_jsonl_one_line_per_record() {
        let records = sample_records();
        let refs: Vec<&VehicleRecord> = records.iter().collect();

        let text = to_jsonl(&refs).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().next().unwrap().contains("\"vin\":\"1C4RJFDJ9KC551524\""));
    }
}
