// Status and free-text filtering of vehicle records

use crate::record::{Status, VehicleRecord};
use eyre::{Report, eyre};
use std::borrow::Borrow;
use std::str::FromStr;
use tracing::warn;

/// Status restriction applied before search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Cleared,
    Pending,
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Cleared => "cleared",
            StatusFilter::Pending => "pending",
        }
    }

    /// Parse, falling back to `All` for anything unrecognized
    pub fn lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|e| {
            warn!(value = raw, error = %e, "Unknown status filter, showing all statuses");
            StatusFilter::All
        })
    }

    /// Whether a record with `status` passes this filter
    pub fn admits(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            _ => status.as_str().eq_ignore_ascii_case(self.as_str()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Ok(StatusFilter::All),
            "cleared" => Ok(StatusFilter::Cleared),
            "pending" => Ok(StatusFilter::Pending),
            other => Err(eyre!("Unknown status filter: {}", other)),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Case-insensitive substring search over make, model, dealer and VIN
///
/// The term matches exactly as typed, surrounding whitespace included; an
/// all-whitespace term matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    /// True when the term is blank and matches everything
    pub fn is_empty(&self) -> bool {
        self.needle.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, record: &VehicleRecord) -> bool {
        self.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

impl From<&str> for SearchTerm {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Keep the records passing both the status and the search stage
///
/// Survivors keep their input order.
pub fn filter_records<R>(records: &[R], search: &SearchTerm, status: StatusFilter) -> Vec<R>
where
    R: Borrow<VehicleRecord> + Clone,
{
    records
        .iter()
        .filter(|r| {
            let record: &VehicleRecord = (*r).borrow();
            status.admits(record.status) && search.matches(record)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_records;

    fn ids(records: &[&VehicleRecord]) -> Vec<u64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_status_filter_cleared() {
        let records = sample_records();
        let refs: Vec<&VehicleRecord> = records.iter().collect();

        let cleared = filter_records(&refs, &SearchTerm::default(), StatusFilter::Cleared);
        assert_eq!(ids(&cleared), vec![1, 2, 3]);

        let pending = filter_records(&refs, &SearchTerm::default(), StatusFilter::Pending);
        assert_eq!(ids(&pending), vec![4]);
    }

    #[test]
    fn test_search_make_case_insensitive() {
        let records = sample_records();
        let refs: Vec<&VehicleRecord> = records.iter().collect();

        let found = filter_records(&refs, &SearchTerm::new("chevrolet"), StatusFilter::All);
        assert_eq!(ids(&found), vec![2, 3]);

        let found = filter_records(&refs, &SearchTerm::new("CHEVROLET"), StatusFilter::All);
        assert_eq!(ids(&found), vec![2, 3]);
    }

    #[test]
    fn test_search_covers_model_dealer_and_vin() {
        let records = sample_records();
        let refs: Vec<&VehicleRecord> = records.iter().collect();

        let by_model = filter_records(&refs, &SearchTerm::new("traverse"), StatusFilter::All);
        assert_eq!(ids(&by_model), vec![3]);

        let by_dealer = filter_records(&refs, &SearchTerm::new("auto sales"), StatusFilter::All);
        assert_eq!(ids(&by_dealer), vec![2, 3]);

        let by_vin = filter_records(&refs, &SearchTerm::new("gpf125772"), StatusFilter::All);
        assert_eq!(ids(&by_vin), vec![4]);
    }

    #[test]
    fn test_stages_combine_with_and() {
        let records = sample_records();
        let refs: Vec<&VehicleRecord> = records.iter().collect();

        let found = filter_records(&refs, &SearchTerm::new("chevrolet"), StatusFilter::Pending);
        assert!(found.is_empty());

        let found = filter_records(&refs, &SearchTerm::new("1g"), StatusFilter::Pending);
        assert_eq!(ids(&found), vec![4]);
    }

    #[test]
    fn test_blank_search_matches_all() {
        let records = sample_records();
        let refs: Vec<&VehicleRecord> = records.iter().collect();

        let term = SearchTerm::new("   \t");
        assert!(term.is_empty());
        let found = filter_records(&refs, &term, StatusFilter::All);
        assert_eq!(ids(&found), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_padded_search_matches_literally() {
        let records = sample_records();
        let refs: Vec<&VehicleRecord> = records.iter().collect();

        // No field contains "xt4 " with the trailing space
        let found = filter_records(&refs, &SearchTerm::new("xt4 "), StatusFilter::All);
        assert!(found.is_empty());

        let found = filter_records(&refs, &SearchTerm::new(" auto sales"), StatusFilter::All);
        assert_eq!(ids(&found), vec![2, 3]);

        let found = filter_records(&refs, &SearchTerm::new("AUTO SALES "), StatusFilter::All);
        assert_eq!(ids(&found), vec![3]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample_records();
        let refs: Vec<&VehicleRecord> = records.iter().collect();
        let term = SearchTerm::new("chev");

        let once = filter_records(&refs, &term, StatusFilter::Cleared);
        let twice = filter_records(&once, &term, StatusFilter::Cleared);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_filter_owned_records_leaves_input_untouched() {
        let records = sample_records();
        let found = filter_records(&records, &SearchTerm::new("jeep"), StatusFilter::All);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("cleared".parse::<StatusFilter>().unwrap(), StatusFilter::Cleared);
        assert_eq!("Pending".parse::<StatusFilter>().unwrap(), StatusFilter::Pending);
        assert_eq!("ALL".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert!("sold".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_status_filter_lenient_falls_back_to_all() {
        assert_eq!(StatusFilter::lenient("sold"), StatusFilter::All);
        assert_eq!(StatusFilter::lenient("pending"), StatusFilter::Pending);
    }

    #[test]
    fn test_status_filter_display() {
        assert_eq!(StatusFilter::All.to_string(), "all");
        assert_eq!(StatusFilter::Cleared.to_string(), "cleared");
    }
}
