// Terminal rendering of ledger views

use crate::ledger::{EMPTY_VIEW_MESSAGE, LedgerView};
use crate::record::{Status, VehicleRecord};
use crate::stats::Statistics;
use colored::Colorize;

/// Group digits by thousands: 44500 -> "44,500"
pub fn thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole dollars with separators, cents appended only when non-zero
pub fn dollars(cents: u64) -> String {
    match cents % 100 {
        0 => format!("${}", thousands(u128::from(cents / 100))),
        rem => format!("${}.{:02}", thousands(u128::from(cents / 100)), rem),
    }
}

/// Rounded thousands of dollars: 9_060_000 cents -> "$91k"
pub fn dollars_k(cents: u128) -> String {
    format!("${}k", (cents as f64 / 100_000.0).round() as u128)
}

fn status_badge(status: Status) -> String {
    let label = format!(" {} ", status);
    match status {
        Status::Cleared => label.black().on_green().to_string(),
        Status::Pending => label.black().on_yellow().to_string(),
    }
}

pub fn render_statistics(stats: &Statistics) -> String {
    let average = stats
        .average_amount_cents
        .map(|avg| dollars(avg.round() as u64))
        .unwrap_or_else(|| "n/a".to_string());

    format!(
        "{} {}\n{} {}\n{} {}\n{} {}\n{} {}\n",
        "Total Vehicles:".bold(),
        stats.total.to_string().blue(),
        "Cleared:".bold(),
        stats.cleared_count.to_string().green(),
        "Pending:".bold(),
        stats.pending_count.to_string().yellow(),
        "Total Value:".bold(),
        dollars_k(stats.total_amount_cents).purple(),
        "Average Amount:".bold(),
        average,
    )
}

pub fn render_record(record: &VehicleRecord) -> String {
    format!(
        "{}  {}\n  {}\n  Purchase Date: {}\n  Mileage: {} mi\n  Dealer: {}\n  Aging: {} days\n  Amount: {}\n",
        record.title().bold(),
        status_badge(record.status),
        record.vin.dimmed(),
        record.purchase_date,
        thousands(u128::from(record.mileage_miles)),
        record.dealer_name,
        record.aging_days,
        dollars(record.amount_cents).bold(),
    )
}

/// Visible records, or the empty-state message
pub fn render_records(view: &LedgerView<'_>) -> String {
    if view.is_empty() {
        return format!("{}\n", EMPTY_VIEW_MESSAGE.dimmed());
    }
    view.visible
        .iter()
        .map(|r| render_record(r))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_dashboard(view: &LedgerView<'_>) -> String {
    format!("{}\n{}", render_statistics(view.statistics), render_records(view))
}
