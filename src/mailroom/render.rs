//! Text rendering for everything the menu displays: the donation report
//! table, the donor list, and the thank-you email.

use crate::commands::{Receipt, ReportRow};
use unicode_width::UnicodeWidthStr;

const COL_WIDTH: usize = 20;

const DONOR_NAME: &str = "Donor Name";
const TOTAL: &str = "Total Donated";
const NUM: &str = "Donations";
const AVG: &str = "Average Donation";

/// `$` prefix, exactly two decimal places.
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn render_report(rows: &[ReportRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_row());
    lines.push(format!("\t{}", "-".repeat(COL_WIDTH * 4)));
    for row in rows {
        lines.push(donor_row(row));
    }
    lines.join("\n")
}

fn header_row() -> String {
    let mut cells = vec![format!("\t{}", pad_left_aligned(DONOR_NAME))];
    for title in [TOTAL, NUM, AVG] {
        cells.push(format!("{:>width$}", title, width = COL_WIDTH));
    }
    cells.concat()
}

fn donor_row(row: &ReportRow) -> String {
    let total = format_amount(row.total);
    let avg = format_amount(row.average);
    let mut cells = vec![format!("\t{}", pad_left_aligned(&row.name))];
    for cell in [total, row.count.to_string(), avg] {
        cells.push(format!("{:>width$}", cell, width = COL_WIDTH));
    }
    cells.concat()
}

// `{:<20}` pads by char count; use display width so wide glyphs in donor
// names don't skew the columns.
fn pad_left_aligned(s: &str) -> String {
    let padding = COL_WIDTH.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

pub fn render_donor_list(donors: &[String]) -> String {
    format!(
        "\nHere are all the nice people who have donated so far:\n\n{}\n",
        donors.join("\n")
    )
}

pub fn render_email(receipt: &Receipt) -> String {
    format!(
        "\nDear {name},\n\n    Thank you for your donation of {amount}.  We really need it.\n\n    Sincerely,\n\n    The Mailroom\n",
        name = receipt.name,
        amount = format_amount(receipt.amount),
    )
}
