use crate::commands::{CmdResult, ReportRow};
use crate::error::Result;
use crate::store::DonorStore;

pub fn run<S: DonorStore>(store: &S) -> Result<CmdResult> {
    let book = store.load()?;
    let rows = book
        .iter()
        .map(|(name, donations)| summarize(name, donations))
        .collect();
    Ok(CmdResult::default().with_report(rows))
}

fn summarize(name: &str, donations: &[f64]) -> ReportRow {
    let total: f64 = donations.iter().sum();
    let count = donations.len();
    // Average is undefined for an empty history; render it as zero rather
    // than dividing by zero.
    let average = if count > 0 { total / count as f64 } else { 0.0 };
    ReportRow {
        name: name.to_string(),
        total,
        count,
        average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn computes_total_count_and_average() {
        let store = InMemoryStore::new().with_donor("Bill Gates", &[5000.0, 4000.50, 1.0]);

        let result = run(&store).unwrap();
        assert_eq!(result.report.len(), 1);
        let row = &result.report[0];
        assert_eq!(row.name, "Bill Gates");
        assert_eq!(row.total, 9001.50);
        assert_eq!(row.count, 3);
        assert_eq!(row.average, 3000.50);
    }

    #[test]
    fn donor_with_no_donations_gets_zero_row() {
        let store = InMemoryStore::new().with_donor("Jane Doe", &[]);

        let result = run(&store).unwrap();
        let row = &result.report[0];
        assert_eq!(row.total, 0.0);
        assert_eq!(row.count, 0);
        assert_eq!(row.average, 0.0);
    }

    #[test]
    fn one_row_per_donor() {
        let store = InMemoryStore::new()
            .with_donor("Bill Gates", &[5000.0])
            .with_donor("Cris Ewing", &[25.0, 0.50, 1.0]);

        let result = run(&store).unwrap();
        let names: Vec<_> = result.report.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bill Gates", "Cris Ewing"]);
    }
}
