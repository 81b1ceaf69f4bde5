use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All recorded donors and their donation histories.
///
/// Keys are title-cased donor names; values are append-only donation
/// sequences. The map is ordered so listing, reports, and the persisted
/// JSON are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DonorBook {
    donors: BTreeMap<String, Vec<f64>>,
}

impl DonorBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `name` has an entry, appending `amount` to its donation list.
    pub fn record(&mut self, name: &str, amount: f64) {
        self.donors.entry(name.to_string()).or_default().push(amount);
    }

    /// Ensure `name` has an entry without recording a donation.
    pub fn add_donor(&mut self, name: &str) {
        self.donors.entry(name.to_string()).or_default();
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.donors.keys().map(String::as_str)
    }

    pub fn donations(&self, name: &str) -> Option<&[f64]> {
        self.donors.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.donors.iter().map(|(n, d)| (n.as_str(), d.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.donors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.donors.is_empty()
    }
}

impl FromIterator<(String, Vec<f64>)> for DonorBook {
    fn from_iter<I: IntoIterator<Item = (String, Vec<f64>)>>(iter: I) -> Self {
        Self {
            donors: iter.into_iter().collect(),
        }
    }
}

/// Transient state carried across the send-menu and amount prompts.
///
/// Threaded through the menu session explicitly; populated during the send
/// flow and cleared after a successful commit or an abandoned send menu.
#[derive(Debug, Clone, Default)]
pub struct WorkingSelection {
    pub name: Option<String>,
    pub amount: Option<f64>,
}

impl WorkingSelection {
    pub fn clear(&mut self) {
        self.name = None;
        self.amount = None;
    }
}
