use super::DonorStore;
use crate::error::{MailroomError, Result};
use crate::model::DonorBook;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed donor store: a single JSON object mapping donor names to
/// arrays of amounts. Historical files stored amounts as numeric strings;
/// both forms normalize to numbers on load.
pub struct JsonFileStore {
    path: PathBuf,
}

// Accepts `[5000, "4000.50"]` style mixed arrays.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data file (and parent directories) with an empty donor
    /// book if nothing exists at the path yet. Leaves existing files alone.
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(MailroomError::Io)?;
        }
        fs::write(&self.path, "{}").map_err(MailroomError::Io)?;
        Ok(())
    }
}

impl DonorStore for JsonFileStore {
    fn load(&self) -> Result<DonorBook> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            MailroomError::Store(format!(
                "cannot read donor file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let raw: BTreeMap<String, Vec<RawAmount>> =
            serde_json::from_str(&content).map_err(MailroomError::Serialization)?;

        raw.into_iter()
            .map(|(name, amounts)| {
                let normalized = amounts
                    .into_iter()
                    .map(|a| match a {
                        RawAmount::Number(n) => Ok(n),
                        RawAmount::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                            MailroomError::Store(format!(
                                "non-numeric amount {:?} for donor {:?}",
                                s, name
                            ))
                        }),
                    })
                    .collect::<Result<Vec<f64>>>()?;
                Ok((name, normalized))
            })
            .collect()
    }

    fn save(&mut self, book: &DonorBook) -> Result<()> {
        let content = serde_json::to_string_pretty(book).map_err(MailroomError::Serialization)?;
        fs::write(&self.path, content).map_err(MailroomError::Io)?;
        Ok(())
    }
}
