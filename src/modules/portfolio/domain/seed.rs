use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::portfolio::domain::entities::PortfolioSnapshot;
use crate::portfolio::domain::records::{Record, RecordList};

const BUNDLED_SEED: &str = include_str!("../../../../data/seed.json");

/// Default content shipped with the binary.
pub fn bundled_seed() -> Result<PortfolioSnapshot, serde_json::Error> {
    serde_json::from_str(BUNDLED_SEED)
}

/// Outcome of [`PortfolioSnapshot::overlay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlaid {
    pub snapshot: PortfolioSnapshot,
    /// Persisted fields, or `field[index]` records, that could not be read.
    pub rejected: Vec<String>,
}

impl Overlaid {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl PortfolioSnapshot {
    /// Field-by-field overlay of a persisted object onto `self`.
    ///
    /// Missing or `null` fields keep the value already in `self`. A mis-shaped
    /// field also keeps it, and is reported in [`Overlaid::rejected`].
    /// Collections are read record by record: an unreadable record is dropped
    /// and reported, the rest of the collection is kept.
    pub fn overlay(mut self, stored: &Map<String, Value>) -> Overlaid {
        let mut rejected = Vec::new();

        take(stored, "profile", &mut self.profile, &mut rejected);
        take(stored, "resume", &mut self.resume, &mut rejected);
        take(stored, "skills", &mut self.skills, &mut rejected);
        take_records(stored, "projects", &mut self.projects, &mut rejected);
        take_records(stored, "experience", &mut self.experience, &mut rejected);
        take_records(stored, "education", &mut self.education, &mut rejected);
        take_records(stored, "certifications", &mut self.certifications, &mut rejected);

        Overlaid {
            snapshot: self,
            rejected,
        }
    }
}

fn present<'a>(stored: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    stored.get(field).filter(|raw| !raw.is_null())
}

fn take<T: DeserializeOwned>(
    stored: &Map<String, Value>,
    field: &str,
    target: &mut T,
    rejected: &mut Vec<String>,
) {
    let Some(raw) = present(stored, field) else {
        return;
    };

    match T::deserialize(raw) {
        Ok(value) => *target = value,
        Err(e) => {
            warn!(field, error = %e, "Ignoring malformed persisted field, keeping default");
            rejected.push(field.to_string());
        }
    }
}

fn take_records<T: Record + DeserializeOwned>(
    stored: &Map<String, Value>,
    field: &str,
    target: &mut RecordList<T>,
    rejected: &mut Vec<String>,
) {
    let Some(raw) = present(stored, field) else {
        return;
    };
    let Some(entries) = raw.as_array() else {
        warn!(field, "Persisted collection is not a list, keeping default");
        rejected.push(field.to_string());
        return;
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match T::deserialize(entry) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(field, index, error = %e, "Dropping unreadable persisted record");
                rejected.push(format!("{field}[{index}]"));
            }
        }
    }
    *target = RecordList::from(records);
}
