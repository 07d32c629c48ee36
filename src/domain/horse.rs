use anyhow::Context;
use chrono::{Datelike, Utc};
use std::path::Path;

/// A horse record as bundled in `data/horses.json`.
///
/// This is a read-only view over static content: records have no lifecycle of their own and are
/// never mutated at runtime. Derived facts (age, adoptability) are accessor methods rather than
/// stored fields so they cannot drift from the underlying data.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Horse {
    pub id: String,
    pub name: String,
    pub breed: String,
    pub birth_year: i32,
    pub status: HorseStatus,
    pub bio: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsorship_tier: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum HorseStatus {
    Available,
    Sanctuary,
    Adopted,
}

impl Horse {
    /// The horse's current age, computed against the current UTC year.
    pub fn age(&self) -> i32 {
        Utc::now().year() - self.birth_year
    }

    /// Whether the horse is available for adoption.
    pub fn is_adoptable(&self) -> bool {
        self.status == HorseStatus::Available
    }

    /// Whether the horse is a permanent sanctuary resident.
    pub fn is_sanctuary(&self) -> bool {
        self.status == HorseStatus::Sanctuary
    }

    /// Formatted age string, e.g. "12 years old". Exactly one year gets the singular wording.
    pub fn age_display(&self) -> String {
        match self.age() {
            1 => "1 year old".to_string(),
            years => format!("{years} years old"),
        }
    }
}

/// The full set of horse records, loaded once at startup.
#[derive(Debug, Clone)]
pub struct HorseCatalog {
    horses: Vec<Horse>,
}

impl HorseCatalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let raw = std::fs::read(path)
            .with_context(|| format!("Failed to read horse records from {}", path.display()))?;
        let horses = serde_json::from_slice(&raw).context("Failed to parse horse records")?;
        Ok(Self { horses })
    }

    pub fn all(&self) -> &[Horse] {
        &self.horses
    }

    pub fn with_status(&self, status: HorseStatus) -> Vec<&Horse> {
        self.horses
            .iter()
            .filter(|horse| horse.status == status)
            .collect()
    }
}
