//! Mock patient catalog.
//!
//! Loaded once at startup from a JSON object keyed by patient name.
//! Any failure here is fatal: the demo has nothing to show without it.

use std::path::{Path, PathBuf};

use crate::models::{ordered_map, PatientRecord};

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Cannot read patient catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed patient catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Patient catalog contains no patients")]
    Empty,
}

/// Name → record mapping in file order. Never empty.
#[derive(Debug, Clone)]
pub struct PatientCatalog {
    patients: Vec<(String, PatientRecord)>,
}

impl PatientCatalog {
    /// Read and parse the catalog file at `path`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&text)?;
        tracing::info!(
            path = %path.display(),
            patients = catalog.len(),
            "Patient catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a catalog from JSON text.
    ///
    /// A repeated name keeps its first position and its last record,
    /// matching how a JSON object with duplicate keys is usually read.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let mut de = serde_json::Deserializer::from_str(text);
        let raw: Vec<(String, PatientRecord)> = ordered_map::deserialize(&mut de)?;
        de.end()?;

        let mut patients: Vec<(String, PatientRecord)> = Vec::with_capacity(raw.len());
        for (name, record) in raw {
            match patients.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => {
                    tracing::warn!(patient = %name, "Duplicate patient in catalog, keeping last");
                    slot.1 = record;
                }
                None => patients.push((name, record)),
            }
        }

        if patients.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { patients })
    }

    pub fn get(&self, name: &str) -> Option<&PatientRecord> {
        self.patients
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, record)| record)
    }

    /// The default selection: first patient in file order.
    pub fn first(&self) -> (&str, &PatientRecord) {
        let (name, record) = &self.patients[0];
        (name.as_str(), record)
    }

    /// Patient names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patients.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_PATIENTS: &str = r#"{
        "Zed Adams": {
            "location": "ED Room 1", "age": 50,
            "active_problems": ["Chest Pain"],
            "labs": {"Troponin I": "0.01 ng/mL"},
            "recent_orders": ["12-lead EKG"]
        },
        "Amy Baker": {
            "location": "MICU Bed 2", "age": 81,
            "active_problems": ["Sepsis"],
            "labs": {},
            "recent_orders": []
        }
    }"#;

    #[test]
    fn preserves_file_order() {
        let catalog = PatientCatalog::from_json(TWO_PATIENTS).unwrap();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, ["Zed Adams", "Amy Baker"]);
        assert_eq!(catalog.first().0, "Zed Adams");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn get_by_name() {
        let catalog = PatientCatalog::from_json(TWO_PATIENTS).unwrap();
        assert_eq!(catalog.get("Amy Baker").unwrap().age, 81);
        assert!(catalog.get("Nobody").is_none());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = PatientCatalog::from_json("{}").unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn malformed_catalog_is_rejected() {
        let err = PatientCatalog::from_json(r#"{"A": {"age": "old"}}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));

        let err = PatientCatalog::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn duplicate_name_keeps_last_record() {
        let json = r#"{
            "Dup": {"location": "A", "age": 1, "active_problems": [], "labs": {}, "recent_orders": []},
            "Other": {"location": "B", "age": 2, "active_problems": [], "labs": {}, "recent_orders": []},
            "Dup": {"location": "C", "age": 3, "active_problems": [], "labs": {}, "recent_orders": []}
        }"#;
        let catalog = PatientCatalog::from_json(json).unwrap();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, ["Dup", "Other"]);
        assert_eq!(catalog.get("Dup").unwrap().location, "C");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_PATIENTS.as_bytes()).unwrap();

        let catalog = PatientCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        match PatientCatalog::load(&path).unwrap_err() {
            CatalogError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected Io, got: {other}"),
        }
    }

    #[test]
    fn shipped_catalog_loads() {
        let catalog = PatientCatalog::load(&crate::config::catalog_path()).unwrap();
        assert!(!catalog.is_empty());
    }
}
