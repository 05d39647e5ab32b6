use serde::{Deserialize, Serialize};

/// One mock patient as stored in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub location: String,
    pub age: u32,
    pub active_problems: Vec<String>,
    /// Lab name → value, in catalog order.
    #[serde(with = "crate::models::ordered_map")]
    pub labs: Vec<(String, String)>,
    pub recent_orders: Vec<String>,
}

impl PatientRecord {
    /// Whether `problem` is listed verbatim among the active problems.
    pub fn has_problem(&self, problem: &str) -> bool {
        self.active_problems.iter().any(|p| p == problem)
    }
}
