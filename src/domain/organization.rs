use serde::{Deserialize, Serialize};

/// Job role an employee holds (e.g. `Driver`, `QC Technician`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    pub id: i32,
    pub name: String,
}

/// Batching plant or yard where production and equipment are located.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
}
