//! Hospital departments.

use serde::{Deserialize, Serialize};

/// A department, optionally headed by a physician.
///
/// Name and head are independently mutable. The head may be unassigned,
/// which the backend transmits as a JSON null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "DepartmentID")]
    pub department_id: u64,
    #[serde(rename = "Name")]
    pub name: String,
    /// Head physician (employee id), if one is assigned.
    #[serde(rename = "Head")]
    pub head: Option<u64>,
}
