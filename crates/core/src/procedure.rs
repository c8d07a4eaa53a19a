//! Medical procedures and their costs.

use serde::{Deserialize, Serialize};

/// A billable procedure.
///
/// Name and cost are independently mutable; the code is fixed at creation.
/// Cost is a non-negative amount; forms validate this before submission
/// since the backend does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    #[serde(rename = "Code")]
    pub code: u64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Cost")]
    pub cost: f64,
}
