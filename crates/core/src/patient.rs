//! Patient records.

use serde::{Deserialize, Serialize};

/// A patient as the backend stores it.
///
/// The SSN is the unique identifier and is entered at creation time; after
/// creation only the address and phone number have update endpoints, so the
/// remaining fields are immutable from the client's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "SSN")]
    pub ssn: u64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "InsuranceID")]
    pub insurance_id: u64,
    /// Primary care physician (employee id).
    #[serde(rename = "PCP")]
    pub pcp: u64,
}
