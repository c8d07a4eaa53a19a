//! Procedure certifications (physician trained-in records).

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A physician's certification to perform a procedure.
///
/// Identity is the (physician, treatment) pair. Only the expiry date is
/// mutable, through the dedicated extension endpoint; the issue date never
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// Physician employee id.
    #[serde(rename = "Physician")]
    pub physician: u64,
    /// Procedure code.
    #[serde(rename = "Treatment")]
    pub treatment: u64,
    #[serde(rename = "CertificationDate")]
    pub certified: NaiveDate,
    #[serde(rename = "CertificationExpires")]
    pub expires: NaiveDate,
}

impl Certification {
    /// Whether the validity window is well-formed (expiry strictly after the
    /// issue date). Forms reject inverted windows before submission.
    pub fn has_valid_window(&self) -> bool {
        self.expires > self.certified
    }

    /// The expiry date extended by a whole number of years from the current
    /// expiry. Returns `None` on calendar overflow.
    pub fn extended_expiry(&self, years: u32) -> Option<NaiveDate> {
        self.expires.checked_add_months(Months::new(years * 12))
    }
}
