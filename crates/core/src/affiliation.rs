//! Physician-department affiliations.

use serde::{Deserialize, Serialize};

/// A physician's affiliation with a department.
///
/// Identity is the (physician, department) pair. At most one affiliation per
/// physician should carry the primary marker; the backend does not enforce
/// this, so the form layer refuses to create a second primary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affiliation {
    /// Physician employee id.
    #[serde(rename = "Physician")]
    pub physician: u64,
    /// Department id.
    #[serde(rename = "Department")]
    pub department: u64,
    #[serde(rename = "PrimaryAffiliation")]
    pub primary: bool,
}

/// Find the primary affiliation for a physician among fetched rows.
pub fn primary_of(affiliations: &[Affiliation], physician: u64) -> Option<&Affiliation> {
    affiliations
        .iter()
        .find(|a| a.physician == physician && a.primary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn affiliation(physician: u64, department: u64, primary: bool) -> Affiliation {
        Affiliation {
            physician,
            department,
            primary,
        }
    }

    #[test]
    fn test_primary_of_finds_the_marked_row() {
        let rows = vec![
            affiliation(101, 1, false),
            affiliation(101, 5, true),
            affiliation(102, 5, true),
        ];

        let primary = primary_of(&rows, 101).expect("physician 101 has a primary");
        assert_eq!(primary.department, 5);
    }

    #[test]
    fn test_primary_of_none_when_unmarked() {
        let rows = vec![affiliation(101, 1, false)];
        assert!(primary_of(&rows, 101).is_none());
        assert!(primary_of(&rows, 999).is_none());
    }
}
