//! Physician records and staff positions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A physician on staff.
///
/// Name, position and SSN are independently mutable through field-scoped
/// update endpoints; the employee id is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Physician {
    #[serde(rename = "EmployeeID")]
    pub employee_id: u64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Position")]
    pub position: Position,
    #[serde(rename = "SSN")]
    pub ssn: u64,
}

/// Staff seniority, transmitted as its display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Head,
    Senior,
    Attending,
    Resident,
    Intern,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::Head,
        Position::Senior,
        Position::Attending,
        Position::Resident,
        Position::Intern,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Head => "Head",
            Position::Senior => "Senior",
            Position::Attending => "Attending",
            Position::Resident => "Resident",
            Position::Intern => "Intern",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown position: {0}")]
pub struct ParsePositionError(String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "head" => Ok(Position::Head),
            "senior" => Ok(Position::Senior),
            "attending" => Ok(Position::Attending),
            "resident" => Ok(Position::Resident),
            "intern" => Ok(Position::Intern),
            other => Err(ParsePositionError(other.to_owned())),
        }
    }
}
