//! Nurse records.
//!
//! The backend is inconsistent about the registration flag: list responses
//! carry a boolean in some deployments and a 0/1 integer in others, and the
//! registration update endpoint only accepts the integer form. The domain
//! type is a plain `bool`; conversion happens at the serde boundary.

use serde::{Deserialize, Serialize};

/// A nurse on staff.
///
/// Registration status and SSN are mutable through field-scoped update
/// endpoints; employee id, name and position are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nurse {
    #[serde(rename = "EmployeeID")]
    pub employee_id: u64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Position")]
    pub position: String,
    /// Whether the nurse holds an active registration.
    #[serde(rename = "Registered", deserialize_with = "registered_flag::deserialize")]
    pub registered: bool,
    #[serde(rename = "SSN")]
    pub ssn: u64,
}

/// Tolerant deserialisation for the registration flag: accepts JSON `true`/
/// `false` as well as the 0/1 integers some call sites transmit.
pub mod registered_flag {
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean or a 0/1 integer")
        }

        fn visit_bool<E>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<bool, E> {
            match value {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(E::custom(format!("invalid registration flag: {other}"))),
            }
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<bool, E> {
            match value {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(E::custom(format!("invalid registration flag: {other}"))),
            }
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FlagVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nurse_json(registered: &str) -> String {
        format!(
            r#"{{"EmployeeID": 201, "Name": "Carla Espinosa", "Position": "Head Nurse", "Registered": {registered}, "SSN": 222222222}}"#
        )
    }

    #[test]
    fn test_registered_accepts_boolean() {
        let nurse: Nurse = serde_json::from_str(&nurse_json("true")).unwrap();
        assert!(nurse.registered);
    }

    #[test]
    fn test_registered_accepts_zero_one_integers() {
        let registered: Nurse = serde_json::from_str(&nurse_json("1")).unwrap();
        let unregistered: Nurse = serde_json::from_str(&nurse_json("0")).unwrap();

        assert!(registered.registered);
        assert!(!unregistered.registered);
    }

    #[test]
    fn test_registered_rejects_other_integers() {
        let result: Result<Nurse, _> = serde_json::from_str(&nurse_json("2"));
        assert!(result.is_err());
    }

    #[test]
    fn test_registered_serializes_as_boolean() {
        let nurse: Nurse = serde_json::from_str(&nurse_json("0")).unwrap();
        let json = serde_json::to_value(&nurse).unwrap();
        assert_eq!(json["Registered"], false);
    }
}
