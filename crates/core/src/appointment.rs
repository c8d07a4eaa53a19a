//! Appointments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled appointment.
///
/// An appointment binds exactly one patient, one physician, zero or one prep
/// nurse, one examination room and one time interval. Only the room has an
/// update endpoint; everything else is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "AppointmentID")]
    pub appointment_id: u64,
    /// Patient SSN.
    #[serde(rename = "Patient")]
    pub patient: u64,
    /// Prep nurse employee id, if one is assigned.
    #[serde(rename = "PrepNurse")]
    pub prep_nurse: Option<u64>,
    /// Physician employee id.
    #[serde(rename = "Physician")]
    pub physician: u64,
    #[serde(rename = "Start")]
    pub start: DateTime<Utc>,
    #[serde(rename = "End")]
    pub end: DateTime<Utc>,
    #[serde(rename = "ExaminationRoom")]
    pub examination_room: String,
}

impl Appointment {
    /// Whether the time interval is well-formed (end strictly after start).
    ///
    /// The backend accepts inverted intervals; forms reject them before
    /// submission using this check.
    pub fn has_valid_window(&self) -> bool {
        self.end > self.start
    }
}
