//! Appointment endpoints.
//!
//! Appointments are created whole and are immutable afterwards except for
//! the examination room.

use crate::error::ClientResult;
use crate::transport::Transport;
use chrono::NaiveDate;
use hms_core::{Appointment, Nurse, Patient, Physician};
use serde::Serialize;

pub struct AppointmentApi<'a> {
    transport: &'a Transport,
}

#[derive(Serialize)]
struct RoomPayload<'a> {
    room: &'a str,
}

impl<'a> AppointmentApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List all appointments.
    pub async fn list(&self) -> ClientResult<Vec<Appointment>> {
        self.transport.get("/appointment").await
    }

    /// Create an appointment from the full record.
    pub async fn create(&self, appointment: &Appointment) -> ClientResult<()> {
        self.transport.post("/appointment", appointment).await
    }

    /// Update the examination room only.
    pub async fn update_room(&self, appointment_id: u64, room: &str) -> ClientResult<()> {
        self.transport
            .put(
                &format!("/appointment/room/{appointment_id}"),
                &RoomPayload { room },
            )
            .await
    }

    /// Appointments starting on a calendar date.
    pub async fn on_date(&self, date: NaiveDate) -> ClientResult<Vec<Appointment>> {
        self.transport.get(&format!("/appointment/date/{date}")).await
    }

    /// The patient bound to an appointment.
    pub async fn patient_of(&self, appointment_id: u64) -> ClientResult<Patient> {
        self.transport
            .get(&format!("/appointment/patient/{appointment_id}"))
            .await
    }

    /// The physician bound to an appointment.
    pub async fn physician_of(&self, appointment_id: u64) -> ClientResult<Physician> {
        self.transport
            .get(&format!("/appointment/physician/{appointment_id}"))
            .await
    }

    /// The prep nurse bound to an appointment, if any.
    pub async fn nurse_of(&self, appointment_id: u64) -> ClientResult<Option<Nurse>> {
        self.transport
            .get(&format!("/appointment/nurse/{appointment_id}"))
            .await
    }
}
