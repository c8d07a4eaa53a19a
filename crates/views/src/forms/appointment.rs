//! The appointment form.

use crate::form::{
    required, required_text, FormMode, FormShell, Submission, UpdateReport, ValidationError,
};
use chrono::{DateTime, Utc};
use hms_client::{AppointmentApi, Transport};
use hms_core::Appointment;

/// Create: the full record, with the end-after-start rule enforced before
/// submission. Update: the examination room only — participants and the
/// time window are fixed once the appointment exists.
#[derive(Debug, Default)]
pub struct AppointmentForm {
    shell: FormShell,
    original: Option<Appointment>,
    pub appointment_id: Option<u64>,
    pub patient: Option<u64>,
    pub prep_nurse: Option<u64>,
    pub physician: Option<u64>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub examination_room: String,
}

impl AppointmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shell(&self) -> &FormShell {
        &self.shell
    }

    pub fn open_create(&mut self) {
        *self = Self::default();
        self.shell.open(FormMode::Create);
    }

    pub fn open_update(&mut self, current: Appointment) {
        *self = Self::default();
        self.appointment_id = Some(current.appointment_id);
        self.patient = Some(current.patient);
        self.prep_nurse = current.prep_nurse;
        self.physician = Some(current.physician);
        self.start = Some(current.start);
        self.end = Some(current.end);
        self.examination_room = current.examination_room.clone();
        self.original = Some(current);
        self.shell.open(FormMode::Update);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.shell.mode() {
            None => Err(ValidationError::NotOpen),
            Some(FormMode::Create) => self.validated_record().map(|_| ()),
            Some(FormMode::Update) => {
                required_text(&self.examination_room, "examination room").map(|_| ())
            }
        }
    }

    fn validated_record(&self) -> Result<Appointment, ValidationError> {
        let appointment = Appointment {
            appointment_id: required(self.appointment_id, "appointment id")?,
            patient: required(self.patient, "patient")?,
            prep_nurse: self.prep_nurse,
            physician: required(self.physician, "physician")?,
            start: required(self.start, "start")?,
            end: required(self.end, "end")?,
            examination_room: required_text(&self.examination_room, "examination room")?,
        };
        if !appointment.has_valid_window() {
            return Err(ValidationError::EndNotAfterStart);
        }
        Ok(appointment)
    }

    pub async fn submit(&mut self, transport: &Transport) -> Submission {
        let Some(mode) = self.shell.begin_submit() else {
            return Submission::Rejected(ValidationError::NotOpen);
        };
        let outcome = self.perform(mode, transport).await;
        self.shell.finish(&outcome);
        outcome
    }

    async fn perform(&self, mode: FormMode, transport: &Transport) -> Submission {
        let api = AppointmentApi::new(transport);
        match mode {
            FormMode::Create => {
                let record = match self.validated_record() {
                    Ok(record) => record,
                    Err(err) => return Submission::Rejected(err),
                };
                match api.create(&record).await {
                    Ok(()) => Submission::Completed,
                    Err(fault) => Submission::Failed(UpdateReport::create_failed(fault)),
                }
            }
            FormMode::Update => {
                let Some(original) = &self.original else {
                    return Submission::Rejected(ValidationError::NotOpen);
                };
                let room = match required_text(&self.examination_room, "examination room") {
                    Ok(room) => room,
                    Err(err) => return Submission::Rejected(err),
                };

                let report = UpdateReport::default();
                if room != original.examination_room {
                    if let Err(fault) = api.update_room(original.appointment_id, &room).await {
                        return Submission::Failed(report.with_failure("examination room", fault));
                    }
                }
                Submission::Completed
            }
        }
    }
}
