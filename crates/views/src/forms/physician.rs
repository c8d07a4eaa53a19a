//! The physician form.

use crate::form::{
    required, required_text, FormMode, FormShell, Submission, UpdateReport, ValidationError,
};
use hms_client::{PhysicianApi, Transport};
use hms_core::{Physician, Position};

/// Create: the full record. Update: name, position and SSN, each through its
/// own endpoint, submitted in that order.
#[derive(Debug, Default)]
pub struct PhysicianForm {
    shell: FormShell,
    original: Option<Physician>,
    pub employee_id: Option<u64>,
    pub name: String,
    pub position: Option<Position>,
    pub ssn: Option<u64>,
}

impl PhysicianForm {
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

    pub fn open_update(&mut self, current: Physician) {
        *self = Self::default();
        self.employee_id = Some(current.employee_id);
        self.name = current.name.clone();
        self.position = Some(current.position);
        self.ssn = Some(current.ssn);
        self.original = Some(current);
        self.shell.open(FormMode::Update);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.shell.mode().is_none() {
            return Err(ValidationError::NotOpen);
        }
        self.validated_record().map(|_| ())
    }

    fn validated_record(&self) -> Result<Physician, ValidationError> {
        Ok(Physician {
            employee_id: required(self.employee_id, "employee id")?,
            name: required_text(&self.name, "name")?,
            position: required(self.position, "position")?,
            ssn: required(self.ssn, "ssn")?,
        })
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
        let api = PhysicianApi::new(transport);
        let target = match self.validated_record() {
            Ok(record) => record,
            Err(err) => return Submission::Rejected(err),
        };

        match mode {
            FormMode::Create => match api.create(&target).await {
                Ok(()) => Submission::Completed,
                Err(fault) => Submission::Failed(UpdateReport::create_failed(fault)),
            },
            FormMode::Update => {
                let Some(original) = &self.original else {
                    return Submission::Rejected(ValidationError::NotOpen);
                };

                let mut report = UpdateReport::default();
                if target.name != original.name {
                    if let Err(fault) = api.update_name(original.employee_id, &target.name).await {
                        return Submission::Failed(report.with_failure("name", fault));
                    }
                    report.applied.push("name");
                }
                if target.position != original.position {
                    if let Err(fault) = api
                        .update_position(original.employee_id, target.position)
                        .await
                    {
                        return Submission::Failed(report.with_failure("position", fault));
                    }
                    report.applied.push("position");
                }
                if target.ssn != original.ssn {
                    if let Err(fault) = api.update_ssn(original.employee_id, target.ssn).await {
                        return Submission::Failed(report.with_failure("ssn", fault));
                    }
                    report.applied.push("ssn");
                }
                Submission::Completed
            }
        }
    }
}
