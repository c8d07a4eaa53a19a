//! The nurse form.

use crate::form::{
    required, required_text, FormMode, FormShell, Submission, UpdateReport, ValidationError,
};
use hms_client::{NurseApi, Transport};
use hms_core::Nurse;

/// Create: the full record. Update: registration flag and SSN only.
#[derive(Debug, Default)]
pub struct NurseForm {
    shell: FormShell,
    original: Option<Nurse>,
    pub employee_id: Option<u64>,
    pub name: String,
    pub position: String,
    pub registered: bool,
    pub ssn: Option<u64>,
}

impl NurseForm {
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

    pub fn open_update(&mut self, current: Nurse) {
        *self = Self::default();
        self.employee_id = Some(current.employee_id);
        self.name = current.name.clone();
        self.position = current.position.clone();
        self.registered = current.registered;
        self.ssn = Some(current.ssn);
        self.original = Some(current);
        self.shell.open(FormMode::Update);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.shell.mode() {
            None => Err(ValidationError::NotOpen),
            Some(FormMode::Create) => self.validated_record().map(|_| ()),
            Some(FormMode::Update) => required(self.ssn, "ssn").map(|_| ()),
        }
    }

    fn validated_record(&self) -> Result<Nurse, ValidationError> {
        Ok(Nurse {
            employee_id: required(self.employee_id, "employee id")?,
            name: required_text(&self.name, "name")?,
            position: required_text(&self.position, "position")?,
            registered: self.registered,
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
        let api = NurseApi::new(transport);
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
                let ssn = match required(self.ssn, "ssn") {
                    Ok(ssn) => ssn,
                    Err(err) => return Submission::Rejected(err),
                };

                let mut report = UpdateReport::default();
                if self.registered != original.registered {
                    if let Err(fault) = api
                        .update_registered(original.employee_id, self.registered)
                        .await
                    {
                        return Submission::Failed(report.with_failure("registered", fault));
                    }
                    report.applied.push("registered");
                }
                if ssn != original.ssn {
                    if let Err(fault) = api.update_ssn(original.employee_id, ssn).await {
                        return Submission::Failed(report.with_failure("ssn", fault));
                    }
                    report.applied.push("ssn");
                }
                Submission::Completed
            }
        }
    }
}
