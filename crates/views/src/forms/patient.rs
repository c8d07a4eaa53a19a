//! The patient form.

use crate::form::{
    required, required_text, FormMode, FormShell, Submission, UpdateReport, ValidationError,
};
use hms_client::{PatientApi, Transport};
use hms_core::Patient;

/// Create: the full record. Update: address and phone only — the remaining
/// fields have no update endpoints and are fixed after creation.
#[derive(Debug, Default)]
pub struct PatientForm {
    shell: FormShell,
    original: Option<Patient>,
    pub ssn: Option<u64>,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub insurance_id: Option<u64>,
    pub pcp: Option<u64>,
}

impl PatientForm {
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

    pub fn open_update(&mut self, current: Patient) {
        *self = Self::default();
        self.ssn = Some(current.ssn);
        self.name = current.name.clone();
        self.address = current.address.clone();
        self.phone = current.phone.clone();
        self.insurance_id = Some(current.insurance_id);
        self.pcp = Some(current.pcp);
        self.original = Some(current);
        self.shell.open(FormMode::Update);
    }

    /// Validate the current field values without submitting.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.shell.mode() {
            None => Err(ValidationError::NotOpen),
            Some(FormMode::Create) => self.validated_record().map(|_| ()),
            Some(FormMode::Update) => {
                required_text(&self.address, "address")?;
                required_text(&self.phone, "phone")?;
                Ok(())
            }
        }
    }

    fn validated_record(&self) -> Result<Patient, ValidationError> {
        Ok(Patient {
            ssn: required(self.ssn, "ssn")?,
            name: required_text(&self.name, "name")?,
            address: required_text(&self.address, "address")?,
            phone: required_text(&self.phone, "phone")?,
            insurance_id: required(self.insurance_id, "insurance id")?,
            pcp: required(self.pcp, "primary care physician")?,
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
        let api = PatientApi::new(transport);
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
                if let Err(err) = self.validate() {
                    return Submission::Rejected(err);
                }
                let address = self.address.trim();
                let phone = self.phone.trim();

                let mut report = UpdateReport::default();
                if address != original.address {
                    if let Err(fault) = api.update_address(original.ssn, address).await {
                        return Submission::Failed(report.with_failure("address", fault));
                    }
                    report.applied.push("address");
                }
                if phone != original.phone {
                    if let Err(fault) = api.update_phone(original.ssn, phone).await {
                        return Submission::Failed(report.with_failure("phone", fault));
                    }
                    report.applied.push("phone");
                }
                Submission::Completed
            }
        }
    }
}
