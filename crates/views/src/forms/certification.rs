//! The certification form.

use crate::form::{required, FormMode, FormShell, Submission, UpdateReport, ValidationError};
use chrono::NaiveDate;
use hms_client::{TrainedInApi, Transport};
use hms_core::Certification;

/// Create: the full record, with the expiry-after-issue rule enforced before
/// submission. Update: the expiry date only (an extension) — the issue date
/// and the (physician, treatment) identity are fixed.
#[derive(Debug, Default)]
pub struct CertificationForm {
    shell: FormShell,
    original: Option<Certification>,
    pub physician: Option<u64>,
    pub treatment: Option<u64>,
    pub certified: Option<NaiveDate>,
    pub expires: Option<NaiveDate>,
}

impl CertificationForm {
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

    pub fn open_update(&mut self, current: Certification) {
        *self = Self::default();
        self.physician = Some(current.physician);
        self.treatment = Some(current.treatment);
        self.certified = Some(current.certified);
        self.expires = Some(current.expires);
        self.original = Some(current);
        self.shell.open(FormMode::Update);
    }

    /// Pre-fill the expiry with an extension of the current one by whole
    /// years. Only meaningful in update mode.
    pub fn extend_by_years(&mut self, years: u32) {
        if let Some(original) = &self.original {
            if let Some(extended) = original.extended_expiry(years) {
                self.expires = Some(extended);
            }
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.shell.mode() {
            None => Err(ValidationError::NotOpen),
            Some(FormMode::Create) => self.validated_record().map(|_| ()),
            Some(FormMode::Update) => {
                let expires = required(self.expires, "expiry date")?;
                let certified = self
                    .original
                    .as_ref()
                    .map(|o| o.certified)
                    .or(self.certified)
                    .ok_or(ValidationError::NotOpen)?;
                if expires <= certified {
                    return Err(ValidationError::ExpiryNotAfterIssue);
                }
                Ok(())
            }
        }
    }

    fn validated_record(&self) -> Result<Certification, ValidationError> {
        let certification = Certification {
            physician: required(self.physician, "physician")?,
            treatment: required(self.treatment, "treatment")?,
            certified: required(self.certified, "certification date")?,
            expires: required(self.expires, "expiry date")?,
        };
        if !certification.has_valid_window() {
            return Err(ValidationError::ExpiryNotAfterIssue);
        }
        Ok(certification)
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
        let api = TrainedInApi::new(transport);
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
                let Some(expires) = self.expires else {
                    return Submission::Rejected(ValidationError::Required("expiry date"));
                };

                let report = UpdateReport::default();
                if expires != original.expires {
                    if let Err(fault) = api
                        .update_expiry(original.physician, original.treatment, expires)
                        .await
                    {
                        return Submission::Failed(report.with_failure("expiry date", fault));
                    }
                }
                Submission::Completed
            }
        }
    }
}
