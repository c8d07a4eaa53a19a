//! The affiliation form.

use crate::form::{required, FormMode, FormShell, Submission, UpdateReport, ValidationError};
use hms_client::{AffiliatedWithApi, Transport};
use hms_core::{affiliation::primary_of, Affiliation};

/// Create: the full relation. Update: moving the primary marker via the
/// dedicated endpoint.
///
/// The at-most-one-primary invariant is not enforced anywhere server-side,
/// so creation refuses to mark a second primary for a physician whose
/// fetched affiliations already contain one; `set_primary` is the sanctioned
/// way to move the marker.
#[derive(Debug, Default)]
pub struct AffiliationForm {
    shell: FormShell,
    original: Option<Affiliation>,
    pub physician: Option<u64>,
    pub department: Option<u64>,
    pub primary: bool,
}

impl AffiliationForm {
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

    pub fn open_update(&mut self, current: Affiliation) {
        *self = Self::default();
        self.physician = Some(current.physician);
        self.department = Some(current.department);
        self.primary = current.primary;
        self.original = Some(current);
        self.shell.open(FormMode::Update);
    }

    /// Validate against the physician's already-fetched affiliations.
    pub fn validate(&self, current_affiliations: &[Affiliation]) -> Result<(), ValidationError> {
        if self.shell.mode().is_none() {
            return Err(ValidationError::NotOpen);
        }
        let physician = required(self.physician, "physician")?;
        required(self.department, "department")?;

        if self.shell.mode() == Some(FormMode::Create) && self.primary {
            if primary_of(current_affiliations, physician).is_some() {
                return Err(ValidationError::SecondPrimary);
            }
        }
        Ok(())
    }

    /// Submit against the physician's already-fetched affiliations, which
    /// the invariant check needs.
    pub async fn submit(
        &mut self,
        transport: &Transport,
        current_affiliations: &[Affiliation],
    ) -> Submission {
        let Some(mode) = self.shell.begin_submit() else {
            return Submission::Rejected(ValidationError::NotOpen);
        };
        let outcome = self.perform(mode, transport, current_affiliations).await;
        self.shell.finish(&outcome);
        outcome
    }

    async fn perform(
        &self,
        mode: FormMode,
        transport: &Transport,
        current_affiliations: &[Affiliation],
    ) -> Submission {
        if let Err(err) = self.validate(current_affiliations) {
            return Submission::Rejected(err);
        }
        let api = AffiliatedWithApi::new(transport);

        match mode {
            FormMode::Create => {
                let physician = match required(self.physician, "physician") {
                    Ok(id) => id,
                    Err(err) => return Submission::Rejected(err),
                };
                let department = match required(self.department, "department") {
                    Ok(id) => id,
                    Err(err) => return Submission::Rejected(err),
                };
                let record = Affiliation {
                    physician,
                    department,
                    primary: self.primary,
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

                let report = UpdateReport::default();
                if self.primary && !original.primary {
                    if let Err(fault) = api
                        .set_primary(original.physician, original.department)
                        .await
                    {
                        return Submission::Failed(report.with_failure("primary", fault));
                    }
                }
                Submission::Completed
            }
        }
    }
}
