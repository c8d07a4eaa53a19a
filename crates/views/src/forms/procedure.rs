//! The procedure form.

use crate::form::{
    required, required_text, FormMode, FormShell, Submission, UpdateReport, ValidationError,
};
use hms_client::{ProcedureApi, Transport};
use hms_core::Procedure;

/// Create: the full record. Update: name and cost. The backend accepts any
/// cost, so the non-negativity rule lives here.
#[derive(Debug, Default)]
pub struct ProcedureForm {
    shell: FormShell,
    original: Option<Procedure>,
    pub code: Option<u64>,
    pub name: String,
    pub cost: Option<f64>,
}

impl ProcedureForm {
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

    pub fn open_update(&mut self, current: Procedure) {
        *self = Self::default();
        self.code = Some(current.code);
        self.name = current.name.clone();
        self.cost = Some(current.cost);
        self.original = Some(current);
        self.shell.open(FormMode::Update);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.shell.mode().is_none() {
            return Err(ValidationError::NotOpen);
        }
        self.validated_record().map(|_| ())
    }

    fn validated_record(&self) -> Result<Procedure, ValidationError> {
        let cost = required(self.cost, "cost")?;
        if cost < 0.0 {
            return Err(ValidationError::NegativeCost);
        }
        Ok(Procedure {
            code: required(self.code, "code")?,
            name: required_text(&self.name, "name")?,
            cost,
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
        let api = ProcedureApi::new(transport);
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
                    if let Err(fault) = api.update_name(original.code, &target.name).await {
                        return Submission::Failed(report.with_failure("name", fault));
                    }
                    report.applied.push("name");
                }
                if target.cost != original.cost {
                    if let Err(fault) = api.update_cost(original.code, target.cost).await {
                        return Submission::Failed(report.with_failure("cost", fault));
                    }
                    report.applied.push("cost");
                }
                Submission::Completed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{recording_router, spawn_stub, test_transport};
    use std::sync::{Arc, Mutex};

    fn bypass() -> Procedure {
        Procedure {
            code: 77,
            name: "Coronary bypass".into(),
            cost: 4500.0,
        }
    }

    #[tokio::test]
    async fn test_negative_cost_is_rejected_before_any_call() {
        let transport = test_transport("http://127.0.0.1:9");

        let mut form = ProcedureForm::new();
        form.open_update(bypass());
        form.cost = Some(-1.0);

        let outcome = form.submit(&transport).await;
        assert!(matches!(
            outcome,
            Submission::Rejected(ValidationError::NegativeCost)
        ));
    }

    #[tokio::test]
    async fn test_cost_change_only_hits_cost_endpoint() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let base = spawn_stub(recording_router(seen.clone())).await;
        let transport = test_transport(&base);

        let mut form = ProcedureForm::new();
        form.open_update(bypass());
        form.cost = Some(4800.0);

        let outcome = form.submit(&transport).await;
        assert!(outcome.succeeded());
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["PUT /procedure/cost/77".to_owned()]
        );
    }
}
