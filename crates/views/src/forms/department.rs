//! The department form.

use crate::form::{
    required, required_text, FormMode, FormShell, Submission, UpdateReport, ValidationError,
};
use hms_client::{DepartmentApi, Transport};
use hms_core::Department;

/// Create: the full record, head optional. Update: name, then head — the
/// head is only submitted when one is set (there is no endpoint for
/// clearing a head, so `None` is treated as "leave unchanged").
#[derive(Debug, Default)]
pub struct DepartmentForm {
    shell: FormShell,
    original: Option<Department>,
    pub department_id: Option<u64>,
    pub name: String,
    pub head: Option<u64>,
}

impl DepartmentForm {
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

    pub fn open_update(&mut self, current: Department) {
        *self = Self::default();
        self.department_id = Some(current.department_id);
        self.name = current.name.clone();
        self.head = current.head;
        self.original = Some(current);
        self.shell.open(FormMode::Update);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.shell.mode() {
            None => Err(ValidationError::NotOpen),
            Some(FormMode::Create) => self.validated_record().map(|_| ()),
            Some(FormMode::Update) => required_text(&self.name, "name").map(|_| ()),
        }
    }

    fn validated_record(&self) -> Result<Department, ValidationError> {
        Ok(Department {
            department_id: required(self.department_id, "department id")?,
            name: required_text(&self.name, "name")?,
            head: self.head,
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
        let api = DepartmentApi::new(transport);
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
                let name = match required_text(&self.name, "name") {
                    Ok(name) => name,
                    Err(err) => return Submission::Rejected(err),
                };

                let mut report = UpdateReport::default();
                if name != original.name {
                    if let Err(fault) = api.update_name(original.department_id, &name).await {
                        return Submission::Failed(report.with_failure("name", fault));
                    }
                    report.applied.push("name");
                }
                if let Some(head) = self.head {
                    if Some(head) != original.head {
                        if let Err(fault) = api.update_head(original.department_id, head).await {
                            return Submission::Failed(report.with_failure("head", fault));
                        }
                        report.applied.push("head");
                    }
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

    fn oncology() -> Department {
        Department {
            department_id: 5,
            name: "Oncology".into(),
            head: Some(101),
        }
    }

    #[tokio::test]
    async fn test_update_head_only_hits_head_endpoint() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let base = spawn_stub(recording_router(seen.clone())).await;
        let transport = test_transport(&base);

        let mut form = DepartmentForm::new();
        form.open_update(oncology());
        form.head = Some(102);

        let outcome = form.submit(&transport).await;
        assert!(outcome.succeeded());
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["PUT /department/update/headid/5".to_owned()]
        );
    }

    #[tokio::test]
    async fn test_unset_head_is_left_unchanged() {
        let transport = test_transport("http://127.0.0.1:9");

        let mut form = DepartmentForm::new();
        form.open_update(oncology());
        form.head = None;

        let outcome = form.submit(&transport).await;
        assert!(
            outcome.succeeded(),
            "clearing the head has no endpoint; None must not submit anything"
        );
    }

    #[tokio::test]
    async fn test_create_without_head_is_allowed() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let base = spawn_stub(recording_router(seen.clone())).await;
        let transport = test_transport(&base);

        let mut form = DepartmentForm::new();
        form.open_create();
        form.department_id = Some(7);
        form.name = "Radiology".into();

        let outcome = form.submit(&transport).await;
        assert!(outcome.succeeded());
        assert_eq!(*seen.lock().unwrap(), vec!["POST /department".to_owned()]);
    }
}
