//! Department endpoints.
//!
//! Departments are the one entity with a delete path; the confirm-twice
//! affordance guarding it lives in the view layer.

use crate::error::ClientResult;
use crate::transport::Transport;
use hms_core::{Department, Physician};
use serde::Serialize;

pub struct DepartmentApi<'a> {
    transport: &'a Transport,
}

#[derive(Serialize)]
struct NamePayload<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HeadPayload {
    head_id: u64,
}

impl<'a> DepartmentApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List all departments.
    pub async fn list(&self) -> ClientResult<Vec<Department>> {
        self.transport.get("/department/").await
    }

    /// Fetch one department.
    pub async fn get(&self, department_id: u64) -> ClientResult<Department> {
        self.transport
            .get(&format!("/department/{department_id}"))
            .await
    }

    /// Create a department from the full record.
    pub async fn create(&self, department: &Department) -> ClientResult<()> {
        self.transport.post("/department", department).await
    }

    /// Update the name only.
    pub async fn update_name(&self, department_id: u64, name: &str) -> ClientResult<()> {
        self.transport
            .put(
                &format!("/department/update/deptname/{department_id}"),
                &NamePayload { name },
            )
            .await
    }

    /// Update the head only.
    pub async fn update_head(&self, department_id: u64, head_id: u64) -> ClientResult<()> {
        self.transport
            .put(
                &format!("/department/update/headid/{department_id}"),
                &HeadPayload { head_id },
            )
            .await
    }

    /// The physician heading a department.
    pub async fn head(&self, department_id: u64) -> ClientResult<Physician> {
        self.transport
            .get(&format!("/department/head/{department_id}"))
            .await
    }

    /// Delete a department.
    pub async fn delete(&self, department_id: u64) -> ClientResult<()> {
        self.transport
            .delete(&format!("/department/{department_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_stub, test_transport, TestSession};
    use axum::extract::Path;
    use axum::routing::{delete, get, post};
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    fn stateful_router(store: Arc<Mutex<Vec<Department>>>) -> Router {
        let list_store = store.clone();
        let create_store = store.clone();
        let delete_store = store.clone();

        Router::new()
            .route(
                "/department/",
                get(move || {
                    let store = list_store.clone();
                    async move { Json(store.lock().unwrap().clone()) }
                }),
            )
            .route(
                "/department",
                post(move |Json(new): Json<Department>| {
                    let store = create_store.clone();
                    async move {
                        store.lock().unwrap().push(new);
                    }
                }),
            )
            .route(
                "/department/:id",
                delete(move |Path(id): Path<u64>| {
                    let store = delete_store.clone();
                    async move {
                        store.lock().unwrap().retain(|d| d.department_id != id);
                    }
                }),
            )
    }

    #[tokio::test]
    async fn test_created_department_appears_in_subsequent_list() {
        let store = Arc::new(Mutex::new(Vec::new()));
        let base = spawn_stub(stateful_router(store)).await;

        let session = TestSession::new();
        let transport = test_transport(&base, &session);
        let api = DepartmentApi::new(&transport);

        api.create(&Department {
            department_id: 5,
            name: "Oncology".to_owned(),
            head: Some(101),
        })
        .await
        .expect("create should succeed");

        let listed = api.list().await.expect("list should succeed");
        assert!(
            listed
                .iter()
                .any(|d| d.department_id == 5 && d.name == "Oncology" && d.head == Some(101)),
            "created department should be visible in the list"
        );
    }

    #[tokio::test]
    async fn test_delete_removes_department() {
        let store = Arc::new(Mutex::new(vec![Department {
            department_id: 5,
            name: "Oncology".to_owned(),
            head: None,
        }]));
        let base = spawn_stub(stateful_router(store)).await;

        let session = TestSession::new();
        let transport = test_transport(&base, &session);
        let api = DepartmentApi::new(&transport);

        api.delete(5).await.expect("delete should succeed");
        assert!(api.list().await.unwrap().is_empty());
    }
}
