//! The departments page.
//!
//! The only entity with a delete affordance, guarded by a confirm-twice
//! interaction: the first delete request arms the row, the second request
//! for the same row actually issues the DELETE. Any other interaction
//! disarms.

use crate::load::CollectionView;
use hms_client::{ClientResult, DepartmentApi, Transport};
use hms_core::Department;

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStep {
    /// First click: the row is armed, nothing was sent.
    Armed,
    /// Second click: the DELETE went through.
    Deleted,
}

#[derive(Debug, Default)]
pub struct DepartmentsPage {
    pub view: CollectionView<Vec<Department>>,
    armed: Option<u64>,
}

impl DepartmentsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, transport: &Transport) -> bool {
        self.armed = None;
        let token = self.view.begin_load();
        let result = DepartmentApi::new(transport).list().await;
        self.view.resolve(token, result)
    }

    /// The department currently armed for deletion, if any.
    pub fn armed(&self) -> Option<u64> {
        self.armed
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }

    /// One step of the confirm-twice delete. Arms on the first request for a
    /// row; deletes (and re-fetches) on the second consecutive request for
    /// the same row. Requesting a different row re-arms on that row.
    pub async fn request_delete(
        &mut self,
        transport: &Transport,
        department_id: u64,
    ) -> ClientResult<DeleteStep> {
        if self.armed != Some(department_id) {
            self.armed = Some(department_id);
            return Ok(DeleteStep::Armed);
        }

        self.armed = None;
        DepartmentApi::new(transport).delete(department_id).await?;
        self.load(transport).await;
        Ok(DeleteStep::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_stub, test_transport};
    use axum::extract::Path;
    use axum::routing::{delete, get};
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    fn department(id: u64, name: &str) -> Department {
        Department {
            department_id: id,
            name: name.to_owned(),
            head: None,
        }
    }

    fn router(store: Arc<Mutex<Vec<Department>>>) -> Router {
        let list_store = store.clone();
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
    async fn test_first_request_arms_without_deleting() {
        let store = Arc::new(Mutex::new(vec![department(5, "Oncology")]));
        let base = spawn_stub(router(store.clone())).await;
        let transport = test_transport(&base);

        let mut page = DepartmentsPage::new();
        page.load(&transport).await;

        let step = page.request_delete(&transport, 5).await.unwrap();
        assert_eq!(step, DeleteStep::Armed);
        assert_eq!(page.armed(), Some(5));
        assert_eq!(store.lock().unwrap().len(), 1, "nothing deleted yet");
    }

    #[tokio::test]
    async fn test_second_request_deletes_and_refetches() {
        let store = Arc::new(Mutex::new(vec![department(5, "Oncology")]));
        let base = spawn_stub(router(store.clone())).await;
        let transport = test_transport(&base);

        let mut page = DepartmentsPage::new();
        page.load(&transport).await;

        page.request_delete(&transport, 5).await.unwrap();
        let step = page.request_delete(&transport, 5).await.unwrap();

        assert_eq!(step, DeleteStep::Deleted);
        assert_eq!(page.armed(), None);
        assert!(store.lock().unwrap().is_empty());
        assert_eq!(
            page.view.rows().map(Vec::len),
            Some(0),
            "list should be re-fetched after the delete"
        );
    }

    #[tokio::test]
    async fn test_requesting_another_row_rearms() {
        let store = Arc::new(Mutex::new(vec![
            department(5, "Oncology"),
            department(6, "Cardiology"),
        ]));
        let base = spawn_stub(router(store.clone())).await;
        let transport = test_transport(&base);

        let mut page = DepartmentsPage::new();
        page.load(&transport).await;

        page.request_delete(&transport, 5).await.unwrap();
        let step = page.request_delete(&transport, 6).await.unwrap();

        assert_eq!(step, DeleteStep::Armed);
        assert_eq!(page.armed(), Some(6));
        assert_eq!(store.lock().unwrap().len(), 2, "nothing deleted");
    }
}
