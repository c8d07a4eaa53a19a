//! Procedure endpoints.

use crate::error::ClientResult;
use crate::transport::Transport;
use hms_core::Procedure;
use serde::Serialize;

pub struct ProcedureApi<'a> {
    transport: &'a Transport,
}

#[derive(Serialize)]
struct NamePayload<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct CostPayload {
    cost: f64,
}

impl<'a> ProcedureApi<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List all procedures.
    pub async fn list(&self) -> ClientResult<Vec<Procedure>> {
        self.transport.get("/procedure/").await
    }

    /// Create a procedure from the full record.
    pub async fn create(&self, procedure: &Procedure) -> ClientResult<()> {
        self.transport.post("/procedure", procedure).await
    }

    /// Update the name only.
    pub async fn update_name(&self, code: u64, name: &str) -> ClientResult<()> {
        self.transport
            .put(&format!("/procedure/name/{code}"), &NamePayload { name })
            .await
    }

    /// Update the cost only.
    pub async fn update_cost(&self, code: u64, cost: f64) -> ClientResult<()> {
        self.transport
            .put(&format!("/procedure/cost/{code}"), &CostPayload { cost })
            .await
    }

    /// The cost of one procedure.
    pub async fn cost(&self, code: u64) -> ClientResult<f64> {
        self.transport.get(&format!("/procedure/cost/{code}")).await
    }

    /// Find one procedure by code.
    ///
    /// No backend lookup endpoint exists; the full collection is fetched and
    /// scanned client-side.
    pub async fn find_by_code(&self, code: u64) -> ClientResult<Option<Procedure>> {
        let procedures = self.list().await?;
        Ok(procedures.into_iter().find(|p| p.code == code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_stub, test_transport, TestSession};
    use axum::routing::get;
    use axum::{Json, Router};

    #[tokio::test]
    async fn test_find_by_code_scans_full_collection() {
        let router = Router::new().route(
            "/procedure/",
            get(|| async {
                Json(vec![
                    Procedure {
                        code: 1,
                        name: "Reverse Rhinopodoplasty".to_owned(),
                        cost: 1500.0,
                    },
                    Procedure {
                        code: 77,
                        name: "Obfuscated Dermogastrotomy".to_owned(),
                        cost: 4500.0,
                    },
                ])
            }),
        );
        let base = spawn_stub(router).await;

        let session = TestSession::new();
        let transport = test_transport(&base, &session);
        let api = ProcedureApi::new(&transport);

        let found = api.find_by_code(77).await.unwrap();
        assert_eq!(found.map(|p| p.cost), Some(4500.0));
        assert!(api.find_by_code(404).await.unwrap().is_none());
    }
}
