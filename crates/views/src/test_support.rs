//! Test helpers shared by page and form tests: an in-process stub API
//! server, a throwaway session, and canned entity rows.

use axum::Router;
use chrono::TimeZone;
use hms_client::Transport;
use hms_core::{
    Appointment, ClientConfig, MemoryTokenStore, Navigator, Nurse, Patient, Physician, Position,
    Session,
};
use std::sync::Arc;
use std::time::Duration;

pub(crate) struct NullNavigator;

impl Navigator for NullNavigator {
    fn navigate(&self, _path: &str) {}
}

/// A router that answers 200 to everything and records "METHOD /path" for
/// each request, for asserting exactly which calls a submission made.
pub(crate) fn recording_router(seen: Arc<std::sync::Mutex<Vec<String>>>) -> Router {
    Router::new().fallback(move |req: axum::http::Request<axum::body::Body>| {
        let seen = seen.clone();
        async move {
            seen.lock()
                .unwrap()
                .push(format!("{} {}", req.method(), req.uri().path()));
            axum::http::StatusCode::OK
        }
    })
}

/// Serve `router` on an ephemeral local port, returning the base URL.
pub(crate) async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("should bind an ephemeral port");
    let addr = listener.local_addr().expect("listener should have an address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server failed");
    });
    format!("http://{addr}")
}

/// A transport pointed at `base` with an anonymous in-memory session.
pub(crate) fn test_transport(base: &str) -> Transport {
    let cfg =
        ClientConfig::new(base, Duration::from_secs(5)).expect("test base URL should be valid");
    let session = Arc::new(Session::new(
        Arc::new(MemoryTokenStore::new()),
        Arc::new(NullNavigator),
    ));
    Transport::new(&cfg, session).expect("Transport::new should succeed")
}

pub(crate) fn test_patient() -> Patient {
    Patient {
        ssn: 100000001,
        name: "John Smith".into(),
        address: "42 Elm Street".into(),
        phone: "555-0199".into(),
        insurance_id: 68476213,
        pcp: 1,
    }
}

pub(crate) fn test_physician() -> Physician {
    Physician {
        employee_id: 1,
        name: "Dr. Keers".into(),
        position: Position::Head,
        ssn: 111111111,
    }
}

pub(crate) fn test_nurse() -> Nurse {
    Nurse {
        employee_id: 101,
        name: "Carla Espinosa".into(),
        position: "Head Nurse".into(),
        registered: true,
        ssn: 222222222,
    }
}

pub(crate) fn test_appointment() -> Appointment {
    Appointment {
        appointment_id: 13216584,
        patient: 100000001,
        prep_nurse: Some(101),
        physician: 1,
        start: chrono::Utc.with_ymd_and_hms(2026, 4, 24, 10, 0, 0).unwrap(),
        end: chrono::Utc.with_ymd_and_hms(2026, 4, 24, 11, 0, 0).unwrap(),
        examination_room: "A".into(),
    }
}
