//! Test helpers: an in-process stub API server and canned sessions.

use crate::transport::Transport;
use axum::Router;
use hms_core::{ClientConfig, MemoryTokenStore, Navigator, Session};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Navigator that records requested paths instead of navigating.
pub(crate) struct RecordingNavigator {
    visited: Arc<Mutex<Vec<String>>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.lock().unwrap().push(path.to_owned());
    }
}

/// A session over an in-memory token store with a recording navigator.
pub(crate) struct TestSession {
    pub session: Arc<Session>,
    visited: Arc<Mutex<Vec<String>>>,
}

impl TestSession {
    pub fn new() -> Self {
        let visited = Arc::new(Mutex::new(Vec::new()));
        let navigator = RecordingNavigator {
            visited: visited.clone(),
        };
        let session = Arc::new(Session::new(
            Arc::new(MemoryTokenStore::new()),
            Arc::new(navigator),
        ));
        Self { session, visited }
    }

    /// The navigation paths requested so far.
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
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

/// A transport pointed at `base` with a short timeout.
pub(crate) fn test_transport(base: &str, session: &TestSession) -> Transport {
    let cfg =
        ClientConfig::new(base, Duration::from_secs(5)).expect("test base URL should be valid");
    Transport::new(&cfg, session.session.clone()).expect("Transport::new should succeed")
}
