//! Authentication session state.
//!
//! The original front end kept its bearer token in ambient browser storage,
//! read by an interceptor on every request. Here the same state is an
//! explicit [`Session`] object injected into the transport at construction,
//! so each environment supplies its own token storage and its own reaction
//! to a forced logout.
//!
//! The login endpoint itself is an external collaborator: a session only
//! stores and clears tokens obtained elsewhere.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Persistent storage for the bearer token.
///
/// Implementations are best-effort: storage failures are logged, not
/// propagated, matching the fire-and-continue semantics of the browser
/// storage the original relied on.
pub trait TokenStore: Send + Sync {
    /// The currently stored token, if any.
    fn token(&self) -> Option<String>;
    /// Store a token, replacing any previous one.
    fn store(&self, token: &str);
    /// Remove the stored token.
    fn clear(&self);
}

/// Navigation side effects requested by the client layer.
///
/// The only navigation the client layer ever performs is the forced redirect
/// to `/login` after a 401 response.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// In-memory token store.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|guard| guard.clone())
    }

    fn store(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}

/// Token store backed by a file on disk.
///
/// The terminal client's analogue of browser local storage: the token
/// survives across invocations of the binary.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_owned())
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!("failed to read token file {}: {}", self.path.display(), err);
                None
            }
        }
    }

    fn store(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                tracing::warn!("failed to create token directory {}: {}", parent.display(), err);
                return;
            }
        }
        if let Err(err) = std::fs::write(&self.path, token) {
            tracing::warn!("failed to write token file {}: {}", self.path.display(), err);
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!("failed to remove token file {}: {}", self.path.display(), err);
            }
        }
    }
}

/// The authenticated (or unauthenticated) session threaded into the
/// transport.
///
/// Absence of a token does not gate requests client-side; unauthenticated
/// requests proceed until the server answers 401, at which point
/// [`Session::expire`] purges the token and requests navigation to `/login`.
pub struct Session {
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// The bearer token to attach to outgoing requests, if one is stored.
    pub fn bearer(&self) -> Option<String> {
        self.store.token()
    }

    /// Store a token obtained from the (out-of-scope) login collaborator.
    pub fn store_token(&self, token: &str) {
        self.store.store(token);
    }

    /// Discard any stored token without triggering navigation.
    pub fn logout(&self) {
        self.store.clear();
    }

    /// React to a 401: purge the stored token and redirect to the login
    /// page. The originating fault is still propagated by the caller.
    pub fn expire(&self) {
        tracing::warn!("session expired; clearing token and redirecting to /login");
        self.store.clear();
        self.navigator.navigate("/login");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: StdMutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visited.lock().unwrap().push(path.to_owned());
        }
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.token(), None);
        store.store("abc123");
        assert_eq!(store.token(), Some("abc123".to_owned()));
        store.clear();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileTokenStore::new(temp_dir.path().join("auth").join("token"));

        assert_eq!(store.token(), None, "missing file should read as no token");

        store.store("tok-456");
        assert_eq!(store.token(), Some("tok-456".to_owned()));

        store.clear();
        assert_eq!(store.token(), None);
        store.clear(); // clearing twice must not fail
    }

    #[test]
    fn test_file_store_treats_blank_file_as_absent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("token");
        std::fs::write(&path, "  \n").unwrap();

        let store = FileTokenStore::new(path);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_expire_clears_token_and_navigates_to_login() {
        let navigator = Arc::new(RecordingNavigator::default());
        let session = Session::new(Arc::new(MemoryTokenStore::new()), navigator.clone());

        session.store_token("expiring");
        session.expire();

        assert_eq!(session.bearer(), None, "token should be purged");
        assert_eq!(*navigator.visited.lock().unwrap(), vec!["/login".to_owned()]);
    }

    #[test]
    fn test_logout_does_not_navigate() {
        let navigator = Arc::new(RecordingNavigator::default());
        let session = Session::new(Arc::new(MemoryTokenStore::new()), navigator.clone());

        session.store_token("tok");
        session.logout();

        assert_eq!(session.bearer(), None);
        assert!(navigator.visited.lock().unwrap().is_empty());
    }
}
