//! Collection loading state.
//!
//! Every list view follows the same lifecycle: it mounts in `Loading`,
//! issues its fetches, and lands in `Ready` or `Failed`. A monotonically
//! increasing load epoch guards against the stale-response race: when a new
//! load begins before an old one resolves (a changed selector, a re-fetch
//! after a submit), the old response must not clobber the newer state.

use hms_client::ClientResult;
use std::future::Future;

/// What a view has to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Initial state; render a placeholder, accept no interaction.
    Loading,
    /// The fetched collection. May be empty — an empty collection is a
    /// "nothing here" placeholder, never an error.
    Ready(T),
    /// A human-readable failure message replacing the view's content.
    Failed(String),
}

/// Proof of having started a particular load; pass it back to
/// [`CollectionView::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken {
    epoch: u64,
}

/// Load-state holder for one view's collection.
#[derive(Debug)]
pub struct CollectionView<T> {
    state: LoadState<T>,
    epoch: u64,
}

impl<T> CollectionView<T> {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            epoch: 0,
        }
    }

    /// Start a new load: bump the epoch, drop back to `Loading`.
    ///
    /// Any load started earlier becomes stale; its eventual result will be
    /// discarded by [`resolve`](Self::resolve).
    pub fn begin_load(&mut self) -> LoadToken {
        self.epoch += 1;
        self.state = LoadState::Loading;
        LoadToken { epoch: self.epoch }
    }

    /// Apply the outcome of the load identified by `token`.
    ///
    /// Returns `false` (and changes nothing) when the token is stale.
    pub fn resolve(&mut self, token: LoadToken, result: ClientResult<T>) -> bool {
        if token.epoch != self.epoch {
            tracing::debug!(
                stale = token.epoch,
                current = self.epoch,
                "discarding stale load response"
            );
            return false;
        }

        self.state = match result {
            Ok(rows) => LoadState::Ready(rows),
            Err(fault) => {
                tracing::warn!(%fault, "collection load failed");
                LoadState::Failed(fault.to_string())
            }
        };
        true
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// The loaded collection, if ready.
    pub fn rows(&self) -> Option<&T> {
        match &self.state {
            LoadState::Ready(rows) => Some(rows),
            _ => None,
        }
    }

    /// The failure message, if the load failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for CollectionView<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The plain single-collection table page: fetch all rows, render them.
///
/// Entities without display joins or selectors (patients, physicians,
/// nurses, procedures) use this directly; composite pages in
/// [`crate::pages`] wrap a [`CollectionView`] themselves.
#[derive(Debug, Default)]
pub struct TablePage<T> {
    pub view: CollectionView<Vec<T>>,
}

impl<T> TablePage<T> {
    pub fn new() -> Self {
        Self {
            view: CollectionView::new(),
        }
    }

    /// Run one full load cycle with the given fetch future.
    pub async fn load_with<Fut>(&mut self, fetch: Fut) -> bool
    where
        Fut: Future<Output = ClientResult<Vec<T>>>,
    {
        let token = self.view.begin_load();
        let result = fetch.await;
        self.view.resolve(token, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hms_client::Fault;

    #[test]
    fn test_resolve_moves_loading_to_ready() {
        let mut view = CollectionView::new();
        let token = view.begin_load();

        assert!(view.is_loading());
        assert!(view.resolve(token, Ok(vec![1, 2, 3])));
        assert_eq!(view.rows(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_resolve_failure_stores_message() {
        let mut view: CollectionView<Vec<u64>> = CollectionView::new();
        let token = view.begin_load();

        view.resolve(
            token,
            Err(Fault::Status {
                status: 500,
                message: "boom".into(),
            }),
        );

        assert!(view.rows().is_none());
        assert_eq!(view.error(), Some("server returned 500: boom"));
    }

    #[test]
    fn test_stale_token_is_discarded() {
        let mut view = CollectionView::new();
        let stale = view.begin_load();
        let current = view.begin_load();

        assert!(
            !view.resolve(stale, Ok(vec!["old"])),
            "a response for a superseded load must be ignored"
        );
        assert!(view.is_loading(), "stale resolve must not change state");

        assert!(view.resolve(current, Ok(vec!["new"])));
        assert_eq!(view.rows(), Some(&vec!["new"]));
    }

    #[test]
    fn test_stale_failure_cannot_overwrite_newer_success() {
        let mut view = CollectionView::new();
        let stale = view.begin_load();
        let current = view.begin_load();

        view.resolve(current, Ok(vec![5u64]));
        view.resolve(
            stale,
            Err(Fault::Status {
                status: 500,
                message: "late".into(),
            }),
        );

        assert_eq!(view.rows(), Some(&vec![5u64]));
    }

    #[test]
    fn test_empty_collection_is_ready_not_failed() {
        let mut view: CollectionView<Vec<u64>> = CollectionView::new();
        let token = view.begin_load();
        view.resolve(token, Ok(vec![]));

        assert_eq!(view.rows(), Some(&vec![]));
        assert!(view.error().is_none());
    }
}
