//! In-memory workspace store for the switcher.
//!
//! The `Backend` trait is GPUI-independent. Row actions apply immediately;
//! selecting and creating return futures that simulate network latency.
//!
//! ## Reactive State
//!
//! Every mutation broadcasts the full list via `tokio::sync::watch`.
//! The panel subscribes and re-derives its rows from each snapshot.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use parking_lot::Mutex;
use switcher_core::{BackendError, BehaviorConfig, Workspace, WorkspaceId};
use tokio::sync::watch;

use crate::model::move_by_id;

// =============================================================================
// Backend State (Type Alias)
// =============================================================================

/// Raw workspace list in storage order.
pub type BackendState = Vec<Workspace>;

// =============================================================================
// Backend Trait
// =============================================================================

/// Operations on the workspace list.
///
/// Synchronous methods take effect before they return. The async ones
/// return futures so the caller decides where to run them.
pub trait Backend: Send + Sync {
    /// Subscribe to state changes. Clone the receiver for each subscriber.
    fn subscribe(&self) -> watch::Receiver<BackendState>;

    /// Current list.
    fn snapshot(&self) -> BackendState;

    /// Flip the favorite flag. Returns the new value.
    fn toggle_favorite(&self, id: &WorkspaceId) -> Result<bool, BackendError>;

    /// Remove a workspace from the list.
    fn remove(&self, id: &WorkspaceId) -> Result<Workspace, BackendError>;

    /// Move `dragged` to where `over` is. Returns whether anything moved.
    fn reorder(&self, dragged: &WorkspaceId, over: &WorkspaceId) -> Result<bool, BackendError>;

    /// Make `id` the only active workspace.
    fn select(&self, id: WorkspaceId) -> BoxFuture<'static, Result<Workspace, BackendError>>;

    /// Create a personal workspace and put it first in the list.
    fn create(&self, name: String) -> BoxFuture<'static, Result<Workspace, BackendError>>;
}

// =============================================================================
// In-Memory Backend
// =============================================================================

/// Latency applied to the async operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub select: Duration,
    pub create: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            select: Duration::from_millis(500),
            create: Duration::from_millis(800),
        }
    }
}

impl From<&BehaviorConfig> for Latency {
    fn from(behavior: &BehaviorConfig) -> Self {
        Self {
            select: behavior.select_delay(),
            create: behavior.create_delay(),
        }
    }
}

/// Backend holding the list in memory.
pub struct InMemoryBackend {
    store: Arc<Store>,
    latency: Latency,
}

struct Store {
    workspaces: Mutex<Vec<Workspace>>,
    state_tx: watch::Sender<BackendState>,
}

impl Store {
    /// Apply `f` under the lock and broadcast the result.
    fn mutate<T>(&self, f: impl FnOnce(&mut Vec<Workspace>) -> T) -> T {
        let mut workspaces = self.workspaces.lock();
        let out = f(&mut workspaces);
        self.state_tx.send_replace(workspaces.clone());
        out
    }
}

impl InMemoryBackend {
    pub fn new(workspaces: Vec<Workspace>) -> Self {
        let (state_tx, _) = watch::channel(workspaces.clone());
        Self {
            store: Arc::new(Store {
                workspaces: Mutex::new(workspaces),
                state_tx,
            }),
            latency: Latency::default(),
        }
    }

    /// Use custom latency.
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }
}

fn not_found(id: &WorkspaceId) -> BackendError {
    BackendError::NotFound(id.to_string())
}

impl Backend for InMemoryBackend {
    fn subscribe(&self) -> watch::Receiver<BackendState> {
        self.store.state_tx.subscribe()
    }

    fn snapshot(&self) -> BackendState {
        self.store.workspaces.lock().clone()
    }

    fn toggle_favorite(&self, id: &WorkspaceId) -> Result<bool, BackendError> {
        self.store.mutate(|list| {
            let ws = list
                .iter_mut()
                .find(|w| &w.id == id)
                .ok_or_else(|| not_found(id))?;
            ws.is_favorite = !ws.is_favorite;
            tracing::debug!("{} favorite={}", ws.name, ws.is_favorite);
            Ok(ws.is_favorite)
        })
    }

    fn remove(&self, id: &WorkspaceId) -> Result<Workspace, BackendError> {
        self.store.mutate(|list| {
            let index = list
                .iter()
                .position(|w| &w.id == id)
                .ok_or_else(|| not_found(id))?;
            if !list[index].can_remove() {
                return Err(BackendError::Rejected(format!(
                    "{} is the current workspace",
                    list[index].name
                )));
            }
            let ws = list.remove(index);
            tracing::debug!("Removed {}", ws.name);
            Ok(ws)
        })
    }

    fn reorder(&self, dragged: &WorkspaceId, over: &WorkspaceId) -> Result<bool, BackendError> {
        self.store.mutate(|list| {
            if !list.iter().any(|w| &w.id == dragged) {
                return Err(not_found(dragged));
            }
            Ok(move_by_id(list, dragged, over))
        })
    }

    fn select(&self, id: WorkspaceId) -> BoxFuture<'static, Result<Workspace, BackendError>> {
        let store = self.store.clone();
        let delay = tokio::time::sleep(self.latency.select);

        Box::pin(async move {
            delay.await;
            store.mutate(|list| {
                if !list.iter().any(|w| w.id == id) {
                    return Err(not_found(&id));
                }
                let mut selected = None;
                for ws in list.iter_mut() {
                    ws.is_active = ws.id == id;
                    if ws.is_active {
                        selected = Some(ws.clone());
                    }
                }
                selected.ok_or_else(|| not_found(&id))
            })
        })
    }

    fn create(&self, name: String) -> BoxFuture<'static, Result<Workspace, BackendError>> {
        let store = self.store.clone();
        let delay = tokio::time::sleep(self.latency.create);

        Box::pin(async move {
            delay.await;
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(BackendError::Rejected(
                    "workspace name is empty".to_string(),
                ));
            }
            let ws = Workspace::new_personal(name);
            store.mutate(|list| list.insert(0, ws.clone()));
            Ok(ws)
        })
    }
}

// =============================================================================
// Mock Backend for Testing
// =============================================================================

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Records calls and returns canned results without latency.
    pub struct MockBackend {
        pub calls: Arc<Mutex<Vec<String>>>,
        pub fail_with: Option<BackendError>,
        state_tx: watch::Sender<BackendState>,
    }

    impl MockBackend {
        pub fn new(workspaces: Vec<Workspace>) -> Self {
            let (state_tx, _) = watch::channel(workspaces);
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                fail_with: None,
                state_tx,
            }
        }

        /// Make every operation fail.
        pub fn failing(mut self, error: BackendError) -> Self {
            self.fail_with = Some(error);
            self
        }

        fn record(&self, call: String) -> Result<(), BackendError> {
            self.calls.lock().push(call);
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    impl Backend for MockBackend {
        fn subscribe(&self) -> watch::Receiver<BackendState> {
            self.state_tx.subscribe()
        }

        fn snapshot(&self) -> BackendState {
            self.state_tx.borrow().clone()
        }

        fn toggle_favorite(&self, id: &WorkspaceId) -> Result<bool, BackendError> {
            self.record(format!("toggle_favorite {}", id))?;
            Ok(true)
        }

        fn remove(&self, id: &WorkspaceId) -> Result<Workspace, BackendError> {
            self.record(format!("remove {}", id))?;
            Ok(Workspace::new_personal(id.to_string()))
        }

        fn reorder(&self, dragged: &WorkspaceId, over: &WorkspaceId) -> Result<bool, BackendError> {
            self.record(format!("reorder {} {}", dragged, over))?;
            Ok(true)
        }

        fn select(&self, id: WorkspaceId) -> BoxFuture<'static, Result<Workspace, BackendError>> {
            let result = self
                .record(format!("select {}", id))
                .map(|_| Workspace::new_personal(id.to_string()));
            Box::pin(async move { result })
        }

        fn create(&self, name: String) -> BoxFuture<'static, Result<Workspace, BackendError>> {
            let result = self
                .record(format!("create {}", name))
                .map(|_| Workspace::new_personal(name));
            Box::pin(async move { result })
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::mock::*;
    use super::*;
    use switcher_core::builtin_workspaces;

    fn backend() -> InMemoryBackend {
        InMemoryBackend::new(builtin_workspaces()).with_latency(Latency {
            select: Duration::ZERO,
            create: Duration::ZERO,
        })
    }

    #[test]
    fn test_latency_from_behavior() {
        let behavior = BehaviorConfig {
            select_delay_ms: 10,
            create_delay_ms: 20,
            ..BehaviorConfig::default()
        };
        let latency = Latency::from(&behavior);
        assert_eq!(latency.select, Duration::from_millis(10));
        assert_eq!(latency.create, Duration::from_millis(20));
        assert_eq!(Latency::from(&BehaviorConfig::default()), Latency::default());
    }

    fn id_of(backend: &InMemoryBackend, name: &str) -> WorkspaceId {
        backend
            .snapshot()
            .into_iter()
            .find(|w| w.name == name)
            .unwrap()
            .id
    }

    #[test]
    fn test_toggle_favorite_broadcasts() {
        let backend = backend();
        let mut rx = backend.subscribe();
        let id = id_of(&backend, "DevKitchen");

        assert!(backend.toggle_favorite(&id).unwrap());
        assert!(rx.has_changed().unwrap());
        let state = rx.borrow_and_update();
        assert!(state.iter().find(|w| w.id == id).unwrap().is_favorite);
    }

    #[test]
    fn test_toggle_favorite_missing() {
        let backend = backend();
        let err = backend.toggle_favorite(&"nope".into()).unwrap_err();
        assert!(matches!(err, BackendError::NotFound(_)));
    }

    #[test]
    fn test_remove() {
        let backend = backend();
        let id = id_of(&backend, "Payment Gateway");

        let removed = backend.remove(&id).unwrap();
        assert_eq!(removed.name, "Payment Gateway");
        assert_eq!(backend.snapshot().len(), 11);
    }

    #[test]
    fn test_remove_active_non_favorite_rejected() {
        let mut workspaces = builtin_workspaces();
        for ws in &mut workspaces {
            ws.is_favorite = false;
        }
        let backend = InMemoryBackend::new(workspaces);
        let id = backend
            .snapshot()
            .into_iter()
            .find(|w| w.is_active)
            .unwrap()
            .id;

        assert!(matches!(backend.remove(&id), Err(BackendError::Rejected(_))));
        assert_eq!(backend.snapshot().len(), 12);
    }

    #[test]
    fn test_reorder() {
        let backend = backend();
        let list = backend.snapshot();
        let (a, b) = (list[0].id.clone(), list[1].id.clone());

        assert!(backend.reorder(&a, &b).unwrap());
        let list = backend.snapshot();
        assert_eq!(list[0].id, b);
        assert_eq!(list[1].id, a);

        assert!(!backend.reorder(&a, &a).unwrap());
        assert!(backend.reorder(&"ghost".into(), &a).is_err());
    }

    #[tokio::test]
    async fn test_select_sets_single_active() {
        let backend = backend();
        let id = id_of(&backend, "GraphQL Best Practices");

        let selected = backend.select(id.clone()).await.unwrap();
        assert!(selected.is_active);

        let active: Vec<_> = backend
            .snapshot()
            .into_iter()
            .filter(|w| w.is_active)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, id);
    }

    #[tokio::test]
    async fn test_select_removed_workspace() {
        let backend = backend();
        let id = id_of(&backend, "DevKitchen");
        let pending = backend.select(id.clone());
        backend.remove(&id).unwrap();

        assert!(matches!(pending.await, Err(BackendError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_prepends() {
        let backend = backend();
        let ws = backend.create("  Scratchpad ".to_string()).await.unwrap();
        assert_eq!(ws.name, "Scratchpad");

        let list = backend.snapshot();
        assert_eq!(list.len(), 13);
        assert_eq!(list[0].id, ws.id);
        assert_eq!(list[0].creator, "You");
    }

    #[tokio::test]
    async fn test_create_empty_name_rejected() {
        let backend = backend();
        let err = backend.create("   ".to_string()).await.unwrap_err();
        assert!(matches!(err, BackendError::Rejected(_)));
        assert_eq!(backend.snapshot().len(), 12);
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_waits_for_latency() {
        let backend = InMemoryBackend::new(builtin_workspaces());
        let id = id_of(&backend, "DevKitchen");

        let start = tokio::time::Instant::now();
        backend.select(id).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_mock_backend_records_calls() {
        let backend = MockBackend::new(builtin_workspaces());
        backend.toggle_favorite(&"w1".into()).unwrap();
        backend.create("New".to_string()).await.unwrap();

        assert_eq!(
            *backend.calls.lock(),
            vec!["toggle_favorite w1".to_string(), "create New".to_string()]
        );
        assert_eq!(backend.snapshot().len(), 12);
    }

    #[tokio::test]
    async fn test_mock_backend_failing() {
        let backend = MockBackend::new(Vec::new())
            .failing(BackendError::Channel("closed".to_string()));

        assert!(backend.select("w1".into()).await.is_err());
        assert!(backend.reorder(&"a".into(), &"b".into()).is_err());
    }
}
