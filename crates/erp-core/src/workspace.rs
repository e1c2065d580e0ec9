//! Workspace
//!
//! Shared handle to the tab manager. Every mutation goes through one mutex,
//! so callbacks arriving from several threads still see the manager's
//! invariants hold.

use parking_lot::Mutex;
use serde::Serialize;
use std::sync::mpsc;
use std::sync::Arc;

use erp_tabs::{Listener, OpenPolicy, Section, SubscriptionId, Tab, TabEvent, TabManager};

/// Point-in-time copy of the tab strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceSnapshot {
    pub tabs: Vec<Tab>,
    pub active_id: Option<String>,
    pub revision: u64,
}

pub struct Workspace {
    manager: Arc<Mutex<TabManager>>,
}

impl Workspace {
    pub fn new(policy: OpenPolicy) -> Self {
        Self {
            manager: Arc::new(Mutex::new(TabManager::new(policy))),
        }
    }

    /// Open a section with the workspace's default policy
    pub fn open(&self, section: Section) -> Tab {
        self.manager.lock().open(section)
    }

    pub fn open_with(&self, section: Section, policy: OpenPolicy) -> Tab {
        self.manager.lock().open_with(section, policy)
    }

    pub fn open_titled(&self, section: Section, title: String, policy: OpenPolicy) -> Tab {
        self.manager.lock().open_titled(section, title, policy)
    }

    /// Activate a tab; stale ids are ignored
    pub fn select(&self, tab_id: &str) -> bool {
        self.manager.lock().set_active(tab_id)
    }

    pub fn close(&self, tab_id: &str) -> Option<Tab> {
        self.manager.lock().close(tab_id)
    }

    pub fn close_all(&self) -> usize {
        self.manager.lock().close_all()
    }

    pub fn tabs(&self) -> Vec<Tab> {
        self.manager.lock().tabs().to_vec()
    }

    pub fn active_tab(&self) -> Option<Tab> {
        self.manager.lock().active_tab().cloned()
    }

    pub fn policy(&self) -> OpenPolicy {
        self.manager.lock().policy()
    }

    pub fn set_policy(&self, policy: OpenPolicy) {
        self.manager.lock().set_policy(policy);
        tracing::info!(policy = %policy, "Changed open policy");
    }

    pub fn snapshot(&self) -> WorkspaceSnapshot {
        let manager = self.manager.lock();
        WorkspaceSnapshot {
            tabs: manager.tabs().to_vec(),
            active_id: manager.active_id().map(str::to_string),
            revision: manager.revision(),
        }
    }

    /// Read the manager under the lock, e.g. to build view models
    pub fn with_manager<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TabManager) -> T,
    {
        f(&self.manager.lock())
    }

    /// Register a listener.
    ///
    /// Listeners run while the workspace lock is held and must not call back
    /// into the workspace. Use `subscribe_channel` to handle events elsewhere.
    pub fn subscribe(&self, listener: Listener) -> SubscriptionId {
        self.manager.lock().subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.manager.lock().unsubscribe(id)
    }

    /// Forward events to a channel. Sends to a dropped receiver are ignored.
    pub fn subscribe_channel(&self) -> (SubscriptionId, mpsc::Receiver<TabEvent>) {
        let (tx, rx) = mpsc::channel();
        let id = self.subscribe(Box::new(move |event: &TabEvent| {
            let _ = tx.send(event.clone());
        }));
        (id, rx)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(OpenPolicy::default())
    }
}

impl Clone for Workspace {
    fn clone(&self) -> Self {
        Self {
            manager: Arc::clone(&self.manager),
        }
    }
}
