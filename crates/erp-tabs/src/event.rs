//! Change notifications
//!
//! Renderers subscribe to the manager and re-read its state when an event
//! arrives. Events are only emitted for operations that changed something.

use serde::{Deserialize, Serialize};

use crate::tab::Tab;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TabEvent {
    /// A new tab was appended
    Opened { tab: Tab },
    /// A tab was removed from `index`
    Closed { tab: Tab, index: usize },
    /// Every tab was removed at once
    Cleared { count: usize },
    /// The active tab changed
    ActiveChanged {
        previous: Option<String>,
        current: Option<String>,
    },
}

pub type Listener = Box<dyn FnMut(&TabEvent) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, event: &TabEvent) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_remove_stops_delivery() {
        let seen = Arc::new(Mutex::new(0));
        let mut listeners = Listeners::default();

        let counter = Arc::clone(&seen);
        let id = listeners.add(Box::new(move |_: &TabEvent| *counter.lock().unwrap() += 1));

        listeners.emit(&TabEvent::Cleared { count: 1 });
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        listeners.emit(&TabEvent::Cleared { count: 1 });

        assert_eq!(*seen.lock().unwrap(), 1);
        assert_eq!(listeners.len(), 0);
    }

    #[test]
    fn test_event_json_is_tagged() {
        let json = serde_json::to_value(TabEvent::Cleared { count: 3 }).unwrap();
        assert_eq!(json["event"], "cleared");
        assert_eq!(json["count"], 3);
    }
}
