//! Tab Manager
//!
//! Owns the ordered tab strip and the active tab id. Invariant: the active
//! id, when set, always names a tab in the strip, and it is unset whenever
//! the strip is empty.
//!
//! Operations on ids that are not (or no longer) in the strip are ignored
//! rather than reported. UI callbacks race with each other, e.g. a close
//! button fired after the tab was already removed by "close all".

use crate::event::{Listener, Listeners, SubscriptionId, TabEvent};
use crate::policy::OpenPolicy;
use crate::section::Section;
use crate::tab::Tab;

#[derive(Default)]
pub struct TabManager {
    /// Open tabs in insertion order
    tabs: Vec<Tab>,
    /// Currently active tab ID
    active_id: Option<String>,
    /// Policy used by `open`
    policy: OpenPolicy,
    /// Bumped once per state-changing operation
    revision: u64,
    listeners: Listeners,
}

impl TabManager {
    pub fn new(policy: OpenPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> OpenPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: OpenPolicy) {
        self.policy = policy;
    }

    /// Open a tab for `section` using the manager's policy
    pub fn open(&mut self, section: Section) -> Tab {
        self.open_with(section, self.policy)
    }

    /// Open a tab for `section`.
    ///
    /// Under `SingletonPerSection`, an existing tab for the section is
    /// activated and returned as-is. Otherwise a new tab is appended and
    /// becomes active.
    pub fn open_with(&mut self, section: Section, policy: OpenPolicy) -> Tab {
        match self.reuse_existing(section, policy) {
            Some(existing) => existing,
            None => self.push(Tab::new(section)),
        }
    }

    /// Like `open_with`, but a newly created tab gets `title` instead of the
    /// section label. A re-activated tab keeps its original title.
    pub fn open_titled(
        &mut self,
        section: Section,
        title: impl Into<String>,
        policy: OpenPolicy,
    ) -> Tab {
        match self.reuse_existing(section, policy) {
            Some(existing) => existing,
            None => self.push(Tab::with_title(section, title)),
        }
    }

    /// Close a tab. Returns the removed tab, or `None` for an unknown id.
    ///
    /// When the active tab is closed, the tab that slides into its position
    /// becomes active; if it was the last tab, the new last tab does.
    pub fn close(&mut self, tab_id: &str) -> Option<Tab> {
        let index = self.index_of(tab_id)?;
        let tab = self.tabs.remove(index);

        let mut events = vec![TabEvent::Closed {
            tab: tab.clone(),
            index,
        }];

        if self.tabs.is_empty() {
            self.switch_active(None, &mut events);
        } else if self.active_id.as_deref() == Some(tab_id) {
            let next = index.min(self.tabs.len() - 1);
            let next_id = self.tabs[next].id.clone();
            self.switch_active(Some(next_id), &mut events);
        }

        tracing::info!(tab_id = %tab.id, section = %tab.section, "Closed tab");

        self.commit(events);
        Some(tab)
    }

    /// Make a tab active. Unknown ids are ignored; returns whether the tab
    /// exists.
    pub fn set_active(&mut self, tab_id: &str) -> bool {
        if self.index_of(tab_id).is_none() {
            tracing::debug!(tab_id = %tab_id, "Ignoring activation of unknown tab");
            return false;
        }

        let mut events = Vec::new();
        self.switch_active(Some(tab_id.to_string()), &mut events);
        self.commit(events);
        true
    }

    /// Close every tab. Returns how many were removed.
    pub fn close_all(&mut self) -> usize {
        let count = self.tabs.len();
        self.tabs.clear();

        let mut events = Vec::new();
        if count > 0 {
            events.push(TabEvent::Cleared { count });
        }
        self.switch_active(None, &mut events);

        if count > 0 {
            tracing::info!(count, "Closed all tabs");
        }

        self.commit(events);
        count
    }

    /// The active tab, if any
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_id.as_deref().and_then(|id| self.get(id))
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Open tabs in display order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn get(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    /// First open tab showing `section`
    pub fn find_section(&self, section: Section) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.section == section)
    }

    /// True if the active tab shows `section`
    pub fn is_section_active(&self, section: Section) -> bool {
        self.active_tab().is_some_and(|t| t.section == section)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Changes whenever the strip or the active tab changes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a listener called after every change
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        self.listeners.add(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    fn index_of(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn reuse_existing(&mut self, section: Section, policy: OpenPolicy) -> Option<Tab> {
        if !policy.is_singleton() {
            return None;
        }

        let existing = self.find_section(section)?.clone();
        let mut events = Vec::new();
        self.switch_active(Some(existing.id.clone()), &mut events);
        self.commit(events);

        tracing::debug!(tab_id = %existing.id, section = %section, "Reused open tab");

        Some(existing)
    }

    fn push(&mut self, tab: Tab) -> Tab {
        self.tabs.push(tab.clone());

        let mut events = vec![TabEvent::Opened { tab: tab.clone() }];
        self.switch_active(Some(tab.id.clone()), &mut events);

        tracing::info!(tab_id = %tab.id, section = %tab.section, "Opened tab");

        self.commit(events);
        tab
    }

    fn switch_active(&mut self, next: Option<String>, events: &mut Vec<TabEvent>) {
        if self.active_id == next {
            return;
        }

        let previous = std::mem::replace(&mut self.active_id, next.clone());
        events.push(TabEvent::ActiveChanged {
            previous,
            current: next,
        });
    }

    fn commit(&mut self, events: Vec<TabEvent>) {
        if events.is_empty() {
            return;
        }

        self.revision += 1;
        for event in &events {
            self.listeners.emit(event);
        }
    }
}

impl std::fmt::Debug for TabManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabManager")
            .field("tabs", &self.tabs)
            .field("active_id", &self.active_id)
            .field("policy", &self.policy)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
