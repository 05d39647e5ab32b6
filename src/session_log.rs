//! Per-session interaction log.
//!
//! Each browser session owns an append-only list of selector-page views.
//! Logs live only in memory and vanish with the process.
//!
//! Key properties:
//! - Entries are never edited or removed
//! - Reads are newest-first
//! - Sessions never see each other's entries

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::InteractionEntry;

// ═══════════════════════════════════════════════════════════
// InteractionLog — one session
// ═══════════════════════════════════════════════════════════

/// Append-only log of interactions, in creation order.
#[derive(Debug, Default, Clone)]
pub struct InteractionLog {
    entries: Vec<InteractionEntry>,
}

impl InteractionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: InteractionEntry) {
        self.entries.push(entry);
    }

    /// Entries most recent first.
    pub fn newest_first(&self) -> impl Iterator<Item = &InteractionEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════
// SessionStore — all sessions
// ═══════════════════════════════════════════════════════════

/// Session id → interaction log.
///
/// Sessions are created lazily on first write. Reading an unknown
/// session yields an empty log rather than an error.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<Uuid, InteractionLog>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to `session`'s log, creating the log if needed.
    /// Returns the log length after the append.
    pub fn record(&mut self, session: Uuid, entry: InteractionEntry) -> usize {
        let log = self.sessions.entry(session).or_default();
        log.append(entry);
        log.len()
    }

    /// Newest-first copy of `session`'s entries. Empty for unknown sessions.
    pub fn history(&self, session: &Uuid) -> Vec<InteractionEntry> {
        self.sessions
            .get(session)
            .map(|log| log.newest_first().cloned().collect())
            .unwrap_or_default()
    }

    pub fn log(&self, session: &Uuid) -> Option<&InteractionLog> {
        self.sessions.get(session)
    }

    /// Number of sessions that have logged at least one interaction.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Feedback;

    fn entry(patient: &str) -> InteractionEntry {
        InteractionEntry::now(patient, "Resident", format!("prompt for {patient}"), Feedback::Yes)
    }

    #[test]
    fn new_log_is_empty() {
        let log = InteractionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.newest_first().count(), 0);
    }

    #[test]
    fn newest_first_reverses_insertion() {
        let mut log = InteractionLog::new();
        log.append(entry("first"));
        log.append(entry("second"));
        log.append(entry("third"));

        let order: Vec<&str> = log.newest_first().map(|e| e.patient.as_str()).collect();
        assert_eq!(order, ["third", "second", "first"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn repeated_views_are_all_kept() {
        let mut log = InteractionLog::new();
        log.append(entry("same"));
        log.append(entry("same"));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn unknown_session_has_empty_history() {
        let store = SessionStore::new();
        assert!(store.history(&Uuid::new_v4()).is_empty());
        assert!(store.log(&Uuid::new_v4()).is_none());
        assert_eq!(store.session_count(), 0);
    }

    #[test]
    fn record_creates_session_lazily() {
        let mut store = SessionStore::new();
        let id = Uuid::new_v4();

        assert_eq!(store.record(id, entry("a")), 1);
        assert_eq!(store.record(id, entry("b")), 2);

        assert_eq!(store.session_count(), 1);
        let history = store.history(&id);
        assert_eq!(history[0].patient, "b");
        assert_eq!(history[1].patient, "a");
    }

    #[test]
    fn sessions_are_isolated() {
        let mut store = SessionStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store.record(alice, entry("Alice's patient"));
        store.record(bob, entry("Bob's patient"));
        store.record(bob, entry("Bob's second"));

        assert_eq!(store.history(&alice).len(), 1);
        assert_eq!(store.history(&bob).len(), 2);
        assert!(store
            .history(&alice)
            .iter()
            .all(|e| e.patient == "Alice's patient"));
    }
}
