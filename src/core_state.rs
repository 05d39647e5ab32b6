//! Shared application state.
//!
//! `CoreState` is built once at startup and shared by every request
//! handler behind an `Arc`. The catalog is read-only; the session store
//! sits behind an `RwLock` so metrics reads do not block each other.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::catalog::PatientCatalog;
use crate::models::InteractionEntry;
use crate::session_log::SessionStore;

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

pub struct CoreState {
    /// Mock patients, loaded at startup. Immutable.
    catalog: PatientCatalog,
    /// Per-browser interaction logs.
    sessions: RwLock<SessionStore>,
}

impl CoreState {
    pub fn new(catalog: PatientCatalog) -> Self {
        Self {
            catalog,
            sessions: RwLock::new(SessionStore::new()),
        }
    }

    pub fn catalog(&self) -> &PatientCatalog {
        &self.catalog
    }

    // ── Session store access ────────────────────────────────

    pub fn read_sessions(&self) -> Result<RwLockReadGuard<'_, SessionStore>, CoreError> {
        self.sessions.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_sessions(&self) -> Result<RwLockWriteGuard<'_, SessionStore>, CoreError> {
        self.sessions.write().map_err(|_| CoreError::LockPoisoned)
    }

    /// Append one interaction to `session`'s log. Returns the new log length.
    pub fn record_interaction(
        &self,
        session: Uuid,
        entry: InteractionEntry,
    ) -> Result<usize, CoreError> {
        let mut store = self.write_sessions()?;
        let count = store.record(session, entry);
        tracing::debug!(%session, count, "Interaction logged");
        Ok(count)
    }

    /// Newest-first interactions for `session`.
    pub fn history(&self, session: &Uuid) -> Result<Vec<InteractionEntry>, CoreError> {
        Ok(self.read_sessions()?.history(session))
    }
}

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Session store lock poisoned")]
    LockPoisoned,
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Feedback;

    fn test_catalog() -> PatientCatalog {
        PatientCatalog::from_json(
            r#"{
                "John Doe": {
                    "location": "MICU Bed 12", "age": 78,
                    "active_problems": ["Sepsis"],
                    "labs": {"Lactate": "4.2 mmol/L"},
                    "recent_orders": ["Blood cultures x2"]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn new_state_has_no_history() {
        let state = CoreState::new(test_catalog());
        assert!(state.history(&Uuid::new_v4()).unwrap().is_empty());
        assert_eq!(state.catalog().len(), 1);
    }

    #[test]
    fn record_then_read_back() {
        let state = CoreState::new(test_catalog());
        let session = Uuid::new_v4();

        let count = state
            .record_interaction(
                session,
                InteractionEntry::now("John Doe", "RN", "p1".into(), Feedback::Yes),
            )
            .unwrap();
        assert_eq!(count, 1);
        state
            .record_interaction(
                session,
                InteractionEntry::now("John Doe", "RT", "p2".into(), Feedback::No),
            )
            .unwrap();

        let history = state.history(&session).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].prompt, "p2");
        assert_eq!(history[1].prompt, "p1");
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let state = std::sync::Arc::new(CoreState::new(test_catalog()));
        let clone = state.clone();
        let _ = std::thread::spawn(move || {
            let _guard = clone.sessions.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(
            state.history(&Uuid::new_v4()),
            Err(CoreError::LockPoisoned)
        ));
    }
}
