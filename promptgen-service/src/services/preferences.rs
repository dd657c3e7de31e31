//! In-memory character preference store.

use crate::models::CharacterOption;
use dashmap::DashMap;
use std::sync::Arc;

/// User id assumed when a client omits one.
pub const DEFAULT_USER_ID: &str = "dummy_user_123";

/// Per-user character mode. Lives for the life of the process; the latest
/// write for a user wins.
#[derive(Clone, Default)]
pub struct PreferenceStore {
    inner: Arc<DashMap<String, CharacterOption>>,
}

impl PreferenceStore {
    /// A store seeded with the default user set to [`CharacterOption::New`].
    pub fn seeded() -> Self {
        let store = Self::default();
        store.save(DEFAULT_USER_ID, CharacterOption::New);
        store
    }

    pub fn save(&self, user_id: &str, option: CharacterOption) {
        self.inner.insert(user_id.to_string(), option);
    }

    pub fn find(&self, user_id: &str) -> Option<CharacterOption> {
        self.inner.get(user_id).map(|entry| *entry.value())
    }

    /// Stored option, or [`CharacterOption::New`] for unknown users.
    pub fn get_or_default(&self, user_id: &str) -> CharacterOption {
        self.find(user_id).unwrap_or_default()
    }
}
