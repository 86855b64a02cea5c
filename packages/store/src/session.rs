//! # Session model and store
//!
//! The client's belief about who is logged in. A [`Session`] is created by a
//! successful login or registration, read by every view that renders
//! differently for authenticated users, and destroyed on logout or when the
//! server rejects the token.
//!
//! ## Storage layout
//!
//! [`SessionStore`] persists the session into a [`SessionStorage`] under four
//! well-known keys:
//!
//! | Key | Value |
//! |-----|-------|
//! | `token` | opaque bearer token |
//! | `userId` | backend user id |
//! | `userName` | display name |
//! | `userRole` | `"user"` or `"admin"` |
//!
//! The absence of `token` is the sole signal of the logged-out state:
//! [`SessionStore::current`] returns [`Session::anonymous`] when the token is
//! missing, whatever stale values the other keys may hold. Reads always go to
//! the storage (no in-memory cache), so independent views observe the same
//! session without explicit propagation.
//!
//! ## Trust
//!
//! The stored role is a rendering hint only. The storage is client-writable,
//! so the server re-checks authorization on every request; nothing here is a
//! security boundary.

use serde::{Deserialize, Serialize};

use crate::storage::SessionStorage;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";
pub const USER_NAME_KEY: &str = "userName";
pub const USER_ROLE_KEY: &str = "userRole";

/// What the backend says this account may administer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[serde(other)]
    User,
}

impl Role {
    /// Lenient parse for values read back from storage.
    pub fn from_storage(value: &str) -> Self {
        if value == "admin" {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// Snapshot of the current authentication identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub user_name: String,
    pub role: Role,
}

impl Session {
    /// The logged-out session.
    pub fn anonymous() -> Self {
        Self {
            token: None,
            user_id: None,
            user_name: String::new(),
            role: Role::User,
        }
    }

    pub fn authenticated(
        token: impl Into<String>,
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            token: Some(token.into()),
            user_id: Some(user_id.into()),
            user_name: user_name.into(),
            role,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// Durable session store over a [`SessionStorage`] backend.
pub struct SessionStore<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the session back from storage.
    ///
    /// A missing token means logged out, whatever else is lying around from
    /// an earlier session.
    pub fn current(&self) -> Session {
        let Some(token) = self.storage.get(TOKEN_KEY) else {
            return Session::anonymous();
        };
        Session {
            token: Some(token),
            user_id: self.storage.get(USER_ID_KEY),
            user_name: self.storage.get(USER_NAME_KEY).unwrap_or_default(),
            role: self
                .storage
                .get(USER_ROLE_KEY)
                .map(|role| Role::from_storage(&role))
                .unwrap_or_default(),
        }
    }

    /// Persist the session. Saving an anonymous session is the same as
    /// [`clear`](Self::clear).
    pub fn save(&self, session: &Session) {
        let Some(token) = &session.token else {
            self.clear();
            return;
        };
        self.storage.set(TOKEN_KEY, token);
        match &session.user_id {
            Some(id) => self.storage.set(USER_ID_KEY, id),
            None => self.storage.remove(USER_ID_KEY),
        }
        self.storage.set(USER_NAME_KEY, &session.user_name);
        self.storage.set(USER_ROLE_KEY, session.role.as_str());
    }

    /// Drop the session. The whole storage is wiped in one go so no stale key
    /// survives a logout.
    pub fn clear(&self) {
        self.storage.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;

    fn store() -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::new())
    }

    #[test]
    fn test_save_and_restore() {
        let store = store();
        let session = Session::authenticated("tok-1", "u-1", "Siti", Role::Admin);
        store.save(&session);

        let restored = store.current();
        assert_eq!(restored, session);
        assert!(restored.is_authenticated());
        assert!(restored.role.is_admin());
    }

    #[test]
    fn test_missing_token_reads_as_anonymous() {
        // Stale identity keys without a token must not resurrect a session.
        let storage = MemoryStorage::new();
        storage.set(USER_NAME_KEY, "Ghost");
        storage.set(USER_ROLE_KEY, "admin");

        let store = SessionStore::new(storage);
        let session = store.current();
        assert_eq!(session, Session::anonymous());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clear_wipes_every_key() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.save(&Session::authenticated("tok-2", "u-2", "Budi", Role::User));

        store.clear();

        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_ID_KEY).is_none());
        assert!(storage.get(USER_NAME_KEY).is_none());
        assert!(storage.get(USER_ROLE_KEY).is_none());
        assert_eq!(store.current(), Session::anonymous());
    }

    #[test]
    fn test_saving_anonymous_clears() {
        let store = store();
        store.save(&Session::authenticated("tok-3", "u-3", "Ana", Role::User));

        store.save(&Session::anonymous());
        assert_eq!(store.current(), Session::anonymous());
    }

    #[test]
    fn test_reads_always_consult_storage() {
        // Two stores over the same backend see each other's writes; there is
        // no per-store cache to go stale.
        let storage = MemoryStorage::new();
        let writer = SessionStore::new(storage.clone());
        let reader = SessionStore::new(storage);

        writer.save(&Session::authenticated("tok-4", "u-4", "Dewi", Role::User));
        assert_eq!(reader.current().user_name, "Dewi");

        writer.clear();
        assert!(!reader.current().is_authenticated());
    }

    #[test]
    fn test_stored_role_is_a_rendering_hint_only() {
        // The storage is client-writable: anyone can flip their stored role
        // and the client will happily show admin chrome. That is a known
        // limitation of this layer, not a defect — the server re-checks the
        // role on every request it authorizes.
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.save(&Session::authenticated("tok-5", "u-5", "Rina", Role::User));

        storage.set(USER_ROLE_KEY, "admin");
        assert!(store.current().role.is_admin());
    }

    #[test]
    fn test_role_parsing_is_lenient() {
        assert_eq!(Role::from_storage("admin"), Role::Admin);
        assert_eq!(Role::from_storage("user"), Role::User);
        assert_eq!(Role::from_storage("superuser"), Role::User);
        assert_eq!(Role::from_storage(""), Role::User);
    }
}
