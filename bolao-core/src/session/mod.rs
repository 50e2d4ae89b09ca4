//! Session state derived from the platform's bearer credential.
//!
//! The store is the single owner of authentication state: every other
//! component reads it through accessors and mutates it only via
//! [`SessionStore::login`], [`SessionStore::logout`] and
//! [`SessionStore::update_display_name`]. Subject id and the administrator
//! flag are derived exclusively from decoding the credential, never set
//! independently. Malformed or expired credentials degrade to the
//! unauthenticated state instead of surfacing as errors: a logged-out
//! session is always preferable to a corrupt authenticated one.

mod storage;
mod token;

pub use storage::{
    CredentialStorage, FileStorage, MemoryStorage, AUTH_TOKEN_KEY, DISPLAY_NAME_KEY,
};
pub use token::{decode_claims, TokenClaims};

use crate::error::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// Snapshot of the current session. All fields change together: either the
/// credential decoded and everything is populated, or nothing is.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub token: Option<String>,
    pub subject_id: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub is_admin: bool,
    pub expires_at: Option<i64>,
}

pub struct SessionStore {
    storage: Arc<dyn CredentialStorage>,
    current: RwLock<Session>,
}

impl SessionStore {
    /// Creates an unauthenticated store over the given backend. Call
    /// [`initialize`](Self::initialize) to pick up a persisted credential.
    pub fn new(storage: Arc<dyn CredentialStorage>) -> Self {
        Self {
            storage,
            current: RwLock::new(Session::default()),
        }
    }

    /// Rebuilds the session from persisted storage, as on an application
    /// start. A missing, malformed or expired credential yields the
    /// unauthenticated state; stale credentials are removed from storage so
    /// the next start does not re-decode them.
    pub fn initialize(&self) -> Result<()> {
        let Some(token) = self.storage.get(AUTH_TOKEN_KEY)? else {
            *self.current.write() = Session::default();
            return Ok(());
        };
        match decode_claims(&token) {
            Some(claims) if !claims.is_expired() => {
                let display_name = self.storage.get(DISPLAY_NAME_KEY)?;
                *self.current.write() = Session {
                    token: Some(token),
                    subject_id: Some(claims.sub),
                    email: claims.email,
                    display_name,
                    is_admin: claims.is_admin,
                    expires_at: claims.exp,
                };
            }
            _ => {
                tracing::debug!("discarding stale or malformed stored credential");
                self.storage.remove(AUTH_TOKEN_KEY)?;
                self.storage.remove(DISPLAY_NAME_KEY)?;
                *self.current.write() = Session::default();
            }
        }
        Ok(())
    }

    /// Installs a fresh credential, persisting it before the in-memory
    /// switch so a reload observes the same session. A token that does not
    /// decode makes the whole call a no-op: the token is assumed to come
    /// from a successful server response, so this path is a guard, not a
    /// reportable error.
    pub fn login(&self, token: &str, display_name: Option<&str>) -> Result<()> {
        let Some(claims) = decode_claims(token) else {
            tracing::warn!("login called with undecodable token; ignoring");
            return Ok(());
        };
        self.storage.set(AUTH_TOKEN_KEY, token)?;
        if let Some(name) = display_name {
            self.storage.set(DISPLAY_NAME_KEY, name)?;
        }
        let mut current = self.current.write();
        let display_name = display_name
            .map(str::to_string)
            .or_else(|| current.display_name.clone());
        *current = Session {
            token: Some(token.to_string()),
            subject_id: Some(claims.sub),
            email: claims.email,
            display_name,
            is_admin: claims.is_admin,
            expires_at: claims.exp,
        };
        Ok(())
    }

    /// Clears every session field and the persisted credential. The
    /// in-memory state is reset first so the session reads as logged out
    /// even if storage removal fails.
    pub fn logout(&self) -> Result<()> {
        *self.current.write() = Session::default();
        self.storage.remove(AUTH_TOKEN_KEY)?;
        self.storage.remove(DISPLAY_NAME_KEY)?;
        Ok(())
    }

    /// Persists and updates only the display name; the credential is
    /// untouched.
    pub fn update_display_name(&self, name: &str) -> Result<()> {
        self.storage.set(DISPLAY_NAME_KEY, name)?;
        self.current.write().display_name = Some(name.to_string());
        Ok(())
    }

    /// True iff a credential is present.
    pub fn is_authenticated(&self) -> bool {
        self.current.read().token.is_some()
    }

    /// Decoded administrator flag; false when unauthenticated.
    pub fn is_administrator(&self) -> bool {
        self.current.read().is_admin
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.current.read().token.clone()
    }

    pub fn current(&self) -> Session {
        self.current.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::token::test_support::make_token;
    use super::*;

    const FAR_FUTURE: i64 = 4102444800; // 2100-01-01

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn initialize_without_credential_is_unauthenticated() {
        let store = store();
        store.initialize().unwrap();
        assert!(!store.is_authenticated());
        assert!(!store.is_administrator());
    }

    #[test]
    fn initialize_restores_persisted_session() {
        let storage = Arc::new(MemoryStorage::new());
        let token = make_token("user-1", "user@example.com", true, Some(FAR_FUTURE));
        storage.set(AUTH_TOKEN_KEY, &token).unwrap();
        storage.set(DISPLAY_NAME_KEY, "Maria").unwrap();

        let store = SessionStore::new(storage);
        store.initialize().unwrap();

        let session = store.current();
        assert!(store.is_authenticated());
        assert!(store.is_administrator());
        assert_eq!(session.subject_id.as_deref(), Some("user-1"));
        assert_eq!(session.email.as_deref(), Some("user@example.com"));
        assert_eq!(session.display_name.as_deref(), Some("Maria"));
    }

    #[test]
    fn initialize_discards_expired_credential_from_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let token = make_token("user-1", "user@example.com", false, Some(1));
        storage.set(AUTH_TOKEN_KEY, &token).unwrap();

        let store = SessionStore::new(storage.clone());
        store.initialize().unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn initialize_discards_malformed_credential_from_storage() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(AUTH_TOKEN_KEY, "not-a-jwt").unwrap();

        let store = SessionStore::new(storage.clone());
        store.initialize().unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn login_populates_all_fields_from_the_token() {
        let store = store();
        let token = make_token("user-2", "admin@example.com", true, Some(FAR_FUTURE));
        store.login(&token, Some("Admin")).unwrap();

        let session = store.current();
        assert!(store.is_authenticated());
        assert!(store.is_administrator());
        assert_eq!(session.subject_id.as_deref(), Some("user-2"));
        assert_eq!(session.display_name.as_deref(), Some("Admin"));
        assert_eq!(session.expires_at, Some(FAR_FUTURE));
    }

    #[test]
    fn login_with_undecodable_token_changes_nothing() {
        let store = store();
        let token = make_token("user-1", "user@example.com", false, Some(FAR_FUTURE));
        store.login(&token, Some("Maria")).unwrap();

        store.login("garbage", Some("Mallory")).unwrap();

        let session = store.current();
        assert_eq!(session.subject_id.as_deref(), Some("user-1"));
        assert_eq!(session.display_name.as_deref(), Some("Maria"));
    }

    #[test]
    fn logout_then_initialize_stays_unauthenticated() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        let token = make_token("user-1", "user@example.com", false, Some(FAR_FUTURE));
        store.login(&token, Some("Maria")).unwrap();

        store.logout().unwrap();
        assert!(!store.is_authenticated());

        // simulated reload over the same backend
        let reloaded = SessionStore::new(storage);
        reloaded.initialize().unwrap();
        assert!(!reloaded.is_authenticated());
        assert_eq!(reloaded.current().display_name, None);
    }

    #[test]
    fn mutations_write_through_to_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        let token = make_token("user-1", "user@example.com", false, Some(FAR_FUTURE));
        store.login(&token, None).unwrap();
        store.update_display_name("João").unwrap();

        // a second store over the same backend sees exactly the same session
        let reloaded = SessionStore::new(storage);
        reloaded.initialize().unwrap();
        let session = reloaded.current();
        assert_eq!(session.token.as_deref(), Some(token.as_str()));
        assert_eq!(session.display_name.as_deref(), Some("João"));
    }

    #[test]
    fn update_display_name_leaves_credential_untouched() {
        let store = store();
        let token = make_token("user-1", "user@example.com", true, Some(FAR_FUTURE));
        store.login(&token, None).unwrap();
        store.update_display_name("Nova").unwrap();

        let session = store.current();
        assert_eq!(session.token.as_deref(), Some(token.as_str()));
        assert!(session.is_admin);
        assert_eq!(session.display_name.as_deref(), Some("Nova"));
    }
}
