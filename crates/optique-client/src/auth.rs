//! Session lifecycle: hydrate from the local store, login, logout.
//!
//! The session is an explicit object handed to whoever needs it, not a
//! process-wide singleton. Two states: anonymous (no token installed on the
//! API client) and authenticated (token installed and persisted). There is
//! no token refresh; an expired token simply makes the next request fail.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use optique_api::{ApiClient, ApiError};
use optique_shared::models::{Credentials, NewUser, Session, User};
use optique_store::{Database, StoreError};

/// Errors from the session lifecycle.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Holds the current session and keeps the API client's bearer token and
/// the persisted copy in sync with it.
pub struct AuthContext {
    api: Arc<ApiClient>,
    store: Database,
    session: Option<Session>,
}

impl AuthContext {
    /// Initialize from persisted storage. If a session was saved by a
    /// previous run, the app starts authenticated without a network call.
    pub fn hydrate(api: Arc<ApiClient>, store: Database) -> Result<Self, StoreError> {
        let session = store.load_session()?;
        if let Some(session) = &session {
            api.set_token(&session.access_token);
            info!(user = %session.user.email, "session restored from store");
        }
        Ok(Self {
            api,
            store,
            session,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// Exchange credentials for a token, persist the session and install
    /// the token on the API client.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<User, AuthError> {
        let login = self.api.login(credentials).await?;
        let session = Session::from(login);

        self.store.save_session(&session)?;
        self.api.set_token(&session.access_token);
        info!(user = %session.user.email, "login successful");

        let user = session.user.clone();
        self.session = Some(session);
        Ok(user)
    }

    /// Create a user account. Registration does not log the new user in;
    /// the backend returns the created profile only.
    pub async fn register(&self, new_user: &NewUser) -> Result<User, ApiError> {
        self.api.register(new_user).await
    }

    /// Clear the persisted session and drop the bearer token.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.store.clear_session()?;
        self.api.clear_token();
        if let Some(session) = self.session.take() {
            info!(user = %session.user.email, "logged out");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_session() -> Session {
        Session {
            access_token: "jwt-abc".to_string(),
            token_type: "bearer".to_string(),
            user: User {
                id: 1,
                nom: "Yasmine".to_string(),
                email: "yasmine@optique.ma".to_string(),
            },
        }
    }

    fn temp_store(dir: &tempfile::TempDir) -> Database {
        Database::open_at(&dir.path().join("test.db")).unwrap()
    }

    #[test]
    fn hydrate_without_stored_session_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let api = Arc::new(ApiClient::new("http://localhost:8000"));

        let auth = AuthContext::hydrate(api.clone(), temp_store(&dir)).unwrap();

        assert!(!auth.is_authenticated());
        assert!(!api.has_token());
    }

    #[test]
    fn hydrate_restores_session_and_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        store.save_session(&stored_session()).unwrap();

        let api = Arc::new(ApiClient::new("http://localhost:8000"));
        let auth = AuthContext::hydrate(api.clone(), store).unwrap();

        assert!(auth.is_authenticated());
        assert!(api.has_token());
        assert_eq!(auth.current_user().unwrap().nom, "Yasmine");
    }

    #[test]
    fn logout_clears_token_and_persisted_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        store.save_session(&stored_session()).unwrap();

        let api = Arc::new(ApiClient::new("http://localhost:8000"));
        let mut auth = AuthContext::hydrate(api.clone(), store).unwrap();

        auth.logout().unwrap();

        assert!(!auth.is_authenticated());
        assert!(!api.has_token());

        // The persisted copy is gone: a fresh hydrate is anonymous.
        let store = temp_store(&dir);
        let auth = AuthContext::hydrate(api, store).unwrap();
        assert!(!auth.is_authenticated());
    }
}
