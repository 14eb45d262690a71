//! `/auth` endpoints: registration, login and user listing.

use optique_shared::models::{Credentials, LoginResponse, NewUser, User};

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// `POST /auth/register`: create a user account.
    pub async fn register(&self, new_user: &NewUser) -> Result<User> {
        self.post_json("/auth/register", new_user).await
    }

    /// `POST /auth/login`: exchange credentials for a bearer token.
    ///
    /// The token is returned to the caller; installing it on the client is
    /// the auth context's decision.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.post_json("/auth/login", credentials).await
    }

    /// `GET /auth/users`: list all registered users.
    pub async fn get_users(&self) -> Result<Vec<User>> {
        self.get_json("/auth/users", &[]).await
    }

    /// `GET /auth/users/{id}`: fetch a single user.
    pub async fn get_user(&self, id: i64) -> Result<User> {
        self.get_json(&format!("/auth/users/{id}"), &[]).await
    }
}
