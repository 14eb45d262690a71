//! Users page: the seller directory plus account registration.
//!
//! Accounts are created through `/auth/register` and never edited or
//! deleted from this screen, so only the create half of the controller
//! is wired.

use std::sync::Arc;

use optique_api::{ApiClient, ApiError, Result as ApiResult};
use optique_shared::helpers::is_valid_email;
use optique_shared::models::{NewUser, User};

use crate::controller::{ListController, ListEntry, ListMessages, ResourceClient};
use crate::ui::Column;

const MESSAGES: ListMessages = ListMessages {
    load_error: "Erreur lors du chargement des utilisateurs",
    save_error: "Erreur lors de la création du compte",
    delete_error: "Opération non supportée",
    created: "Compte créé avec succès !",
    updated: "Opération non supportée",
    deleted: "Opération non supportée",
};

const MIN_PASSWORD_LEN: usize = 6;

/// Registration form fields. The password stays out of the listed [`User`].
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub nom: String,
    pub email: String,
    pub password: String,
}

impl UserDraft {
    fn to_new_user(&self) -> ApiResult<NewUser> {
        let nom = self.nom.trim();
        if nom.is_empty() {
            return Err(ApiError::Invalid("Le nom est obligatoire".to_string()));
        }
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(ApiError::Invalid("Adresse email invalide".to_string()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::Invalid(
                "Le mot de passe doit contenir au moins 6 caractères".to_string(),
            ));
        }
        Ok(NewUser {
            nom: nom.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

impl ListEntry for User {
    fn id(&self) -> i64 {
        self.id
    }
    fn search_text(&self) -> Vec<&str> {
        vec![&self.nom, &self.email]
    }
}

/// API calls backing the user directory. Update and delete are not part of
/// this screen and fail fast if ever reached.
pub struct UsersClient {
    api: Arc<ApiClient>,
}

impl ResourceClient for UsersClient {
    type Item = User;
    type Draft = UserDraft;

    async fn load(&self) -> ApiResult<Vec<User>> {
        self.api.get_users().await
    }

    async fn create(&self, draft: &UserDraft) -> ApiResult<User> {
        self.api.register(&draft.to_new_user()?).await
    }

    async fn update(&self, _id: i64, _draft: &UserDraft) -> ApiResult<User> {
        Err(ApiError::Invalid("Opération non supportée".to_string()))
    }

    async fn delete(&self, _id: i64) -> ApiResult<()> {
        Err(ApiError::Invalid("Opération non supportée".to_string()))
    }
}

pub type UsersPage = ListController<UsersClient>;

/// Build the users page over a shared API client.
pub fn users_page(api: Arc<ApiClient>) -> UsersPage {
    ListController::new(UsersClient { api }, MESSAGES)
}

/// Table columns for the seller directory. Accounts carry no role on the
/// wire, so the role column is the constant badge.
pub fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("ID", |u: &User| format!("#{}", u.id)),
        Column::new("Nom", |u: &User| u.nom.clone()),
        Column::new("Email", |u: &User| u.email.clone()),
        Column::new("Rôle", |_: &User| "Utilisateur".to_string()),
    ]
}
