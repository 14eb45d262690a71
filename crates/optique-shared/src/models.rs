//! Wire types exchanged with the backend HTTP API.
//!
//! Every struct derives `Serialize` and `Deserialize` and keeps the exact
//! field names of the backend's JSON bodies. The backend owns all of this
//! data; the client only holds disposable, refresh-on-demand copies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered user (seller) as returned by `/auth/users`.
///
/// The password never leaves the backend; there is no role column either,
/// the UI renders a fixed "Utilisateur" badge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub nom: String,
    pub email: String,
}

/// Registration payload for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub nom: String,
    pub email: String,
    pub password: String,
}

/// Login payload for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login body: a bearer token plus the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// A catalog product. `stock` is kept non-negative by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub nom: String,
    pub prix: f64,
    pub stock: i64,
    pub image_url: Option<String>,
}

/// Creation payload for `POST /products/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub nom: String,
    pub prix: f64,
    pub stock: i64,
    pub image_url: Option<String>,
}

/// Partial update for `PUT /products/{id}`. `None` fields are left untouched
/// by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prix: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body of `GET /products/{id}/stock-check?quantity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockCheck {
    pub product_id: i64,
    pub requested_quantity: i64,
    pub is_available: bool,
}

// ---------------------------------------------------------------------------
// Sale
// ---------------------------------------------------------------------------

/// A recorded sale. The `*_nom` / `prix_*` fields are denormalized copies
/// the backend computes at sale time (unit price and total price).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    pub id: i64,
    pub product_id: i64,
    pub user_id: i64,
    pub quantity: i64,
    pub date: DateTime<Utc>,
    pub product_nom: Option<String>,
    pub user_nom: Option<String>,
    pub prix_unitaire: Option<f64>,
    pub prix_total: Option<f64>,
}

/// Creation payload for `POST /sales/`. All three fields are integers; the
/// backend checks stock, decrements it and fills in the prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSale {
    pub product_id: i64,
    pub user_id: i64,
    pub quantity: i64,
}

/// Partial update for `PUT /sales/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

/// Body of `GET /sales/stats/total-amount`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalAmount {
    pub total_amount: f64,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The authenticated identity held by the client between startup and logout.
///
/// Persisted as JSON in the local store so the app restarts authenticated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

impl From<LoginResponse> for Session {
    fn from(login: LoginResponse) -> Self {
        Self {
            access_token: login.access_token,
            token_type: login.token_type,
            user: login.user,
        }
    }
}
