//! # optique-api
//!
//! Typed HTTP client for the optics-shop backend API.
//!
//! One [`ApiClient`] wraps a single `reqwest::Client`; each backend resource
//! gets its own module of async methods (`auth`, `products`, `sales`), one
//! method per endpoint. Calls are single fire-and-forget requests: no retry,
//! no timeout enforcement, no batching. Failures surface as [`ApiError`],
//! carrying the backend's `detail` message when the server provided one.

mod auth;
mod client;
mod error;
mod products;
mod sales;

pub use client::ApiClient;
pub use error::{ApiError, Result};
