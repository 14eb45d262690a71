//! # optique-store
//!
//! Local persistence for the admin client: a small SQLite file holding the
//! authenticated session between runs, so the app starts logged in. This is
//! the desktop counterpart of the browser's `localStorage` entry.

mod database;
mod error;
mod session;

pub use database::Database;
pub use error::{Result, StoreError};
