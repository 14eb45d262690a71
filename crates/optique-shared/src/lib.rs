//! # optique-shared
//!
//! Domain types and display helpers shared by the API client, the local
//! session store, and the application layer.
//!
//! The structs in [`models`] mirror the backend's JSON payloads field for
//! field (the wire names are French, like the backend), so they can be
//! decoded straight from a response body and handed to the UI layer.

pub mod helpers;
pub mod models;
