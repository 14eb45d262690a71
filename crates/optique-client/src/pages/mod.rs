//! Page view-models.
//!
//! One module per screen of the original dashboard. Each page wires the
//! shared [`crate::controller::ListController`] to its resource's API calls
//! and contributes the French banner strings, the form draft type and the
//! table columns.

pub mod dashboard;
pub mod products;
pub mod sales;
pub mod users;
