//! # optique-client
//!
//! Application layer of the optics-shop admin client: the session lifecycle,
//! the generic list-view controller shared by every page, the page
//! view-models (Products, Sales, Users, Dashboard) and the text table
//! renderer used by the `optique-admin` binary.
//!
//! All business rules (stock arithmetic, revenue totals, authentication)
//! live in the backend; this crate only orchestrates fetches and local view
//! state.

pub mod auth;
pub mod config;
pub mod controller;
pub mod pages;
pub mod ui;
