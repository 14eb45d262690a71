//! Presentational helpers for the terminal shell.
//!
//! The browser dashboard's stateless components collapse to text rendering
//! here: a column-descriptor table (the `Table` component) and nothing else.
//! Modal open/close state lives in the list controller; Navbar/Sidebar/Card
//! were pure branding.

mod table;

pub use table::{render_table, Column};
