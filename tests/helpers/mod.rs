// Test helpers shared by the unit, contract and integration suites.
//
// Include from a test crate with:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//
// Integration tests run the real actix handlers and services against the
// in-memory repositories below instead of a MySQL database.

#![allow(dead_code)]

pub mod test_data;

// Re-export commonly used types and functions
pub use test_app::*;
pub use test_data::*;
pub use test_repositories::*;
