pub mod controllers;
pub mod models;
pub mod services;

pub use models::{Declarations, TaxPolicyConfig, TaxStatement};
pub use services::{StatementService, TaxCalculator};
