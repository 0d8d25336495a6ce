pub mod statement_service;
pub mod tax_calculator;

pub use statement_service::StatementService;
pub use tax_calculator::{StatementInput, TaxCalculator};
