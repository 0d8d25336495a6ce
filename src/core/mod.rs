pub mod error;
pub mod fiscal_year;
pub mod money;

pub use error::{AppError, Result};
pub use fiscal_year::FiscalYear;
