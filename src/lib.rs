//! Salary income-tax statement service
//!
//! Builds the annual Form-16 style tax statement for an employee from the
//! monthly payroll register, the per-year extra income record and the
//! employee's declared deductions.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::employees;
pub use modules::payroll;
pub use modules::taxes;
