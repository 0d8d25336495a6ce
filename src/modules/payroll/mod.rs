pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::{ExtraIncomeRow, PayrollMonthRow};
pub use repositories::{MySqlPayRepository, PayRepository};
