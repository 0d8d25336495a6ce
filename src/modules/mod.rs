pub mod employees;
pub mod health;
pub mod payroll;
pub mod taxes;
