pub mod employee_repository;

pub use employee_repository::{EmployeeRepository, MySqlEmployeeRepository};
