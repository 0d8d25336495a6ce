pub mod models;
pub mod repositories;

pub use models::{EmployeeRecord, EmployeeType};
pub use repositories::{EmployeeRepository, MySqlEmployeeRepository};
