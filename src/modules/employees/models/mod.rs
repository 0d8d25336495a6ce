pub mod employee;

pub use employee::{age_between, EmployeeRecord, EmployeeType};
