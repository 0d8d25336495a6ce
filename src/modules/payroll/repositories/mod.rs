pub mod pay_repository;

pub use pay_repository::{MySqlPayRepository, PayRepository};
