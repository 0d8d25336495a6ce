mod tax_controller;

pub use tax_controller::{get_salary_tax_statement, StatementQuery, StatementRequest};

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    tax_controller::configure(cfg);
}
