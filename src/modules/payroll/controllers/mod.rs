mod pay_controller;

pub use pay_controller::{list_financial_years, FinancialYearsQuery};

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    pay_controller::configure(cfg);
}
