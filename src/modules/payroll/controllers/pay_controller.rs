//! Payroll lookups used by the statement screens

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::Result;
use crate::modules::payroll::models::FinancialYearsResponse;
use crate::modules::payroll::repositories::PayRepository;

#[derive(Debug, Deserialize)]
pub struct FinancialYearsQuery {
    /// Restrict to one employee's pay rows
    #[serde(rename = "empId", default)]
    pub emp_id: Option<i64>,
}

/// GET /pay/financial-years
///
/// Fiscal years that have at least one pay row, newest first.
pub async fn list_financial_years(
    repository: web::Data<dyn PayRepository>,
    query: web::Query<FinancialYearsQuery>,
) -> Result<HttpResponse> {
    let emp_id = query.emp_id.filter(|id| *id > 0);
    let months = repository.list_months(emp_id).await.map_err(|e| {
        tracing::error!("Failed to list pay months: {}", e);
        e
    })?;

    let response = FinancialYearsResponse::from_months(&months);
    tracing::debug!(?emp_id, years = response.years.len(), "Listed financial years");

    Ok(HttpResponse::Ok().json(response))
}

/// Configure payroll routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/pay/financial-years", web::get().to(list_financial_years))
        .route("/dropdown/financialyears", web::get().to(list_financial_years));
}
