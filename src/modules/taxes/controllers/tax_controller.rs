//! Tax statement HTTP endpoint

use actix_web::{web, HttpResponse, ResponseError};
use serde::Deserialize;

use crate::core::{AppError, FiscalYear, Result};
use crate::modules::employees::EmployeeType;
use crate::modules::taxes::models::{Declarations, TaxStatement};
use crate::modules::taxes::services::StatementService;

/// Query parameters for the statement endpoint.
///
/// Kept as raw strings so a malformed `empId` is reported the same way as a
/// missing one.
#[derive(Debug, Default, Deserialize)]
pub struct StatementQuery {
    #[serde(rename = "empId")]
    pub emp_id: Option<String>,
    pub fy: Option<String>,
    #[serde(rename = "empType")]
    pub emp_type: Option<String>,
}

/// Validated statement request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementRequest {
    pub emp_id: i64,
    pub fy: FiscalYear,
    pub emp_type: EmployeeType,
}

impl StatementQuery {
    pub fn validate(&self) -> Result<StatementRequest> {
        let required = || AppError::validation("empId and fy required");

        let emp_id = self
            .emp_id
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|id| *id > 0)
            .ok_or_else(required)?;

        let fy = match self.fy.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw.parse::<FiscalYear>()?,
            _ => return Err(required()),
        };

        Ok(StatementRequest {
            emp_id,
            fy,
            emp_type: EmployeeType::from_code(self.emp_type.as_deref()),
        })
    }
}

/// GET /taxes/statement
///
/// Salary income-tax statement for one employee and fiscal year. Optional
/// declaration amounts (`taxRelief`, `donations`, ...) are read from the
/// same query string.
pub async fn get_salary_tax_statement(
    service: web::Data<StatementService>,
    query: web::Query<StatementQuery>,
    declarations: web::Query<Declarations>,
) -> HttpResponse {
    match handle_get_salary_tax_statement(&service, &query, &declarations).await {
        Ok(statement) => HttpResponse::Ok().json(statement),
        Err(err) => {
            if err.status_code().is_server_error() {
                tracing::error!("Error in salary tax statement: {}", err);
            } else {
                tracing::debug!("Rejected salary tax statement request: {}", err);
            }
            err.error_response()
        }
    }
}

async fn handle_get_salary_tax_statement(
    service: &StatementService,
    query: &StatementQuery,
    declarations: &Declarations,
) -> Result<TaxStatement> {
    let request = query.validate()?;
    declarations.validate()?;

    service
        .generate(request.emp_id, request.fy, request.emp_type, declarations)
        .await
}

/// Configure tax routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/taxes/statement", web::get().to(get_salary_tax_statement))
        .route("/dashboard/it_form", web::get().to(get_salary_tax_statement));
}
