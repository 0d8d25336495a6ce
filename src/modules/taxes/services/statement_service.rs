use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::core::{AppError, FiscalYear, Result};
use crate::modules::employees::{EmployeeRepository, EmployeeType};
use crate::modules::payroll::PayRepository;
use crate::modules::taxes::models::{
    Declarations, EmployeeTaxProfile, TaxPolicyConfig, TaxStatement,
};
use crate::modules::taxes::services::tax_calculator::{StatementInput, TaxCalculator};

/// Gathers an employee's pay data for a fiscal year and runs the calculator
pub struct StatementService {
    employee_repo: Arc<dyn EmployeeRepository>,
    pay_repo: Arc<dyn PayRepository>,
    policy: Arc<TaxPolicyConfig>,
    calculator: TaxCalculator,
}

impl StatementService {
    pub fn new(
        employee_repo: Arc<dyn EmployeeRepository>,
        pay_repo: Arc<dyn PayRepository>,
        policy: Arc<TaxPolicyConfig>,
    ) -> Self {
        let calculator = TaxCalculator::from_policy(&policy);
        Self {
            employee_repo,
            pay_repo,
            policy,
            calculator,
        }
    }

    /// Salary tax statement as of today
    pub async fn generate(
        &self,
        emp_id: i64,
        fy: FiscalYear,
        emp_type: EmployeeType,
        declarations: &Declarations,
    ) -> Result<TaxStatement> {
        let today = chrono::Local::now().date_naive();
        self.generate_on(emp_id, fy, emp_type, declarations, today).await
    }

    /// Salary tax statement with the employee's age taken on `today`
    ///
    /// # Errors
    /// `NotFound` when the employee does not exist in the table for
    /// `emp_type`; `Database` when any lookup fails.
    pub async fn generate_on(
        &self,
        emp_id: i64,
        fy: FiscalYear,
        emp_type: EmployeeType,
        declarations: &Declarations,
        today: NaiveDate,
    ) -> Result<TaxStatement> {
        let record = self
            .employee_repo
            .find_by_id(emp_id, emp_type)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found"))?;

        let age = record.age_on(today);
        let profile = EmployeeTaxProfile::new(emp_id, emp_type, record, age, &self.policy);

        let (first_month, last_month) = (fy.first_month(), fy.last_month());
        let (rows, extra) = tokio::try_join!(
            self.pay_repo
                .find_rows_in_range(emp_id, &first_month, &last_month),
            self.pay_repo.find_extra_income(emp_id, fy),
        )?;
        if rows.is_empty() {
            warn!(emp_id, %fy, "No pay rows for fiscal year");
        }

        let statement = self.calculator.compute_statement(&StatementInput {
            profile: &profile,
            fiscal_year: fy,
            rows: &rows,
            extra: extra.as_ref(),
            declarations,
        });

        info!(
            emp_id,
            %fy,
            emp_type = %emp_type,
            months = rows.len(),
            has_extra_income = extra.is_some(),
            taxable_income = %statement.taxable_income,
            balance_tax = %statement.balance_tax,
            "Generated salary tax statement"
        );

        Ok(statement)
    }
}
