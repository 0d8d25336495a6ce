use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{FiscalYear, Result};
use crate::modules::payroll::models::{
    ExtraIncomeRecord, ExtraIncomeRow, PayRecord, PayrollMonthRow,
};

/// Read access to payroll and extra-income data
#[async_trait]
pub trait PayRepository: Send + Sync {
    /// Pay rows for one employee with `from_month <= month <= to_month`
    async fn find_rows_in_range(
        &self,
        emp_id: i64,
        from_month: &str,
        to_month: &str,
    ) -> Result<Vec<PayrollMonthRow>>;

    /// The extra-income row for an employee and fiscal year, if any
    async fn find_extra_income(
        &self,
        emp_id: i64,
        fy: FiscalYear,
    ) -> Result<Option<ExtraIncomeRow>>;

    /// Every pay month on record, optionally for a single employee
    async fn list_months(&self, emp_id: Option<i64>) -> Result<Vec<String>>;
}

pub struct MySqlPayRepository {
    pool: MySqlPool,
}

impl MySqlPayRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PayRepository for MySqlPayRepository {
    async fn find_rows_in_range(
        &self,
        emp_id: i64,
        from_month: &str,
        to_month: &str,
    ) -> Result<Vec<PayrollMonthRow>> {
        let records = sqlx::query_as::<_, PayRecord>(
            r#"
            SELECT
                month, BASIC, GPAY, DA, HRA, CCA, MEDALA, other_all,
                PFSUB, CPSSUB, FBF, SPLPF, LIC, ITAX, PTAX, HFUND, OTHERS,
                COOPTEX, HDFC, VHLN, BANKLOAN
            FROM pay
            WHERE emp_id = ? AND month >= ? AND month <= ?
            ORDER BY month
            "#,
        )
        .bind(emp_id)
        .bind(from_month)
        .bind(to_month)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(
            emp_id,
            from_month,
            to_month,
            rows = records.len(),
            "Fetched pay rows"
        );

        Ok(records.into_iter().map(PayrollMonthRow::from).collect())
    }

    async fn find_extra_income(
        &self,
        emp_id: i64,
        fy: FiscalYear,
    ) -> Result<Option<ExtraIncomeRow>> {
        let record = sqlx::query_as::<_, ExtraIncomeRecord>(
            r#"
            SELECT
                daone, cpsdaone, daoneit, datwo, cpsdatwo, datwoit,
                el, elit, bonus, proarr, cpsproarr, proarrit,
                incarr, cpsincarr, increit, agparr, cpsagparr, cascps, casarrit,
                additax, other
            FROM extraincome
            WHERE id = ? AND fyear = ?
            LIMIT 1
            "#,
        )
        .bind(emp_id)
        .bind(fy.to_string())
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(ExtraIncomeRow::from))
    }

    async fn list_months(&self, emp_id: Option<i64>) -> Result<Vec<String>> {
        let months = match emp_id {
            Some(emp_id) => {
                sqlx::query_scalar::<_, String>("SELECT month FROM pay WHERE emp_id = ?")
                    .bind(emp_id)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_scalar::<_, String>("SELECT month FROM pay")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(months)
    }
}
