// Test Data Factory
//
// Builders for pay rows, employee records and tax profiles.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use salary_tax::core::FiscalYear;
use salary_tax::modules::employees::{EmployeeRecord, EmployeeType};
use salary_tax::modules::payroll::{ExtraIncomeRow, PayrollMonthRow};
use salary_tax::modules::taxes::models::{Declarations, EmployeeTaxProfile};
use salary_tax::modules::taxes::services::StatementInput;
use salary_tax::modules::taxes::{TaxCalculator, TaxPolicyConfig, TaxStatement};

/// Employee id that appears in none of the default policy lists
pub const REGULAR_EMP_ID: i64 = 1001;
/// In the default pensioner and recovery lists
pub const PENSIONER_EMP_ID: i64 = 801;
/// In the default NPS-exempt list
pub const NPS_EXEMPT_EMP_ID: i64 = 781;

pub fn fy_2023() -> FiscalYear {
    FiscalYear::new(2023)
}

/// The twelve `YYYY-MM` months of a fiscal year, April first
pub fn fiscal_months(fy: FiscalYear) -> Vec<String> {
    (4..=12)
        .map(|m| format!("{}-{:02}", fy.start_year(), m))
        .chain((1..=3).map(|m| format!("{}-{:02}", fy.end_year(), m)))
        .collect()
}

/// Twelve identical rows with the given BASIC, DA and HRA; everything else zero
pub fn salary_year(fy: FiscalYear, basic: Decimal, da: Decimal, hra: Decimal) -> Vec<PayrollMonthRow> {
    year_of(fy, PayrollMonthRow {
        basic,
        da,
        hra,
        ..Default::default()
    })
}

/// Twelve copies of `template`, each stamped with its month
pub fn year_of(fy: FiscalYear, template: PayrollMonthRow) -> Vec<PayrollMonthRow> {
    fiscal_months(fy)
        .into_iter()
        .map(|month| PayrollMonthRow {
            month,
            ..template.clone()
        })
        .collect()
}

pub fn employee_record(name: &str, dob: Option<NaiveDate>) -> EmployeeRecord {
    EmployeeRecord {
        name: Some(name.to_string()),
        designation: Some("Assistant Professor".to_string()),
        department: Some("Physics".to_string()),
        pan_no: Some("ABCDE1234F".to_string()),
        mobile: Some("9876543210".to_string()),
        dob,
        place: Some("Chennai".to_string()),
    }
}

/// Teaching-staff profile resolved against the default policy
pub fn profile(emp_id: i64, age: u32) -> EmployeeTaxProfile {
    profile_with_policy(emp_id, age, &TaxPolicyConfig::default())
}

pub fn profile_with_policy(emp_id: i64, age: u32, policy: &TaxPolicyConfig) -> EmployeeTaxProfile {
    EmployeeTaxProfile::new(
        emp_id,
        EmployeeType::Teaching,
        employee_record("Test Employee", None),
        age,
        policy,
    )
}

/// Run the default calculator
pub fn compute(
    profile: &EmployeeTaxProfile,
    rows: &[PayrollMonthRow],
    extra: Option<&ExtraIncomeRow>,
    declarations: &Declarations,
) -> TaxStatement {
    compute_with(TaxCalculator::default(), profile, rows, extra, declarations)
}

pub fn compute_with(
    calculator: TaxCalculator,
    profile: &EmployeeTaxProfile,
    rows: &[PayrollMonthRow],
    extra: Option<&ExtraIncomeRow>,
    declarations: &Declarations,
) -> TaxStatement {
    calculator.compute_statement(&StatementInput {
        profile,
        fiscal_year: fy_2023(),
        rows,
        extra,
        declarations,
    })
}
