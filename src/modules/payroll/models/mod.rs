pub mod extra_income;
pub mod financial_years;
pub mod pay_row;

pub use extra_income::{ExtraIncomeRecord, ExtraIncomeRow};
pub use financial_years::{FinancialYearOption, FinancialYearsResponse};
pub use pay_row::{PayRecord, PayrollMonthRow};
