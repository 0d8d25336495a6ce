use serde::Serialize;
use std::collections::BTreeSet;

use crate::core::FiscalYear;

/// Dropdown entry; `value` and `label` are both the `"YYYY-YYYY"` string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialYearOption {
    pub value: FiscalYear,
    pub label: FiscalYear,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinancialYearsResponse {
    pub success: bool,
    pub years: Vec<FinancialYearOption>,
}

impl FinancialYearsResponse {
    /// Distinct fiscal years covering `months`, newest first.
    ///
    /// Months that are not `YYYY-MM` are skipped.
    pub fn from_months<I, S>(months: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let years: BTreeSet<FiscalYear> = months
            .into_iter()
            .filter_map(|m| FiscalYear::from_month(m.as_ref()))
            .collect();

        Self {
            success: true,
            years: years
                .into_iter()
                .rev()
                .map(|fy| FinancialYearOption { value: fy, label: fy })
                .collect(),
        }
    }
}
