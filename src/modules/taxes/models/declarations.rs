use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Largest amount accepted for any single declaration (one thousand crore)
pub const MAX_DECLARED_AMOUNT: Decimal = dec!(10000000000);

/// Amounts declared by the employee rather than read from payroll.
///
/// Every field defaults to zero; the statement is complete without any of
/// them. They are accepted as optional query parameters on the statement
/// endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Declarations {
    // Section 16 / 24(b)
    pub entertainment: Decimal,
    /// Interest on housing loan, Sec 24(b)
    pub house_property_interest: Decimal,

    // Income from other sources
    pub pension: Decimal,
    pub other_sources: Decimal,
    pub nsc_interest: Decimal,
    pub fixed_deposit_interest: Decimal,

    // Chapter VI-A, 80C bucket
    /// 80CCC pension fund (LIC Jeevan Suraksha)
    pub lic_jeevan_suraksha: Decimal,
    pub tuition_fee: Decimal,
    pub nsc: Decimal,
    pub uti: Decimal,
    /// Housing loan principal
    pub housing_loan: Decimal,
    #[serde(rename = "others80C")]
    pub others_80c: Decimal,

    // Chapter VI-A, other sections
    #[serde(rename = "section80CCG")]
    pub section_80ccg: Decimal,
    /// Health insurance on top of the salary health fund, 80D
    pub additional_insurance: Decimal,
    #[serde(rename = "section80DD")]
    pub section_80dd: Decimal,
    #[serde(rename = "section80DDB")]
    pub section_80ddb: Decimal,
    #[serde(rename = "section80E")]
    pub section_80e: Decimal,
    /// 80G donations
    pub donations: Decimal,
    #[serde(rename = "section80U")]
    pub section_80u: Decimal,
    #[serde(rename = "section80TTA")]
    pub section_80tta: Decimal,
    pub deduction_others: Decimal,

    /// Relief under Sec 89
    pub tax_relief: Decimal,
    /// Advance / self-assessment tax paid outside payroll
    pub tax_paid_by_individual: Decimal,
}

impl Declarations {
    /// Declarations by their query parameter names
    fn amounts(&self) -> [(&'static str, Decimal); 23] {
        [
            ("entertainment", self.entertainment),
            ("housePropertyInterest", self.house_property_interest),
            ("pension", self.pension),
            ("otherSources", self.other_sources),
            ("nscInterest", self.nsc_interest),
            ("fixedDepositInterest", self.fixed_deposit_interest),
            ("licJeevanSuraksha", self.lic_jeevan_suraksha),
            ("tuitionFee", self.tuition_fee),
            ("nsc", self.nsc),
            ("uti", self.uti),
            ("housingLoan", self.housing_loan),
            ("others80C", self.others_80c),
            ("section80CCG", self.section_80ccg),
            ("additionalInsurance", self.additional_insurance),
            ("section80DD", self.section_80dd),
            ("section80DDB", self.section_80ddb),
            ("section80E", self.section_80e),
            ("donations", self.donations),
            ("section80U", self.section_80u),
            ("section80TTA", self.section_80tta),
            ("deductionOthers", self.deduction_others),
            ("taxRelief", self.tax_relief),
            ("taxPaidByIndividual", self.tax_paid_by_individual),
        ]
    }

    /// Every amount must lie in `0..=MAX_DECLARED_AMOUNT`.
    ///
    /// Bounded inputs keep the statement sums far from `Decimal` overflow.
    pub fn validate(&self) -> Result<()> {
        for (name, amount) in self.amounts() {
            if amount < Decimal::ZERO || amount > MAX_DECLARED_AMOUNT {
                return Err(AppError::validation(format!(
                    "{} must be between 0 and {}",
                    name, MAX_DECLARED_AMOUNT
                )));
            }
        }
        Ok(())
    }
}
