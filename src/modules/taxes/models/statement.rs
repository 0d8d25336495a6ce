//! Salary income-tax statement.
//!
//! The JSON layout mirrors the IT form the statement screen renders, hence
//! the mix of camelCase and upper-case pay-head keys.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::FiscalYear;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxStatement {
    pub employee_details: EmployeeDetails,
    pub salary_components: SalaryComponents,
    #[serde(rename = "hraCalculation")]
    pub hra_calculation: HraCalculation,
    pub income_calculation: IncomeCalculation,
    #[serde(rename = "deductionsSection16_24b")]
    pub deductions_section16_24b: Section16Deductions,
    pub net_salary: Decimal,
    pub other_income: OtherIncome,
    pub gross_total_income: Decimal,
    #[serde(rename = "deductionsChapterVI")]
    pub deductions_chapter_vi: ChapterVIDeductions,
    pub taxable_income: Decimal,
    pub tax_calculation: TaxCalculation,
    pub tax_relief: Decimal,
    pub tax_after_relief: Decimal,
    #[serde(rename = "rebate87A")]
    pub rebate_87a: Decimal,
    pub health_cess: Decimal,
    pub surcharge: Decimal,
    pub total_tax_payable: Decimal,
    pub so_far_deducted: Decimal,
    pub tax_paid_by_individual: Decimal,
    pub total_so_far_deducted: Decimal,
    pub balance_tax: Decimal,
    pub balance_tax_message: String,
    pub fy: FiscalYear,
    pub emp_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    #[serde(rename = "pan_no")]
    pub pan_no: Option<String>,
    pub mobile: Option<String>,
    pub place: Option<String>,
    pub age: u32,
    pub emp_type: String,
    pub is_pensioner: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryComponents {
    #[serde(rename = "BASIC")]
    pub basic: Decimal,
    #[serde(rename = "GPAY")]
    pub gpay: Decimal,
    #[serde(rename = "DA")]
    pub da: Decimal,
    /// HRA received, or commutation for pensioners
    #[serde(rename = "HRA")]
    pub hra: Decimal,
    #[serde(rename = "CCA")]
    pub cca: Decimal,
    #[serde(rename = "MEDALA")]
    pub medala: Decimal,
    #[serde(rename = "OTHER_ALL")]
    pub other_all: Decimal,
    pub gross_salary_before_recovery: Decimal,
    pub recovery_amount: Decimal,
    pub gross_salary: Decimal,
}

/// Sec 10(13A) exemption
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HraCalculation {
    #[serde(rename = "salaryForHRA")]
    pub salary_for_hra: Decimal,
    #[serde(rename = "salaryHRA10Percent")]
    pub salary_hra_10_percent: Decimal,
    #[serde(rename = "salaryHRA40Percent")]
    pub salary_hra_40_percent: Decimal,
    pub hra_received: Decimal,
    pub commutation_amount: Decimal,
    pub is_pensioner: bool,
    pub hra_exempted: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeCalculation {
    pub gross_salary: Decimal,
    #[serde(rename = "lessHRAExempted")]
    pub less_hra_exempted: Decimal,
    pub gross_income: Decimal,
}

/// Sec 16 and 24(b) deductions from salary income
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section16Deductions {
    pub house_property_interest: Decimal,
    pub entertainment: Decimal,
    pub professional_tax: Decimal,
    pub standard_deduction: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherIncome {
    pub pension: Decimal,
    pub other_sources: Decimal,
    pub nsc_interest: Decimal,
    pub fixed_deposit_interest: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterVIDeductions {
    #[serde(rename = "section80C")]
    pub section_80c: Section80C,
    #[serde(rename = "section80CCD1B_NPS")]
    pub section_80ccd1b_nps: Decimal,
    #[serde(rename = "section80CCG_RajivGandhi")]
    pub section_80ccg: Decimal,
    #[serde(rename = "section80D")]
    pub section_80d: Section80D,
    #[serde(rename = "section80DD_Handicapped")]
    pub section_80dd: Decimal,
    #[serde(rename = "section80DDB_MedicalTreatment")]
    pub section_80ddb: Decimal,
    #[serde(rename = "section80E_EducationLoan")]
    pub section_80e: Decimal,
    #[serde(rename = "section80G")]
    pub section_80g: Section80G,
    #[serde(rename = "section80U_Disability")]
    pub section_80u: Decimal,
    #[serde(rename = "section80TTA_SavingsInterest")]
    pub section_80tta: Decimal,
    pub others: Decimal,
    /// Sum of the capped section amounts
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section80C {
    #[serde(rename = "LIC_JeevanSuraksha")]
    pub lic_jeevan_suraksha: Decimal,
    #[serde(rename = "UPFCPF")]
    pub upfcpf: Decimal,
    #[serde(rename = "FBFSPF")]
    pub fbf_spf: Decimal,
    #[serde(rename = "LIC")]
    pub lic: Decimal,
    #[serde(rename = "tuitionFee")]
    pub tuition_fee: Decimal,
    #[serde(rename = "NSC")]
    pub nsc: Decimal,
    #[serde(rename = "UTI")]
    pub uti: Decimal,
    #[serde(rename = "housingLoan")]
    pub housing_loan: Decimal,
    pub others: Decimal,
    /// Uncapped bucket total
    pub total: Decimal,
    /// `total` capped at the 80C limit
    pub deduction: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section80D {
    pub health_fund: Decimal,
    pub additional_insurance: Decimal,
    pub total: Decimal,
    pub deduction: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section80G {
    pub donations: Decimal,
    #[serde(rename = "HDFC")]
    pub hdfc: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxCalculation {
    pub basic_exemption_limit: Decimal,
    pub age_category: String,
    pub slab_details: Vec<TaxSlab>,
    pub total_tax: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxSlab {
    pub description: String,
    pub amount: Decimal,
    pub rate: Decimal,
    pub tax: Decimal,
}
