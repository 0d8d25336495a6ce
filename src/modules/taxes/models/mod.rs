pub mod declarations;
pub mod policy;
pub mod profile;
pub mod statement;

pub use declarations::Declarations;
pub use policy::{PolicyFlags, TaxPolicyConfig};
pub use profile::EmployeeTaxProfile;
pub use statement::{
    ChapterVIDeductions, EmployeeDetails, HraCalculation, IncomeCalculation, OtherIncome,
    SalaryComponents, Section16Deductions, Section80C, Section80D, Section80G, TaxCalculation,
    TaxSlab, TaxStatement,
};
