use crate::modules::employees::{EmployeeRecord, EmployeeType};
use crate::modules::taxes::models::policy::{PolicyFlags, TaxPolicyConfig};

/// Everything the calculator needs to know about the employee
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeTaxProfile {
    pub emp_id: i64,
    pub emp_type: EmployeeType,
    pub record: EmployeeRecord,
    /// Whole years, computed when the statement is requested
    pub age: u32,
    pub flags: PolicyFlags,
}

impl EmployeeTaxProfile {
    pub fn new(
        emp_id: i64,
        emp_type: EmployeeType,
        record: EmployeeRecord,
        age: u32,
        policy: &TaxPolicyConfig,
    ) -> Self {
        Self {
            emp_id,
            emp_type,
            record,
            age,
            flags: policy.flags_for(emp_id),
        }
    }

    pub fn is_senior(&self) -> bool {
        self.age >= 60
    }
}
