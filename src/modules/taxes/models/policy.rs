//! Administrative tax policy.
//!
//! Which employees draw a pension (commutation replaces HRA), which have a
//! recovery taken from their gross salary, and which are outside the NPS
//! carve-out are administrative decisions, not tax law. They are loaded from
//! a YAML file so they can change without a rebuild.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::core::{AppError, Result};

/// Named employee-id sets plus behaviour toggles for the tax statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxPolicyConfig {
    /// Pensioners: commutation (CPS subscription) is exempted instead of HRA
    pub pensioner_ids: BTreeSet<i64>,
    /// Employees whose VHLN deductions are recovered from gross salary
    pub recovery_ids: BTreeSet<i64>,
    /// Employees excluded from the 80CCD(1B) NPS carve-out
    pub nps_exempt_ids: BTreeSet<i64>,
    /// Round taxable income to the nearest ten rupees
    pub round_taxable_income: bool,
}

impl Default for TaxPolicyConfig {
    fn default() -> Self {
        let retired: BTreeSet<i64> = (801..=811).chain([4, 12, 34, 246, 774]).collect();

        Self {
            pensioner_ids: retired.clone(),
            recovery_ids: retired,
            nps_exempt_ids: [781, 242, 256, 257].into_iter().collect(),
            round_taxable_income: true,
        }
    }
}

/// Policy flags resolved for one employee
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyFlags {
    pub is_pensioner: bool,
    pub applies_recovery: bool,
    pub is_nps_exempt: bool,
}

impl TaxPolicyConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load the policy from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!(
                "Cannot read tax policy {}: {}",
                path.display(),
                e
            ))
        })?;
        let policy = Self::from_yaml_str(&yaml)?;

        tracing::info!(
            path = %path.display(),
            pensioners = policy.pensioner_ids.len(),
            recoveries = policy.recovery_ids.len(),
            nps_exempt = policy.nps_exempt_ids.len(),
            round_taxable_income = policy.round_taxable_income,
            "Loaded tax policy"
        );

        Ok(policy)
    }

    pub fn flags_for(&self, emp_id: i64) -> PolicyFlags {
        PolicyFlags {
            is_pensioner: self.pensioner_ids.contains(&emp_id),
            applies_recovery: self.recovery_ids.contains(&emp_id),
            is_nps_exempt: self.nps_exempt_ids.contains(&emp_id),
        }
    }
}
