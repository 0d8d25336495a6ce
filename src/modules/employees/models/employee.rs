use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Staff category; teaching and non-teaching staff live in separate tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeType {
    #[default]
    #[serde(rename = "TEA")]
    Teaching,
    #[serde(rename = "NON")]
    NonTeaching,
}

impl EmployeeType {
    /// `"TEA"` (or nothing) is teaching staff; any other code is non-teaching
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            None | Some("") | Some("TEA") => EmployeeType::Teaching,
            Some(_) => EmployeeType::NonTeaching,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            EmployeeType::Teaching => "TEA",
            EmployeeType::NonTeaching => "NON",
        }
    }
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Demographic fields needed on a tax statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct EmployeeRecord {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub pan_no: Option<String>,
    pub mobile: Option<String>,
    pub dob: Option<NaiveDate>,
    pub place: Option<String>,
}

impl EmployeeRecord {
    /// Age in whole years on `today`; zero when the date of birth is unknown
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        self.dob.map(|dob| age_between(dob, today)).unwrap_or(0)
    }
}

/// Completed years between `dob` and `today`
pub fn age_between(dob: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age.max(0) as u32
}
