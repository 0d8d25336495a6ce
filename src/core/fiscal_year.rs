//! Indian fiscal year (1 April to 31 March), written `"YYYY-YYYY"`.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::core::AppError;

/// A fiscal year identified by the calendar year it starts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FiscalYear {
    start: i32,
}

impl FiscalYear {
    pub fn new(start: i32) -> Self {
        Self { start }
    }

    pub fn start_year(&self) -> i32 {
        self.start
    }

    pub fn end_year(&self) -> i32 {
        self.start + 1
    }

    /// First payroll month of the year, `"{start}-04"`
    pub fn first_month(&self) -> String {
        format!("{}-04", self.start)
    }

    /// Last payroll month of the year, `"{end}-03"`
    pub fn last_month(&self) -> String {
        format!("{}-03", self.end_year())
    }

    /// Fiscal year a `"YYYY-MM"` payroll month belongs to.
    ///
    /// Tolerates a single-digit month and whitespace around the dash.
    /// Returns `None` for anything that is not a valid month.
    pub fn from_month(month: &str) -> Option<Self> {
        let (year, mon) = split_pair(month)?;
        if year.len() != 4 || mon.is_empty() || mon.len() > 2 {
            return None;
        }
        let year: i32 = year.parse().ok()?;
        let mon: u32 = mon.parse().ok()?;
        if !(1..=12).contains(&mon) {
            return None;
        }

        Some(if mon >= 4 {
            Self::new(year)
        } else {
            Self::new(year - 1)
        })
    }
}

fn split_pair(raw: &str) -> Option<(&str, &str)> {
    let (left, right) = raw.trim().split_once('-')?;
    let (left, right) = (left.trim(), right.trim());
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(left) || !all_digits(right) {
        return None;
    }
    Some((left, right))
}

impl FromStr for FiscalYear {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::validation(format!("fy must be like 2023-2024, got '{}'", s));

        let (start, end) = split_pair(s).ok_or_else(invalid)?;
        if start.len() != 4 || end.len() != 4 {
            return Err(invalid());
        }
        let start: i32 = start.parse().map_err(|_| invalid())?;
        let end: i32 = end.parse().map_err(|_| invalid())?;
        if end != start + 1 {
            return Err(invalid());
        }

        Ok(Self::new(start))
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end_year())
    }
}

impl Serialize for FiscalYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
