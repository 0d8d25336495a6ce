use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money;

/// Arrears and bonuses paid outside the monthly pay run for one fiscal year.
///
/// Each arrear carries its CPS contribution and the income tax withheld on
/// it. At most one row exists per employee and fiscal year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraIncomeRow {
    /// DA arrear 1
    pub daone: Decimal,
    pub cpsdaone: Decimal,
    pub daoneit: Decimal,
    /// DA arrear 2
    pub datwo: Decimal,
    pub cpsdatwo: Decimal,
    pub datwoit: Decimal,
    /// Earned leave surrender
    pub el: Decimal,
    pub elit: Decimal,
    pub bonus: Decimal,
    /// Promotion arrear
    pub proarr: Decimal,
    pub cpsproarr: Decimal,
    pub proarrit: Decimal,
    /// Increment arrear
    pub incarr: Decimal,
    pub cpsincarr: Decimal,
    pub increit: Decimal,
    /// AGP / CAS arrear
    pub agparr: Decimal,
    pub cpsagparr: Decimal,
    pub cascps: Decimal,
    pub casarrit: Decimal,
    pub additax: Decimal,
    pub other: Decimal,
}

impl ExtraIncomeRow {
    /// Arrear and bonus income added to gross salary.
    ///
    /// `cpsagparr` is counted as income here and again as a contribution in
    /// [`Self::cps_total`].
    pub fn income_total(&self) -> Decimal {
        self.daone
            + self.datwo
            + self.el
            + self.bonus
            + self.proarr
            + self.incarr
            + self.agparr
            + self.cpsagparr
            + self.other
    }

    /// CPS contributions deducted from the arrears
    pub fn cps_total(&self) -> Decimal {
        self.cpsdaone
            + self.cpsdatwo
            + self.cpsproarr
            + self.cpsincarr
            + self.cpsagparr
            + self.cascps
    }

    /// Income tax withheld on the arrears plus additional tax paid
    pub fn income_tax_total(&self) -> Decimal {
        self.daoneit
            + self.datwoit
            + self.elit
            + self.proarrit
            + self.increit
            + self.casarrit
            + self.additax
    }
}

/// Raw `extraincome` row. Most arrear columns are `VARCHAR`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExtraIncomeRecord {
    pub daone: Option<String>,
    pub cpsdaone: Option<String>,
    pub daoneit: Option<i32>,
    pub datwo: Option<String>,
    pub cpsdatwo: Option<String>,
    pub datwoit: Option<i32>,
    pub el: Option<String>,
    pub elit: Option<i32>,
    pub bonus: Option<String>,
    pub proarr: Option<String>,
    pub cpsproarr: Option<String>,
    pub proarrit: Option<i32>,
    pub incarr: Option<String>,
    pub cpsincarr: Option<String>,
    pub increit: Option<i32>,
    pub agparr: Option<String>,
    pub cpsagparr: Option<String>,
    pub cascps: Option<i32>,
    pub casarrit: Option<i32>,
    pub additax: Option<String>,
    pub other: Option<String>,
}

impl From<ExtraIncomeRecord> for ExtraIncomeRow {
    fn from(r: ExtraIncomeRecord) -> Self {
        let text = |v: &Option<String>| money::coerce(v.as_deref());

        Self {
            daone: text(&r.daone),
            cpsdaone: text(&r.cpsdaone),
            daoneit: money::from_int(r.daoneit),
            datwo: text(&r.datwo),
            cpsdatwo: text(&r.cpsdatwo),
            datwoit: money::from_int(r.datwoit),
            el: text(&r.el),
            elit: money::from_int(r.elit),
            bonus: text(&r.bonus),
            proarr: text(&r.proarr),
            cpsproarr: text(&r.cpsproarr),
            proarrit: money::from_int(r.proarrit),
            incarr: text(&r.incarr),
            cpsincarr: text(&r.cpsincarr),
            increit: money::from_int(r.increit),
            agparr: text(&r.agparr),
            cpsagparr: text(&r.cpsagparr),
            cascps: money::from_int(r.cascps),
            casarrit: money::from_int(r.casarrit),
            additax: text(&r.additax),
            other: text(&r.other),
        }
    }
}
