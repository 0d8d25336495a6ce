use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money;

/// One employee's pay slip for one calendar month.
///
/// Only the columns the tax statement reads are carried; the pay table has
/// many more (advances, arrears, quarters rent, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollMonthRow {
    /// `"YYYY-MM"`
    pub month: String,

    // Earnings
    #[serde(rename = "BASIC")]
    pub basic: Decimal,
    #[serde(rename = "GPAY")]
    pub gpay: Decimal,
    #[serde(rename = "DA")]
    pub da: Decimal,
    #[serde(rename = "HRA")]
    pub hra: Decimal,
    #[serde(rename = "CCA")]
    pub cca: Decimal,
    #[serde(rename = "MEDALA")]
    pub medala: Decimal,
    pub other_all: Decimal,

    // Deductions
    #[serde(rename = "PFSUB")]
    pub pfsub: Decimal,
    #[serde(rename = "CPSSUB")]
    pub cpssub: Decimal,
    #[serde(rename = "FBF")]
    pub fbf: Decimal,
    #[serde(rename = "SPLPF")]
    pub splpf: Decimal,
    #[serde(rename = "LIC")]
    pub lic: Decimal,
    #[serde(rename = "ITAX")]
    pub itax: Decimal,
    #[serde(rename = "PTAX")]
    pub ptax: Decimal,
    #[serde(rename = "HFUND")]
    pub hfund: Decimal,
    #[serde(rename = "OTHERS")]
    pub others: Decimal,
    #[serde(rename = "COOPTEX")]
    pub cooptex: Decimal,
    #[serde(rename = "HDFC")]
    pub hdfc: Decimal,
    #[serde(rename = "VHLN")]
    pub vhln: Decimal,
    #[serde(rename = "BANKLOAN")]
    pub bankloan: Decimal,
}

impl PayrollMonthRow {
    /// Provident fund subscription, falling back to the CPS subscription
    /// when the employee has no PF deduction that month.
    pub fn upf_or_cps(&self) -> Decimal {
        if self.pfsub.is_zero() {
            self.cpssub
        } else {
            self.pfsub
        }
    }
}

/// Raw `pay` table row as stored in MySQL
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PayRecord {
    pub month: String,
    #[sqlx(rename = "BASIC")]
    pub basic: Option<i32>,
    #[sqlx(rename = "GPAY")]
    pub gpay: Option<i32>,
    #[sqlx(rename = "DA")]
    pub da: Option<i32>,
    #[sqlx(rename = "HRA")]
    pub hra: Option<i32>,
    #[sqlx(rename = "CCA")]
    pub cca: Option<i32>,
    #[sqlx(rename = "MEDALA")]
    pub medala: Option<i32>,
    pub other_all: Option<i32>,
    #[sqlx(rename = "PFSUB")]
    pub pfsub: Option<i32>,
    #[sqlx(rename = "CPSSUB")]
    pub cpssub: Option<i32>,
    #[sqlx(rename = "FBF")]
    pub fbf: Option<i32>,
    #[sqlx(rename = "SPLPF")]
    pub splpf: Option<i32>,
    #[sqlx(rename = "LIC")]
    pub lic: Option<i32>,
    #[sqlx(rename = "ITAX")]
    pub itax: Option<i32>,
    #[sqlx(rename = "PTAX")]
    pub ptax: Option<i32>,
    #[sqlx(rename = "HFUND")]
    pub hfund: Option<i32>,
    #[sqlx(rename = "OTHERS")]
    pub others: Option<i32>,
    #[sqlx(rename = "COOPTEX")]
    pub cooptex: Option<i32>,
    #[sqlx(rename = "HDFC")]
    pub hdfc: Option<i32>,
    #[sqlx(rename = "VHLN")]
    pub vhln: Option<i32>,
    #[sqlx(rename = "BANKLOAN")]
    pub bankloan: Option<i32>,
}

impl From<PayRecord> for PayrollMonthRow {
    fn from(r: PayRecord) -> Self {
        Self {
            month: r.month,
            basic: money::from_int(r.basic),
            gpay: money::from_int(r.gpay),
            da: money::from_int(r.da),
            hra: money::from_int(r.hra),
            cca: money::from_int(r.cca),
            medala: money::from_int(r.medala),
            other_all: money::from_int(r.other_all),
            pfsub: money::from_int(r.pfsub),
            cpssub: money::from_int(r.cpssub),
            fbf: money::from_int(r.fbf),
            splpf: money::from_int(r.splpf),
            lic: money::from_int(r.lic),
            itax: money::from_int(r.itax),
            ptax: money::from_int(r.ptax),
            hfund: money::from_int(r.hfund),
            others: money::from_int(r.others),
            cooptex: money::from_int(r.cooptex),
            hdfc: money::from_int(r.hdfc),
            vhln: money::from_int(r.vhln),
            bankloan: money::from_int(r.bankloan),
        }
    }
}
