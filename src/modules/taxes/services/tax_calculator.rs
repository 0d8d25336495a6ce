//! Salary income-tax statement computation.
//!
//! Turns a fiscal year of pay rows plus the optional extra-income row into an
//! itemized statement: gross salary, HRA exemption, Sec 16 / 24(b)
//! deductions, Chapter VI-A deductions, slab tax, 87A rebate, cess and the
//! balance still to be withheld.
//!
//! The computation is pure. It reads its inputs, allocates a fresh statement
//! and never fails: a year with no pay rows yields an all-zero statement.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::money::{self, round_half_up};
use crate::core::FiscalYear;
use crate::modules::payroll::{ExtraIncomeRow, PayrollMonthRow};
use crate::modules::taxes::models::{
    ChapterVIDeductions, Declarations, EmployeeDetails, EmployeeTaxProfile, HraCalculation,
    IncomeCalculation, OtherIncome, SalaryComponents, Section16Deductions, Section80C, Section80D,
    Section80G, TaxCalculation, TaxPolicyConfig, TaxSlab, TaxStatement,
};

const SENIOR_AGE: u32 = 60;

const STANDARD_DEDUCTION: Decimal = dec!(50000);
const NPS_LIMIT: Decimal = dec!(50000);
const SECTION_80C_LIMIT: Decimal = dec!(150000);
const SECTION_80D_LIMIT: Decimal = dec!(50000);

const BASIC_EXEMPTION: Decimal = dec!(250000);
const SENIOR_BASIC_EXEMPTION: Decimal = dec!(300000);
const SLAB_A_WIDTH: Decimal = dec!(250000);
const SENIOR_SLAB_A_WIDTH: Decimal = dec!(200000);
const SLAB_B_WIDTH: Decimal = dec!(500000);
const SLAB_A_RATE: Decimal = dec!(0.05);
const SLAB_B_RATE: Decimal = dec!(0.20);
const SLAB_C_RATE: Decimal = dec!(0.30);

const REBATE_87A_INCOME_LIMIT: Decimal = dec!(500000);
const REBATE_87A_MAX: Decimal = dec!(12500);
const HEALTH_CESS_RATE: Decimal = dec!(0.04);

const BALANCE_MESSAGE: &str = "Balance of Income Tax to be deducted";

/// Inputs for one statement
#[derive(Debug, Clone, Copy)]
pub struct StatementInput<'a> {
    pub profile: &'a EmployeeTaxProfile,
    pub fiscal_year: FiscalYear,
    pub rows: &'a [PayrollMonthRow],
    pub extra: Option<&'a ExtraIncomeRow>,
    pub declarations: &'a Declarations,
}

/// Fiscal-year totals of the pay heads the statement reads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayTotals {
    pub basic: Decimal,
    pub gpay: Decimal,
    pub da: Decimal,
    pub hra: Decimal,
    pub cca: Decimal,
    pub medala: Decimal,
    pub other_all: Decimal,
    /// PF subscription, or CPS when no PF was deducted
    pub upfcpf: Decimal,
    pub fbf: Decimal,
    pub splpf: Decimal,
    pub lic: Decimal,
    pub itax: Decimal,
    pub ptax: Decimal,
    pub hfund: Decimal,
    pub others: Decimal,
    pub cooptex: Decimal,
    pub hdfc: Decimal,
    /// CPS subscription, including arrear contributions
    pub cps: Decimal,
    /// CPS subscription from payroll only; doubles as the pensioner's
    /// commutation amount
    pub commutation: Decimal,
    pub vhln: Decimal,
}

impl PayTotals {
    pub fn from_rows(rows: &[PayrollMonthRow]) -> Self {
        rows.iter().fold(Self::default(), |mut t, r| {
            t.basic += r.basic;
            t.gpay += r.gpay;
            t.da += r.da;
            t.hra += r.hra;
            t.cca += r.cca;
            t.medala += r.medala;
            t.other_all += r.other_all;
            t.upfcpf += r.upf_or_cps();
            t.fbf += r.fbf;
            t.splpf += r.splpf;
            t.lic += r.lic;
            t.itax += r.itax;
            t.ptax += r.ptax;
            t.hfund += r.hfund;
            t.others += r.others;
            t.cooptex += r.cooptex;
            t.hdfc += r.hdfc;
            t.cps += r.cpssub;
            t.commutation += r.cpssub;
            t.vhln += r.vhln;
            t
        })
    }

    /// Fold arrear contributions and withheld tax into the totals.
    /// Returns the arrear income to add to gross salary.
    pub fn apply_extra_income(&mut self, extra: &ExtraIncomeRow) -> Decimal {
        let cps = extra.cps_total();
        self.upfcpf += cps;
        self.cps += cps;
        self.itax += extra.income_tax_total();
        extra.income_total()
    }
}

/// Result of moving PF/CPS contributions into the 80CCD(1B) slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NpsSplit {
    /// Contribution left in the 80C bucket
    pub upfcpf: Decimal,
    pub nps: Decimal,
}

/// Re-bucket PF/CPS contributions into the NPS additional deduction.
///
/// Below the NPS limit the whole contribution moves. At or above it, only
/// CPS members move exactly the limit; PF-only members keep everything in
/// 80C.
pub fn split_nps(upfcpf: Decimal, cps: Decimal, nps_exempt: bool) -> NpsSplit {
    if nps_exempt {
        return NpsSplit {
            upfcpf,
            nps: Decimal::ZERO,
        };
    }

    if upfcpf < NPS_LIMIT {
        NpsSplit {
            upfcpf: Decimal::ZERO,
            nps: upfcpf,
        }
    } else if cps > Decimal::ZERO {
        NpsSplit {
            upfcpf: upfcpf - NPS_LIMIT,
            nps: NPS_LIMIT,
        }
    } else {
        NpsSplit {
            upfcpf,
            nps: Decimal::ZERO,
        }
    }
}

/// Slab-wise tax on taxable income
#[derive(Debug, Clone, PartialEq)]
pub struct SlabTax {
    pub basic_exemption_limit: Decimal,
    pub slab_a_width: Decimal,
    pub amount_a: Decimal,
    pub tax_a: Decimal,
    pub amount_b: Decimal,
    pub tax_b: Decimal,
    pub amount_c: Decimal,
    pub tax_c: Decimal,
}

impl SlabTax {
    pub fn total(&self) -> Decimal {
        self.tax_a + self.tax_b + self.tax_c
    }
}

/// Old-regime slab tax. Only the 30% slab is rounded (up).
pub fn compute_slab_tax(taxable_income: Decimal, age: u32) -> SlabTax {
    let senior = age >= SENIOR_AGE;
    let limit = if senior {
        SENIOR_BASIC_EXEMPTION
    } else {
        BASIC_EXEMPTION
    };
    let slab_a_width = if senior {
        SENIOR_SLAB_A_WIDTH
    } else {
        SLAB_A_WIDTH
    };

    let mut slabs = SlabTax {
        basic_exemption_limit: limit,
        slab_a_width,
        amount_a: Decimal::ZERO,
        tax_a: Decimal::ZERO,
        amount_b: Decimal::ZERO,
        tax_b: Decimal::ZERO,
        amount_c: Decimal::ZERO,
        tax_c: Decimal::ZERO,
    };

    if taxable_income <= limit {
        return slabs;
    }

    let mut remaining = taxable_income - limit;

    slabs.amount_a = money::min(remaining, slab_a_width);
    slabs.tax_a = (slabs.amount_a * SLAB_A_RATE).normalize();
    remaining -= slab_a_width;

    if remaining > Decimal::ZERO {
        slabs.amount_b = money::min(remaining, SLAB_B_WIDTH);
        slabs.tax_b = (slabs.amount_b * SLAB_B_RATE).normalize();
        remaining -= SLAB_B_WIDTH;
    }

    if remaining > Decimal::ZERO {
        slabs.amount_c = remaining;
        slabs.tax_c = money::ceil(remaining * SLAB_C_RATE);
    }

    slabs
}

/// Sec 87A rebate for incomes up to five lakh
pub fn rebate_87a(taxable_income: Decimal, tax_after_relief: Decimal) -> Decimal {
    if taxable_income <= REBATE_87A_INCOME_LIMIT {
        money::min(tax_after_relief, REBATE_87A_MAX)
    } else {
        Decimal::ZERO
    }
}

/// Computes salary tax statements
#[derive(Debug, Clone, Copy)]
pub struct TaxCalculator {
    round_taxable_income: bool,
}

impl TaxCalculator {
    pub fn new(round_taxable_income: bool) -> Self {
        Self {
            round_taxable_income,
        }
    }

    pub fn from_policy(policy: &TaxPolicyConfig) -> Self {
        Self::new(policy.round_taxable_income)
    }

    pub fn compute_statement(&self, input: &StatementInput<'_>) -> TaxStatement {
        let profile = input.profile;
        let flags = profile.flags;
        let decl = input.declarations;
        let senior = profile.is_senior();

        let mut totals = PayTotals::from_rows(input.rows);

        let recovery_amount = if flags.applies_recovery {
            totals.vhln
        } else {
            Decimal::ZERO
        };

        let extra_income = input
            .extra
            .map(|extra| totals.apply_extra_income(extra))
            .unwrap_or(Decimal::ZERO);

        let nps = split_nps(totals.upfcpf, totals.cps, flags.is_nps_exempt);
        totals.upfcpf = nps.upfcpf;

        // Gross salary
        let gross_salary_before_recovery = totals.basic
            + totals.gpay
            + totals.da
            + totals.hra
            + totals.cca
            + totals.medala
            + totals.other_all
            + extra_income;
        let gross_salary = gross_salary_before_recovery - recovery_amount;

        // Sec 10(13A). Rent paid is not captured, so the rent-minus-10% leg
        // of the minimum is never applied.
        let salary_for_hra = totals.basic + totals.da;
        let salary_hra_10_percent = round_half_up(salary_for_hra * dec!(0.1));
        let salary_hra_40_percent = round_half_up(salary_for_hra * dec!(0.4));
        let hra_received = if flags.is_pensioner {
            totals.commutation
        } else {
            totals.hra
        };
        let hra_exempted = if senior {
            hra_received
        } else {
            money::min(hra_received, salary_hra_40_percent)
        };

        let gross_income = gross_salary - hra_exempted;

        // Sec 16 / 24(b)
        let section16_total = STANDARD_DEDUCTION
            + totals.ptax
            + decl.entertainment
            + decl.house_property_interest;
        let net_salary = gross_income - section16_total;

        let other_income_total = decl.pension
            + decl.other_sources
            + decl.nsc_interest
            + decl.fixed_deposit_interest;
        let gross_total_income = net_salary + other_income_total;

        let chapter_vi = self.chapter_vi(&totals, nps.nps, decl);

        let mut taxable_income = gross_total_income - chapter_vi.total;
        if self.round_taxable_income {
            taxable_income = money::round_to_nearest_ten(taxable_income);
        }

        let slabs = compute_slab_tax(taxable_income, profile.age);
        let tax = slabs.total();

        let tax_relief = decl.tax_relief;
        let tax_after_relief = (tax - tax_relief).max(Decimal::ZERO);
        let rebate = rebate_87a(taxable_income, tax_after_relief);
        let health_cess = round_half_up((tax_after_relief - rebate) * HEALTH_CESS_RATE);
        let surcharge = Decimal::ZERO;
        let total_tax_payable = tax_after_relief - rebate + health_cess + surcharge;

        let so_far_deducted = totals.itax;
        let tax_paid_by_individual = decl.tax_paid_by_individual;
        let total_so_far_deducted = so_far_deducted + tax_paid_by_individual;
        let balance_tax = total_tax_payable - total_so_far_deducted;

        TaxStatement {
            employee_details: EmployeeDetails {
                name: profile.record.name.clone(),
                designation: profile.record.designation.clone(),
                department: profile.record.department.clone(),
                pan_no: profile.record.pan_no.clone(),
                mobile: profile.record.mobile.clone(),
                place: profile.record.place.clone(),
                age: profile.age,
                emp_type: profile.emp_type.code().to_string(),
                is_pensioner: flags.is_pensioner,
            },
            salary_components: SalaryComponents {
                basic: totals.basic,
                gpay: totals.gpay,
                da: totals.da,
                hra: hra_received,
                cca: totals.cca,
                medala: totals.medala,
                other_all: totals.other_all,
                gross_salary_before_recovery,
                recovery_amount,
                gross_salary,
            },
            hra_calculation: HraCalculation {
                salary_for_hra,
                salary_hra_10_percent,
                salary_hra_40_percent,
                hra_received,
                commutation_amount: totals.commutation,
                is_pensioner: flags.is_pensioner,
                hra_exempted,
            },
            income_calculation: IncomeCalculation {
                gross_salary,
                less_hra_exempted: hra_exempted,
                gross_income,
            },
            deductions_section16_24b: Section16Deductions {
                house_property_interest: decl.house_property_interest,
                entertainment: decl.entertainment,
                professional_tax: totals.ptax,
                standard_deduction: STANDARD_DEDUCTION,
                total: section16_total,
            },
            net_salary,
            other_income: OtherIncome {
                pension: decl.pension,
                other_sources: decl.other_sources,
                nsc_interest: decl.nsc_interest,
                fixed_deposit_interest: decl.fixed_deposit_interest,
                total: other_income_total,
            },
            gross_total_income,
            deductions_chapter_vi: chapter_vi,
            taxable_income,
            tax_calculation: tax_calculation(&slabs, senior),
            tax_relief,
            tax_after_relief,
            rebate_87a: rebate,
            health_cess,
            surcharge,
            total_tax_payable,
            so_far_deducted,
            tax_paid_by_individual,
            total_so_far_deducted,
            balance_tax,
            balance_tax_message: balance_tax_message(balance_tax),
            fy: input.fiscal_year,
            emp_id: profile.emp_id,
        }
    }

    fn chapter_vi(
        &self,
        totals: &PayTotals,
        nps: Decimal,
        decl: &Declarations,
    ) -> ChapterVIDeductions {
        let fbf_spf = totals.fbf + totals.splpf;
        let total_80c = decl.lic_jeevan_suraksha
            + totals.upfcpf
            + fbf_spf
            + totals.lic
            + decl.tuition_fee
            + decl.nsc
            + decl.uti
            + decl.housing_loan
            + decl.others_80c;
        let section_80c = Section80C {
            lic_jeevan_suraksha: decl.lic_jeevan_suraksha,
            upfcpf: totals.upfcpf,
            fbf_spf,
            lic: totals.lic,
            tuition_fee: decl.tuition_fee,
            nsc: decl.nsc,
            uti: decl.uti,
            housing_loan: decl.housing_loan,
            others: decl.others_80c,
            total: total_80c,
            deduction: money::min(total_80c, SECTION_80C_LIMIT),
        };

        let section_80ccd1b_nps = money::min(nps, NPS_LIMIT);

        // The 80D cap stays at the non-senior limit for every age.
        let total_80d = totals.hfund + decl.additional_insurance;
        let section_80d = Section80D {
            health_fund: totals.hfund,
            additional_insurance: decl.additional_insurance,
            total: total_80d,
            deduction: money::min(total_80d, SECTION_80D_LIMIT),
        };

        let hdfc = round_half_up(totals.hdfc);
        let section_80g = Section80G {
            donations: decl.donations,
            hdfc,
            total: decl.donations + hdfc,
        };

        let total = section_80c.deduction
            + section_80ccd1b_nps
            + decl.section_80ccg
            + section_80d.deduction
            + decl.section_80dd
            + decl.section_80ddb
            + decl.section_80e
            + section_80g.total
            + decl.section_80u
            + decl.section_80tta
            + decl.deduction_others;

        ChapterVIDeductions {
            section_80c,
            section_80ccd1b_nps,
            section_80ccg: decl.section_80ccg,
            section_80d,
            section_80dd: decl.section_80dd,
            section_80ddb: decl.section_80ddb,
            section_80e: decl.section_80e,
            section_80g,
            section_80u: decl.section_80u,
            section_80tta: decl.section_80tta,
            others: decl.deduction_others,
            total,
        }
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::from_policy(&TaxPolicyConfig::default())
    }
}

fn tax_calculation(slabs: &SlabTax, senior: bool) -> TaxCalculation {
    let (age_category, first_slab) = if senior {
        (
            "Senior Citizen above 60 years but below 80 Years",
            "On first Rs. 3,00,000",
        )
    } else {
        ("Individual below 60 years", "On first Rs. 2,50,000")
    };

    TaxCalculation {
        basic_exemption_limit: slabs.basic_exemption_limit,
        age_category: age_category.to_string(),
        slab_details: vec![
            TaxSlab {
                description: first_slab.to_string(),
                amount: slabs.basic_exemption_limit,
                rate: Decimal::ZERO,
                tax: Decimal::ZERO,
            },
            TaxSlab {
                description: format!(
                    "On next (Rs. {} to 5,00,000)",
                    slabs.basic_exemption_limit + Decimal::ONE
                ),
                amount: slabs.amount_a,
                rate: SLAB_A_RATE,
                tax: slabs.tax_a,
            },
            TaxSlab {
                description: "On next (Rs. 5,00,001 to 10,00,000)".to_string(),
                amount: slabs.amount_b,
                rate: SLAB_B_RATE,
                tax: slabs.tax_b,
            },
            TaxSlab {
                description: "On balance (Above Rs. 10,00,001)".to_string(),
                amount: slabs.amount_c,
                rate: SLAB_C_RATE,
                tax: slabs.tax_c,
            },
        ],
        total_tax: slabs.total(),
    }
}

fn balance_tax_message(balance_tax: Decimal) -> String {
    if balance_tax > Decimal::ZERO {
        format!("{}: {}", BALANCE_MESSAGE, money::display(balance_tax))
    } else {
        format!("{}: NIL", BALANCE_MESSAGE)
    }
}
