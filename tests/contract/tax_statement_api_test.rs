//! Contract tests for the salary tax statement JSON
//!
//! Validates the response body of GET /taxes/statement: top-level keys,
//! nested section keys and value types as consumed by the IT form screen.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use rust_decimal_macros::dec;
use salary_tax::modules::taxes::models::Declarations;
use serde_json::Value;

fn statement_json() -> Value {
    let rows = salary_year(fy_2023(), dec!(40000), dec!(20000), dec!(10000));
    let statement = compute(&profile(REGULAR_EMP_ID, 45), &rows, None, &Declarations::default());
    serde_json::to_value(&statement).unwrap()
}

fn assert_keys(value: &Value, keys: &[&str]) {
    let object = value.as_object().expect("expected a JSON object");
    for key in keys {
        assert!(object.contains_key(*key), "missing key {}", key);
    }
    assert_eq!(object.len(), keys.len(), "unexpected keys in {:?}", object.keys());
}

/// Test: top-level structure
#[test]
fn test_statement_top_level_keys() {
    let json = statement_json();

    assert_keys(
        &json,
        &[
            "employeeDetails",
            "salaryComponents",
            "hraCalculation",
            "incomeCalculation",
            "deductionsSection16_24b",
            "netSalary",
            "otherIncome",
            "grossTotalIncome",
            "deductionsChapterVI",
            "taxableIncome",
            "taxCalculation",
            "taxRelief",
            "taxAfterRelief",
            "rebate87A",
            "healthCess",
            "surcharge",
            "totalTaxPayable",
            "soFarDeducted",
            "taxPaidByIndividual",
            "totalSoFarDeducted",
            "balanceTax",
            "balanceTaxMessage",
            "fy",
            "empId",
        ],
    );
}

/// Test: employee and salary sections
#[test]
fn test_employee_and_salary_sections() {
    let json = statement_json();

    assert_keys(
        &json["employeeDetails"],
        &[
            "name",
            "designation",
            "department",
            "pan_no",
            "mobile",
            "place",
            "age",
            "empType",
            "isPensioner",
        ],
    );
    assert_eq!(json["employeeDetails"]["empType"], "TEA");
    assert_eq!(json["employeeDetails"]["age"], 45);
    assert_eq!(json["employeeDetails"]["isPensioner"], false);

    assert_keys(
        &json["salaryComponents"],
        &[
            "BASIC",
            "GPAY",
            "DA",
            "HRA",
            "CCA",
            "MEDALA",
            "OTHER_ALL",
            "grossSalaryBeforeRecovery",
            "recoveryAmount",
            "grossSalary",
        ],
    );

    assert_keys(
        &json["hraCalculation"],
        &[
            "salaryForHRA",
            "salaryHRA10Percent",
            "salaryHRA40Percent",
            "hraReceived",
            "commutationAmount",
            "isPensioner",
            "hraExempted",
        ],
    );

    assert_keys(
        &json["incomeCalculation"],
        &["grossSalary", "lessHRAExempted", "grossIncome"],
    );
    assert_keys(
        &json["deductionsSection16_24b"],
        &[
            "housePropertyInterest",
            "entertainment",
            "professionalTax",
            "standardDeduction",
            "total",
        ],
    );
    assert_keys(
        &json["otherIncome"],
        &["pension", "otherSources", "nscInterest", "fixedDepositInterest", "total"],
    );
}

/// Test: Chapter VI-A breakdown
#[test]
fn test_chapter_vi_section_keys() {
    let json = statement_json();
    let chapter_vi = &json["deductionsChapterVI"];

    assert_keys(
        chapter_vi,
        &[
            "section80C",
            "section80CCD1B_NPS",
            "section80CCG_RajivGandhi",
            "section80D",
            "section80DD_Handicapped",
            "section80DDB_MedicalTreatment",
            "section80E_EducationLoan",
            "section80G",
            "section80U_Disability",
            "section80TTA_SavingsInterest",
            "others",
            "total",
        ],
    );
    assert_keys(
        &chapter_vi["section80C"],
        &[
            "LIC_JeevanSuraksha",
            "UPFCPF",
            "FBFSPF",
            "LIC",
            "tuitionFee",
            "NSC",
            "UTI",
            "housingLoan",
            "others",
            "total",
            "deduction",
        ],
    );
    assert_keys(
        &chapter_vi["section80D"],
        &["healthFund", "additionalInsurance", "total", "deduction"],
    );
    assert_keys(&chapter_vi["section80G"], &["donations", "HDFC", "total"]);
}

/// Test: slab breakdown
#[test]
fn test_tax_calculation_slabs() {
    let json = statement_json();
    let tax = &json["taxCalculation"];

    assert_keys(
        tax,
        &["basicExemptionLimit", "ageCategory", "slabDetails", "totalTax"],
    );

    let slabs = tax["slabDetails"].as_array().unwrap();
    assert_eq!(slabs.len(), 4);
    for slab in slabs {
        assert_keys(slab, &["description", "amount", "rate", "tax"]);
    }
    assert_eq!(slabs[0]["description"], "On first Rs. 2,50,000");
    assert_eq!(slabs[1]["description"], "On next (Rs. 250001 to 5,00,000)");
    assert_eq!(slabs[3]["description"], "On balance (Above Rs. 10,00,001)");
    assert_eq!(slabs[1]["rate"].as_f64(), Some(0.05));
}

/// Test: amounts are JSON numbers, identifiers keep their types
#[test]
fn test_value_types() {
    let json = statement_json();

    assert!(json["netSalary"].is_number());
    assert_eq!(json["netSalary"].as_f64(), Some(670000.0));
    assert_eq!(json["taxableIncome"].as_f64(), Some(670000.0));
    assert_eq!(json["healthCess"].as_f64(), Some(1860.0));
    assert_eq!(json["totalTaxPayable"].as_f64(), Some(48360.0));
    assert_eq!(
        json["salaryComponents"]["grossSalary"].as_f64(),
        Some(840000.0)
    );
    assert!(json["balanceTaxMessage"].is_string());
    assert_eq!(json["fy"], "2023-2024");
    assert_eq!(json["empId"].as_i64(), Some(REGULAR_EMP_ID));
}
