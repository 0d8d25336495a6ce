// Fiscal year parsing and payroll month mapping

use salary_tax::core::{AppError, FiscalYear};
use salary_tax::modules::payroll::models::FinancialYearsResponse;

#[test]
fn test_month_maps_to_fiscal_year() {
    let cases = [
        ("2023-04", 2023),
        ("2023-12", 2023),
        ("2024-01", 2023),
        ("2024-03", 2023),
        ("2024-4", 2024),
        ("2024 - 3", 2023),
        (" 2019-11 ", 2019),
    ];

    for (month, start) in cases {
        assert_eq!(
            FiscalYear::from_month(month),
            Some(FiscalYear::new(start)),
            "month {}",
            month
        );
    }
}

#[test]
fn test_invalid_months_are_skipped() {
    for month in ["", "2024", "2024-00", "2024-13", "24-04", "2024-004", "abcd-01", "2024/04"] {
        assert_eq!(FiscalYear::from_month(month), None, "month {:?}", month);
    }
}

#[test]
fn test_parse_error_is_a_validation_error() {
    let err = "2023/2024".parse::<FiscalYear>().unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(err.to_string(), "fy must be like 2023-2024, got '2023/2024'");
}

#[test]
fn test_month_range_brackets_the_year() {
    let fy: FiscalYear = "2019-2020".parse().unwrap();
    assert_eq!(fy.first_month(), "2019-04");
    assert_eq!(fy.last_month(), "2020-03");

    // Zero-padded months compare correctly as strings
    assert!("2019-04" >= fy.first_month().as_str());
    assert!("2019-12" <= fy.last_month().as_str());
    assert!("2020-04" > fy.last_month().as_str());
}

#[test]
fn test_serializes_as_label() {
    let json = serde_json::to_value(FiscalYear::new(2021)).unwrap();
    assert_eq!(json, serde_json::json!("2021-2022"));
}

#[test]
fn test_years_from_payroll_months() {
    let response = FinancialYearsResponse::from_months(vec![
        "2021-5".to_string(),
        "2022-02".to_string(),
        "2022-04".to_string(),
        "2022-11".to_string(),
        "not-a-month".to_string(),
    ]);

    assert!(response.success);
    let starts: Vec<i32> = response.years.iter().map(|y| y.value.start_year()).collect();
    assert_eq!(starts, vec![2022, 2021]);
}
