// Integration tests for GET /pay/financial-years

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test, App};
use helpers::*;
use salary_tax::core::FiscalYear;
use salary_tax::modules::payroll::PayrollMonthRow;
use serde_json::Value;

fn rows(months: &[&str]) -> Vec<PayrollMonthRow> {
    months
        .iter()
        .map(|m| PayrollMonthRow {
            month: m.to_string(),
            ..Default::default()
        })
        .collect()
}

fn state() -> TestState {
    let fy_2022 = fiscal_months(FiscalYear::new(2022));
    let fy_2022: Vec<&str> = fy_2022.iter().map(String::as_str).collect();

    let pay = InMemoryPayRepository::default()
        .with_rows(REGULAR_EMP_ID, rows(&fy_2022))
        .with_rows(REGULAR_EMP_ID, rows(&["2023-04", "2023-5"]))
        .with_rows(2002, rows(&["2020-06", "2021-02", "bad-month"]));

    TestState::new(InMemoryEmployeeRepository::default(), pay)
}

async fn get(state: &TestState, uri: &str) -> (StatusCode, Value) {
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

fn labels(body: &Value) -> Vec<String> {
    body["years"]
        .as_array()
        .unwrap()
        .iter()
        .map(|y| y["label"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn test_all_years_newest_first() {
    let (status, body) = get(&state(), "/pay/financial-years").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(labels(&body), vec!["2023-2024", "2022-2023", "2020-2021"]);
    assert_eq!(body["years"][0]["value"], "2023-2024");
}

#[actix_web::test]
async fn test_years_for_one_employee() {
    let (status, body) = get(&state(), "/pay/financial-years?empId=2002").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(labels(&body), vec!["2020-2021"]);
}

#[actix_web::test]
async fn test_dropdown_alias() {
    let (status, body) = get(&state(), "/dropdown/financialyears?empId=1001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(labels(&body), vec!["2023-2024", "2022-2023"]);
}

#[actix_web::test]
async fn test_no_pay_rows_gives_empty_list() {
    let (status, body) = get(&state(), "/pay/financial-years?empId=4242").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["years"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_repository_failure_is_internal_error() {
    let state = TestState::new(
        InMemoryEmployeeRepository::default(),
        InMemoryPayRepository::failing("timeout"),
    );
    let (status, body) = get(&state, "/pay/financial-years").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}
