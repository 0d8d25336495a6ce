use actix_web::{error::QueryPayloadError, web, Error, HttpRequest};

use crate::core::AppError;

/// Query extractor config that reports malformed parameters as a JSON
/// validation error instead of actix's plain-text 400.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}

fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    let detail = match &err {
        QueryPayloadError::Deserialize(e) => e.to_string(),
        other => other.to_string(),
    };

    tracing::debug!(
        path = %req.path(),
        query = %req.query_string(),
        "Rejected query parameters: {}",
        detail
    );

    AppError::validation(format!("Invalid query parameter: {}", detail)).into()
}
