use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use salary_tax::config::Config;
use salary_tax::middleware::{query_config, RequestId};
use salary_tax::modules::{employees, health, payroll, taxes};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config.app.log_level, config.app.json_logs);

    tracing::info!("Starting salary tax statement service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let policy = Arc::new(config.load_tax_policy().context("Failed to load tax policy")?);

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.max_connections
    );

    let employee_repo: Arc<dyn employees::EmployeeRepository> =
        Arc::new(employees::MySqlEmployeeRepository::new(db_pool.clone()));
    let pay_repo: Arc<dyn payroll::PayRepository> =
        Arc::new(payroll::MySqlPayRepository::new(db_pool.clone()));
    let statement_service = web::Data::new(taxes::StatementService::new(
        employee_repo,
        pay_repo.clone(),
        policy.clone(),
    ));
    let pay_repo_data: web::Data<dyn payroll::PayRepository> = web::Data::from(pay_repo);
    let policy_data = web::Data::from(policy);

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(query_config())
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(policy_data.clone())
            .app_data(pay_repo_data.clone())
            .app_data(statement_service.clone())
            .configure(health::controllers::configure)
            .configure(taxes::controllers::configure)
            .configure(payroll::controllers::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("salary_tax={},actix_web=info", log_level).into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
