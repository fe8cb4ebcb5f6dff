use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::{handlers, system};

/// Configure all application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES
        // ========================================
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // REFERENCE DATA (reads for any principal, writes admin only)
        // ========================================
        // A001 Officer handlers
        .route(
            "/api/officer",
            get(handlers::a001_officer::list_all)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/officer",
            post(handlers::a001_officer::upsert)
                .layer(middleware::from_fn(system::auth::middleware::require_admin)),
        )
        .route(
            "/api/officer/:id",
            get(handlers::a001_officer::get_by_id)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/officer/:id",
            delete(handlers::a001_officer::delete)
                .layer(middleware::from_fn(system::auth::middleware::require_admin)),
        )
        // A002 Station handlers
        .route(
            "/api/station",
            get(handlers::a002_station::list_all)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/station",
            post(handlers::a002_station::upsert)
                .layer(middleware::from_fn(system::auth::middleware::require_admin)),
        )
        .route(
            "/api/station/:id",
            get(handlers::a002_station::get_by_id)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/station/:id",
            delete(handlers::a002_station::delete)
                .layer(middleware::from_fn(system::auth::middleware::require_admin)),
        )
        // A003 Payment code handlers
        .route(
            "/api/payment_code",
            get(handlers::a003_payment_code::list_all)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/payment_code",
            post(handlers::a003_payment_code::upsert)
                .layer(middleware::from_fn(system::auth::middleware::require_admin)),
        )
        .route(
            "/api/payment_code/:id",
            get(handlers::a003_payment_code::get_by_id)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/payment_code/:id",
            delete(handlers::a003_payment_code::delete)
                .layer(middleware::from_fn(system::auth::middleware::require_admin)),
        )
        // ========================================
        // A004 SALARY ITEMS (scoped per principal)
        // ========================================
        .route(
            "/api/salary_item",
            get(handlers::a004_salary_item::list_for_period)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/salary_item",
            post(handlers::a004_salary_item::create)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/salary_item/:id/amount",
            put(handlers::a004_salary_item::update_amount)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // USE CASES
        // ========================================
        .route(
            "/api/u101/import-payroll-file",
            post(handlers::u101_import_payroll_file::import_payroll_file)
                .layer(middleware::from_fn(system::auth::middleware::require_admin)),
        )
        .route(
            "/api/u102/bank-transfer",
            get(handlers::u102_export_bank_transfer::export_bank_transfer)
                .layer(middleware::from_fn(system::auth::middleware::require_admin)),
        )
}
