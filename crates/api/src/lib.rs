//! # MediTrack API
//!
//! The API crate provides the web server implementation for the MediTrack
//! medication-tracking service. It defines RESTful endpoints for managing
//! users, medications, health profiles, reminders and analysis alerts, and
//! orchestrates the AI gateway for prescription recognition and
//! drug-interaction analysis.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Map domain errors to HTTP responses
//! - **Scheduler**: In-process one-shot reminder jobs
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database
//! interactions; outbound AI calls go through `meditrack-ai`.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;
/// In-memory one-shot reminder job scheduler
pub mod scheduler;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use meditrack_ai::GeminiClient;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::scheduler::ReminderScheduler;

/// Shared application state that is accessible to all request handlers
///
/// Encapsulates the dependencies shared across the application: the
/// database connection pool, the AI gateway client and the reminder
/// scheduler.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Client for the generative AI service
    pub ai: GeminiClient,
    /// One-shot reminder job scheduler
    pub scheduler: ReminderScheduler,
}

/// Starts the API server with the provided configuration, database
/// connection and AI gateway client.
///
/// This function initializes logging, starts the reminder scheduler,
/// configures routes, and runs the HTTP server until shutdown.
pub async fn start_server(
    config: config::ApiConfig,
    db_pool: PgPool,
    ai: GeminiClient,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Start the in-process reminder scheduler
    let scheduler = ReminderScheduler::new();
    scheduler.start();

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        db_pool,
        ai,
        scheduler,
    });

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // User management endpoints
        .merge(routes::users::routes())
        // Medication CRUD endpoints
        .merge(routes::medications::routes())
        // Health profile endpoints
        .merge(routes::profiles::routes())
        // Reminder endpoints
        .merge(routes::reminders::routes())
        // Prescription recognition endpoint
        .merge(routes::prescription::routes())
        // Interaction analysis and alert history endpoints
        .merge(routes::alerts::routes())
        // Terms of service endpoint
        .merge(routes::terms::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
