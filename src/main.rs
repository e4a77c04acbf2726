//! Wade, Grunberg & Wilson Site Backend
//!
//! REST backend owning the firm site's case results, design-variant tokens,
//! and admin sessions, with SQLite persistence.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod theme;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::SessionStore;
use config::Config;
use db::Repository;
use theme::ThemeContext;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub theme: ThemeContext,
    pub sessions: SessionStore,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting WGW Site Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if admin credentials are not configured
    if config.admin_email.is_none() || config.admin_password.is_none() {
        tracing::warn!(
            "Admin credentials not configured (WGW_ADMIN_EMAIL/WGW_ADMIN_PASSWORD). Sign-in is disabled and all writes will be rejected."
        );
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState {
        repo,
        theme: ThemeContext::default(),
        sessions: SessionStore::new(config.session_ttl),
        config: Arc::new(config.clone()),
    };

    // Log variant switches for the lifetime of the process
    let mut theme_changes = state.theme.subscribe();
    tokio::spawn(async move {
        while theme_changes.changed().await.is_ok() {
            let key = *theme_changes.borrow_and_update();
            tracing::info!(variant = key.as_str(), "Active design variant is now live");
        }
    });

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone the session store for the auth layer
    let sessions = state.sessions.clone();

    // Public reads and sign-in/out
    let public_routes = Router::new()
        // Case results
        .route("/cases", get(api::list_cases))
        .route("/cases/{id}", get(api::get_case))
        // Design variants
        .route("/theme", get(api::get_theme))
        .route("/theme/variants", get(api::list_variants))
        // Sessions
        .route("/auth/login", post(api::login))
        .route("/auth/session", get(api::get_session))
        .route("/auth/logout", post(api::logout));

    // Mutations require a live admin session
    let admin_routes = Router::new()
        .route("/cases", post(api::create_case))
        .route("/cases/{id}", put(api::update_case))
        .route("/cases/{id}", delete(api::delete_case))
        .route("/theme", put(api::set_theme))
        .layer(middleware::from_fn(move |req, next| {
            auth::session_auth_layer(sessions.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", public_routes.merge(admin_routes))
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
