use std::sync::Arc;

use axum::{
    extract::FromRef,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use dotenv::dotenv;
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

mod browse;
mod config;
mod error;
mod gate;
mod matches;
mod profiles;
mod response;
mod session;
mod store;

use config::settings::Settings;
use store::{disabled::DisabledStore, pg::PgStore, ProfileStore};

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ProfileStore>,
    settings: Settings,
}

impl FromRef<AppState> for Arc<dyn ProfileStore> {
    fn from_ref(app_state: &AppState) -> Arc<dyn ProfileStore> {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Settings {
    fn from_ref(app_state: &AppState) -> Settings {
        app_state.settings.clone()
    }
}

/// Landing page payload.
async fn home() -> impl IntoResponse {
    Json(json!({
        "app": "MISMATCHED",
        "headline": "No more God when? Meet your Perfect Match",
    }))
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "Server is running!" }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = Settings::new();

    // The store client is built once here and injected everywhere via state.
    // Without DATABASE_URL every data operation degrades to a warned no-op.
    let store: Arc<dyn ProfileStore> = match &settings.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
            sqlx::migrate!().run(&pool).await?;
            info!("profile store connected");
            Arc::new(PgStore::new(pool))
        }
        None => Arc::new(DisabledStore),
    };

    let app_state = AppState {
        store,
        settings: settings.clone(),
    };

    let dashboard_router = Router::new()
        .route("/", get(browse::handler::dashboard))
        .route("/decision", post(browse::handler::record_decision))
        .route("/matches", get(matches::handler::list_matches))
        .route("/matches/:id", get(matches::handler::match_detail));

    let app = Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/auth", get(session::handler::auth_page))
        .route(
            "/pfpcreate",
            get(profiles::handler::create_page).post(profiles::handler::save_profile),
        )
        .nest("/dashboard", dashboard_router)
        .with_state(app_state);

    info!("Server running on http://localhost:{}", settings.port);

    let listener = tokio::net::TcpListener::bind(settings.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
