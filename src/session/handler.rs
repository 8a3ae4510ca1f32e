use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;

use crate::{
    response::ApiResponse,
    session::{AuthMode, AuthPage},
};

#[derive(Debug, Deserialize)]
pub struct AuthQuery {
    pub mode: Option<String>,
}

/// Auth entry point. Sign-in itself happens against the external session
/// provider; this just reports which tab is active so the screen can keep
/// its URL in sync.
pub async fn auth_page(Query(query): Query<AuthQuery>) -> impl IntoResponse {
    let mode = AuthMode::from_query(query.mode.as_deref());

    ApiResponse::success(AuthPage {
        mode,
        providers: vec!["google"],
    })
}
