use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{
    browse::{BrowseDeck, ProfileBrowser},
    error::AppError,
    gate::{self, RouteDecision},
    profiles::{self, ProfileView},
    response::ApiResponse,
    session::jwt,
    store::ProfileStore,
};

/// Everything the dashboard renders: the viewer's own profile and one freshly
/// loaded browse deck.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub profile: ProfileView,
    pub browse: BrowseDeck,
}

/// GET /dashboard. One request is one mount: the candidate list is fetched
/// here and never re-fetched while the visitor swipes through it.
pub async fn dashboard(
    State(store): State<Arc<dyn ProfileStore>>,
    claims: Option<jwt::Claims>,
) -> Result<Response, AppError> {
    let Some(viewer) = claims.map(|c| c.sub) else {
        return Ok(Redirect::to("/auth").into_response());
    };

    match gate::decide(Some(viewer), store.as_ref(), false).await {
        RouteDecision::GoToAuth => return Ok(Redirect::to("/auth").into_response()),
        RouteDecision::GoToCreateProfile => {
            return Ok(Redirect::to("/pfpcreate").into_response())
        }
        RouteDecision::GoToDashboard => {}
    }

    let profile = profiles::handler::existing_view(store.as_ref(), viewer)
        .await
        .ok_or(AppError::NotFound("No profile data found".to_string()))?;

    let browser = ProfileBrowser::load(store.as_ref(), viewer).await;

    Ok(ApiResponse::success(DashboardView {
        profile,
        browse: browser.into_deck(),
    })
    .into_response())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accept,
    Reject,
}

#[derive(Debug, Deserialize)]
pub struct DecisionPayload {
    pub candidate_id: Uuid,
    pub decision: Decision,
}

/// POST /dashboard/decision. The decision is intent only: nothing is written
/// to the store, the cursor lives with the deck the dashboard handed out.
pub async fn record_decision(
    claims: jwt::Claims,
    Json(payload): Json<DecisionPayload>,
) -> Result<impl IntoResponse, AppError> {
    match payload.decision {
        Decision::Accept => {
            info!(viewer = %claims.sub, candidate = %payload.candidate_id, "accepted candidate")
        }
        Decision::Reject => {
            info!(viewer = %claims.sub, candidate = %payload.candidate_id, "rejected candidate")
        }
    }

    Ok(ApiResponse::ok("Decision noted".to_string()))
}
