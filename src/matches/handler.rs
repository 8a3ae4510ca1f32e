use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use uuid::Uuid;

use crate::{
    error::AppError,
    gate::{self, RouteDecision},
    matches::{summaries, MatchDetail, MatchSummary},
    profiles::ProfileView,
    response::ApiResponse,
    session::jwt,
    store::ProfileStore,
};

/// GET /dashboard/matches — matched ids for the viewer, then profiles and
/// photos for exactly that id set.
pub async fn list_matches(
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

    let matched = store.matched_ids(viewer).await.map_err(|e| {
        tracing::error!("match lookup failed: {e}");
        AppError::InternalServerError
    })?;

    if matched.is_empty() {
        return Ok(ApiResponse::success(Vec::<MatchSummary>::new()).into_response());
    }

    let profiles = store.profiles_by_ids(&matched).await.map_err(|e| {
        tracing::error!("matched profiles fetch failed: {e}");
        AppError::InternalServerError
    })?;

    let photos = store.photo_urls(&matched).await.map_err(|e| {
        tracing::error!("matched photos fetch failed: {e}");
        AppError::InternalServerError
    })?;

    Ok(ApiResponse::success(summaries(profiles, photos)).into_response())
}

/// GET /dashboard/matches/:id — the full profile behind one match card.
/// Only ids the viewer actually matched with resolve.
pub async fn match_detail(
    State(store): State<Arc<dyn ProfileStore>>,
    claims: jwt::Claims,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let matched = store.matched_ids(claims.sub).await.map_err(|e| {
        tracing::error!("match lookup failed: {e}");
        AppError::InternalServerError
    })?;

    if !matched.contains(&id) {
        return Err(AppError::NotFound("Match not found".to_string()));
    }

    let profile = store
        .get_profile(id)
        .await
        .map_err(|e| {
            tracing::error!("matched profile fetch failed: {e}");
            AppError::InternalServerError
        })?
        .ok_or(AppError::NotFound("Match not found".to_string()))?;

    let photo_url = store.photo_url(id).await.unwrap_or_default();

    Ok(ApiResponse::success(MatchDetail {
        id,
        profile: ProfileView::assemble(profile, photo_url),
    }))
}
