use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppError,
    gate::{self, RouteDecision},
    profiles::{CreatePage, ProfileForm, ProfileView},
    response::ApiResponse,
    session::jwt,
    store::ProfileStore,
};

#[derive(Debug, Deserialize)]
pub struct CreateQuery {
    #[serde(default)]
    pub edit: bool,
}

/// GET /pfpcreate — the profile-creation wizard entry. An existing profile
/// redirects to the dashboard unless `edit=true` is set, in which case the
/// current rows are returned for prefill.
pub async fn create_page(
    State(store): State<Arc<dyn ProfileStore>>,
    claims: Option<jwt::Claims>,
    Query(query): Query<CreateQuery>,
) -> Result<Response, AppError> {
    let identity = claims.map(|c| c.sub);

    match gate::decide(identity, store.as_ref(), query.edit).await {
        RouteDecision::GoToAuth => Ok(Redirect::to("/auth").into_response()),
        RouteDecision::GoToDashboard => Ok(Redirect::to("/dashboard").into_response()),
        RouteDecision::GoToCreateProfile => {
            let mut profile = None;

            if query.edit {
                // GoToCreateProfile implies identity is present
                if let Some(viewer) = identity {
                    profile = existing_view(store.as_ref(), viewer).await;
                }
            }

            Ok(ApiResponse::success(CreatePage {
                editing: query.edit,
                profile,
            })
            .into_response())
        }
    }
}

/// POST /pfpcreate — save the form as one upsert keyed by the session
/// identity, plus the photo row when a URL was supplied.
pub async fn save_profile(
    State(store): State<Arc<dyn ProfileStore>>,
    claims: jwt::Claims,
    Json(payload): Json<ProfileForm>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;

    let created = !store.profile_exists(claims.sub).await.unwrap_or(false);

    let (profile, photo_url) = payload.into_parts(claims.sub);

    store.upsert_profile(&profile).await.map_err(|e| {
        tracing::error!("profile upsert failed: {e}");
        AppError::InternalServerError
    })?;

    if let Some(url) = &photo_url {
        store.upsert_photo(claims.sub, url).await.map_err(|e| {
            tracing::error!("photo upsert failed: {e}");
            AppError::InternalServerError
        })?;
    }

    let view = ProfileView::assemble(profile, photo_url);

    if created {
        Ok(ApiResponse::success(view).created().into_response())
    } else {
        Ok(ApiResponse::success(view).into_response())
    }
}

/// Look up the viewer's profile and photo rows; absence of either is fine.
pub async fn existing_view(store: &dyn ProfileStore, viewer: Uuid) -> Option<ProfileView> {
    let profile = store.get_profile(viewer).await.ok().flatten()?;
    let photo_url = store.photo_url(viewer).await.ok().flatten();
    Some(ProfileView::assemble(profile, photo_url))
}
