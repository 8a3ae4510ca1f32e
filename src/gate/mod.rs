use tracing::error;
use uuid::Uuid;

use crate::store::ProfileStore;

/// Where a protected page should send the visitor. Every gated handler calls
/// [`decide`] once instead of re-implementing the check-then-branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    GoToAuth,
    GoToCreateProfile,
    GoToDashboard,
}

/// Resolve the routing decision for a protected page.
///
/// No identity routes to the auth screen. An identity without a profile row
/// routes to profile creation. An identity with a profile row routes to the
/// dashboard, unless `edit` is set, which keeps the visitor on the creation
/// form to edit the existing profile.
///
/// A failed existence check counts as "no profile": the visitor lands on the
/// creation form rather than an error page, matching how single-row lookups
/// treat not-found as absence.
pub async fn decide(identity: Option<Uuid>, store: &dyn ProfileStore, edit: bool) -> RouteDecision {
    let Some(id) = identity else {
        return RouteDecision::GoToAuth;
    };

    let has_profile = match store.profile_exists(id).await {
        Ok(exists) => exists,
        Err(e) => {
            error!("profile existence check failed: {e}");
            false
        }
    };

    // edit keeps an existing profile on the creation form
    if has_profile && !edit {
        RouteDecision::GoToDashboard
    } else {
        RouteDecision::GoToCreateProfile
    }
}
