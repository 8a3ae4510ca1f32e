use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::store::{Profile, ProfilePhoto, ProfileStore, StoreError};

/// Stand-in used when `DATABASE_URL` is missing: every operation is a warned
/// no-op returning the empty/absent value, so the app still serves pages
/// instead of failing hard.
pub struct DisabledStore;

#[async_trait]
impl ProfileStore for DisabledStore {
    async fn get_profile(&self, _id: Uuid) -> Result<Option<Profile>, StoreError> {
        warn!("profile store not configured; get_profile is a no-op");
        Ok(None)
    }

    async fn profile_exists(&self, _id: Uuid) -> Result<bool, StoreError> {
        warn!("profile store not configured; profile_exists is a no-op");
        Ok(false)
    }

    async fn upsert_profile(&self, _profile: &Profile) -> Result<(), StoreError> {
        warn!("profile store not configured; upsert_profile is a no-op");
        Ok(())
    }

    async fn upsert_photo(&self, _user_id: Uuid, _photo_url: &str) -> Result<(), StoreError> {
        warn!("profile store not configured; upsert_photo is a no-op");
        Ok(())
    }

    async fn candidates_excluding(&self, _viewer: Uuid) -> Result<Vec<Profile>, StoreError> {
        warn!("profile store not configured; candidates_excluding is a no-op");
        Ok(vec![])
    }

    async fn photo_urls(&self, _ids: &[Uuid]) -> Result<Vec<ProfilePhoto>, StoreError> {
        warn!("profile store not configured; photo_urls is a no-op");
        Ok(vec![])
    }

    async fn photo_url(&self, _user_id: Uuid) -> Result<Option<String>, StoreError> {
        warn!("profile store not configured; photo_url is a no-op");
        Ok(None)
    }

    async fn matched_ids(&self, _user_id: Uuid) -> Result<Vec<Uuid>, StoreError> {
        warn!("profile store not configured; matched_ids is a no-op");
        Ok(vec![])
    }

    async fn profiles_by_ids(&self, _ids: &[Uuid]) -> Result<Vec<Profile>, StoreError> {
        warn!("profile store not configured; profiles_by_ids is a no-op");
        Ok(vec![])
    }
}
