use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::store::{MatchRow, Profile, ProfilePhoto, ProfileStore, StoreError};

const PROFILE_COLUMNS: &str = "id, full_name, age, tagline, interests, work_as, \
     looking_for, family_plan, relationship_status, texting_calling";

/// Postgres-backed client for the hosted profile store.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn get_profile(&self, id: Uuid) -> Result<Option<Profile>, StoreError> {
        let profile = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn profile_exists(&self, id: Uuid) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT 1 FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    async fn upsert_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (id, full_name, age, tagline, interests, work_as,
                looking_for, family_plan, relationship_status, texting_calling)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                age = EXCLUDED.age,
                tagline = EXCLUDED.tagline,
                interests = EXCLUDED.interests,
                work_as = EXCLUDED.work_as,
                looking_for = EXCLUDED.looking_for,
                family_plan = EXCLUDED.family_plan,
                relationship_status = EXCLUDED.relationship_status,
                texting_calling = EXCLUDED.texting_calling,
                updated_at = NOW()
            "#,
        )
        .bind(profile.id)
        .bind(&profile.full_name)
        .bind(profile.age)
        .bind(&profile.tagline)
        .bind(&profile.interests)
        .bind(&profile.work_as)
        .bind(&profile.looking_for)
        .bind(&profile.family_plan)
        .bind(&profile.relationship_status)
        .bind(&profile.texting_calling)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn upsert_photo(&self, user_id: Uuid, photo_url: &str) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO profileurl (user_id, photo_url) VALUES ($1, $2)
             ON CONFLICT (user_id) DO UPDATE SET photo_url = EXCLUDED.photo_url",
        )
        .bind(user_id)
        .bind(photo_url)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn candidates_excluding(&self, viewer: Uuid) -> Result<Vec<Profile>, StoreError> {
        let profiles = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id <> $1 ORDER BY created_at"
        ))
        .bind(viewer)
        .fetch_all(&self.pool)
        .await?;

        Ok(profiles)
    }

    async fn photo_urls(&self, ids: &[Uuid]) -> Result<Vec<ProfilePhoto>, StoreError> {
        let photos = sqlx::query_as::<_, ProfilePhoto>(
            "SELECT user_id, photo_url FROM profileurl WHERE user_id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(photos)
    }

    async fn photo_url(&self, user_id: Uuid) -> Result<Option<String>, StoreError> {
        let photo = sqlx::query_as::<_, ProfilePhoto>(
            "SELECT user_id, photo_url FROM profileurl WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(photo.map(|p| p.photo_url))
    }

    async fn matched_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, StoreError> {
        let rows = sqlx::query_as::<_, MatchRow>(
            "SELECT user_id, matched_user_id FROM matches WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|m| m.matched_user_id).collect())
    }

    async fn profiles_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Profile>, StoreError> {
        let profiles = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(profiles)
    }
}
