use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod disabled;
pub mod pg;

/// Photo shown for anyone without a row in `profileurl`.
pub const PLACEHOLDER_PHOTO: &str = "/assets/cats/1.png";

/// One row per user in the `profiles` collection; `id` is the session
/// identity, so a profile is created at most once per user (upsert by id).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: String,
    pub age: i32,
    pub tagline: Option<String>,
    pub interests: Vec<String>,
    pub work_as: Option<String>,
    pub looking_for: Option<String>,
    pub family_plan: Option<String>,
    pub relationship_status: Option<String>,
    pub texting_calling: Option<String>,
}

/// 1:1 with Profile, stored separately in `profileurl` and joined by id.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProfilePhoto {
    pub user_id: Uuid,
    pub photo_url: String,
}

/// Directed edge in the `matches` collection.
#[derive(Debug, sqlx::FromRow)]
pub struct MatchRow {
    pub user_id: Uuid,
    pub matched_user_id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Client for the hosted profile store. Constructed once in `main` and handed
/// to every handler through `AppState`, so tests can substitute a fake.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self, id: Uuid) -> Result<Option<Profile>, StoreError>;

    async fn profile_exists(&self, id: Uuid) -> Result<bool, StoreError>;

    /// Creates or overwrites the profile row keyed by `profile.id`.
    async fn upsert_profile(&self, profile: &Profile) -> Result<(), StoreError>;

    /// Creates or overwrites the photo row keyed by `user_id`.
    async fn upsert_photo(&self, user_id: Uuid, photo_url: &str) -> Result<(), StoreError>;

    /// All profiles except the viewer's own, in stable order.
    async fn candidates_excluding(&self, viewer: Uuid) -> Result<Vec<Profile>, StoreError>;

    async fn photo_urls(&self, ids: &[Uuid]) -> Result<Vec<ProfilePhoto>, StoreError>;

    async fn photo_url(&self, user_id: Uuid) -> Result<Option<String>, StoreError>;

    async fn matched_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, StoreError>;

    async fn profiles_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Profile>, StoreError>;
}

/// Index photo rows by user id for merging into candidate or match views.
pub fn photo_map(photos: Vec<ProfilePhoto>) -> HashMap<Uuid, String> {
    photos
        .into_iter()
        .map(|p| (p.user_id, p.photo_url))
        .collect()
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// In-memory stand-in for the hosted store. `fail` makes every call
    /// return a query error, for exercising the degrade-to-empty paths.
    #[derive(Default)]
    pub struct FakeStore {
        pub profiles: Mutex<Vec<Profile>>,
        pub photos: Mutex<Vec<ProfilePhoto>>,
        pub matches: Mutex<Vec<MatchRow>>,
        pub fail: bool,
    }

    impl FakeStore {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub fn with_profile(self, profile: Profile) -> Self {
            self.profiles.lock().unwrap().push(profile);
            self
        }

        pub fn with_photo(self, user_id: Uuid, photo_url: &str) -> Self {
            self.photos.lock().unwrap().push(ProfilePhoto {
                user_id,
                photo_url: photo_url.to_string(),
            });
            self
        }

        pub fn with_match(self, user_id: Uuid, matched_user_id: Uuid) -> Self {
            self.matches.lock().unwrap().push(MatchRow {
                user_id,
                matched_user_id,
            });
            self
        }

        fn check(&self) -> Result<(), StoreError> {
            if self.fail {
                Err(StoreError::Query(sqlx::Error::PoolClosed))
            } else {
                Ok(())
            }
        }
    }

    pub fn profile(id: Uuid, name: &str, age: i32) -> Profile {
        Profile {
            id,
            full_name: name.to_string(),
            age,
            tagline: None,
            interests: vec![],
            work_as: None,
            looking_for: None,
            family_plan: None,
            relationship_status: None,
            texting_calling: None,
        }
    }

    #[async_trait]
    impl ProfileStore for FakeStore {
        async fn get_profile(&self, id: Uuid) -> Result<Option<Profile>, StoreError> {
            self.check()?;
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned())
        }

        async fn profile_exists(&self, id: Uuid) -> Result<bool, StoreError> {
            self.check()?;
            Ok(self.profiles.lock().unwrap().iter().any(|p| p.id == id))
        }

        async fn upsert_profile(&self, profile: &Profile) -> Result<(), StoreError> {
            self.check()?;
            let mut profiles = self.profiles.lock().unwrap();
            profiles.retain(|p| p.id != profile.id);
            profiles.push(profile.clone());
            Ok(())
        }

        async fn upsert_photo(&self, user_id: Uuid, photo_url: &str) -> Result<(), StoreError> {
            self.check()?;
            let mut photos = self.photos.lock().unwrap();
            photos.retain(|p| p.user_id != user_id);
            photos.push(ProfilePhoto {
                user_id,
                photo_url: photo_url.to_string(),
            });
            Ok(())
        }

        async fn candidates_excluding(&self, viewer: Uuid) -> Result<Vec<Profile>, StoreError> {
            self.check()?;
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.id != viewer)
                .cloned()
                .collect())
        }

        async fn photo_urls(&self, ids: &[Uuid]) -> Result<Vec<ProfilePhoto>, StoreError> {
            self.check()?;
            Ok(self
                .photos
                .lock()
                .unwrap()
                .iter()
                .filter(|p| ids.contains(&p.user_id))
                .cloned()
                .collect())
        }

        async fn photo_url(&self, user_id: Uuid) -> Result<Option<String>, StoreError> {
            self.check()?;
            Ok(self
                .photos
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.user_id == user_id)
                .map(|p| p.photo_url.clone()))
        }

        async fn matched_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, StoreError> {
            self.check()?;
            Ok(self
                .matches
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.user_id == user_id)
                .map(|m| m.matched_user_id)
                .collect())
        }

        async fn profiles_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Profile>, StoreError> {
            self.check()?;
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .filter(|p| ids.contains(&p.id))
                .cloned()
                .collect())
        }
    }

    #[test]
    fn photo_map_indexes_by_user_id() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let map = photo_map(vec![
            ProfilePhoto {
                user_id: a,
                photo_url: "/a.png".to_string(),
            },
            ProfilePhoto {
                user_id: b,
                photo_url: "/b.png".to_string(),
            },
        ]);
        assert_eq!(map.get(&a).map(String::as_str), Some("/a.png"));
        assert_eq!(map.get(&b).map(String::as_str), Some("/b.png"));
    }
}
