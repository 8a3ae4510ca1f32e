use serde::Serialize;
use uuid::Uuid;

use crate::{
    profiles::ProfileView,
    store::{photo_map, Profile, ProfilePhoto, PLACEHOLDER_PHOTO},
};

pub mod handler;

/// One card on the matches page.
#[derive(Debug, Serialize)]
pub struct MatchSummary {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub photo: String,
}

/// The modal opened from a match card: the full profile behind it.
#[derive(Debug, Serialize)]
pub struct MatchDetail {
    pub id: Uuid,
    #[serde(flatten)]
    pub profile: ProfileView,
}

/// Same merge rules as the browse deck: missing photo falls back to the
/// placeholder, photo rows without a profile are dropped.
pub fn summaries(profiles: Vec<Profile>, photos: Vec<ProfilePhoto>) -> Vec<MatchSummary> {
    let mut photos = photo_map(photos);

    profiles
        .into_iter()
        .map(|p| MatchSummary {
            photo: photos
                .remove(&p.id)
                .unwrap_or_else(|| PLACEHOLDER_PHOTO.to_string()),
            id: p.id,
            name: p.full_name,
            age: p.age,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::profile;

    #[test]
    fn summary_photo_falls_back_to_placeholder() {
        let pictured = Uuid::new_v4();
        let bare = Uuid::new_v4();

        let merged = summaries(
            vec![profile(pictured, "Pictured", 29), profile(bare, "Bare", 34)],
            vec![ProfilePhoto {
                user_id: pictured,
                photo_url: "/assets/cats/5.png".to_string(),
            }],
        );

        assert_eq!(merged[0].photo, "/assets/cats/5.png");
        assert_eq!(merged[1].photo, PLACEHOLDER_PHOTO);
    }
}
