use std::collections::HashMap;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::store::{photo_map, Profile, ProfilePhoto, ProfileStore, PLACEHOLDER_PHOTO};

pub mod handler;

/// Projection of Profile + ProfilePhoto shown in the browse deck. Built fresh
/// on every dashboard load, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct BrowseCandidate {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub work: Option<String>,
    pub interests: Vec<String>,
    pub photo: String,
}

/// Result of fetching the candidate list, so callers can tell "no candidates"
/// from "fetch broke".
#[derive(Debug)]
pub enum BrowseFetch {
    Loaded(Vec<BrowseCandidate>),
    Empty,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowseState {
    Ready,
    Exhausted,
}

/// Ordered candidate list plus a cursor. The list is fixed for the lifetime
/// of one load; accept and reject only advance the cursor, they never remove,
/// reorder, or re-fetch.
#[derive(Debug)]
pub struct ProfileBrowser {
    candidates: Vec<BrowseCandidate>,
    cursor: usize,
    error: Option<String>,
}

impl ProfileBrowser {
    /// Fetch all profiles except the viewer's own, then photo URLs for
    /// exactly that id set, and merge them by id. Any failure yields an
    /// empty, immediately-exhausted browser carrying the reason.
    pub async fn load(store: &dyn ProfileStore, viewer: Uuid) -> Self {
        match fetch_candidates(store, viewer).await {
            BrowseFetch::Loaded(candidates) => Self {
                candidates,
                cursor: 0,
                error: None,
            },
            BrowseFetch::Empty => Self {
                candidates: vec![],
                cursor: 0,
                error: None,
            },
            BrowseFetch::Failed(reason) => {
                tracing::error!("candidate fetch failed: {reason}");
                Self {
                    candidates: vec![],
                    cursor: 0,
                    error: Some(reason),
                }
            }
        }
    }

    pub fn current(&self) -> Option<&BrowseCandidate> {
        self.candidates.get(self.cursor)
    }

    pub fn state(&self) -> BrowseState {
        if self.cursor < self.candidates.len() {
            BrowseState::Ready
        } else {
            BrowseState::Exhausted
        }
    }

    /// Records intent only; no match or decision row is ever written.
    pub fn accept(&mut self) {
        if let Some(candidate) = self.current() {
            info!(candidate = %candidate.id, "accepted candidate");
        }
        self.advance();
    }

    /// Records intent only, same as accept.
    pub fn reject(&mut self) {
        if let Some(candidate) = self.current() {
            info!(candidate = %candidate.id, "rejected candidate");
        }
        self.advance();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn into_deck(self) -> BrowseDeck {
        BrowseDeck {
            state: self.state(),
            cursor: self.cursor,
            error: self.error,
            candidates: self.candidates,
        }
    }

    // Cursor is monotone and bounded by the list length.
    fn advance(&mut self) {
        if self.cursor < self.candidates.len() {
            self.cursor += 1;
        }
    }
}

/// Serializable snapshot of one browser load, sent with the dashboard page.
#[derive(Debug, Serialize)]
pub struct BrowseDeck {
    pub state: BrowseState,
    pub cursor: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub candidates: Vec<BrowseCandidate>,
}

/// The profile fetch always runs before the photo fetch, since the photo
/// query is limited to the ids the first returned.
pub async fn fetch_candidates(store: &dyn ProfileStore, viewer: Uuid) -> BrowseFetch {
    let profiles = match store.candidates_excluding(viewer).await {
        Ok(profiles) => profiles,
        Err(e) => return BrowseFetch::Failed(e.to_string()),
    };

    if profiles.is_empty() {
        return BrowseFetch::Empty;
    }

    let ids: Vec<Uuid> = profiles.iter().map(|p| p.id).collect();
    let photos = match store.photo_urls(&ids).await {
        Ok(photos) => photos,
        Err(e) => return BrowseFetch::Failed(e.to_string()),
    };

    BrowseFetch::Loaded(merge_candidates(profiles, photos))
}

/// Merge profiles and photo rows by id. A profile with no photo row falls
/// back to the placeholder; a photo row with no matching profile is ignored.
pub fn merge_candidates(profiles: Vec<Profile>, photos: Vec<ProfilePhoto>) -> Vec<BrowseCandidate> {
    let mut photos: HashMap<Uuid, String> = photo_map(photos);

    profiles
        .into_iter()
        .map(|p| BrowseCandidate {
            photo: photos
                .remove(&p.id)
                .unwrap_or_else(|| PLACEHOLDER_PHOTO.to_string()),
            id: p.id,
            name: p.full_name,
            age: p.age,
            work: p.work_as,
            interests: p.interests,
        })
        .collect()
}
