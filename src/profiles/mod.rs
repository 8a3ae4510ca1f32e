use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::store::Profile;

pub mod handler;

/// Payload of the profile-creation wizard. One field per profile attribute
/// plus a multi-select interests list (no maximum). The only constraints are
/// the ones the form itself imposes: a name, and the 18–80 age slider.
#[derive(Debug, Deserialize, Validate)]
pub struct ProfileForm {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub full_name: String,
    #[validate(range(min = 18, max = 80, message = "Age must be between 18 and 80"))]
    pub age: i32,
    pub tagline: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub work_as: Option<String>,
    pub looking_for: Option<String>,
    pub family_plan: Option<String>,
    pub relationship_status: Option<String>,
    pub texting_calling: Option<String>,
    pub photo_url: Option<String>,
}

impl ProfileForm {
    /// Split into the profile row keyed by the session identity and the
    /// separately-stored photo URL.
    pub fn into_parts(self, id: Uuid) -> (Profile, Option<String>) {
        let profile = Profile {
            id,
            full_name: self.full_name,
            age: self.age,
            tagline: self.tagline,
            interests: self.interests,
            work_as: self.work_as,
            looking_for: self.looking_for,
            family_plan: self.family_plan,
            relationship_status: self.relationship_status,
            texting_calling: self.texting_calling,
        };
        (profile, self.photo_url)
    }
}

/// A profile row and its photo merged into the shape the dashboard renders.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub full_name: String,
    pub age: i32,
    pub tagline: Option<String>,
    pub interests: Vec<String>,
    pub work_as: Option<String>,
    pub looking_for: Option<String>,
    pub family_plan: Option<String>,
    pub relationship_status: Option<String>,
    pub texting_calling: Option<String>,
    pub photo_url: Option<String>,
}

impl ProfileView {
    pub fn assemble(profile: Profile, photo_url: Option<String>) -> Self {
        Self {
            full_name: profile.full_name,
            age: profile.age,
            tagline: profile.tagline,
            interests: profile.interests,
            work_as: profile.work_as,
            looking_for: profile.looking_for,
            family_plan: profile.family_plan,
            relationship_status: profile.relationship_status,
            texting_calling: profile.texting_calling,
            photo_url,
        }
    }
}

/// Response of GET /pfpcreate when the visitor stays on the form.
#[derive(Debug, Serialize)]
pub struct CreatePage {
    pub editing: bool,
    /// Existing profile for prefill when editing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProfileForm {
        ProfileForm {
            full_name: "Ada Lovelace".to_string(),
            age: 28,
            tagline: Some("first of her field".to_string()),
            interests: vec!["math".to_string(), "poetry".to_string()],
            work_as: Some("Engineer".to_string()),
            looking_for: None,
            family_plan: None,
            relationship_status: None,
            texting_calling: Some("texting".to_string()),
            photo_url: Some("/assets/cats/2.png".to_string()),
        }
    }

    #[test]
    fn form_splits_into_row_and_photo() {
        let id = Uuid::new_v4();
        let (profile, photo) = form().into_parts(id);

        assert_eq!(profile.id, id);
        assert_eq!(profile.full_name, "Ada Lovelace");
        assert_eq!(profile.interests.len(), 2);
        assert_eq!(photo.as_deref(), Some("/assets/cats/2.png"));
    }

    #[test]
    fn age_outside_slider_bounds_is_rejected() {
        let mut under = form();
        under.age = 17;
        assert!(under.validate().is_err());

        let mut over = form();
        over.age = 81;
        assert!(over.validate().is_err());

        assert!(form().validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut nameless = form();
        nameless.full_name = String::new();
        assert!(nameless.validate().is_err());
    }
}
