//! Create/edit form state and its conversion into a validated store payload.

use serde::{Deserialize, Serialize};
use tracing::debug;

use models::{SocialLinks, UserService, UserServiceInput};

use crate::errors::ServiceError;

/// Raw form fields as typed by the user. Optional fields are empty strings until filled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceForm {
    pub name: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl ServiceForm {
    /// Prefill from a stored listing for editing.
    pub fn from_service(s: &UserService) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            name: s.name.clone(),
            category: s.category.clone(),
            description: s.description.clone(),
            location: s.location.clone(),
            phone: s.phone.clone(),
            email: text(&s.email),
            whatsapp: text(&s.whatsapp),
            facebook: text(&s.social_links.facebook),
            instagram: text(&s.social_links.instagram),
            linkedin: text(&s.social_links.linkedin),
            skills: s.skills.clone(),
        }
    }

    /// Add a trimmed skill. Blank and duplicate entries are ignored; returns whether it was added.
    pub fn add_skill(&mut self, raw: &str) -> bool {
        let skill = raw.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s != skill);
        self.skills.len() != before
    }

    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }

    /// Validate and convert into the store payload. Blank optional fields become `None`.
    pub fn into_input(self) -> Result<UserServiceInput, ServiceError> {
        let input = UserServiceInput {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            skills: self.skills.into_iter().map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect(),
            phone: self.phone.trim().to_string(),
            email: optional(self.email),
            whatsapp: optional(self.whatsapp),
            social_links: SocialLinks {
                facebook: optional(self.facebook),
                instagram: optional(self.instagram),
                linkedin: optional(self.linkedin),
            },
        };
        if let Err(e) = input.validate() {
            debug!(missing = ?input.missing_fields(), skills = input.skills.len(), "form rejected");
            return Err(e.into());
        }
        Ok(input)
    }
}

fn optional(v: String) -> Option<String> {
    let v = v.trim();
    (!v.is_empty()).then(|| v.to_string())
}
