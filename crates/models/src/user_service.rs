use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::provider::{ServiceProvider, SocialLinks};

pub const MISSING_REQUIRED_FIELDS: &str = "Please fill in all required fields";
pub const MISSING_SKILLS: &str = "Please add at least one skill";

/// A listing authored by the local user. Persisted as one element of the
/// stored collection; social links are stored flat next to the other fields.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserService {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(flatten)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub created_at: String,
}

/// Create/update payload: everything but `id` and `createdAt`, which the store owns.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserServiceInput {
    pub name: String,
    pub category: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(flatten)]
    pub social_links: SocialLinks,
}

impl UserServiceInput {
    /// Names of required text fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("category", &self.category),
            ("description", &self.description),
            ("location", &self.location),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.missing_fields().is_empty() {
            return Err(ModelError::Validation(MISSING_REQUIRED_FIELDS.into()));
        }
        if self.skills.iter().all(|s| s.trim().is_empty()) {
            return Err(ModelError::Validation(MISSING_SKILLS.into()));
        }
        Ok(())
    }
}

impl UserService {
    pub fn from_input(id: String, created_at: String, input: UserServiceInput) -> Self {
        let mut rec = Self {
            id,
            name: String::new(),
            category: String::new(),
            description: String::new(),
            location: String::new(),
            skills: Vec::new(),
            phone: String::new(),
            email: None,
            whatsapp: None,
            social_links: SocialLinks::default(),
            created_at,
        };
        rec.apply(input);
        rec
    }

    /// Replace every field except `id` and `created_at`. Blank skill tags are dropped.
    pub fn apply(&mut self, input: UserServiceInput) {
        self.name = input.name;
        self.category = input.category;
        self.description = input.description;
        self.location = input.location;
        self.skills = input
            .skills
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        self.phone = input.phone;
        self.email = input.email;
        self.whatsapp = input.whatsapp;
        self.social_links = input.social_links;
    }

    pub fn to_input(&self) -> UserServiceInput {
        UserServiceInput {
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            skills: self.skills.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            whatsapp: self.whatsapp.clone(),
            social_links: self.social_links.clone(),
        }
    }

    /// Browsable view of this listing. User listings are never rated or featured.
    pub fn to_provider(&self) -> ServiceProvider {
        ServiceProvider {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            location: self.location.clone(),
            skills: self.skills.clone(),
            rating: None,
            featured: false,
            phone: self.phone.clone(),
            email: self.email.clone(),
            whatsapp: self.whatsapp.clone(),
            social_links: (!self.social_links.is_empty()).then(|| self.social_links.clone()),
            created_at: self.created_at.clone(),
        }
    }
}
