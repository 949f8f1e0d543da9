//! Display-ready views of listings: cards, profile details and page payloads.

use serde::Serialize;

use models::{Category, Glyph, ReferenceData, ServiceProvider, UserService};

use crate::form::ServiceForm;
use crate::listing::{FilterCriteria, SearchOutcome};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryTile {
    pub id: String,
    pub name: String,
    pub glyph: Glyph,
}

impl From<&Category> for CategoryTile {
    fn from(c: &Category) -> Self {
        Self { id: c.id.clone(), name: c.name.clone(), glyph: c.glyph() }
    }
}

/// Summary card shown in grids. Skills are truncated to a preview with an overflow count.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListingCard {
    pub id: String,
    pub name: String,
    pub category_name: Option<String>,
    pub glyph: Glyph,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub description: String,
    pub skills: Vec<String>,
    pub more_skills: usize,
    pub location: String,
}

impl ListingCard {
    pub fn new(p: &ServiceProvider, reference: &ReferenceData, skill_preview: usize) -> Self {
        let (skills, more_skills) = skill_preview_of(&p.skills, skill_preview);
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            category_name: reference.category(&p.category).map(|c| c.name.clone()),
            glyph: reference.category_glyph(&p.category),
            rating: p.rating,
            description: p.description.clone(),
            skills,
            more_skills,
            location: p.location.clone(),
        }
    }
}

/// First `limit` skills plus how many were left out.
pub fn skill_preview_of(skills: &[String], limit: usize) -> (Vec<String>, usize) {
    let shown: Vec<String> = skills.iter().take(limit).cloned().collect();
    let hidden = skills.len().saturating_sub(shown.len());
    (shown, hidden)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactLinks {
    pub call: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

impl ContactLinks {
    pub fn for_provider(p: &ServiceProvider) -> Self {
        Self {
            call: format!("tel:{}", p.phone.split_whitespace().collect::<String>()),
            email: non_blank(p.email.as_deref()).map(|e| format!("mailto:{e}")),
            whatsapp: non_blank(p.whatsapp.as_deref()).and_then(whatsapp_link),
        }
    }
}

/// `https://wa.me/<digits>`; `None` when the number has no digits at all.
pub fn whatsapp_link(number: &str) -> Option<String> {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    (!digits.is_empty()).then(|| format!("https://wa.me/{digits}"))
}

fn non_blank(v: Option<&str>) -> Option<&str> {
    v.map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub network: &'static str,
    pub url: String,
}

/// Month and year a listing was created, e.g. "January 2024".
pub fn member_since(created_at: &str) -> Option<String> {
    models::provider::parse_timestamp(created_at).map(|ts| ts.format("%B %Y").to_string())
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileView {
    pub provider: ServiceProvider,
    pub category_name: Option<String>,
    pub glyph: Glyph,
    pub contact: ContactLinks,
    pub social: Vec<SocialLink>,
    pub member_since: Option<String>,
    pub service_area: String,
}

impl ProfileView {
    pub fn new(provider: ServiceProvider, reference: &ReferenceData) -> Self {
        let social = provider
            .social_links
            .as_ref()
            .map(|links| {
                links
                    .entries()
                    .into_iter()
                    .map(|(network, url)| SocialLink { network, url: url.to_string() })
                    .collect()
            })
            .unwrap_or_default();
        Self {
            category_name: reference.category(&provider.category).map(|c| c.name.clone()),
            glyph: reference.category_glyph(&provider.category),
            contact: ContactLinks::for_provider(&provider),
            member_since: member_since(&provider.created_at),
            service_area: format!("This service provider operates in {} district.", provider.location),
            social,
            provider,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HomeView {
    pub categories: Vec<CategoryTile>,
    pub featured: Vec<ListingCard>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BrowseView {
    pub criteria: FilterCriteria,
    pub sort_label: &'static str,
    pub active_filters: usize,
    pub result_label: String,
    pub outcome: SearchOutcome,
    pub cards: Vec<ListingCard>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MyServicesView {
    pub total: usize,
    pub distinct_categories: usize,
    pub services: Vec<UserService>,
    pub cards: Vec<ListingCard>,
}

/// Form page payload, with the option lists the form selects from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing: Option<String>,
    pub form: ServiceForm,
    /// Characters typed into the description so far.
    pub description_len: usize,
    pub categories: Vec<CategoryTile>,
    pub districts: Vec<String>,
}

/// What the dispatcher renders for a route.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "page", content = "view", rename_all = "snake_case")]
pub enum PageView {
    Home(HomeView),
    Browse(BrowseView),
    Profile(ProfileView),
    ProfileNotFound { id: String },
    Create(FormView),
    MyProfile(MyServicesView),
    Edit(FormView),
}
