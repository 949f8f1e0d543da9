//! Page routes and the parameters passed between pages.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ServiceError;
use crate::listing::FilterCriteria;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Browse,
    Profile,
    Create,
    MyProfile,
    Edit,
}

impl Page {
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Browse => "browse",
            Page::Profile => "profile",
            Page::Create => "create",
            Page::MyProfile => "myprofile",
            Page::Edit => "edit",
        }
    }

    fn requires_id(self) -> bool {
        matches!(self, Page::Profile | Page::Edit)
    }
}

impl FromStr for Page {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Page::Home),
            "browse" => Ok(Page::Browse),
            "profile" => Ok(Page::Profile),
            "create" => Ok(Page::Create),
            "myprofile" => Ok(Page::MyProfile),
            "edit" => Ok(Page::Edit),
            other => Err(ServiceError::Validation(format!("unknown page '{other}'"))),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A navigation target. Profile and edit pages always carry an id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Route {
    page: Page,
    params: NavParams,
}

impl Route {
    pub fn new(page: Page, params: NavParams) -> Result<Self, ServiceError> {
        let has_id = params.id.as_deref().is_some_and(|id| !id.trim().is_empty());
        if page.requires_id() && !has_id {
            return Err(ServiceError::Validation(format!("{} page requires an id", page.as_str())));
        }
        Ok(Self { page, params })
    }

    pub fn home() -> Self {
        Self { page: Page::Home, params: NavParams::default() }
    }

    pub fn create() -> Self {
        Self { page: Page::Create, params: NavParams::default() }
    }

    pub fn my_profile() -> Self {
        Self { page: Page::MyProfile, params: NavParams::default() }
    }

    pub fn profile(id: impl Into<String>) -> Self {
        Self { page: Page::Profile, params: NavParams { id: Some(id.into()), ..NavParams::default() } }
    }

    pub fn edit(id: impl Into<String>) -> Self {
        Self { page: Page::Edit, params: NavParams { id: Some(id.into()), ..NavParams::default() } }
    }

    /// Browse carrying whichever of search/location/category are set.
    pub fn browse(criteria: &FilterCriteria) -> Self {
        let params = NavParams {
            id: None,
            search: criteria.search_needle().and(criteria.search.clone()),
            location: criteria.location_filter().map(String::from),
            category: criteria.category_filter().map(String::from),
        };
        Self { page: Page::Browse, params }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn params(&self) -> &NavParams {
        &self.params
    }

    pub fn id(&self) -> Option<&str> {
        self.params.id.as_deref()
    }

    /// Initial criteria for the browse page; sorting starts at relevance.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.params.search.clone(),
            location: self.params.location.clone(),
            category: self.params.category.clone(),
            ..FilterCriteria::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_names_round_trip() {
        for page in [Page::Home, Page::Browse, Page::Profile, Page::Create, Page::MyProfile, Page::Edit] {
            assert_eq!(page.as_str().parse::<Page>().ok(), Some(page));
        }
        assert!("settings".parse::<Page>().is_err());
    }

    #[test]
    fn profile_and_edit_require_an_id() {
        assert!(Route::new(Page::Profile, NavParams::default()).is_err());
        let blank = NavParams { id: Some(" ".into()), ..NavParams::default() };
        assert!(Route::new(Page::Edit, blank).is_err());
        let ok = Route::new(Page::Profile, NavParams { id: Some("3".into()), ..NavParams::default() });
        assert_eq!(ok.ok().and_then(|r| r.id().map(String::from)), Some("3".to_string()));
        assert!(Route::new(Page::Browse, NavParams::default()).is_ok());
    }

    #[test]
    fn home_search_becomes_browse_params() {
        let c = FilterCriteria::new().search("plumber").location("Galle").category("all");
        let route = Route::browse(&c);
        assert_eq!(route.page(), Page::Browse);
        assert_eq!(route.params().search.as_deref(), Some("plumber"));
        assert_eq!(route.params().location.as_deref(), Some("Galle"));
        assert_eq!(route.params().category, None);
        assert_eq!(route.criteria(), FilterCriteria::new().search("plumber").location("Galle"));
    }

    #[test]
    fn empty_home_search_drops_the_parameter() {
        let route = Route::browse(&FilterCriteria::new().search("  "));
        assert_eq!(route.params(), &NavParams::default());
    }

}
