//! The directory façade: seed providers plus the user's own listings, browsed
//! through the listing engine and mutated only through the [`ListingStore`].

use std::sync::Arc;
use tracing::{debug, info};

use models::{ReferenceData, ServiceProvider, UserService, REFERENCE};

use crate::errors::ServiceError;
use crate::form::ServiceForm;
use crate::listing::{filter, result_label, FilterCriteria, SearchOutcome};
use crate::navigation::{Page, Route};
use crate::presentation::{
    BrowseView, CategoryTile, FormView, HomeView, ListingCard, MyServicesView, PageView, ProfileView,
};
use crate::profile::ListingStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectorySettings {
    pub featured_limit: usize,
    pub skill_preview: usize,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self { featured_limit: 4, skill_preview: 3 }
    }
}

#[derive(Clone)]
pub struct Directory {
    reference: Arc<ReferenceData>,
    listings: Arc<dyn ListingStore>,
    settings: DirectorySettings,
}

impl Directory {
    pub fn new(reference: Arc<ReferenceData>, listings: Arc<dyn ListingStore>, settings: DirectorySettings) -> Self {
        Self { reference, listings, settings }
    }

    /// Directory over the built-in reference data.
    pub fn seeded(listings: Arc<dyn ListingStore>, settings: DirectorySettings) -> Self {
        Self::new(Arc::new(REFERENCE.clone()), listings, settings)
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn listings(&self) -> &Arc<dyn ListingStore> {
        &self.listings
    }

    pub fn category_tiles(&self) -> Vec<CategoryTile> {
        self.reference.categories().iter().map(CategoryTile::from).collect()
    }

    fn card(&self, p: &ServiceProvider) -> ListingCard {
        ListingCard::new(p, &self.reference, self.settings.skill_preview)
    }

    /// Featured seed providers, in seed order, capped at the configured limit.
    pub fn featured(&self) -> Vec<ServiceProvider> {
        self.reference
            .providers()
            .iter()
            .filter(|p| p.featured)
            .take(self.settings.featured_limit)
            .cloned()
            .collect()
    }

    /// Seed providers followed by the user's listings in storage order.
    pub async fn all_providers(&self) -> Vec<ServiceProvider> {
        let mut all = self.reference.providers().to_vec();
        all.extend(self.listings.list().await.iter().map(UserService::to_provider));
        all
    }

    pub async fn search(&self, criteria: &FilterCriteria) -> Vec<ServiceProvider> {
        filter(&self.all_providers().await, criteria)
    }

    pub async fn find_provider(&self, id: &str) -> Option<ServiceProvider> {
        if let Some(p) = self.reference.provider(id) {
            return Some(p.clone());
        }
        self.listings.get(id).await.map(|s| s.to_provider())
    }

    pub fn home(&self) -> HomeView {
        HomeView {
            categories: self.category_tiles(),
            featured: self.featured().iter().map(|p| self.card(p)).collect(),
        }
    }

    pub async fn browse(&self, criteria: FilterCriteria) -> BrowseView {
        let outcome = SearchOutcome::from_results(self.search(&criteria).await);
        debug!(
            search = ?criteria.search,
            location = ?criteria.location,
            category = ?criteria.category,
            sort = criteria.sort.as_str(),
            results = outcome.len(),
            "browse"
        );
        BrowseView {
            sort_label: criteria.sort.label(),
            active_filters: criteria.active_filter_count(),
            result_label: result_label(outcome.len()),
            cards: outcome.providers().iter().map(|p| self.card(p)).collect(),
            outcome,
            criteria,
        }
    }

    pub async fn profile(&self, id: &str) -> Option<ProfileView> {
        self.find_provider(id).await.map(|p| ProfileView::new(p, &self.reference))
    }

    pub async fn my_services(&self) -> MyServicesView {
        let services = self.listings.list().await;
        let mut categories: Vec<&str> = services.iter().map(|s| s.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        MyServicesView {
            total: services.len(),
            distinct_categories: categories.len(),
            cards: services.iter().map(|s| self.card(&s.to_provider())).collect(),
            services,
        }
    }

    fn form_view(&self, editing: Option<String>, form: ServiceForm) -> FormView {
        FormView {
            editing,
            description_len: form.description_len(),
            form,
            categories: self.category_tiles(),
            districts: self.reference.districts().to_vec(),
        }
    }

    /// Form prefilled from the user's listing `id`.
    pub async fn edit_form(&self, id: &str) -> Result<ServiceForm, ServiceError> {
        self.listings
            .get(id)
            .await
            .map(|s| ServiceForm::from_service(&s))
            .ok_or_else(|| ServiceError::not_found("service", id))
    }

    pub async fn submit_create(&self, form: ServiceForm) -> Result<UserService, ServiceError> {
        let input = form.into_input()?;
        self.listings.create(input).await
    }

    pub async fn submit_update(&self, id: &str, form: ServiceForm) -> Result<UserService, ServiceError> {
        let input = form.into_input()?;
        self.listings.update(id, input).await
    }

    pub async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        self.listings.delete(id).await
    }

    /// Navigation dispatcher: produce the view for `route`.
    pub async fn render(&self, route: &Route) -> Result<PageView, ServiceError> {
        info!(page = route.page().as_str(), id = ?route.id(), "render");
        let view = match route.page() {
            Page::Home => PageView::Home(self.home()),
            Page::Browse => PageView::Browse(self.browse(route.criteria()).await),
            Page::Profile => {
                let id = route.id().unwrap_or_default();
                match self.profile(id).await {
                    Some(view) => PageView::Profile(view),
                    None => PageView::ProfileNotFound { id: id.to_string() },
                }
            }
            Page::Create => PageView::Create(self.form_view(None, ServiceForm::default())),
            Page::MyProfile => PageView::MyProfile(self.my_services().await),
            Page::Edit => {
                let id = route.id().unwrap_or_default();
                let form = self.edit_form(id).await?;
                PageView::Edit(self.form_view(Some(id.to_string()), form))
            }
        };
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::SortBy;
    use crate::profile::ProfileStore;
    use crate::storage::MemoryStore;
    use crate::test_support::acme_input;

    fn directory() -> Directory {
        let store = ProfileStore::new(MemoryStore::new(), "myServices");
        Directory::seeded(store, DirectorySettings::default())
    }

    fn acme_form() -> ServiceForm {
        let input = acme_input();
        let mut form = ServiceForm {
            name: input.name,
            category: input.category,
            description: input.description,
            location: input.location,
            phone: input.phone,
            ..ServiceForm::default()
        };
        for s in &input.skills {
            form.add_skill(s);
        }
        form
    }

    #[test]
    fn featured_is_capped_and_only_featured() {
        let d = directory();
        let featured = d.featured();
        assert_eq!(featured.len(), 4);
        assert!(featured.iter().all(|p| p.featured));
        let narrow = Directory::seeded(
            ProfileStore::new(MemoryStore::new(), "k"),
            DirectorySettings { featured_limit: 2, skill_preview: 3 },
        );
        assert_eq!(narrow.featured().len(), 2);
    }

    #[test]
    fn home_lists_every_category() {
        let d = directory();
        let home = d.home();
        assert_eq!(home.categories.len(), d.reference().categories().len());
        assert_eq!(home.featured.len(), 4);
    }

    #[tokio::test]
    async fn browse_includes_user_listings_after_seeds() -> Result<(), anyhow::Error> {
        let d = directory();
        let created = d.submit_create(acme_form()).await?;

        let all = d.all_providers().await;
        assert_eq!(all.len(), d.reference().providers().len() + 1);
        assert_eq!(all.last().map(|p| p.id.as_str()), Some(created.id.as_str()));

        let view = d.browse(FilterCriteria::new().search("acme")).await;
        assert_eq!(view.result_label, "1 result found");
        assert_eq!(view.cards[0].id, created.id);
        Ok(())
    }

    #[tokio::test]
    async fn browse_by_category_and_rating() {
        let d = directory();
        let view = d.browse(FilterCriteria::new().category("plumbing").sort(SortBy::Rating)).await;
        let ids: Vec<&str> = view.outcome.providers().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "11"]);
        assert_eq!(view.active_filters, 1);
        assert_eq!(view.sort_label, "Highest Rated");
    }

    #[tokio::test]
    async fn browse_with_no_match_is_empty_outcome() {
        let d = directory();
        let view = d.browse(FilterCriteria::new().search("underwater welding")).await;
        assert_eq!(view.outcome, SearchOutcome::Empty);
        assert_eq!(view.result_label, "0 results found");
        assert!(view.cards.is_empty());
    }

    #[tokio::test]
    async fn profile_finds_seed_and_user_listings() -> Result<(), anyhow::Error> {
        let d = directory();
        assert_eq!(d.profile("1").await.map(|v| v.provider.name), Some("Perera Plumbing Services".into()));
        let created = d.submit_create(acme_form()).await?;
        let view = d.profile(&created.id).await.expect("user listing profile");
        assert_eq!(view.provider.rating, None);
        assert!(d.profile("missing").await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn my_services_counts_distinct_categories() -> Result<(), anyhow::Error> {
        let d = directory();
        d.submit_create(acme_form()).await?;
        d.submit_create(acme_form()).await?;
        let mut other = acme_form();
        other.category = "cleaning".into();
        d.submit_create(other).await?;

        let mine = d.my_services().await;
        assert_eq!(mine.total, 3);
        assert_eq!(mine.distinct_categories, 2);
        assert_eq!(mine.cards.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn edit_flow_preserves_identity() -> Result<(), anyhow::Error> {
        let d = directory();
        let created = d.submit_create(acme_form()).await?;

        let mut form = d.edit_form(&created.id).await?;
        form.name = "Acme Repairs Ltd".into();
        let updated = d.submit_update(&created.id, form).await?;
        assert_eq!(updated.created_at, created.created_at);

        assert!(matches!(d.edit_form("nope").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(d.submit_update("nope", acme_form()).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn render_dispatches_each_page() -> Result<(), anyhow::Error> {
        let d = directory();
        assert!(matches!(d.render(&Route::home()).await?, PageView::Home(_)));
        assert!(matches!(d.render(&Route::create()).await?, PageView::Create(_)));
        assert!(matches!(d.render(&Route::my_profile()).await?, PageView::MyProfile(_)));
        assert!(matches!(
            d.render(&Route::profile("nope")).await?,
            PageView::ProfileNotFound { .. }
        ));

        let created = d.submit_create(acme_form()).await?;
        match d.render(&Route::edit(&created.id)).await? {
            PageView::Edit(view) => {
                assert_eq!(view.editing.as_deref(), Some(created.id.as_str()));
                assert_eq!(view.form.name, "Acme Repairs");
                assert_eq!(view.description_len, "Fix pipes".len());
                assert_eq!(view.districts.len(), 25);
            }
            other => panic!("unexpected view {other:?}"),
        }
        assert!(d.render(&Route::edit("nope")).await.is_err());

        let browse = Route::browse(&FilterCriteria::new().location("Kandy"));
        match d.render(&browse).await? {
            PageView::Browse(view) => assert!(view.cards.iter().all(|c| c.location == "Kandy")),
            other => panic!("unexpected view {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_from_browse() -> Result<(), anyhow::Error> {
        let d = directory();
        let created = d.submit_create(acme_form()).await?;
        assert!(d.delete(&created.id).await?);
        assert!(d.find_provider(&created.id).await.is_none());
        assert!(!d.delete(&created.id).await?);
        Ok(())
    }
}
