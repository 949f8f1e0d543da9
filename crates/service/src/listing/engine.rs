use std::cmp::Reverse;

use models::ServiceProvider;
use serde::Serialize;

use crate::listing::criteria::{FilterCriteria, SortBy};

/// Select and order the providers matching `criteria`. Pure; the input is untouched.
pub fn filter(all: &[ServiceProvider], criteria: &FilterCriteria) -> Vec<ServiceProvider> {
    let needle = criteria.search_needle();
    let location = criteria.location_filter();
    let category = criteria.category_filter();

    let mut matched: Vec<ServiceProvider> = all
        .iter()
        .filter(|p| needle.as_deref().map_or(true, |n| matches_search(p, n)))
        .filter(|p| location.map_or(true, |l| p.location == l))
        .filter(|p| category.map_or(true, |c| p.category == c))
        .cloned()
        .collect();

    sort_providers(&mut matched, criteria.sort);
    matched
}

/// `needle` must already be lower-cased.
pub fn matches_search(p: &ServiceProvider, needle: &str) -> bool {
    p.name.to_lowercase().contains(needle)
        || p.description.to_lowercase().contains(needle)
        || p.skills.iter().any(|s| s.to_lowercase().contains(needle))
}

/// Stable in every mode: equal keys keep their relative order.
pub fn sort_providers(providers: &mut [ServiceProvider], sort: SortBy) {
    match sort {
        SortBy::Relevance => {}
        SortBy::Rating => {
            providers.sort_by(|a, b| b.rating_or_zero().total_cmp(&a.rating_or_zero()));
        }
        SortBy::Newest => {
            // None (unparsable) orders below every timestamp, so it lands last.
            providers.sort_by_cached_key(|p| Reverse(p.created_at_parsed()));
        }
    }
}

/// Result of a browse: distinguishes "nothing searched yet" from "searched, nothing matched".
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", content = "providers", rename_all = "snake_case")]
pub enum SearchOutcome {
    NotSearched,
    Empty,
    Found(Vec<ServiceProvider>),
}

impl SearchOutcome {
    pub fn run(all: &[ServiceProvider], criteria: &FilterCriteria) -> Self {
        Self::from_results(filter(all, criteria))
    }

    pub fn from_results(results: Vec<ServiceProvider>) -> Self {
        if results.is_empty() {
            SearchOutcome::Empty
        } else {
            SearchOutcome::Found(results)
        }
    }

    pub fn providers(&self) -> &[ServiceProvider] {
        match self {
            SearchOutcome::Found(v) => v,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.providers().len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers().is_empty()
    }
}

/// "1 result found" / "N results found".
pub fn result_label(count: usize) -> String {
    let noun = if count == 1 { "result" } else { "results" };
    format!("{count} {noun} found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(id: &str, name: &str, rating: Option<f32>, created_at: &str) -> ServiceProvider {
        ServiceProvider {
            id: id.into(),
            name: name.into(),
            description: format!("{name} description"),
            category: "plumbing".into(),
            location: "Colombo".into(),
            skills: vec!["General".into()],
            rating,
            featured: false,
            phone: "1".into(),
            email: None,
            whatsapp: None,
            social_links: None,
            created_at: created_at.into(),
        }
    }

    fn ids(list: &[ServiceProvider]) -> Vec<&str> {
        list.iter().map(|p| p.id.as_str()).collect()
    }

    fn sample() -> Vec<ServiceProvider> {
        let mut a = provider("a", "Alpha Plumbing", Some(4.0), "2024-01-01T00:00:00Z");
        a.skills = vec!["Pipe Repair".into(), "Leak Detection".into()];
        let mut b = provider("b", "Bravo Sparks", Some(4.9), "2024-06-01T00:00:00Z");
        b.category = "electrical".into();
        b.location = "Kandy".into();
        b.skills = vec!["Wiring".into()];
        let mut c = provider("c", "Charlie Fixers", None, "not a date");
        c.description = "We fix PIPES and taps".into();
        c.location = "Kandy".into();
        let d = provider("d", "Delta Services", Some(4.0), "2024-03-01");
        vec![a, b, c, d]
    }

    #[test]
    fn empty_criteria_returns_input_in_order() {
        let all = sample();
        assert_eq!(filter(&all, &FilterCriteria::default()), all);
    }

    #[test]
    fn search_matches_name_description_and_skills_case_insensitively() {
        let all = sample();
        assert_eq!(ids(&filter(&all, &FilterCriteria::new().search("pipe"))), vec!["a", "c"]);
        assert_eq!(ids(&filter(&all, &FilterCriteria::new().search("WIRING"))), vec!["b"]);
        assert_eq!(ids(&filter(&all, &FilterCriteria::new().search("delta"))), vec!["d"]);
        assert!(filter(&all, &FilterCriteria::new().search("gardening")).is_empty());
    }

    #[test]
    fn search_ignores_surrounding_whitespace() {
        let all = sample();
        assert_eq!(ids(&filter(&all, &FilterCriteria::new().search("  charlie fixers  "))), vec!["c"]);
        assert_eq!(ids(&filter(&all, &FilterCriteria::new().search(" delta\t"))), vec!["d"]);
    }

    #[test]
    fn filters_combine_with_and() {
        let all = sample();
        let c = FilterCriteria::new().location("Kandy").category("plumbing");
        assert_eq!(ids(&filter(&all, &c)), vec!["c"]);
        let c = FilterCriteria::new().location("Kandy").search("alpha");
        assert!(filter(&all, &c).is_empty());
    }

    #[test]
    fn all_sentinel_applies_no_filter() {
        let all = sample();
        let c = FilterCriteria::new().location("all").category("all");
        assert_eq!(filter(&all, &c), all);
    }

    #[test]
    fn rating_sort_is_descending_and_stable() {
        let all = sample();
        let sorted = filter(&all, &FilterCriteria::new().sort(SortBy::Rating));
        // a and d tie at 4.0 and keep input order; unrated c counts as 0.
        assert_eq!(ids(&sorted), vec!["b", "a", "d", "c"]);
        assert!(sorted.windows(2).all(|w| w[0].rating_or_zero() >= w[1].rating_or_zero()));
    }

    #[test]
    fn newest_sort_puts_unparsable_dates_last() {
        let all = sample();
        let sorted = filter(&all, &FilterCriteria::new().sort(SortBy::Newest));
        assert_eq!(ids(&sorted), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn newest_sort_is_stable_for_equal_timestamps() {
        let all = vec![
            provider("x", "X", None, "2024-01-01T00:00:00Z"),
            provider("y", "Y", None, "2024-01-01T00:00:00+00:00"),
            provider("z", "Z", None, "2024-01-01"),
        ];
        let sorted = filter(&all, &FilterCriteria::new().sort(SortBy::Newest));
        assert_eq!(ids(&sorted), vec!["x", "y", "z"]);
    }

    #[test]
    fn outcome_distinguishes_empty_from_not_searched() {
        let all = sample();
        assert_eq!(SearchOutcome::run(&all, &FilterCriteria::new().search("zzz")), SearchOutcome::Empty);
        let found = SearchOutcome::run(&all, &FilterCriteria::new().search("alpha"));
        assert_eq!(found.len(), 1);
        assert!(SearchOutcome::NotSearched.is_empty());
        assert_ne!(SearchOutcome::NotSearched, SearchOutcome::Empty);
    }

    #[test]
    fn outcome_serializes_with_state_tag() {
        let v = serde_json::to_value(SearchOutcome::Empty).expect("serialize");
        assert_eq!(v["state"], "empty");
    }

    #[test]
    fn result_label_pluralizes() {
        assert_eq!(result_label(0), "0 results found");
        assert_eq!(result_label(1), "1 result found");
        assert_eq!(result_label(12), "12 results found");
    }
}
