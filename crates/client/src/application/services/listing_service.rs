//! Listing Service - Attribute-filtered category reads
//!
//! The service does the filtering, but its answer is re-checked against the
//! same predicates so the returned subset always honours the request.

use nightreign_domain::{Boss, Character, Creature};
use nightreign_shared::CategoryFilter;

use crate::application::api::Api;
use crate::application::error::ServiceError;
use crate::state::FilteredListing;

pub struct ListingService {
    api: Api,
}

impl ListingService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Query the category's filter endpoint. Blank constraints are left out
    /// of the query string entirely.
    pub async fn filter(&self, filter: &CategoryFilter) -> Result<FilteredListing, ServiceError> {
        let query = filter.query_pairs();
        let category = filter.category();
        tracing::debug!(category = %category, params = ?query, "Filtering category");

        let listing = match filter {
            CategoryFilter::Bosses(f) => {
                let bosses: Vec<Boss> = self.api.get_list(filter.path(), &query, category.key()).await?;
                FilteredListing::Bosses(retain_matching(bosses, |b| f.matches(b), category.key()))
            }
            CategoryFilter::Characters(f) => {
                let characters: Vec<Character> =
                    self.api.get_list(filter.path(), &query, category.key()).await?;
                FilteredListing::Characters(retain_matching(
                    characters,
                    |c| f.matches(c),
                    category.key(),
                ))
            }
            CategoryFilter::Creatures(f) => {
                let creatures: Vec<Creature> =
                    self.api.get_list(filter.path(), &query, category.key()).await?;
                FilteredListing::Creatures(retain_matching(
                    creatures,
                    |c| f.matches(c),
                    category.key(),
                ))
            }
        };

        Ok(listing)
    }
}

fn retain_matching<T>(mut items: Vec<T>, matches: impl Fn(&T) -> bool, key: &str) -> Vec<T> {
    let before = items.len();
    items.retain(|item| matches(item));
    let dropped = before - items.len();
    if dropped > 0 {
        tracing::warn!(category = key, dropped, "Service returned records outside the filter");
    }
    items
}
