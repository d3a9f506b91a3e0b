//! Guide state - the client-side owner of everything the views render.
//!
//! Holds the catalog, the active search, filter form values, the custom build
//! draft, the open detail selection, the loading signal and one error slot
//! per operation. Every mutation goes through an operation here; reads hand
//! out snapshots or read guards.

use std::collections::{BTreeMap, HashMap};

use tokio::sync::{RwLock, RwLockReadGuard};

use nightreign_domain::{Build, Category, Collection, CustomBuildDraft, Selection};
use nightreign_shared::{CategoryFilter, FilterValues, SearchResult};

use crate::application::services::{
    CatalogService, CustomBuildService, DetailService, ListingService, SearchService,
};
use crate::application::{Api, ServiceError};

use super::catalog::Catalog;
use super::detail::{BossDetail, DetailState, DetailView};
use super::loading::LoadingIndicator;
use super::sequence::{RequestSequence, Sequenced};

/// Operations that surface their own error to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    Load,
    Filter(Category),
    Search,
    Recommendations,
    CreateBuild,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Load => write!(f, "load"),
            Operation::Filter(category) => write!(f, "filter {}", category),
            Operation::Search => write!(f, "search"),
            Operation::Recommendations => write!(f, "recommendations"),
            Operation::CreateBuild => write!(f, "create build"),
        }
    }
}

struct Services {
    catalog: CatalogService,
    listing: ListingService,
    search: SearchService,
    custom_builds: CustomBuildService,
    details: DetailService,
}

pub struct GuideState {
    services: Services,
    sequence: RequestSequence,
    loading: LoadingIndicator,
    catalog: RwLock<Catalog>,
    search: RwLock<Sequenced<Option<SearchResult>>>,
    detail: RwLock<DetailState>,
    filters: RwLock<HashMap<Category, FilterValues>>,
    draft: RwLock<CustomBuildDraft>,
    errors: RwLock<BTreeMap<Operation, ServiceError>>,
}

impl GuideState {
    pub fn new(api: Api) -> Self {
        Self {
            services: Services {
                catalog: CatalogService::new(api.clone()),
                listing: ListingService::new(api.clone()),
                search: SearchService::new(api.clone()),
                custom_builds: CustomBuildService::new(api.clone()),
                details: DetailService::new(api),
            },
            sequence: RequestSequence::new(),
            loading: LoadingIndicator::new(),
            catalog: RwLock::new(Catalog::new()),
            search: RwLock::new(Sequenced::new(None)),
            detail: RwLock::new(DetailState::default()),
            filters: RwLock::new(HashMap::new()),
            draft: RwLock::new(CustomBuildDraft::default()),
            errors: RwLock::new(BTreeMap::new()),
        }
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Reload every collection. On failure the previous catalog is kept.
    pub async fn refresh(&self) -> Result<(), ServiceError> {
        let ticket = self.sequence.issue();
        let result = {
            let _loading = self.loading.begin();
            self.services.catalog.load_all().await
        };

        match result {
            Ok(data) => {
                let mut catalog = self.catalog.write().await;
                let replaced = catalog.apply_load(ticket, data);
                if replaced < Collection::ALL.len() {
                    tracing::debug!(replaced, "Newer reads kept some catalog slices");
                }
                for violation in catalog.invariant_violations() {
                    tracing::warn!(%violation, "Catalog data invariant violated");
                }
                for dangling in catalog.dangling_references() {
                    tracing::warn!(
                        category = %dangling.category,
                        entity = %dangling.entity,
                        character = %dangling.missing_character,
                        "Reference to unknown character"
                    );
                }
                drop(catalog);
                self.clear_error(Operation::Load).await;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load catalog");
                self.record_error(Operation::Load, e.clone()).await;
                Err(e)
            }
        }
    }

    pub async fn catalog(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().await
    }

    pub fn loading(&self) -> &LoadingIndicator {
        &self.loading
    }

    // =========================================================================
    // Filters
    // =========================================================================

    pub async fn set_filter(
        &self,
        category: Category,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.filters
            .write()
            .await
            .entry(category)
            .or_default()
            .set(key, value);
    }

    pub async fn filter_values(&self, category: Category) -> FilterValues {
        self.filters
            .read()
            .await
            .get(&category)
            .cloned()
            .unwrap_or_default()
    }

    /// Re-query `category` with its current filter values and replace its
    /// slice. Categories without filters just report the full collection.
    ///
    /// Returns the number of records now listed for the category.
    pub async fn apply_filters(&self, category: Category) -> Result<usize, ServiceError> {
        let values = self.filter_values(category).await;
        let Some(filter) = CategoryFilter::for_category(category, &values) else {
            let ignored: Vec<&str> = values.iter().map(|(k, _)| k).collect();
            if !ignored.is_empty() {
                tracing::debug!(category = %category, ?ignored, "Category has no filters");
            }
            return Ok(self.catalog.read().await.len(category));
        };

        let ticket = self.sequence.issue();
        match self.services.listing.filter(&filter).await {
            Ok(listing) => {
                let mut catalog = self.catalog.write().await;
                if !catalog.apply_filtered(ticket, listing) {
                    tracing::debug!(category = %category, "Discarded stale filter response");
                }
                let len = catalog.len(category);
                drop(catalog);
                self.clear_error(Operation::Filter(category)).await;
                Ok(len)
            }
            Err(e) => {
                tracing::error!(category = %category, error = %e, "Filter request failed");
                self.record_error(Operation::Filter(category), e.clone()).await;
                Err(e)
            }
        }
    }

    /// Blank every filter key of every category, then reload everything.
    pub async fn clear_filters(&self) -> Result<(), ServiceError> {
        for values in self.filters.write().await.values_mut() {
            values.clear();
        }
        self.refresh().await
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Run a search and make it the active one, unless a later search has
    /// already landed. A blank query clears the active search.
    ///
    /// Returns the active search afterwards, which is the later one when this
    /// response arrived stale. A stale response never touches the search
    /// error slot.
    pub async fn search(&self, query: &str) -> Result<Option<SearchResult>, ServiceError> {
        let ticket = self.sequence.issue();
        match self.services.search.search(query).await {
            Ok(result) => {
                let mut search = self.search.write().await;
                if !search.apply(ticket, result) {
                    tracing::debug!(query, ticket = ticket.value(), "Discarded stale search response");
                    return Ok(search.get().clone());
                }
                let active = search.get().clone();
                drop(search);
                self.clear_error(Operation::Search).await;
                Ok(active)
            }
            Err(e) => {
                if self.search.read().await.applied() > ticket {
                    tracing::debug!(query, error = %e, "Stale search failed after a newer one landed");
                    return Err(e);
                }
                tracing::error!(query, error = %e, "Search failed");
                self.record_error(Operation::Search, e.clone()).await;
                Err(e)
            }
        }
    }

    /// The active search, if any.
    pub async fn search_result(&self) -> Option<SearchResult> {
        self.search.read().await.get().clone()
    }

    // =========================================================================
    // Detail selection
    // =========================================================================

    /// Open `selection` in the detail view, replacing whatever was open.
    ///
    /// Selecting a boss also fetches its recommendations; they are attached
    /// only if that same selection is still open when they arrive.
    pub async fn select(&self, selection: Selection) -> Result<(), ServiceError> {
        let ticket = self.sequence.issue();
        *self.detail.write().await = DetailState {
            selection: selection.clone(),
            opened_by: ticket,
            recommendations: None,
        };

        let Some(boss_id) = selection.boss_id() else {
            return Ok(());
        };

        match self.services.details.boss_recommendations(boss_id).await {
            Ok(recommendations) => {
                let mut detail = self.detail.write().await;
                if detail.opened_by == ticket {
                    detail.recommendations = Some(recommendations);
                } else {
                    tracing::debug!(boss_id = %boss_id, "Selection changed, dropping recommendations");
                }
                drop(detail);
                self.clear_error(Operation::Recommendations).await;
                Ok(())
            }
            Err(e) => {
                tracing::error!(boss_id = %boss_id, error = %e, "Failed to load boss recommendations");
                self.record_error(Operation::Recommendations, e.clone()).await;
                Err(e)
            }
        }
    }

    pub async fn selection(&self) -> Selection {
        self.detail.read().await.selection.clone()
    }

    pub async fn close_detail(&self) {
        *self.detail.write().await = DetailState::default();
    }

    /// Resolve the selection into a view model.
    ///
    /// Looks in the catalog first; bosses, characters and builds that are not
    /// cached are fetched by id.
    pub async fn detail_view(&self) -> Result<Option<DetailView>, ServiceError> {
        let detail = self.detail.read().await.clone();
        let catalog = self.catalog.read().await;

        let cached = match &detail.selection {
            Selection::None => return Ok(None),
            Selection::Boss(id) => catalog.find_boss(id.as_str()).cloned().map(|boss| {
                DetailView::Boss(BossDetail {
                    boss,
                    recommendations: detail.recommendations.clone(),
                })
            }),
            Selection::Character(id) => catalog
                .find_character(id.as_str())
                .cloned()
                .map(DetailView::Character),
            Selection::Build(id) => catalog.find_build(id.as_str()).cloned().map(DetailView::Build),
            Selection::Achievement(id) => catalog
                .achievements()
                .iter()
                .find(|a| a.id == *id)
                .cloned()
                .map(DetailView::Achievement),
            Selection::Walkthrough(id) => catalog
                .walkthroughs()
                .iter()
                .find(|w| w.id == *id)
                .cloned()
                .map(DetailView::Walkthrough),
            Selection::Creature(id) => catalog
                .creatures()
                .iter()
                .find(|c| c.id == *id)
                .cloned()
                .map(DetailView::Creature),
            Selection::Secret(id) => catalog
                .secrets()
                .iter()
                .find(|s| s.id == *id)
                .cloned()
                .map(DetailView::Secret),
            Selection::WeaponSkill(id) => catalog
                .weapon_skills()
                .iter()
                .find(|s| s.id == *id)
                .cloned()
                .map(DetailView::WeaponSkill),
            Selection::WeaponPassive(id) => catalog
                .weapon_passives()
                .iter()
                .find(|p| p.id == *id)
                .cloned()
                .map(DetailView::WeaponPassive),
        };
        drop(catalog);

        if cached.is_some() {
            return Ok(cached);
        }

        let details = &self.services.details;
        let fetched = match &detail.selection {
            Selection::Boss(id) => details.boss(id).await?.map(|boss| {
                DetailView::Boss(BossDetail {
                    boss,
                    recommendations: detail.recommendations.clone(),
                })
            }),
            Selection::Character(id) => details.character(id).await?.map(DetailView::Character),
            Selection::Build(id) => details.build(id).await?.map(DetailView::Build),
            _ => None,
        };
        Ok(fetched)
    }

    // =========================================================================
    // Custom build draft
    // =========================================================================

    /// Set one draft field by wire name. Returns `false` for unknown fields.
    pub async fn update_draft(&self, field: &str, value: impl Into<String>) -> bool {
        self.draft.write().await.set_field(field, value)
    }

    pub async fn set_draft(&self, draft: CustomBuildDraft) {
        *self.draft.write().await = draft;
    }

    pub async fn draft(&self) -> CustomBuildDraft {
        self.draft.read().await.clone()
    }

    /// Submit the draft. On success the draft is cleared and the catalog
    /// reloaded so the new build shows up; on failure the draft is kept.
    ///
    /// Edits made while the request was in flight survive: the draft is only
    /// cleared if it still equals what was sent.
    pub async fn submit_custom_build(&self) -> Result<Build, ServiceError> {
        let submitted = self.draft().await;
        match self.services.custom_builds.create(&submitted).await {
            Ok(build) => {
                let mut draft = self.draft.write().await;
                if *draft == submitted {
                    draft.clear();
                } else {
                    tracing::debug!(build_id = %build.id, "Draft edited during submit, keeping edits");
                }
                drop(draft);
                self.clear_error(Operation::CreateBuild).await;
                if let Err(e) = self.refresh().await {
                    tracing::warn!(error = %e, "Build created but catalog refresh failed");
                }
                Ok(build)
            }
            Err(e) => {
                if e.is_validation() {
                    tracing::warn!(error = %e, "Custom build draft incomplete");
                } else {
                    tracing::error!(error = %e, "Failed to create custom build");
                }
                self.record_error(Operation::CreateBuild, e.clone()).await;
                Err(e)
            }
        }
    }

    // =========================================================================
    // Errors
    // =========================================================================

    pub async fn error(&self, operation: Operation) -> Option<ServiceError> {
        self.errors.read().await.get(&operation).cloned()
    }

    pub async fn errors(&self) -> Vec<(Operation, ServiceError)> {
        self.errors
            .read()
            .await
            .iter()
            .map(|(op, e)| (*op, e.clone()))
            .collect()
    }

    async fn record_error(&self, operation: Operation, error: ServiceError) {
        self.errors.write().await.insert(operation, error);
    }

    async fn clear_error(&self, operation: Operation) {
        self.errors.write().await.remove(&operation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::ApiError;
    use crate::test_fixtures::{self, GatedApiPort};
    use nightreign_domain::{BossId, CharacterId};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::task::Poll;

    fn fixture_responder(path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        if path == "/api/search" {
            let q = query.first().map(|(_, v)| v.as_str()).unwrap_or_default();
            return Ok(test_fixtures::search_payload(q));
        }
        if path.starts_with("/api/boss-recommendations/") {
            return Ok(json!({
                "recommended_characters": [
                    { "id": "char-wylder", "name": "Wylder", "playstyle": "Versatile" }
                ],
                "recommended_builds": []
            }));
        }
        if path == "/api/filter-bosses" {
            return Ok(json!({ "bosses": test_fixtures::bosses() }));
        }
        Ok(test_fixtures::collection_payload(path))
    }

    fn state_with(port: Arc<GatedApiPort>) -> GuideState {
        GuideState::new(Api::new(port))
    }

    #[tokio::test]
    async fn refresh_populates_catalog() {
        let port = Arc::new(GatedApiPort::new(fixture_responder));
        let state = state_with(port.clone());

        state.refresh().await.unwrap();

        let catalog = state.catalog().await;
        assert_eq!(catalog.bosses().len(), test_fixtures::bosses().len());
        assert_eq!(port.calls(), 10);
        assert!(!state.loading().is_loading());
        assert_eq!(state.loading().completed(), 1);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_catalog() {
        let port = Arc::new(GatedApiPort::new(fixture_responder));
        let state = state_with(port);
        state.refresh().await.unwrap();

        let failing = Arc::new(GatedApiPort::new(|_, _| {
            Err(ApiError::RequestFailed("connection refused".into()))
        }));
        let mut state = state;
        state.services.catalog = CatalogService::new(Api::new(failing));

        assert!(state.refresh().await.is_err());
        assert!(state.error(Operation::Load).await.is_some());
        assert_eq!(state.catalog().await.bosses().len(), test_fixtures::bosses().len());
    }

    #[tokio::test]
    async fn later_search_wins_even_if_it_lands_first() {
        let port = Arc::new(GatedApiPort::new(fixture_responder));
        let first_gate = port.gate();
        let second_gate = port.gate();
        let state = state_with(port);

        let first = state.search("gladius");
        let second = state.search("heolstor");
        tokio::pin!(first);
        tokio::pin!(second);

        assert!(matches!(futures_util::poll!(first.as_mut()), Poll::Pending));
        assert!(matches!(futures_util::poll!(second.as_mut()), Poll::Pending));

        second_gate.send(()).unwrap();
        second.await.unwrap();
        first_gate.send(()).unwrap();
        let returned_to_first = first.await.unwrap().unwrap();

        let active = state.search_result().await.unwrap();
        assert_eq!(active.query, "heolstor");
        assert_eq!(active.bosses[0].name, "Heolstor the Nightlord");
        assert_eq!(returned_to_first, active);
    }

    fn failing_search_responder(path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        if query.iter().any(|(_, v)| v == "broken") {
            return Err(ApiError::status(500, "Internal Server Error"));
        }
        fixture_responder(path, query)
    }

    #[tokio::test]
    async fn stale_search_success_keeps_the_newer_error() {
        let port = Arc::new(GatedApiPort::new(failing_search_responder));
        let gate = port.gate();
        let state = state_with(port);

        let oldest = state.search("gladius");
        tokio::pin!(oldest);
        assert!(matches!(futures_util::poll!(oldest.as_mut()), Poll::Pending));

        state.search("heolstor").await.unwrap();
        assert!(state.search("broken").await.is_err());
        assert!(state.error(Operation::Search).await.is_some());

        gate.send(()).unwrap();
        let returned = oldest.await.unwrap().unwrap();

        assert_eq!(returned.query, "heolstor");
        assert!(state.error(Operation::Search).await.is_some());
    }

    #[tokio::test]
    async fn stale_search_failure_records_no_error() {
        let port = Arc::new(GatedApiPort::new(failing_search_responder));
        let gate = port.gate();
        let state = state_with(port);

        let oldest = state.search("broken");
        tokio::pin!(oldest);
        assert!(matches!(futures_util::poll!(oldest.as_mut()), Poll::Pending));

        state.search("heolstor").await.unwrap();
        gate.send(()).unwrap();

        assert!(oldest.await.is_err());
        assert!(state.error(Operation::Search).await.is_none());
        assert_eq!(state.search_result().await.unwrap().query, "heolstor");
    }

    #[tokio::test]
    async fn blank_search_clears_active_result() {
        let port = Arc::new(GatedApiPort::new(fixture_responder));
        let state = state_with(port.clone());

        state.search("gladius").await.unwrap();
        assert!(state.search_result().await.is_some());

        assert!(state.search("   ").await.unwrap().is_none());
        assert!(state.search_result().await.is_none());
        assert_eq!(port.calls(), 1);
    }

    #[tokio::test]
    async fn filters_on_unfilterable_category_make_no_request() {
        let port = Arc::new(GatedApiPort::new(fixture_responder));
        let state = state_with(port.clone());
        state.refresh().await.unwrap();
        let before = port.calls();

        state.set_filter(Category::Secrets, "difficulty", "Hard").await;
        let listed = state.apply_filters(Category::Secrets).await.unwrap();

        assert_eq!(listed, test_fixtures::secrets().len());
        assert_eq!(port.calls(), before);
    }

    #[tokio::test]
    async fn clearing_filters_twice_matches_clearing_once() {
        let port = Arc::new(GatedApiPort::new(fixture_responder));
        let state = state_with(port);
        state.refresh().await.unwrap();
        state.set_filter(Category::Bosses, "difficulty", "extreme").await;
        state.set_filter(Category::Creatures, "weakness", "Holy").await;
        assert_eq!(state.apply_filters(Category::Bosses).await.unwrap(), 2);

        state.clear_filters().await.unwrap();
        let bosses_once = state.catalog().await.bosses().to_vec();
        let creatures_once = state.catalog().await.creatures().to_vec();
        let boss_values_once = state.filter_values(Category::Bosses).await;
        let creature_values_once = state.filter_values(Category::Creatures).await;

        state.clear_filters().await.unwrap();
        let catalog = state.catalog().await;
        assert_eq!(catalog.bosses(), bosses_once.as_slice());
        assert_eq!(catalog.creatures(), creatures_once.as_slice());
        drop(catalog);
        assert_eq!(state.filter_values(Category::Bosses).await, boss_values_once);
        assert_eq!(state.filter_values(Category::Creatures).await, creature_values_once);

        assert_eq!(bosses_once, test_fixtures::bosses());
        assert!(boss_values_once.is_blank());
        assert!(state.errors().await.is_empty());
    }

    #[tokio::test]
    async fn stale_load_does_not_undo_a_newer_filter() {
        let port = Arc::new(GatedApiPort::new(fixture_responder));
        let load_gate = port.gate();
        let state = state_with(port);

        let load = state.refresh();
        tokio::pin!(load);
        assert!(matches!(futures_util::poll!(load.as_mut()), Poll::Pending));

        state.set_filter(Category::Bosses, "difficulty", "extreme").await;
        let listed = state.apply_filters(Category::Bosses).await.unwrap();
        assert_eq!(listed, 2);

        load_gate.send(()).unwrap();
        load.await.unwrap();

        let catalog = state.catalog().await;
        assert_eq!(catalog.bosses().len(), 2);
        assert_eq!(catalog.characters().len(), test_fixtures::characters().len());
    }

    #[tokio::test]
    async fn recommendations_for_a_closed_selection_are_dropped() {
        let port = Arc::new(GatedApiPort::new(fixture_responder));
        let gate = port.gate();
        let state = state_with(port);

        let open_boss = state.select(Selection::Boss(BossId::from("boss-gladius")));
        tokio::pin!(open_boss);
        assert!(matches!(futures_util::poll!(open_boss.as_mut()), Poll::Pending));

        state
            .select(Selection::Character(CharacterId::from("char-wylder")))
            .await
            .unwrap();
        gate.send(()).unwrap();
        open_boss.await.unwrap();

        assert!(matches!(state.selection().await, Selection::Character(_)));
        assert!(state.detail.read().await.recommendations.is_none());
    }

    #[tokio::test]
    async fn boss_detail_includes_recommendations() {
        let port = Arc::new(GatedApiPort::new(fixture_responder));
        let state = state_with(port);
        state.refresh().await.unwrap();

        state
            .select(Selection::Boss(BossId::from("boss-heolstor")))
            .await
            .unwrap();
        let Some(DetailView::Boss(detail)) = state.detail_view().await.unwrap() else {
            panic!("expected boss detail");
        };
        assert_eq!(detail.difficulty_label(), "Extreme");
        assert_eq!(detail.recommended_character_names(), vec!["Wylder"]);

        state.close_detail().await;
        assert!(state.detail_view().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn incomplete_draft_is_kept_and_nothing_is_sent() {
        let port = Arc::new(GatedApiPort::new(fixture_responder));
        let state = state_with(port.clone());

        assert!(state.update_draft("name", "Half Done").await);
        assert!(!state.update_draft("armor", "Nope").await);

        let result = state.submit_custom_build().await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert_eq!(state.draft().await.name, "Half Done");
        assert!(state.error(Operation::CreateBuild).await.is_some());
        assert_eq!(port.calls(), 0);
    }

    #[tokio::test]
    async fn submitted_build_clears_draft_and_reloads() {
        let port = Arc::new(GatedApiPort::new(|path, query| {
            if path == "/api/custom-build" {
                return Ok(json!({
                    "id": "custom-2",
                    "name": "Moonlit Duelist",
                    "character": "Executor",
                    "type": "Dexterity",
                    "primary_weapon": "Moonveil"
                }));
            }
            fixture_responder(path, query)
        }));
        let state = state_with(port.clone());
        state.set_draft(test_fixtures::complete_draft()).await;

        let build = state.submit_custom_build().await.unwrap();

        assert_eq!(build.id.as_str(), "custom-2");
        assert!(state.draft().await.is_blank());
        assert_eq!(port.calls(), 11);
        assert!(state.errors().await.is_empty());
    }

    #[tokio::test]
    async fn edits_made_during_submit_are_kept() {
        let port = Arc::new(GatedApiPort::new(|path, query| {
            if path == "/api/custom-build" {
                return Ok(json!({ "id": "custom-3", "name": "Moonlit Duelist" }));
            }
            fixture_responder(path, query)
        }));
        let post_gate = port.gate();
        let state = state_with(port);
        state.set_draft(test_fixtures::complete_draft()).await;

        let submit = state.submit_custom_build();
        tokio::pin!(submit);
        assert!(matches!(futures_util::poll!(submit.as_mut()), Poll::Pending));

        assert!(state.update_draft("name", "Moonlit Duelist II").await);
        post_gate.send(()).unwrap();
        let build = submit.await.unwrap();

        assert_eq!(build.id.as_str(), "custom-3");
        let draft = state.draft().await;
        assert_eq!(draft.name, "Moonlit Duelist II");
        assert_eq!(draft.character, test_fixtures::complete_draft().character);
    }
}
