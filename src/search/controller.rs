//! Search-as-you-type controllers binding an input to a table body.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;

use crate::domain::search::SearchQuery;
use crate::dto::api::SearchResult;
use crate::search::debounce::Debouncer;
use crate::search::fetch::{FetchError, JsonFetcher};
use crate::search::page::{InputSource, Page, RenderTarget};
use crate::search::render::{ClientRowRenderer, ProjectRowRenderer, RenderError, RowRenderer};

pub const SEARCHING_MESSAGE: &str = "Searching...";
pub const SEARCH_ERROR_MESSAGE: &str = "Search error. Check console.";

/// Characters left as-is by JavaScript's `encodeURIComponent`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Element ids and endpoint a controller is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchAnchors {
    pub input_id: &'static str,
    pub target_id: &'static str,
    pub endpoint: &'static str,
}

pub const CLIENT_SEARCH: SearchAnchors = SearchAnchors {
    input_id: "clientSearch",
    target_id: "clientsTbody",
    endpoint: "/api/clients",
};

pub const PROJECT_SEARCH: SearchAnchors = SearchAnchors {
    input_id: "projectSearch",
    target_id: "projectsTbody",
    endpoint: "/api/projects",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    /// Input changed; a search is scheduled or in flight.
    Searching,
    Rendered,
    Errored,
}

/// Any failure between dispatching a search and rendering its rows.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// `{endpoint}?q={query}` with the query percent-encoded.
pub fn search_url(endpoint: &str, query: &SearchQuery) -> String {
    format!(
        "{endpoint}?q={}",
        utf8_percent_encode(query.as_str(), QUERY_COMPONENT)
    )
}

/// State shared between the controller and its in-flight searches.
struct SearchTable<R> {
    renderer: R,
    fetcher: JsonFetcher,
    target: Arc<dyn RenderTarget>,
    endpoint: &'static str,
    state: Mutex<SearchState>,
    /// Bumped on every input event; a response is only rendered if no input
    /// arrived after its search was dispatched.
    generation: AtomicU64,
    /// State and rows shown before the current run of input events.
    previous: Mutex<Option<(SearchState, String)>>,
}

impl<R: RowRenderer> SearchTable<R> {
    fn state(&self) -> SearchState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_state(&self, state: SearchState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    fn previous(&self) -> MutexGuard<'_, Option<(SearchState, String)>> {
        self.previous.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn show_message(&self, state: SearchState, message: &str) {
        self.set_state(state);
        match self.renderer.render_message(message) {
            Ok(html) => self.target.set_html(html),
            Err(err) => log::error!("Failed to render {message:?} row: {err}"),
        }
    }

    fn begin_search(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);

        let state = self.state();
        if state != SearchState::Searching {
            *self.previous() = Some((state, self.target.html()));
        }

        self.show_message(SearchState::Searching, SEARCHING_MESSAGE);
    }

    fn restore_previous(&self) {
        if let Some((state, html)) = self.previous().take() {
            self.target.set_html(html);
            self.set_state(state);
        }
    }

    async fn run(&self, query: SearchQuery, generation: u64) {
        let url = search_url(self.endpoint, &query);

        let outcome = self.fetch_rows(&url).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("Discarding stale response for {url}");
            return;
        }

        *self.previous() = None;
        match outcome {
            Ok(html) => {
                self.target.set_html(html);
                self.set_state(SearchState::Rendered);
            }
            Err(err) => {
                log::error!("Search request {url} failed: {err}");
                self.show_message(SearchState::Errored, SEARCH_ERROR_MESSAGE);
            }
        }
    }

    async fn fetch_rows(&self, url: &str) -> Result<String, SearchError> {
        let data: SearchResult<R::Record> = self.fetcher.fetch_json(url).await?;
        Ok(self.renderer.render(&data.results)?)
    }
}

/// Drives one search input and the table body showing its results.
///
/// Every input event shows the "Searching..." row immediately; the request
/// itself is sent once typing has been quiet for the debounce delay, using the
/// input's value and the input generation at that moment.
pub struct SearchController<R: RowRenderer> {
    table: Arc<SearchTable<R>>,
    debouncer: Debouncer<()>,
}

pub type ClientSearch = SearchController<ClientRowRenderer>;
pub type ProjectSearch = SearchController<ProjectRowRenderer>;

impl<R: RowRenderer> SearchController<R> {
    /// Binds to the anchors on `page`. Returns `None` when either the input or
    /// the table body is missing.
    pub fn bind(
        page: &dyn Page,
        anchors: &SearchAnchors,
        renderer: R,
        fetcher: JsonFetcher,
        delay: Duration,
    ) -> Option<Self> {
        let Some(input) = page.input(anchors.input_id) else {
            log::debug!("No #{} input, search disabled", anchors.input_id);
            return None;
        };
        let Some(target) = page.render_target(anchors.target_id) else {
            log::debug!("No #{} table body, search disabled", anchors.target_id);
            return None;
        };

        Some(Self::new(input, target, anchors.endpoint, renderer, fetcher, delay))
    }

    pub fn new(
        input: Arc<dyn InputSource>,
        target: Arc<dyn RenderTarget>,
        endpoint: &'static str,
        renderer: R,
        fetcher: JsonFetcher,
        delay: Duration,
    ) -> Self {
        let table = Arc::new(SearchTable {
            renderer,
            fetcher,
            target,
            endpoint,
            state: Mutex::new(SearchState::Idle),
            generation: AtomicU64::new(0),
            previous: Mutex::new(None),
        });

        let debouncer = {
            let table = Arc::clone(&table);
            Debouncer::new(delay, move |()| {
                let table = Arc::clone(&table);
                let query = SearchQuery::new(input.value());
                let generation = table.generation.load(Ordering::SeqCst);
                async move { table.run(query, generation).await }
            })
        };

        Self { table, debouncer }
    }

    /// Handles an input event on the bound field.
    pub fn on_input(&self) {
        self.table.begin_search();
        self.debouncer.call(());
    }

    /// Drops a scheduled search that has not been sent yet and puts back the
    /// rows and state shown before typing started. Returns whether a search
    /// was pending.
    pub fn cancel_pending(&self) -> bool {
        if !self.debouncer.cancel() {
            return false;
        }
        self.table.restore_previous();
        true
    }

    pub fn state(&self) -> SearchState {
        self.table.state()
    }
}

/// Controllers of a page, each present only if its anchors were found.
pub struct SearchPage {
    pub clients: Option<ClientSearch>,
    pub projects: Option<ProjectSearch>,
}

impl SearchPage {
    /// Binds the client and project searches independently.
    pub fn init(
        page: &dyn Page,
        fetcher: JsonFetcher,
        delay: Duration,
    ) -> Result<Self, RenderError> {
        let clients = SearchController::bind(
            page,
            &CLIENT_SEARCH,
            ClientRowRenderer::new()?,
            fetcher.clone(),
            delay,
        );
        let projects = SearchController::bind(
            page,
            &PROJECT_SEARCH,
            ProjectRowRenderer::new()?,
            fetcher,
            delay,
        );

        Ok(Self { clients, projects })
    }
}
