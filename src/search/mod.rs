//! Search-as-you-type front-end for the client and project tables.
//!
//! A [`controller::SearchController`] listens to one text input, waits for
//! typing to settle ([`debounce::Debouncer`]), queries a JSON endpoint
//! ([`fetch::JsonFetcher`]) and replaces one table body with rows produced by a
//! [`render::RowRenderer`]. The page itself is reached only through the ports
//! in [`page`], so the whole flow runs headless.

pub mod controller;
pub mod debounce;
pub mod fetch;
pub mod page;
pub mod render;

pub use controller::{
    CLIENT_SEARCH, ClientSearch, PROJECT_SEARCH, ProjectSearch, SearchAnchors, SearchController,
    SearchPage, SearchState,
};
pub use debounce::Debouncer;
pub use fetch::{FetchError, HttpTransport, JsonFetcher, RawResponse, ReqwestTransport};
pub use page::{InputSource, MemoryPage, Page, RenderTarget, TableBody, TextInput};
pub use render::{ClientRowRenderer, ProjectRowRenderer, RenderError, RowRenderer};
