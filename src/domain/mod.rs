//! Domain entities shared by the repository, the API and the search layer.

pub mod client;
pub mod project;
pub mod search;
