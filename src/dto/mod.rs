//! Wire shapes shared by the JSON API and the search front-end, and the view
//! data of the detail pages.

pub mod api;
pub mod client;
pub mod project;
