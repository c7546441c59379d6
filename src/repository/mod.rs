//! Persistence seams for clients and projects.
//!
//! Services depend on the reader traits only; [`DieselRepository`] is
//! the SQLite implementation wired into the server.

use crate::db::{DbConnection, DbPool};
use crate::domain::client::{Client, ClientSummary};
use crate::domain::project::{Project, ProjectSummary};
use crate::domain::search::SearchQuery;
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod project;

/// Diesel-backed repository sharing one connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

pub trait ClientReader {
    /// Clients matching the query, ordered by name, with their project counts.
    ///
    /// An empty query returns every client.
    fn search_clients(&self, query: &SearchQuery) -> RepositoryResult<Vec<ClientSummary>>;

    fn get_client_by_id(&self, client_id: i32) -> RepositoryResult<Option<Client>>;
}

pub trait ProjectReader {
    /// Projects matching the query, ordered by due date, joined with the
    /// owning client's name.
    ///
    /// An empty query returns every project.
    fn search_projects(&self, query: &SearchQuery) -> RepositoryResult<Vec<ProjectSummary>>;

    fn get_project_by_id(&self, project_id: i32) -> RepositoryResult<Option<Project>>;

    /// Projects of one client, in creation order.
    fn list_client_projects(&self, client_id: i32) -> RepositoryResult<Vec<Project>>;
}
