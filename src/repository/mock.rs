//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, ClientSummary};
use crate::domain::project::{Project, ProjectSummary};
use crate::domain::search::SearchQuery;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ProjectReader};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn search_clients(&self, query: &SearchQuery) -> RepositoryResult<Vec<ClientSummary>>;
        fn get_client_by_id(&self, client_id: i32) -> RepositoryResult<Option<Client>>;
    }

    impl ProjectReader for Repository {
        fn search_projects(&self, query: &SearchQuery) -> RepositoryResult<Vec<ProjectSummary>>;
        fn get_project_by_id(&self, project_id: i32) -> RepositoryResult<Option<Project>>;
        fn list_client_projects(&self, client_id: i32) -> RepositoryResult<Vec<Project>>;
    }
}
