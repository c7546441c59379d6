use crate::domain::search::SearchQuery;
use crate::dto::api::{ClientRecord, ProjectRecord, SearchResult};
use crate::repository::{ClientReader, ProjectReader};
use crate::services::{ServiceError, ServiceResult};

/// Returns the clients matching `query`, or every client for an empty query.
pub fn search_clients<R>(repo: &R, query: &SearchQuery) -> ServiceResult<SearchResult<ClientRecord>>
where
    R: ClientReader + ?Sized,
{
    let clients = repo.search_clients(query).map_err(|err| {
        log::error!("Failed to search clients for {query:?}: {err}");
        ServiceError::from(err)
    })?;

    Ok(SearchResult::new(clients.into_iter().map(Into::into).collect()))
}

/// Returns the projects matching `query`, or every project for an empty query.
pub fn search_projects<R>(
    repo: &R,
    query: &SearchQuery,
) -> ServiceResult<SearchResult<ProjectRecord>>
where
    R: ProjectReader + ?Sized,
{
    let projects = repo.search_projects(query).map_err(|err| {
        log::error!("Failed to search projects for {query:?}: {err}");
        ServiceError::from(err)
    })?;

    Ok(SearchResult::new(projects.into_iter().map(Into::into).collect()))
}
