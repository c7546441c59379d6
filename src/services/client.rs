use crate::domain::project::ProjectStatus;
use crate::dto::client::ClientPageData;
use crate::dto::project::ProjectView;
use crate::repository::{ClientReader, ProjectReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads a client with its projects and the number of open ones.
pub fn get_client_page<R>(repo: &R, client_id: i32) -> ServiceResult<ClientPageData>
where
    R: ClientReader + ProjectReader + ?Sized,
{
    let client = repo
        .get_client_by_id(client_id)
        .map_err(|err| {
            log::error!("Failed to get client {client_id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)?;

    let projects = repo.list_client_projects(client_id).map_err(|err| {
        log::error!("Failed to list projects of client {client_id}: {err}");
        ServiceError::from(err)
    })?;

    let open_projects = projects
        .iter()
        .filter(|project| project.status() == ProjectStatus::InProgress)
        .count();

    Ok(ClientPageData {
        client,
        projects: projects.iter().map(ProjectView::from).collect(),
        open_projects,
    })
}
