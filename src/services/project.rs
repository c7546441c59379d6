use crate::dto::project::{ProjectPageData, ProjectView};
use crate::repository::{ClientReader, ProjectReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads a project together with its owning client.
pub fn get_project_page<R>(repo: &R, project_id: i32) -> ServiceResult<ProjectPageData>
where
    R: ClientReader + ProjectReader + ?Sized,
{
    let project = repo
        .get_project_by_id(project_id)
        .map_err(|err| {
            log::error!("Failed to get project {project_id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)?;

    let client = repo.get_client_by_id(project.client_id).map_err(|err| {
        log::error!("Failed to get client {}: {err}", project.client_id);
        ServiceError::from(err)
    })?;

    Ok(ProjectPageData {
        project: ProjectView::from(&project),
        client,
    })
}
