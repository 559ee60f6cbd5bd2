//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use std::str::FromStr;
use std::sync::Arc;

use auth::AuthenticatedAdmin;

use crate::application::{ExperienceUseCase, ProfileUseCase, ProjectUseCase};
use crate::domain::repository::{ExperienceRepository, ProfileRepository, ProjectRepository};
use crate::error::{PortfolioError, PortfolioResult};
use crate::presentation::dto::{
    ExperienceRequest, ExperienceResponse, MessageResponse, ProfileRequest, ProfileResponse,
    ProjectRequest, ProjectResponse, StatusQuery,
};

/// Shared state for portfolio handlers
pub struct PortfolioAppState<R>
where
    R: ProjectRepository + ExperienceRepository + ProfileRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for PortfolioAppState<R>
where
    R: ProjectRepository + ExperienceRepository + ProfileRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

/// Unparseable ids cannot exist, so they are reported as not found
fn parse_id<T: FromStr>(raw: &str, not_found: PortfolioError) -> PortfolioResult<T> {
    raw.parse().map_err(|_| not_found)
}

// ============================================================================
// Profile
// ============================================================================

/// GET /api/profile
pub async fn get_profile<R>(
    State(state): State<PortfolioAppState<R>>,
) -> PortfolioResult<Json<Option<ProfileResponse>>>
where
    R: ProjectRepository + ExperienceRepository + ProfileRepository + Send + Sync + 'static,
{
    let profile = ProfileUseCase::new(state.repo.clone()).get().await?;
    Ok(Json(profile.map(ProfileResponse::from)))
}

/// PUT /api/admin/profile
pub async fn update_profile<R>(
    State(state): State<PortfolioAppState<R>>,
    admin: AuthenticatedAdmin,
    Json(req): Json<ProfileRequest>,
) -> PortfolioResult<Json<ProfileResponse>>
where
    R: ProjectRepository + ExperienceRepository + ProfileRepository + Send + Sync + 'static,
{
    let profile = ProfileUseCase::new(state.repo.clone())
        .upsert(req.into())
        .await?;

    tracing::debug!(admin = %admin.username, "Profile updated by admin");

    Ok(Json(profile.into()))
}

// ============================================================================
// Projects
// ============================================================================

/// GET /api/projects
pub async fn list_projects<R>(
    State(state): State<PortfolioAppState<R>>,
    Query(query): Query<StatusQuery>,
) -> PortfolioResult<Json<Vec<ProjectResponse>>>
where
    R: ProjectRepository + ExperienceRepository + ProfileRepository + Send + Sync + 'static,
{
    let filter = query.filter()?;
    let projects = ProjectUseCase::new(state.repo.clone()).list(filter).await?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

/// GET /api/projects/{id}
pub async fn get_project<R>(
    State(state): State<PortfolioAppState<R>>,
    Path(id): Path<String>,
) -> PortfolioResult<Json<ProjectResponse>>
where
    R: ProjectRepository + ExperienceRepository + ProfileRepository + Send + Sync + 'static,
{
    let id = parse_id(&id, PortfolioError::ProjectNotFound)?;
    let project = ProjectUseCase::new(state.repo.clone()).get(&id).await?;
    Ok(Json(project.into()))
}

/// POST /api/admin/projects
pub async fn create_project<R>(
    State(state): State<PortfolioAppState<R>>,
    admin: AuthenticatedAdmin,
    Json(req): Json<ProjectRequest>,
) -> PortfolioResult<Json<ProjectResponse>>
where
    R: ProjectRepository + ExperienceRepository + ProfileRepository + Send + Sync + 'static,
{
    let project = ProjectUseCase::new(state.repo.clone())
        .create(req.try_into()?)
        .await?;

    tracing::debug!(admin = %admin.username, project_id = %project.id, "Project created by admin");

    Ok(Json(project.into()))
}

/// PUT /api/admin/projects/{id}
pub async fn update_project<R>(
    State(state): State<PortfolioAppState<R>>,
    Path(id): Path<String>,
    admin: AuthenticatedAdmin,
    Json(req): Json<ProjectRequest>,
) -> PortfolioResult<Json<ProjectResponse>>
where
    R: ProjectRepository + ExperienceRepository + ProfileRepository + Send + Sync + 'static,
{
    let id = parse_id(&id, PortfolioError::ProjectNotFound)?;
    let project = ProjectUseCase::new(state.repo.clone())
        .update(&id, req.try_into()?)
        .await?;

    tracing::debug!(admin = %admin.username, project_id = %project.id, "Project updated by admin");

    Ok(Json(project.into()))
}

/// DELETE /api/admin/projects/{id}
pub async fn delete_project<R>(
    State(state): State<PortfolioAppState<R>>,
    Path(id): Path<String>,
    admin: AuthenticatedAdmin,
) -> PortfolioResult<Json<MessageResponse>>
where
    R: ProjectRepository + ExperienceRepository + ProfileRepository + Send + Sync + 'static,
{
    let id = parse_id(&id, PortfolioError::ProjectNotFound)?;
    ProjectUseCase::new(state.repo.clone()).delete(&id).await?;

    tracing::debug!(admin = %admin.username, project_id = %id, "Project deleted by admin");

    Ok(Json(MessageResponse::new("Project deleted successfully")))
}

// ============================================================================
// Experiences
// ============================================================================

/// GET /api/experiences
pub async fn list_experiences<R>(
    State(state): State<PortfolioAppState<R>>,
    Query(query): Query<StatusQuery>,
) -> PortfolioResult<Json<Vec<ExperienceResponse>>>
where
    R: ProjectRepository + ExperienceRepository + ProfileRepository + Send + Sync + 'static,
{
    let filter = query.filter()?;
    let experiences = ExperienceUseCase::new(state.repo.clone()).list(filter).await?;
    Ok(Json(
        experiences.into_iter().map(ExperienceResponse::from).collect(),
    ))
}

/// POST /api/admin/experiences
pub async fn create_experience<R>(
    State(state): State<PortfolioAppState<R>>,
    admin: AuthenticatedAdmin,
    Json(req): Json<ExperienceRequest>,
) -> PortfolioResult<Json<ExperienceResponse>>
where
    R: ProjectRepository + ExperienceRepository + ProfileRepository + Send + Sync + 'static,
{
    let experience = ExperienceUseCase::new(state.repo.clone())
        .create(req.try_into()?)
        .await?;

    tracing::debug!(admin = %admin.username, experience_id = %experience.id, "Experience created by admin");

    Ok(Json(experience.into()))
}

/// PUT /api/admin/experiences/{id}
pub async fn update_experience<R>(
    State(state): State<PortfolioAppState<R>>,
    Path(id): Path<String>,
    admin: AuthenticatedAdmin,
    Json(req): Json<ExperienceRequest>,
) -> PortfolioResult<Json<ExperienceResponse>>
where
    R: ProjectRepository + ExperienceRepository + ProfileRepository + Send + Sync + 'static,
{
    let id = parse_id(&id, PortfolioError::ExperienceNotFound)?;
    let experience = ExperienceUseCase::new(state.repo.clone())
        .update(&id, req.try_into()?)
        .await?;

    tracing::debug!(admin = %admin.username, experience_id = %experience.id, "Experience updated by admin");

    Ok(Json(experience.into()))
}

/// DELETE /api/admin/experiences/{id}
pub async fn delete_experience<R>(
    State(state): State<PortfolioAppState<R>>,
    Path(id): Path<String>,
    admin: AuthenticatedAdmin,
) -> PortfolioResult<Json<MessageResponse>>
where
    R: ProjectRepository + ExperienceRepository + ProfileRepository + Send + Sync + 'static,
{
    let id = parse_id(&id, PortfolioError::ExperienceNotFound)?;
    ExperienceUseCase::new(state.repo.clone()).delete(&id).await?;

    tracing::debug!(admin = %admin.username, experience_id = %id, "Experience deleted by admin");

    Ok(Json(MessageResponse::new("Experience deleted successfully")))
}
