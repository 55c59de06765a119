//! Project API handlers

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use pressrun_common::{Error, Result};
use pressrun_pricing::{per_copy, quote, QuoteRequest};
use pressrun_storage::{cover_object_path, StorageService};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::api::middleware::ProjectsState;
use crate::domain::entities::{non_blank, CoverUpload, NewProject, Project, ProjectSummary};

/// Largest accepted form: one cover plus the text fields
pub const MAX_FORM_BYTES: usize = CoverUpload::MAX_SIZE_BYTES + 64 * 1024;

/// Project response DTO
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub page_count: i32,
    pub print_run: i32,
    pub paper_type_id: Option<Uuid>,
    pub cover_type_id: Option<Uuid>,
    pub cover_image_url: Option<String>,
    pub estimated_cost: Decimal,
    pub suggested_price: Decimal,
    pub price_per_copy: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            price_per_copy: per_copy(p.suggested_price, p.print_run),
            id: p.id,
            title: p.title,
            author: p.author,
            isbn: p.isbn,
            page_count: p.page_count,
            print_run: p.print_run,
            paper_type_id: p.paper_type_id,
            cover_type_id: p.cover_type_id,
            cover_image_url: p.cover_image_url,
            estimated_cost: p.estimated_cost,
            suggested_price: p.suggested_price,
            created_at: p.created_at,
        }
    }
}

/// Listed project with its material names
#[derive(Debug, Serialize)]
pub struct ProjectSummaryResponse {
    #[serde(flatten)]
    pub project: ProjectResponse,
    pub paper_type_name: Option<String>,
    pub cover_type_name: Option<String>,
}

impl From<ProjectSummary> for ProjectSummaryResponse {
    fn from(s: ProjectSummary) -> Self {
        Self {
            project: s.project.into(),
            paper_type_name: s.paper_type_name,
            cover_type_name: s.cover_type_name,
        }
    }
}

/// Fields read from a project submission form
#[derive(Debug, Default)]
struct ProjectForm {
    project: NewProject,
    cover: Option<CoverUpload>,
}

fn invalid_form(e: MultipartError) -> Error {
    Error::Validation(format!("Invalid form data: {}", e))
}

fn parse_count(field: &str, value: &str) -> Result<i32> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Validation(format!("{} must be a whole number", field)))
}

fn parse_reference(field: &str, value: &str) -> Result<Option<Uuid>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    Uuid::parse_str(value)
        .map(Some)
        .map_err(|_| Error::Validation(format!("{} must be a UUID", field)))
}

async fn read_form(multipart: &mut Multipart) -> Result<ProjectForm> {
    let mut form = ProjectForm::default();

    while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
        let name = field.name().unwrap_or("").to_string();

        if name == "cover" {
            let filename = field.file_name().unwrap_or("").to_string();
            let content_type = field.content_type().unwrap_or("").to_string();
            let bytes = field.bytes().await.map_err(invalid_form)?;
            // Browsers send an empty part when no file was chosen
            if !filename.is_empty() || !bytes.is_empty() {
                form.cover = Some(CoverUpload {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field.text().await.map_err(invalid_form)?;
        match name.as_str() {
            "title" => form.project.title = value,
            "author" => form.project.author = non_blank(Some(value)),
            "isbn" => form.project.isbn = non_blank(Some(value)),
            "page_count" => form.project.page_count = parse_count("page_count", &value)?,
            "print_run" => form.project.print_run = parse_count("print_run", &value)?,
            "paper_type_id" => {
                form.project.paper_type_id = parse_reference("paper_type_id", &value)?
            }
            "cover_type_id" => {
                form.project.cover_type_id = parse_reference("cover_type_id", &value)?
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}

async fn upload_cover(storage: &dyn StorageService, cover: CoverUpload) -> Result<String> {
    let path = cover_object_path(&cover.filename, Utc::now());
    storage
        .upload(&path, &cover.content_type, cover.bytes)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, path = %path, "Failed to upload cover image");
            e
        })?;
    Ok(storage.public_url(&path))
}

/// Save a project from a multipart form.
///
/// Totals are computed here from the stored materials and parameters.
/// Everything that can be checked locally is checked before the first
/// backend call.
pub async fn create_project(
    State(state): State<ProjectsState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ProjectResponse>)> {
    let form = read_form(&mut multipart).await?;

    form.project.validate()?;
    if let Some(cover) = &form.cover {
        cover.validate()?;
    }

    let request = QuoteRequest {
        page_count: form.project.page_count,
        print_run: form.project.print_run,
        paper_type_id: form.project.paper_type_id,
        cover_type_id: form.project.cover_type_id,
    };
    request.precheck()?;

    let estimate = quote(&state.catalog, &state.pricing.parameters, &request)
        .await
        .map_err(|e| {
            if e.is_backend_failure() {
                tracing::error!(error = %e, "Failed to price project");
            }
            e
        })?;

    let cover_image_url = match form.cover {
        Some(cover) => Some(upload_cover(state.storage.as_ref(), cover).await?),
        None => None,
    };

    let project = Project::new(form.project, &estimate, cover_image_url)?;
    let created = state.repos.projects.create(&project).await.map_err(|e| {
        tracing::error!(error = %e, project_id = %project.id, "Failed to save project");
        e
    })?;

    tracing::info!(
        project_id = %created.id,
        total_cost = %created.estimated_cost,
        "Project saved"
    );

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// List all saved projects, newest first
pub async fn list_projects(
    State(state): State<ProjectsState>,
) -> Result<Json<Vec<ProjectSummaryResponse>>> {
    let projects = state
        .repos
        .projects
        .list_with_materials()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to list projects");
            e
        })?;

    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// Delete a project
pub async fn delete_project(
    State(state): State<ProjectsState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let deleted = state.repos.projects.delete(id).await.map_err(|e| {
        tracing::error!(error = %e, project_id = %id, "Failed to delete project");
        e
    })?;

    if !deleted {
        return Err(Error::NotFound(format!("Project {} not found", id)));
    }

    tracing::info!(project_id = %id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}
