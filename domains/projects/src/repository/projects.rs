//! Project repository

use crate::domain::entities::{Project, ProjectSummary};
use pressrun_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new project
    pub async fn create(&self, project: &Project) -> Result<Project> {
        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO book_projects (
                id, title, author, isbn, page_count, print_run,
                paper_type_id, cover_type_id, cover_image_url,
                estimated_cost, suggested_price, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, title, author, isbn, page_count, print_run,
                      paper_type_id, cover_type_id, cover_image_url,
                      estimated_cost, suggested_price, created_at
            "#,
        )
        .bind(project.id)
        .bind(&project.title)
        .bind(&project.author)
        .bind(&project.isbn)
        .bind(project.page_count)
        .bind(project.print_run)
        .bind(project.paper_type_id)
        .bind(project.cover_type_id)
        .bind(&project.cover_image_url)
        .bind(project.estimated_cost)
        .bind(project.suggested_price)
        .bind(project.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Find project by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, author, isbn, page_count, print_run,
                   paper_type_id, cover_type_id, cover_image_url,
                   estimated_cost, suggested_price, created_at
            FROM book_projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    /// List all projects with their material names, newest first
    pub async fn list_with_materials(&self) -> Result<Vec<ProjectSummary>> {
        let projects = sqlx::query_as::<_, ProjectSummary>(
            r#"
            SELECT p.id, p.title, p.author, p.isbn, p.page_count, p.print_run,
                   p.paper_type_id, p.cover_type_id, p.cover_image_url,
                   p.estimated_cost, p.suggested_price, p.created_at,
                   pt.name AS paper_type_name,
                   ct.name AS cover_type_name
            FROM book_projects p
            LEFT JOIN paper_types pt ON pt.id = p.paper_type_id
            LEFT JOIN cover_types ct ON ct.id = p.cover_type_id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    /// Delete a project, returning whether a row was removed
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM book_projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
