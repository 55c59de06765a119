//! Paper type repository

use crate::domain::entities::PaperType;
use pressrun_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct PaperTypeRepository {
    pool: PgPool,
}

impl PaperTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find paper type by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<PaperType>> {
        let paper = sqlx::query_as::<_, PaperType>(
            r#"
            SELECT id, name, cost_per_sheet, description
            FROM paper_types
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(paper)
    }

    /// List all paper types ordered by name
    pub async fn list(&self) -> Result<Vec<PaperType>> {
        let papers = sqlx::query_as::<_, PaperType>(
            r#"
            SELECT id, name, cost_per_sheet, description
            FROM paper_types
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(papers)
    }
}
