//! Cover type repository

use crate::domain::entities::CoverType;
use pressrun_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct CoverTypeRepository {
    pool: PgPool,
}

impl CoverTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find cover type by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<CoverType>> {
        let cover = sqlx::query_as::<_, CoverType>(
            r#"
            SELECT id, name, additional_cost, description
            FROM cover_types
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cover)
    }

    /// List all cover types ordered by name
    pub async fn list(&self) -> Result<Vec<CoverType>> {
        let covers = sqlx::query_as::<_, CoverType>(
            r#"
            SELECT id, name, additional_cost, description
            FROM cover_types
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(covers)
    }
}
