//! Cost parameters repository
//!
//! The table holds exactly one row. Reads fail when it holds none or several.

use crate::domain::entities::{CostCoefficients, CostParameters};
use pressrun_common::{RepositoryError, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct CostParametersRepository {
    pool: PgPool,
}

impl CostParametersRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the single parameters row
    pub async fn get(&self) -> Result<CostParameters> {
        let mut rows = sqlx::query_as::<_, CostParameters>(
            r#"
            SELECT id, equipment_depreciation_pct, energy_cost_per_kwh,
                   author_royalty_pct, admin_overhead_pct, updated_at
            FROM cost_parameters
            LIMIT 2
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        match rows.len() {
            1 => Ok(rows.remove(0)),
            0 => Err(RepositoryError::NotFound.into()),
            found => Err(RepositoryError::NotUnique {
                table: "cost_parameters",
                found,
            }
            .into()),
        }
    }

    /// Overwrite all four coefficients of the row with `id` and stamp `updated_at`
    pub async fn update(&self, id: Uuid, coefficients: &CostCoefficients) -> Result<CostParameters> {
        let updated = sqlx::query_as::<_, CostParameters>(
            r#"
            UPDATE cost_parameters
            SET equipment_depreciation_pct = $2,
                energy_cost_per_kwh = $3,
                author_royalty_pct = $4,
                admin_overhead_pct = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, equipment_depreciation_pct, energy_cost_per_kwh,
                      author_royalty_pct, admin_overhead_pct, updated_at
            "#,
        )
        .bind(id)
        .bind(coefficients.equipment_depreciation_pct)
        .bind(coefficients.energy_cost_per_kwh)
        .bind(coefficients.author_royalty_pct)
        .bind(coefficients.admin_overhead_pct)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| RepositoryError::NotFound.into())
    }
}
