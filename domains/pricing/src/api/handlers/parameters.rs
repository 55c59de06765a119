//! Cost parameter API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use pressrun_common::{Result, ValidatedJson};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::api::middleware::PricingState;
use crate::domain::entities::{CostCoefficients, CostParameters};

/// Request for overwriting the four coefficients
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_non_negative"))]
pub struct UpdateParametersRequest {
    pub equipment_depreciation_pct: Decimal,
    pub energy_cost_per_kwh: Decimal,
    pub author_royalty_pct: Decimal,
    pub admin_overhead_pct: Decimal,
}

impl UpdateParametersRequest {
    fn coefficients(&self) -> CostCoefficients {
        CostCoefficients {
            equipment_depreciation_pct: self.equipment_depreciation_pct,
            energy_cost_per_kwh: self.energy_cost_per_kwh,
            author_royalty_pct: self.author_royalty_pct,
            admin_overhead_pct: self.admin_overhead_pct,
        }
    }
}

fn validate_non_negative(req: &UpdateParametersRequest) -> std::result::Result<(), ValidationError> {
    req.coefficients().validate().map_err(|_| {
        ValidationError::new("negative_coefficient")
            .with_message("Cost coefficients must not be negative".into())
    })
}

/// Cost parameters response DTO
#[derive(Debug, Serialize)]
pub struct ParametersResponse {
    pub id: Uuid,
    pub equipment_depreciation_pct: Decimal,
    pub energy_cost_per_kwh: Decimal,
    pub author_royalty_pct: Decimal,
    pub admin_overhead_pct: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl From<CostParameters> for ParametersResponse {
    fn from(p: CostParameters) -> Self {
        Self {
            id: p.id,
            equipment_depreciation_pct: p.equipment_depreciation_pct,
            energy_cost_per_kwh: p.energy_cost_per_kwh,
            author_royalty_pct: p.author_royalty_pct,
            admin_overhead_pct: p.admin_overhead_pct,
            updated_at: p.updated_at,
        }
    }
}

/// Get the single cost parameters record
pub async fn get_parameters(State(state): State<PricingState>) -> Result<Json<ParametersResponse>> {
    let params = state.repos.parameters.get().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to load cost parameters");
        e
    })?;
    Ok(Json(params.into()))
}

/// Overwrite all four coefficients of the parameters record
pub async fn update_parameters(
    State(state): State<PricingState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateParametersRequest>,
) -> Result<Json<ParametersResponse>> {
    let updated = state
        .repos
        .parameters
        .update(id, &req.coefficients())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, parameters_id = %id, "Failed to save cost parameters");
            e
        })?;

    tracing::info!(parameters_id = %updated.id, "Cost parameters updated");
    Ok(Json(updated.into()))
}
