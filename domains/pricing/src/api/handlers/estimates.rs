//! Estimate API handlers

use axum::{extract::State, Json};
use pressrun_common::{Result, ValidatedJson};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::PricingState;
use crate::domain::estimate::CostEstimate;
use crate::quote::{quote, QuoteRequest};

/// Request for pricing a print run without saving it
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEstimateRequest {
    #[validate(range(min = 1, message = "Page count must be greater than zero"))]
    pub page_count: i32,

    #[validate(range(min = 1, message = "Print run must be greater than zero"))]
    pub print_run: i32,

    pub paper_type_id: Option<Uuid>,
    pub cover_type_id: Option<Uuid>,
}

/// Estimate response DTO
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub print_run: i32,
    pub sheets_per_copy: i64,
    pub paper_cost_total: Decimal,
    pub cover_cost_total: Decimal,
    pub base_cost: Decimal,
    pub depreciation: Decimal,
    pub energy_cost: Decimal,
    pub royalty_cost: Decimal,
    pub admin_cost: Decimal,
    pub total_cost: Decimal,
    pub suggested_price: Decimal,
    pub cost_per_copy: Option<Decimal>,
    pub price_per_copy: Option<Decimal>,
}

impl From<CostEstimate> for EstimateResponse {
    fn from(e: CostEstimate) -> Self {
        Self {
            cost_per_copy: e.cost_per_copy(),
            price_per_copy: e.price_per_copy(),
            print_run: e.print_run,
            sheets_per_copy: e.sheets_per_copy,
            paper_cost_total: e.paper_cost_total,
            cover_cost_total: e.cover_cost_total,
            base_cost: e.base_cost,
            depreciation: e.depreciation,
            energy_cost: e.energy_cost,
            royalty_cost: e.royalty_cost,
            admin_cost: e.admin_cost,
            total_cost: e.total_cost,
            suggested_price: e.suggested_price,
        }
    }
}

/// Price a print run against the stored materials and parameters
pub async fn create_estimate(
    State(state): State<PricingState>,
    ValidatedJson(req): ValidatedJson<CreateEstimateRequest>,
) -> Result<Json<EstimateResponse>> {
    let request = QuoteRequest {
        page_count: req.page_count,
        print_run: req.print_run,
        paper_type_id: req.paper_type_id,
        cover_type_id: req.cover_type_id,
    };

    let estimate = quote(&state.catalog, &state.repos.parameters, &request)
        .await
        .map_err(|e| {
            if e.is_backend_failure() {
                tracing::error!(error = %e, "Failed to compute estimate");
            }
            e
        })?;

    Ok(Json(estimate.into()))
}
