//! Material selector API handlers

use axum::{extract::State, Json};
use pressrun_common::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::api::middleware::CatalogState;
use crate::domain::entities::{CoverType, PaperType};

/// Paper type response DTO
#[derive(Debug, Serialize)]
pub struct PaperTypeResponse {
    pub id: Uuid,
    pub name: String,
    pub cost_per_sheet: Decimal,
    pub description: Option<String>,
    pub label: String,
}

impl From<PaperType> for PaperTypeResponse {
    fn from(p: PaperType) -> Self {
        let label = p.label();
        Self {
            id: p.id,
            name: p.name,
            cost_per_sheet: p.cost_per_sheet,
            description: p.description,
            label,
        }
    }
}

/// Cover type response DTO
#[derive(Debug, Serialize)]
pub struct CoverTypeResponse {
    pub id: Uuid,
    pub name: String,
    pub additional_cost: Decimal,
    pub description: Option<String>,
    pub label: String,
}

impl From<CoverType> for CoverTypeResponse {
    fn from(c: CoverType) -> Self {
        let label = c.label();
        Self {
            id: c.id,
            name: c.name,
            additional_cost: c.additional_cost,
            description: c.description,
            label,
        }
    }
}

/// List paper types ordered by name
pub async fn list_paper_types(
    State(state): State<CatalogState>,
) -> Result<Json<Vec<PaperTypeResponse>>> {
    let papers = state.repos.paper_types.list().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to load paper types");
        e
    })?;
    Ok(Json(papers.into_iter().map(Into::into).collect()))
}

/// List cover types ordered by name
pub async fn list_cover_types(
    State(state): State<CatalogState>,
) -> Result<Json<Vec<CoverTypeResponse>>> {
    let covers = state.repos.cover_types.list().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to load cover types");
        e
    })?;
    Ok(Json(covers.into_iter().map(Into::into).collect()))
}
