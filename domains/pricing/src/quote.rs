//! Load materials and parameters, then price a run

use pressrun_catalog::CatalogRepositories;
use pressrun_common::{Error, Result};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::estimate::{estimate, CostEstimate, EstimateError, PrintRun};
use crate::repository::CostParametersRepository;

/// Inputs needed to price a print run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct QuoteRequest {
    pub page_count: i32,
    pub print_run: i32,
    pub paper_type_id: Option<Uuid>,
    pub cover_type_id: Option<Uuid>,
}

impl QuoteRequest {
    /// Checks that need no backend access
    pub fn precheck(&self) -> std::result::Result<(Uuid, Uuid, PrintRun), EstimateError> {
        let paper = self.paper_type_id.ok_or(EstimateError::MissingPaperType)?;
        let cover = self.cover_type_id.ok_or(EstimateError::MissingCoverType)?;
        let run = PrintRun::new(self.page_count, self.print_run);
        run.check()?;
        Ok((paper, cover, run))
    }
}

/// Price a request against the stored materials and the current parameters
pub async fn quote(
    catalog: &CatalogRepositories,
    parameters: &CostParametersRepository,
    request: &QuoteRequest,
) -> Result<CostEstimate> {
    let (paper_id, cover_id, run) = request.precheck()?;

    let paper = catalog
        .paper_types
        .find(paper_id)
        .await?
        .ok_or_else(|| Error::Validation(format!("Paper type {} not found", paper_id)))?;
    let cover = catalog
        .cover_types
        .find(cover_id)
        .await?
        .ok_or_else(|| Error::Validation(format!("Cover type {} not found", cover_id)))?;
    let params = parameters.get().await?;

    let estimate = estimate(run, Some(&paper), Some(&cover), &params.coefficients())?;
    Ok(estimate)
}
