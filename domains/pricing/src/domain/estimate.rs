//! Printing cost formula
//!
//! ```text
//! sheets_per_copy  = ceil(pages / 2)
//! paper            = sheets_per_copy * cost_per_sheet * run
//! cover            = additional_cost * run
//! base             = paper + cover
//! depreciation     = base * depreciation% / 100
//! energy           = run * 0.5 kWh * energy_rate
//! royalty          = base * royalty% / 100
//! admin            = base * admin% / 100
//! total            = base + depreciation + energy + royalty + admin
//! suggested price  = total * 1.4
//! ```
//!
//! All arithmetic is exact decimal arithmetic.

use pressrun_catalog::{CoverType, PaperType};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::CostCoefficients;

/// Energy drawn per printed copy, in kWh (0.5)
pub const ENERGY_KWH_PER_COPY: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Multiplier from total cost to suggested sale price (40% margin)
pub const MARGIN_MULTIPLIER: Decimal = Decimal::from_parts(14, 0, 0, false, 1);

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Reasons an estimate is refused
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EstimateError {
    #[error("A paper type must be selected")]
    MissingPaperType,

    #[error("A cover type must be selected")]
    MissingCoverType,

    #[error("Page count must be greater than zero")]
    NonPositivePageCount,

    #[error("Print run must be greater than zero")]
    NonPositivePrintRun,

    #[error("Estimate exceeds the representable amount")]
    Overflow,
}

impl From<EstimateError> for pressrun_common::Error {
    fn from(err: EstimateError) -> Self {
        pressrun_common::Error::Validation(err.to_string())
    }
}

/// Page count and print run of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintRun {
    pub page_count: i32,
    pub copies: i32,
}

impl PrintRun {
    pub fn new(page_count: i32, copies: i32) -> Self {
        Self { page_count, copies }
    }

    /// Reject runs the formula cannot price
    pub fn check(&self) -> Result<(), EstimateError> {
        if self.page_count <= 0 {
            return Err(EstimateError::NonPositivePageCount);
        }
        if self.copies <= 0 {
            return Err(EstimateError::NonPositivePrintRun);
        }
        Ok(())
    }
}

/// Full cost breakdown for one print run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostEstimate {
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
}

impl CostEstimate {
    pub fn cost_per_copy(&self) -> Option<Decimal> {
        per_copy(self.total_cost, self.print_run)
    }

    pub fn price_per_copy(&self) -> Option<Decimal> {
        per_copy(self.suggested_price, self.print_run)
    }
}

/// Physical sheets needed for one copy; each sheet carries two pages.
///
/// Negative page counts are treated as zero.
pub fn sheets_per_copy(page_count: i32) -> i64 {
    let pages = i64::from(page_count.max(0));
    (pages + 1) / 2
}

/// Divide an amount across a print run, `None` when the run is empty
pub fn per_copy(amount: Decimal, print_run: i32) -> Option<Decimal> {
    if print_run <= 0 {
        return None;
    }
    amount.checked_div(Decimal::from(print_run))
}

/// Dollar amount with two decimals, e.g. `$15.66`
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

fn mul(a: Decimal, b: Decimal) -> Result<Decimal, EstimateError> {
    a.checked_mul(b).ok_or(EstimateError::Overflow)
}

fn add(a: Decimal, b: Decimal) -> Result<Decimal, EstimateError> {
    a.checked_add(b).ok_or(EstimateError::Overflow)
}

fn percent_of(base: Decimal, pct: Decimal) -> Result<Decimal, EstimateError> {
    mul(base, pct)?
        .checked_div(HUNDRED)
        .ok_or(EstimateError::Overflow)
}

/// Price a print run.
///
/// Both materials must be selected and the run must have pages and copies;
/// otherwise no result is produced. Amounts beyond `Decimal` range are
/// refused with [`EstimateError::Overflow`].
pub fn estimate(
    run: PrintRun,
    paper: Option<&PaperType>,
    cover: Option<&CoverType>,
    coefficients: &CostCoefficients,
) -> Result<CostEstimate, EstimateError> {
    let paper = paper.ok_or(EstimateError::MissingPaperType)?;
    let cover = cover.ok_or(EstimateError::MissingCoverType)?;
    run.check()?;

    let copies = Decimal::from(run.copies);
    let sheets = sheets_per_copy(run.page_count);

    let paper_cost_total = mul(mul(Decimal::from(sheets), paper.cost_per_sheet)?, copies)?;
    let cover_cost_total = mul(cover.additional_cost, copies)?;
    let base_cost = add(paper_cost_total, cover_cost_total)?;

    let depreciation = percent_of(base_cost, coefficients.equipment_depreciation_pct)?;
    let energy_cost = mul(
        mul(copies, ENERGY_KWH_PER_COPY)?,
        coefficients.energy_cost_per_kwh,
    )?;
    let royalty_cost = percent_of(base_cost, coefficients.author_royalty_pct)?;
    let admin_cost = percent_of(base_cost, coefficients.admin_overhead_pct)?;

    let total_cost = [depreciation, energy_cost, royalty_cost, admin_cost]
        .into_iter()
        .try_fold(base_cost, add)?;
    let suggested_price = mul(total_cost, MARGIN_MULTIPLIER)?;

    Ok(CostEstimate {
        print_run: run.copies,
        sheets_per_copy: sheets,
        paper_cost_total,
        cover_cost_total,
        base_cost,
        depreciation,
        energy_cost,
        royalty_cost,
        admin_cost,
        total_cost,
        suggested_price,
    })
}
