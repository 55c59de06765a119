//! Domain entities for the Catalog domain
//!
//! Paper and cover types are pre-seeded reference data. The service only reads them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pressrun_common::{Error, Result};

/// Paper stock a book block can be printed on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PaperType {
    pub id: Uuid,
    pub name: String,
    /// Price of one physical sheet (two printed pages)
    pub cost_per_sheet: Decimal,
    pub description: Option<String>,
}

impl PaperType {
    pub fn new(name: String, cost_per_sheet: Decimal, description: Option<String>) -> Result<Self> {
        let paper = Self {
            id: Uuid::new_v4(),
            name,
            cost_per_sheet,
            description,
        };
        paper.validate()?;
        Ok(paper)
    }

    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        if self.cost_per_sheet < Decimal::ZERO {
            return Err(Error::Validation(
                "Cost per sheet must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Selector label, e.g. `Offset 90g - $0.10/sheet`
    pub fn label(&self) -> String {
        format!("{} - ${}/sheet", self.name, self.cost_per_sheet)
    }
}

/// Binding/cover option, charged once per copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CoverType {
    pub id: Uuid,
    pub name: String,
    pub additional_cost: Decimal,
    pub description: Option<String>,
}

impl CoverType {
    pub fn new(name: String, additional_cost: Decimal, description: Option<String>) -> Result<Self> {
        let cover = Self {
            id: Uuid::new_v4(),
            name,
            additional_cost,
            description,
        };
        cover.validate()?;
        Ok(cover)
    }

    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        if self.additional_cost < Decimal::ZERO {
            return Err(Error::Validation(
                "Additional cost must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Selector label, e.g. `Paperback - +$2.00`
    pub fn label(&self) -> String {
        format!("{} - +${}", self.name, self.additional_cost)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() || name.len() > 100 {
        return Err(Error::Validation(
            "Material name must be 1-100 characters".to_string(),
        ));
    }
    Ok(())
}

/// Something that can be looked up by id in a loaded selector list
pub trait Material {
    fn id(&self) -> Uuid;
}

impl Material for PaperType {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Material for CoverType {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Find the selected material in an already loaded list
pub fn find_material<M: Material>(materials: &[M], id: Uuid) -> Option<&M> {
    materials.iter().find(|m| m.id() == id)
}
