//! Domain entities for the Pricing domain

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pressrun_common::{Error, Result};

/// The four global cost coefficients.
///
/// Percentages are stored as plain numbers (`5` means 5% of base cost), not fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCoefficients {
    pub equipment_depreciation_pct: Decimal,
    pub energy_cost_per_kwh: Decimal,
    pub author_royalty_pct: Decimal,
    pub admin_overhead_pct: Decimal,
}

impl CostCoefficients {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("equipment_depreciation_pct", self.equipment_depreciation_pct),
            ("energy_cost_per_kwh", self.energy_cost_per_kwh),
            ("author_royalty_pct", self.author_royalty_pct),
            ("admin_overhead_pct", self.admin_overhead_pct),
        ];
        for (name, value) in fields {
            if value < Decimal::ZERO {
                return Err(Error::Validation(format!("{} must not be negative", name)));
            }
        }
        Ok(())
    }

    pub fn get(&self, field: ParameterField) -> Decimal {
        match field {
            ParameterField::EquipmentDepreciation => self.equipment_depreciation_pct,
            ParameterField::EnergyCost => self.energy_cost_per_kwh,
            ParameterField::AuthorRoyalty => self.author_royalty_pct,
            ParameterField::AdminOverhead => self.admin_overhead_pct,
        }
    }

    /// Copy with one field replaced
    pub fn with(self, field: ParameterField, value: Decimal) -> Self {
        let mut next = self;
        match field {
            ParameterField::EquipmentDepreciation => next.equipment_depreciation_pct = value,
            ParameterField::EnergyCost => next.energy_cost_per_kwh = value,
            ParameterField::AuthorRoyalty => next.author_royalty_pct = value,
            ParameterField::AdminOverhead => next.admin_overhead_pct = value,
        }
        next
    }
}

/// Editable coefficient, in the order the editor shows them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterField {
    EquipmentDepreciation,
    EnergyCost,
    AuthorRoyalty,
    AdminOverhead,
}

impl ParameterField {
    pub const ALL: [ParameterField; 4] = [
        ParameterField::EquipmentDepreciation,
        ParameterField::EnergyCost,
        ParameterField::AuthorRoyalty,
        ParameterField::AdminOverhead,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::EquipmentDepreciation => "Equipment depreciation (%)",
            Self::EnergyCost => "Energy cost ($/kWh)",
            Self::AuthorRoyalty => "Author royalties (%)",
            Self::AdminOverhead => "Administrative costs (%)",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Self::EquipmentDepreciation => "Depreciation percentage applied to the base cost",
            Self::EnergyCost => "Cost per kilowatt-hour of electricity",
            Self::AuthorRoyalty => "Percentage of the base cost paid as author royalties",
            Self::AdminOverhead => "Percentage of the base cost charged for administration",
        }
    }
}

/// Singleton record holding the global cost coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CostParameters {
    pub id: Uuid,
    pub equipment_depreciation_pct: Decimal,
    pub energy_cost_per_kwh: Decimal,
    pub author_royalty_pct: Decimal,
    pub admin_overhead_pct: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl CostParameters {
    pub fn coefficients(&self) -> CostCoefficients {
        CostCoefficients {
            equipment_depreciation_pct: self.equipment_depreciation_pct,
            energy_cost_per_kwh: self.energy_cost_per_kwh,
            author_royalty_pct: self.author_royalty_pct,
            admin_overhead_pct: self.admin_overhead_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> CostCoefficients {
        CostCoefficients {
            equipment_depreciation_pct: Decimal::new(5, 0),
            energy_cost_per_kwh: Decimal::new(12, 2),
            author_royalty_pct: Decimal::new(10, 0),
            admin_overhead_pct: Decimal::new(15, 0),
        }
    }

    #[test]
    fn test_coefficients_validate() {
        assert!(defaults().validate().is_ok());

        let negative = defaults().with(ParameterField::AuthorRoyalty, Decimal::new(-1, 0));
        let err = negative.validate().unwrap_err();
        assert!(err.to_string().contains("author_royalty_pct"));
    }

    #[test]
    fn test_zero_coefficients_allowed() {
        let zeroed = ParameterField::ALL
            .iter()
            .fold(defaults(), |c, f| c.with(*f, Decimal::ZERO));
        assert!(zeroed.validate().is_ok());
    }

    #[test]
    fn test_with_replaces_only_one_field() {
        let edited = defaults().with(ParameterField::EnergyCost, Decimal::new(20, 2));
        assert_eq!(edited.energy_cost_per_kwh, Decimal::new(20, 2));
        assert_eq!(edited.equipment_depreciation_pct, Decimal::new(5, 0));
        assert_eq!(edited.get(ParameterField::EnergyCost), Decimal::new(20, 2));
    }

    #[test]
    fn test_parameters_expose_coefficients() {
        let c = defaults();
        let params = CostParameters {
            id: Uuid::new_v4(),
            equipment_depreciation_pct: c.equipment_depreciation_pct,
            energy_cost_per_kwh: c.energy_cost_per_kwh,
            author_royalty_pct: c.author_royalty_pct,
            admin_overhead_pct: c.admin_overhead_pct,
            updated_at: Utc::now(),
        };
        assert_eq!(params.coefficients(), c);
    }
}
