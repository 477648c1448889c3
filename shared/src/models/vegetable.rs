//! Vegetable template models
//!
//! A template is the reusable technical profile of a crop: cycle lengths,
//! spacing and the expected yield of one growing module.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// How a crop is established in the bed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlantingMethod {
    /// Seedlings raised elsewhere and transplanted (mudas)
    Transplant,
    /// Seeds sown directly in the bed (semeadura direta)
    DirectSeed,
}

impl PlantingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantingMethod::Transplant => "transplant",
            PlantingMethod::DirectSeed => "direct_seed",
        }
    }
}

impl std::fmt::Display for PlantingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlantingMethod::Transplant => write!(f, "Transplant"),
            PlantingMethod::DirectSeed => write!(f, "Direct seed"),
        }
    }
}

/// Raised when a stored or submitted planting method is not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown planting method: {0}")]
pub struct UnknownPlantingMethod(pub String);

impl std::str::FromStr for PlantingMethod {
    type Err = UnknownPlantingMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transplant" => Ok(PlantingMethod::Transplant),
            "direct_seed" => Ok(PlantingMethod::DirectSeed),
            other => Err(UnknownPlantingMethod(other.to_string())),
        }
    }
}

impl TryFrom<String> for PlantingMethod {
    type Error = UnknownPlantingMethod;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Growth template for a vegetable (hortaliça)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct VegetableTemplate {
    pub id: Uuid,
    pub name: String,
    #[cfg_attr(feature = "sqlx", sqlx(try_from = "String"))]
    pub planting_method: PlantingMethod,
    /// Weeks from planting until the crop is ready to harvest
    pub development_weeks: i32,
    /// Length of the harvest window in weeks
    pub harvest_weeks: i32,
    /// Weeks needed to clear and prepare the bed after harvest
    pub cleanup_weeks: i32,
    pub row_spacing_m: Decimal,
    pub plant_spacing_m: Decimal,
    /// Expected yield of one module (kg or units)
    pub expected_yield_per_module: Decimal,
    pub module_area_m2: Decimal,
    /// Weeks between successive module plantings
    pub planting_interval_weeks: i32,
}
