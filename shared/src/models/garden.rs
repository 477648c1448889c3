//! Garden (horta) models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::GardenRef;

/// A physical cultivation plot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Garden {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    /// Total garden area in m²
    pub total_area_m2: Option<Decimal>,
    /// Estimated water use in m³ per month
    pub estimated_water_use_m3_month: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Garden {
    pub fn to_ref(&self) -> GardenRef {
        GardenRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}
