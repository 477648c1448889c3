//! Harvest log models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded quantity harvested on a date (colheita)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct HarvestLog {
    pub id: Uuid,
    /// The cultivation harvested from, if any. Logs are deleted with their cultivation.
    pub cultivation_id: Option<Uuid>,
    pub harvest_date: NaiveDate,
    /// Quantity harvested (kg or units)
    pub quantity_harvested: Decimal,
    pub created_at: DateTime<Utc>,
}
