//! Cultivation models
//!
//! A cultivation assigns a vegetable template to a garden, starting on a
//! given date and split into staggered growing modules.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An active cultivation (cultivo)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Cultivation {
    pub id: Uuid,
    pub garden_id: Uuid,
    pub vegetable_id: Uuid,
    /// Planting date of the first module
    pub start_date: NaiveDate,
    /// Number of staggered modules
    pub module_count: i32,
    pub desired_weekly_yield: Decimal,
    /// Area occupied by this cultivation in m², filled once at creation
    pub total_area_m2: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Fill the total area of a cultivation if it has not been set yet.
///
/// A stored value is kept as is, even when the module count has changed
/// since. A zero area counts as unset. Negative module counts yield zero.
pub fn resolve_total_area(
    existing: Option<Decimal>,
    module_count: i32,
    module_area_m2: Decimal,
) -> Decimal {
    match existing {
        Some(area) if !area.is_zero() => area,
        _ => Decimal::from(module_count.max(0)) * module_area_m2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_area_filled_when_absent() {
        let area = resolve_total_area(None, 4, Decimal::new(25, 1));
        assert_eq!(area, Decimal::from(10));
    }

    #[test]
    fn test_total_area_filled_when_zero() {
        let area = resolve_total_area(Some(Decimal::ZERO), 3, Decimal::from(2));
        assert_eq!(area, Decimal::from(6));
    }

    #[test]
    fn test_total_area_kept_when_present() {
        let area = resolve_total_area(Some(Decimal::from(12)), 10, Decimal::from(2));
        assert_eq!(area, Decimal::from(12));
    }

    #[test]
    fn test_total_area_is_idempotent() {
        let first = resolve_total_area(None, 5, Decimal::from(3));
        let second = resolve_total_area(Some(first), 8, Decimal::from(3));
        assert_eq!(first, second);
    }
}
