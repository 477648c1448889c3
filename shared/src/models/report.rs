//! Efficiency report models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Production efficiency summary for a garden (relatório)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct EfficiencyReport {
    pub id: Uuid,
    pub garden_id: Uuid,
    pub report_date: NaiveDate,
    pub total_planned: Decimal,
    pub total_harvested: Decimal,
    pub efficiency_percent: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Harvested over planned production, as a percentage.
///
/// Returns zero when nothing was planned.
pub fn calculate_efficiency(total_planned: Decimal, total_harvested: Decimal) -> Decimal {
    if total_planned <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    total_harvested
        .checked_div(total_planned)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_efficiency_basic() {
        assert_eq!(
            calculate_efficiency(Decimal::from(200), Decimal::from(150)),
            Decimal::from(75)
        );
    }

    #[test]
    fn test_efficiency_over_plan() {
        assert_eq!(
            calculate_efficiency(Decimal::from(100), Decimal::from(120)),
            Decimal::from(120)
        );
    }

    #[test]
    fn test_efficiency_without_plan_is_zero() {
        assert_eq!(calculate_efficiency(Decimal::ZERO, Decimal::from(10)), Decimal::ZERO);
        assert_eq!(calculate_efficiency(Decimal::from(-5), Decimal::from(10)), Decimal::ZERO);
    }
}
