//! Validation utilities for the garden planner

use rust_decimal::Decimal;

use crate::models::VegetableTemplate;

// ============================================================================
// Template Validations
// ============================================================================

/// Validate that a cycle length in weeks is not negative
pub fn validate_week_count(weeks: i32) -> Result<(), &'static str> {
    if weeks < 0 {
        return Err("Week counts cannot be negative");
    }
    Ok(())
}

/// Validate every cycle length of a template
pub fn validate_cycle(template: &VegetableTemplate) -> Result<(), &'static str> {
    validate_week_count(template.development_weeks)
        .map_err(|_| "Development weeks cannot be negative")?;
    validate_week_count(template.harvest_weeks).map_err(|_| "Harvest weeks cannot be negative")?;
    validate_week_count(template.cleanup_weeks).map_err(|_| "Cleanup weeks cannot be negative")?;
    validate_week_count(template.planting_interval_weeks)
        .map_err(|_| "Planting interval cannot be negative")?;
    Ok(())
}

/// Validate a spacing or area measure (must be strictly positive)
pub fn validate_positive_measure(value: Decimal) -> Result<(), &'static str> {
    if value <= Decimal::ZERO {
        return Err("Measure must be greater than zero");
    }
    Ok(())
}

/// Validate the expected yield of a module.
///
/// Zero is accepted for storage; such a template simply cannot be dimensioned.
pub fn validate_expected_yield(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO {
        return Err("Expected yield cannot be negative");
    }
    Ok(())
}

// ============================================================================
// Cultivation Validations
// ============================================================================

/// Largest number of modules a single cultivation may be split into
pub const MAX_MODULES: i32 = 10_000;

/// Validate the module count of a stored cultivation (1..=MAX_MODULES)
pub fn validate_module_count(count: i32) -> Result<(), &'static str> {
    if count < 1 {
        return Err("A cultivation needs at least one module");
    }
    if count > MAX_MODULES {
        return Err("A cultivation cannot have more than 10000 modules");
    }
    Ok(())
}

/// Validate the desired weekly yield of a cultivation
pub fn validate_desired_weekly_yield(value: Decimal) -> Result<(), &'static str> {
    if value <= Decimal::ZERO {
        return Err("Desired weekly yield must be greater than zero");
    }
    Ok(())
}

// ============================================================================
// Harvest and Report Validations
// ============================================================================

/// Validate a harvested quantity
pub fn validate_harvest_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity < Decimal::ZERO {
        return Err("Harvested quantity cannot be negative");
    }
    Ok(())
}

/// Validate planned or harvested totals of a report
pub fn validate_report_total(total: Decimal) -> Result<(), &'static str> {
    if total < Decimal::ZERO {
        return Err("Report totals cannot be negative");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlantingMethod;
    use uuid::Uuid;

    fn template(dev: i32, harvest: i32, cleanup: i32, interval: i32) -> VegetableTemplate {
        VegetableTemplate {
            id: Uuid::nil(),
            name: "Rúcula".to_string(),
            planting_method: PlantingMethod::DirectSeed,
            development_weeks: dev,
            harvest_weeks: harvest,
            cleanup_weeks: cleanup,
            row_spacing_m: Decimal::new(20, 2),
            plant_spacing_m: Decimal::new(5, 2),
            expected_yield_per_module: Decimal::from(8),
            module_area_m2: Decimal::from(2),
            planting_interval_weeks: interval,
        }
    }

    #[test]
    fn test_validate_cycle_valid() {
        assert!(validate_cycle(&template(5, 2, 1, 1)).is_ok());
        assert!(validate_cycle(&template(0, 0, 0, 0)).is_ok());
    }

    #[test]
    fn test_validate_cycle_reports_offending_field() {
        assert_eq!(
            validate_cycle(&template(-1, 2, 1, 1)),
            Err("Development weeks cannot be negative")
        );
        assert_eq!(
            validate_cycle(&template(5, 2, 1, -2)),
            Err("Planting interval cannot be negative")
        );
    }

    #[test]
    fn test_validate_positive_measure() {
        assert!(validate_positive_measure(Decimal::new(25, 2)).is_ok());
        assert!(validate_positive_measure(Decimal::ZERO).is_err());
        assert!(validate_positive_measure(Decimal::from(-1)).is_err());
    }

    #[test]
    fn test_validate_expected_yield_allows_zero() {
        assert!(validate_expected_yield(Decimal::ZERO).is_ok());
        assert!(validate_expected_yield(Decimal::from(-1)).is_err());
    }

    #[test]
    fn test_validate_module_count() {
        assert!(validate_module_count(1).is_ok());
        assert!(validate_module_count(0).is_err());
        assert!(validate_module_count(-3).is_err());
        assert!(validate_module_count(MAX_MODULES).is_ok());
        assert!(validate_module_count(MAX_MODULES + 1).is_err());
        assert!(validate_module_count(i32::MAX).is_err());
    }

    #[test]
    fn test_validate_desired_weekly_yield() {
        assert!(validate_desired_weekly_yield(Decimal::from(50)).is_ok());
        assert!(validate_desired_weekly_yield(Decimal::ZERO).is_err());
    }

    #[test]
    fn test_validate_harvest_quantity() {
        assert!(validate_harvest_quantity(Decimal::ZERO).is_ok());
        assert!(validate_harvest_quantity(Decimal::new(125, 1)).is_ok());
        assert!(validate_harvest_quantity(Decimal::from(-2)).is_err());
    }

    #[test]
    fn test_validate_report_total() {
        assert!(validate_report_total(Decimal::from(100)).is_ok());
        assert!(validate_report_total(Decimal::from(-100)).is_err());
    }
}
