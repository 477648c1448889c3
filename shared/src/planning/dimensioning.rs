//! Module dimensioning
//!
//! Sizes a cultivation from the weekly yield a grower wants: how many
//! modules are needed and how much bed area they occupy.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{PlanningError, PlanningResult};
use crate::models::VegetableTemplate;

/// Result of a dimensioning query
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dimensioning {
    pub required_modules: u32,
    /// Total area in m²
    pub required_area: Decimal,
}

/// Parse the desired weekly yield from its textual form.
///
/// Accepts plain and scientific decimal notation. Missing, blank or
/// non-numeric values (including `NaN` and `inf`) are rejected.
pub fn parse_desired_yield(raw: Option<&str>) -> PlanningResult<Decimal> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| PlanningError::invalid_input("desired", "desired weekly yield is required"))?;

    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| {
            PlanningError::invalid_input("desired", format!("'{}' is not a valid number", raw))
        })
}

/// Convert a floating point yield, rejecting non-finite values
pub fn desired_yield_from_f64(value: f64) -> PlanningResult<Decimal> {
    if !value.is_finite() {
        return Err(PlanningError::invalid_input(
            "desired",
            "desired weekly yield must be a finite number",
        ));
    }
    Decimal::try_from(value).map_err(|_| {
        PlanningError::invalid_input("desired", "desired weekly yield is out of range")
    })
}

/// Compute the modules and area needed to reach `desired_weekly_yield`.
///
/// Partial modules always round up: `required_modules` is the smallest count
/// whose combined expected yield covers the demand.
pub fn dimension(
    template: &VegetableTemplate,
    desired_weekly_yield: Decimal,
) -> PlanningResult<Dimensioning> {
    dimension_modules(
        template.expected_yield_per_module,
        template.module_area_m2,
        desired_weekly_yield,
    )
    .map_err(|err| match err {
        PlanningError::InvalidTemplate(message) => {
            PlanningError::invalid_template(format!("{} ({})", message, template.name))
        }
        other => other,
    })
}

/// Dimensioning from the raw figures of a template
pub fn dimension_modules(
    expected_yield_per_module: Decimal,
    module_area_m2: Decimal,
    desired_weekly_yield: Decimal,
) -> PlanningResult<Dimensioning> {
    if desired_weekly_yield <= Decimal::ZERO {
        return Err(PlanningError::invalid_input(
            "desired",
            "desired weekly yield must be greater than zero",
        ));
    }

    let per_module = expected_yield_per_module;
    if per_module <= Decimal::ZERO {
        return Err(PlanningError::invalid_template(
            "expected yield per module must be greater than zero",
        ));
    }
    if module_area_m2 <= Decimal::ZERO {
        return Err(PlanningError::invalid_template(
            "module area must be greater than zero",
        ));
    }

    let too_large = || PlanningError::invalid_input("desired", "desired weekly yield is too large");

    let mut modules = desired_weekly_yield
        .checked_div(per_module)
        .ok_or_else(too_large)?
        .ceil();

    // Division rounds at 28 digits; settle the ceiling with exact products.
    if modules.checked_mul(per_module).ok_or_else(too_large)? < desired_weekly_yield {
        modules += Decimal::ONE;
    } else if modules > Decimal::ONE
        && (modules - Decimal::ONE).checked_mul(per_module).ok_or_else(too_large)?
            >= desired_weekly_yield
    {
        modules -= Decimal::ONE;
    }

    let required_modules = modules.to_u32().ok_or_else(too_large)?;
    let required_area = Decimal::from(required_modules)
        .checked_mul(module_area_m2)
        .ok_or_else(too_large)?;

    Ok(Dimensioning {
        required_modules,
        required_area,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlantingMethod;
    use uuid::Uuid;

    fn lettuce(expected_yield: Decimal, module_area: Decimal) -> VegetableTemplate {
        VegetableTemplate {
            id: Uuid::nil(),
            name: "Alface".to_string(),
            planting_method: PlantingMethod::Transplant,
            development_weeks: 4,
            harvest_weeks: 2,
            cleanup_weeks: 1,
            row_spacing_m: Decimal::new(25, 2),
            plant_spacing_m: Decimal::new(25, 2),
            expected_yield_per_module: expected_yield,
            module_area_m2: module_area,
            planting_interval_weeks: 2,
        }
    }

    #[test]
    fn test_dimension_rounds_up() {
        let template = lettuce(Decimal::from(15), Decimal::new(25, 1));
        let result = dimension(&template, Decimal::from(100)).unwrap();
        assert_eq!(result.required_modules, 7);
        assert_eq!(result.required_area, Decimal::new(175, 1));
    }

    #[test]
    fn test_dimension_exact_multiple() {
        let template = lettuce(Decimal::from(20), Decimal::from(3));
        let result = dimension(&template, Decimal::from(100)).unwrap();
        assert_eq!(result.required_modules, 5);
        assert_eq!(result.required_area, Decimal::from(15));
    }

    #[test]
    fn test_dimension_small_demand_needs_one_module() {
        let template = lettuce(Decimal::from(15), Decimal::from(2));
        let result = dimension(&template, Decimal::new(1, 1)).unwrap();
        assert_eq!(result.required_modules, 1);
    }

    #[test]
    fn test_dimension_rejects_zero_yield() {
        let template = lettuce(Decimal::from(15), Decimal::from(2));
        let err = dimension(&template, Decimal::ZERO).unwrap_err();
        assert!(matches!(err, PlanningError::InvalidInput { field: "desired", .. }));
    }

    #[test]
    fn test_dimension_rejects_negative_yield() {
        let template = lettuce(Decimal::from(15), Decimal::from(2));
        assert!(matches!(
            dimension(&template, Decimal::from(-3)),
            Err(PlanningError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_dimension_rejects_unproductive_template() {
        let template = lettuce(Decimal::ZERO, Decimal::from(2));
        assert!(matches!(
            dimension(&template, Decimal::from(100)),
            Err(PlanningError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn test_template_error_names_vegetable() {
        let template = lettuce(Decimal::from(-1), Decimal::from(2));
        let err = dimension(&template, Decimal::from(10)).unwrap_err();
        assert!(err.to_string().contains("Alface"));
    }

    #[test]
    fn test_dimension_rejects_non_positive_module_area() {
        for area in [Decimal::ZERO, Decimal::new(-25, 1)] {
            let err = dimension_modules(Decimal::from(15), area, Decimal::from(100)).unwrap_err();
            assert!(matches!(err, PlanningError::InvalidTemplate(_)));
        }

        let template = lettuce(Decimal::from(15), Decimal::ZERO);
        let err = dimension(&template, Decimal::from(100)).unwrap_err();
        assert!(err.to_string().contains("module area"));
        assert!(err.to_string().contains("Alface"));
    }

    #[test]
    fn test_dimension_modules_from_figures() {
        let result =
            dimension_modules(Decimal::from(15), Decimal::new(25, 1), Decimal::from(100)).unwrap();
        assert_eq!(result.required_modules, 7);
    }

    #[test]
    fn test_parse_desired_yield() {
        assert_eq!(parse_desired_yield(Some("100")).unwrap(), Decimal::from(100));
        assert_eq!(parse_desired_yield(Some(" 12.5 ")).unwrap(), Decimal::new(125, 1));
        assert_eq!(parse_desired_yield(Some("1e2")).unwrap(), Decimal::from(100));
    }

    #[test]
    fn test_parse_desired_yield_rejects_garbage() {
        assert!(parse_desired_yield(None).is_err());
        assert!(parse_desired_yield(Some("")).is_err());
        assert!(parse_desired_yield(Some("abc")).is_err());
        assert!(parse_desired_yield(Some("NaN")).is_err());
        assert!(parse_desired_yield(Some("inf")).is_err());
    }

    #[test]
    fn test_desired_yield_from_f64() {
        assert_eq!(desired_yield_from_f64(2.5).unwrap(), Decimal::new(25, 1));
        assert!(desired_yield_from_f64(f64::NAN).is_err());
        assert!(desired_yield_from_f64(f64::INFINITY).is_err());
    }
}
