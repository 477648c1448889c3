//! Cultivation scheduling
//!
//! Derives the activity calendar of each module of a cultivation. Module
//! plantings are staggered by the template's planting interval; within a
//! module the development, harvest and cleanup phases follow back to back.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::{PlanningError, PlanningResult};
use crate::models::{Cultivation, VegetableTemplate};
use crate::validation::{validate_cycle, MAX_MODULES};

/// Textual date format exchanged with clients
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Activity dates of one module of a cultivation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityWindow {
    /// 1-based module index
    pub module: u32,
    pub planting_date: NaiveDate,
    pub harvest_start_date: NaiveDate,
    pub harvest_end_date: NaiveDate,
    /// End of bed preparation, the earliest date the slot can be replanted
    pub cleanup_end_date: NaiveDate,
}

impl ActivityWindow {
    /// Cleanup begins as soon as the harvest window closes
    pub fn cleanup_start_date(&self) -> NaiveDate {
        self.harvest_end_date
    }
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`)
pub fn parse_iso_date(field: &'static str, raw: Option<&str>) -> PlanningResult<NaiveDate> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| PlanningError::invalid_input(field, "date is required"))?;

    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        PlanningError::invalid_input(field, format!("'{}' is not a valid YYYY-MM-DD date", raw))
    })
}

/// Build the per-module calendar of a cultivation
pub fn build_schedule(
    cultivation: &Cultivation,
    template: &VegetableTemplate,
) -> PlanningResult<Vec<ActivityWindow>> {
    schedule_modules(cultivation.start_date, cultivation.module_count, template)
}

/// Build the calendar of `module_count` modules, the first planted on
/// `start_date`.
///
/// Zero modules give an empty calendar. A zero planting interval plants every
/// module on the same date.
pub fn schedule_modules(
    start_date: NaiveDate,
    module_count: i32,
    template: &VegetableTemplate,
) -> PlanningResult<Vec<ActivityWindow>> {
    let module_count = u32::try_from(module_count).map_err(|_| {
        PlanningError::invalid_input("module_count", "module count cannot be negative")
    })?;
    if module_count > MAX_MODULES.unsigned_abs() {
        return Err(PlanningError::invalid_input(
            "module_count",
            format!("module count cannot exceed {}", MAX_MODULES),
        ));
    }
    validate_cycle(template).map_err(PlanningError::invalid_template)?;

    let interval = week_count(template.planting_interval_weeks);
    let development = week_count(template.development_weeks);
    let harvest = week_count(template.harvest_weeks);
    let cleanup = week_count(template.cleanup_weeks);

    (0..module_count)
        .map(|i| {
            let planting_date = add_weeks(start_date, u64::from(i) * interval)?;
            let harvest_start_date = add_weeks(planting_date, development)?;
            let harvest_end_date = add_weeks(harvest_start_date, harvest)?;
            let cleanup_end_date = add_weeks(harvest_end_date, cleanup)?;

            Ok(ActivityWindow {
                module: i + 1,
                planting_date,
                harvest_start_date,
                harvest_end_date,
                cleanup_end_date,
            })
        })
        .collect()
}

// Callers validate the cycle first, so negative counts never reach here.
fn week_count(weeks: i32) -> u64 {
    u64::try_from(weeks).unwrap_or(0)
}

fn add_weeks(date: NaiveDate, weeks: u64) -> PlanningResult<NaiveDate> {
    weeks
        .checked_mul(7)
        .and_then(|days| date.checked_add_days(Days::new(days)))
        .ok_or_else(|| {
            PlanningError::invalid_input("start_date", "schedule runs past the supported calendar")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlantingMethod;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn template(dev: i32, harvest: i32, cleanup: i32, interval: i32) -> VegetableTemplate {
        VegetableTemplate {
            id: Uuid::nil(),
            name: "Alface".to_string(),
            planting_method: PlantingMethod::Transplant,
            development_weeks: dev,
            harvest_weeks: harvest,
            cleanup_weeks: cleanup,
            row_spacing_m: Decimal::new(25, 2),
            plant_spacing_m: Decimal::new(25, 2),
            expected_yield_per_module: Decimal::from(15),
            module_area_m2: Decimal::new(25, 1),
            planting_interval_weeks: interval,
        }
    }

    fn cultivation(start: NaiveDate, modules: i32) -> Cultivation {
        Cultivation {
            id: Uuid::nil(),
            garden_id: Uuid::nil(),
            vegetable_id: Uuid::nil(),
            start_date: start,
            module_count: modules,
            desired_weekly_yield: Decimal::from(30),
            total_area_m2: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_schedule_staggered_modules() {
        let schedule =
            build_schedule(&cultivation(date(2024, 1, 1), 3), &template(4, 2, 1, 2)).unwrap();

        assert_eq!(schedule.len(), 3);
        let second = schedule[1];
        assert_eq!(second.module, 2);
        assert_eq!(second.planting_date, date(2024, 1, 15));
        assert_eq!(second.harvest_start_date, date(2024, 2, 12));
        assert_eq!(second.harvest_end_date, date(2024, 2, 26));
        assert_eq!(second.cleanup_end_date, date(2024, 3, 4));
        assert_eq!(second.cleanup_start_date(), date(2024, 2, 26));
    }

    #[test]
    fn test_schedule_first_module_starts_on_start_date() {
        let schedule =
            build_schedule(&cultivation(date(2024, 3, 6), 2), &template(4, 2, 1, 2)).unwrap();
        assert_eq!(schedule[0].module, 1);
        assert_eq!(schedule[0].planting_date, date(2024, 3, 6));
    }

    #[test]
    fn test_schedule_zero_modules_is_empty() {
        let schedule =
            build_schedule(&cultivation(date(2024, 1, 1), 0), &template(4, 2, 1, 2)).unwrap();
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_schedule_negative_modules_rejected() {
        let err = build_schedule(&cultivation(date(2024, 1, 1), -1), &template(4, 2, 1, 2))
            .unwrap_err();
        assert!(matches!(err, PlanningError::InvalidInput { field: "module_count", .. }));
    }

    #[test]
    fn test_schedule_module_count_above_limit_rejected() {
        let start = date(2024, 1, 1);
        let err = schedule_modules(start, i32::MAX, &template(4, 2, 1, 0)).unwrap_err();
        assert!(matches!(err, PlanningError::InvalidInput { field: "module_count", .. }));

        let err = schedule_modules(start, MAX_MODULES + 1, &template(4, 2, 1, 0)).unwrap_err();
        assert!(matches!(err, PlanningError::InvalidInput { field: "module_count", .. }));
    }

    #[test]
    fn test_schedule_zero_interval_plants_together() {
        let schedule =
            build_schedule(&cultivation(date(2024, 1, 1), 4), &template(3, 1, 1, 0)).unwrap();
        assert!(schedule.iter().all(|w| w.planting_date == date(2024, 1, 1)));
        let modules: Vec<u32> = schedule.iter().map(|w| w.module).collect();
        assert_eq!(modules, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_schedule_zero_phases_give_equal_dates() {
        let schedule =
            build_schedule(&cultivation(date(2024, 1, 1), 1), &template(0, 0, 0, 1)).unwrap();
        let w = schedule[0];
        assert_eq!(w.planting_date, w.harvest_start_date);
        assert_eq!(w.harvest_start_date, w.harvest_end_date);
        assert_eq!(w.harvest_end_date, w.cleanup_end_date);
    }

    #[test]
    fn test_schedule_negative_cycle_rejected() {
        let err = build_schedule(&cultivation(date(2024, 1, 1), 2), &template(-1, 2, 1, 2))
            .unwrap_err();
        assert!(matches!(err, PlanningError::InvalidTemplate(_)));
    }

    #[test]
    fn test_schedule_past_calendar_end_rejected() {
        let err = build_schedule(&cultivation(NaiveDate::MAX, 1), &template(1, 0, 0, 1))
            .unwrap_err();
        assert!(matches!(err, PlanningError::InvalidInput { .. }));
    }

    #[test]
    fn test_schedule_longest_cycle_errors_without_overflow() {
        let long = template(i32::MAX, i32::MAX, i32::MAX, 1);
        let err = build_schedule(&cultivation(date(2024, 1, 1), 1), &long).unwrap_err();
        assert!(matches!(err, PlanningError::InvalidInput { .. }));
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("start_date", Some("2024-01-01")).unwrap(), date(2024, 1, 1));
        assert!(parse_iso_date("start_date", None).is_err());
        assert!(parse_iso_date("start_date", Some("01/01/2024")).is_err());
        assert!(parse_iso_date("start_date", Some("2024-02-30")).is_err());
    }
}
