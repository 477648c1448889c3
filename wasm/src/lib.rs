//! WebAssembly module for the Horta Fácil garden planner
//!
//! Provides client-side computation for:
//! - Module dimensioning
//! - Single-cultivation activity calendars
//! - Weekly task lists over a synced calendar
//!
//! Every export exchanges JSON strings; errors are returned as message strings.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use shared::{
    build_schedule, desired_yield_from_f64, dimension_modules, filter_by_week, parse_iso_date,
    AnnotatedActivityWindow, Cultivation, DateRange, PlanningError, VegetableTemplate,
};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

fn to_js_error(message: String) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// Modules and area needed for a desired weekly yield
#[wasm_bindgen]
pub fn calculate_dimensioning(
    expected_yield_per_module: f64,
    module_area_m2: f64,
    desired: f64,
) -> Result<String, JsValue> {
    dimensioning_json(expected_yield_per_module, module_area_m2, desired).map_err(to_js_error)
}

/// Activity calendar of one cultivation
#[wasm_bindgen]
pub fn build_schedule_json(cultivation_json: &str, template_json: &str) -> Result<String, JsValue> {
    schedule_json(cultivation_json, template_json).map_err(to_js_error)
}

/// Tasks of a synced calendar falling between `start` and `end` (inclusive)
#[wasm_bindgen]
pub fn weekly_tasks_json(windows_json: &str, start: &str, end: &str) -> Result<String, JsValue> {
    tasks_json(windows_json, start, end).map_err(to_js_error)
}

/// The current week on the device clock, as `{start, end}`
#[wasm_bindgen]
pub fn current_week_json(week_start: &str) -> Result<String, JsValue> {
    let now = js_sys::Date::new_0();
    let today = NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .ok_or_else(|| to_js_error("Device clock returned an invalid date".to_string()))?;

    week_json(today, week_start).map_err(to_js_error)
}

fn decimal_figure(value: f64, what: &str) -> Result<Decimal, String> {
    if !value.is_finite() {
        return Err(PlanningError::invalid_template(format!("{} must be a finite number", what)).to_string());
    }
    Decimal::try_from(value)
        .map_err(|_| PlanningError::invalid_template(format!("{} is out of range", what)).to_string())
}

fn dimensioning_json(expected: f64, area: f64, desired: f64) -> Result<String, String> {
    let expected = decimal_figure(expected, "expected yield per module")?;
    let area = decimal_figure(area, "module area")?;
    let desired = desired_yield_from_f64(desired).map_err(|e| e.to_string())?;

    let result = dimension_modules(expected, area, desired).map_err(|e| e.to_string())?;
    serde_json::to_string(&result).map_err(|e| format!("Serialization error: {}", e))
}

fn schedule_json(cultivation_json: &str, template_json: &str) -> Result<String, String> {
    let cultivation: Cultivation = serde_json::from_str(cultivation_json)
        .map_err(|e| format!("Invalid cultivation JSON: {}", e))?;
    let template: VegetableTemplate = serde_json::from_str(template_json)
        .map_err(|e| format!("Invalid template JSON: {}", e))?;

    let windows = build_schedule(&cultivation, &template).map_err(|e| e.to_string())?;
    serde_json::to_string(&windows).map_err(|e| format!("Serialization error: {}", e))
}

fn tasks_json(windows_json: &str, start: &str, end: &str) -> Result<String, String> {
    let windows: Vec<AnnotatedActivityWindow> = serde_json::from_str(windows_json)
        .map_err(|e| format!("Invalid calendar JSON: {}", e))?;
    let start = parse_iso_date("start", Some(start)).map_err(|e| e.to_string())?;
    let end = parse_iso_date("end", Some(end)).map_err(|e| e.to_string())?;

    let tasks = filter_by_week(&windows, &DateRange::new(start, end)).map_err(|e| e.to_string())?;
    serde_json::to_string(&tasks).map_err(|e| format!("Serialization error: {}", e))
}

fn week_json(today: NaiveDate, week_start: &str) -> Result<String, String> {
    let week_start: Weekday = week_start
        .trim()
        .parse()
        .map_err(|_| format!("Unknown week start day: {}", week_start))?;
    let week = DateRange::week_containing(today, week_start)
        .ok_or_else(|| "Week falls outside the supported calendar".to_string())?;

    serde_json::to_string(&week).map_err(|e| format!("Serialization error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const TEMPLATE: &str = r#"{
        "id": "00000000-0000-0000-0000-000000000007",
        "name": "Alface",
        "planting_method": "transplant",
        "development_weeks": 4,
        "harvest_weeks": 2,
        "cleanup_weeks": 1,
        "row_spacing_m": "0.25",
        "plant_spacing_m": "0.25",
        "expected_yield_per_module": "15",
        "module_area_m2": "2.5",
        "planting_interval_weeks": 2
    }"#;

    fn cultivation(module_count: i32) -> String {
        format!(
            r#"{{
                "id": "00000000-0000-0000-0000-000000000042",
                "garden_id": "00000000-0000-0000-0000-000000000001",
                "vegetable_id": "00000000-0000-0000-0000-000000000007",
                "start_date": "2024-01-01",
                "module_count": {},
                "desired_weekly_yield": "30",
                "total_area_m2": null,
                "created_at": "2024-01-01T00:00:00Z"
            }}"#,
            module_count
        )
    }

    #[test]
    fn test_dimensioning() {
        let json: Value = serde_json::from_str(&dimensioning_json(15.0, 2.5, 100.0).unwrap()).unwrap();
        assert_eq!(json["required_modules"], 7);
    }

    #[test]
    fn test_dimensioning_errors() {
        assert!(dimensioning_json(15.0, 2.5, 0.0).unwrap_err().contains("desired"));
        assert!(dimensioning_json(0.0, 2.5, 100.0).unwrap_err().contains("Invalid template"));
        assert!(dimensioning_json(15.0, -2.5, 100.0).unwrap_err().contains("module area"));
        assert!(dimensioning_json(15.0, 0.0, 100.0).unwrap_err().contains("Invalid template"));
        assert!(dimensioning_json(f64::NAN, 2.5, 100.0).is_err());
        assert!(dimensioning_json(15.0, 2.5, f64::INFINITY).is_err());
    }

    #[test]
    fn test_schedule() {
        let json: Value = serde_json::from_str(&schedule_json(&cultivation(3), TEMPLATE).unwrap()).unwrap();
        let windows = json.as_array().unwrap();
        assert_eq!(windows.len(), 3);
        assert_eq!(windows[1]["planting_date"], "2024-01-15");
        assert_eq!(windows[1]["harvest_start_date"], "2024-02-12");
        assert_eq!(windows[1]["harvest_end_date"], "2024-02-26");
        assert_eq!(windows[1]["cleanup_end_date"], "2024-03-04");
    }

    #[test]
    fn test_schedule_rejects_negative_modules() {
        let err = schedule_json(&cultivation(-1), TEMPLATE).unwrap_err();
        assert!(err.contains("module_count"));
    }

    #[test]
    fn test_schedule_rejects_bad_json() {
        assert!(schedule_json("{}", TEMPLATE).unwrap_err().starts_with("Invalid cultivation JSON"));
    }

    #[test]
    fn test_weekly_tasks() {
        let windows = r#"[{
            "garden_id": "00000000-0000-0000-0000-000000000001",
            "garden_name": "Horta Escola",
            "cultivation_id": "00000000-0000-0000-0000-000000000042",
            "vegetable_id": "00000000-0000-0000-0000-000000000007",
            "vegetable_name": "Alface",
            "module": 1,
            "planting_date": "2024-01-08",
            "harvest_start_date": "2024-02-05",
            "harvest_end_date": "2024-02-19",
            "cleanup_end_date": "2024-02-26"
        }]"#;

        let json: Value =
            serde_json::from_str(&tasks_json(windows, "2024-01-08", "2024-01-14").unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["kind"], "planting");

        let json: Value =
            serde_json::from_str(&tasks_json(windows, "2024-01-01", "2024-01-07").unwrap()).unwrap();
        assert!(json.as_array().unwrap().is_empty());

        assert!(tasks_json(windows, "2024-01-14", "2024-01-08").is_err());
        assert!(tasks_json(windows, "14/01/2024", "2024-01-20").is_err());
    }

    #[test]
    fn test_week_json() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let json: Value = serde_json::from_str(&week_json(today, "monday").unwrap()).unwrap();
        assert_eq!(json["start"], "2024-01-08");
        assert_eq!(json["end"], "2024-01-14");

        assert!(week_json(today, "someday").is_err());
    }
}
