//! Business logic services for the garden planner

pub mod calendar;
pub mod cultivation;
pub mod garden;
pub mod harvest;
pub mod report;
pub mod vegetable;

pub use calendar::CalendarService;
pub use cultivation::CultivationService;
pub use garden::GardenService;
pub use harvest::HarvestService;
pub use report::ReportService;
pub use vegetable::VegetableService;

use crate::error::{AppError, AppResult};

/// Turn a shared validation outcome into a field error with its translation
pub(crate) fn ensure(
    field: &str,
    outcome: Result<(), &'static str>,
    message_pt: &str,
) -> AppResult<()> {
    outcome.map_err(|message| AppError::validation(field, message, message_pt))
}
