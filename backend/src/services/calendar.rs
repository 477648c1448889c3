//! Calendar service
//!
//! Loads cultivation snapshots from storage and hands them to the pure
//! planning core: per-cultivation calendars, the consolidated calendar and
//! the weekly task list.

use std::collections::HashMap;

use chrono::{NaiveDate, Weekday};
use serde::Serialize;
use shared::{
    build_schedule, consolidate, filter_by_week, parse_iso_date, ActivityWindow,
    AnnotatedActivityWindow, CultivationSnapshot, DateRange, PlanningError, TaskEvent,
};
use sqlx::PgPool;
use uuid::Uuid;

use super::cultivation::CultivationFilter;
use super::{CultivationService, GardenService, VegetableService};
use crate::error::{AppError, AppResult};

/// Calendar service
#[derive(Clone)]
pub struct CalendarService {
    db: PgPool,
}

/// Tasks due in one week
#[derive(Debug, Serialize)]
pub struct WeeklyTasks {
    pub week: DateRange,
    pub tasks: Vec<TaskEvent>,
}

/// Flat row of the weekly task export
#[derive(Debug, Serialize)]
pub struct TaskExportRow<'a> {
    pub date: NaiveDate,
    pub task: &'static str,
    pub garden: &'a str,
    pub vegetable: &'a str,
    pub module: u32,
}

impl CalendarService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Activity calendar of a single cultivation, in module order
    pub async fn get_cultivation_calendar(&self, cultivation_id: Uuid) -> AppResult<Vec<ActivityWindow>> {
        let cultivation = CultivationService::new(self.db.clone())
            .get_cultivation(cultivation_id)
            .await?;
        let template = VegetableService::new(self.db.clone())
            .get_vegetable(cultivation.vegetable_id)
            .await?;

        Ok(build_schedule(&cultivation, &template)?)
    }

    /// Calendar of every cultivation, sorted by planting date
    pub async fn get_consolidated_calendar(&self) -> AppResult<Vec<AnnotatedActivityWindow>> {
        let snapshots = self.load_snapshots().await?;
        let timeline = consolidate(&snapshots)?;

        tracing::debug!(
            cultivations = snapshots.len(),
            windows = timeline.len(),
            "Consolidated calendar built"
        );
        Ok(timeline)
    }

    /// Tasks of the week containing `week_of` (today when absent)
    pub async fn get_weekly_tasks(
        &self,
        week_of: Option<&str>,
        week_start: Weekday,
        today: NaiveDate,
    ) -> AppResult<WeeklyTasks> {
        let week = week_bounds(week_of, week_start, today)?;
        let timeline = self.get_consolidated_calendar().await?;
        let tasks = filter_by_week(&timeline, &week)?;

        tracing::info!(
            week_start = %week.start,
            week_end = %week.end,
            tasks = tasks.len(),
            "Weekly tasks computed"
        );
        Ok(WeeklyTasks { week, tasks })
    }

    /// Snapshots of every cultivation in storage order
    async fn load_snapshots(&self) -> AppResult<Vec<CultivationSnapshot>> {
        let cultivations = CultivationService::new(self.db.clone())
            .get_cultivations(&CultivationFilter::default())
            .await?;
        let templates: HashMap<Uuid, _> = VegetableService::new(self.db.clone())
            .get_vegetables()
            .await?
            .into_iter()
            .map(|template| (template.id, template))
            .collect();
        let gardens: HashMap<Uuid, _> = GardenService::new(self.db.clone())
            .get_gardens()
            .await?
            .into_iter()
            .map(|garden| (garden.id, garden.to_ref()))
            .collect();

        cultivations
            .into_iter()
            .map(|cultivation| -> AppResult<CultivationSnapshot> {
                let template = templates
                    .get(&cultivation.vegetable_id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound("Vegetable".to_string()))?;
                let garden = gardens
                    .get(&cultivation.garden_id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound("Garden".to_string()))?;
                Ok(CultivationSnapshot {
                    cultivation,
                    template,
                    garden,
                })
            })
            .collect()
    }

    /// Export weekly tasks as CSV
    pub fn export_to_csv(tasks: &[TaskEvent]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for task in tasks {
            let row = TaskExportRow {
                date: task.date,
                task: task.kind.label_pt(),
                garden: &task.garden_name,
                vegetable: &task.vegetable_name,
                module: task.module,
            };
            wtr.serialize(row)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}

/// Resolve the requested week. The week is a caller policy: it starts on the
/// configured weekday and spans seven days.
pub fn week_bounds(week_of: Option<&str>, week_start: Weekday, today: NaiveDate) -> AppResult<DateRange> {
    let reference = match week_of {
        Some(raw) => parse_iso_date("week_of", Some(raw))?,
        None => today,
    };

    DateRange::week_containing(reference, week_start).ok_or_else(|| {
        AppError::from(PlanningError::invalid_input(
            "week_of",
            "week falls outside the supported calendar",
        ))
    })
}
