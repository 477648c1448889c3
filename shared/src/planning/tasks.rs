//! Task extraction for a date range
//!
//! Turns activity windows into dated task events (planting, harvest start,
//! harvest end) and keeps only those within an inclusive range. Which week
//! counts as "this week" is decided by the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::consolidation::AnnotatedActivityWindow;
use super::error::{PlanningError, PlanningResult};
use crate::types::DateRange;

/// Kind of field task
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Planting,
    HarvestStart,
    HarvestEnd,
}

impl TaskKind {
    /// Portuguese label shown to growers
    pub fn label_pt(&self) -> &'static str {
        match self {
            TaskKind::Planting => "Plantio",
            TaskKind::HarvestStart => "Início da colheita",
            TaskKind::HarvestEnd => "Fim da colheita",
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskKind::Planting => write!(f, "Planting"),
            TaskKind::HarvestStart => write!(f, "Harvest start"),
            TaskKind::HarvestEnd => write!(f, "Harvest end"),
        }
    }
}

/// A dated task for one module of a cultivation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskEvent {
    pub date: NaiveDate,
    pub kind: TaskKind,
    pub garden_id: Uuid,
    pub garden_name: String,
    pub cultivation_id: Uuid,
    pub vegetable_id: Uuid,
    pub vegetable_name: String,
    pub module: u32,
}

impl TaskEvent {
    fn from_window(entry: &AnnotatedActivityWindow, kind: TaskKind, date: NaiveDate) -> Self {
        Self {
            date,
            kind,
            garden_id: entry.garden_id,
            garden_name: entry.garden_name.clone(),
            cultivation_id: entry.cultivation_id,
            vegetable_id: entry.vegetable_id,
            vegetable_name: entry.vegetable_name.clone(),
            module: entry.window.module,
        }
    }
}

/// Collect the tasks of `windows` falling within `range` (bounds included).
///
/// Events are ordered by date, then garden, vegetable and module. Events
/// still tied after that (zero-length phases) keep planting, harvest start,
/// harvest end order.
pub fn filter_by_week(
    windows: &[AnnotatedActivityWindow],
    range: &DateRange,
) -> PlanningResult<Vec<TaskEvent>> {
    if range.is_inverted() {
        return Err(PlanningError::invalid_input(
            "week",
            format!("range start {} is after its end {}", range.start, range.end),
        ));
    }

    let mut events: Vec<TaskEvent> = windows
        .iter()
        .flat_map(|entry| {
            let w = &entry.window;
            [
                (TaskKind::Planting, w.planting_date),
                (TaskKind::HarvestStart, w.harvest_start_date),
                (TaskKind::HarvestEnd, w.harvest_end_date),
            ]
            .into_iter()
            .filter(move |(_, date)| range.contains(*date))
            .map(move |(kind, date)| TaskEvent::from_window(entry, kind, date))
        })
        .collect();

    events.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.garden_name.cmp(&b.garden_name))
            .then_with(|| a.garden_id.cmp(&b.garden_id))
            .then_with(|| a.vegetable_name.cmp(&b.vegetable_name))
            .then_with(|| a.vegetable_id.cmp(&b.vegetable_id))
            .then_with(|| a.module.cmp(&b.module))
    });

    Ok(events)
}
