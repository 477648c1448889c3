//! Consolidated calendar across cultivations

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::PlanningResult;
use super::schedule::{build_schedule, ActivityWindow};
use crate::models::{Cultivation, VegetableTemplate};
use crate::types::GardenRef;

/// A cultivation together with the template and garden it refers to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CultivationSnapshot {
    pub cultivation: Cultivation,
    pub template: VegetableTemplate,
    pub garden: GardenRef,
}

/// An activity window tagged with the cultivation it belongs to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotatedActivityWindow {
    pub garden_id: Uuid,
    pub garden_name: String,
    pub cultivation_id: Uuid,
    pub vegetable_id: Uuid,
    pub vegetable_name: String,
    #[serde(flatten)]
    pub window: ActivityWindow,
}

/// Schedule a single cultivation and tag each window with its owners.
///
/// Windows stay in module order.
pub fn annotate_schedule(snapshot: &CultivationSnapshot) -> PlanningResult<Vec<AnnotatedActivityWindow>> {
    let windows = build_schedule(&snapshot.cultivation, &snapshot.template)?;

    Ok(windows
        .into_iter()
        .map(|window| AnnotatedActivityWindow {
            garden_id: snapshot.garden.id,
            garden_name: snapshot.garden.name.clone(),
            cultivation_id: snapshot.cultivation.id,
            vegetable_id: snapshot.template.id,
            vegetable_name: snapshot.template.name.clone(),
            window,
        })
        .collect())
}

/// Merge the schedules of every cultivation into one timeline sorted by
/// planting date.
///
/// Equal planting dates keep cultivation-then-module order. Any failing
/// cultivation fails the whole timeline.
pub fn consolidate(snapshots: &[CultivationSnapshot]) -> PlanningResult<Vec<AnnotatedActivityWindow>> {
    let mut timeline = Vec::new();
    for snapshot in snapshots {
        timeline.extend(annotate_schedule(snapshot)?);
    }

    // sort_by_key is stable
    timeline.sort_by_key(|entry| entry.window.planting_date);
    Ok(timeline)
}
