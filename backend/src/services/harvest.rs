//! Harvest log service for recording what each cultivation produced

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use shared::{validate_harvest_quantity, HarvestLog};
use sqlx::PgPool;
use uuid::Uuid;

use super::{ensure, CultivationService};
use crate::error::{AppError, AppResult};

/// Harvest service for managing harvest logs
#[derive(Clone)]
pub struct HarvestService {
    db: PgPool,
}

/// Input for recording a harvest
#[derive(Debug, Deserialize)]
pub struct RecordHarvestInput {
    pub cultivation_id: Option<Uuid>,
    pub harvest_date: NaiveDate,
    #[serde(default)]
    pub quantity_harvested: Decimal,
}

/// Input for updating a harvest log.
///
/// `cultivation_id` is tri-state: absent keeps the link, `null` clears it and
/// an id moves the log to that cultivation.
#[derive(Debug, Deserialize)]
pub struct UpdateHarvestInput {
    #[serde(default, deserialize_with = "present")]
    pub cultivation_id: Option<Option<Uuid>>,
    pub harvest_date: Option<NaiveDate>,
    pub quantity_harvested: Option<Decimal>,
}

/// Filter for listing harvest logs
#[derive(Debug, Default, Deserialize)]
pub struct HarvestFilter {
    pub cultivation_id: Option<Uuid>,
}

// Wraps any present value, `null` included, so it differs from an absent field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Cultivation a log points to after an update
fn resolve_cultivation_link(existing: Option<Uuid>, requested: Option<Option<Uuid>>) -> Option<Uuid> {
    requested.unwrap_or(existing)
}

fn validate_quantity(quantity: Decimal) -> AppResult<()> {
    ensure(
        "quantity_harvested",
        validate_harvest_quantity(quantity),
        "A quantidade colhida não pode ser negativa",
    )
}

impl HarvestService {
    /// Create a new HarvestService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get harvest logs, newest first
    pub async fn get_harvests(&self, filter: &HarvestFilter) -> AppResult<Vec<HarvestLog>> {
        let harvests = sqlx::query_as::<_, HarvestLog>(
            r#"
            SELECT id, cultivation_id, harvest_date, quantity_harvested, created_at
            FROM harvest_logs
            WHERE ($1::uuid IS NULL OR cultivation_id = $1)
            ORDER BY harvest_date DESC, created_at DESC
            "#,
        )
        .bind(filter.cultivation_id)
        .fetch_all(&self.db)
        .await?;

        Ok(harvests)
    }

    /// Get a harvest log by ID
    pub async fn get_harvest(&self, harvest_id: Uuid) -> AppResult<HarvestLog> {
        sqlx::query_as::<_, HarvestLog>(
            r#"
            SELECT id, cultivation_id, harvest_date, quantity_harvested, created_at
            FROM harvest_logs
            WHERE id = $1
            "#,
        )
        .bind(harvest_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Harvest".to_string()))
    }

    /// Record a new harvest
    pub async fn record_harvest(&self, input: RecordHarvestInput) -> AppResult<HarvestLog> {
        validate_quantity(input.quantity_harvested)?;

        if let Some(cultivation_id) = input.cultivation_id {
            CultivationService::new(self.db.clone())
                .get_cultivation(cultivation_id)
                .await?;
        }

        let harvest = sqlx::query_as::<_, HarvestLog>(
            r#"
            INSERT INTO harvest_logs (id, cultivation_id, harvest_date, quantity_harvested)
            VALUES ($1, $2, $3, $4)
            RETURNING id, cultivation_id, harvest_date, quantity_harvested, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(input.cultivation_id)
        .bind(input.harvest_date)
        .bind(input.quantity_harvested)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(
            harvest_id = %harvest.id,
            cultivation_id = ?harvest.cultivation_id,
            quantity = %harvest.quantity_harvested,
            "Harvest recorded"
        );
        Ok(harvest)
    }

    /// Update a harvest log
    pub async fn update_harvest(
        &self,
        harvest_id: Uuid,
        input: UpdateHarvestInput,
    ) -> AppResult<HarvestLog> {
        let existing = self.get_harvest(harvest_id).await?;

        let quantity = input
            .quantity_harvested
            .unwrap_or(existing.quantity_harvested);
        validate_quantity(quantity)?;

        let cultivation_id = resolve_cultivation_link(existing.cultivation_id, input.cultivation_id);
        if let Some(id) = cultivation_id.filter(|id| Some(*id) != existing.cultivation_id) {
            CultivationService::new(self.db.clone()).get_cultivation(id).await?;
        }

        let harvest = sqlx::query_as::<_, HarvestLog>(
            r#"
            UPDATE harvest_logs
            SET cultivation_id = $2, harvest_date = $3, quantity_harvested = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, cultivation_id, harvest_date, quantity_harvested, created_at
            "#,
        )
        .bind(harvest_id)
        .bind(cultivation_id)
        .bind(input.harvest_date.unwrap_or(existing.harvest_date))
        .bind(quantity)
        .fetch_one(&self.db)
        .await?;

        Ok(harvest)
    }

    /// Delete a harvest log
    pub async fn delete_harvest(&self, harvest_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM harvest_logs WHERE id = $1")
            .bind(harvest_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Harvest".to_string()));
        }

        Ok(())
    }
}
