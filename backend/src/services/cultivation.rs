//! Cultivation management service
//!
//! Stores cultivations and fills their total area once, at creation. Later
//! changes to the module count leave the stored area untouched.

use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{
    parse_iso_date, resolve_total_area, validate_desired_weekly_yield, validate_module_count,
    Cultivation,
};
use sqlx::PgPool;
use uuid::Uuid;

use super::{ensure, GardenService, VegetableService};
use crate::error::{AppError, AppResult};

/// Cultivation service for managing active cultivations
#[derive(Clone)]
pub struct CultivationService {
    db: PgPool,
}

/// Input for creating a cultivation
#[derive(Debug, Deserialize)]
pub struct CreateCultivationInput {
    pub garden_id: Uuid,
    pub vegetable_id: Uuid,
    /// ISO-8601 date (YYYY-MM-DD)
    pub start_date: Option<String>,
    pub desired_weekly_yield: Decimal,
    pub module_count: i32,
}

/// Input for updating a cultivation
#[derive(Debug, Deserialize)]
pub struct UpdateCultivationInput {
    pub garden_id: Option<Uuid>,
    pub vegetable_id: Option<Uuid>,
    pub start_date: Option<String>,
    pub desired_weekly_yield: Option<Decimal>,
    pub module_count: Option<i32>,
}

/// Filter for listing cultivations
#[derive(Debug, Default, Deserialize)]
pub struct CultivationFilter {
    pub garden_id: Option<Uuid>,
}

fn validate_plan(module_count: i32, desired_weekly_yield: Decimal) -> AppResult<()> {
    ensure(
        "module_count",
        validate_module_count(module_count),
        "O cultivo deve ter entre 1 e 10000 módulos",
    )?;
    ensure(
        "desired_weekly_yield",
        validate_desired_weekly_yield(desired_weekly_yield),
        "A produção semanal desejada deve ser maior que zero",
    )
}

impl CultivationService {
    /// Create a new CultivationService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get cultivations, optionally restricted to one garden.
    ///
    /// Ordered by creation so that calendars built from this list enumerate
    /// cultivations the same way on every call.
    pub async fn get_cultivations(&self, filter: &CultivationFilter) -> AppResult<Vec<Cultivation>> {
        let cultivations = sqlx::query_as::<_, Cultivation>(
            r#"
            SELECT id, garden_id, vegetable_id, start_date, module_count,
                   desired_weekly_yield, total_area_m2, created_at
            FROM cultivations
            WHERE ($1::uuid IS NULL OR garden_id = $1)
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(filter.garden_id)
        .fetch_all(&self.db)
        .await?;

        Ok(cultivations)
    }

    /// Get a cultivation by ID
    pub async fn get_cultivation(&self, cultivation_id: Uuid) -> AppResult<Cultivation> {
        sqlx::query_as::<_, Cultivation>(
            r#"
            SELECT id, garden_id, vegetable_id, start_date, module_count,
                   desired_weekly_yield, total_area_m2, created_at
            FROM cultivations
            WHERE id = $1
            "#,
        )
        .bind(cultivation_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Cultivation".to_string()))
    }

    /// Create a new cultivation, filling its total area from the template
    pub async fn create_cultivation(&self, input: CreateCultivationInput) -> AppResult<Cultivation> {
        let start_date = parse_iso_date("start_date", input.start_date.as_deref())?;
        validate_plan(input.module_count, input.desired_weekly_yield)?;

        GardenService::new(self.db.clone())
            .get_garden(input.garden_id)
            .await?;
        let template = VegetableService::new(self.db.clone())
            .get_vegetable(input.vegetable_id)
            .await?;

        let total_area = resolve_total_area(None, input.module_count, template.module_area_m2);

        let cultivation = sqlx::query_as::<_, Cultivation>(
            r#"
            INSERT INTO cultivations (
                id, garden_id, vegetable_id, start_date, desired_weekly_yield,
                module_count, total_area_m2
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, garden_id, vegetable_id, start_date, module_count,
                      desired_weekly_yield, total_area_m2, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(input.garden_id)
        .bind(input.vegetable_id)
        .bind(start_date)
        .bind(input.desired_weekly_yield)
        .bind(input.module_count)
        .bind(total_area)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(
            cultivation_id = %cultivation.id,
            garden_id = %cultivation.garden_id,
            vegetable = %template.name,
            modules = cultivation.module_count,
            total_area_m2 = %total_area,
            "Cultivation created"
        );
        Ok(cultivation)
    }

    /// Update a cultivation. A stored total area is never recomputed.
    pub async fn update_cultivation(
        &self,
        cultivation_id: Uuid,
        input: UpdateCultivationInput,
    ) -> AppResult<Cultivation> {
        let existing = self.get_cultivation(cultivation_id).await?;

        let start_date = match input.start_date.as_deref() {
            Some(raw) => parse_iso_date("start_date", Some(raw))?,
            None => existing.start_date,
        };
        let module_count = input.module_count.unwrap_or(existing.module_count);
        let desired_weekly_yield = input
            .desired_weekly_yield
            .unwrap_or(existing.desired_weekly_yield);
        validate_plan(module_count, desired_weekly_yield)?;

        let garden_id = input.garden_id.unwrap_or(existing.garden_id);
        if garden_id != existing.garden_id {
            GardenService::new(self.db.clone()).get_garden(garden_id).await?;
        }
        let vegetable_id = input.vegetable_id.unwrap_or(existing.vegetable_id);
        let template = VegetableService::new(self.db.clone())
            .get_vegetable(vegetable_id)
            .await?;

        let total_area =
            resolve_total_area(existing.total_area_m2, module_count, template.module_area_m2);

        let cultivation = sqlx::query_as::<_, Cultivation>(
            r#"
            UPDATE cultivations
            SET garden_id = $2, vegetable_id = $3, start_date = $4,
                desired_weekly_yield = $5, module_count = $6, total_area_m2 = $7,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, garden_id, vegetable_id, start_date, module_count,
                      desired_weekly_yield, total_area_m2, created_at
            "#,
        )
        .bind(cultivation_id)
        .bind(garden_id)
        .bind(vegetable_id)
        .bind(start_date)
        .bind(desired_weekly_yield)
        .bind(module_count)
        .bind(total_area)
        .fetch_one(&self.db)
        .await?;

        Ok(cultivation)
    }

    /// Delete a cultivation and its harvest logs
    pub async fn delete_cultivation(&self, cultivation_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM cultivations WHERE id = $1")
            .bind(cultivation_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Cultivation".to_string()));
        }

        tracing::info!(cultivation_id = %cultivation_id, "Cultivation deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MAX_MODULES;

    #[test]
    fn test_validate_plan_bounds_module_count() {
        let yield_kg = Decimal::from(20);
        assert!(validate_plan(1, yield_kg).is_ok());
        assert!(validate_plan(MAX_MODULES, yield_kg).is_ok());
        assert!(matches!(validate_plan(0, yield_kg), Err(AppError::Validation { .. })));
        assert!(matches!(
            validate_plan(i32::MAX, yield_kg),
            Err(AppError::Validation { .. })
        ));
    }
}
