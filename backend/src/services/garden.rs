//! Garden management service

use rust_decimal::Decimal;
use serde::Deserialize;
use shared::Garden;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Garden service for managing cultivation plots
#[derive(Clone)]
pub struct GardenService {
    db: PgPool,
}

/// Input for creating a garden
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGardenInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 150))]
    pub location: Option<String>,
    pub total_area_m2: Option<Decimal>,
    pub estimated_water_use_m3_month: Option<Decimal>,
}

/// Input for updating a garden
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGardenInput {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 150))]
    pub location: Option<String>,
    pub total_area_m2: Option<Decimal>,
    pub estimated_water_use_m3_month: Option<Decimal>,
}

fn validate_measures(
    total_area_m2: Option<Decimal>,
    water_use: Option<Decimal>,
) -> AppResult<()> {
    if total_area_m2.is_some_and(|area| area < Decimal::ZERO) {
        return Err(AppError::validation(
            "total_area_m2",
            "Garden area cannot be negative",
            "A área da horta não pode ser negativa",
        ));
    }
    if water_use.is_some_and(|water| water < Decimal::ZERO) {
        return Err(AppError::validation(
            "estimated_water_use_m3_month",
            "Water use cannot be negative",
            "O consumo de água não pode ser negativo",
        ));
    }
    Ok(())
}

impl GardenService {
    /// Create a new GardenService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all gardens
    pub async fn get_gardens(&self) -> AppResult<Vec<Garden>> {
        let gardens = sqlx::query_as::<_, Garden>(
            r#"
            SELECT id, name, location, total_area_m2, estimated_water_use_m3_month,
                   created_at, updated_at
            FROM gardens
            ORDER BY name ASC, id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(gardens)
    }

    /// Get a garden by ID
    pub async fn get_garden(&self, garden_id: Uuid) -> AppResult<Garden> {
        sqlx::query_as::<_, Garden>(
            r#"
            SELECT id, name, location, total_area_m2, estimated_water_use_m3_month,
                   created_at, updated_at
            FROM gardens
            WHERE id = $1
            "#,
        )
        .bind(garden_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Garden".to_string()))
    }

    /// Create a new garden
    pub async fn create_garden(&self, input: CreateGardenInput) -> AppResult<Garden> {
        input.validate()?;
        if input.name.trim().is_empty() {
            return Err(AppError::validation(
                "name",
                "Garden name cannot be empty",
                "O nome da horta não pode ficar vazio",
            ));
        }
        validate_measures(input.total_area_m2, input.estimated_water_use_m3_month)?;

        let garden = sqlx::query_as::<_, Garden>(
            r#"
            INSERT INTO gardens (id, name, location, total_area_m2, estimated_water_use_m3_month)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, location, total_area_m2, estimated_water_use_m3_month,
                      created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(input.name.trim())
        .bind(&input.location)
        .bind(input.total_area_m2)
        .bind(input.estimated_water_use_m3_month)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(garden_id = %garden.id, name = %garden.name, "Garden created");
        Ok(garden)
    }

    /// Update a garden
    pub async fn update_garden(&self, garden_id: Uuid, input: UpdateGardenInput) -> AppResult<Garden> {
        input.validate()?;
        if input.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(AppError::validation(
                "name",
                "Garden name cannot be empty",
                "O nome da horta não pode ficar vazio",
            ));
        }
        validate_measures(input.total_area_m2, input.estimated_water_use_m3_month)?;

        let existing = self.get_garden(garden_id).await?;

        let garden = sqlx::query_as::<_, Garden>(
            r#"
            UPDATE gardens
            SET name = $2, location = $3, total_area_m2 = $4,
                estimated_water_use_m3_month = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, location, total_area_m2, estimated_water_use_m3_month,
                      created_at, updated_at
            "#,
        )
        .bind(garden_id)
        .bind(input.name.as_deref().map(str::trim).unwrap_or(&existing.name))
        .bind(input.location.or(existing.location))
        .bind(input.total_area_m2.or(existing.total_area_m2))
        .bind(
            input
                .estimated_water_use_m3_month
                .or(existing.estimated_water_use_m3_month),
        )
        .fetch_one(&self.db)
        .await?;

        Ok(garden)
    }

    /// Delete a garden together with its cultivations and reports
    pub async fn delete_garden(&self, garden_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM gardens WHERE id = $1")
            .bind(garden_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Garden".to_string()));
        }

        tracing::info!(garden_id = %garden_id, "Garden deleted");
        Ok(())
    }
}
