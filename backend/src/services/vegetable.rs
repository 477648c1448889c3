//! Vegetable template service and module dimensioning

use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{
    dimension, parse_desired_yield, validate_cycle, validate_expected_yield,
    validate_positive_measure, Dimensioning, PlantingMethod, VegetableTemplate,
};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use super::ensure;
use crate::error::{AppError, AppResult};

/// Vegetable service for managing growth templates
#[derive(Clone)]
pub struct VegetableService {
    db: PgPool,
}

/// Input for creating a vegetable template
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVegetableInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub planting_method: PlantingMethod,
    #[serde(default)]
    pub development_weeks: i32,
    pub harvest_weeks: i32,
    pub cleanup_weeks: i32,
    pub row_spacing_m: Decimal,
    pub plant_spacing_m: Decimal,
    #[serde(default)]
    pub expected_yield_per_module: Decimal,
    pub module_area_m2: Decimal,
    pub planting_interval_weeks: i32,
}

/// Input for updating a vegetable template
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVegetableInput {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub planting_method: Option<PlantingMethod>,
    pub development_weeks: Option<i32>,
    pub harvest_weeks: Option<i32>,
    pub cleanup_weeks: Option<i32>,
    pub row_spacing_m: Option<Decimal>,
    pub plant_spacing_m: Option<Decimal>,
    pub expected_yield_per_module: Option<Decimal>,
    pub module_area_m2: Option<Decimal>,
    pub planting_interval_weeks: Option<i32>,
}

const SELECT_VEGETABLE: &str = r#"
    SELECT id, name, planting_method, development_weeks, harvest_weeks, cleanup_weeks,
           row_spacing_m, plant_spacing_m, expected_yield_per_module, module_area_m2,
           planting_interval_weeks
    FROM vegetables
"#;

/// Check the technical parameters of a template before it is stored
fn validate_template(template: &VegetableTemplate) -> AppResult<()> {
    if template.name.trim().is_empty() {
        return Err(AppError::validation(
            "name",
            "Vegetable name cannot be empty",
            "O nome da hortaliça não pode ficar vazio",
        ));
    }
    ensure(
        "cycle",
        validate_cycle(template),
        "Os ciclos (semanas) não podem ser negativos",
    )?;
    ensure(
        "row_spacing_m",
        validate_positive_measure(template.row_spacing_m),
        "O espaçamento entre linhas deve ser maior que zero",
    )?;
    ensure(
        "plant_spacing_m",
        validate_positive_measure(template.plant_spacing_m),
        "O espaçamento entre plantas deve ser maior que zero",
    )?;
    ensure(
        "module_area_m2",
        validate_positive_measure(template.module_area_m2),
        "A área do módulo deve ser maior que zero",
    )?;
    ensure(
        "expected_yield_per_module",
        validate_expected_yield(template.expected_yield_per_module),
        "A produtividade esperada não pode ser negativa",
    )
}

impl VegetableService {
    /// Create a new VegetableService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all vegetable templates
    pub async fn get_vegetables(&self) -> AppResult<Vec<VegetableTemplate>> {
        let query = format!("{} ORDER BY name ASC, id ASC", SELECT_VEGETABLE);
        let vegetables = sqlx::query_as::<_, VegetableTemplate>(&query)
            .fetch_all(&self.db)
            .await?;

        Ok(vegetables)
    }

    /// Get a vegetable template by ID
    pub async fn get_vegetable(&self, vegetable_id: Uuid) -> AppResult<VegetableTemplate> {
        let query = format!("{} WHERE id = $1", SELECT_VEGETABLE);
        sqlx::query_as::<_, VegetableTemplate>(&query)
            .bind(vegetable_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Vegetable".to_string()))
    }

    /// Create a new vegetable template
    pub async fn create_vegetable(&self, input: CreateVegetableInput) -> AppResult<VegetableTemplate> {
        input.validate()?;

        let template = VegetableTemplate {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            planting_method: input.planting_method,
            development_weeks: input.development_weeks,
            harvest_weeks: input.harvest_weeks,
            cleanup_weeks: input.cleanup_weeks,
            row_spacing_m: input.row_spacing_m,
            plant_spacing_m: input.plant_spacing_m,
            expected_yield_per_module: input.expected_yield_per_module,
            module_area_m2: input.module_area_m2,
            planting_interval_weeks: input.planting_interval_weeks,
        };
        validate_template(&template)?;

        sqlx::query(
            r#"
            INSERT INTO vegetables (
                id, name, planting_method, development_weeks, harvest_weeks, cleanup_weeks,
                row_spacing_m, plant_spacing_m, expected_yield_per_module, module_area_m2,
                planting_interval_weeks
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(template.id)
        .bind(&template.name)
        .bind(template.planting_method.as_str())
        .bind(template.development_weeks)
        .bind(template.harvest_weeks)
        .bind(template.cleanup_weeks)
        .bind(template.row_spacing_m)
        .bind(template.plant_spacing_m)
        .bind(template.expected_yield_per_module)
        .bind(template.module_area_m2)
        .bind(template.planting_interval_weeks)
        .execute(&self.db)
        .await?;

        tracing::info!(vegetable_id = %template.id, name = %template.name, "Vegetable template created");
        Ok(template)
    }

    /// Update a vegetable template
    pub async fn update_vegetable(
        &self,
        vegetable_id: Uuid,
        input: UpdateVegetableInput,
    ) -> AppResult<VegetableTemplate> {
        input.validate()?;
        let existing = self.get_vegetable(vegetable_id).await?;

        let template = VegetableTemplate {
            id: existing.id,
            name: input
                .name
                .map(|name| name.trim().to_string())
                .unwrap_or(existing.name),
            planting_method: input.planting_method.unwrap_or(existing.planting_method),
            development_weeks: input.development_weeks.unwrap_or(existing.development_weeks),
            harvest_weeks: input.harvest_weeks.unwrap_or(existing.harvest_weeks),
            cleanup_weeks: input.cleanup_weeks.unwrap_or(existing.cleanup_weeks),
            row_spacing_m: input.row_spacing_m.unwrap_or(existing.row_spacing_m),
            plant_spacing_m: input.plant_spacing_m.unwrap_or(existing.plant_spacing_m),
            expected_yield_per_module: input
                .expected_yield_per_module
                .unwrap_or(existing.expected_yield_per_module),
            module_area_m2: input.module_area_m2.unwrap_or(existing.module_area_m2),
            planting_interval_weeks: input
                .planting_interval_weeks
                .unwrap_or(existing.planting_interval_weeks),
        };
        validate_template(&template)?;

        sqlx::query(
            r#"
            UPDATE vegetables
            SET name = $2, planting_method = $3, development_weeks = $4, harvest_weeks = $5,
                cleanup_weeks = $6, row_spacing_m = $7, plant_spacing_m = $8,
                expected_yield_per_module = $9, module_area_m2 = $10,
                planting_interval_weeks = $11, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(template.id)
        .bind(&template.name)
        .bind(template.planting_method.as_str())
        .bind(template.development_weeks)
        .bind(template.harvest_weeks)
        .bind(template.cleanup_weeks)
        .bind(template.row_spacing_m)
        .bind(template.plant_spacing_m)
        .bind(template.expected_yield_per_module)
        .bind(template.module_area_m2)
        .bind(template.planting_interval_weeks)
        .execute(&self.db)
        .await?;

        Ok(template)
    }

    /// Delete a vegetable template and every cultivation using it
    pub async fn delete_vegetable(&self, vegetable_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM vegetables WHERE id = $1")
            .bind(vegetable_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vegetable".to_string()));
        }

        tracing::info!(vegetable_id = %vegetable_id, "Vegetable template deleted");
        Ok(())
    }

    /// Size the modules and area needed to reach a desired weekly yield
    pub async fn calculate_dimensioning(
        &self,
        vegetable_id: Uuid,
        desired: Option<&str>,
    ) -> AppResult<Dimensioning> {
        let desired_yield = parse_desired_yield(desired)?;
        let template = self.get_vegetable(vegetable_id).await?;

        let result = dimension(&template, desired_yield)?;
        tracing::debug!(
            vegetable_id = %vegetable_id,
            desired = %desired_yield,
            required_modules = result.required_modules,
            "Dimensioning calculated"
        );
        Ok(result)
    }
}
