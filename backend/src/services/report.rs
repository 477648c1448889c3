//! Efficiency report service
//!
//! Reports compare planned against harvested production for a garden. The
//! efficiency percentage is derived on every write.

use chrono::Local;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{calculate_efficiency, validate_report_total, EfficiencyReport};
use sqlx::PgPool;
use uuid::Uuid;

use super::{ensure, GardenService};
use crate::error::{AppError, AppResult};

/// Report service for efficiency summaries
#[derive(Clone)]
pub struct ReportService {
    db: PgPool,
}

/// Input for creating an efficiency report
#[derive(Debug, Deserialize)]
pub struct CreateReportInput {
    pub garden_id: Uuid,
    pub total_planned: Decimal,
    #[serde(default)]
    pub total_harvested: Decimal,
}

/// Filter for listing reports
#[derive(Debug, Default, Deserialize)]
pub struct ReportFilter {
    pub garden_id: Option<Uuid>,
}

impl ReportService {
    /// Create a new ReportService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get reports, newest first
    pub async fn get_reports(&self, filter: &ReportFilter) -> AppResult<Vec<EfficiencyReport>> {
        let reports = sqlx::query_as::<_, EfficiencyReport>(
            r#"
            SELECT id, garden_id, report_date, total_planned, total_harvested,
                   efficiency_percent, created_at
            FROM efficiency_reports
            WHERE ($1::uuid IS NULL OR garden_id = $1)
            ORDER BY report_date DESC, created_at DESC
            "#,
        )
        .bind(filter.garden_id)
        .fetch_all(&self.db)
        .await?;

        Ok(reports)
    }

    /// Get a report by ID
    pub async fn get_report(&self, report_id: Uuid) -> AppResult<EfficiencyReport> {
        sqlx::query_as::<_, EfficiencyReport>(
            r#"
            SELECT id, garden_id, report_date, total_planned, total_harvested,
                   efficiency_percent, created_at
            FROM efficiency_reports
            WHERE id = $1
            "#,
        )
        .bind(report_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Report".to_string()))
    }

    /// Create a report dated today
    pub async fn create_report(&self, input: CreateReportInput) -> AppResult<EfficiencyReport> {
        ensure(
            "total_planned",
            validate_report_total(input.total_planned),
            "A produção planejada não pode ser negativa",
        )?;
        ensure(
            "total_harvested",
            validate_report_total(input.total_harvested),
            "A produção colhida não pode ser negativa",
        )?;

        GardenService::new(self.db.clone())
            .get_garden(input.garden_id)
            .await?;

        let efficiency = calculate_efficiency(input.total_planned, input.total_harvested).round_dp(2);
        let today = Local::now().date_naive();

        let report = sqlx::query_as::<_, EfficiencyReport>(
            r#"
            INSERT INTO efficiency_reports (
                id, garden_id, report_date, total_planned, total_harvested, efficiency_percent
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, garden_id, report_date, total_planned, total_harvested,
                      efficiency_percent, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(input.garden_id)
        .bind(today)
        .bind(input.total_planned)
        .bind(input.total_harvested)
        .bind(efficiency)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(
            report_id = %report.id,
            garden_id = %report.garden_id,
            efficiency_percent = %report.efficiency_percent,
            "Efficiency report created"
        );
        Ok(report)
    }

    /// Delete a report
    pub async fn delete_report(&self, report_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM efficiency_reports WHERE id = $1")
            .bind(report_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Report".to_string()));
        }

        Ok(())
    }
}
