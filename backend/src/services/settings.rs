//! Saved burn plan service
//!
//! Plans are stored as one JSON settings blob per property name.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{is_nested_prescription, validate_property_name, validate_settings, BurnPlanSettings};
use sqlx::{types::Json, PgPool};

use crate::error::{AppError, AppResult};

/// Saved plan service
#[derive(Clone)]
pub struct SettingsService {
    db: PgPool,
}

/// A stored plan as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedBurnPlan {
    pub name: String,
    pub settings: BurnPlanSettings,
    pub updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct BurnPlanRow {
    name: String,
    settings: Json<BurnPlanSettings>,
    updated_at: DateTime<Utc>,
}

impl From<BurnPlanRow> for SavedBurnPlan {
    fn from(row: BurnPlanRow) -> Self {
        Self {
            name: row.name,
            settings: row.settings.0,
            updated_at: row.updated_at,
        }
    }
}

fn check_name(name: &str) -> AppResult<String> {
    validate_property_name(name).map_err(|msg| AppError::Validation {
        field: "name".to_string(),
        message: msg.to_string(),
    })?;
    Ok(name.trim().to_string())
}

/// The plan key and the property name it stores must agree
fn check_plan_key(name: &str, settings: &BurnPlanSettings) -> AppResult<()> {
    if settings.property_name.trim() != name {
        return Err(AppError::Validation {
            field: "propertyName".to_string(),
            message: format!(
                "Property name '{}' does not match plan '{}'",
                settings.property_name.trim(),
                name
            ),
        });
    }
    Ok(())
}

impl SettingsService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Insert or replace the plan stored under `name`
    pub async fn save_plan(&self, name: &str, settings: BurnPlanSettings) -> AppResult<SavedBurnPlan> {
        let name = check_name(name)?;
        validate_settings(&settings).map_err(|msg| AppError::Validation {
            field: "settings".to_string(),
            message: msg,
        })?;
        check_plan_key(&name, &settings)?;

        if !is_nested_prescription(&settings.prescription) {
            tracing::warn!(
                plan = %name,
                "Preferred window extends past the acceptable window"
            );
        }

        let row = sqlx::query_as::<_, BurnPlanRow>(
            r#"
            INSERT INTO burn_plans (name, settings)
            VALUES ($1, $2)
            ON CONFLICT (name) DO UPDATE
            SET settings = EXCLUDED.settings, updated_at = NOW()
            RETURNING name, settings, updated_at
            "#,
        )
        .bind(&name)
        .bind(Json(&settings))
        .fetch_one(&self.db)
        .await?;

        tracing::info!("Saved burn plan '{}'", name);

        Ok(row.into())
    }

    pub async fn get_plan(&self, name: &str) -> AppResult<SavedBurnPlan> {
        let name = check_name(name)?;

        let row = sqlx::query_as::<_, BurnPlanRow>(
            "SELECT name, settings, updated_at FROM burn_plans WHERE name = $1",
        )
        .bind(&name)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Burn plan '{}'", name)))?;

        Ok(row.into())
    }

    pub async fn list_plans(&self) -> AppResult<Vec<SavedBurnPlan>> {
        let rows = sqlx::query_as::<_, BurnPlanRow>(
            "SELECT name, settings, updated_at FROM burn_plans ORDER BY name",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(SavedBurnPlan::from).collect())
    }

    pub async fn delete_plan(&self, name: &str) -> AppResult<()> {
        let name = check_name(name)?;

        let result = sqlx::query("DELETE FROM burn_plans WHERE name = $1")
            .bind(&name)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Burn plan '{}'", name)));
        }

        tracing::info!("Deleted burn plan '{}'", name);
        Ok(())
    }
}
