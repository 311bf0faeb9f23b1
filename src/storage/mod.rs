//! Analysis history persistence

#[cfg(test)]
mod tests;

use crate::error::{EdgeError, Result};
use crate::types::ImpactReport;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::path::Path;

/// SQLite store of past impact reports
pub struct AnalysisStore {
    pool: SqlitePool,
}

impl AnalysisStore {
    /// Connect to SQLite database (creates if not exists)
    pub async fn connect<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    EdgeError::Config(format!(
                        "cannot create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let db_url = format!("sqlite:{}?mode=rwc", path.display());
        Self::connect_url(&db_url, 5).await
    }

    /// In-memory store, dropped with the pool
    pub async fn in_memory() -> Result<Self> {
        // A single connection keeps every query on the same in-memory database
        Self::connect_url("sqlite::memory:", 1).await
    }

    async fn connect_url(db_url: &str, max_connections: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(db_url)
            .await?;

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    async fn run_migrations(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS analyses (
                id TEXT PRIMARY KEY,
                description TEXT NOT NULL,
                country TEXT NOT NULL,
                event_type TEXT NOT NULL,
                impact_score REAL NOT NULL,
                direction TEXT NOT NULL,
                report TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_analyses_created_at ON analyses (created_at)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Save a report, replacing any previous report with the same id
    pub async fn save(&self, report: &ImpactReport) -> Result<()> {
        let json = serde_json::to_string(report)?;

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO analyses
                (id, description, country, event_type, impact_score, direction, report, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&report.id)
        .bind(&report.event.description)
        .bind(report.event.country.label())
        .bind(report.event.event_type.label())
        .bind(report.impact_score)
        .bind(report.direction.to_string())
        .bind(json)
        .bind(report.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        tracing::debug!(id = %report.id, "Analysis saved");
        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<Option<ImpactReport>> {
        let row = sqlx::query_as::<_, ReportRow>("SELECT report FROM analyses WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.decode()).transpose()
    }

    /// Most recent reports, newest first
    pub async fn recent(&self, limit: u32) -> Result<Vec<ImpactReport>> {
        let rows = sqlx::query_as::<_, ReportRow>(
            r#"
            SELECT report FROM analyses
            ORDER BY created_at DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let mut reports = Vec::with_capacity(rows.len());
        for row in rows {
            match row.decode() {
                Ok(report) => reports.push(report),
                Err(e) => tracing::warn!("Skipping unreadable analysis row: {}", e),
            }
        }
        Ok(reports)
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM analyses")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ReportRow {
    report: String,
}

impl ReportRow {
    fn decode(self) -> Result<ImpactReport> {
        Ok(serde_json::from_str(&self.report)?)
    }
}
