use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use super::{HealthRepository, VacancyRepository};
use crate::dto::health_dto::{DatabaseStatus, Dependencies, HealthStatusOutput};
use crate::dto::simulation_dto::{CostSimulationInput, CostSimulationOutput};
use crate::dto::vacancy_dto::{Pagination, PaginationResponse};
use crate::error::Result;
use crate::models::vacancy::{Status, StatusToUpdate, Vacancy, VacancyRecord, VacancyRow};
use crate::utils::time::now;

const VACANCY_COLUMNS: &str = "id, description, sector, manager, salary_expectation, urgency, status, start_date, end_date, notes, created_at, updated_at";

#[derive(Clone)]
pub struct PgVacancyRepository {
    pool: PgPool,
}

impl PgVacancyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_vacancies(rows: Vec<VacancyRow>) -> Result<Vec<Vacancy>> {
    rows.into_iter().map(Vacancy::try_from).collect()
}

/// Escapes LIKE wildcards so the search term is matched literally.
fn like_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl VacancyRepository for PgVacancyRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Vacancy>> {
        let query = format!("SELECT {} FROM vacancy WHERE id = $1", VACANCY_COLUMNS);
        let row = sqlx::query_as::<_, VacancyRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Vacancy::try_from).transpose()
    }

    async fn create(&self, record: VacancyRecord) -> Result<Vacancy> {
        let query = format!(
            r#"
            INSERT INTO vacancy (
                id, description, sector, manager, salary_expectation,
                urgency, status, start_date, end_date, notes,
                created_at, updated_at
            ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$11)
            RETURNING {}
            "#,
            VACANCY_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, VacancyRow>(&query)
            .bind(Uuid::new_v4())
            .bind(&record.description)
            .bind(&record.sector)
            .bind(&record.manager)
            .bind(record.salary_expectation)
            .bind(i16::from(record.urgency))
            .bind(record.status.as_str())
            .bind(record.start_date)
            .bind(record.end_date)
            .bind(&record.notes)
            .bind(now())
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Vacancy::try_from(row)
    }

    async fn update(&self, id: Uuid, record: VacancyRecord) -> Result<Option<Vacancy>> {
        let query = format!(
            r#"
            UPDATE vacancy
            SET
                description = $2,
                sector = $3,
                manager = $4,
                salary_expectation = $5,
                urgency = $6,
                status = $7,
                start_date = $8,
                end_date = $9,
                notes = $10,
                updated_at = $11
            WHERE id = $1
            RETURNING {}
            "#,
            VACANCY_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, VacancyRow>(&query)
            .bind(id)
            .bind(&record.description)
            .bind(&record.sector)
            .bind(&record.manager)
            .bind(record.salary_expectation)
            .bind(i16::from(record.urgency))
            .bind(record.status.as_str())
            .bind(record.start_date)
            .bind(record.end_date)
            .bind(&record.notes)
            .bind(now())
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        row.map(Vacancy::try_from).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query("DELETE FROM vacancy WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(res.rows_affected() > 0)
    }

    async fn list(&self, pagination: &Pagination) -> Result<PaginationResponse> {
        let mut filters = Vec::new();
        let mut args: Vec<String> = Vec::new();

        if let Some(search) = pagination.search.as_deref() {
            let n = args.len() + 1;
            filters.push(format!(
                "(description ILIKE ${n} OR sector ILIKE ${n} OR manager ILIKE ${n} OR notes ILIKE ${n})"
            ));
            args.push(like_pattern(search));
        }

        let where_clause = if filters.is_empty() {
            "".to_string()
        } else {
            format!("WHERE {}", filters.join(" AND "))
        };

        let items_query = format!(
            "SELECT {}
             FROM vacancy
             {}
             ORDER BY created_at DESC
             LIMIT ${} OFFSET ${}",
            VACANCY_COLUMNS,
            where_clause,
            args.len() + 1,
            args.len() + 2
        );
        let total_query = format!("SELECT COUNT(*) FROM vacancy {}", where_clause);

        let mut items_statement = sqlx::query_as::<_, VacancyRow>(&items_query);
        for value in &args {
            items_statement = items_statement.bind(value);
        }
        items_statement = items_statement
            .bind(pagination.page_size)
            .bind(pagination.offset());
        let rows = items_statement.fetch_all(&self.pool).await?;

        let mut total_statement = sqlx::query_scalar::<_, i64>(&total_query);
        for value in &args {
            total_statement = total_statement.bind(value);
        }
        let total = total_statement.fetch_one(&self.pool).await?;

        Ok(PaginationResponse {
            data: into_vacancies(rows)?,
            total,
        })
    }

    async fn edit_status(
        &self,
        id: Uuid,
        status: StatusToUpdate,
        notes: Option<Option<String>>,
    ) -> Result<Option<Vacancy>> {
        let query = format!(
            r#"
            UPDATE vacancy
            SET
                status = $2,
                end_date = $3,
                updated_at = $3,
                notes = CASE WHEN $4::boolean THEN $5::varchar ELSE notes END
            WHERE id = $1
            RETURNING {}
            "#,
            VACANCY_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, VacancyRow>(&query)
            .bind(id)
            .bind(Status::from(status).as_str())
            .bind(now())
            .bind(notes.is_some())
            .bind(notes.flatten())
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        row.map(Vacancy::try_from).transpose()
    }

    async fn get_by_sector(&self, sector: &str) -> Result<Vec<Vacancy>> {
        if sector.trim().is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT {} FROM vacancy WHERE LOWER(sector) = LOWER($1) ORDER BY created_at",
            VACANCY_COLUMNS
        );
        let rows = sqlx::query_as::<_, VacancyRow>(&query)
            .bind(sector.trim())
            .fetch_all(&self.pool)
            .await?;

        into_vacancies(rows)
    }

    async fn simulate_costs(&self, filter: &CostSimulationInput) -> Result<CostSimulationOutput> {
        let salaries = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT salary_expectation
            FROM vacancy
            WHERE status = $1
              AND ($2::text IS NULL OR LOWER(sector) = LOWER($2))
            "#,
        )
        .bind(Status::InProgress.as_str())
        .bind(filter.sector_filter())
        .fetch_all(&self.pool)
        .await?;

        Ok(CostSimulationOutput::from_salaries(filter, salaries))
    }
}

#[derive(Clone)]
pub struct PgHealthRepository {
    pool: PgPool,
}

impl PgHealthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthRepository for PgHealthRepository {
    async fn check_database_health(&self) -> Result<HealthStatusOutput> {
        let updated_at = now();

        let version = sqlx::query_scalar::<_, String>("SHOW server_version")
            .fetch_one(&self.pool)
            .await?;
        let max_connections = sqlx::query_scalar::<_, String>("SHOW max_connections")
            .fetch_one(&self.pool)
            .await?;
        let database_name = sqlx::query_scalar::<_, String>("SELECT current_database()::text")
            .fetch_one(&self.pool)
            .await?;
        let opened_connections = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM pg_stat_activity WHERE datname = $1",
        )
        .bind(&database_name)
        .fetch_one(&self.pool)
        .await?;

        let max_connections = max_connections.trim().parse::<i64>().map_err(|e| {
            crate::error::Error::Internal(format!("unexpected max_connections value: {}", e))
        })?;

        Ok(HealthStatusOutput {
            dependencies: Dependencies {
                database: DatabaseStatus {
                    name: "PostgreSQL".to_string(),
                    database_name,
                    version,
                    max_connections,
                    opened_connections,
                },
            },
            updated_at,
        })
    }
}
