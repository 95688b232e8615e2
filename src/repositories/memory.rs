//! Process-local adapters, used by tests and for running the API without a database.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use super::{HealthRepository, VacancyRepository};
use crate::dto::health_dto::{DatabaseStatus, Dependencies, HealthStatusOutput};
use crate::dto::simulation_dto::{CostSimulationInput, CostSimulationOutput};
use crate::dto::vacancy_dto::{Pagination, PaginationResponse};
use crate::error::{Error, Result};
use crate::models::vacancy::{Status, StatusToUpdate, Vacancy, VacancyRecord};
use crate::utils::time::now;

#[derive(Clone, Default)]
pub struct InMemoryVacancyRepository {
    // Insertion order; newest last.
    records: Arc<RwLock<Vec<Vacancy>>>,
}

impl InMemoryVacancyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vacancies(vacancies: Vec<Vacancy>) -> Self {
        Self {
            records: Arc::new(RwLock::new(vacancies)),
        }
    }

    pub fn len(&self) -> usize {
        self.read().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Vacancy>>> {
        self.records
            .read()
            .map_err(|_| Error::Internal("vacancy store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Vacancy>>> {
        self.records
            .write()
            .map_err(|_| Error::Internal("vacancy store lock poisoned".to_string()))
    }
}

#[async_trait]
impl VacancyRepository for InMemoryVacancyRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Vacancy>> {
        Ok(self.read()?.iter().find(|v| v.id == id).cloned())
    }

    async fn create(&self, record: VacancyRecord) -> Result<Vacancy> {
        let vacancy = Vacancy::from_record(Uuid::new_v4(), record, now());
        self.write()?.push(vacancy.clone());
        Ok(vacancy)
    }

    async fn update(&self, id: Uuid, record: VacancyRecord) -> Result<Option<Vacancy>> {
        let mut records = self.write()?;
        Ok(records.iter_mut().find(|v| v.id == id).map(|vacancy| {
            vacancy.apply(record, now());
            vacancy.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut records = self.write()?;
        let before = records.len();
        records.retain(|v| v.id != id);
        Ok(records.len() < before)
    }

    async fn list(&self, pagination: &Pagination) -> Result<PaginationResponse> {
        let records = self.read()?;
        let matching: Vec<&Vacancy> = records
            .iter()
            .rev()
            .filter(|v| pagination.matches(v))
            .collect();

        let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(pagination.page_size).unwrap_or(0);
        let data = matching
            .iter()
            .skip(offset)
            .take(limit)
            .map(|v| (*v).clone())
            .collect();

        Ok(PaginationResponse {
            data,
            total: matching.len() as i64,
        })
    }

    async fn edit_status(
        &self,
        id: Uuid,
        status: StatusToUpdate,
        notes: Option<Option<String>>,
    ) -> Result<Option<Vacancy>> {
        let mut records = self.write()?;
        Ok(records.iter_mut().find(|v| v.id == id).map(|vacancy| {
            vacancy.close(status, notes, now());
            vacancy.clone()
        }))
    }

    async fn get_by_sector(&self, sector: &str) -> Result<Vec<Vacancy>> {
        let sector = sector.trim().to_lowercase();
        if sector.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .read()?
            .iter()
            .filter(|v| v.sector.to_lowercase() == sector)
            .cloned()
            .collect())
    }

    async fn simulate_costs(&self, filter: &CostSimulationInput) -> Result<CostSimulationOutput> {
        let records = self.read()?;
        let sector = filter.sector_filter().map(str::to_lowercase);
        let salaries = records
            .iter()
            .filter(|v| v.status == Status::InProgress)
            .filter(|v| match &sector {
                Some(sector) => v.sector.to_lowercase() == *sector,
                None => true,
            })
            .map(|v| v.salary_expectation);

        Ok(CostSimulationOutput::from_salaries(filter, salaries))
    }
}

/// Reports a fixed, healthy storage backend.
#[derive(Clone)]
pub struct InMemoryHealthRepository {
    pub database_name: String,
}

impl Default for InMemoryHealthRepository {
    fn default() -> Self {
        Self {
            database_name: "memory".to_string(),
        }
    }
}

#[async_trait]
impl HealthRepository for InMemoryHealthRepository {
    async fn check_database_health(&self) -> Result<HealthStatusOutput> {
        Ok(HealthStatusOutput {
            dependencies: Dependencies {
                database: DatabaseStatus {
                    name: "in-memory".to_string(),
                    database_name: self.database_name.clone(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    max_connections: 1,
                    opened_connections: 1,
                },
            },
            updated_at: now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vacancy::Urgency;
    use rust_decimal::Decimal;

    fn record(description: &str, sector: &str) -> VacancyRecord {
        VacancyRecord {
            description: description.to_string(),
            sector: sector.to_string(),
            manager: "Ana".to_string(),
            salary_expectation: Decimal::from(1000),
            urgency: Urgency::Medium,
            status: Status::InProgress,
            start_date: now(),
            end_date: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn list_pages_newest_first_and_counts_all_matches() {
        let repo = InMemoryVacancyRepository::new();
        for i in 0..5 {
            repo.create(record(&format!("Engineer {i}"), "IT")).await.unwrap();
        }
        repo.create(record("Accountant", "Finance")).await.unwrap();

        let page = repo
            .list(&Pagination::new(Some(2), Some(2), Some("engineer".into())))
            .await
            .unwrap();
        assert_eq!(page.total, 5);
        let names: Vec<_> = page.data.iter().map(|v| v.description.as_str()).collect();
        assert_eq!(names, ["Engineer 2", "Engineer 1"]);
    }

    #[tokio::test]
    async fn sector_lookup_ignores_case() {
        let repo = InMemoryVacancyRepository::new();
        repo.create(record("Dev", "IT")).await.unwrap();
        repo.create(record("Ops", "it")).await.unwrap();
        repo.create(record("HR", "RH")).await.unwrap();

        assert_eq!(repo.get_by_sector("It").await.unwrap().len(), 2);
        assert!(repo.get_by_sector("").await.unwrap().is_empty());
    }
}
