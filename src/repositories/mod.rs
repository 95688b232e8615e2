//! Storage contracts consumed by the use cases, plus their adapters.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::dto::health_dto::HealthStatusOutput;
use crate::dto::simulation_dto::{CostSimulationInput, CostSimulationOutput};
use crate::dto::vacancy_dto::{Pagination, PaginationResponse};
use crate::error::Result;
use crate::models::vacancy::{StatusToUpdate, Vacancy, VacancyRecord};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VacancyRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Vacancy>>;

    /// Persists a new vacancy; the repository assigns `id`, `created_at` and `updated_at`.
    async fn create(&self, record: VacancyRecord) -> Result<Vacancy>;

    /// Replaces every mutable field. `None` means nothing was updated.
    async fn update(&self, id: Uuid, record: VacancyRecord) -> Result<Option<Vacancy>>;

    async fn delete(&self, id: Uuid) -> Result<bool>;

    async fn list(&self, pagination: &Pagination) -> Result<PaginationResponse>;

    /// Sets the status and stamps `end_date` and `updated_at`. An outer
    /// `Some` replaces the notes, even with `None`; an outer `None` keeps them.
    async fn edit_status(
        &self,
        id: Uuid,
        status: StatusToUpdate,
        notes: Option<Option<String>>,
    ) -> Result<Option<Vacancy>>;

    /// Case-insensitive exact sector match.
    async fn get_by_sector(&self, sector: &str) -> Result<Vec<Vacancy>>;

    async fn simulate_costs(&self, filter: &CostSimulationInput) -> Result<CostSimulationOutput>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    async fn check_database_health(&self) -> Result<HealthStatusOutput>;
}
