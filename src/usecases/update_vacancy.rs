use std::sync::Arc;

use crate::dto::vacancy_dto::VacancyInput;
use crate::error::{Error, Result};
use crate::repositories::VacancyRepository;
use crate::response::HttpResponse;
use crate::utils::{
    injection::detect_sql_injection,
    time::validate_dates,
    validation::{parse_identifier, validate},
};

#[derive(Clone)]
pub struct UpdateVacancyUseCase {
    repository: Arc<dyn VacancyRepository>,
}

impl UpdateVacancyUseCase {
    pub fn new(repository: Arc<dyn VacancyRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, vacancy_id: &str, input: VacancyInput) -> HttpResponse {
        self.run(vacancy_id, input)
            .await
            .unwrap_or_else(HttpResponse::from_error)
    }

    async fn run(&self, vacancy_id: &str, input: VacancyInput) -> Result<HttpResponse> {
        let id = parse_identifier(vacancy_id)?;
        validate(&input)?;
        let dates = validate_dates(input.start_date.as_ref(), input.end_date.as_ref())?;
        detect_sql_injection(&input)?;

        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::vacancy_not_found(id))?;

        let record = input.into_record(
            dates.start_date.unwrap_or(existing.start_date),
            dates.end_date,
        );

        let updated = self.repository.update(id, record).await?.ok_or_else(|| {
            Error::OperationFailed(format!("It wasn't possible to update the vacancy for id {}.", id))
        })?;

        tracing::info!(vacancy_id = %id, "Vacancy updated");
        HttpResponse::ok(&updated)
    }
}
