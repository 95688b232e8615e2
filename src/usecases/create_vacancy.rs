use std::sync::Arc;

use crate::dto::vacancy_dto::VacancyInput;
use crate::error::Result;
use crate::repositories::VacancyRepository;
use crate::response::HttpResponse;
use crate::utils::{
    injection::detect_sql_injection,
    time::{now, validate_dates},
    validation::validate,
};

#[derive(Clone)]
pub struct CreateVacancyUseCase {
    repository: Arc<dyn VacancyRepository>,
}

impl CreateVacancyUseCase {
    pub fn new(repository: Arc<dyn VacancyRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: VacancyInput) -> HttpResponse {
        self.run(input).await.unwrap_or_else(HttpResponse::from_error)
    }

    async fn run(&self, input: VacancyInput) -> Result<HttpResponse> {
        validate(&input)?;
        let dates = validate_dates(input.start_date.as_ref(), input.end_date.as_ref())?;
        detect_sql_injection(&input)?;

        let stamped = now();
        let record = input.into_record(
            dates.start_date.unwrap_or(stamped),
            Some(dates.end_date.unwrap_or(stamped)),
        );

        let created = self.repository.create(record).await?;
        tracing::info!(vacancy_id = %created.id, sector = %created.sector, "Vacancy created");
        HttpResponse::created(&created)
    }
}
