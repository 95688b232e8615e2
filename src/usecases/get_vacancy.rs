use std::sync::Arc;

use crate::error::{Error, Result};
use crate::repositories::VacancyRepository;
use crate::response::HttpResponse;
use crate::utils::validation::parse_identifier;

#[derive(Clone)]
pub struct GetVacancyUseCase {
    repository: Arc<dyn VacancyRepository>,
}

impl GetVacancyUseCase {
    pub fn new(repository: Arc<dyn VacancyRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, vacancy_id: &str) -> HttpResponse {
        self.run(vacancy_id)
            .await
            .unwrap_or_else(HttpResponse::from_error)
    }

    async fn run(&self, vacancy_id: &str) -> Result<HttpResponse> {
        let id = parse_identifier(vacancy_id)?;
        let vacancy = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::vacancy_not_found(id))?;
        HttpResponse::ok(&vacancy)
    }
}
