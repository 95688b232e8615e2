use std::sync::Arc;

use crate::dto::vacancy_dto::DeletedResponse;
use crate::error::{Error, Result};
use crate::repositories::VacancyRepository;
use crate::response::HttpResponse;
use crate::utils::validation::parse_identifier;

#[derive(Clone)]
pub struct DeleteVacancyUseCase {
    repository: Arc<dyn VacancyRepository>,
}

impl DeleteVacancyUseCase {
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

        if self.repository.get_by_id(id).await?.is_none() {
            return Err(Error::vacancy_not_found(id));
        }

        if !self.repository.delete(id).await? {
            return Err(Error::OperationFailed(format!(
                "It wasn't possible to delete the vacancy for id {}.",
                id
            )));
        }

        tracing::info!(vacancy_id = %id, "Vacancy deleted");
        HttpResponse::ok(&DeletedResponse {
            message: "Vacancy deleted successfully.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{memory::InMemoryVacancyRepository, MockVacancyRepository};
    use crate::usecases::test_support::vacancy_input;
    use crate::utils::time::now;

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let repo = InMemoryVacancyRepository::new();
        let vacancy = repo
            .create(vacancy_input("Temp").into_record(now(), None))
            .await
            .unwrap();
        let use_case = DeleteVacancyUseCase::new(Arc::new(repo.clone()));

        let first = use_case.execute(&vacancy.id.to_string()).await;
        assert_eq!(first.status_code, 200);
        assert_eq!(first.payload["message"], "Vacancy deleted successfully.");
        assert!(repo.is_empty());

        let second = use_case.execute(&vacancy.id.to_string()).await;
        assert_eq!(second.status_code, 404);
    }

    #[tokio::test]
    async fn malformed_id_never_reaches_storage() {
        let use_case = DeleteVacancyUseCase::new(Arc::new(MockVacancyRepository::new()));
        assert_eq!(use_case.execute("../../etc").await.status_code, 400);
    }

    #[tokio::test]
    async fn failed_delete_is_a_bad_request() {
        let existing = InMemoryVacancyRepository::new()
            .create(vacancy_input("Race").into_record(now(), None))
            .await
            .unwrap();
        let id = existing.id;
        let mut repo = MockVacancyRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_delete().times(1).returning(|_| Ok(false));

        let resp = DeleteVacancyUseCase::new(Arc::new(repo))
            .execute(&id.to_string())
            .await;
        assert_eq!(resp.status_code, 400);
    }
}
