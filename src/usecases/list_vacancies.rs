use std::sync::Arc;

use crate::dto::vacancy_dto::{Pagination, VacancyListQuery};
use crate::error::Result;
use crate::repositories::VacancyRepository;
use crate::response::HttpResponse;

#[derive(Clone)]
pub struct ListVacanciesUseCase {
    repository: Arc<dyn VacancyRepository>,
}

impl ListVacanciesUseCase {
    pub fn new(repository: Arc<dyn VacancyRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, query: VacancyListQuery) -> HttpResponse {
        self.run(query.into())
            .await
            .unwrap_or_else(HttpResponse::from_error)
    }

    async fn run(&self, pagination: Pagination) -> Result<HttpResponse> {
        let page = self.repository.list(&pagination).await?;
        tracing::debug!(
            page = pagination.page,
            page_size = pagination.page_size,
            total = page.total,
            "Listed vacancies"
        );
        HttpResponse::ok(&page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::vacancy_dto::{PaginationResponse, MAX_PAGE_SIZE};
    use crate::repositories::{memory::InMemoryVacancyRepository, MockVacancyRepository};
    use crate::usecases::test_support::vacancy_input;
    use crate::utils::time::now;

    #[tokio::test]
    async fn page_size_is_clamped_before_storage() {
        let mut repo = MockVacancyRepository::new();
        repo.expect_list()
            .withf(|p| p.page == 1 && p.page_size == MAX_PAGE_SIZE)
            .times(1)
            .returning(|_| {
                Ok(PaginationResponse {
                    data: Vec::new(),
                    total: 0,
                })
            });
        let use_case = ListVacanciesUseCase::new(Arc::new(repo));

        let resp = use_case
            .execute(VacancyListQuery {
                page: Some(-4),
                page_size: Some(5000),
                search: None,
            })
            .await;
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.payload["total"], 0);
        assert_eq!(resp.payload["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn total_counts_matches_beyond_the_page() {
        let repo = InMemoryVacancyRepository::new();
        for i in 0..12 {
            let mut input = vacancy_input(&format!("Engineer {i}"));
            if i % 3 == 0 {
                input.description = format!("Recruiter {i}");
                input.notes = None;
            }
            repo.create(input.into_record(now(), None)).await.unwrap();
        }
        let use_case = ListVacanciesUseCase::new(Arc::new(repo));

        let resp = use_case
            .execute(VacancyListQuery {
                page: Some(2),
                page_size: Some(5),
                search: Some("ENGINEER".into()),
            })
            .await;
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.payload["total"], 8);
        assert_eq!(resp.payload["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty_but_counted() {
        let repo = InMemoryVacancyRepository::new();
        for i in 0..3 {
            repo.create(vacancy_input(&format!("Engineer {i}")).into_record(now(), None))
                .await
                .unwrap();
        }
        let use_case = ListVacanciesUseCase::new(Arc::new(repo));

        let resp = use_case
            .execute(VacancyListQuery {
                page: Some(i64::MAX),
                page_size: Some(MAX_PAGE_SIZE),
                search: None,
            })
            .await;
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.payload["total"], 3);
        assert_eq!(resp.payload["data"], serde_json::json!([]));
    }
}
