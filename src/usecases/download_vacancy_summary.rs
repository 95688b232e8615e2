use std::sync::Arc;

use crate::dto::media_dto::MediaOutput;
use crate::error::{Error, Result};
use crate::reports::{sanitize_file_component, ReportGenerator};
use crate::repositories::VacancyRepository;
use crate::response::HttpResponse;

/// Either a generated file ready to stream, or an error envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadResponse {
    File(MediaOutput),
    Envelope(HttpResponse),
}

#[derive(Clone)]
pub struct DownloadVacancySummaryUseCase {
    repository: Arc<dyn VacancyRepository>,
    generator: Arc<dyn ReportGenerator>,
}

impl DownloadVacancySummaryUseCase {
    pub fn new(repository: Arc<dyn VacancyRepository>, generator: Arc<dyn ReportGenerator>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    pub async fn execute(&self, sector: &str) -> DownloadResponse {
        match self.run(sector).await {
            Ok(media) => DownloadResponse::File(media),
            Err(err) => DownloadResponse::Envelope(HttpResponse::from_error(err)),
        }
    }

    async fn run(&self, sector: &str) -> Result<MediaOutput> {
        let vacancies = self.repository.get_by_sector(sector).await?;
        if vacancies.is_empty() {
            return Err(Error::NoReportData(format!(
                "No vacancies found for sector '{}'.",
                sector
            )));
        }

        let generator = Arc::clone(&self.generator);
        let path = tokio::task::spawn_blocking(move || generator.generate(&vacancies))
            .await
            .map_err(|e| Error::Internal(format!("report task failed: {}", e)))??;

        Ok(MediaOutput {
            path,
            media_type: self.generator.media_type().to_string(),
            file_name: format!(
                "vacancy_summary_{}.{}",
                sanitize_file_component(sector),
                self.generator.extension()
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vacancy::Status;
    use crate::reports::{xlsx::XlsxReportGenerator, MockReportGenerator, XLSX_MEDIA_TYPE};
    use crate::repositories::{memory::InMemoryVacancyRepository, MockVacancyRepository};
    use crate::usecases::test_support::sector_input;
    use crate::utils::time::now;

    #[tokio::test]
    async fn renders_sector_report() {
        let repo = InMemoryVacancyRepository::new();
        for salary in [1000, 2000] {
            repo.create(sector_input("IT", salary, Status::InProgress).into_record(now(), None))
                .await
                .unwrap();
        }
        let dir = tempfile::tempdir().unwrap();
        let use_case = DownloadVacancySummaryUseCase::new(
            Arc::new(repo),
            Arc::new(XlsxReportGenerator::new(dir.path())),
        );

        match use_case.execute("it").await {
            DownloadResponse::File(media) => {
                assert!(media.path.exists());
                assert_eq!(media.media_type, XLSX_MEDIA_TYPE);
                assert_eq!(media.file_name, "vacancy_summary_it.xlsx");
            }
            other => panic!("expected a file, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn no_rows_is_not_found_without_rendering() {
        let use_case = DownloadVacancySummaryUseCase::new(
            Arc::new(InMemoryVacancyRepository::new()),
            Arc::new(MockReportGenerator::new()),
        );

        match use_case.execute("Legal").await {
            DownloadResponse::Envelope(resp) => assert_eq!(resp.status_code, 404),
            other => panic!("expected an envelope, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn generator_failures_are_500s() {
        let mut repo = MockVacancyRepository::new();
        let seeded = InMemoryVacancyRepository::new()
            .create(sector_input("IT", 10, Status::InProgress).into_record(now(), None))
            .await
            .unwrap();
        repo.expect_get_by_sector()
            .returning(move |_| Ok(vec![seeded.clone()]));
        let mut generator = MockReportGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(Error::Io(std::io::Error::other("disk full"))));

        let use_case = DownloadVacancySummaryUseCase::new(Arc::new(repo), Arc::new(generator));
        match use_case.execute("IT").await {
            DownloadResponse::Envelope(resp) => assert_eq!(resp.status_code, 500),
            other => panic!("expected an envelope, got {other:?}"),
        }
    }
}
