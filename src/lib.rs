pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod reports;
pub mod repositories;
pub mod response;
pub mod routes;
pub mod usecases;
pub mod utils;

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::reports::{xlsx::XlsxReportGenerator, ReportGenerator};
use crate::repositories::{
    postgres::{PgHealthRepository, PgVacancyRepository},
    HealthRepository, VacancyRepository,
};
use crate::usecases::{
    CreateVacancyUseCase, DeleteVacancyUseCase, DownloadVacancySummaryUseCase,
    EditVacancyStatusUseCase, GetHealthStatusUseCase, GetVacancyUseCase, ListVacanciesUseCase,
    SimulateVacancyCostsUseCase, UpdateVacancyUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub create_vacancy: CreateVacancyUseCase,
    pub get_vacancy: GetVacancyUseCase,
    pub update_vacancy: UpdateVacancyUseCase,
    pub delete_vacancy: DeleteVacancyUseCase,
    pub list_vacancies: ListVacanciesUseCase,
    pub edit_vacancy_status: EditVacancyStatusUseCase,
    pub simulate_vacancy_costs: SimulateVacancyCostsUseCase,
    pub download_vacancy_summary: DownloadVacancySummaryUseCase,
    pub get_health_status: GetHealthStatusUseCase,
}

impl AppState {
    pub fn new(
        vacancies: Arc<dyn VacancyRepository>,
        health: Arc<dyn HealthRepository>,
        reports: Arc<dyn ReportGenerator>,
    ) -> Self {
        Self {
            create_vacancy: CreateVacancyUseCase::new(vacancies.clone()),
            get_vacancy: GetVacancyUseCase::new(vacancies.clone()),
            update_vacancy: UpdateVacancyUseCase::new(vacancies.clone()),
            delete_vacancy: DeleteVacancyUseCase::new(vacancies.clone()),
            list_vacancies: ListVacanciesUseCase::new(vacancies.clone()),
            edit_vacancy_status: EditVacancyStatusUseCase::new(vacancies.clone()),
            simulate_vacancy_costs: SimulateVacancyCostsUseCase::new(vacancies.clone()),
            download_vacancy_summary: DownloadVacancySummaryUseCase::new(vacancies, reports),
            get_health_status: GetHealthStatusUseCase::new(health),
        }
    }

    /// Wires every use case to PostgreSQL and spreadsheet reports.
    pub fn postgres(pool: PgPool, config: &Config) -> Self {
        Self::new(
            Arc::new(PgVacancyRepository::new(pool.clone())),
            Arc::new(PgHealthRepository::new(pool)),
            Arc::new(XlsxReportGenerator::new(config.reports_dir.clone())),
        )
    }
}
