//! One use case per external operation. Each validates its input, drives the
//! repository and returns the uniform response envelope; failures are mapped
//! to a status exactly once, in `HttpResponse::from_error`.

pub mod create_vacancy;
pub mod delete_vacancy;
pub mod download_vacancy_summary;
pub mod edit_vacancy_status;
pub mod get_health_status;
pub mod get_vacancy;
pub mod list_vacancies;
pub mod simulate_vacancy_costs;
pub mod update_vacancy;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_vacancy::CreateVacancyUseCase;
pub use delete_vacancy::DeleteVacancyUseCase;
pub use download_vacancy_summary::{DownloadResponse, DownloadVacancySummaryUseCase};
pub use edit_vacancy_status::EditVacancyStatusUseCase;
pub use get_health_status::GetHealthStatusUseCase;
pub use get_vacancy::GetVacancyUseCase;
pub use list_vacancies::ListVacanciesUseCase;
pub use simulate_vacancy_costs::SimulateVacancyCostsUseCase;
pub use update_vacancy::UpdateVacancyUseCase;
