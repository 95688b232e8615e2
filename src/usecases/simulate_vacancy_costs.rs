use std::sync::Arc;

use crate::dto::simulation_dto::CostSimulationInput;
use crate::error::Result;
use crate::repositories::VacancyRepository;
use crate::response::HttpResponse;

#[derive(Clone)]
pub struct SimulateVacancyCostsUseCase {
    repository: Arc<dyn VacancyRepository>,
}

impl SimulateVacancyCostsUseCase {
    pub fn new(repository: Arc<dyn VacancyRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: CostSimulationInput) -> HttpResponse {
        self.run(input)
            .await
            .unwrap_or_else(HttpResponse::from_error)
    }

    async fn run(&self, input: CostSimulationInput) -> Result<HttpResponse> {
        let simulation = self.repository.simulate_costs(&input).await?;
        tracing::info!(
            period = ?simulation.period,
            sector = simulation.sector.as_deref().unwrap_or("*"),
            estimated_cost = %simulation.estimated_cost,
            "Vacancy costs simulated"
        );
        HttpResponse::ok(&simulation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::simulation_dto::{CostSimulationOutput, Period};
    use crate::models::vacancy::Status;
    use crate::repositories::memory::InMemoryVacancyRepository;
    use crate::usecases::test_support::sector_input;
    use crate::utils::time::now;
    use rust_decimal::Decimal;

    async fn repo() -> InMemoryVacancyRepository {
        let repo = InMemoryVacancyRepository::new();
        for (sector, salary, status) in [
            ("IT", 1000, Status::InProgress),
            ("it", 2000, Status::InProgress),
            ("IT", 3000, Status::InProgress),
            ("IT", 9000, Status::Finished),
            ("Finance", 4000, Status::Canceled),
        ] {
            repo.create(sector_input(sector, salary, status).into_record(now(), None))
                .await
                .unwrap();
        }
        repo
    }

    async fn simulate(input: CostSimulationInput) -> CostSimulationOutput {
        let use_case = SimulateVacancyCostsUseCase::new(Arc::new(repo().await));
        let resp = use_case.execute(input).await;
        assert_eq!(resp.status_code, 200);
        serde_json::from_value(resp.payload).unwrap()
    }

    #[tokio::test]
    async fn monthly_sums_in_progress_salaries() {
        let out = simulate(CostSimulationInput {
            sector: Some("IT".into()),
            period: Period::Monthly,
        })
        .await;
        assert_eq!(out.estimated_cost, Decimal::from(6000));
    }

    #[tokio::test]
    async fn annual_is_the_default_period() {
        let out = simulate(CostSimulationInput {
            sector: None,
            ..Default::default()
        })
        .await;
        assert_eq!(out.period, Period::Annual);
        assert_eq!(out.estimated_cost, Decimal::from(72000));
        assert_eq!(out.message, "Estimated total cost (Annual): R$ 72.000,00");
    }

    #[tokio::test]
    async fn empty_filter_is_a_zero_estimate_not_an_error() {
        let out = simulate(CostSimulationInput {
            sector: Some("Finance".into()),
            period: Period::Monthly,
        })
        .await;
        assert_eq!(out.estimated_cost, Decimal::ZERO);
        assert!(out.message.contains("no vacancies"));
    }
}
