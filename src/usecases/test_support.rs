use rust_decimal::Decimal;

use crate::dto::vacancy_dto::{DateInput, VacancyInput};
use crate::models::vacancy::{Status, Urgency};

pub(crate) fn vacancy_input(description: &str) -> VacancyInput {
    VacancyInput {
        description: description.to_string(),
        sector: "IT".to_string(),
        manager: "Maria Souza".to_string(),
        salary_expectation: Decimal::from(5000),
        urgency: Urgency::High,
        status: Status::InProgress,
        start_date: Some(DateInput::from("2023-10-01T00:00:00Z")),
        end_date: None,
        notes: Some("Remote friendly".to_string()),
    }
}

pub(crate) fn sector_input(sector: &str, salary: i64, status: Status) -> VacancyInput {
    let mut input = vacancy_input("Analyst");
    input.sector = sector.to_string();
    input.salary_expectation = Decimal::from(salary);
    input.status = status;
    input
}

pub(crate) fn error_message(payload: &serde_json::Value) -> &str {
    payload["error"].as_str().unwrap_or_default()
}
