use std::sync::Arc;

use crate::dto::vacancy_dto::NotesInput;
use crate::error::{Error, Result};
use crate::models::vacancy::StatusToUpdate;
use crate::repositories::VacancyRepository;
use crate::response::HttpResponse;
use crate::utils::{
    injection::detect_sql_injection,
    validation::{parse_identifier, validate},
};

#[derive(Clone)]
pub struct EditVacancyStatusUseCase {
    repository: Arc<dyn VacancyRepository>,
}

impl EditVacancyStatusUseCase {
    pub fn new(repository: Arc<dyn VacancyRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        vacancy_id: &str,
        status: StatusToUpdate,
        notes: Option<NotesInput>,
    ) -> HttpResponse {
        self.run(vacancy_id, status, notes)
            .await
            .unwrap_or_else(HttpResponse::from_error)
    }

    async fn run(
        &self,
        vacancy_id: &str,
        status: StatusToUpdate,
        notes: Option<NotesInput>,
    ) -> Result<HttpResponse> {
        let id = parse_identifier(vacancy_id)?;

        if let Some(notes) = &notes {
            validate(notes)?;
            detect_sql_injection(notes)?;
        }

        if self.repository.get_by_id(id).await?.is_none() {
            return Err(Error::vacancy_not_found(id));
        }

        let notes = notes.map(|n| n.notes);
        let updated = self
            .repository
            .edit_status(id, status, notes)
            .await?
            .ok_or_else(|| {
                Error::OperationFailed(format!(
                    "Error while trying to update a vacancy for id: {}.",
                    id
                ))
            })?;

        tracing::info!(vacancy_id = %id, status = ?status, "Vacancy status changed");
        HttpResponse::ok(&updated)
    }
}
