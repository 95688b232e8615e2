use std::sync::Arc;

use crate::error::Result;
use crate::repositories::HealthRepository;
use crate::response::HttpResponse;

#[derive(Clone)]
pub struct GetHealthStatusUseCase {
    repository: Arc<dyn HealthRepository>,
}

impl GetHealthStatusUseCase {
    pub fn new(repository: Arc<dyn HealthRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> HttpResponse {
        self.run().await.unwrap_or_else(HttpResponse::from_error)
    }

    async fn run(&self) -> Result<HttpResponse> {
        let status = self.repository.check_database_health().await?;
        tracing::debug!(
            opened_connections = status.dependencies.database.opened_connections,
            "Health check completed"
        );
        HttpResponse::ok(&status)
    }
}
