pub mod health_dto;
pub mod media_dto;
pub mod simulation_dto;
pub mod vacancy_dto;
