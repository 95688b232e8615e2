use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum Urgency {
    Low = 0,
    Medium = 1,
    High = 2,
}

impl TryFrom<i16> for Urgency {
    type Error = String;

    fn try_from(value: i16) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Urgency::Low),
            1 => Ok(Urgency::Medium),
            2 => Ok(Urgency::High),
            other => Err(format!("invalid urgency {}, expected 0, 1 or 2", other)),
        }
    }
}

impl From<Urgency> for i16 {
    fn from(value: Urgency) -> Self {
        value as i16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    InProgress,
    Finished,
    Canceled,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InProgress => "IN_PROGRESS",
            Status::Finished => "FINISHED",
            Status::Canceled => "CANCELED",
        }
    }
}

impl std::str::FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN_PROGRESS" => Ok(Status::InProgress),
            "FINISHED" => Ok(Status::Finished),
            "CANCELED" => Ok(Status::Canceled),
            other => Err(Error::Internal(format!("unknown vacancy status '{}'", other))),
        }
    }
}

/// Terminal states reachable through the edit-status workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusToUpdate {
    Finished,
    Canceled,
}

impl From<StatusToUpdate> for Status {
    fn from(value: StatusToUpdate) -> Self {
        match value {
            StatusToUpdate::Finished => Status::Finished,
            StatusToUpdate::Canceled => Status::Canceled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: Uuid,
    pub description: String,
    pub sector: String,
    pub manager: String,
    pub salary_expectation: Decimal,
    pub urgency: Urgency,
    pub status: Status,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mutable fields of a vacancy, already validated and typed.
#[derive(Debug, Clone, PartialEq)]
pub struct VacancyRecord {
    pub description: String,
    pub sector: String,
    pub manager: String,
    pub salary_expectation: Decimal,
    pub urgency: Urgency,
    pub status: Status,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct VacancyRow {
    pub id: Uuid,
    pub description: String,
    pub sector: String,
    pub manager: String,
    pub salary_expectation: Decimal,
    pub urgency: i16,
    pub status: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<VacancyRow> for Vacancy {
    type Error = Error;

    fn try_from(row: VacancyRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            description: row.description,
            sector: row.sector,
            manager: row.manager,
            salary_expectation: row.salary_expectation,
            urgency: Urgency::try_from(row.urgency).map_err(Error::Internal)?,
            status: row.status.parse()?,
            start_date: row.start_date,
            end_date: row.end_date,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl Vacancy {
    pub fn from_record(id: Uuid, record: VacancyRecord, now: DateTime<Utc>) -> Self {
        Self {
            id,
            description: record.description,
            sector: record.sector,
            manager: record.manager,
            salary_expectation: record.salary_expectation,
            urgency: record.urgency,
            status: record.status,
            start_date: record.start_date,
            end_date: record.end_date,
            notes: record.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every mutable field and stamps `updated_at`.
    pub fn apply(&mut self, record: VacancyRecord, now: DateTime<Utc>) {
        self.description = record.description;
        self.sector = record.sector;
        self.manager = record.manager;
        self.salary_expectation = record.salary_expectation;
        self.urgency = record.urgency;
        self.status = record.status;
        self.start_date = record.start_date;
        self.end_date = record.end_date;
        self.notes = record.notes;
        self.updated_at = now;
    }

    /// Moves the vacancy to a terminal status, closing it at `now`.
    /// `Some(notes)` replaces the stored notes, including with `None`.
    pub fn close(
        &mut self,
        status: StatusToUpdate,
        notes: Option<Option<String>>,
        now: DateTime<Utc>,
    ) {
        self.status = status.into();
        self.end_date = Some(now);
        self.updated_at = now;
        if let Some(notes) = notes {
            self.notes = notes;
        }
    }
}
