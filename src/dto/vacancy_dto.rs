use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use validator::{Validate, ValidationError};

use crate::models::vacancy::{Status, StatusToUpdate, Urgency, Vacancy, VacancyRecord};
use crate::utils::injection::StringFields;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// A date as received from the caller, before it has been checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Timestamp(DateTime<Utc>),
    Text(String),
    Other(JsonValue),
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Timestamp(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VacancyInput {
    #[validate(length(min = 1, max = 255))]
    pub description: String,
    #[validate(length(min = 1, max = 255))]
    pub sector: String,
    #[validate(length(min = 1, max = 255))]
    pub manager: String,
    #[validate(custom(function = "validate_non_negative"))]
    pub salary_expectation: Decimal,
    pub urgency: Urgency,
    pub status: Status,
    #[serde(default)]
    pub start_date: Option<DateInput>,
    #[serde(default)]
    pub end_date: Option<DateInput>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub notes: Option<String>,
}

impl VacancyInput {
    /// Builds the storage record once the dates have been validated.
    pub fn into_record(self, start_date: DateTime<Utc>, end_date: Option<DateTime<Utc>>) -> VacancyRecord {
        VacancyRecord {
            description: self.description,
            sector: self.sector,
            manager: self.manager,
            salary_expectation: self.salary_expectation,
            urgency: self.urgency,
            status: self.status,
            start_date,
            end_date,
            notes: self.notes,
        }
    }
}

impl StringFields for VacancyInput {
    fn string_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("description", self.description.as_str()),
            ("sector", self.sector.as_str()),
            ("manager", self.manager.as_str()),
        ];
        if let Some(notes) = self.notes.as_deref() {
            fields.push(("notes", notes));
        }
        fields
    }
}

fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("salary_expectation must not be negative".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NotesInput {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub notes: Option<String>,
}

impl StringFields for NotesInput {
    fn string_fields(&self) -> Vec<(&'static str, &str)> {
        self.notes
            .as_deref()
            .map(|notes| vec![("notes", notes)])
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EditStatusQuery {
    pub vacancy_status: StatusToUpdate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VacancyListQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub search: Option<String>,
}

/// Normalised listing window; `page` is 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub search: Option<String>,
}

impl Pagination {
    pub fn new(page: Option<i64>, page_size: Option<i64>, search: Option<String>) -> Self {
        let page = page.unwrap_or(DEFAULT_PAGE).max(1);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            page,
            page_size,
            search,
        }
    }

    /// Rows to skip. Saturates, so a huge page is simply past the end.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Case-insensitive substring match over the searchable columns.
    pub fn matches(&self, vacancy: &Vacancy) -> bool {
        let Some(search) = self.search.as_deref() else {
            return true;
        };
        let needle = search.to_lowercase();
        [
            Some(vacancy.description.as_str()),
            Some(vacancy.sector.as_str()),
            Some(vacancy.manager.as_str()),
            vacancy.notes.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl From<VacancyListQuery> for Pagination {
    fn from(query: VacancyListQuery) -> Self {
        Pagination::new(query.page, query.page_size, query.search)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationResponse {
    pub data: Vec<Vacancy>,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub message: String,
}
