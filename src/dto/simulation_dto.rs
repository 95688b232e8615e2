use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::currency::format_brl;

const ANNUAL_MULTIPLIER: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    Monthly,
    #[default]
    Annual,
}

impl Period {
    pub fn title(&self) -> &'static str {
        match self {
            Period::Monthly => "Monthly",
            Period::Annual => "Annual",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostSimulationInput {
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub period: Period,
}

impl CostSimulationInput {
    /// Sector filter with blank values treated as "all sectors".
    pub fn sector_filter(&self) -> Option<&str> {
        self.sector.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSimulationOutput {
    pub period: Period,
    pub sector: Option<String>,
    pub estimated_cost: Decimal,
    pub message: String,
}

impl CostSimulationOutput {
    /// Aggregates the monthly salary expectations of the matching in-progress
    /// vacancies into an estimate for the requested period.
    pub fn from_salaries<I>(input: &CostSimulationInput, salaries: I) -> Self
    where
        I: IntoIterator<Item = Decimal>,
    {
        let mut salaries = salaries.into_iter().peekable();
        if salaries.peek().is_none() {
            return Self {
                period: input.period,
                sector: input.sector.clone(),
                estimated_cost: Decimal::ZERO,
                message: "There are no vacancies in progress for the selected filter.".to_string(),
            };
        }

        let mut total: Decimal = salaries.sum();
        if input.period == Period::Annual {
            total *= Decimal::from(ANNUAL_MULTIPLIER);
        }

        let sector_part = input
            .sector_filter()
            .map(|sector| format!(" for sector '{}'", sector))
            .unwrap_or_default();

        Self {
            period: input.period,
            sector: input.sector.clone(),
            estimated_cost: total,
            message: format!(
                "Estimated total cost ({}){}: {}",
                input.period.title(),
                sector_part,
                format_brl(total)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn salaries() -> Vec<Decimal> {
        vec![Decimal::from(1000), Decimal::from(2000), Decimal::from(3000)]
    }

    #[test]
    fn period_defaults_to_annual() {
        let input: CostSimulationInput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(input.period, Period::Annual);
        assert!(input.sector.is_none());
    }

    #[test]
    fn monthly_estimate_is_plain_sum() {
        let input = CostSimulationInput {
            sector: None,
            period: Period::Monthly,
        };
        let out = CostSimulationOutput::from_salaries(&input, salaries());
        assert_eq!(out.estimated_cost, Decimal::from(6000));
        assert_eq!(out.message, "Estimated total cost (Monthly): R$ 6.000,00");
    }

    #[test]
    fn annual_estimate_multiplies_by_twelve() {
        let input = CostSimulationInput {
            sector: Some("IT".into()),
            period: Period::Annual,
        };
        let out = CostSimulationOutput::from_salaries(&input, salaries());
        assert_eq!(out.estimated_cost, Decimal::from(72000));
        assert_eq!(
            out.message,
            "Estimated total cost (Annual) for sector 'IT': R$ 72.000,00"
        );
    }

    #[test]
    fn no_matches_yields_zero_estimate() {
        let out = CostSimulationOutput::from_salaries(&CostSimulationInput::default(), Vec::new());
        assert_eq!(out.estimated_cost, Decimal::ZERO);
        assert!(out.message.contains("no vacancies"));
    }
}
