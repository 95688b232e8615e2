use std::path::PathBuf;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::*;
use uuid::Uuid;

use super::{sanitize_file_component, ReportGenerator, XLSX_MEDIA_TYPE};
use crate::error::{Error, Result};
use crate::models::vacancy::Vacancy;

const SALARY_FORMAT: &str = "\"R$\" #,##0.00";

/// Spreadsheet rendering of the vacancy cost report.
#[derive(Debug, Clone)]
pub struct XlsxReportGenerator {
    output_dir: PathBuf,
}

impl XlsxReportGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn build_workbook(vacancies: &[Vacancy]) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Vacancies")?;

        let header_bg = Color::RGB(0x808080);
        let total_bg = Color::RGB(0xD3D3D3);

        let columns = [
            ("Description", 45.0),
            ("Sector", 20.0),
            ("Manager", 30.0),
            ("Salary expectation", 24.0),
        ];
        for (i, (_, width)) in columns.iter().enumerate() {
            worksheet.set_column_width(i as u16, *width)?;
        }

        let title_format = Format::new()
            .set_font_size(16)
            .set_bold()
            .set_align(FormatAlign::CenterAcross)
            .set_align(FormatAlign::VerticalCenter);
        worksheet.set_row_height(0, 30)?;
        worksheet.merge_range(
            0,
            0,
            0,
            (columns.len() - 1) as u16,
            "Vacancy cost report",
            &title_format,
        )?;

        let header_format = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(header_bg)
            .set_border(FormatBorder::Thin);
        let header_row = 2;
        for (i, (name, _)) in columns.iter().enumerate() {
            worksheet.write_string_with_format(header_row, i as u16, *name, &header_format)?;
        }

        let cell_format = Format::new().set_border(FormatBorder::Thin);
        let salary_format = cell_format
            .clone()
            .set_num_format(SALARY_FORMAT)
            .set_align(FormatAlign::Right);

        let mut total = Decimal::ZERO;
        let mut row = header_row + 1;
        for vacancy in vacancies {
            worksheet.write_string_with_format(row, 0, &vacancy.description, &cell_format)?;
            worksheet.write_string_with_format(row, 1, &vacancy.sector, &cell_format)?;
            worksheet.write_string_with_format(row, 2, &vacancy.manager, &cell_format)?;
            worksheet.write_number_with_format(
                row,
                3,
                to_f64(vacancy.salary_expectation),
                &salary_format,
            )?;
            total += vacancy.salary_expectation;
            row += 1;
        }

        let total_format = cell_format.clone().set_bold().set_background_color(total_bg);
        let total_salary_format = salary_format.clone().set_bold().set_background_color(total_bg);
        worksheet.write_string_with_format(row, 0, "Total", &total_format)?;
        worksheet.write_blank(row, 1, &total_format)?;
        worksheet.write_blank(row, 2, &total_format)?;
        worksheet.write_number_with_format(row, 3, to_f64(total), &total_salary_format)?;

        Ok(workbook)
    }
}

fn to_f64(value: Decimal) -> f64 {
    value.round_dp(2).to_f64().unwrap_or_default()
}

impl ReportGenerator for XlsxReportGenerator {
    fn generate(&self, vacancies: &[Vacancy]) -> Result<PathBuf> {
        let first = vacancies
            .first()
            .ok_or_else(|| Error::NoReportData("No vacancies to generate report.".to_string()))?;

        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!(
            "vacancy_summary_{}_{}.{}",
            sanitize_file_component(&first.sector),
            Uuid::new_v4().simple(),
            self.extension()
        ));

        let mut workbook = Self::build_workbook(vacancies)?;
        workbook.save(&path)?;

        tracing::info!(rows = vacancies.len(), path = %path.display(), "Vacancy report written");
        Ok(path)
    }

    fn media_type(&self) -> &'static str {
        XLSX_MEDIA_TYPE
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vacancy::{Status, Urgency};
    use crate::utils::time::now;

    fn vacancy(sector: &str, salary: i64) -> Vacancy {
        Vacancy {
            id: Uuid::new_v4(),
            description: "Data analyst".into(),
            sector: sector.into(),
            manager: "Joana".into(),
            salary_expectation: Decimal::from(salary),
            urgency: Urgency::Low,
            status: Status::InProgress,
            start_date: now(),
            end_date: None,
            notes: None,
            created_at: now(),
            updated_at: now(),
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let generator = XlsxReportGenerator::new(dir.path());
        let err = generator.generate(&[]).unwrap_err();
        assert!(matches!(err, Error::NoReportData(_)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn writes_workbook_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let generator = XlsxReportGenerator::new(dir.path().join("reports"));
        let path = generator
            .generate(&[vacancy("IT", 1000), vacancy("IT", 2500)])
            .unwrap();

        assert!(path.starts_with(dir.path().join("reports")));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("xlsx"));
        let bytes = std::fs::read(&path).unwrap();
        // xlsx files are zip archives
        assert_eq!(&bytes[..2], b"PK");
    }
}
