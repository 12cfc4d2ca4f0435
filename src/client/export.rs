use crate::client::ClientError;
use crate::core::models::nurse::Nurse;
use chrono::{Datelike, NaiveDate};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use rust_xlsxwriter::Workbook;

pub const CSV_FILE_NAME: &str = "nurses.csv";
pub const CSV_MIME_TYPE: &str = "text/csv";
pub const XLSX_FILE_NAME: &str = "nurses.xlsx";
pub const XLSX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const XLSX_SHEET_NAME: &str = "Nurses";

pub const EXPORT_HEADERS: [&str; 5] = ["ID", "Name", "License Number", "Date of Birth", "Age"];

/// Display format for dates in exports and tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `5/1/2020`
    #[default]
    MonthDayYear,
    /// `1/5/2020`
    DayMonthYear,
    /// `2020-05-01`
    Iso,
}

impl DateStyle {
    pub fn format(self, date: NaiveDate) -> String {
        match self {
            DateStyle::MonthDayYear => format!("{}/{}/{}", date.month(), date.day(), date.year()),
            DateStyle::DayMonthYear => format!("{}/{}/{}", date.day(), date.month(), date.year()),
            DateStyle::Iso => date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// A generated download.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

fn export_row(nurse: &Nurse, style: DateStyle) -> [String; 5] {
    [
        nurse.id.to_string(),
        nurse.name.clone(),
        nurse.license_number.clone(),
        style.format(nurse.dob),
        nurse.age.to_string(),
    ]
}

/// Header row unquoted, every data cell quoted, `\n` between rows and none after the last.
pub fn to_csv(nurses: &[Nurse], style: DateStyle) -> Result<ExportFile, ClientError> {
    if nurses.is_empty() {
        return Err(ClientError::NothingToExport);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for nurse in nurses {
        writer.write_record(export_row(nurse, style))?;
    }
    let rows = writer
        .into_inner()
        .map_err(|e| ClientError::Csv(e.into_error().into()))?;

    let mut bytes = EXPORT_HEADERS.join(",").into_bytes();
    bytes.push(b'\n');
    bytes.extend_from_slice(&rows);
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }

    Ok(ExportFile {
        file_name: CSV_FILE_NAME,
        mime_type: CSV_MIME_TYPE,
        bytes,
    })
}

pub fn to_xlsx(nurses: &[Nurse], style: DateStyle) -> Result<ExportFile, ClientError> {
    if nurses.is_empty() {
        return Err(ClientError::NothingToExport);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(XLSX_SHEET_NAME)?;

    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (i, nurse) in nurses.iter().enumerate() {
        let row = (i + 1) as u32;
        let dob = style.format(nurse.dob);
        worksheet.write_number(row, 0, nurse.id as f64)?;
        worksheet.write_string(row, 1, nurse.name.as_str())?;
        worksheet.write_string(row, 2, nurse.license_number.as_str())?;
        worksheet.write_string(row, 3, dob.as_str())?;
        worksheet.write_number(row, 4, f64::from(nurse.age))?;
    }

    let bytes = workbook.save_to_buffer()?;
    Ok(ExportFile {
        file_name: XLSX_FILE_NAME,
        mime_type: XLSX_MIME_TYPE,
        bytes,
    })
}
