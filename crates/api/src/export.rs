// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;

/// A single sheet of tabular export data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// The sheet name, shown as the tab label.
    pub name: String,
    /// Column headers, written as the first row.
    pub headers: Vec<String>,
    /// Data rows. Every row must have `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Creates an empty sheet with the given name and headers.
    #[must_use]
    pub fn new(name: &str, headers: Vec<String>) -> Self {
        Self {
            name: name.to_owned(),
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends a data row.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] when the row width does not match
    /// the header row.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), ApiError> {
        if row.len() != self.headers.len() {
            return Err(ApiError::InvalidInput {
                field: "row",
                message: format!(
                    "row has {} cells, sheet has {} columns",
                    row.len(),
                    self.headers.len()
                ),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Whether the sheet holds no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serializes the sheet, headers first, as CSV.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyExport`] when the sheet has no data rows, or
    /// [`ApiError::Internal`] when serialization fails.
    pub fn write_csv(&self) -> Result<Vec<u8>, ApiError> {
        if self.rows.is_empty() {
            return Err(ApiError::EmptyExport);
        }
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(&self.headers)
            .map_err(|error| internal(&self.name, &error))?;
        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|error| internal(&self.name, &error))?;
        }
        writer
            .into_inner()
            .map_err(|error| internal(&self.name, &error))
    }
}

/// An export document composed of one or more sheets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Workbook {
    /// The sheets, in tab order.
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Creates an empty workbook.
    #[must_use]
    pub const fn new() -> Self {
        Self { sheets: Vec::new() }
    }

    /// Adds a sheet to the workbook.
    pub fn add_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    /// Serializes every sheet to CSV, paired with its name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyExport`] when the workbook has no sheets or
    /// every sheet is empty. A sheet with zero rows alongside populated
    /// sheets is skipped rather than treated as an error.
    pub fn write_all(&self) -> Result<Vec<(String, Vec<u8>)>, ApiError> {
        let mut out: Vec<(String, Vec<u8>)> = Vec::new();
        for sheet in &self.sheets {
            if sheet.is_empty() {
                tracing::debug!(sheet = %sheet.name, "skipping empty sheet");
                continue;
            }
            out.push((sheet.name.clone(), sheet.write_csv()?));
        }
        if out.is_empty() {
            return Err(ApiError::EmptyExport);
        }
        Ok(out)
    }
}

/// Computes a display width for each column, sized to the widest cell.
///
/// Widths are measured in characters and include the header row. A floor of
/// 8 keeps narrow columns readable.
#[must_use]
pub fn column_widths(sheet: &Sheet) -> Vec<usize> {
    const MIN_WIDTH: usize = 8;
    let mut widths: Vec<usize> = sheet
        .headers
        .iter()
        .map(|header| header.chars().count().max(MIN_WIDTH))
        .collect();
    for row in &sheet.rows {
        for (index, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(index) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }
    widths
}

fn internal(sheet: &str, error: &dyn std::fmt::Display) -> ApiError {
    ApiError::Internal {
        message: format!("csv serialization failed for sheet {sheet}: {error}"),
    }
}
