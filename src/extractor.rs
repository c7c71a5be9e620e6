//! Pulls two named columns out of a workbook.

use std::path::Path;

use itertools::Itertools;
use umya_spreadsheet::Worksheet;

use crate::dataset::Dataset;
use crate::prelude::*;

/// Reads the two named columns from the first sheet of the workbook.
///
/// Any failure is logged and collapsed into an empty dataset; the caller
/// checks for emptiness instead of handling an error.
pub fn extract(path: &Path, x_column: &str, y_column: &str) -> Dataset {
    match try_extract(path, x_column, y_column) {
        Ok(dataset) => {
            tracing::info!(n_records = dataset.len(), "loaded");
            dataset
        }
        Err(error) => {
            tracing::error!("failed to load the dataset: {:#}", error);
            Dataset::default()
        }
    }
}

#[tracing::instrument(skip_all, fields(path = %path.display()))]
fn try_extract(path: &Path, x_column: &str, y_column: &str) -> Result<Dataset> {
    let book = umya_spreadsheet::reader::xlsx::read(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let sheet = book.get_sheet(&0).context("the workbook has no sheets")?;
    extract_sheet(sheet, x_column, y_column)
}

fn extract_sheet(sheet: &Worksheet, x_column: &str, y_column: &str) -> Result<Dataset> {
    let n_columns = sheet.get_highest_column();
    let n_rows = sheet.get_highest_row();

    // Row 1 is the header row, data starts at row 2.
    let headers: Vec<String> = (1..=n_columns)
        .map(|column| sheet.get_value((column, 1)))
        .collect();
    tracing::debug!(headers = headers.iter().join(", ").as_str());

    let column_error = || {
        anyhow!(
            "check that the columns {x_column:?} and {y_column:?} exist in the sheet {:?} and have a value in every row",
            sheet.get_name(),
        )
    };
    let position = |name: &str| {
        headers
            .iter()
            .position(|header| header == name)
            .map(|index| index as u32 + 1)
    };
    let (x_index, y_index) = position(x_column)
        .zip(position(y_column))
        .ok_or_else(column_error)?;

    let mut dataset = Dataset::default();
    for row in 2..=n_rows {
        if (1..=n_columns).all(|column| sheet.get_value((column, row)).is_empty()) {
            continue;
        }
        let x_value = sheet.get_value((x_index, row));
        let y_value = sheet.get_value((y_index, row));
        if x_value.is_empty() || y_value.is_empty() {
            return Err(column_error());
        }
        dataset.push(
            parse_number(&x_value, x_column, row)?,
            parse_number(&y_value, y_column, row)?,
        );
    }
    Ok(dataset)
}

fn parse_number(value: &str, column: &str, row: u32) -> Result<f64> {
    value
        .parse()
        .with_context(|| format!("the value {value:?} in column {column:?} at row {row} is not numeric"))
}
