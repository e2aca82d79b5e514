// ABOUTME: Loads the delimited meal dataset into an immutable in-memory MealTable
// ABOUTME: Normalizes headers and text cells, parses macronutrients, records missing columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal dataset loader
//!
//! The dataset is read once at startup. Header names are trimmed and a leading
//! byte-order mark is ignored. Columns the engine needs but the file lacks are
//! not a load failure: the table remembers they are absent and every query then
//! answers with a data configuration error.

use csv::{ReaderBuilder, StringRecord};
use meal_planner_core::models::{MacroNutrients, MealColumn, MealRecord, MealTable};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Errors raised while loading the meal dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be opened
    #[error("failed to open meal dataset {path}")]
    Open {
        /// Path that was tried
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid delimited text
    #[error("failed to read meal dataset")]
    Csv(#[from] csv::Error),
    /// A numeric cell held something other than a number
    #[error("meal dataset row {row}: column '{column}' is not numeric: '{value}'")]
    InvalidNumber {
        /// Data row number, starting at 1 after the header
        row: usize,
        /// Column of the bad cell
        column: MealColumn,
        /// Raw cell content
        value: String,
    },
}

/// Load the meal dataset from a file
///
/// # Errors
///
/// Returns `DatasetError::Open` if the file cannot be opened and any error of
/// [`load_meal_table_from_reader`] otherwise.
pub fn load_meal_table(path: &Path) -> Result<MealTable, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let table = load_meal_table_from_reader(file)?;
    info!(path = %path.display(), meals = table.len(), "Meal dataset loaded");
    Ok(table)
}

/// Load the meal dataset from any reader producing comma-separated text
///
/// # Errors
///
/// Returns `DatasetError::Csv` for malformed input and `DatasetError::InvalidNumber`
/// when a non-empty numeric cell does not parse.
pub fn load_meal_table_from_reader<R: Read>(reader: R) -> Result<MealTable, DatasetError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let positions = column_positions(reader.headers()?);
    for column in MealColumn::ALL {
        if !positions.contains_key(&column) {
            warn!(column = %column, "Meal dataset is missing column");
        }
    }

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        records.push(parse_record(&row?, index + 1, &positions)?);
    }

    Ok(MealTable::with_columns(positions.into_keys(), records))
}

/// Map recognised headers to their field index; the first duplicate wins
fn column_positions(headers: &StringRecord) -> BTreeMap<MealColumn, usize> {
    let mut positions = BTreeMap::new();
    for (index, header) in headers.iter().enumerate() {
        if let Some(column) = MealColumn::from_header(header.trim_start_matches(BYTE_ORDER_MARK)) {
            positions.entry(column).or_insert(index);
        }
    }
    positions
}

fn parse_record(
    row: &StringRecord,
    row_number: usize,
    positions: &BTreeMap<MealColumn, usize>,
) -> Result<MealRecord, DatasetError> {
    let cell = |column: MealColumn| {
        positions
            .get(&column)
            .and_then(|index| row.get(*index))
            .unwrap_or_default()
    };
    let number = |column: MealColumn| parse_numeric(cell(column), row_number, column);

    let nutrients = MacroNutrients::new(
        number(MealColumn::Calories)?,
        number(MealColumn::Protein)?,
        number(MealColumn::Carbs)?,
        number(MealColumn::Fats)?,
    );

    Ok(
        MealRecord::new(cell(MealColumn::FoodRecommendations), cell(MealColumn::Diet), nutrients)
            .with_diseases(cell(MealColumn::Diseases))
            .with_medications(cell(MealColumn::Medications))
            .with_allergies(cell(MealColumn::Allergies))
            .with_dietary_restrictions(cell(MealColumn::DietaryRestrictions)),
    )
}

/// Empty cells become NaN
fn parse_numeric(raw: &str, row: usize, column: MealColumn) -> Result<f64, DatasetError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(f64::NAN);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| DatasetError::InvalidNumber {
            row,
            column,
            value: trimmed.to_owned(),
        })
}
