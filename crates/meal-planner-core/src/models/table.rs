// ABOUTME: In-memory meal table loaded once at startup and shared read-only
// ABOUTME: Tracks which dataset columns were present so queries can reject bad data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{MealColumn, MealRecord};
use std::collections::BTreeSet;

/// Immutable table of meal records
///
/// Wrap it in an `Arc` to share between request handlers; nothing mutates it after
/// construction, so concurrent readers need no locking.
#[derive(Debug, Clone, Default)]
pub struct MealTable {
    columns: BTreeSet<MealColumn>,
    records: Vec<MealRecord>,
}

impl MealTable {
    /// Create a table in which every known column is present
    #[must_use]
    pub fn new(records: Vec<MealRecord>) -> Self {
        Self {
            columns: MealColumn::ALL.into_iter().collect(),
            records,
        }
    }

    /// Create a table that only carries the given columns
    ///
    /// Fields of absent columns hold defaults in every record and must not be read.
    #[must_use]
    pub fn with_columns(
        columns: impl IntoIterator<Item = MealColumn>,
        records: Vec<MealRecord>,
    ) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            records,
        }
    }

    /// All records, in dataset order
    #[must_use]
    pub fn records(&self) -> &[MealRecord] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the dataset provided the given column
    #[must_use]
    pub fn has_column(&self, column: MealColumn) -> bool {
        self.columns.contains(&column)
    }

    /// First column of `required` that the dataset did not provide
    #[must_use]
    pub fn first_missing(&self, required: &[MealColumn]) -> Option<MealColumn> {
        required
            .iter()
            .copied()
            .find(|column| !self.has_column(*column))
    }

    /// Columns missing from the dataset, in catalogue order
    pub fn missing_columns(&self) -> impl Iterator<Item = MealColumn> + '_ {
        MealColumn::ALL
            .into_iter()
            .filter(|column| !self.has_column(*column))
    }
}
