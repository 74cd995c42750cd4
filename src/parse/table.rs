// src/parse/table.rs

use std::collections::HashMap;
use tracing::debug;

use super::credits::decode_credits;
use super::page::{normalize, Page};
use crate::config::consts::{CELL_CLASS, HEADER_CLASS};
use crate::error::ExtractError;
use crate::record::{ExamRecord, ExamStatus};

/// Header labels of the five fields we read from each row.
#[derive(Debug, Clone)]
pub struct ColumnLabels {
    pub semester: String,
    pub exam: String,
    pub grade: String,
    pub credits: String,
    pub status: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            semester: "Semester".into(),
            exam: "Prüfungsname".into(),
            grade: "Note".into(),
            credits: "ECTS".into(),
            status: "Status".into(),
        }
    }
}

/// One data cell: normalised visible text plus the raw markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub raw: String,
}

impl Cell {
    pub fn new(text: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            raw: raw.into(),
        }
    }
}

/// Header label → position within a row.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
    width: usize,
}

impl ColumnIndex {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Result<Self, ExtractError> {
        if headers.is_empty() {
            return Err(ExtractError::NoHeaders);
        }
        let mut positions = HashMap::with_capacity(headers.len());
        for (i, h) in headers.iter().enumerate() {
            // first occurrence wins
            positions.entry(normalize(h.as_ref())).or_insert(i);
        }
        Ok(Self {
            positions,
            width: headers.len(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn position(&self, label: &str) -> Result<usize, ExtractError> {
        self.positions
            .get(&normalize(label))
            .copied()
            .ok_or_else(|| ExtractError::MissingColumn(label.to_string()))
    }
}

/// Split the flat cell list into rows of `width` cells, in document order.
pub fn group_rows<T>(cells: &[T], width: usize) -> Result<Vec<&[T]>, ExtractError> {
    if width == 0 {
        return Err(ExtractError::NoHeaders);
    }
    if cells.len() % width != 0 {
        return Err(ExtractError::RaggedTable {
            cells: cells.len(),
            columns: width,
        });
    }
    Ok(cells.chunks_exact(width).collect())
}

/// Turns the results page into [`ExamRecord`]s.
#[derive(Debug, Clone)]
pub struct TableExtractor {
    labels: ColumnLabels,
    passed_statuses: Vec<String>,
}

impl TableExtractor {
    pub fn new(passed_statuses: Vec<String>) -> Self {
        Self {
            labels: ColumnLabels::default(),
            passed_statuses,
        }
    }

    pub fn with_labels(mut self, labels: ColumnLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn extract(&self, page: &Page) -> Result<Vec<ExamRecord>, ExtractError> {
        let headers: Vec<String> = page
            .find_by_class("th", HEADER_CLASS)
            .iter()
            .map(|n| n.normalized_text())
            .collect();
        let cells: Vec<Cell> = page
            .find_by_class("td", CELL_CLASS)
            .iter()
            .map(|n| Cell::new(n.normalized_text(), n.inner_html()))
            .collect();
        debug!(headers = headers.len(), cells = cells.len(), "results table");

        self.extract_cells(&headers, &cells)
    }

    pub fn extract_cells(
        &self,
        headers: &[String],
        cells: &[Cell],
    ) -> Result<Vec<ExamRecord>, ExtractError> {
        let index = ColumnIndex::new(headers)?;
        let semester = index.position(&self.labels.semester)?;
        let exam = index.position(&self.labels.exam)?;
        let grade = index.position(&self.labels.grade)?;
        let credits = index.position(&self.labels.credits)?;
        let status = index.position(&self.labels.status)?;

        group_rows(cells, index.width())?
            .into_iter()
            .map(|row| -> Result<ExamRecord, ExtractError> {
                Ok(ExamRecord::new(
                    row[semester].text.clone(),
                    row[exam].text.clone(),
                    parse_grade(&row[grade].text)?,
                    decode_credits(&row[credits].raw)?,
                    ExamStatus::classify(&row[status].text, self.passed_statuses.as_slice()),
                ))
            })
            .collect()
    }
}

/// German decimal comma → dot.
pub fn parse_grade(text: &str) -> Result<f64, ExtractError> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ExtractError::InvalidGrade(text.to_string()))
}
