// src/record/mod.rs

pub mod aggregate;

pub use aggregate::{gpa, Report};

use std::fmt;

/// Status cell of one exam, kept verbatim alongside its classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamStatus {
    raw: String,
    passed: bool,
}

impl ExamStatus {
    /// Classify `raw` against the configured passed labels (case-insensitive).
    pub fn classify<S: AsRef<str>>(raw: &str, passed_labels: &[S]) -> Self {
        let needle = raw.trim().to_lowercase();
        let passed = !needle.is_empty()
            && passed_labels
                .iter()
                .any(|label| label.as_ref().trim().to_lowercase() == needle);
        Self {
            raw: raw.to_string(),
            passed,
        }
    }

    pub fn passed(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            passed: true,
        }
    }

    pub fn not_passed(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            passed: false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_passed(&self) -> bool {
        self.passed
    }
}

/// One row of the results table.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamRecord {
    semester: String,
    exam: String,
    grade: f64,
    credits: u32,
    status: ExamStatus,
}

impl ExamRecord {
    pub fn new(
        semester: impl Into<String>,
        exam: impl Into<String>,
        grade: f64,
        credits: u32,
        status: ExamStatus,
    ) -> Self {
        Self {
            semester: semester.into(),
            exam: exam.into(),
            grade,
            credits,
            status,
        }
    }

    pub fn semester(&self) -> &str {
        &self.semester
    }

    pub fn exam(&self) -> &str {
        &self.exam
    }

    pub fn grade(&self) -> f64 {
        self.grade
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn status(&self) -> &ExamStatus {
        &self.status
    }

    pub fn is_passed(&self) -> bool {
        self.status.is_passed()
    }
}

impl fmt::Display for ExamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_passed() {
            write!(
                f,
                "{:<14}{:<40} > {} ({} ECTS)",
                self.semester,
                self.exam,
                format_grade(self.grade),
                self.credits
            )
        } else {
            write!(f, "Not yet passed: {}", self.exam)
        }
    }
}

/// Always show a fractional part: `2.0`, `1.7`.
fn format_grade(grade: f64) -> String {
    let s = grade.to_string();
    if s.contains('.') || !grade.is_finite() {
        s
    } else {
        format!("{}.0", s)
    }
}
