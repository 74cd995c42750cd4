// src/record/aggregate.rs

use std::{fmt, io};

use super::ExamRecord;

/// Credit-weighted mean grade over passed records.
///
/// `None` when no passed record carries credits.
pub fn gpa(records: &[ExamRecord]) -> Option<f64> {
    let (weighted, credits) = records
        .iter()
        .filter(|r| r.is_passed())
        .fold((0.0_f64, 0_u32), |(w, c), r| {
            (w + r.grade() * f64::from(r.credits()), c + r.credits())
        });

    if credits == 0 {
        None
    } else {
        Some(weighted / f64::from(credits))
    }
}

/// The console report: GPA header, underline, one line per record.
pub struct Report<'a> {
    records: &'a [ExamRecord],
}

impl<'a> Report<'a> {
    pub fn new(records: &'a [ExamRecord]) -> Self {
        Self { records }
    }

    pub fn gpa(&self) -> Option<f64> {
        gpa(self.records)
    }

    pub fn header(&self) -> String {
        match self.gpa() {
            Some(g) => format!("Your GPA is: {:.2}", g),
            None => "Your GPA is: n/a".to_string(),
        }
    }

    pub fn write_to(&self, out: &mut impl io::Write) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.header();
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "-".repeat(header.chars().count()))?;
        for record in self.records {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
