// src/lib.rs

pub mod config;
pub mod error;
pub mod fetch;
pub mod parse;
pub mod record;

use anyhow::{Context, Result};
use tracing::info;

use config::Settings;
use fetch::Portal;
use parse::TableExtractor;
use record::ExamRecord;

/// Log in, open the results report and extract every exam record.
pub fn fetch_records(settings: &Settings) -> Result<Vec<ExamRecord>> {
    let endpoints = settings.endpoints();
    let portal = Portal::new(endpoints).context("building HTTP client")?;

    portal
        .login(&settings.credentials())
        .with_context(|| format!("logging in at {}", settings.login_url))?;
    let page = portal
        .results_page()
        .with_context(|| format!("opening results page via {}", settings.portal_url))?;

    let records = TableExtractor::new(settings.passed_statuses.clone())
        .extract(&page)
        .context("extracting exam records")?;
    info!(records = records.len(), "extracted exam records");
    Ok(records)
}
