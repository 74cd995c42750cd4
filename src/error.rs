// src/error.rs

use std::{io, path::PathBuf};

use thiserror::Error;

/// Problems with the local settings file. All of them stop the run before
/// any request is sent.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file {path} was missing and has been created")]
    Created { path: PathBuf },

    #[error("credentials in the settings file are blank")]
    BlankCredentials,

    #[error("I/O error on settings file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed settings file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("no login token (LT-...) found on the login page")]
    LoginTokenNotFound,

    #[error("no link labelled {label:?} found on the portal page")]
    LinkNotFound { label: String },

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl PortalError {
    /// Short name of the error kind, used in user-facing diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            PortalError::LoginTokenNotFound => "LoginTokenNotFound",
            PortalError::LinkNotFound { .. } => "LinkNotFound",
            PortalError::InvalidUrl { .. } => "InvalidUrl",
            PortalError::Http(_) => "Http",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("results table has no header cells")]
    NoHeaders,

    #[error("{cells} data cells do not divide into rows of {columns} columns")]
    RaggedTable { cells: usize, columns: usize },

    #[error("column {0:?} not found in table headers")]
    MissingColumn(String),

    #[error("grade {0:?} is not a number")]
    InvalidGrade(String),

    #[error("cannot decode credits from {0:?}")]
    InvalidCredits(String),
}
