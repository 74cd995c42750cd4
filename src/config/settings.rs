// src/config/settings.rs

use serde::Deserialize;
use std::{fmt, fs, path::Path, time::Duration};
use tracing::{debug, warn};

use super::consts::{LOGIN_URL, PORTAL_URL, RESULTS_LINK, SETTINGS_TEMPLATE};
use crate::error::SettingsError;

/// Contents of the local settings file. Only `user` and `password` are
/// mandatory; everything else falls back to the Mannheim portal defaults.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub user: String,
    pub password: String,
    pub login_url: String,
    pub portal_url: String,
    pub results_link: String,
    /// Status labels (case-insensitive) that count an exam as passed.
    pub passed_statuses: Vec<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user: String::new(),
            password: String::new(),
            login_url: LOGIN_URL.to_string(),
            portal_url: PORTAL_URL.to_string(),
            results_link: RESULTS_LINK.to_string(),
            passed_statuses: vec!["bestanden".to_string(), "passed".to_string()],
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("user", &self.user)
            .field("login_url", &self.login_url)
            .field("portal_url", &self.portal_url)
            .field("results_link", &self.results_link)
            .field("passed_statuses", &self.passed_statuses)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// A missing file is replaced by a blank template and reported as
    /// [`SettingsError::Created`]; blank credentials are reported as
    /// [`SettingsError::BlankCredentials`]. Neither case touches the network.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "settings file missing, writing template");
            fs::write(path, SETTINGS_TEMPLATE)?;
            return Err(SettingsError::Created {
                path: path.to_path_buf(),
            });
        }

        let text = fs::read_to_string(path)?;
        // An empty document deserialises to `None`.
        let settings: Settings = serde_yaml::from_str::<Option<Settings>>(&text)?.unwrap_or_default();
        debug!(?settings, "loaded settings");

        if settings.user.trim().is_empty() || settings.password.is_empty() {
            return Err(SettingsError::BlankCredentials);
        }
        Ok(settings)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            user: self.user.trim().to_string(),
            password: self.password.clone(),
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            login_url: self.login_url.clone(),
            portal_url: self.portal_url.clone(),
            results_link: self.results_link.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[derive(Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Where the portal lives and which link leads to the results page.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub login_url: String,
    pub portal_url: String,
    pub results_link: String,
    pub timeout: Option<Duration>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Settings::default().endpoints()
    }
}
