// src/fetch/session.rs

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::blocking::Client;
use tracing::{debug, info};
use url::Url;

use crate::config::consts::{LOGIN_EVENT_ID, LOGIN_EXECUTION, LOGIN_SUBMIT, PORTAL_QUERY};
use crate::config::{Credentials, Endpoints};
use crate::error::PortalError;
use crate::parse::Page;

static LOGIN_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(LT-.*?)""#).expect("login token regex should compile"));

/// An authenticated browsing session against the CAS login and QIS portal.
/// Cookies from the login handshake stay in the client's store for every
/// later request.
pub struct Portal {
    client: Client,
    endpoints: Endpoints,
}

impl Portal {
    pub fn new(endpoints: Endpoints) -> Result<Self, PortalError> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .user_agent(concat!("qisscraper/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = endpoints.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoints,
        })
    }

    /// Fetch the login page, pick up its one-time `lt` token and submit the
    /// login form. The response status is not checked: a rejected login
    /// shows up as a missing results link later on.
    pub fn login(&self, creds: &Credentials) -> Result<(), PortalError> {
        let login_url = parse_url(&self.endpoints.login_url)?;
        let page = get_text(&self.client, &login_url)?;
        let lt = extract_login_token(&page)?;
        debug!(%lt, "found login token");

        let resp = self
            .client
            .post(login_url)
            .form(&login_form(creds, &lt))
            .send()?;
        info!(status = %resp.status(), user = %creds.user, "submitted login form");
        Ok(())
    }

    /// Open the exams overview and resolve the link to the results report.
    pub fn results_link(&self) -> Result<Url, PortalError> {
        let portal_url = parse_url(&self.endpoints.portal_url)?;
        debug!(url = %portal_url, "fetching exams overview");
        let resp = self
            .client
            .get(portal_url)
            .query(PORTAL_QUERY)
            .send()?
            .error_for_status()?;
        let base = resp.url().clone();
        let html = resp.text()?;

        let label = &self.endpoints.results_link;
        let href = find_results_link(&html, label)?;
        base.join(&href).map_err(|source| PortalError::InvalidUrl { url: href, source })
    }

    /// Follow the results link and parse the report page.
    pub fn results_page(&self) -> Result<Page, PortalError> {
        let url = self.results_link()?;
        info!(%url, "fetching results page");
        let html = get_text(&self.client, &url)?;
        Ok(Page::parse(&html))
    }
}

fn get_text(client: &Client, url: &Url) -> Result<String, PortalError> {
    debug!("Fetching text from {}", url);
    Ok(client.get(url.clone()).send()?.error_for_status()?.text()?)
}

fn parse_url(raw: &str) -> Result<Url, PortalError> {
    Url::parse(raw).map_err(|source| PortalError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

/// First `LT-...` token on the page, up to the closing quote.
pub fn extract_login_token(html: &str) -> Result<String, PortalError> {
    LOGIN_TOKEN
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(PortalError::LoginTokenNotFound)
}

/// CAS login form fields, in submission order.
pub fn login_form<'a>(creds: &'a Credentials, lt: &'a str) -> [(&'static str, &'a str); 6] {
    [
        ("username", creds.user.as_str()),
        ("password", creds.password.as_str()),
        ("lt", lt),
        ("execution", LOGIN_EXECUTION),
        ("_eventId", LOGIN_EVENT_ID),
        ("submit", LOGIN_SUBMIT),
    ]
}

/// `href` of the anchor whose text is exactly `label`.
pub fn find_results_link(html: &str, label: &str) -> Result<String, PortalError> {
    Page::parse(html)
        .find_link_by_text(label)
        .map(str::to_string)
        .ok_or_else(|| PortalError::LinkNotFound {
            label: label.to_string(),
        })
}
