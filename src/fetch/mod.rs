// src/fetch/mod.rs

pub mod session;

pub use session::{extract_login_token, find_results_link, login_form, Portal};
