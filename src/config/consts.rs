// src/config/consts.rs

// Endpoints
pub const LOGIN_URL: &str = "https://cas.uni-mannheim.de/cas/login?service=https%3A%2F%2Fportal.uni-mannheim.de%2Fqisserver%2Frds%3Fstate%3Duser%26type%3D1";
pub const PORTAL_URL: &str = "https://portal.uni-mannheim.de/qisserver/rds";

// Portal overview query
pub const PORTAL_QUERY: &[(&str, &str)] = &[
    ("state", "user"),
    ("type", "8"),
    ("topitem", "pruefungen"),
    ("breadCrumbSource", "portal"),
];

// Anchor text of the results report link
pub const RESULTS_LINK: &str = "Notenspiegel";

// Fixed CAS form fields
pub const LOGIN_EXECUTION: &str = "e1s1";
pub const LOGIN_EVENT_ID: &str = "submit";
pub const LOGIN_SUBMIT: &str = "Login";

// Results table
pub const HEADER_CLASS: &str = "Konto";
pub const CELL_CLASS: &str = "posrecords";

// Local settings
pub const DEFAULT_SETTINGS_FILE: &str = "secrets.yaml";
pub const SETTINGS_EXAMPLE_FILE: &str = "secrets.example.yaml";
pub const SETTINGS_TEMPLATE: &str = "user: ''\npassword: ''\n";
