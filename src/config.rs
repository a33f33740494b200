//! Application settings.
//!
//! Settings are optional: the compiled-in defaults reproduce the fixed
//! credentials and report filename the application ships with, and a YAML
//! file (passed via `--config`) may override them.
//!
//! # File format
//!
//! ```yaml
//! credentials:
//!   username: admin
//!   password: admin123
//! report_path: payroll_report.txt
//! log_level: info
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Default report filename, written into the working directory.
pub const DEFAULT_REPORT_PATH: &str = "payroll_report.txt";

/// The credential pair checked once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Expected username.
    pub username: String,
    /// Expected password.
    pub password: String,
}

impl Credentials {
    /// True when both entered values match exactly.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}

/// Application settings, with defaults matching the shipped behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Startup credential pair.
    pub credentials: Credentials,
    /// Destination of the exported report.
    pub report_path: PathBuf,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::ConfigNotFound`] when the file cannot be
    /// read and [`PayrollError::ConfigParseError`] when it is not valid
    /// YAML for this shape. Fields absent from the file keep their
    /// defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
