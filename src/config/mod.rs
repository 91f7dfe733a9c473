use crate::errors::{AppError, AppResult};
use crate::models::LeaveCategory;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

/// Environment variable overriding the configuration directory.
pub const HOME_ENV: &str = "SIAPLAPOR_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Apps Script web-app URL (ends in `/exec`). Unset means offline mode.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Read-only spreadsheet link shown to the principal.
    #[serde(default)]
    pub spreadsheet_url: Option<String>,
    #[serde(default = "default_department")]
    pub department: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub form_links: FormLinks,
    /// Set by `--offline` for the current run; never written to disk.
    #[serde(skip)]
    pub offline: bool,
}

/// Google Form links opened for approved requests, per category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormLinks {
    pub dispensasi_dinas: String,
    pub dispensasi_pribadi: String,
    pub ijin: String,
    #[serde(default)]
    pub cuti: Option<String>,
}

impl Default for FormLinks {
    fn default() -> Self {
        Self {
            dispensasi_dinas: "https://docs.google.com/forms/d/e/1FAIpQLSfsQHG4r8RASmnxieutoZINa9qRDWUwlNQPljj_CWnDOEF8PA/viewform".to_string(),
            dispensasi_pribadi: "https://docs.google.com/forms/d/e/1FAIpQLScMGl22gmgAXjBg_dMB30rXaTVGZLbpQiiWXyJdVtJ1RB__0g/viewform".to_string(),
            ijin: "https://docs.google.com/forms/d/e/1FAIpQLSeTMY4LVGQwAHIOmOy0eXqy3ESxMLly1vWRvnLdo9LoXz8sKA/viewform".to_string(),
            cuti: None,
        }
    }
}

impl FormLinks {
    /// Link for a category; Cuti has none unless configured.
    pub fn for_category(&self, category: LeaveCategory) -> Option<&str> {
        match category {
            LeaveCategory::DispensasiDinas => Some(self.dispensasi_dinas.as_str()),
            LeaveCategory::DispensasiPribadi => Some(self.dispensasi_pribadi.as_str()),
            LeaveCategory::Ijin => Some(self.ijin.as_str()),
            LeaveCategory::Cuti => self.cuti.as_deref().map(str::trim).filter(|s| !s.is_empty()),
        }
    }
}

fn default_department() -> String {
    "UPT SD Negeri Remen 2".to_string()
}
fn default_timeout_secs() -> u64 {
    20
}
fn default_page_size() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            spreadsheet_url: None,
            department: default_department(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
            form_links: FormLinks::default(),
            offline: false,
        }
    }
}

impl Config {
    /// Return the configuration directory: `$SIAPLAPOR_HOME` if set,
    /// otherwise a platform-specific per-user directory.
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(HOME_ENV)
            && !custom.trim().is_empty()
        {
            return PathBuf::from(custom);
        }

        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("siaplapor")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".siaplapor")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("siaplapor.conf")
    }

    /// Return the full path of the session file
    pub fn session_file() -> PathBuf {
        Self::config_dir().join("session.yml")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Configured endpoint, ignoring blank values.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Create the configuration directory and write a fresh config file.
    ///
    /// An existing file is kept unless `overwrite` is set; the endpoint passed
    /// on the command line always replaces the stored one.
    pub fn init_all(endpoint: Option<String>, overwrite: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        let mut cfg = if path.exists() && !overwrite {
            Self::load_from(&path)?
        } else {
            Config::default()
        };

        if endpoint.is_some() {
            cfg.endpoint = endpoint;
        }

        cfg.save_to(&path)?;
        Ok(cfg)
    }
}
