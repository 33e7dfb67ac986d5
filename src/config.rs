use directories::UserDirs;
use log::{debug, warn};
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_DIR, CONFIG_FILE, DEFAULT_BASE_URL, DEFAULT_PER_PAGE, DEFAULT_TIMEOUT_SECS,
    ENTER_BACKEND_URL, ENTER_PER_PAGE, BASE_URL_ENV,
};
use crate::external_api::ApiError;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Backend url, e.g. http://localhost:3333
    pub base_url: String,
    /// Tags per page
    pub per_page: u32,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Ask the user for the backend url and page size
    pub fn from_user_input<R, W>(mut input: R, mut output: W) -> Result<Self, ApiError>
    where
        R: BufRead,
        W: Write,
    {
        output.write_all(ENTER_BACKEND_URL.as_bytes())?;
        output.flush()?;
        let base_url = validate_url(read_line(&mut input)?)?;

        output.write_all(ENTER_PER_PAGE.as_bytes())?;
        output.flush()?;
        let per_page = match read_line(&mut input)?.as_str() {
            "" => DEFAULT_PER_PAGE,
            value => validate_per_page(value)?,
        };

        Ok(Self { base_url, per_page, ..Self::default() })
    }

    /// Read the config file; a missing file means defaults
    pub fn get_config(path_to_config: &Path) -> Result<Self, ApiError> {
        if !path_to_config.exists() {
            debug!("No config at {}, using defaults", path_to_config.display());
            return Ok(Self::default());
        }
        let file = File::open(path_to_config)?;
        Ok(serde_json::from_reader(file)?)
    }

    pub fn save(&self, path_to_config: &Path) -> Result<(), ApiError> {
        if let Some(parent) = path_to_config.parent() {
            fs::create_dir_all(parent).map_err(|_| ApiError::CantCreateConfig)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path_to_config, content).map_err(|_| ApiError::CantCreateConfig)
    }

    /// Config file merged with the `TAGDESK_BASE_URL` override
    pub fn load(path_to_config: &Path) -> Result<Self, ApiError> {
        let mut config = Self::get_config(path_to_config)?;
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = validate_url(base_url)?;
        }
        if config.per_page == 0 {
            warn!("per_page in {} is 0", path_to_config.display());
            return Err(ApiError::PerPageMoreThenZero);
        }
        Ok(config)
    }
}

pub fn get_config_path() -> Result<PathBuf, ApiError> {
    UserDirs::new()
        .map(|user_dirs| user_dirs.home_dir().join(CONFIG_DIR).join(CONFIG_FILE))
        .ok_or(ApiError::NotFoundUserDir)
}

/// The string entered must be a URL; a trailing slash is dropped
pub fn validate_url(mut value: String) -> Result<String, ApiError> {
    let regex = Regex::new(r"^https?://.+$").map_err(|e| ApiError::Parse(e.to_string()))?;
    if !regex.is_match(&value) {
        return Err(ApiError::InvalidUrl);
    }
    if value.ends_with('/') {
        value.pop();
    }
    Ok(value)
}

fn validate_per_page(value: &str) -> Result<u32, ApiError> {
    let per_page: u32 = value.parse().map_err(|_| ApiError::Parse(value.to_string()))?;
    if per_page == 0 {
        return Err(ApiError::PerPageMoreThenZero);
    }
    Ok(per_page)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, ApiError> {
    let mut input_value = String::new();
    input.read_line(&mut input_value)?;
    Ok(input_value.trim().to_string())
}
