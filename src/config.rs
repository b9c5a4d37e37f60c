//! Run configuration and credential loading.

use crate::error::{GpointsError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_OWNER: &str = "Web3-Builders-Alliance";
pub const DEFAULT_REPO: &str = "soda";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_HOST: &str = "github.com";
pub const DEFAULT_PER_PAGE: u32 = 30;
pub const DEFAULT_MAX_PAGES: u32 = 1;

pub const DEFAULT_KEYWORDS: [&str; 6] = [
    "boilerplate",
    "scaffolding",
    "scaffold",
    "scaff",
    "initial",
    "setup",
];

/// Something that can hand out an API token.
pub trait CredentialSource: fmt::Debug {
    fn token(&self) -> Result<String>;
}

/// The GitHub CLI `hosts.yml` file. Without an explicit path the default
/// location is resolved when the token is first requested.
#[derive(Debug, Clone)]
pub struct GhHostsFile {
    pub path: Option<PathBuf>,
    pub host: String,
}

#[derive(Debug, Deserialize)]
struct HostEntry {
    oauth_token: Option<String>,
}

impl GhHostsFile {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            host: DEFAULT_HOST.to_string(),
        }
    }

    /// `$GH_CONFIG_DIR/hosts.yml`, falling back to `~/.config/gh/hosts.yml`.
    pub fn default_path() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os("GH_CONFIG_DIR") {
            return Ok(PathBuf::from(dir).join("hosts.yml"));
        }
        let home = std::env::var_os("HOME").ok_or_else(|| {
            GpointsError::Credentials("HOME is not set; pass --credentials".to_string())
        })?;
        Ok(Path::new(&home).join(".config").join("gh").join("hosts.yml"))
    }

    pub fn parse_token(contents: &str, host: &str) -> Result<String> {
        let hosts: HashMap<String, HostEntry> = serde_yaml::from_str(contents)?;
        hosts
            .get(host)
            .and_then(|entry| entry.oauth_token.clone())
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| GpointsError::Credentials(format!("no oauth_token for host '{host}'")))
    }
}

impl CredentialSource for GhHostsFile {
    fn token(&self) -> Result<String> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => Self::default_path()?,
        };
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            GpointsError::Credentials(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::parse_token(&contents, &self.host)
    }
}

#[derive(Clone)]
pub struct StaticToken(pub String);

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticToken(***)")
    }
}

impl CredentialSource for StaticToken {
    fn token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

#[derive(Debug)]
pub struct Config {
    pub owner: String,
    pub repo: String,
    pub keywords: Vec<String>,
    pub api_url: String,
    pub per_page: u32,
    pub max_pages: u32,
    pub timeout: Option<Duration>,
    pub out_dir: PathBuf,
    pub credentials: Box<dyn CredentialSource>,
}

impl Config {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, credentials: Box<dyn CredentialSource>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            api_url: DEFAULT_API_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            max_pages: DEFAULT_MAX_PAGES,
            timeout: None,
            out_dir: PathBuf::from("."),
            credentials,
        }
    }

    pub fn repo_slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    pub fn commits_csv_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}_{}_commits.csv", self.owner, self.repo))
    }

    pub fn contributors_csv_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}_contributors.csv", self.repo))
    }
}
