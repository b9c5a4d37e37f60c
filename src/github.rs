//! GitHub REST client and the host interface the pipeline runs against.

use crate::config::Config;
use crate::error::{GpointsError, Result};
use crate::model::{CommitDetail, CommitSummary, ContributorEntry, OpenIssue};
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// GitHub never returns more than this many items per page.
pub const MAX_PER_PAGE: u32 = 100;

/// The hosting service, as seen by the pipeline.
pub trait HostApi {
    fn list_commits(&self) -> Result<Vec<CommitSummary>>;
    fn commit_detail(&self, sha: &str) -> Result<CommitDetail>;
    fn list_contributors(&self) -> Result<Vec<ContributorEntry>>;
    fn list_open_issues(&self) -> Result<Vec<OpenIssue>>;
}

#[derive(Debug, Deserialize)]
struct RawCommit {
    sha: String,
    commit: RawCommitBody,
    author: Option<RawAccount>,
    committer: Option<RawAccount>,
}

#[derive(Debug, Deserialize)]
struct RawCommitBody {
    author: Option<RawSignature>,
    committer: Option<RawSignature>,
    #[serde(default)]
    message: String,
    verification: Option<RawVerification>,
}

#[derive(Debug, Deserialize)]
struct RawSignature {
    name: Option<String>,
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAccount {
    id: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawVerification {
    #[serde(default)]
    verified: bool,
}

#[derive(Debug, Deserialize)]
struct RawCommitDetail {
    commit: RawCommitBody,
    stats: Option<RawStats>,
}

#[derive(Debug, Deserialize)]
struct RawStats {
    additions: u64,
    deletions: u64,
}

#[derive(Debug, Deserialize)]
struct RawContributor {
    login: String,
    id: u64,
    contributions: u64,
    #[serde(rename = "type")]
    account_type: String,
}

#[derive(Debug, Deserialize)]
struct RawIssue {
    number: u64,
    title: String,
    state: String,
}

impl From<RawCommit> for CommitSummary {
    fn from(raw: RawCommit) -> Self {
        let author = raw.commit.author.as_ref();
        let committer = raw.commit.committer.as_ref();
        Self {
            sha: raw.sha,
            author_name: author.and_then(|s| s.name.clone()).unwrap_or_default(),
            author_id: raw.author.and_then(|a| a.id),
            committer_name: committer.and_then(|s| s.name.clone()).unwrap_or_default(),
            committer_id: raw.committer.and_then(|a| a.id),
            date: author.and_then(|s| s.date.clone()).unwrap_or_default(),
            message: raw.commit.message,
        }
    }
}

pub struct GitHubClient {
    http: Client,
    base_url: String,
    token: String,
    per_page: u32,
    max_pages: u32,
}

impl GitHubClient {
    /// Loads the token up front; a bad credentials file fails here,
    /// before any request is sent.
    pub fn new(config: &Config) -> Result<Self> {
        let token = config.credentials.token()?;
        let http = Client::builder()
            .user_agent(concat!("gpoints/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: format!(
                "{}/repos/{}/{}",
                config.api_url.trim_end_matches('/'),
                config.owner,
                config.repo
            ),
            token,
            per_page: config.per_page.clamp(1, MAX_PER_PAGE),
            max_pages: config.max_pages.max(1),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url} {query:?}");

        let response = self
            .http
            .get(&url)
            .query(query)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GpointsError::Api {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| GpointsError::malformed(path, e.to_string()))
    }

    fn get_pages<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<T>> {
        let mut items = Vec::new();
        for page in 1..=self.max_pages {
            let mut paged = query.to_vec();
            paged.push(("per_page", self.per_page.to_string()));
            paged.push(("page", page.to_string()));

            // per_page never exceeds the host cap, so a short page is the last one
            let batch: Vec<T> = self.get_json(path, &paged)?;
            let last = batch.len() < self.per_page as usize;
            items.extend(batch);
            if last {
                break;
            }
        }
        Ok(items)
    }
}

impl HostApi for GitHubClient {
    fn list_commits(&self) -> Result<Vec<CommitSummary>> {
        let raw: Vec<RawCommit> = self.get_pages("/commits", &[])?;
        Ok(raw.into_iter().map(CommitSummary::from).collect())
    }

    fn commit_detail(&self, sha: &str) -> Result<CommitDetail> {
        let path = format!("/commits/{sha}");
        let raw: RawCommitDetail = self.get_json(&path, &[])?;
        let stats = raw
            .stats
            .ok_or_else(|| GpointsError::malformed(&path, "missing stats"))?;

        Ok(CommitDetail {
            lines_added: stats.additions,
            lines_deleted: stats.deletions,
            verified: raw.commit.verification.map(|v| v.verified).unwrap_or(false),
        })
    }

    fn list_contributors(&self) -> Result<Vec<ContributorEntry>> {
        let raw: Vec<RawContributor> = self.get_pages("/contributors", &[])?;
        Ok(raw
            .into_iter()
            .map(|c| ContributorEntry {
                login: c.login,
                id: c.id,
                contributions: c.contributions,
                account_type: c.account_type,
            })
            .collect())
    }

    fn list_open_issues(&self) -> Result<Vec<OpenIssue>> {
        let raw: Vec<RawIssue> = self.get_pages("/issues", &[("state", "open".to_string())])?;
        Ok(raw
            .into_iter()
            .filter(|i| i.state == "open")
            .map(|i| OpenIssue {
                number: i.number,
                title: i.title,
            })
            .collect())
    }
}
