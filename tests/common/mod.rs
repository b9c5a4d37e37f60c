#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use gpoints::error::{GpointsError, Result};
use gpoints::github::HostApi;
use gpoints::model::{CommitDetail, CommitRecord, CommitSummary, ContributorEntry, OpenIssue};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory stand-in for the hosting API.
#[derive(Default)]
pub struct FixtureApi {
    pub commits: Vec<CommitSummary>,
    pub details: HashMap<String, CommitDetail>,
    pub contributors: Vec<ContributorEntry>,
    pub issues: Vec<OpenIssue>,
    pub detail_calls: RefCell<Vec<String>>,
}

impl FixtureApi {
    pub fn with_commit(mut self, summary: CommitSummary, detail: CommitDetail) -> Self {
        self.details.insert(summary.sha.clone(), detail);
        self.commits.push(summary);
        self
    }
}

impl HostApi for FixtureApi {
    fn list_commits(&self) -> Result<Vec<CommitSummary>> {
        Ok(self.commits.clone())
    }

    fn commit_detail(&self, sha: &str) -> Result<CommitDetail> {
        self.detail_calls.borrow_mut().push(sha.to_string());
        self.details.get(sha).copied().ok_or_else(|| GpointsError::Api {
            status: 404,
            url: format!("fixture://commits/{sha}"),
        })
    }

    fn list_contributors(&self) -> Result<Vec<ContributorEntry>> {
        Ok(self.contributors.clone())
    }

    fn list_open_issues(&self) -> Result<Vec<OpenIssue>> {
        Ok(self.issues.clone())
    }
}

pub fn summary(sha: &str, author: (&str, Option<u64>), committer: (&str, Option<u64>), message: &str) -> CommitSummary {
    CommitSummary {
        sha: sha.to_string(),
        author_name: author.0.to_string(),
        author_id: author.1,
        committer_name: committer.0.to_string(),
        committer_id: committer.1,
        date: "2024-03-01T12:00:00Z".to_string(),
        message: message.to_string(),
    }
}

pub fn detail(lines_added: u64, lines_deleted: u64, verified: bool) -> CommitDetail {
    CommitDetail {
        lines_added,
        lines_deleted,
        verified,
    }
}

pub fn record(sha: &str, author: (&str, Option<u64>), committer: (&str, Option<u64>), points: u64) -> CommitRecord {
    CommitRecord {
        sha: sha.to_string(),
        author_name: author.0.to_string(),
        author_id: author.1,
        committer_name: committer.0.to_string(),
        committer_id: committer.1,
        date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        message: "change".to_string(),
        lines_added: 1,
        lines_deleted: 0,
        verified: false,
        points,
    }
}

pub fn contributor(login: &str, id: u64, contributions: u64, account_type: &str) -> ContributorEntry {
    ContributorEntry {
        login: login.to_string(),
        id,
        contributions,
        account_type: account_type.to_string(),
    }
}
