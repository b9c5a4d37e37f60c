use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const SCHEMA_VERSION: u32 = 1;

/// A commit as listed by the host, before its stats are fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub sha: String,
    pub author_name: String,
    pub author_id: Option<u64>,
    pub committer_name: String,
    pub committer_id: Option<u64>,
    pub date: String,
    pub message: String,
}

impl CommitSummary {
    /// Rows missing any of these fields are dropped before scoring.
    pub fn is_malformed(&self) -> bool {
        self.sha.is_empty()
            || self.author_name.is_empty()
            || self.committer_name.is_empty()
            || self.date.is_empty()
            || self.message.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitDetail {
    pub lines_added: u64,
    pub lines_deleted: u64,
    pub verified: bool,
}

/// One scored row of the commits CSV. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    #[serde(rename = "SHA")]
    pub sha: String,
    #[serde(rename = "Author")]
    pub author_name: String,
    #[serde(rename = "Author ID")]
    pub author_id: Option<u64>,
    #[serde(rename = "Committer")]
    pub committer_name: String,
    #[serde(rename = "Committer ID")]
    pub committer_id: Option<u64>,
    #[serde(rename = "Date")]
    pub date: DateTime<Utc>,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Lines Added")]
    pub lines_added: u64,
    #[serde(rename = "Lines Deleted")]
    pub lines_deleted: u64,
    #[serde(
        rename = "Verified",
        serialize_with = "serialize_flag",
        deserialize_with = "deserialize_flag"
    )]
    pub verified: bool,
    #[serde(rename = "Points")]
    pub points: u64,
}

pub const COMMIT_HEADERS: [&str; 11] = [
    "SHA",
    "Author",
    "Author ID",
    "Committer",
    "Committer ID",
    "Date",
    "Message",
    "Lines Added",
    "Lines Deleted",
    "Verified",
    "Points",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorEntry {
    pub login: String,
    pub id: u64,
    pub contributions: u64,
    pub account_type: String,
}

impl ContributorEntry {
    pub fn is_bot(&self) -> bool {
        self.account_type == "Bot"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorRecord {
    #[serde(rename = "Login")]
    pub login: String,
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Contributions")]
    pub contributions: u64,
}

pub const CONTRIBUTOR_HEADERS: [&str; 3] = ["Login", "ID", "Contributions"];

impl From<ContributorEntry> for ContributorRecord {
    fn from(entry: ContributorEntry) -> Self {
        Self {
            login: entry.login,
            id: entry.id,
            contributions: entry.contributions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenIssue {
    pub number: u64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub id: u64,
    pub names: Vec<String>,
    pub label: String,
    pub points: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository: String,
    pub commits_csv: String,
    pub distribution_chart: String,
    pub contributions_chart: Option<String>,
    pub total_points: u64,
    pub entries: Vec<ScoreEntry>,
    pub contributors: Vec<ContributorRecord>,
    pub open_issues: Vec<OpenIssue>,
}

fn serialize_flag<S: Serializer>(value: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "True" } else { "False" })
}

fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(serde::de::Error::custom(format!("invalid Verified value '{other}'"))),
    }
}
