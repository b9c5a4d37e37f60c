use crate::config::{self, Config, GhHostsFile};
use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "gpoints")]
#[command(about = "GitHub contribution scoring with CSV snapshots and chart reports")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Repository owner", default_value = config::DEFAULT_OWNER)]
    pub owner: String,

    #[arg(long, help = "Repository name", default_value = config::DEFAULT_REPO)]
    pub repo: String,

    #[arg(long, help = "Path to the gh hosts.yml holding the API token")]
    pub credentials: Option<PathBuf>,

    #[arg(long, help = "GitHub API base URL", default_value = config::DEFAULT_API_URL)]
    pub api_url: String,

    #[arg(long, help = "Directory for CSV and chart output", default_value = ".")]
    pub out_dir: PathBuf,

    #[arg(long = "keyword", help = "Boilerplate keyword (repeatable, replaces the defaults)")]
    pub keywords: Vec<String>,

    #[arg(long, help = "Items per page for list requests", default_value_t = config::DEFAULT_PER_PAGE)]
    pub per_page: u32,

    #[arg(long, help = "Maximum pages fetched per list request", default_value_t = config::DEFAULT_MAX_PAGES)]
    pub max_pages: u32,

    #[arg(long, help = "Request timeout in seconds (none by default)")]
    pub timeout: Option<u64>,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (-v info, -vv debug)")]
    pub verbose: u8,
}

impl CommonArgs {
    pub fn to_config(&self) -> Config {
        let credentials = GhHostsFile::new(self.credentials.clone());
        let mut config = Config::new(&self.owner, &self.repo, Box::new(credentials));
        if !self.keywords.is_empty() {
            config.keywords = self.keywords.clone();
        }
        config.api_url = self.api_url.clone();
        config.out_dir = self.out_dir.clone();
        config.per_page = self.per_page;
        config.max_pages = self.max_pages;
        config.timeout = self.timeout.map(Duration::from_secs);
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    Run {
        #[arg(long, help = "Output the report as JSON")]
        json: bool,
    },
    Commits,
    Contributors,
    Report {
        #[arg(long, help = "Commits CSV to aggregate (defaults to <owner>_<repo>_commits.csv)")]
        commits: Option<PathBuf>,

        #[arg(long, help = "Contributors CSV to chart (defaults to <repo>_contributors.csv)")]
        contributors: Option<PathBuf>,

        #[arg(long, help = "Skip fetching open issues")]
        offline: bool,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    Score {
        #[arg(long, help = "Commit message")]
        message: String,

        #[arg(long, help = "Lines added", default_value_t = 0)]
        added: u64,

        #[arg(long, help = "Lines deleted", default_value_t = 0)]
        deleted: u64,

        #[arg(long, help = "Commit signature was verified")]
        verified: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn init_logging(&self) {
        let level = match self.common.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
            .format_timestamp(None)
            .try_init();
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Run { json } => crate::run::exec(self.common, json),
            Commands::Commits => crate::commits::exec(self.common),
            Commands::Contributors => crate::contributors::exec(self.common),
            Commands::Report {
                commits,
                contributors,
                offline,
                json,
            } => crate::report::exec(self.common, commits, contributors, offline, json),
            Commands::Score {
                message,
                added,
                deleted,
                verified,
            } => crate::report::exec_score(self.common, &message, added, deleted, verified),
        }
    }
}
