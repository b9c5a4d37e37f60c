use crate::cli::CommonArgs;
use crate::config::Config;
use crate::export::CommitCsvWriter;
use crate::fetch::fetch_scored_commits;
use crate::github::{GitHubClient, HostApi};
use crate::score::Scorer;
use anyhow::Context;
use console::{style, Term};
use std::path::PathBuf;

pub fn exec(common: CommonArgs) -> anyhow::Result<()> {
    let config = common.to_config();
    let client = GitHubClient::new(&config).context("Failed to initialize GitHub client")?;

    let path = collect(&client, &config, Term::stderr().is_term())?;
    println!("Commits written to {}", style(path.display()).cyan());
    Ok(())
}

/// Fetches and scores every commit, streaming rows into the commits CSV.
pub fn collect(api: &dyn HostApi, config: &Config, show_progress: bool) -> anyhow::Result<PathBuf> {
    let scorer = Scorer::from_config(config);
    let path = config.commits_csv_path();
    let mut writer = CommitCsvWriter::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let records = fetch_scored_commits(api, &scorer, show_progress, |record| writer.write(record))
        .context("Failed to fetch and score commits")?;
    writer.finish().context("Failed to finish commits CSV")?;

    log::info!("wrote {} commits to {}", records.len(), path.display());
    Ok(path)
}
