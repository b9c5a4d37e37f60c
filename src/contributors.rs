use crate::cli::CommonArgs;
use crate::config::Config;
use crate::export::write_contributors;
use crate::fetch::fetch_contributors;
use crate::github::{GitHubClient, HostApi};
use anyhow::Context;
use console::style;
use std::path::PathBuf;

pub fn exec(common: CommonArgs) -> anyhow::Result<()> {
    let config = common.to_config();
    let client = GitHubClient::new(&config).context("Failed to initialize GitHub client")?;

    let path = collect(&client, &config)?;
    println!("Contributors written to {}", style(path.display()).cyan());
    Ok(())
}

pub fn collect(api: &dyn HostApi, config: &Config) -> anyhow::Result<PathBuf> {
    let contributors = fetch_contributors(api).context("Failed to fetch contributors")?;
    let path = config.contributors_csv_path();
    write_contributors(&path, &contributors)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
