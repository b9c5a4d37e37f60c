use crate::cli::CommonArgs;
use crate::github::GitHubClient;
use crate::report::{assemble, fetch_issues, output_json, output_summary, render_contributions, render_distribution};
use anyhow::Context;
use console::Term;

/// The full pipeline: commits, distribution chart, contributors, bar chart.
pub fn exec(common: CommonArgs, json: bool) -> anyhow::Result<()> {
    let config = common.to_config();
    let client = GitHubClient::new(&config).context("Failed to initialize GitHub client")?;

    let commits_csv = crate::commits::collect(&client, &config, !json && Term::stderr().is_term())?;
    let issues = fetch_issues(&client)?;
    let (board, distribution) = render_distribution(&commits_csv, &issues)?;

    let contributors_csv = crate::contributors::collect(&client, &config)?;
    let (contributors, contributions) = render_contributions(&contributors_csv, &config.repo)?;

    let report = assemble(
        &config,
        &commits_csv,
        &board,
        distribution,
        Some(contributions),
        contributors,
        issues,
    );
    if json {
        output_json(&report)
    } else {
        output_summary(&report)
    }
}
