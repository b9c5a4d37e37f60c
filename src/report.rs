use crate::aggregate::ScoreBoard;
use crate::cli::CommonArgs;
use crate::config::Config;
use crate::export::{read_commits, read_contributors};
use crate::github::{GitHubClient, HostApi};
use crate::model::{ContributorRecord, OpenIssue, ReportOutput, SCHEMA_VERSION};
use crate::render::{chart_path, write_contributions_chart, write_distribution_chart};
use crate::score::Scorer;
use anyhow::Context;
use chrono::Utc;
use console::style;
use log::warn;
use std::path::{Path, PathBuf};

pub fn exec(
    common: CommonArgs,
    commits: Option<PathBuf>,
    contributors: Option<PathBuf>,
    offline: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = common.to_config();
    let commits_csv = commits.unwrap_or_else(|| config.commits_csv_path());
    let contributors_csv = contributors.unwrap_or_else(|| config.contributors_csv_path());

    let issues = if offline {
        Vec::new()
    } else {
        let client = GitHubClient::new(&config).context("Failed to initialize GitHub client")?;
        fetch_issues(&client)?
    };

    let (board, distribution) = render_distribution(&commits_csv, &issues)?;

    let (contributors, contributions) = if contributors_csv.exists() {
        let (records, chart) = render_contributions(&contributors_csv, &config.repo)?;
        (records, Some(chart))
    } else {
        warn!("{} not found, skipping contributions chart", contributors_csv.display());
        (Vec::new(), None)
    };

    let report = assemble(&config, &commits_csv, &board, distribution, contributions, contributors, issues);
    if json {
        output_json(&report)
    } else {
        output_summary(&report)
    }
}

pub fn fetch_issues(api: &dyn HostApi) -> anyhow::Result<Vec<OpenIssue>> {
    api.list_open_issues().context("Failed to fetch open issues")
}

/// Re-aggregates stored points from the commits CSV; nothing is re-scored.
pub fn render_distribution(commits_csv: &Path, issues: &[OpenIssue]) -> anyhow::Result<(ScoreBoard, PathBuf)> {
    let commits = read_commits(commits_csv)
        .with_context(|| format!("Failed to read {}", commits_csv.display()))?;
    let board = ScoreBoard::from_commits(&commits);

    let chart = chart_path(commits_csv, "_distribution");
    write_distribution_chart(&chart, &board, issues)
        .with_context(|| format!("Failed to write {}", chart.display()))?;
    Ok((board, chart))
}

pub fn render_contributions(
    contributors_csv: &Path,
    repo: &str,
) -> anyhow::Result<(Vec<ContributorRecord>, PathBuf)> {
    let contributors = read_contributors(contributors_csv)
        .with_context(|| format!("Failed to read {}", contributors_csv.display()))?;

    let chart = chart_path(contributors_csv, "_contributions");
    write_contributions_chart(&chart, &contributors, repo)
        .with_context(|| format!("Failed to write {}", chart.display()))?;
    Ok((contributors, chart))
}

pub fn assemble(
    config: &Config,
    commits_csv: &Path,
    board: &ScoreBoard,
    distribution: PathBuf,
    contributions: Option<PathBuf>,
    contributors: Vec<ContributorRecord>,
    open_issues: Vec<OpenIssue>,
) -> ReportOutput {
    ReportOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository: config.repo_slug(),
        commits_csv: commits_csv.to_string_lossy().to_string(),
        distribution_chart: distribution.to_string_lossy().to_string(),
        contributions_chart: contributions.map(|p| p.to_string_lossy().to_string()),
        total_points: board.total_points(),
        entries: board.to_entries(),
        contributors,
        open_issues,
    }
}

pub fn output_json(report: &ReportOutput) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn output_summary(report: &ReportOutput) -> anyhow::Result<()> {
    println!("{}", style(format!("Contribution Points: {}", report.repository)).bold());
    println!("{}", "─".repeat(72));
    println!(
        "{:<50} {:>10} {:>8}",
        style("Contributor").bold(),
        style("Points").bold(),
        style("Share").bold()
    );

    if report.entries.is_empty() {
        println!("No contribution points recorded");
    }
    for entry in &report.entries {
        let share = if report.total_points == 0 {
            0.0
        } else {
            entry.points as f64 / report.total_points as f64 * 100.0
        };
        println!("{:<50} {:>10} {:>7.1}%", entry.label, entry.points, share);
    }
    println!("Total points: {}", style(report.total_points).cyan());

    if !report.contributors.is_empty() {
        println!("\n{}", style("Contributions").bold());
        for c in &report.contributors {
            println!("  {:<30} {:>6}", c.login, style(c.contributions).green());
        }
    }

    if !report.open_issues.is_empty() {
        println!("\n{}", style("Open Issues").bold());
        for issue in &report.open_issues {
            println!("  - {} (#{})", issue.title, issue.number);
        }
    }

    println!("\nDistribution chart: {}", style(&report.distribution_chart).dim());
    if let Some(chart) = &report.contributions_chart {
        println!("Contributions chart: {}", style(chart).dim());
    }
    Ok(())
}

pub fn exec_score(common: CommonArgs, message: &str, added: u64, deleted: u64, verified: bool) -> anyhow::Result<()> {
    let config = common.to_config();
    let scorer = Scorer::from_config(&config);
    println!("{}", scorer.score(message, added, deleted, verified));
    Ok(())
}
