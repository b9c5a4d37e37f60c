use crate::aggregate::eligible_id;
use crate::error::{GpointsError, Result};
use crate::github::HostApi;
use crate::model::{CommitRecord, CommitSummary, ContributorRecord};
use crate::score::Scorer;
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};

/// Lists commits, fetches each one's stats and scores it. Every record is
/// handed to `on_record` as soon as it is scored; any error ends the run.
pub fn fetch_scored_commits<F>(
    api: &dyn HostApi,
    scorer: &Scorer,
    show_progress: bool,
    mut on_record: F,
) -> Result<Vec<CommitRecord>>
where
    F: FnMut(&CommitRecord) -> Result<()>,
{
    let listed = api.list_commits()?;
    info!("listed {} commits", listed.len());

    let pb = if show_progress {
        let pb = ProgressBar::new(listed.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb.set_message("Scoring commits...");
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut records = Vec::with_capacity(listed.len());
    for summary in listed {
        pb.inc(1);
        if summary.is_malformed() {
            warn!("skipping malformed commit entry {:?}", summary.sha);
            continue;
        }

        let detail = api.commit_detail(&summary.sha)?;
        let points = scorer.score(
            &summary.message,
            detail.lines_added,
            detail.lines_deleted,
            detail.verified,
        );
        debug!("{} scored {} points", summary.sha, points);

        let record = build_record(summary, detail.lines_added, detail.lines_deleted, detail.verified, points)?;
        on_record(&record)?;
        records.push(record);
    }

    pb.finish_with_message("Commits scored");
    Ok(records)
}

fn build_record(
    summary: CommitSummary,
    lines_added: u64,
    lines_deleted: u64,
    verified: bool,
    points: u64,
) -> Result<CommitRecord> {
    let date = parse_date(&summary.date)?;
    Ok(CommitRecord {
        author_id: eligible_id(&summary.author_name, summary.author_id),
        committer_id: eligible_id(&summary.committer_name, summary.committer_id),
        sha: summary.sha,
        author_name: summary.author_name,
        committer_name: summary.committer_name,
        date,
        message: summary.message,
        lines_added,
        lines_deleted,
        verified,
        points,
    })
}

pub fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| GpointsError::InvalidDate(format!("'{raw}': {e}")))
}

/// Contributor list with bot accounts removed.
pub fn fetch_contributors(api: &dyn HostApi) -> Result<Vec<ContributorRecord>> {
    let listed = api.list_contributors()?;
    let total = listed.len();
    let humans: Vec<ContributorRecord> = listed
        .into_iter()
        .filter(|c| {
            if c.is_bot() {
                debug!("dropping bot contributor {}", c.login);
            }
            !c.is_bot()
        })
        .map(ContributorRecord::from)
        .collect();
    info!("kept {} of {} contributors", humans.len(), total);
    Ok(humans)
}
