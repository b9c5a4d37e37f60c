mod common;

use common::record;
use gpoints::aggregate::{eligible_id, is_automated, ScoreBoard};
use gpoints::score::Scorer;
use pretty_assertions::assert_eq;

#[test]
fn automated_names_are_matched_by_substring() {
    assert!(is_automated("GitHub"));
    assert!(is_automated("github-actions"));
    assert!(is_automated("dependabot[bot]"));
    assert!(is_automated("Renovate Bot"));
    assert!(is_automated("Abbott"));
    assert!(!is_automated("Alice"));
    assert_eq!(eligible_id("web-flow GitHub", Some(19864447)), None);
    assert_eq!(eligible_id("Alice", Some(1)), Some(1));
    assert_eq!(eligible_id("Alice", None), None);
}

#[test]
fn excluded_author_does_not_affect_committer() {
    let commits = [record("a1", ("dependabot", Some(1)), ("Alice", Some(2)), 300)];
    let board = ScoreBoard::from_commits(&commits);

    assert_eq!(board.get(1), None);
    assert_eq!(board.points_for(2), Some(300));
    assert_eq!(board.len(), 1);
}

#[test]
fn excluded_committer_does_not_affect_author() {
    let commits = [record("a1", ("Alice", Some(2)), ("GitHub", Some(19864447)), 150)];
    let board = ScoreBoard::from_commits(&commits);

    assert_eq!(board.points_for(2), Some(150));
    assert_eq!(board.points_for(19864447), None);
}

#[test]
fn author_and_committer_are_both_credited() {
    let commits = [record("a1", ("Alice", Some(1)), ("Bob", Some(2)), 275)];
    let board = ScoreBoard::from_commits(&commits);

    assert_eq!(board.points_for(1), Some(275));
    assert_eq!(board.points_for(2), Some(275));
    assert_eq!(board.total_points(), 550);
}

#[test]
fn self_committed_commit_counts_for_both_roles() {
    let scorer = Scorer::default();
    let points = scorer.score("Initial commit", 500, 0, false);
    assert_eq!(points, 5);

    let commits = [record("a1", ("alice", Some(7)), ("alice", Some(7)), points)];
    let board = ScoreBoard::from_commits(&commits);

    assert_eq!(board.points_for(7), Some(10));
    assert_eq!(board.names_for(7), Some(&["alice".to_string()][..]));
}

#[test]
fn display_names_accumulate_in_first_seen_order() {
    let commits = [
        record("a1", ("Alice B.", Some(1)), ("Alice B.", None), 100),
        record("a2", ("Alice", Some(1)), ("Bob", Some(2)), 200),
        record("a3", ("Alice B.", Some(1)), ("Bob", Some(2)), 300),
    ];
    let board = ScoreBoard::from_commits(&commits);

    let alice = board.get(1).expect("alice is credited");
    assert_eq!(alice.names, vec!["Alice B.".to_string(), "Alice".to_string()]);
    assert_eq!(alice.points, 600);
    assert_eq!(alice.label(), "Alice B., Alice (1)");

    let ids: Vec<u64> = board.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn unresolved_actors_never_enter_the_board() {
    let commits = [
        record("a1", ("Alice", None), ("Bob", None), 100),
        record("a2", ("bot", Some(3)), ("GitHub", Some(4)), 100),
    ];
    let board = ScoreBoard::from_commits(&commits);

    assert!(board.is_empty());
    assert_eq!(board.total_points(), 0);
    assert!(board.to_entries().is_empty());
}

#[test]
fn exclusion_is_per_commit() {
    let commits = [
        record("a1", ("alice-bot", Some(1)), ("alice-bot", Some(1)), 100),
        record("a2", ("alice", Some(1)), ("alice", None), 40),
    ];
    let board = ScoreBoard::from_commits(&commits);

    let alice = board.get(1).expect("credited by second commit");
    assert_eq!(alice.points, 40);
    assert_eq!(alice.names, vec!["alice".to_string()]);
}

#[test]
fn totals_saturate_at_the_maximum() {
    let mut board = ScoreBoard::new();
    board.credit(1, "alice", u64::MAX);
    board.credit(1, "alice", 125);
    board.credit(2, "bob", 10);

    assert_eq!(board.points_for(1), Some(u64::MAX));
    assert_eq!(board.points_for(2), Some(10));
    assert_eq!(board.total_points(), u64::MAX);
}
