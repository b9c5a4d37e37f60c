use gpoints::config::DEFAULT_KEYWORDS;
use gpoints::score::Scorer;

#[test]
fn keyword_commits_get_flat_points() {
    let scorer = Scorer::default();
    for keyword in DEFAULT_KEYWORDS {
        let message = format!("Add {} for the api", keyword.to_uppercase());
        assert_eq!(scorer.score(&message, 0, 0, false), 5, "{message}");
        assert_eq!(scorer.score(&message, 900, 400, false), 5, "{message}");
    }
}

#[test]
fn keyword_match_is_substring_and_case_insensitive() {
    let scorer = Scorer::default();
    assert!(scorer.is_boilerplate("Initial commit"));
    assert!(scorer.is_boilerplate("reinitialize the cache"));
    assert!(scorer.is_boilerplate("CI SETUP"));
    assert!(scorer.is_boilerplate("scaffolded routes"));
    assert!(!scorer.is_boilerplate("fix overflow in parser"));
}

#[test]
fn verified_bonus_applies_after_keyword_floor() {
    let scorer = Scorer::default();
    assert_eq!(scorer.score("Initial commit", 500, 0, true), 30);
}

#[test]
fn non_keyword_commits_follow_linear_formula() {
    let scorer = Scorer::default();
    for (added, deleted) in [(0, 0), (3, 2), (120, 0), (0, 45)] {
        let expected = 100 + 25 * added + 50 * deleted;
        assert_eq!(scorer.score("fix overflow in parser", added, deleted, false), expected);
        assert_eq!(scorer.score("fix overflow in parser", added, deleted, true), expected + 25);
    }
}

#[test]
fn deletions_weigh_twice_additions() {
    let scorer = Scorer::default();
    let base = scorer.score("refactor", 0, 0, false);
    let from_added = scorer.score("refactor", 4, 0, false) - base;
    let from_deleted = scorer.score("refactor", 0, 4, false) - base;
    assert!(from_deleted > from_added);
    assert_eq!(from_deleted, 2 * from_added);
}

#[test]
fn custom_keywords_replace_defaults() {
    let scorer = Scorer::new(["WIP", ""]);
    assert_eq!(scorer.keywords(), ["wip".to_string()]);
    assert_eq!(scorer.score("wip: routing", 10, 0, false), 5);
    assert_eq!(scorer.score("Initial commit", 0, 0, false), 100);
}

#[test]
fn huge_line_counts_saturate_instead_of_wrapping() {
    let scorer = Scorer::default();
    assert_eq!(scorer.score("rewrite storage", u64::MAX, 0, false), u64::MAX);
    assert_eq!(scorer.score("rewrite storage", 0, u64::MAX, true), u64::MAX);
    assert_eq!(scorer.score("rewrite storage", u64::MAX, u64::MAX, true), u64::MAX);
}
