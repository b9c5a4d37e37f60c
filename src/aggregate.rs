use crate::model::{CommitRecord, ScoreEntry};
use std::collections::HashMap;

const AUTOMATED_MARKERS: [&str; 2] = ["github", "bot"];

/// Actors whose display name mentions GitHub or a bot never earn points.
pub fn is_automated(name: &str) -> bool {
    let name = name.to_lowercase();
    AUTOMATED_MARKERS.iter().any(|marker| name.contains(marker))
}

/// The id an actor is credited under for one commit, if any.
pub fn eligible_id(name: &str, id: Option<u64>) -> Option<u64> {
    if is_automated(name) {
        None
    } else {
        id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorScore {
    pub id: u64,
    /// Every display name seen for this id, first-seen order.
    pub names: Vec<String>,
    pub points: u64,
}

impl ContributorScore {
    fn new(id: u64) -> Self {
        Self {
            id,
            names: Vec::new(),
            points: 0,
        }
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.names.join(", "), self.id)
    }

    fn observe_name(&mut self, name: &str) {
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
    }
}

/// Per-identity point totals, kept in first-credited order.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    entries: Vec<ContributorScore>,
    index: HashMap<u64, usize>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_commits<'a, I>(commits: I) -> Self
    where
        I: IntoIterator<Item = &'a CommitRecord>,
    {
        let mut board = Self::new();
        for commit in commits {
            board.record(commit);
        }
        board
    }

    /// Author and committer are credited independently, so a commit can
    /// count twice, including when both roles carry the same id.
    pub fn record(&mut self, commit: &CommitRecord) {
        if let Some(id) = eligible_id(&commit.author_name, commit.author_id) {
            self.credit(id, &commit.author_name, commit.points);
        }
        if let Some(id) = eligible_id(&commit.committer_name, commit.committer_id) {
            self.credit(id, &commit.committer_name, commit.points);
        }
    }

    pub fn credit(&mut self, id: u64, name: &str, points: u64) {
        let slot = match self.index.get(&id) {
            Some(&slot) => slot,
            None => {
                self.entries.push(ContributorScore::new(id));
                self.index.insert(id, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[slot];
        entry.points = entry.points.saturating_add(points);
        entry.observe_name(name);
    }

    pub fn get(&self, id: u64) -> Option<&ContributorScore> {
        self.index.get(&id).map(|&slot| &self.entries[slot])
    }

    pub fn points_for(&self, id: u64) -> Option<u64> {
        self.get(id).map(|e| e.points)
    }

    pub fn names_for(&self, id: u64) -> Option<&[String]> {
        self.get(id).map(|e| e.names.as_slice())
    }

    pub fn entries(&self) -> &[ContributorScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_points(&self) -> u64 {
        self.entries.iter().fold(0u64, |total, e| total.saturating_add(e.points))
    }

    pub fn to_entries(&self) -> Vec<ScoreEntry> {
        self.entries
            .iter()
            .map(|e| ScoreEntry {
                id: e.id,
                names: e.names.clone(),
                label: e.label(),
                points: e.points,
            })
            .collect()
    }
}
