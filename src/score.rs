use crate::config::{Config, DEFAULT_KEYWORDS};

pub const BOILERPLATE_POINTS: u64 = 5;
pub const BASE_POINTS: u64 = 100;
pub const ADDED_LINE_POINTS: u64 = 25;
pub const DELETED_LINE_POINTS: u64 = 50;
pub const VERIFIED_BONUS: u64 = 25;

/// Converts a commit's message and line stats into contribution points.
#[derive(Debug, Clone)]
pub struct Scorer {
    keywords: Vec<String>,
}

impl Scorer {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.keywords)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Substring match, so "reinitialize" hits "initial".
    pub fn is_boilerplate(&self, message: &str) -> bool {
        let message = message.to_lowercase();
        self.keywords.iter().any(|k| message.contains(k.as_str()))
    }

    pub fn score(&self, message: &str, lines_added: u64, lines_deleted: u64, verified: bool) -> u64 {
        let points = if self.is_boilerplate(message) {
            BOILERPLATE_POINTS
        } else {
            BASE_POINTS
                .saturating_add(ADDED_LINE_POINTS.saturating_mul(lines_added))
                .saturating_add(DELETED_LINE_POINTS.saturating_mul(lines_deleted))
        };

        if verified {
            points.saturating_add(VERIFIED_BONUS)
        } else {
            points
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}
