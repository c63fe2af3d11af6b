//! Duty to achievement matching
//!
//! Three strategies are tried in order and the first one producing any
//! candidate decides the result:
//!
//! 1. `mapping`: "mapping <duty>" against achievement names
//! 2. `name`: the duty against achievement names
//! 3. `description`: the duty against achievement descriptions
//!
//! Description matches are the least reliable and are logged as warnings.

use std::fmt;

use tracing::{debug, error, warn};

use crate::constants::MAPPING_PREFIX;
use crate::corpus::Corpus;
use crate::fuzzy::{rank_find_fold, Rank};

/// Which strategy produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Mapping,
    Name,
    Description,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Mapping => "mapping",
            Strategy::Name => "name",
            Strategy::Description => "description",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type RankFn = for<'c> fn(&str, &'c Corpus) -> Vec<Rank<'c>>;

fn rank_mapping<'c>(duty: &str, corpus: &'c Corpus) -> Vec<Rank<'c>> {
    rank_find_fold(&format!("{}{}", MAPPING_PREFIX, duty), corpus.names())
}

fn rank_name<'c>(duty: &str, corpus: &'c Corpus) -> Vec<Rank<'c>> {
    rank_find_fold(duty, corpus.names())
}

fn rank_description<'c>(duty: &str, corpus: &'c Corpus) -> Vec<Rank<'c>> {
    rank_find_fold(duty, corpus.descriptions())
}

// Priority order, first non-empty ranking wins
const STRATEGIES: [(Strategy, RankFn); 3] = [
    (Strategy::Mapping, rank_mapping),
    (Strategy::Name, rank_name),
    (Strategy::Description, rank_description),
];

/// A successful match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub id: i64,
    pub strategy: Strategy,
    pub distance: usize,
    pub target: String,
}

/// Matching engine over a borrowed, immutable corpus
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'c> {
    corpus: &'c Corpus,
}

impl<'c> Matcher<'c> {
    pub fn new(corpus: &'c Corpus) -> Self {
        Self { corpus }
    }

    /// Best match for a normalized duty, or `None` when no strategy finds a candidate
    pub fn find_best(&self, duty: &str) -> Option<MatchResult> {
        for (strategy, rank) in STRATEGIES {
            let Some(best) = rank(duty, self.corpus).into_iter().next() else {
                continue;
            };
            let id = self.corpus.id(best.original_index);

            match strategy {
                Strategy::Description => warn!(
                    strategy = %strategy,
                    distance = best.distance,
                    "Matching with '{}' strategy ({})\n> {}\n> {}",
                    strategy, best.distance, duty, best.target
                ),
                _ => debug!(
                    strategy = %strategy,
                    distance = best.distance,
                    "Matching with '{}' strategy ({})\n> {}\n> {}",
                    strategy, best.distance, duty, best.target
                ),
            }

            return Some(MatchResult {
                id,
                strategy,
                distance: best.distance,
                target: best.target.to_string(),
            });
        }

        error!("Could not find a match for {}", duty);
        None
    }
}
