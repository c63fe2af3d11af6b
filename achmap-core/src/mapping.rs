//! Result accumulation and the line-by-line driver

use std::collections::BTreeMap;

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::error::Result;
use crate::matcher::{Matcher, Strategy};
use crate::normalize::Normalizer;

/// Normalized duty -> achievement id, serialized with sorted keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    entries: BTreeMap<String, i64>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins
    pub fn insert(&mut self, duty: String, id: i64) {
        self.entries.insert(duty, id);
    }

    pub fn get(&self, duty: &str) -> Option<i64> {
        self.entries.get(duty).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Two-space indented JSON object with a trailing newline
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Per-run counters, logged once input is exhausted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapStats {
    pub lines: usize,
    pub skipped: usize,
    pub matched: usize,
    pub degraded: usize,
    pub unmatched: usize,
}

/// Normalizes, matches and records one duty at a time
pub struct DutyMapper<'c> {
    normalizer: Normalizer,
    matcher: Matcher<'c>,
    table: ResultTable,
    stats: MapStats,
}

impl<'c> DutyMapper<'c> {
    pub fn new(normalizer: Normalizer, matcher: Matcher<'c>) -> Self {
        Self {
            normalizer,
            matcher,
            table: ResultTable::new(),
            stats: MapStats::default(),
        }
    }

    pub fn process_line(&mut self, raw: &str) {
        self.stats.lines += 1;

        let Some(duty) = self.normalizer.normalize(raw) else {
            self.stats.skipped += 1;
            return;
        };

        match self.matcher.find_best(&duty) {
            Some(found) => {
                self.stats.matched += 1;
                if found.strategy == Strategy::Description {
                    self.stats.degraded += 1;
                }
                self.table.insert(duty, found.id);
            }
            None => self.stats.unmatched += 1,
        }
    }

    /// Consume newline-delimited duties until end of stream or a read error
    pub async fn read_all<R>(&mut self, mut reader: R)
    where
        R: AsyncBufRead + Unpin,
    {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            // An unterminated final line is still returned here and processed
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf);
                    self.process_line(&line);
                }
                Err(err) => {
                    warn!("Stopped reading input: {}", err);
                    break;
                }
            }
        }
    }

    pub fn stats(&self) -> MapStats {
        self.stats
    }

    pub fn table(&self) -> &ResultTable {
        &self.table
    }

    pub fn finish(self) -> ResultTable {
        let stats = self.stats;
        info!(
            "Processed {} lines: {} matched ({} by description), {} unmatched, {} skipped",
            stats.lines, stats.matched, stats.degraded, stats.unmatched, stats.skipped
        );
        self.table
    }
}
