//! Duty name normalization
//!
//! Raw input lines are trimmed, lower-cased, stripped of one leading "the"
//! article and run through the alias table before they are matched.

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::constants::{BUILTIN_ALIASES, MIN_DUTY_LEN};
use crate::error::Result;

/// Fixed corrections for duty names that never match on their own
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in correction table
    pub fn builtin() -> Self {
        Self {
            aliases: BUILTIN_ALIASES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    /// Merge a YAML mapping of `normalized duty: replacement` into the table.
    /// Keys are matched exactly, so they must already be in normalized form.
    pub fn extend_from_yaml_str(&mut self, yaml: &str) -> Result<usize> {
        let extra: HashMap<String, String> = serde_yaml::from_str(yaml)?;
        let count = extra.len();
        self.aliases.extend(extra);
        Ok(count)
    }

    pub fn extend_from_yaml_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let content = std::fs::read_to_string(path)?;
        self.extend_from_yaml_str(&content)
    }

    pub fn get(&self, duty: &str) -> Option<&str> {
        self.aliases.get(duty).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Turns raw input lines into matching keys
#[derive(Debug, Clone)]
pub struct Normalizer {
    leading_article: Regex,
    aliases: AliasTable,
}

impl Normalizer {
    pub fn new(aliases: AliasTable) -> Result<Self> {
        Ok(Self {
            leading_article: Regex::new(r"^\s*the\s*")?,
            aliases,
        })
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Normalize one raw line; `None` means the duty is too short to match.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let lowered = raw.trim().to_lowercase();
        let stripped = self.leading_article.replace(&lowered, "");

        let duty = match self.aliases.get(&stripped) {
            Some(target) => {
                debug!("Alias '{}' -> '{}'", stripped, target);
                target.to_string()
            }
            None => stripped.into_owned(),
        };

        if duty.chars().count() < MIN_DUTY_LEN {
            return None;
        }
        Some(duty)
    }
}
