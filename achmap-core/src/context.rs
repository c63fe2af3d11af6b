use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::constants::{ACHIEVEMENTS_URL, ENV_ALIASES_YAML, ENV_CTXOUT, ENV_URL};

/// Runtime configuration packed in structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    // From ACHMAP_URL, default is the xivapi datamining Achievement.csv
    pub achievements_url: String,

    // From ACHMAP_ALIASES_YAML, extra alias corrections, default "" (built-in table only)
    pub aliases_yaml: String,

    // From ACHMAP_CTXOUT output all context data (this struct), default false
    pub ctx_out: bool,
}

impl Default for Context {
    fn default() -> Self {
        Context {
            achievements_url: ACHIEVEMENTS_URL.to_string(),
            aliases_yaml: String::new(),
            ctx_out: false,
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load context from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load context from an arbitrary variable source; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ctx = Self::default();

        if let Some(url) = lookup(ENV_URL) {
            ctx.set_achievements_url(&url)
                .with_context(|| format!("invalid {}", ENV_URL))?;
        }

        if let Some(aliases_yaml) = lookup(ENV_ALIASES_YAML) {
            ctx.aliases_yaml = aliases_yaml;
        }

        ctx.ctx_out = lookup(ENV_CTXOUT).is_some();

        Ok(ctx)
    }

    /// Override the dataset URL, only absolute http(s) URLs are accepted
    pub fn set_achievements_url(&mut self, raw: &str) -> anyhow::Result<()> {
        let url = url::Url::parse(raw).with_context(|| format!("cannot parse '{}'", raw))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("unsupported scheme '{}' in '{}'", url.scheme(), raw);
        }
        self.achievements_url = url.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let ctx = Context::from_lookup(|_| None).unwrap();
        assert_eq!(ctx.achievements_url, ACHIEVEMENTS_URL);
        assert!(ctx.aliases_yaml.is_empty());
        assert!(!ctx.ctx_out);
    }

    #[test]
    fn environment_overrides_defaults() {
        let ctx = Context::from_lookup(lookup_from(&[
            (ENV_URL, "http://localhost:8080/Achievement.csv"),
            (ENV_ALIASES_YAML, "aliases.yaml"),
            (ENV_CTXOUT, ""),
        ]))
        .unwrap();
        assert_eq!(ctx.achievements_url, "http://localhost:8080/Achievement.csv");
        assert_eq!(ctx.aliases_yaml, "aliases.yaml");
        assert!(ctx.ctx_out);
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(Context::from_lookup(lookup_from(&[(ENV_URL, "not a url")])).is_err());
        assert!(Context::from_lookup(lookup_from(&[(ENV_URL, "ftp://example.com/a.csv")])).is_err());
    }
}
