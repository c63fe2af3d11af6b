//! Achievement Mapper Core Library
//!
//! Maps free-text duty names to FFXIV achievement ids. It provides the
//! reference corpus loader, duty normalization, the fuzzy matching engine
//! and the result table shared by the command line tool.

pub mod constants;
pub mod context;
pub mod corpus;
pub mod error;
pub mod fuzzy;
pub mod logging;
pub mod mapping;
pub mod matcher;
pub mod normalize;

// Re-export commonly used items
pub use context::Context;
pub use corpus::{Corpus, CorpusEntry};
pub use error::{AchMapError, Result};
pub use mapping::{DutyMapper, MapStats, ResultTable};
pub use matcher::{MatchResult, Matcher, Strategy};
pub use normalize::{AliasTable, Normalizer};
