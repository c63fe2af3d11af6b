// Constants used throughout the achievement mapper

// Reference dataset
pub const ACHIEVEMENTS_URL: &str =
    "https://raw.githubusercontent.com/xivapi/ffxiv-datamining/master/csv/Achievement.csv";
pub const USER_AGENT: &str = "achmap-rust/0.1";

// Achievement.csv column layout
pub const ID_COL: usize = 0;
pub const NAME_COL: usize = 2;
pub const DESCRIPTION_COL: usize = 3;

// Matching
pub const MAPPING_PREFIX: &str = "mapping ";
pub const MIN_DUTY_LEN: usize = 3;

// Built-in alias corrections (normalized duty -> normalized duty)
pub const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("alexander: the creator", "alexander"),
    ("alexander: the creator (savage)", "alexander (savage)"),
    (
        "minstrel's ballad: the weapon's refrain (ultimate)",
        "weapon's refrain (ultimate)",
    ),
];

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Environment variables
pub const ENV_URL: &str = "ACHMAP_URL";
pub const ENV_ALIASES_YAML: &str = "ACHMAP_ALIASES_YAML";
pub const ENV_CTXOUT: &str = "ACHMAP_CTXOUT";
