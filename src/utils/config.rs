//! Configuration and constants for both tools.

use std::time::Duration;

/// Timeout for each remote payload request (matches the blocking client's default)
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every fetch
pub const USER_AGENT: &str = concat!("lica-payload/", env!("CARGO_PKG_VERSION"));

// Logical names of the remote resources
pub const HIERARCHY_SOURCE: &str = "mozcat_heirarchy";
pub const DOMAIN_RULES_SOURCE: &str = "domain_rules";
pub const KEYWORDS_SOURCE: &str = "keywords";
pub const STOPWORDS_SOURCE: &str = "stopwords";

pub const REQUIRED_SOURCES: &[&str] = &[
    HIERARCHY_SOURCE,
    DOMAIN_RULES_SOURCE,
    KEYWORDS_SOURCE,
    STOPWORDS_SOURCE,
];

// Default locations of the remote resources
pub const DEFAULT_HIERARCHY_URL: &str =
    "https://raw.githubusercontent.com/matthewruttley/mozcat/master/mozcat_heirarchy.json";
pub const DEFAULT_DOMAIN_RULES_URL: &str = "https://raw.githubusercontent.com/matthewruttley/lica_optimize/fa643e227e33b9800a794759f7f7e35bf176c687/classification_logger/data/payload_domain_rules.json";
pub const DEFAULT_KEYWORDS_URL: &str = "https://raw.githubusercontent.com/matthewruttley/lica_optimize/master/classification_logger/data/payload_lica.json";
pub const DEFAULT_STOPWORDS_URL: &str = "https://raw.githubusercontent.com/matthewruttley/lica_optimize/master/classification_logger/data/stopwords.json";

/// Default payload output file
pub const DEFAULT_PAYLOAD_FILE: &str = "lica_payload.json";

/// Raw category meaning "not an interest category"
pub const DEFAULT_UNUSED_SENTINEL: &str = "not in use";

/// Sub-level assigned to top-level categories in the taxonomy lookup
pub const GENERAL_SUB_LEVEL: &str = "general";

// Field names inside the source documents (older dumps use different spellings)
pub const DOMAIN_RULE_FIELD_NAMES: &[&str] = &["domain_rules", "domains"];
pub const HOST_RULE_FIELD_NAMES: &[&str] = &["host_rules", "hosts"];
pub const PATH_RULE_FIELD_NAMES: &[&str] = &["path_rules", "paths"];
pub const POSITIVE_WORDS_FIELD_NAMES: &[&str] = &["positive_words", "positive_keywords"];
pub const IGNORE_DOMAINS_FIELD_NAMES: &[&str] = &["ignore_domains"];
pub const BAD_DOMAIN_FIELD_NAMES: &[&str] = &["bad_domain_specific"];

// Log stats extractor
pub const DEFAULT_LOG_PATH: &str = "classification_log.txt";
pub const DEFAULT_STATS_FILE: &str = "tabs_per_time.tsv";
pub const LOG_FIELD_DELIMITER: &str = "###";
pub const MIN_LOG_LINE_LEN: usize = 5;
pub const TIME_UNIT_SUFFIX: &str = "ms";
pub const TABS_OPEN_FIELD: &str = "tabs_open";
pub const CLASSIFICATION_TIME_FIELD: &str = "classification_time";
