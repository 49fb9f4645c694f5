use serde::{Deserialize, Serialize};

/// Description given to rules added from the settings screen.
pub const NEW_RULE_DESCRIPTION: &str = "RegEx Description";

/// Seed rule: turn a bare `WC:########` token into a Windchill link.
///
/// The lookbehind skips tokens already inside `[...]` and the lookahead skips
/// tokens already followed by `](`, so the rule never re-links its own output.
pub const WINDCHILL_DESCRIPTION: &str = "Windchill Hyperlinker";
pub const WINDCHILL_FIND: &str = r"(?<!\[)WC:(\d{8})(?!\]\()";
pub const WINDCHILL_REPLACE: &str = "[WC:$1](https://plm.bsci.bossci.com/Windchill/netmarkets/jsp/bsci/plm/object/searchLatestEffObject.jsp?objNumber=$1)";

/// Persisted settings for live find/replace.
///
/// Field names match the plugin's `data.json`, so settings written by earlier
/// versions load unchanged. Missing fields take their default value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Configuration {
    /// Global kill switch for the rewrite trigger
    #[serde(rename = "enableLiveUpdate", default = "default_true")]
    pub live_update_enabled: bool,

    /// Raw flag letters applied to every pattern (e.g. `"gim"`)
    #[serde(rename = "flags", default = "default_flags")]
    pub flag_characters: String,

    /// Reveals the rule list and flag fields in the settings screen
    #[serde(rename = "advancedToggle", default)]
    pub advanced_toggle: bool,

    /// Inject `g` into the effective flags even when absent from `flags`
    #[serde(rename = "requireGlobalFlag", default = "default_true")]
    pub force_global_flag: bool,

    /// Ordered rules; list order is application order
    #[serde(rename = "regex_patterns", default = "default_rules")]
    pub rules: Vec<Rule>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            live_update_enabled: true,
            flag_characters: default_flags(),
            advanced_toggle: false,
            force_global_flag: true,
            rules: default_rules(),
        }
    }
}

impl Configuration {
    /// Parse a persisted blob, backfilling missing fields from defaults.
    pub fn from_blob(blob: &str) -> serde_json::Result<Self> {
        serde_json::from_str(blob)
    }

    /// Serialize the full configuration for persistence.
    pub fn to_blob(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One find/replace pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rule {
    /// Cosmetic label
    #[serde(rename = "regexDesc", default)]
    pub description: String,

    /// Regular-expression source, no delimiters
    #[serde(rename = "regexFind", default)]
    pub find_pattern: String,

    /// Replacement text; may reference capture groups (`$1`, `$&`, ...)
    #[serde(rename = "regexReplace", default)]
    pub replacement_template: String,
}

impl Rule {
    pub fn new(
        description: impl Into<String>,
        find_pattern: impl Into<String>,
        replacement_template: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            find_pattern: find_pattern.into(),
            replacement_template: replacement_template.into(),
        }
    }

    /// Rule appended by "add rule": placeholder label, empty pattern and replacement
    pub fn blank() -> Self {
        Self {
            description: NEW_RULE_DESCRIPTION.to_string(),
            ..Self::default()
        }
    }

    /// The built-in Windchill link rule
    pub fn windchill() -> Self {
        Self::new(WINDCHILL_DESCRIPTION, WINDCHILL_FIND, WINDCHILL_REPLACE)
    }
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_flags() -> String {
    "g".to_string()
}

fn default_rules() -> Vec<Rule> {
    vec![Rule::windchill()]
}
