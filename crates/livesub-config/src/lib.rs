pub mod edit;
pub mod flags;
pub mod manager;
pub mod types;

pub use edit::{ConfigEdit, EditImpact};
pub use flags::{sanitize_flags, Flag, RECOGNIZED_FLAGS};
pub use manager::{ConfigError, RuleStore};
pub use types::{
    Configuration, Rule, NEW_RULE_DESCRIPTION, WINDCHILL_DESCRIPTION, WINDCHILL_FIND,
    WINDCHILL_REPLACE,
};
