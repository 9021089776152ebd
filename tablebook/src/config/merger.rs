//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use tablebook::config::{Config, ConfigMerger};
///
/// let low = Config { max_party_size: Some(10), ..Default::default() };
/// let high = Config { max_party_size: Some(4), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_party_size, Some(4));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target; every field set in `source` wins.
    ///
    /// `seed_tables` is replaced as a whole, never concatenated.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.seed_tables.is_some() {
            target.seed_tables.clone_from(&source.seed_tables);
        }

        if source.table_selection.is_some() {
            target.table_selection = source.table_selection;
        }

        if source.max_party_size.is_some() {
            target.max_party_size = source.max_party_size;
        }

        if source.max_table_capacity.is_some() {
            target.max_table_capacity = source.max_table_capacity;
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
