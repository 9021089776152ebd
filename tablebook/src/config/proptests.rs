//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use super::validator::ConfigValidator;
use crate::availability::TableSelection;
use proptest::prelude::*;

fn selection_strategy() -> impl Strategy<Value = TableSelection> {
    prop_oneof![
        Just(TableSelection::SmallestFit),
        Just(TableSelection::FirstById)
    ]
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Text),
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv)
    ]
}

// Strategy for generating configs
fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(prop::collection::vec(1u32..=20, 0..6)),
        prop::option::of(selection_strategy()),
        prop::option::of(1u32..=50),
        prop::option::of(1u32..=50),
        prop::option::of(1u64..=60),
        prop::option::of(format_strategy()),
    )
        .prop_map(
            |(seed_tables, table_selection, max_party, max_capacity, lock, format)| Config {
                seed_tables,
                table_selection,
                max_party_size: max_party,
                max_table_capacity: max_capacity,
                maximum_lock_wait_seconds: lock,
                output_format: format,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    // Every field set in the higher source wins; unset fields keep the lower value
    #[test]
    fn config_merge_higher_precedence_wins(
        low in config_strategy(),
        high in config_strategy(),
    ) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(&result.seed_tables, &high.seed_tables.clone().or(low.seed_tables.clone()));
        prop_assert_eq!(result.table_selection, high.table_selection.or(low.table_selection));
        prop_assert_eq!(result.max_party_size, high.max_party_size.or(low.max_party_size));
        prop_assert_eq!(result.max_table_capacity, high.max_table_capacity.or(low.max_table_capacity));
        prop_assert_eq!(
            result.maximum_lock_wait_seconds,
            high.maximum_lock_wait_seconds.or(low.maximum_lock_wait_seconds)
        );
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
    }

    // Merging a config into the empty config reproduces it
    #[test]
    fn config_merge_into_default_is_identity(config in config_strategy()) {
        let mut result = Config::default();
        ConfigMerger::merge_into(&mut result, &config);
        prop_assert_eq!(result, config);
    }

    // YAML round trip preserves every field
    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }

    // Seeds within the capacity limit always validate
    #[test]
    fn config_seeds_within_limit_are_valid(
        limit in 1u32..=30,
        seeds in prop::collection::vec(1u32..=30, 0..8),
    ) {
        let config = Config {
            seed_tables: Some(seeds.clone()),
            max_table_capacity: Some(limit),
            ..Default::default()
        };
        let valid = ConfigValidator::validate(&config).is_ok();
        prop_assert_eq!(valid, seeds.iter().all(|&s| s <= limit));
    }
}
