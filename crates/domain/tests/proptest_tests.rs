//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{AdminLevel, AdminLevelCollection, AddressBuilder, GeoLocation, MAX_ADMIN_LEVEL};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// AdminLevelCollection Property Tests
// ============================================================================

mod admin_level_tests {
    use super::*;

    proptest! {
        #[test]
        fn distinct_levels_come_out_sorted(
            levels in proptest::sample::subsequence(vec![1u8, 2, 3, 4, 5], 0..=5)
                .prop_shuffle()
        ) {
            let admin_levels = levels
                .iter()
                .map(|level| AdminLevel::new(*level, format!("level {level}"), None))
                .collect();
            let collection = AdminLevelCollection::new(admin_levels).unwrap();

            prop_assert_eq!(collection.len(), levels.len());
            let order: Vec<u8> = collection.iter().map(AdminLevel::level).collect();
            let mut expected = levels.clone();
            expected.sort_unstable();
            prop_assert_eq!(order, expected);
        }

        #[test]
        fn levels_above_max_rejected(level in (MAX_ADMIN_LEVEL + 1)..=u8::MAX) {
            let result = AddressBuilder::new("test")
                .add_admin_level(level, "too deep", None)
                .build();
            prop_assert!(result.is_err());
        }

        #[test]
        fn optional_code_is_preserved(
            name in "[A-Za-z ]{1,20}",
            code in proptest::option::of("[A-Z0-9]{2,10}")
        ) {
            let address = AddressBuilder::new("test")
                .add_admin_level(5, name.clone(), code.clone())
                .build()
                .unwrap();
            let level = address.admin_levels().get(5).unwrap();
            prop_assert_eq!(level.name(), name.as_str());
            prop_assert_eq!(level.code(), code.as_deref());
        }
    }
}
