//! Property-based tests over the bundled dataset.
//!
//! Every country is reachable through each of its codes, and the chosen code
//! form never changes the answer.

mod support;

use proptest::prelude::*;

use country_capitals::{CountryRecord, IsoDirectory, Query, ResolveError};
use support::bundled_resolver;

fn bundled_records() -> Vec<CountryRecord> {
    IsoDirectory::bundled()
        .expect("bundled data loads")
        .records()
        .to_vec()
}

/// Strategy picking any record from the bundled dataset.
fn any_record() -> impl Strategy<Value = CountryRecord> {
    prop::sample::select(bundled_records())
}

proptest! {
    #[test]
    fn numeric_and_alpha_codes_agree(record in any_record()) {
        let resolver = bundled_resolver();
        let by_numeric = resolver.resolve(&Query::from(record.numeric.as_str()), false);
        let by_alpha3 = resolver.resolve(&Query::from(record.alpha_3.as_str()), false);
        let by_alpha2 = resolver.resolve(&Query::from(record.alpha_2.as_str()), false);
        // Failures carry the query text, so compare only the answers.
        prop_assert_eq!(by_numeric.as_ref().ok(), by_alpha3.as_ref().ok());
        prop_assert_eq!(by_alpha2.as_ref().ok(), by_alpha3.as_ref().ok());
    }

    #[test]
    fn unpadded_numeric_matches_padded(record in any_record()) {
        let resolver = bundled_resolver();
        let trimmed = record.numeric.trim_start_matches('0');
        prop_assume!(!trimmed.is_empty());
        prop_assert_eq!(resolver.by_numeric(trimmed), resolver.by_numeric(&record.numeric));
    }

    #[test]
    fn codes_are_case_insensitive(record in any_record()) {
        let resolver = bundled_resolver();
        prop_assert_eq!(
            resolver.by_alpha3(&record.alpha_3.to_ascii_lowercase()),
            resolver.by_alpha3(&record.alpha_3)
        );
    }

    #[test]
    fn resolve_is_idempotent(record in any_record(), fuzzy in any::<bool>()) {
        let resolver = bundled_resolver();
        let query = Query::from(record.name.as_str());
        let first = resolver.resolve(&query, fuzzy);
        let second = resolver.resolve(&query, fuzzy);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn record_queries_match_the_capital_join(record in any_record()) {
        let resolver = bundled_resolver();
        let expected = resolver.capitals().get(&record.alpha_3).map(str::to_string);
        match resolver.by_record(&record) {
            Ok(capital) => prop_assert_eq!(Some(capital), expected),
            Err(ResolveError::CapitalNotFound { alpha_3 }) => {
                prop_assert_eq!(alpha_3, record.alpha_3.clone());
                prop_assert!(expected.is_none());
            }
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }

    #[test]
    fn arbitrary_long_codes_never_resolve_as_codes(code in "[A-Z]{4,8}") {
        let resolver = bundled_resolver();
        let is_invalid_format = matches!(
            resolver.by_iso_code(&code),
            Err(ResolveError::InvalidFormat { .. })
        );
        prop_assert!(is_invalid_format);
    }
}
