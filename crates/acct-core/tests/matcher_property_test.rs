// Property tests for the matching engine's invariants.

use proptest::prelude::*;

use callcheck_acct_core::{Exactness, Pattern, RecordKind, RecordSet, CDR_FIELDS};

// Tokens stay free of commas and quotes; the accounting format reserves both.
fn token() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ./@_()*+-]{0,12}"
}

fn cdr_line() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token(), CDR_FIELDS.len())
}

fn parse(tokens: &[String]) -> RecordSet {
    RecordSet::from_contents(&tokens.join(","), RecordKind::Cdr).expect("line is well-formed")
}

proptest! {
    // Reflexivity: any record matches itself under every exactness
    // configuration, even when values contain regex metacharacters.
    #[test]
    fn test_record_matches_itself(tokens in cdr_line()) {
        let set = parse(&tokens);
        for exactness in [
            Exactness::full(),
            Exactness::partial(),
            Exactness::new(true, false),
            Exactness::new(false, true),
        ] {
            prop_assert!(set[0].matches_record(&set[0], exactness, true));
        }
    }

    // A record set always matches a clone of itself.
    #[test]
    fn test_set_matches_identical_copy(lines in prop::collection::vec(cdr_line(), 1..6)) {
        let contents: Vec<String> = lines.iter().map(|tokens| tokens.join(",")).collect();
        let set = RecordSet::from_contents(&contents.join("\n"), RecordKind::Cdr).unwrap();
        prop_assert!(set.matches(&set.clone(), Exactness::full(), true));
    }

    // Full-exactness record matching is symmetric: if a matches b then b
    // matches a, and likewise for failure.
    #[test]
    fn test_full_exactness_is_symmetric(a in cdr_line(), b in cdr_line()) {
        let set_a = parse(&a);
        let set_b = parse(&b);
        let forward = set_a[0].matches_record(&set_b[0], Exactness::full(), true);
        let backward = set_b[0].matches_record(&set_a[0], Exactness::full(), true);
        prop_assert_eq!(forward, backward);
    }

    // A pattern built from a subset of a record's own fields matches it.
    #[test]
    fn test_own_field_subset_always_matches(tokens in cdr_line(), mask in prop::collection::vec(any::<bool>(), CDR_FIELDS.len())) {
        let set = parse(&tokens);
        let record = &set[0];
        let mut pattern = Pattern::new(RecordKind::Cdr);
        for (name, keep) in CDR_FIELDS.iter().zip(mask) {
            if keep {
                let value = record.field(name).unwrap().to_string();
                pattern = pattern.field(name, value).unwrap();
            }
        }
        prop_assert!(record.matches(&pattern, Exactness::full(), true));
    }
}
