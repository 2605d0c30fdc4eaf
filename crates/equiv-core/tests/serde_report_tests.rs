// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use equiv_core::{explain_equivalence_by, Difference, Mismatch, Side};
use equiv_dry_tests::{person, Person};

#[test]
fn mismatch_serializes_with_kind_tag() {
    let a = vec![person(1, "Alice", 30)];
    let b = vec![person(1, "Alice", 31)];
    let report = explain_equivalence_by(&a, &b, &[Person::age_field()]).unwrap_err();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "kind": "unequal",
            "id": "1",
            "difference": {
                "kind": "field",
                "name": "age",
                "left": "30",
                "right": "31"
            }
        })
    );
}

#[test]
fn mismatch_round_trips_through_json() {
    let reports = [
        Mismatch::Cardinality { left: 2, right: 0 },
        Mismatch::DuplicateIdentity {
            side: Side::Right,
            id: "7".to_owned(),
        },
        Mismatch::Unequal {
            id: "3".to_owned(),
            difference: Difference::Unspecified,
        },
    ];
    for report in reports {
        let text = serde_json::to_string(&report).unwrap();
        let back: Mismatch = serde_json::from_str(&text).unwrap();
        assert_eq!(back, report);
    }
}
