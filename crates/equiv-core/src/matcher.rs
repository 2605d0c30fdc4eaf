// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Identity-keyed equivalence of unordered collections.
//!
//! Two collections are equivalent when their elements pair up one-to-one by
//! identity and every pair passes the pair rule. Order never matters.
//!
//! # Algorithm
//!
//! 1. Different lengths: not equivalent.
//! 2. Index the left collection by identity. A repeated identity: not
//!    equivalent.
//! 3. Walk the right collection once. A repeated identity, an identity missing
//!    from the index, or a pair failing the rule: not equivalent.
//! 4. Otherwise equivalent.
//!
//! Every public entry point (boolean, negated, diagnostic) runs through
//! [`Matcher::divergence`], so they cannot disagree. The result is commutative
//! whenever the pair rule is symmetric.
//!
//! # Duplicate identities
//!
//! A collection that repeats an identity cannot be in one-to-one
//! correspondence with anything, so the comparison reports non-equivalence even
//! when the other side repeats the same identity the same number of times.

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use tracing::trace;

use crate::field::Field;
use crate::identity::Identifiable;
use crate::report::{Mismatch, Side};
use crate::rule::{DescribePair, PairMismatch, PairRule, Selected, WholeValue};

/// First reason two collections are not equivalent, borrowing from the inputs.
///
/// Producing a `Divergence` allocates nothing beyond the comparison's own
/// lookup tables. Convert it to an owned [`Mismatch`] with
/// [`Divergence::into_mismatch`].
#[derive(Debug, PartialEq, Eq)]
pub enum Divergence<'a, R, K: ?Sized> {
    /// The collections have different lengths.
    Cardinality {
        /// Length of the left collection.
        left: usize,
        /// Length of the right collection.
        right: usize,
    },
    /// `id` occurs more than once within the collection on `side`.
    DuplicateIdentity {
        /// Collection holding the duplicate.
        side: Side,
        /// The repeated identity.
        id: &'a K,
    },
    /// A right-hand element whose identity has no left-hand counterpart.
    Unmatched {
        /// The unmatched identity.
        id: &'a K,
    },
    /// Two records share `id` but fail the pair rule.
    Unequal {
        /// The shared identity.
        id: &'a K,
        /// Record from the left collection.
        left: &'a R,
        /// Record from the right collection.
        right: &'a R,
        /// What the pair rule rejected.
        mismatch: PairMismatch,
    },
}

impl<R, K: Debug + ?Sized> Divergence<'_, R, K> {
    /// Render into an owned report, describing unequal pairs with `rule`.
    pub fn into_mismatch<P: DescribePair<R>>(self, rule: &P) -> Mismatch {
        match self {
            Self::Cardinality { left, right } => Mismatch::Cardinality { left, right },
            Self::DuplicateIdentity { side, id } => Mismatch::DuplicateIdentity {
                side,
                id: format!("{id:?}"),
            },
            Self::Unmatched { id } => Mismatch::Unmatched {
                id: format!("{id:?}"),
            },
            Self::Unequal {
                id,
                left,
                right,
                mismatch,
            } => Mismatch::Unequal {
                id: format!("{id:?}"),
                difference: rule.describe(mismatch, left, right),
            },
        }
    }
}

/// Configured collection comparison: an identity source and a pair rule.
///
/// ```
/// use equiv_core::{Field, Matcher};
///
/// struct Line {
///     sku: &'static str,
///     qty: u32,
///     note: &'static str,
/// }
///
/// let qty = [Field::new("qty", |l: &Line| &l.qty)];
/// let matcher = Matcher::keyed(|l: &Line| l.sku).by(&qty);
///
/// let cart = [
///     Line { sku: "A-1", qty: 2, note: "gift" },
///     Line { sku: "B-7", qty: 1, note: "" },
/// ];
/// let shipped = vec![
///     Line { sku: "B-7", qty: 1, note: "backorder" },
///     Line { sku: "A-1", qty: 2, note: "" },
/// ];
/// assert!(matcher.equivalent(&cart, &shipped));
/// ```
pub struct Matcher<R, K: ?Sized, F, P = WholeValue> {
    key: F,
    rule: P,
    marker: PhantomData<fn(&R) -> &K>,
}

/// A [`Matcher`] keyed by [`Identifiable::id`].
pub type IdentityMatcher<R, P = WholeValue> =
    Matcher<R, <R as Identifiable>::Id, fn(&R) -> &<R as Identifiable>::Id, P>;

impl<R: Identifiable> IdentityMatcher<R> {
    /// Pair elements by their [`Identifiable`] identity and compare pairs by
    /// whole-value equality.
    pub fn by_identity() -> Self {
        Self {
            key: R::id,
            rule: WholeValue,
            marker: PhantomData,
        }
    }
}

impl<R, K, F> Matcher<R, K, F>
where
    K: ?Sized,
    F: Fn(&R) -> &K,
{
    /// Pair elements by the identity `key` projects and compare pairs by
    /// whole-value equality.
    pub fn keyed(key: F) -> Self {
        Self {
            key,
            rule: WholeValue,
            marker: PhantomData,
        }
    }
}

impl<R, K: ?Sized, F, P> Matcher<R, K, F, P> {
    /// Compare pairs over `fields` instead of the current rule.
    pub fn by<'f>(self, fields: &'f [Field<'f, R>]) -> Matcher<R, K, F, Selected<'f, R>> {
        self.with_rule(Selected::new(fields))
    }

    /// Compare pairs with `rule` instead of the current rule.
    pub fn with_rule<Q>(self, rule: Q) -> Matcher<R, K, F, Q> {
        Matcher {
            key: self.key,
            rule,
            marker: PhantomData,
        }
    }

    /// The pair rule in use.
    pub fn rule(&self) -> &P {
        &self.rule
    }
}

impl<R, K, F, P> Matcher<R, K, F, P>
where
    K: Eq + Hash + ?Sized,
    F: Fn(&R) -> &K,
    P: PairRule<R>,
{
    /// First reason `left` and `right` are not equivalent, or `Ok(())`.
    pub fn divergence<'a, A, B>(&self, left: A, right: B) -> Result<(), Divergence<'a, R, K>>
    where
        A: IntoIterator<Item = &'a R>,
        A::IntoIter: ExactSizeIterator,
        B: IntoIterator<Item = &'a R>,
        B::IntoIter: ExactSizeIterator,
        R: 'a,
        K: 'a,
    {
        let left = left.into_iter();
        let right = right.into_iter();
        let (left_len, right_len) = (left.len(), right.len());
        if left_len != right_len {
            trace!(left = left_len, right = right_len, "cardinality mismatch");
            return Err(Divergence::Cardinality {
                left: left_len,
                right: right_len,
            });
        }

        let mut index: FxHashMap<&'a K, &'a R> =
            FxHashMap::with_capacity_and_hasher(left_len, FxBuildHasher);
        for (position, record) in left.enumerate() {
            let id = (self.key)(record);
            if index.insert(id, record).is_some() {
                trace!(side = "left", position, "duplicate identity");
                return Err(Divergence::DuplicateIdentity {
                    side: Side::Left,
                    id,
                });
            }
        }

        let mut seen: FxHashSet<&'a K> =
            FxHashSet::with_capacity_and_hasher(right_len, FxBuildHasher);
        for (position, record) in right.enumerate() {
            let id = (self.key)(record);
            if !seen.insert(id) {
                trace!(side = "right", position, "duplicate identity");
                return Err(Divergence::DuplicateIdentity {
                    side: Side::Right,
                    id,
                });
            }
            let Some(&counterpart) = index.get(id) else {
                trace!(position, "unmatched identity");
                return Err(Divergence::Unmatched { id });
            };
            if let Err(mismatch) = self.rule.compare(counterpart, record) {
                trace!(position, field = mismatch.field_name(), "paired records differ");
                return Err(Divergence::Unequal {
                    id,
                    left: counterpart,
                    right: record,
                    mismatch,
                });
            }
        }
        Ok(())
    }

    /// Returns `true` if `left` and `right` are equivalent.
    pub fn equivalent<'a, A, B>(&self, left: A, right: B) -> bool
    where
        A: IntoIterator<Item = &'a R>,
        A::IntoIter: ExactSizeIterator,
        B: IntoIterator<Item = &'a R>,
        B::IntoIter: ExactSizeIterator,
        R: 'a,
        K: 'a,
    {
        self.divergence(left, right).is_ok()
    }

    /// Negation of [`Matcher::equivalent`].
    pub fn not_equivalent<'a, A, B>(&self, left: A, right: B) -> bool
    where
        A: IntoIterator<Item = &'a R>,
        A::IntoIter: ExactSizeIterator,
        B: IntoIterator<Item = &'a R>,
        B::IntoIter: ExactSizeIterator,
        R: 'a,
        K: 'a,
    {
        !self.equivalent(left, right)
    }

    /// Like [`Matcher::equivalent`], but reports the first divergence as an
    /// owned [`Mismatch`].
    pub fn explain<'a, A, B>(&self, left: A, right: B) -> Result<(), Mismatch>
    where
        A: IntoIterator<Item = &'a R>,
        A::IntoIter: ExactSizeIterator,
        B: IntoIterator<Item = &'a R>,
        B::IntoIter: ExactSizeIterator,
        R: 'a,
        K: Debug + 'a,
        P: DescribePair<R>,
    {
        self.divergence(left, right)
            .map_err(|divergence| divergence.into_mismatch(&self.rule))
    }
}

/// Equivalence of two collections, possibly of different container types,
/// with whole-value equality per pair.
///
/// ```
/// use std::collections::BTreeSet;
/// use equiv_core::{elements_are_equivalent, Identifiable};
///
/// #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
/// struct Tag(u8);
///
/// impl Identifiable for Tag {
///     type Id = u8;
///     fn id(&self) -> &u8 {
///         &self.0
///     }
/// }
///
/// let list = vec![Tag(3), Tag(1), Tag(2)];
/// let set: BTreeSet<Tag> = [Tag(1), Tag(2), Tag(3)].into_iter().collect();
/// assert!(elements_are_equivalent(&list, &set));
/// ```
pub fn elements_are_equivalent<'a, A, B, R>(left: A, right: B) -> bool
where
    A: IntoIterator<Item = &'a R>,
    A::IntoIter: ExactSizeIterator,
    B: IntoIterator<Item = &'a R>,
    B::IntoIter: ExactSizeIterator,
    R: Identifiable + PartialEq + 'a,
{
    IdentityMatcher::<R>::by_identity().equivalent(left, right)
}

/// Negation of [`elements_are_equivalent`].
pub fn elements_are_not_equivalent<'a, A, B, R>(left: A, right: B) -> bool
where
    A: IntoIterator<Item = &'a R>,
    A::IntoIter: ExactSizeIterator,
    B: IntoIterator<Item = &'a R>,
    B::IntoIter: ExactSizeIterator,
    R: Identifiable + PartialEq + 'a,
{
    !elements_are_equivalent(left, right)
}

/// Equivalence of two collections, possibly of different container types,
/// comparing pairs over `fields` only.
pub fn elements_are_equivalent_by<'a, A, B, R>(
    left: A,
    right: B,
    fields: &[Field<'_, R>],
) -> bool
where
    A: IntoIterator<Item = &'a R>,
    A::IntoIter: ExactSizeIterator,
    B: IntoIterator<Item = &'a R>,
    B::IntoIter: ExactSizeIterator,
    R: Identifiable + 'a,
{
    IdentityMatcher::<R>::by_identity()
        .by(fields)
        .equivalent(left, right)
}

/// Negation of [`elements_are_equivalent_by`].
pub fn elements_are_not_equivalent_by<'a, A, B, R>(
    left: A,
    right: B,
    fields: &[Field<'_, R>],
) -> bool
where
    A: IntoIterator<Item = &'a R>,
    A::IntoIter: ExactSizeIterator,
    B: IntoIterator<Item = &'a R>,
    B::IntoIter: ExactSizeIterator,
    R: Identifiable + 'a,
{
    !elements_are_equivalent_by(left, right, fields)
}

/// Equivalence of two collections of the same container type, with
/// whole-value equality per pair.
pub fn is_equivalent<'a, C, R>(left: &'a C, right: &'a C) -> bool
where
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a R>,
    <&'a C as IntoIterator>::IntoIter: ExactSizeIterator,
    R: Identifiable + PartialEq + 'a,
{
    elements_are_equivalent(left, right)
}

/// Negation of [`is_equivalent`].
pub fn is_not_equivalent<'a, C, R>(left: &'a C, right: &'a C) -> bool
where
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a R>,
    <&'a C as IntoIterator>::IntoIter: ExactSizeIterator,
    R: Identifiable + PartialEq + 'a,
{
    !is_equivalent(left, right)
}

/// Equivalence of two collections of the same container type, comparing
/// pairs over `fields` only.
pub fn is_equivalent_by<'a, C, R>(left: &'a C, right: &'a C, fields: &[Field<'_, R>]) -> bool
where
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a R>,
    <&'a C as IntoIterator>::IntoIter: ExactSizeIterator,
    R: Identifiable + 'a,
{
    elements_are_equivalent_by(left, right, fields)
}

/// Negation of [`is_equivalent_by`].
pub fn is_not_equivalent_by<'a, C, R>(left: &'a C, right: &'a C, fields: &[Field<'_, R>]) -> bool
where
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a R>,
    <&'a C as IntoIterator>::IntoIter: ExactSizeIterator,
    R: Identifiable + 'a,
{
    !is_equivalent_by(left, right, fields)
}

/// Diagnostic form of [`elements_are_equivalent`].
pub fn explain_equivalence<'a, A, B, R>(left: A, right: B) -> Result<(), Mismatch>
where
    A: IntoIterator<Item = &'a R>,
    A::IntoIter: ExactSizeIterator,
    B: IntoIterator<Item = &'a R>,
    B::IntoIter: ExactSizeIterator,
    R: Identifiable + PartialEq + Debug + 'a,
    R::Id: Debug,
{
    IdentityMatcher::<R>::by_identity().explain(left, right)
}

/// Diagnostic form of [`elements_are_equivalent_by`].
pub fn explain_equivalence_by<'a, A, B, R>(
    left: A,
    right: B,
    fields: &[Field<'_, R>],
) -> Result<(), Mismatch>
where
    A: IntoIterator<Item = &'a R>,
    A::IntoIter: ExactSizeIterator,
    B: IntoIterator<Item = &'a R>,
    B::IntoIter: ExactSizeIterator,
    R: Identifiable + 'a,
    R::Id: Debug,
{
    IdentityMatcher::<R>::by_identity()
        .by(fields)
        .explain(left, right)
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet, VecDeque};

    use super::*;
    use crate::report::Difference;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Job {
        id: u32,
        queue: &'static str,
        attempts: u8,
    }

    impl Identifiable for Job {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    fn job(id: u32, queue: &'static str, attempts: u8) -> Job {
        Job {
            id,
            queue,
            attempts,
        }
    }

    fn queue_field() -> [Field<'static, Job>; 1] {
        [Field::new("queue", |j: &Job| &j.queue)]
    }

    // ── 1. empty collections ────────────────────────────────────────────

    #[test]
    fn empty_collections_are_equivalent() {
        let none: Vec<Job> = Vec::new();
        assert!(is_equivalent(&none, &none));
        assert!(!is_not_equivalent(&none, &none));
    }

    // ── 2. cardinality short-circuit ────────────────────────────────────

    #[test]
    fn different_lengths_diverge_on_cardinality() {
        let a = vec![job(1, "io", 0)];
        let b: Vec<Job> = Vec::new();
        assert_eq!(
            IdentityMatcher::<Job>::by_identity().divergence(&a, &b),
            Err(Divergence::Cardinality { left: 1, right: 0 })
        );
        assert!(is_not_equivalent(&a, &b));
    }

    // ── 3. order is irrelevant ──────────────────────────────────────────

    #[test]
    fn order_is_irrelevant() {
        let a = vec![job(1, "io", 0), job(2, "cpu", 1), job(3, "io", 2)];
        let b = vec![job(3, "io", 2), job(1, "io", 0), job(2, "cpu", 1)];
        assert!(is_equivalent(&a, &b));
        assert!(is_equivalent(&b, &a));
    }

    // ── 4. duplicates on either side ────────────────────────────────────

    #[test]
    fn left_duplicate_is_reported_on_left() {
        let a = vec![job(1, "io", 0), job(1, "io", 0)];
        let b = vec![job(1, "io", 0), job(2, "io", 0)];
        assert_eq!(
            IdentityMatcher::<Job>::by_identity().divergence(&a, &b),
            Err(Divergence::DuplicateIdentity {
                side: Side::Left,
                id: &1,
            })
        );
    }

    #[test]
    fn right_duplicate_is_reported_on_right() {
        let a = vec![job(1, "io", 0), job(2, "io", 0)];
        let b = vec![job(1, "io", 0), job(1, "io", 0)];
        assert_eq!(
            IdentityMatcher::<Job>::by_identity().divergence(&a, &b),
            Err(Divergence::DuplicateIdentity {
                side: Side::Right,
                id: &1,
            })
        );
    }

    #[test]
    fn identical_duplicates_on_both_sides_are_not_equivalent() {
        let a = vec![job(7, "io", 0), job(7, "io", 0)];
        assert!(is_not_equivalent(&a, &a.clone()));
    }

    // ── 5. unmatched identity ───────────────────────────────────────────

    #[test]
    fn unmatched_identity() {
        let a = vec![job(1, "io", 0), job(5, "io", 0)];
        let b = vec![job(1, "io", 0), job(6, "io", 0)];
        assert_eq!(
            IdentityMatcher::<Job>::by_identity().divergence(&a, &b),
            Err(Divergence::Unmatched { id: &6 })
        );
        assert!(is_not_equivalent(&b, &a));
    }

    // ── 6. field-selective pairs ────────────────────────────────────────

    #[test]
    fn field_rule_ignores_other_fields() {
        let a = vec![job(1, "io", 0), job(2, "cpu", 0)];
        let b = vec![job(2, "cpu", 9), job(1, "io", 3)];
        assert!(is_not_equivalent(&a, &b));
        assert!(is_equivalent_by(&a, &b, &queue_field()));
        assert!(!is_not_equivalent_by(&a, &b, &queue_field()));
    }

    #[test]
    fn field_rule_reports_field_in_divergence() {
        let fields = queue_field();
        let a = vec![job(1, "io", 0)];
        let b = vec![job(1, "cpu", 0)];
        let matcher = IdentityMatcher::<Job>::by_identity().by(&fields);
        assert_eq!(matcher.rule().fields().len(), 1);
        assert_eq!(matcher.rule().fields()[0].name(), "queue");
        assert_eq!(
            matcher.divergence(&a, &b),
            Err(Divergence::Unequal {
                id: &1,
                left: &a[0],
                right: &b[0],
                mismatch: PairMismatch::Field {
                    index: 0,
                    name: "queue"
                },
            })
        );
    }

    #[test]
    fn empty_field_list_matches_on_identity_alone() {
        let a = vec![job(1, "io", 0)];
        let b = vec![job(1, "cpu", 4)];
        assert!(is_equivalent_by(&a, &b, &[]));
    }

    // ── 7. heterogeneous containers ─────────────────────────────────────

    #[test]
    fn heterogeneous_containers() {
        let list = vec![job(1, "io", 0), job(2, "cpu", 1)];
        let set: HashSet<Job> = list.iter().cloned().collect();
        let deque: VecDeque<Job> = list.iter().rev().cloned().collect();
        let map: BTreeMap<u32, Job> = list.iter().map(|j| (j.id, j.clone())).collect();

        assert!(elements_are_equivalent(&list, &set));
        assert!(elements_are_equivalent(&set, &deque));
        assert!(elements_are_equivalent(map.values(), &list));
        assert!(elements_are_equivalent(list.as_slice(), &deque));
        assert!(!elements_are_not_equivalent(&deque, &set));
    }

    // ── 8. keyed matcher without Identifiable ───────────────────────────

    #[test]
    fn keyed_matcher_uses_projection() {
        #[derive(PartialEq)]
        struct Row {
            name: String,
            value: i32,
        }
        let row = |name: &str, value| Row {
            name: name.to_owned(),
            value,
        };
        let a = [row("x", 1), row("y", 2)];
        let b = [row("y", 2), row("x", 1)];
        let c = [row("y", 2), row("x", 5)];
        let matcher = Matcher::keyed(|r: &Row| r.name.as_str());
        assert!(matcher.equivalent(&a, &b));
        assert!(matcher.not_equivalent(&a, &c));
    }

    // ── 9. custom pair rule ─────────────────────────────────────────────

    struct AttemptsWithin(u8);

    impl PairRule<Job> for AttemptsWithin {
        fn compare(&self, left: &Job, right: &Job) -> Result<(), PairMismatch> {
            if left.attempts.abs_diff(right.attempts) <= self.0 {
                Ok(())
            } else {
                Err(PairMismatch::Whole)
            }
        }
    }

    #[test]
    fn custom_rule() {
        let a = vec![job(1, "io", 3)];
        let b = vec![job(1, "cpu", 4)];
        let lenient = IdentityMatcher::<Job>::by_identity().with_rule(AttemptsWithin(1));
        let strict = IdentityMatcher::<Job>::by_identity().with_rule(AttemptsWithin(0));
        assert_eq!(lenient.rule().0, 1);
        assert!(lenient.equivalent(&a, &b));
        assert!(strict.not_equivalent(&a, &b));
    }

    // ── 10. explain renders owned reports ───────────────────────────────

    #[test]
    fn explain_whole_value_difference() {
        let a = vec![job(1, "io", 0)];
        let b = vec![job(1, "io", 1)];
        assert_eq!(
            explain_equivalence(&a, &b),
            Err(Mismatch::Unequal {
                id: "1".to_owned(),
                difference: Difference::Whole {
                    left: "Job { id: 1, queue: \"io\", attempts: 0 }".to_owned(),
                    right: "Job { id: 1, queue: \"io\", attempts: 1 }".to_owned(),
                },
            })
        );
    }

    #[test]
    fn explain_field_difference() {
        let a = vec![job(1, "io", 0)];
        let b = vec![job(1, "cpu", 0)];
        let err = explain_equivalence_by(&a, &b, &queue_field());
        assert_eq!(
            err.map_err(|m| m.to_string()),
            Err(
                "[EQUIV_UNEQUAL] records with identity 1 differ: field `queue`: \"io\" != \"cpu\""
                    .to_owned()
            )
        );
    }

    #[test]
    fn explain_agrees_with_boolean() {
        let a = vec![job(1, "io", 0), job(2, "io", 0)];
        let b = vec![job(2, "io", 0), job(1, "io", 0)];
        assert_eq!(explain_equivalence(&a, &b), Ok(()));
        assert_eq!(explain_equivalence(&a, &b[..1]).is_ok(), is_equivalent(&a[..], &b[..1]));
    }
}
