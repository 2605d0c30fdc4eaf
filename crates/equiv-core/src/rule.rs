// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pair rules: how two records already matched by identity are compared.
//!
//! [`WholeValue`] uses the record's own `PartialEq`. [`Selected`] compares only
//! the listed [`Field`]s. Callers can supply any other relation (tolerances,
//! normalization) by implementing [`PairRule`] and handing it to
//! [`Matcher::with_rule`](crate::Matcher::with_rule).

use std::fmt::Debug;

use crate::compare;
use crate::field::Field;
use crate::report::Difference;

/// Which part of a pair failed its rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PairMismatch {
    /// The records differ as a whole (or the rule has no finer detail).
    Whole,
    /// The field at `index` in the rule's field list differs.
    Field {
        /// Position in the field list.
        index: usize,
        /// Field name.
        name: &'static str,
    },
}

impl PairMismatch {
    /// Name of the differing field, if the rule reported one.
    pub fn field_name(&self) -> Option<&'static str> {
        match self {
            Self::Whole => None,
            Self::Field { name, .. } => Some(name),
        }
    }
}

/// An equality relation between two records of the same type.
///
/// Implementations must be symmetric (`compare(a, b)` succeeds iff
/// `compare(b, a)` does); collection equivalence is only commutative when
/// its pair rule is.
pub trait PairRule<R: ?Sized> {
    /// `Ok(())` if `left` and `right` are equal under this rule.
    fn compare(&self, left: &R, right: &R) -> Result<(), PairMismatch>;
}

/// A [`PairRule`] that can describe its failures for diagnostic reports.
pub trait DescribePair<R: ?Sized>: PairRule<R> {
    /// Render the failure `mismatch` previously returned for this pair.
    fn describe(&self, mismatch: PairMismatch, left: &R, right: &R) -> Difference;
}

/// Whole-record equality via `PartialEq`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WholeValue;

impl<R: PartialEq + ?Sized> PairRule<R> for WholeValue {
    fn compare(&self, left: &R, right: &R) -> Result<(), PairMismatch> {
        if left == right {
            Ok(())
        } else {
            Err(PairMismatch::Whole)
        }
    }
}

impl<R: PartialEq + Debug + ?Sized> DescribePair<R> for WholeValue {
    fn describe(&self, _mismatch: PairMismatch, left: &R, right: &R) -> Difference {
        Difference::Whole {
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        }
    }
}

/// Equality over an explicit field list.
#[derive(Debug)]
pub struct Selected<'f, R: ?Sized> {
    fields: &'f [Field<'f, R>],
}

impl<'f, R: ?Sized> Selected<'f, R> {
    /// Compare over `fields`. An empty list accepts every pair.
    pub fn new(fields: &'f [Field<'f, R>]) -> Self {
        Self { fields }
    }

    /// The field list.
    pub fn fields(&self) -> &'f [Field<'f, R>] {
        self.fields
    }
}

impl<R: ?Sized> Clone for Selected<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized> Copy for Selected<'_, R> {}

impl<R: ?Sized> PairRule<R> for Selected<'_, R> {
    fn compare(&self, left: &R, right: &R) -> Result<(), PairMismatch> {
        match compare::first_difference(left, right, self.fields) {
            None => Ok(()),
            Some((index, field)) => Err(PairMismatch::Field {
                index,
                name: field.name(),
            }),
        }
    }
}

impl<R: ?Sized> DescribePair<R> for Selected<'_, R> {
    fn describe(&self, mismatch: PairMismatch, left: &R, right: &R) -> Difference {
        match mismatch {
            PairMismatch::Field { index, name } => match self.fields.get(index) {
                Some(field) => Difference::of_field(field, left, right),
                None => Difference::Field {
                    name: name.to_owned(),
                    left: None,
                    right: None,
                },
            },
            PairMismatch::Whole => Difference::Unspecified,
        }
    }
}
