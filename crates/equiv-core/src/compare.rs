// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Field-selective comparison of two records.
//!
//! Two records are equal over a field list when every listed field projects to
//! equal values. Fields not in the list are ignored, and an empty list makes
//! any two records equal.

use crate::field::Field;
use crate::report::Difference;

/// Index and accessor of the first field on which `left` and `right` differ.
///
/// Fields are checked in list order and the scan stops at the first mismatch.
pub fn first_difference<'s, 'f, R: ?Sized>(
    left: &R,
    right: &R,
    fields: &'s [Field<'f, R>],
) -> Option<(usize, &'s Field<'f, R>)> {
    fields
        .iter()
        .enumerate()
        .find(|(_, field)| !field.matches(left, right))
}

/// Returns `true` if `left` and `right` agree on every field in `fields`.
pub fn is_equal<R: ?Sized>(left: &R, right: &R, fields: &[Field<'_, R>]) -> bool {
    first_difference(left, right, fields).is_none()
}

/// Negation of [`is_equal`].
pub fn is_not_equal<R: ?Sized>(left: &R, right: &R, fields: &[Field<'_, R>]) -> bool {
    !is_equal(left, right, fields)
}

/// Like [`is_equal`], but names the first differing field and both values.
pub fn explain_equal<R: ?Sized>(
    left: &R,
    right: &R,
    fields: &[Field<'_, R>],
) -> Result<(), Difference> {
    match first_difference(left, right, fields) {
        None => Ok(()),
        Some((_, field)) => Err(Difference::of_field(field, left, right)),
    }
}

/// Method-call form of [`is_equal`] / [`is_not_equal`], available on every type.
///
/// ```
/// use equiv_core::{Field, SelectiveEq};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let a = Point { x: 1, y: 2 };
/// let b = Point { x: 1, y: 3 };
/// assert!(a.is_equal_by(&b, &[Field::new("x", |p: &Point| &p.x)]));
/// assert!(a.is_not_equal_by(&b, &[Field::new("y", |p: &Point| &p.y)]));
/// ```
pub trait SelectiveEq {
    /// Returns `true` if `self` and `other` agree on every field in `fields`.
    fn is_equal_by(&self, other: &Self, fields: &[Field<'_, Self>]) -> bool;

    /// Negation of [`SelectiveEq::is_equal_by`].
    fn is_not_equal_by(&self, other: &Self, fields: &[Field<'_, Self>]) -> bool {
        !self.is_equal_by(other, fields)
    }
}

impl<T: ?Sized> SelectiveEq for T {
    fn is_equal_by(&self, other: &Self, fields: &[Field<'_, Self>]) -> bool {
        is_equal(self, other, fields)
    }
}
