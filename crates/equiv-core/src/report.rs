// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Owned diagnostic reports.
//!
//! The boolean entry points never allocate a report. These types exist for
//! callers that want to know *why* two values are not equal or two collections
//! are not equivalent (test assertions, audit logs). Identities and values are
//! captured as their `Debug` renderings, so a report outlives the compared data.

use std::fmt;

use crate::field::Field;

/// Which collection of a comparison an observation belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    /// The first collection passed to the comparison.
    Left,
    /// The second collection passed to the comparison.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// How two paired records differ.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Difference {
    /// Whole-value comparison failed.
    Whole {
        /// `Debug` rendering of the left record.
        left: String,
        /// `Debug` rendering of the right record.
        right: String,
    },
    /// A named field differs.
    Field {
        /// Field name.
        name: String,
        /// Left value, absent for opaque fields.
        left: Option<String>,
        /// Right value, absent for opaque fields.
        right: Option<String>,
    },
    /// A custom pair rule rejected the pair without describing why.
    Unspecified,
}

impl Difference {
    /// Describe `field` as the differing attribute of `left` and `right`.
    pub fn of_field<R: ?Sized>(field: &Field<'_, R>, left: &R, right: &R) -> Self {
        Self::Field {
            name: field.name().to_owned(),
            left: field.render(left),
            right: field.render(right),
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole { left, right } => write!(f, "{left} != {right}"),
            Self::Field {
                name,
                left: Some(left),
                right: Some(right),
            } => write!(f, "field `{name}`: {left} != {right}"),
            Self::Field { name, .. } => write!(f, "field `{name}` differs"),
            Self::Unspecified => f.write_str("records differ"),
        }
    }
}

impl std::error::Error for Difference {}

/// Why two collections are not equivalent.
///
/// Only the first divergence found is reported; the comparison stops there.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Mismatch {
    /// The collections have different lengths.
    #[error("[EQUIV_CARDINALITY] left has {left} elements, right has {right}")]
    Cardinality {
        /// Length of the left collection.
        left: usize,
        /// Length of the right collection.
        right: usize,
    },
    /// An identity occurs more than once within one collection.
    #[error("[EQUIV_DUPLICATE_ID] identity {id} occurs more than once on the {side} side")]
    DuplicateIdentity {
        /// Collection holding the duplicate.
        side: Side,
        /// `Debug` rendering of the duplicated identity.
        id: String,
    },
    /// A right-hand identity has no left-hand counterpart.
    #[error("[EQUIV_UNMATCHED_ID] identity {id} on the right has no counterpart on the left")]
    Unmatched {
        /// `Debug` rendering of the unmatched identity.
        id: String,
    },
    /// Records paired by identity are not equal under the pair rule.
    #[error("[EQUIV_UNEQUAL] records with identity {id} differ: {difference}")]
    Unequal {
        /// `Debug` rendering of the shared identity.
        id: String,
        /// What differs between the two records.
        difference: Difference,
    },
}
