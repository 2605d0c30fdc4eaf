// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Field-selective equality and identity-keyed collection equivalence.
//!
//! `equiv-core` answers two yes/no questions:
//!
//! - Are two records equal on a chosen set of fields? See [`compare`] and
//!   [`Field`].
//! - Do two unordered collections hold the same records, pairing elements by
//!   identity? See [`matcher`] and [`Identifiable`].
//!
//! Nothing here mutates, allocates beyond a per-call lookup table, or fails:
//! every boolean entry point is total. Callers that need to know *why* a
//! comparison failed use the `explain_*` functions, which return a [`Mismatch`]
//! or [`Difference`] report.
//!
//! ```
//! use equiv_core::{is_equivalent, is_equivalent_by, Field, Identifiable};
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     id: u32,
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! impl Identifiable for Person {
//!     type Id = u32;
//!     fn id(&self) -> &u32 {
//!         &self.id
//!     }
//! }
//!
//! let a = [Person { id: 1, name: "Alice", age: 30 }];
//! let b = [Person { id: 1, name: "Alice", age: 31 }];
//! assert!(!is_equivalent(&a, &b));
//! assert!(is_equivalent_by(&a, &b, &[Field::new("name", |p: &Person| &p.name)]));
//! assert!(!is_equivalent_by(&a, &b, &[Field::new("age", |p: &Person| &p.age)]));
//! ```
//!
//! # Logging
//!
//! Short-circuits are emitted as `tracing` events at `TRACE` level with the
//! reason and position. Record and identity values are never logged.
//!
//! # Crate Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Mismatch`], [`Difference`] and
//!   [`Side`].
#![forbid(unsafe_code)]

pub mod compare;
pub mod field;
pub mod identity;
pub mod matcher;
pub mod report;
pub mod rule;

pub use compare::{explain_equal, first_difference, is_equal, is_not_equal, SelectiveEq};
pub use field::Field;
pub use identity::Identifiable;
pub use matcher::{
    elements_are_equivalent, elements_are_equivalent_by, elements_are_not_equivalent,
    elements_are_not_equivalent_by, explain_equivalence, explain_equivalence_by, is_equivalent,
    is_equivalent_by, is_not_equivalent, is_not_equivalent_by, Divergence, IdentityMatcher,
    Matcher,
};
pub use report::{Difference, Mismatch, Side};
pub use rule::{DescribePair, PairMismatch, PairRule, Selected, WholeValue};
