// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for equiv crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`people`] - `Person` records keyed by numeric id, plus field lists
//! - [`inventory`] - `Sku` records keyed by a borrowed `str` code
//! - [`shuffle`] - Deterministic PRNG and permutation helpers

pub mod inventory;
pub mod people;
pub mod shuffle;

pub use inventory::{sku, Sku};
pub use people::{person, roster, sequential_people, Person};
pub use shuffle::{shuffled, XorShift64};
