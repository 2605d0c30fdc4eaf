// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `Sku` fixtures: records whose identity is an unsized `str`.

use equiv_core::{Field, Identifiable};

/// Stock-keeping unit keyed by its code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sku {
    /// Identity.
    pub code: String,
    /// Units on hand.
    pub qty: u32,
    /// Unit price in cents.
    pub price_cents: u64,
}

impl Identifiable for Sku {
    type Id = str;

    fn id(&self) -> &str {
        &self.code
    }
}

impl Sku {
    /// Field accessor for [`Sku::qty`].
    pub fn qty_field() -> Field<'static, Self> {
        Field::new("qty", |s: &Self| &s.qty)
    }

    /// Field accessor for [`Sku::price_cents`].
    pub fn price_field() -> Field<'static, Self> {
        Field::new("price_cents", |s: &Self| &s.price_cents)
    }
}

/// Build a [`Sku`].
pub fn sku(code: &str, qty: u32, price_cents: u64) -> Sku {
    Sku {
        code: code.to_owned(),
        qty,
        price_cents,
    }
}
