// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Record identity.

use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// A record with an identity attribute used to pair elements across two
/// collections.
///
/// Identities should be unique within one collection. A collection that
/// repeats an identity is never equivalent to anything; it is not an error.
///
/// Records without a natural identity can still be matched through
/// [`Matcher::keyed`](crate::Matcher::keyed).
pub trait Identifiable {
    /// Identity type. May be unsized (e.g. `str` borrowed out of a `String`).
    type Id: Eq + Hash + ?Sized;

    /// Borrow this record's identity.
    fn id(&self) -> &Self::Id;
}

impl<T: Identifiable + ?Sized> Identifiable for &T {
    type Id = T::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }
}

impl<T: Identifiable + ?Sized> Identifiable for Box<T> {
    type Id = T::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }
}

impl<T: Identifiable + ?Sized> Identifiable for Rc<T> {
    type Id = T::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }
}

impl<T: Identifiable + ?Sized> Identifiable for Arc<T> {
    type Id = T::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }
}
