// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Named field accessors.
//!
//! A [`Field`] pairs a projection (record → attribute) with that attribute's
//! equality. The attribute type is erased behind a boxed accessor so fields of
//! different types can sit in one ordered slice:
//!
//! ```
//! use equiv_core::Field;
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let fields = [
//!     Field::new("name", |p: &Person| &p.name),
//!     Field::new("age", |p: &Person| &p.age),
//! ];
//! let a = Person { name: "Alice".into(), age: 30 };
//! let b = Person { name: "Alice".into(), age: 31 };
//! assert!(fields[0].matches(&a, &b));
//! assert!(!fields[1].matches(&a, &b));
//! ```

use std::fmt::{self, Debug};
use std::marker::PhantomData;

/// Type-erased projection + equality for one attribute of `R`.
trait Accessor<R: ?Sized>: Send + Sync {
    fn same(&self, left: &R, right: &R) -> bool;
    fn render(&self, record: &R) -> Option<String>;
}

/// Borrowing projection whose values render with `Debug`.
struct Borrowed<P, V: ?Sized> {
    project: P,
    value: PhantomData<fn(&V)>,
}

impl<R, V, P> Accessor<R> for Borrowed<P, V>
where
    R: ?Sized,
    V: PartialEq + Debug + ?Sized,
    P: Fn(&R) -> &V + Send + Sync,
{
    fn same(&self, left: &R, right: &R) -> bool {
        (self.project)(left) == (self.project)(right)
    }

    fn render(&self, record: &R) -> Option<String> {
        Some(format!("{:?}", (self.project)(record)))
    }
}

/// Borrowing projection over a value with no `Debug` impl.
struct Opaque<P, V: ?Sized> {
    project: P,
    value: PhantomData<fn(&V)>,
}

impl<R, V, P> Accessor<R> for Opaque<P, V>
where
    R: ?Sized,
    V: PartialEq + ?Sized,
    P: Fn(&R) -> &V + Send + Sync,
{
    fn same(&self, left: &R, right: &R) -> bool {
        (self.project)(left) == (self.project)(right)
    }

    fn render(&self, _record: &R) -> Option<String> {
        None
    }
}

/// Projection that computes an owned value per call.
struct Computed<P, V> {
    project: P,
    value: PhantomData<fn() -> V>,
}

impl<R, V, P> Accessor<R> for Computed<P, V>
where
    R: ?Sized,
    V: PartialEq + Debug,
    P: Fn(&R) -> V + Send + Sync,
{
    fn same(&self, left: &R, right: &R) -> bool {
        (self.project)(left) == (self.project)(right)
    }

    fn render(&self, record: &R) -> Option<String> {
        Some(format!("{:?}", (self.project)(record)))
    }
}

/// A named, pure projection from a record to one comparable attribute.
///
/// Projections must be side-effect free: comparison short-circuits, so the
/// number of times a projection runs is not part of any contract.
pub struct Field<'f, R: ?Sized> {
    name: &'static str,
    accessor: Box<dyn Accessor<R> + 'f>,
}

impl<'f, R: ?Sized> Field<'f, R> {
    /// Field over a borrowed attribute. Values appear in diagnostic reports
    /// through their `Debug` impl.
    pub fn new<V, P>(name: &'static str, project: P) -> Self
    where
        V: PartialEq + Debug + ?Sized + 'f,
        P: Fn(&R) -> &V + Send + Sync + 'f,
    {
        Self {
            name,
            accessor: Box::new(Borrowed {
                project,
                value: PhantomData,
            }),
        }
    }

    /// Field over a borrowed attribute that has no `Debug` impl.
    ///
    /// Reports name the field but carry no values.
    pub fn opaque<V, P>(name: &'static str, project: P) -> Self
    where
        V: PartialEq + ?Sized + 'f,
        P: Fn(&R) -> &V + Send + Sync + 'f,
    {
        Self {
            name,
            accessor: Box::new(Opaque {
                project,
                value: PhantomData,
            }),
        }
    }

    /// Field over a value derived from the record (e.g. a normalized string
    /// or a length) rather than stored in it.
    pub fn computed<V, P>(name: &'static str, project: P) -> Self
    where
        V: PartialEq + Debug + 'f,
        P: Fn(&R) -> V + Send + Sync + 'f,
    {
        Self {
            name,
            accessor: Box::new(Computed {
                project,
                value: PhantomData,
            }),
        }
    }

    /// Name given at construction.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if both records project to equal values.
    pub fn matches(&self, left: &R, right: &R) -> bool {
        self.accessor.same(left, right)
    }

    /// `Debug` rendering of this field's value on `record`, or `None` for
    /// [`Field::opaque`] fields.
    pub fn render(&self, record: &R) -> Option<String> {
        self.accessor.render(record)
    }
}

impl<R: ?Sized> Debug for Field<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
