// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `Person` fixtures.

use equiv_core::{Field, Identifiable};

/// A record with a numeric identity and two comparable attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Person {
    /// Identity.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
}

impl Identifiable for Person {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}

impl Person {
    /// Field accessor for [`Person::name`].
    pub fn name_field() -> Field<'static, Self> {
        Field::new("name", |p: &Self| &p.name)
    }

    /// Field accessor for [`Person::age`].
    pub fn age_field() -> Field<'static, Self> {
        Field::new("age", |p: &Self| &p.age)
    }

    /// Every non-identity attribute, in declaration order.
    pub fn all_fields() -> Vec<Field<'static, Self>> {
        vec![Self::name_field(), Self::age_field()]
    }

    /// Copy of `self` with a different age.
    pub fn aged(&self, age: u32) -> Self {
        Self {
            age,
            ..self.clone()
        }
    }
}

/// Build a [`Person`].
///
/// ```
/// use equiv_dry_tests::person;
///
/// let alice = person(1, "Alice", 30);
/// assert_eq!(alice.name, "Alice");
/// ```
pub fn person(id: u32, name: &str, age: u32) -> Person {
    Person {
        id,
        name: name.to_owned(),
        age,
    }
}

/// Alice (1, 30), Bob (2, 25), Carol (3, 35).
pub fn roster() -> Vec<Person> {
    vec![
        person(1, "Alice", 30),
        person(2, "Bob", 25),
        person(3, "Carol", 35),
    ]
}

/// `n` people with ids `0..n`, names `person-{id}` and ages cycling 18..=80.
pub fn sequential_people(n: u32) -> Vec<Person> {
    (0..n)
        .map(|id| person(id, &format!("person-{id}"), 18 + id % 63))
        .collect()
}
