//! Polymorphic author types.
//!
//! An [`AuthorRecord`] is exposed both through the `Author` interface and the
//! `SearchResult` union. Both pick the concrete type with [`resolve_variant`].

use juniper::{graphql_interface, graphql_object, GraphQLUnion};

use super::{Context, Date};
use crate::model::{AuthorKind, AuthorRecord};

/// Name of the concrete GraphQL type for `record`: `Robot` for robots,
/// `Human` for everything else.
pub fn resolve_variant(record: &AuthorRecord) -> &'static str {
    record.kind().type_name()
}

/// The concrete type an author record resolves to.
pub enum Variant {
    Human(Human),
    Robot(Robot),
}

impl From<AuthorRecord> for Variant {
    fn from(record: AuthorRecord) -> Self {
        match record.kind() {
            AuthorKind::Robot { .. } => Variant::Robot(Robot(record)),
            AuthorKind::Human => Variant::Human(Human(record)),
        }
    }
}

impl AuthorRecord {
    pub fn into_variant(self) -> Variant {
        Variant::from(self)
    }
}

impl From<Variant> for AuthorValue {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Human(human) => human.into(),
            Variant::Robot(robot) => robot.into(),
        }
    }
}

impl From<Variant> for SearchResult {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Human(human) => SearchResult::Human(human),
            Variant::Robot(robot) => SearchResult::Robot(robot),
        }
    }
}

///
/// Anybody who wrote a book
///
#[graphql_interface(for = [Human, Robot], context = Context)]
pub trait Author {
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
    /// First and last name, unless the author was given a display name
    fn full_name(&self) -> String;
    /// Free-form gender tag
    fn gender(&self) -> &str;
    fn age(&self) -> i32;
    fn birthday(&self) -> Date;
}

///
/// Result of a search over every author
///
#[derive(GraphQLUnion)]
#[graphql(context = Context)]
pub enum SearchResult {
    Human(Human),
    Robot(Robot),
}

pub struct Human(AuthorRecord);

///
/// Author of flesh and blood
///
#[graphql_object(impl = AuthorValue, context = Context)]
impl Human {
    fn first_name(&self) -> &str {
        &self.0.first_name
    }

    fn last_name(&self) -> &str {
        &self.0.last_name
    }

    /// First and last name, unless the author was given a display name
    fn full_name(&self) -> String {
        self.0.full_name()
    }

    /// Free-form gender tag
    fn gender(&self) -> &str {
        &self.0.gender
    }

    fn age(&self) -> i32 {
        self.0.age
    }

    fn birthday(&self) -> Date {
        self.0.birthday
    }

    /// Whether the author is younger than a hundred
    fn alive(&self) -> bool {
        self.0.alive()
    }
}

pub struct Robot(AuthorRecord);

///
/// Machine author
///
#[graphql_object(impl = AuthorValue, context = Context)]
impl Robot {
    fn first_name(&self) -> &str {
        &self.0.first_name
    }

    fn last_name(&self) -> &str {
        &self.0.last_name
    }

    /// First and last name, unless the author was given a display name
    fn full_name(&self) -> String {
        self.0.full_name()
    }

    /// Free-form gender tag
    fn gender(&self) -> &str {
        &self.0.gender
    }

    fn age(&self) -> i32 {
        self.0.age
    }

    fn birthday(&self) -> Date {
        self.0.birthday
    }

    fn power(&self) -> bool {
        self.0.power()
    }
}
