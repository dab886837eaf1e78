//! GraphQL schema over the book store.

use std::sync::{Mutex, MutexGuard, PoisonError};

use juniper::{graphql_object, EmptySubscription};

use crate::model::Book;
use crate::store::BookCollection;

pub mod author;
pub mod date;
mod root;

pub use self::author::{resolve_variant, AuthorValue, Human, Robot, SearchResult, Variant};
pub use self::date::Date;
pub use self::root::{Mutation, Query};

///
/// Context for Juniper
///
pub struct Context {
    books: Mutex<BookCollection>,
}

impl juniper::Context for Context {}

impl Context {
    pub fn new(books: BookCollection) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }

    /// Locks the collection. A poisoned lock is recovered since appends are atomic.
    pub fn books(&self) -> MutexGuard<'_, BookCollection> {
        self.books.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(BookCollection::seeded())
    }
}

///
/// A book and the author who wrote it
///
#[graphql_object(context = Context)]
impl Book {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> AuthorValue {
        self.author.clone().into_variant().into()
    }
}

pub type Schema = juniper::RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

pub fn schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
