use juniper::graphql_object;

use super::{Context, Date, SearchResult};
use crate::model::Book;

pub struct Query;

#[graphql_object(context = Context)]
impl Query {
    fn api_version(&self) -> &'static str {
        "1.0"
    }

    ///
    /// Every book, or only those whose author has exactly the given gender
    ///
    fn books(&self, context: &Context, gender: Option<String>) -> Option<Vec<Option<Book>>> {
        let books = context.books().list_books(gender.as_deref());
        Some(books.into_iter().map(Some).collect())
    }

    ///
    /// Every author, resolved to its concrete type
    ///
    fn search(&self, context: &Context) -> Option<Vec<Option<SearchResult>>> {
        let authors = context.books().list_authors();
        Some(
            authors
                .into_iter()
                .map(|author| Some(author.into_variant().into()))
                .collect(),
        )
    }

    ///
    /// Echoes a date back through the `Date` codec; an absent date stays null
    ///
    fn date(&self, date: Option<Date>) -> Option<Date> {
        date
    }
}

pub struct Mutation;

#[graphql_object(context = Context)]
impl Mutation {
    ///
    /// Append a book written by a placeholder author shown under `author`
    ///
    /// Missing arguments are stored as empty strings.
    ///
    fn add_book(
        &self,
        context: &Context,
        title: Option<String>,
        author: Option<String>,
    ) -> Option<Book> {
        let title = title.unwrap_or_default();
        let author = author.unwrap_or_default();
        Some(context.books().add_book(title, author))
    }
}
