//! In-memory book collection.

use std::fs;
use std::path::Path;

use failure::Error as Failure;

use crate::error::Error;
use crate::model::{AuthorKind, AuthorRecord, Book, RawBook};
use crate::schema::Date;

/// Placeholder author attached to books created through `addBook`.
const PLACEHOLDER_FIRST_NAME: &str = "John";
const PLACEHOLDER_LAST_NAME: &str = "Doe";
const PLACEHOLDER_GENDER: &str = "H";
const PLACEHOLDER_AGE: i32 = 0;

/// Insertion-ordered books. Books are only ever appended.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookCollection {
    books: Vec<Book>,
}

impl BookCollection {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// The sample shelf every fresh process starts with.
    pub fn seeded() -> Self {
        let birthday = |millis| Date::from_millis(millis).unwrap_or_else(Date::epoch);
        Self::new(vec![
            Book::new(
                "Harry Potter and the Chamber of Secrets",
                AuthorRecord::new(
                    "J.K",
                    "Rolins",
                    "F",
                    53,
                    birthday(-139_708_800_000),
                    AuthorKind::Human,
                ),
            ),
            Book::new(
                "Jurassic Park",
                AuthorRecord::new(
                    "Michael",
                    "Crichton",
                    "H",
                    26,
                    birthday(-858_902_400_000),
                    AuthorKind::Human,
                ),
            ),
            Book::new(
                "0101010101",
                AuthorRecord::new(
                    "Unit",
                    "0101",
                    "N",
                    3,
                    birthday(978_307_200_000),
                    AuthorKind::Robot { power: true },
                ),
            ),
        ])
    }

    /// Reads a JSON array of books.
    pub fn from_json(json: &str) -> Result<Self, Failure> {
        let raw: Vec<RawBook> =
            serde_json::from_str(json).map_err(|err| Error::SeedFormat(err.to_string()))?;
        Ok(Self::new(raw.into_iter().map(Book::from).collect()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Failure> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|err| Error::SeedIo {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// All books, or only those whose author's gender equals `gender` exactly.
    pub fn list_books(&self, gender: Option<&str>) -> Vec<Book> {
        match gender {
            Some(gender) => self
                .books
                .iter()
                .filter(|book| book.author.gender == gender)
                .cloned()
                .collect(),
            None => self.books.clone(),
        }
    }

    pub fn list_authors(&self) -> Vec<AuthorRecord> {
        self.books.iter().map(|book| book.author.clone()).collect()
    }

    /// Appends a book by the placeholder author, shown as `author_display_name`.
    pub fn add_book<T, A>(&mut self, title: T, author_display_name: A) -> Book
    where
        T: Into<String>,
        A: Into<String>,
    {
        let author = AuthorRecord::new(
            PLACEHOLDER_FIRST_NAME,
            PLACEHOLDER_LAST_NAME,
            PLACEHOLDER_GENDER,
            PLACEHOLDER_AGE,
            Date::epoch(),
            AuthorKind::Human,
        )
        .with_display_name(author_display_name);
        let book = Book::new(title, author);
        tracing::info!(title = %book.title, total = self.books.len() + 1, "book added");
        self.books.push(book.clone());
        book
    }
}
