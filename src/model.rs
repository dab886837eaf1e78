//! Plain data records behind the GraphQL schema.

use crate::schema::Date;
use serde::{Deserialize as _, Deserializer};
use serde_derive::Deserialize;

/// Discriminant of an [`AuthorRecord`], carrying the fields that only exist on one variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthorKind {
    Human,
    Robot { power: bool },
}

impl AuthorKind {
    /// Tag that selects the robot variant. Anything else is a human.
    pub const ROBOT_TAG: &'static str = "robot";

    /// Builds a kind from a raw, possibly missing, tag.
    ///
    /// Never fails: a missing or unrecognised tag yields [`AuthorKind::Human`],
    /// and `power` is ignored for humans.
    pub fn from_tag(tag: Option<&str>, power: Option<bool>) -> Self {
        match tag {
            Some(Self::ROBOT_TAG) => AuthorKind::Robot {
                power: power.unwrap_or_default(),
            },
            _ => AuthorKind::Human,
        }
    }

    /// Name of the concrete GraphQL type this kind resolves to.
    pub fn type_name(&self) -> &'static str {
        match self {
            AuthorKind::Robot { .. } => "Robot",
            AuthorKind::Human => "Human",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthorRecord {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    /// Kept as `i32` so it is exposed as a GraphQL `Int` without loss.
    pub age: i32,
    pub birthday: Date,
    /// Overrides the derived full name. Only set for placeholder authors.
    pub display_name: Option<String>,
    kind: AuthorKind,
}

impl AuthorRecord {
    pub fn new<S: Into<String>>(
        first_name: S,
        last_name: S,
        gender: S,
        age: i32,
        birthday: Date,
        kind: AuthorKind,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender: gender.into(),
            age,
            birthday,
            display_name: None,
            kind,
        }
    }

    pub fn with_display_name<S: Into<String>>(mut self, display_name: S) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn kind(&self) -> AuthorKind {
        self.kind
    }

    pub fn full_name(&self) -> String {
        match &self.display_name {
            Some(name) => name.clone(),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Humans under a hundred are considered alive.
    pub fn alive(&self) -> bool {
        self.age < 100
    }

    /// Robots report their power flag, humans never have one.
    pub fn power(&self) -> bool {
        match self.kind {
            AuthorKind::Robot { power } => power,
            AuthorKind::Human => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub title: String,
    pub author: AuthorRecord,
}

impl Book {
    pub fn new<S: Into<String>>(title: S, author: AuthorRecord) -> Self {
        Self {
            title: title.into(),
            author,
        }
    }
}

/// Author as written in a seed file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawAuthor {
    #[serde(default)]
    kind: Option<String>,
    first_name: String,
    last_name: String,
    gender: String,
    #[serde(deserialize_with = "non_negative_age")]
    age: i32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    birthday: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    power: Option<bool>,
}

fn non_negative_age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let age = i32::deserialize(deserializer)?;
    if age < 0 {
        return Err(serde::de::Error::custom(format!("negative age {}", age)));
    }
    Ok(age)
}

/// Book as written in a seed file.
#[derive(Debug, Deserialize)]
pub(crate) struct RawBook {
    title: String,
    author: RawAuthor,
}

impl From<RawAuthor> for AuthorRecord {
    fn from(raw: RawAuthor) -> Self {
        let kind = AuthorKind::from_tag(raw.kind.as_deref(), raw.power);
        AuthorRecord::new(
            raw.first_name,
            raw.last_name,
            raw.gender,
            raw.age,
            Date::from(raw.birthday),
            kind,
        )
    }
}

impl From<RawBook> for Book {
    fn from(raw: RawBook) -> Self {
        Book::new(raw.title, raw.author.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(age: i32, kind: AuthorKind) -> AuthorRecord {
        AuthorRecord::new("Ada", "Lovelace", "F", age, Date::epoch(), kind)
    }

    #[test]
    fn from_tag_only_matches_robot_exactly() {
        assert_eq!(
            AuthorKind::from_tag(Some("robot"), Some(true)),
            AuthorKind::Robot { power: true }
        );
        assert_eq!(
            AuthorKind::from_tag(Some("robot"), None),
            AuthorKind::Robot { power: false }
        );
        assert_eq!(AuthorKind::from_tag(Some("Robot"), Some(true)), AuthorKind::Human);
        assert_eq!(AuthorKind::from_tag(Some("human"), None), AuthorKind::Human);
        assert_eq!(AuthorKind::from_tag(Some(""), None), AuthorKind::Human);
        assert_eq!(AuthorKind::from_tag(None, Some(true)), AuthorKind::Human);
    }

    #[test]
    fn full_name_is_derived_from_current_names() {
        let mut record = author(30, AuthorKind::Human);
        assert_eq!(record.full_name(), "Ada Lovelace");

        record.last_name = "King".into();
        assert_eq!(record.full_name(), "Ada King");
    }

    #[test]
    fn display_name_overrides_full_name() {
        let record = author(30, AuthorKind::Human).with_display_name("Countess");
        assert_eq!(record.full_name(), "Countess");
    }

    #[test]
    fn alive_below_one_hundred() {
        assert!(author(99, AuthorKind::Human).alive());
        assert!(!author(100, AuthorKind::Human).alive());
    }

    #[test]
    fn power_only_on_robots() {
        assert!(author(1, AuthorKind::Robot { power: true }).power());
        assert!(!author(1, AuthorKind::Human).power());
    }

    #[test]
    fn raw_author_without_kind_is_human() {
        let raw: RawBook = serde_json::from_str(
            r#"{"title": "T", "author": {
                "firstName": "A", "lastName": "B", "gender": "X",
                "age": 7, "birthday": 1000, "power": true
            }}"#,
        )
        .unwrap();
        let book = Book::from(raw);
        assert_eq!(book.author.kind(), AuthorKind::Human);
        assert_eq!(book.author.birthday, Date::from_millis(1000).unwrap());
    }

    #[test]
    fn raw_author_rejects_negative_age() {
        let raw = serde_json::from_str::<RawAuthor>(
            r#"{"firstName": "A", "lastName": "B", "gender": "X", "age": -1, "birthday": 0}"#,
        );
        assert!(raw.is_err());
    }

    #[test]
    fn raw_author_rejects_age_beyond_graphql_int() {
        let raw = serde_json::from_str::<RawAuthor>(
            r#"{"firstName": "A", "lastName": "B", "gender": "X", "age": 3000000000, "birthday": 0}"#,
        );
        assert!(raw.is_err());

        let raw = serde_json::from_str::<RawAuthor>(
            r#"{"firstName": "A", "lastName": "B", "gender": "X", "age": 2147483647, "birthday": 0}"#,
        )
        .unwrap();
        assert_eq!(AuthorRecord::from(raw).age, i32::MAX);
    }
}
