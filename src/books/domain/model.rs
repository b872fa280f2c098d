use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// Book abstracts a catalogued title. The isbn is its identity: two books with the same
// isbn are the same book regardless of the descriptive fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
    publication_year: i32,
}

impl Book {
    pub fn new(title: &str, author: &str, isbn: &str, publication_year: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            publication_year,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_author(&mut self, author: &str) {
        self.author = author.to_string();
    }

    pub fn set_publication_year(&mut self, publication_year: i32) {
        self.publication_year = publication_year;
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

impl Identifiable for Book {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({}) isbn {}", self.title, self.author, self.publication_year, self.isbn)
    }
}
