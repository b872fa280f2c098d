use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::core::domain::Identifiable;

// Patron abstracts library member together with the books currently checked out to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patron {
    name: String,
    patron_id: String,
    borrowed_books: Vec<Book>,
}

impl Patron {
    pub fn new(name: &str, patron_id: &str) -> Self {
        Self {
            name: name.to_string(),
            patron_id: patron_id.to_string(),
            borrowed_books: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn patron_id(&self) -> &str {
        &self.patron_id
    }

    pub fn borrowed_books(&self) -> &[Book] {
        &self.borrowed_books
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn add_borrowed_book(&mut self, book: Book) {
        self.borrowed_books.push(book);
    }

    // Removes the first borrowed copy equal to the book, returning false if none is held.
    pub fn remove_borrowed_book(&mut self, book: &Book) -> bool {
        match self.borrowed_books.iter().position(|b| b == book) {
            Some(pos) => {
                self.borrowed_books.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn has_borrowed(&self, isbn: &str) -> bool {
        self.borrowed_books.iter().any(|b| b.isbn() == isbn)
    }

    // Replaces held copies of the book with its current details.
    pub(crate) fn refresh_borrowed_book(&mut self, book: &Book) {
        for held in self.borrowed_books.iter_mut().filter(|b| b.isbn() == book.isbn()) {
            *held = book.clone();
        }
    }
}

impl PartialEq for Patron {
    fn eq(&self, other: &Self) -> bool {
        self.patron_id == other.patron_id
    }
}

impl Eq for Patron {}

impl Hash for Patron {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.patron_id.hash(state);
    }
}

impl Identifiable for Patron {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}

impl Display for Patron {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) holding {} book(s)", self.name, self.patron_id, self.borrowed_books.len())
    }
}
