use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::domain::model::Book;
use crate::patrons::domain::model::Patron;

pub const BOOKS_TOPIC: &str = "books";
pub const PATRONS_TOPIC: &str = "patrons";
pub const CHECKOUT_TOPIC: &str = "checkout";

// LibraryEvent records an applied change along with the entity state after it
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum LibraryEvent {
    BookAdded(Book),
    BookUpdated(Book),
    BookRemoved { isbn: String },
    PatronAdded(Patron),
    PatronUpdated(Patron),
    BookCheckedOut { book: Book, patron_id: String },
    BookReturned { book: Book, patron_id: String },
}

impl LibraryEvent {
    pub fn topic(&self) -> &'static str {
        match self {
            LibraryEvent::BookAdded(_) | LibraryEvent::BookUpdated(_) | LibraryEvent::BookRemoved { .. } => BOOKS_TOPIC,
            LibraryEvent::PatronAdded(_) | LibraryEvent::PatronUpdated(_) => PATRONS_TOPIC,
            LibraryEvent::BookCheckedOut { .. } | LibraryEvent::BookReturned { .. } => CHECKOUT_TOPIC,
        }
    }

    // isbn for book and lending changes, patron id for patron changes
    pub fn key(&self) -> &str {
        match self {
            LibraryEvent::BookAdded(book) | LibraryEvent::BookUpdated(book) => book.isbn(),
            LibraryEvent::BookRemoved { isbn } => isbn,
            LibraryEvent::PatronAdded(patron) | LibraryEvent::PatronUpdated(patron) => patron.patron_id(),
            LibraryEvent::BookCheckedOut { book, .. } | LibraryEvent::BookReturned { book, .. } => book.isbn(),
        }
    }
}

// DomainEvent stamps a library event with its id, branch and time
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub branch_id: String,
    pub event: LibraryEvent,
    pub created_at: DateTime<Utc>,
}

impl DomainEvent {
    pub fn new(branch_id: &str, event: LibraryEvent) -> Self {
        DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            branch_id: branch_id.to_string(),
            event,
            created_at: Utc::now(),
        }
    }

    pub fn topic(&self) -> &'static str {
        self.event.topic()
    }
}
