use std::collections::HashMap;

use tracing::debug;

use crate::books::domain::model::Book;
use crate::books::repository::BookRepository;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::core::repository::{MemoryRepository, Repository};

#[derive(Debug)]
pub struct MemoryBookRepository {
    books: MemoryRepository<Book>,
    available: HashMap<String, Book>,
    borrowed: HashMap<String, Book>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: MemoryRepository::new("books"),
            available: HashMap::new(),
            borrowed: HashMap::new(),
        }
    }

    // All membership changes go through here. A book is in exactly one of available or
    // borrowed while it is stored, and in neither once deleted (status None).
    fn place(&mut self, book: &Book, status: Option<BookStatus>) {
        let isbn = book.isbn();
        self.available.remove(isbn);
        self.borrowed.remove(isbn);
        match status {
            Some(BookStatus::Available) => {
                self.available.insert(isbn.to_string(), book.clone());
            }
            Some(BookStatus::CheckedOut) => {
                self.borrowed.insert(isbn.to_string(), book.clone());
            }
            None => {}
        }
        debug!(isbn, status = ?status, "placed book");
    }
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository<Book> for MemoryBookRepository {
    fn create(&mut self, entity: &Book) -> LibraryResult<usize> {
        let size = self.books.create(entity)?;
        self.place(entity, Some(BookStatus::Available));
        Ok(size)
    }

    fn update(&mut self, entity: &Book) -> LibraryResult<usize> {
        let size = self.books.update(entity)?;
        let status = self.status(entity.isbn());
        self.place(entity, status);
        Ok(size)
    }

    fn get(&self, id: &str) -> LibraryResult<Book> {
        self.books.get(id)
    }

    fn delete(&mut self, id: &str) -> LibraryResult<usize> {
        let book = self.books.get(id)?;
        if self.borrowed.contains_key(id) {
            return Err(LibraryError::unavailable(
                format!("book {} is checked out and cannot be removed", id).as_str()));
        }
        let size = self.books.delete(id)?;
        self.place(&book, None);
        Ok(size)
    }

    fn find_all(&self) -> Vec<Book> {
        self.books.find_all()
    }

    fn exists(&self, id: &str) -> bool {
        self.books.exists(id)
    }
}

impl BookRepository for MemoryBookRepository {
    fn status(&self, isbn: &str) -> Option<BookStatus> {
        if self.available.contains_key(isbn) {
            Some(BookStatus::Available)
        } else if self.borrowed.contains_key(isbn) {
            Some(BookStatus::CheckedOut)
        } else {
            None
        }
    }

    fn find_by_status(&self, status: BookStatus) -> Vec<Book> {
        match status {
            BookStatus::Available => self.available.values().cloned().collect(),
            BookStatus::CheckedOut => self.borrowed.values().cloned().collect(),
        }
    }

    fn set_status(&mut self, isbn: &str, status: BookStatus) -> LibraryResult<usize> {
        let book = self.books.get(isbn)?;
        self.place(&book, Some(status));
        Ok(1)
    }
}
