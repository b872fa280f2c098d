pub mod memory_book_repository;

use crate::books::domain::model::Book;
use crate::core::library::{BookStatus, LibraryResult};
use crate::core::repository::Repository;

// BookRepository tracks every book together with its lending status. Created books start
// as available; a checked out book cannot be deleted.
pub trait BookRepository: Repository<Book> {
    fn status(&self, isbn: &str) -> Option<BookStatus>;

    fn find_by_status(&self, status: BookStatus) -> Vec<Book>;

    fn set_status(&mut self, isbn: &str, status: BookStatus) -> LibraryResult<usize>;
}
