pub mod memory_patron_repository;

use crate::core::repository::Repository;
use crate::patrons::domain::model::Patron;

pub trait PatronRepository: Repository<Patron> {
    // the patron currently holding the book, if any
    fn find_by_borrowed_isbn(&self, isbn: &str) -> Option<Patron>;
}
