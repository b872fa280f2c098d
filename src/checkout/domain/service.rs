use tracing::info;
use crate::books::domain::model::Book;
use crate::checkout::domain::CheckoutService;
use crate::core::events::LibraryEvent;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::library::{succeeded, Library};

impl Library {
    // Every precondition is checked before the first write, so a rejected checkout or
    // return leaves books and patrons untouched.
    fn try_checkout(&mut self, isbn: &str, patron_id: &str) -> LibraryResult<Book> {
        let book = self.book_repository.get(isbn)?;
        if self.book_repository.status(isbn) != Some(BookStatus::Available) {
            return Err(LibraryError::unavailable(
                format!("book {} is already checked out", isbn).as_str()));
        }
        let mut patron = self.patron_repository.get(patron_id)?;

        self.book_repository.set_status(isbn, BookStatus::CheckedOut)?;
        patron.add_borrowed_book(book.clone());
        self.patron_repository.update(&patron)?;
        Ok(book)
    }

    fn try_return(&mut self, isbn: &str, patron_id: &str) -> LibraryResult<Book> {
        let book = self.book_repository.get(isbn)?;
        if self.book_repository.status(isbn) != Some(BookStatus::CheckedOut) {
            return Err(LibraryError::unavailable(
                format!("book {} is not checked out", isbn).as_str()));
        }
        let mut patron = self.patron_repository.get(patron_id)?;
        if !patron.remove_borrowed_book(&book) {
            return Err(LibraryError::not_granted(
                format!("patron {} does not hold book {}", patron_id, isbn).as_str()));
        }

        self.book_repository.set_status(isbn, BookStatus::Available)?;
        self.patron_repository.update(&patron)?;
        Ok(book)
    }
}

impl CheckoutService for Library {
    fn checkout_book(&mut self, isbn: &str, patron_id: &str) -> bool {
        let res = self.try_checkout(isbn, patron_id).map(|book| {
            info!(isbn, patron_id, "checked out book");
            self.publish(LibraryEvent::BookCheckedOut { book, patron_id: patron_id.to_string() });
        });
        succeeded("checkout_book", res)
    }

    fn return_book(&mut self, isbn: &str, patron_id: &str) -> bool {
        let res = self.try_return(isbn, patron_id).map(|book| {
            info!(isbn, patron_id, "returned book");
            self.publish(LibraryEvent::BookReturned { book, patron_id: patron_id.to_string() });
        });
        succeeded("return_book", res)
    }
}
