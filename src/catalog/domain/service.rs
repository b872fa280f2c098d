use tracing::info;
use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::catalog::search::BookSearchStrategy;
use crate::core::events::LibraryEvent;
use crate::core::library::{BookStatus, LibraryResult};
use crate::library::{succeeded, Library};

impl Library {
    fn try_add_book(&mut self, book: Book) -> LibraryResult<()> {
        self.book_repository.create(&book)?;
        info!(isbn = book.isbn(), "added book");
        self.publish(LibraryEvent::BookAdded(book));
        Ok(())
    }

    fn try_remove_book(&mut self, isbn: &str) -> LibraryResult<()> {
        self.book_repository.delete(isbn)?;
        info!(isbn, "removed book");
        self.publish(LibraryEvent::BookRemoved { isbn: isbn.to_string() });
        Ok(())
    }

    fn try_update_book(&mut self, isbn: &str, new_title: Option<&str>, new_author: Option<&str>,
                       new_publication_year: Option<i32>) -> LibraryResult<()> {
        let mut book = self.book_repository.get(isbn)?;
        if let Some(title) = new_title.filter(|t| !t.is_empty()) {
            book.set_title(title);
        }
        if let Some(author) = new_author.filter(|a| !a.is_empty()) {
            book.set_author(author);
        }
        if let Some(year) = new_publication_year.filter(|y| *y > 0) {
            book.set_publication_year(year);
        }
        self.book_repository.update(&book)?;
        if self.book_repository.status(isbn) == Some(BookStatus::CheckedOut) {
            if let Some(mut holder) = self.patron_repository.find_by_borrowed_isbn(isbn) {
                holder.refresh_borrowed_book(&book);
                self.patron_repository.update(&holder)?;
            }
        }
        info!(isbn, "updated book");
        self.publish(LibraryEvent::BookUpdated(book));
        Ok(())
    }
}

impl CatalogService for Library {
    fn add_book(&mut self, book: Book) -> bool {
        succeeded("add_book", self.try_add_book(book))
    }

    fn remove_book(&mut self, isbn: &str) -> bool {
        succeeded("remove_book", self.try_remove_book(isbn))
    }

    fn update_book(&mut self, isbn: &str, new_title: Option<&str>, new_author: Option<&str>,
                   new_publication_year: Option<i32>) -> bool {
        succeeded("update_book", self.try_update_book(isbn, new_title, new_author, new_publication_year))
    }

    fn search_book(&self, query: &str, strategy: Option<&dyn BookSearchStrategy>) -> Vec<Book> {
        match strategy {
            Some(strategy) => strategy.search(&self.book_repository.find_all(), query),
            None => vec![],
        }
    }

    fn all_books(&self) -> Vec<Book> {
        self.book_repository.find_all()
    }

    fn available_books(&self) -> Vec<Book> {
        self.book_repository.find_by_status(BookStatus::Available)
    }

    fn borrowed_books(&self) -> Vec<Book> {
        self.book_repository.find_by_status(BookStatus::CheckedOut)
    }
}
