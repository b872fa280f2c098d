pub mod service;

use crate::books::domain::model::Book;
use crate::catalog::search::BookSearchStrategy;

pub trait CatalogService {
    fn add_book(&mut self, book: Book) -> bool;
    fn remove_book(&mut self, isbn: &str) -> bool;
    // Absent, empty or non-positive inputs leave the corresponding field unchanged.
    fn update_book(&mut self, isbn: &str, new_title: Option<&str>, new_author: Option<&str>,
                   new_publication_year: Option<i32>) -> bool;
    fn search_book(&self, query: &str, strategy: Option<&dyn BookSearchStrategy>) -> Vec<Book>;
    fn all_books(&self) -> Vec<Book>;
    fn available_books(&self) -> Vec<Book>;
    fn borrowed_books(&self) -> Vec<Book>;
}
