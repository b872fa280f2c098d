use crate::books::domain::model::Book;

// BookSearchStrategy selects the books of a snapshot that match a query, keeping snapshot order
pub trait BookSearchStrategy {
    fn search(&self, books: &[Book], query: &str) -> Vec<Book>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchByTitle;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchByAuthor;

// exact, case-sensitive
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchByIsbn;

impl BookSearchStrategy for SearchByTitle {
    fn search(&self, books: &[Book], query: &str) -> Vec<Book> {
        let query = query.to_lowercase();
        books.iter()
            .filter(|b| b.title().to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

impl BookSearchStrategy for SearchByAuthor {
    fn search(&self, books: &[Book], query: &str) -> Vec<Book> {
        let query = query.to_lowercase();
        books.iter()
            .filter(|b| b.author().to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

impl BookSearchStrategy for SearchByIsbn {
    fn search(&self, books: &[Book], query: &str) -> Vec<Book> {
        books.iter()
            .filter(|b| b.isbn() == query)
            .cloned()
            .collect()
    }
}
