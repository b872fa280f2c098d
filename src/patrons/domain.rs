pub mod model;
pub mod service;

use crate::books::domain::model::Book;
use crate::patrons::domain::model::Patron;

pub trait PatronService {
    fn add_patron(&mut self, patron: Patron) -> bool;
    fn update_patron(&mut self, patron_id: &str, new_name: Option<&str>) -> bool;
    fn find_patron_by_id(&self, patron_id: &str) -> Option<Patron>;
    fn all_patrons(&self) -> Vec<Patron>;
    // Copy of the books the patron currently holds; empty for an unknown patron.
    fn borrowing_history(&self, patron_id: &str) -> Vec<Book>;
}
