pub mod factory;

use tracing::{debug, warn};
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, LibraryEvent};
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::patrons::repository::PatronRepository;

// Library owns every book and patron of a branch and implements the catalog, patron and
// checkout services over them.
//
// Operations are synchronous and take `&mut self` for mutation, so a checkout or return
// updates the book status and the patron's borrowed list as one step. The whole value is
// `Send`; callers sharing it across threads wrap it in a single `Mutex`.
pub struct Library {
    branch_id: String,
    pub(crate) book_repository: Box<dyn BookRepository>,
    pub(crate) patron_repository: Box<dyn PatronRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl Library {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               patron_repository: Box<dyn PatronRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            patron_repository,
            events_publisher,
        }
    }

    pub fn branch_id(&self) -> &str {
        &self.branch_id
    }

    // retained events for a topic such as `books`, `patrons` or `checkout`
    pub fn events(&self, topic: &str) -> Vec<DomainEvent> {
        self.events_publisher.get_events(topic)
    }

    pub fn drain_events(&mut self, topic: &str) -> Vec<DomainEvent> {
        self.events_publisher.drain_events(topic)
    }

    // The mutation has already been applied, so a failed publish is only reported.
    pub(crate) fn publish(&mut self, event: LibraryEvent) {
        let event = DomainEvent::new(&self.branch_id, event);
        if let Err(err) = self.events_publisher.publish(&event) {
            warn!(error = %err, topic = event.topic(), "failed to publish domain event");
        }
    }
}

pub(crate) fn succeeded<T>(operation: &str, res: LibraryResult<T>) -> bool {
    match res {
        Ok(_) => true,
        Err(err) => {
            debug!(operation, error = %err, "rejected");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use crate::books::domain::model::Book;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::search::{SearchByAuthor, SearchByIsbn, SearchByTitle};
    use crate::checkout::domain::CheckoutService;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::library::{succeeded, Library};
    use crate::library::factory::create_library;
    use crate::patrons::domain::model::Patron;
    use crate::patrons::domain::PatronService;

    fn sample_library() -> Library {
        let mut library = create_library(&Configuration::new("test"));
        assert!(library.add_book(Book::new("UNSCRIPTED", "MJ DeMarco", "B06XBRLXJC", 2017)));
        assert!(library.add_book(Book::new("Neuro-Discipline", "Peter Hollins", "B07Z8J5LFJ", 2019)));
        assert!(library.add_book(Book::new("Change Your Brain Every Day", "Daniel G. Amen, MD", "B0B57GNPFV", 2023)));
        assert!(library.add_book(Book::new("Money Works: The Guide to Financial Literacy", "Abhijeet Kolapkar", "B0CD81VNTV", 2023)));
        assert!(library.add_patron(Patron::new("Ajay", "P001")));
        assert!(library.add_patron(Patron::new("Sunil", "P002")));
        library
    }

    #[test]
    fn test_should_report_outcome() {
        assert!(succeeded("op", Ok::<usize, LibraryError>(1)));
        assert!(!succeeded::<()>("op", Err(LibraryError::not_found("missing"))));
    }

    #[test]
    fn test_should_tag_events_with_branch() {
        let library = sample_library();
        assert_eq!("test", library.branch_id());
        let events = library.events("books");
        assert_eq!(4, events.len());
        assert!(events.iter().all(|e| e.branch_id == "test"));
        assert_eq!(2, library.events("patrons").len());
        assert!(library.events("checkout").is_empty());
    }

    #[test]
    fn test_should_run_full_lending_workflow() {
        let mut library = sample_library();

        assert_eq!(1, library.search_book("UNSCRIPTED", Some(&SearchByTitle)).len());
        assert_eq!(1, library.search_book("Peter Hollins", Some(&SearchByAuthor)).len());
        assert_eq!(1, library.search_book("B0B57GNPFV", Some(&SearchByIsbn)).len());

        assert!(library.update_book("B0B57GNPFV", None, None, Some(1984)));
        assert_eq!(1984, library.search_book("B0B57GNPFV", Some(&SearchByIsbn))[0].publication_year());

        assert!(library.remove_book("B06XBRLXJC"));
        assert_eq!(3, library.all_books().len());
        assert_eq!(3, library.available_books().len());

        assert!(library.update_patron("P001", Some("Anil W")));
        assert_eq!("Anil W", library.find_patron_by_id("P001").expect("should find patron").name());

        assert!(library.checkout_book("B0B57GNPFV", "P001"));
        assert!(library.checkout_book("B07Z8J5LFJ", "P002"));
        assert!(!library.checkout_book("B07Z8J5LFJ", "P002"));
        assert_eq!(1, library.available_books().len());
        assert_eq!(2, library.borrowed_books().len());
        assert_eq!(1, library.borrowing_history("P001").len());
        assert_eq!(1, library.borrowing_history("P002").len());

        assert!(library.return_book("B0B57GNPFV", "P001"));
        assert_eq!(2, library.available_books().len());
        assert_eq!(1, library.borrowed_books().len());
        assert!(library.borrowing_history("P001").is_empty());
        assert_eq!(3, library.events("checkout").len());
    }

    #[test]
    fn test_should_share_library_behind_mutex() {
        let library = Mutex::new(sample_library());
        std::thread::scope(|s| {
            s.spawn(|| {
                let mut guard = library.lock().expect("lock library");
                assert!(guard.checkout_book("B06XBRLXJC", "P001"));
            });
        });
        let guard = library.lock().expect("lock library");
        assert_eq!(1, guard.borrowed_books().len());
    }
}
