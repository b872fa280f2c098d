use tracing::info;
use crate::books::domain::model::Book;
use crate::core::events::LibraryEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::library::{succeeded, Library};
use crate::patrons::domain::model::Patron;
use crate::patrons::domain::PatronService;

impl Library {
    fn try_add_patron(&mut self, patron: Patron) -> LibraryResult<()> {
        self.patron_repository.create(&patron)?;
        info!(patron_id = patron.patron_id(), "added patron");
        self.publish(LibraryEvent::PatronAdded(patron));
        Ok(())
    }

    fn try_update_patron(&mut self, patron_id: &str, new_name: Option<&str>) -> LibraryResult<()> {
        let mut patron = self.patron_repository.get(patron_id)?;
        let name = new_name.filter(|n| !n.is_empty()).ok_or_else(|| LibraryError::validation(
            format!("patron {} needs a non-empty name", patron_id).as_str()))?;
        patron.set_name(name);
        self.patron_repository.update(&patron)?;
        info!(patron_id, "updated patron");
        self.publish(LibraryEvent::PatronUpdated(patron));
        Ok(())
    }
}

impl PatronService for Library {
    fn add_patron(&mut self, patron: Patron) -> bool {
        succeeded("add_patron", self.try_add_patron(patron))
    }

    fn update_patron(&mut self, patron_id: &str, new_name: Option<&str>) -> bool {
        succeeded("update_patron", self.try_update_patron(patron_id, new_name))
    }

    fn find_patron_by_id(&self, patron_id: &str) -> Option<Patron> {
        self.patron_repository.get(patron_id).ok()
    }

    fn all_patrons(&self) -> Vec<Patron> {
        self.patron_repository.find_all()
    }

    fn borrowing_history(&self, patron_id: &str) -> Vec<Book> {
        self.patron_repository.get(patron_id)
            .map(|p| p.borrowed_books().to_vec())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::Book;
    use crate::catalog::domain::CatalogService;
    use crate::checkout::domain::CheckoutService;
    use crate::core::domain::Configuration;
    use crate::core::events::LibraryEvent;
    use crate::library::Library;
    use crate::library::factory::create_library;
    use crate::patrons::domain::model::Patron;
    use crate::patrons::domain::PatronService;

    fn new_library() -> Library {
        create_library(&Configuration::new("test"))
    }

    #[test]
    fn test_should_add_patron() {
        let mut patron_svc = new_library();
        assert!(patron_svc.add_patron(Patron::new("Ajay", "P001")));
        assert!(patron_svc.add_patron(Patron::new("Sunil", "P002")));

        let loaded = patron_svc.find_patron_by_id("P001").expect("should find patron");
        assert_eq!("Ajay", loaded.name());
        assert_eq!(2, patron_svc.all_patrons().len());
        assert_eq!(2, patron_svc.events("patrons").len());
    }

    #[test]
    fn test_should_not_add_duplicate_patron() {
        let mut patron_svc = new_library();
        assert!(patron_svc.add_patron(Patron::new("Ajay", "P001")));
        assert!(!patron_svc.add_patron(Patron::new("Someone", "P001")));
        assert_eq!(1, patron_svc.all_patrons().len());
        assert_eq!("Ajay", patron_svc.find_patron_by_id("P001").expect("should find patron").name());
    }

    #[test]
    fn test_should_update_patron() {
        let mut patron_svc = new_library();
        assert!(patron_svc.add_patron(Patron::new("Ajay", "P001")));
        assert!(patron_svc.update_patron("P001", Some("Anil W")));
        assert_eq!("Anil W", patron_svc.find_patron_by_id("P001").expect("should find patron").name());
        let events = patron_svc.events("patrons");
        assert!(matches!(&events[1].event, LibraryEvent::PatronUpdated(patron) if patron.name() == "Anil W"));
    }

    #[test]
    fn test_should_reject_invalid_patron_update() {
        let mut patron_svc = new_library();
        assert!(patron_svc.add_patron(Patron::new("Ajay", "P001")));
        assert!(!patron_svc.update_patron("P001", Some("")));
        assert!(!patron_svc.update_patron("P001", None));
        assert!(!patron_svc.update_patron("P404", Some("Nobody")));
        assert_eq!("Ajay", patron_svc.find_patron_by_id("P001").expect("should find patron").name());
        assert_eq!(1, patron_svc.events("patrons").len());
    }

    #[test]
    fn test_should_not_find_unknown_patron() {
        let patron_svc = new_library();
        assert!(patron_svc.find_patron_by_id("P404").is_none());
        assert!(patron_svc.borrowing_history("P404").is_empty());
        assert!(patron_svc.all_patrons().is_empty());
    }

    #[test]
    fn test_should_return_history_copy() {
        let mut patron_svc = new_library();
        assert!(patron_svc.add_book(Book::new("title", "author", "isbn", 2000)));
        assert!(patron_svc.add_patron(Patron::new("Ajay", "P001")));
        assert!(patron_svc.checkout_book("isbn", "P001"));

        let mut history = patron_svc.borrowing_history("P001");
        assert_eq!(1, history.len());
        history.clear();
        assert_eq!(1, patron_svc.borrowing_history("P001").len());
        assert_eq!(1, patron_svc.find_patron_by_id("P001").expect("should find patron").borrowed_books().len());
    }
}
