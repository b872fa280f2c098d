use tracing::Level;
use library_catalog::books::domain::model::Book;
use library_catalog::catalog::domain::CatalogService;
use library_catalog::catalog::search::{SearchByAuthor, SearchByIsbn, SearchByTitle};
use library_catalog::checkout::domain::CheckoutService;
use library_catalog::core::domain::Configuration;
use library_catalog::core::events::{BOOKS_TOPIC, CHECKOUT_TOPIC, PATRONS_TOPIC};
use library_catalog::library::factory::create_library;
use library_catalog::patrons::domain::model::Patron;
use library_catalog::patrons::domain::PatronService;
use library_catalog::utils::log::setup_tracing;

const DEV_MODE: bool = true;

fn print_books(books: &[Book]) {
    for book in books {
        println!("  {}", book);
    }
}

fn outcome(ok: bool) -> &'static str {
    if ok { "succeeded" } else { "rejected" }
}

fn main() {
    let config = if DEV_MODE {
        setup_tracing(Level::DEBUG);
        Configuration::new("dev")
    } else {
        setup_tracing(Level::INFO);
        Configuration::new("prod")
    };
    let mut library = create_library(&config);
    println!("Library catalog for branch {}", library.branch_id());

    println!("\n--- Books ---");
    library.add_book(Book::new("UNSCRIPTED", "MJ DeMarco", "B06XBRLXJC", 2017));
    library.add_book(Book::new("Neuro-Discipline", "Peter Hollins", "B07Z8J5LFJ", 2019));
    library.add_book(Book::new("Change Your Brain Every Day", "Daniel G. Amen, MD", "B0B57GNPFV", 2023));
    library.add_book(Book::new("Money Works: The Guide to Financial Literacy", "Abhijeet Kolapkar", "B0CD81VNTV", 2023));
    println!("Inventory:");
    print_books(&library.all_books());
    println!("Available: {}", library.available_books().len());

    println!("\nTitle search 'UNSCRIPTED':");
    print_books(&library.search_book("UNSCRIPTED", Some(&SearchByTitle)));
    println!("Author search 'Peter Hollins':");
    print_books(&library.search_book("Peter Hollins", Some(&SearchByAuthor)));
    println!("ISBN search 'B0B57GNPFV':");
    print_books(&library.search_book("B0B57GNPFV", Some(&SearchByIsbn)));

    let updated = library.update_book("B0B57GNPFV", None, None, Some(1984));
    println!("\nUpdate of B0B57GNPFV {}:", outcome(updated));
    print_books(&library.search_book("B0B57GNPFV", Some(&SearchByIsbn)));

    let removed = library.remove_book("B06XBRLXJC");
    println!("\nRemoval of B06XBRLXJC {}, inventory now:", outcome(removed));
    print_books(&library.all_books());

    println!("\n--- Patrons ---");
    library.add_patron(Patron::new("Ajay", "P001"));
    library.add_patron(Patron::new("Sunil", "P002"));
    for patron in library.all_patrons() {
        println!("  {}", patron);
    }
    library.update_patron("P001", Some("Anil W"));
    if let Some(patron) = library.find_patron_by_id("P001") {
        println!("Renamed: {}", patron);
    }

    println!("\n--- Lending ---");
    for (isbn, patron_id) in [("B0B57GNPFV", "P001"), ("B07Z8J5LFJ", "P002"), ("B07Z8J5LFJ", "P002")] {
        let ok = library.checkout_book(isbn, patron_id);
        println!("Checkout of {} by {} {}; available {}, borrowed {}", isbn, patron_id, outcome(ok),
                 library.available_books().len(), library.borrowed_books().len());
    }
    for patron_id in ["P001", "P002"] {
        println!("Held by {}:", patron_id);
        print_books(&library.borrowing_history(patron_id));
    }

    let returned = library.return_book("B0B57GNPFV", "P001");
    println!("Return of B0B57GNPFV by P001 {}; available {}, borrowed {}", outcome(returned),
             library.available_books().len(), library.borrowed_books().len());
    println!("Held by P001 after return: {}", library.borrowing_history("P001").len());

    println!("\n--- Final inventory ---");
    println!("All:");
    print_books(&library.all_books());
    println!("Available:");
    print_books(&library.available_books());
    println!("Borrowed:");
    print_books(&library.borrowed_books());
    for topic in [BOOKS_TOPIC, PATRONS_TOPIC, CHECKOUT_TOPIC] {
        let events = library.drain_events(topic);
        println!("Events on {}: {}", topic, events.len());
    }
}
