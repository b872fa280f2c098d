use crate::books::factory::create_book_repository;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::library::Library;
use crate::patrons::factory::create_patron_repository;

pub fn create_library(config: &Configuration) -> Library {
    let book_repo = create_book_repository();
    let patron_repo = create_patron_repository();
    let publisher = create_publisher(config.event_capacity);
    Library::new(config, book_repo, patron_repo, publisher)
}
