use crate::core::library::LibraryResult;
use crate::core::repository::{MemoryRepository, Repository};
use crate::patrons::domain::model::Patron;
use crate::patrons::repository::PatronRepository;

#[derive(Debug)]
pub struct MemoryPatronRepository {
    patrons: MemoryRepository<Patron>,
}

impl MemoryPatronRepository {
    pub fn new() -> Self {
        Self {
            patrons: MemoryRepository::new("patrons"),
        }
    }
}

impl Default for MemoryPatronRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository<Patron> for MemoryPatronRepository {
    fn create(&mut self, entity: &Patron) -> LibraryResult<usize> {
        self.patrons.create(entity)
    }

    fn update(&mut self, entity: &Patron) -> LibraryResult<usize> {
        self.patrons.update(entity)
    }

    fn get(&self, id: &str) -> LibraryResult<Patron> {
        self.patrons.get(id)
    }

    fn delete(&mut self, id: &str) -> LibraryResult<usize> {
        self.patrons.delete(id)
    }

    fn find_all(&self) -> Vec<Patron> {
        self.patrons.find_all()
    }

    fn exists(&self, id: &str) -> bool {
        self.patrons.exists(id)
    }
}

impl PatronRepository for MemoryPatronRepository {
    fn find_by_borrowed_isbn(&self, isbn: &str) -> Option<Patron> {
        self.patrons.find_all().into_iter().find(|p| p.has_borrowed(isbn))
    }
}
