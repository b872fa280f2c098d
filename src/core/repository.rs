use std::collections::HashMap;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

pub trait Repository<Entity>: Send {
    // create an entity
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity
    fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    fn delete(&mut self, id: &str) -> LibraryResult<usize>;

    // snapshot of all entities
    fn find_all(&self) -> Vec<Entity>;

    fn exists(&self, id: &str) -> bool;
}

// MemoryRepository keeps entities keyed by their id; the name only shows up in error messages.
#[derive(Debug, Clone)]
pub struct MemoryRepository<Entity> {
    name: String,
    records: HashMap<String, Entity>,
}

impl<Entity> MemoryRepository<Entity> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            records: HashMap::new(),
        }
    }
}

impl<Entity: Identifiable + Clone + Send> Repository<Entity> for MemoryRepository<Entity> {
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize> {
        let id = entity.id();
        if self.records.contains_key(&id) {
            return Err(LibraryError::duplicate_key(
                format!("{} already contains {}", self.name, id).as_str()));
        }
        self.records.insert(id, entity.clone());
        Ok(1)
    }

    fn update(&mut self, entity: &Entity) -> LibraryResult<usize> {
        match self.records.get_mut(&entity.id()) {
            Some(existing) => {
                *existing = entity.clone();
                Ok(1)
            }
            None => Err(LibraryError::not_found(
                format!("{} has no record for {}", self.name, entity.id()).as_str())),
        }
    }

    fn get(&self, id: &str) -> LibraryResult<Entity> {
        self.records.get(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("{} has no record for {}", self.name, id).as_str()))
    }

    fn delete(&mut self, id: &str) -> LibraryResult<usize> {
        self.records.remove(id).map(|_| 1).ok_or_else(|| LibraryError::not_found(
            format!("{} has no record for {}", self.name, id).as_str()))
    }

    fn find_all(&self) -> Vec<Entity> {
        self.records.values().cloned().collect()
    }

    fn exists(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }
}
