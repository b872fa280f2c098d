use std::collections::{HashMap, VecDeque};
use tracing::debug;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher retains at most `capacity` events per topic, dropping the oldest first.
#[derive(Debug)]
pub struct MemoryPublisher {
    capacity: usize,
    topics: HashMap<String, VecDeque<DomainEvent>>,
}

impl MemoryPublisher {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            topics: HashMap::new(),
        }
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&mut self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        debug!(topic = event.topic(), key = event.event.key(), event = json.as_str(), "published event");
        if self.capacity == 0 {
            return Ok(());
        }
        let events = self.topics.entry(event.topic().to_string()).or_default();
        while events.len() >= self.capacity {
            events.pop_front();
        }
        events.push_back(event.clone());
        Ok(())
    }

    fn get_events(&self, topic: &str) -> Vec<DomainEvent> {
        self.topics.get(topic).map(|events| events.iter().cloned().collect()).unwrap_or_default()
    }

    fn drain_events(&mut self, topic: &str) -> Vec<DomainEvent> {
        self.topics.remove(topic).map(Vec::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::Book;
    use crate::core::events::{DomainEvent, LibraryEvent, BOOKS_TOPIC, CHECKOUT_TOPIC};
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    fn added(isbn: &str) -> DomainEvent {
        DomainEvent::new("test", LibraryEvent::BookAdded(Book::new("title", "author", isbn, 2000)))
    }

    #[test]
    fn test_should_publish_events() {
        let mut publisher = MemoryPublisher::new(10);
        publisher.publish(&added("isbn")).expect("should publish");
        publisher.publish(&DomainEvent::new("test", LibraryEvent::BookRemoved { isbn: "isbn".to_string() }))
            .expect("should publish");
        let checkout = LibraryEvent::BookCheckedOut { book: Book::new("title", "author", "other", 2000), patron_id: "P001".to_string() };
        publisher.publish(&DomainEvent::new("test", checkout)).expect("should publish");

        let events = publisher.get_events(BOOKS_TOPIC);
        assert_eq!(2, events.len());
        assert!(matches!(events[0].event, LibraryEvent::BookAdded(_)));
        assert!(matches!(events[1].event, LibraryEvent::BookRemoved { .. }));
        assert_eq!(1, publisher.get_events(CHECKOUT_TOPIC).len());
    }

    #[test]
    fn test_should_drop_oldest_events_over_capacity() {
        let mut publisher = MemoryPublisher::new(2);
        for isbn in ["a", "b", "c", "d"] {
            publisher.publish(&added(isbn)).expect("should publish");
        }
        let keys: Vec<String> = publisher.get_events(BOOKS_TOPIC).iter().map(|e| e.event.key().to_string()).collect();
        assert_eq!(vec!["c", "d"], keys);
    }

    #[test]
    fn test_should_drain_events() {
        let mut publisher = MemoryPublisher::new(10);
        publisher.publish(&added("a")).expect("should publish");
        publisher.publish(&added("b")).expect("should publish");

        let drained = publisher.drain_events(BOOKS_TOPIC);
        assert_eq!(2, drained.len());
        assert_eq!("a", drained[0].event.key());
        assert!(publisher.get_events(BOOKS_TOPIC).is_empty());
        assert!(publisher.drain_events(BOOKS_TOPIC).is_empty());
    }

    #[test]
    fn test_should_retain_nothing_with_zero_capacity() {
        let mut publisher = MemoryPublisher::new(0);
        publisher.publish(&added("a")).expect("should publish");
        assert!(publisher.get_events(BOOKS_TOPIC).is_empty());
    }

    #[test]
    fn test_should_return_no_events_for_unknown_topic() {
        let mut publisher = MemoryPublisher::new(10);
        assert!(publisher.get_events("missing").is_empty());
        assert!(publisher.drain_events("missing").is_empty());
    }
}
