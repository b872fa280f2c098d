use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

pub trait EventPublisher: Send {
    fn publish(&mut self, event: &DomainEvent) -> Result<(), LibraryError>;

    // events still retained for the topic, oldest first
    fn get_events(&self, topic: &str) -> Vec<DomainEvent>;

    // hands off and forgets the events retained for the topic
    fn drain_events(&mut self, topic: &str) -> Vec<DomainEvent>;
}
