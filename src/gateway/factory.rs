use crate::gateway::events::EventPublisher;
use crate::gateway::memory::publisher::MemoryPublisher;

pub fn create_publisher(capacity: usize) -> Box<dyn EventPublisher> {
    Box::new(MemoryPublisher::new(capacity))
}
