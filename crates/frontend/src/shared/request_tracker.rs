//! Generation counter for superseding in-flight requests.
//!
//! Every reload advances the generation; responses carry the ticket they were
//! issued with and are dropped when their generation is no longer current.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket<K> {
    pub key: K,
    pub generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTracker {
    generation: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new generation, invalidating every outstanding ticket.
    pub fn advance(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn ticket<K>(&self, key: K) -> Ticket<K> {
        Ticket {
            key,
            generation: self.generation,
        }
    }

    pub fn is_current<K>(&self, ticket: &Ticket<K>) -> bool {
        ticket.generation == self.generation
    }
}
