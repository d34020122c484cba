use serde::{Deserialize, Serialize};
use wildrun_core::Rank;

/// State-change notifications for the hosting layer (transport, rendering).
/// Serializable so they can cross whatever boundary the host uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ClientEvent {
    HandReplaced { count: usize },
    GroupingChanged { grouped: usize, total: usize },
    RoundAdvanced {
        round: u32,
        hand_size: usize,
        wild: Option<Rank>,
    },
    WentOut { round: u32 },
}

#[derive(Debug, Default)]
pub struct EventQueue {
    queue: Vec<ClientEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: ClientEvent) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = ClientEvent> + '_ {
        self.queue.drain(..)
    }
}
