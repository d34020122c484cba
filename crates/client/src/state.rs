use crate::{ClientEvent, EventQueue};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wildrun_core::{grouped_mask, hand_size, wild_rank, Card, Rank, FINAL_ROUND};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("card position {position} out of bounds for hand of {len}")]
    OutOfBounds { position: usize, len: usize },
    #[error("cannot go out with {ungrouped} ungrouped card(s)")]
    UngroupedCards { ungrouped: usize },
}

/// The player's hand as the client store holds it: the card order the player
/// arranged plus the derived grouped flags. The flags are recomputed through
/// the engine on every mutation, before any observer sees the new state;
/// nothing else writes them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HandState {
    cards: Vec<Card>,
    grouped: Vec<bool>,
}

impl HandState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn grouped(&self) -> &[bool] {
        &self.grouped
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn grouped_count(&self) -> usize {
        self.grouped.iter().filter(|&&g| g).count()
    }

    /// Cards covered by no meld, with their positions.
    pub fn ungrouped_cards(&self) -> Vec<(usize, Card)> {
        self.cards
            .iter()
            .copied()
            .enumerate()
            .filter(|&(i, _)| !self.grouped[i])
            .collect()
    }

    /// Going out requires every card in a non-empty hand to be grouped.
    pub fn can_go_out(&self) -> bool {
        !self.cards.is_empty() && self.grouped.iter().all(|&g| g)
    }

    pub fn set_hand(&mut self, cards: Vec<Card>, round: u32, events: &mut EventQueue) {
        self.cards = cards;
        events.push(ClientEvent::HandReplaced {
            count: self.cards.len(),
        });
        self.regroup(round, events);
    }

    pub fn push_card(&mut self, card: Card, round: u32, events: &mut EventQueue) {
        self.cards.push(card);
        self.regroup(round, events);
    }

    pub fn remove_card(
        &mut self,
        position: usize,
        round: u32,
        events: &mut EventQueue,
    ) -> Result<Card, ClientError> {
        if position >= self.cards.len() {
            return Err(ClientError::OutOfBounds {
                position,
                len: self.cards.len(),
            });
        }
        let card = self.cards.remove(position);
        self.regroup(round, events);
        Ok(card)
    }

    /// Drag-and-drop hook: reposition a card without changing the hand's
    /// contents. Grouping changes only through the recomputation.
    pub fn move_card(
        &mut self,
        from: usize,
        to: usize,
        round: u32,
        events: &mut EventQueue,
    ) -> Result<(), ClientError> {
        let len = self.cards.len();
        for position in [from, to] {
            if position >= len {
                return Err(ClientError::OutOfBounds { position, len });
            }
        }
        let card = self.cards.remove(from);
        self.cards.insert(to, card);
        self.regroup(round, events);
        Ok(())
    }

    pub fn go_out(&self, round: u32, events: &mut EventQueue) -> Result<(), ClientError> {
        if !self.can_go_out() {
            return Err(ClientError::UngroupedCards {
                ungrouped: self.len() - self.grouped_count(),
            });
        }
        events.push(ClientEvent::WentOut { round });
        Ok(())
    }

    fn regroup(&mut self, round: u32, events: &mut EventQueue) {
        let mask = grouped_mask(&self.cards, round);
        let changed = mask != self.grouped;
        self.grouped = mask;
        if changed {
            events.push(ClientEvent::GroupingChanged {
                grouped: self.grouped_count(),
                total: self.cards.len(),
            });
        }
    }
}

/// The deal counter. Rounds only change between deals; the server is
/// authoritative and the client mirrors it here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundState {
    round: u32,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundState {
    pub fn new() -> Self {
        Self { round: 1 }
    }

    pub fn round(self) -> u32 {
        self.round
    }

    pub fn is_final(self) -> bool {
        self.round >= FINAL_ROUND
    }

    pub fn wild(self) -> Option<Rank> {
        wild_rank(self.round)
    }

    pub fn hand_size(self) -> usize {
        hand_size(self.round)
    }

    pub fn advance(&mut self, events: &mut EventQueue) {
        self.round += 1;
        events.push(ClientEvent::RoundAdvanced {
            round: self.round,
            hand_size: self.hand_size(),
            wild: self.wild(),
        });
    }
}
