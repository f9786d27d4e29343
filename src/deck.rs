//! The dealt deck: an arena of card slots addressed by [`CardHandle`].

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE};
use crate::error::DeckError;
use crate::shuffle::shuffle;

/// Opaque reference to a card slot on the table.
///
/// A handle is the position of the card in the dealt order. Presentation
/// adapters map handles to their own UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardHandle(u8);

impl CardHandle {
    /// Creates a handle for the given table position.
    #[must_use]
    pub const fn new(position: u8) -> Self {
        Self(position)
    }

    /// Returns the table position.
    #[must_use]
    pub const fn position(self) -> usize {
        self.0 as usize
    }
}

/// Which side of a card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Face {
    /// Face-down and clickable.
    #[default]
    Down,
    /// Face-up, waiting for the turn to resolve.
    Up,
    /// Matched and out of play.
    Paired,
}

/// A card together with its face status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    /// The card in this slot.
    pub card: Card,
    /// The side currently showing.
    pub face: Face,
}

/// The cards on the table, in dealt order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slots: Vec<CardSlot>,
}

impl Deck {
    /// Deals a uniformly shuffled deck.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let slots = shuffle(DECK_SIZE, rng)
            .into_iter()
            .filter_map(|index| Card::new(index as u8))
            .map(|card| CardSlot {
                card,
                face: Face::Down,
            })
            .collect();

        Self { slots }
    }

    /// Builds a deck from an explicit order of card indices.
    ///
    /// # Errors
    ///
    /// Returns an error unless `order` holds every index in `0..52` exactly
    /// once.
    ///
    /// # Example
    ///
    /// ```
    /// use concentration::Deck;
    ///
    /// let order: Vec<u8> = (0..52).collect();
    /// let deck = Deck::from_order(&order).unwrap();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn from_order(order: &[u8]) -> Result<Self, DeckError> {
        if order.len() != DECK_SIZE {
            return Err(DeckError::WrongLength {
                expected: DECK_SIZE,
                actual: order.len(),
            });
        }

        let mut seen = [false; DECK_SIZE];
        let mut slots = Vec::with_capacity(DECK_SIZE);

        for &index in order {
            let card = Card::new(index).ok_or(DeckError::OutOfRange(index))?;
            let slot = &mut seen[index as usize];
            if *slot {
                return Err(DeckError::Duplicate(index));
            }
            *slot = true;

            slots.push(CardSlot {
                card,
                face: Face::Down,
            });
        }

        Ok(Self { slots })
    }

    /// Returns the slot at the given handle.
    #[must_use]
    pub fn get(&self, handle: CardHandle) -> Option<&CardSlot> {
        self.slots.get(handle.position())
    }

    pub(crate) fn get_mut(&mut self, handle: CardHandle) -> Option<&mut CardSlot> {
        self.slots.get_mut(handle.position())
    }

    pub(crate) fn set_face(&mut self, handle: CardHandle, face: Face) {
        if let Some(slot) = self.get_mut(handle) {
            slot.face = face;
        }
    }

    /// Returns all slots in dealt order.
    #[must_use]
    pub fn slots(&self) -> &[CardSlot] {
        &self.slots
    }

    /// Returns the cards in dealt order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().map(|slot| slot.card)
    }

    /// Returns the handles of all slots.
    pub fn handles(&self) -> impl Iterator<Item = CardHandle> {
        (0..self.slots.len()).map(|position| CardHandle::new(position as u8))
    }

    /// Returns the handle of the slot holding `card`.
    #[must_use]
    pub fn find(&self, card: Card) -> Option<CardHandle> {
        self.slots
            .iter()
            .position(|slot| slot.card == card)
            .map(|position| CardHandle::new(position as u8))
    }

    /// Returns the number of paired cards.
    #[must_use]
    pub fn paired_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.face == Face::Paired)
            .count()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
