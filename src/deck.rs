//! The shoe cards are dealt from.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;

/// A shuffled, depleting deck made of one or more standard 52-card sets.
///
/// Cards are dealt from the top of the deck, which is the end of the
/// internal vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    sets: u8,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a freshly shuffled deck of `sets` standard decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::Deck;
    ///
    /// let deck = Deck::new(1, 7);
    /// assert_eq!(deck.remaining_count(), 52);
    /// ```
    #[must_use]
    pub fn new(sets: u8, seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::new(),
            sets: sets.max(1),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.create();
        deck
    }

    /// Creates a stacked deck that deals `cards` in order, first card first.
    ///
    /// The deck is still able to replenish itself: [`Deck::create`] builds
    /// `sets` full shuffled decks from `seed`.
    #[must_use]
    pub fn from_cards(cards: &[Card], sets: u8, seed: u64) -> Self {
        let mut stacked = cards.to_vec();
        stacked.reverse();
        Self {
            cards: stacked,
            sets: sets.max(1),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replaces the current cards with full shuffled sets.
    pub fn create(&mut self) {
        let mut cards = Vec::with_capacity(self.sets as usize * DECK_SIZE);

        for _ in 0..self.sets {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(&mut self.rng);
        self.cards = cards;
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards remain.
    pub fn deal_card(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of standard sets this deck is built from.
    #[must_use]
    pub const fn sets(&self) -> u8 {
        self.sets
    }

    /// Returns whether the deck has fallen below `low_water_mark` cards.
    #[must_use]
    pub fn needs_replenish(&self, low_water_mark: usize) -> bool {
        self.cards.len() < low_water_mark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_deck_deals_in_given_order() {
        let mut deck = Deck::from_cards(
            &[
                Card::new(Suit::Hearts, Rank::Ace),
                Card::new(Suit::Clubs, Rank::Nine),
            ],
            1,
            3,
        );

        assert_eq!(deck.deal_card(), Ok(Card::new(Suit::Hearts, Rank::Ace)));
        assert_eq!(deck.deal_card(), Ok(Card::new(Suit::Clubs, Rank::Nine)));
        assert_eq!(deck.deal_card(), Err(EmptyDeckError));
    }

    #[test]
    fn create_builds_every_set() {
        let mut deck = Deck::from_cards(&[], 2, 9);
        assert!(deck.needs_replenish(15));

        deck.create();
        assert_eq!(deck.remaining_count(), 2 * DECK_SIZE);
        assert!(!deck.needs_replenish(15));
    }

    #[test]
    fn same_seed_gives_same_order() {
        let mut a = Deck::new(1, 42);
        let mut b = Deck::new(1, 42);
        for _ in 0..DECK_SIZE {
            assert_eq!(a.deal_card(), b.deal_card());
        }
    }

    #[test]
    fn zero_sets_still_builds_one_deck() {
        let mut deck = Deck::new(0, 5);
        assert_eq!(deck.sets(), 1);
        assert_eq!(deck.remaining_count(), DECK_SIZE);

        let mut stacked = Deck::from_cards(&[], 0, 5);
        stacked.create();
        assert_eq!(stacked.remaining_count(), DECK_SIZE);
        assert!(deck.deal_card().is_ok());
    }
}
