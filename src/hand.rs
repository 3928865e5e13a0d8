//! Hand representation and blackjack hand values.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest value a hand can have without busting.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.rank.points());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// An ordered set of cards held by one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    /// An empty hand is worth 0; use [`Hand::score`] to tell an empty hand
    /// apart from a dealt one.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Spades, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Clubs, Rank::King));
    /// assert_eq!(hand.value(), 21);
    /// ```
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns the hand value, or `None` if no card has been dealt yet.
    #[must_use]
    pub fn score(&self) -> Option<u8> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.value())
        }
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Drops every card after the first `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.cards.truncate(len);
    }

    /// Discards every card, keeping the allocation for the next round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add_card(Card::new(Suit::Clubs, rank));
        }
        hand
    }

    #[test]
    fn empty_hand_has_no_score() {
        let hand = Hand::new();
        assert_eq!(hand.value(), 0);
        assert_eq!(hand.score(), None);
        assert!(!hand.is_bust());
    }

    #[test]
    fn aces_demote_one_at_a_time() {
        assert_eq!(hand_of(&[Rank::Ace, Rank::Ace]).value(), 12);
        assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::King]).value(), 21);
        assert_eq!(
            hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]).value(),
            14
        );
        assert_eq!(
            hand_of(&[Rank::Ace, Rank::Nine, Rank::King, Rank::Five]).value(),
            25
        );
    }

    #[test]
    fn blackjack_and_soft_flags() {
        let natural = hand_of(&[Rank::Ace, Rank::King]);
        assert!(natural.is_blackjack());
        assert!(natural.is_soft());

        let hard = hand_of(&[Rank::Ace, Rank::Six, Rank::King]);
        assert_eq!(hard.value(), 17);
        assert!(!hard.is_soft());
        assert!(!hard.is_blackjack());
    }

    #[test]
    fn clear_empties_the_hand() {
        let mut hand = hand_of(&[Rank::Ten, Rank::Ten, Rank::Two]);
        assert!(hand.is_bust());
        hand.clear();
        assert!(hand.is_empty());
        assert_eq!(hand.score(), None);
    }
}
