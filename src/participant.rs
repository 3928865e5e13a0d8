//! The two seats at the table: the player and the house.

use alloc::string::String;

use crate::card::Card;
use crate::hand::Hand;

/// Value at which the house stops drawing by default.
pub const HOUSE_STANDS_ON: u8 = 17;

/// Something that holds a hand and takes cards.
pub trait Participant {
    /// Returns the participant's hand.
    fn hand(&self) -> &Hand;

    /// Returns the participant's hand mutably.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Takes a card into the hand.
    fn draw(&mut self, card: Card) {
        self.hand_mut().add_card(card);
    }

    /// Returns the blackjack value of the current hand.
    fn hand_value(&self) -> u8 {
        self.hand().value()
    }

    /// Returns whether the current hand is bust.
    fn is_bust(&self) -> bool {
        self.hand().is_bust()
    }

    /// Throws away every card in the hand.
    fn discard_hand(&mut self) {
        self.hand_mut().clear();
    }
}

/// The human player: a hand, a capital balance and the bet for the round.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    capital: usize,
    bet: usize,
    hand: Hand,
}

impl Player {
    /// Creates a player with the given name and capital.
    #[must_use]
    pub fn new(name: impl Into<String>, capital: usize) -> Self {
        Self {
            name: name.into(),
            capital,
            bet: 0,
            hand: Hand::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the capital not currently staked.
    #[must_use]
    pub const fn capital(&self) -> usize {
        self.capital
    }

    /// Returns the bet staked on the current round (0 if none).
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Moves `amount` from capital onto the table.
    ///
    /// Callers check `amount <= capital` first.
    pub(crate) const fn stake(&mut self, amount: usize) {
        self.capital -= amount;
        self.bet = amount;
    }

    /// Adds winnings to capital.
    pub(crate) const fn credit(&mut self, amount: usize) {
        self.capital = self.capital.saturating_add(amount);
    }

    /// Clears the bet after settlement.
    pub(crate) const fn clear_bet(&mut self) {
        self.bet = 0;
    }
}

impl Participant for Player {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

/// The house plays a fixed strategy: draw while below the stand value.
#[derive(Debug, Clone)]
pub struct House {
    hand: Hand,
    stands_on: u8,
}

impl House {
    /// Creates a house that stops drawing at `stands_on`.
    #[must_use]
    pub const fn new(stands_on: u8) -> Self {
        Self {
            hand: Hand::new(),
            stands_on,
        }
    }

    /// Returns the value the house stands on.
    #[must_use]
    pub const fn stands_on(&self) -> u8 {
        self.stands_on
    }

    /// Returns whether the house takes another card.
    ///
    /// A house that has not been dealt in yet never draws.
    #[must_use]
    pub fn wants_card(&self) -> bool {
        self.hand.score().is_some_and(|value| value < self.stands_on)
    }
}

impl Default for House {
    fn default() -> Self {
        Self::new(HOUSE_STANDS_ON)
    }
}

impl Participant for House {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn house_never_draws_on_an_empty_hand() {
        let house = House::default();
        assert!(!house.wants_card());
    }

    #[test]
    fn house_draws_below_seventeen_only() {
        let mut house = House::default();
        house.draw(Card::new(Suit::Hearts, Rank::Ten));
        house.draw(Card::new(Suit::Hearts, Rank::Six));
        assert!(house.wants_card());

        house.draw(Card::new(Suit::Clubs, Rank::Ace));
        assert_eq!(house.hand_value(), 17);
        assert!(!house.wants_card());
    }

    #[test]
    fn stake_and_credit_move_capital() {
        let mut player = Player::new("Ada", 100);
        player.stake(40);
        assert_eq!(player.capital(), 60);
        assert_eq!(player.bet(), 40);

        player.credit(80);
        player.clear_bet();
        assert_eq!(player.capital(), 140);
        assert_eq!(player.bet(), 0);
    }

    #[test]
    fn credit_saturates_at_the_largest_capital() {
        let mut player = Player::new("Ada", usize::MAX);
        player.stake(1);
        player.credit(2);
        player.clear_bet();
        assert_eq!(player.capital(), usize::MAX);
    }

    #[test]
    fn discard_hand_clears_cards() {
        let mut player = Player::new("Ada", 10);
        player.draw(Card::new(Suit::Spades, Rank::King));
        assert_eq!(player.hand_value(), 10);
        player.discard_hand();
        assert!(player.hand().is_empty());
    }
}
