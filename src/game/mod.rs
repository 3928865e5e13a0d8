//! Round engine and session state.

use alloc::string::String;
use alloc::vec::Vec;

use tracing::{info, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::options::TableOptions;
use crate::participant::{House, Participant, Player};
use crate::result::RoundResult;
use crate::stats::{Statistics, StatsSummary};

mod actions;
mod bet;
mod house;
pub mod intent;
pub mod state;

pub use bet::{BetInput, parse_bet};
pub use intent::{Intent, RULES, Response};
pub use state::{Instruction, Round, RoundState};

/// A single blackjack table: one player against the house.
///
/// The table owns the deck, both participants, the round in play and the
/// session statistics. Every operation runs to completion before returning.
#[derive(Debug, Clone)]
pub struct Table {
    /// Table options.
    options: TableOptions,
    /// Cards in the shoe.
    deck: Deck,
    /// The player.
    player: Player,
    /// The house.
    house: House,
    /// The round in play.
    round: Round,
    /// Session statistics.
    stats: Statistics,
}

impl Table {
    /// Creates a new table with the given seed.
    ///
    /// The table starts waiting for the first bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{RoundState, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.state(), RoundState::AwaitingBet);
    /// assert_eq!(table.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let options = options.normalized();
        let deck = Deck::new(options.decks, seed);
        Self::with_deck(options, deck)
    }

    /// Creates a table that deals from `deck`.
    #[must_use]
    pub fn with_deck(options: TableOptions, deck: Deck) -> Self {
        let options = options.normalized();
        let player = Player::new(options.player_name.clone(), options.starting_capital);
        let house = House::new(options.house_stands_on);

        Self {
            options,
            deck,
            player,
            house,
            round: Round::new(),
            stats: Statistics::new(),
        }
    }

    /// Starts a new round.
    ///
    /// Both hands are discarded and, if fewer than the low-water mark cards
    /// remain, the deck is rebuilt and reshuffled. Returns `true` if that
    /// happened.
    ///
    /// # Errors
    ///
    /// Returns an error if a bet is staked on a round that is not resolved.
    pub fn new_round(&mut self) -> Result<bool, RoundError> {
        match self.round.state {
            RoundState::AwaitingBet | RoundState::Resolved => {}
            RoundState::PlayerTurn | RoundState::HouseTurn => return Err(RoundError::InProgress),
        }

        self.player.discard_hand();
        self.house.discard_hand();

        let replenished = self.deck.needs_replenish(self.options.low_water_mark);
        if replenished {
            self.deck.create();
            info!(
                remaining = self.deck.remaining_count(),
                "deck replenished and reshuffled"
            );
        }

        self.round = Round::new();
        Ok(replenished)
    }

    /// Abandons a round the deck can no longer finish.
    ///
    /// The stake goes back to the player, nothing is recorded in the
    /// statistics, and a new round starts as with [`Table::new_round`].
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in play or the deck still has cards.
    pub fn abandon_round(&mut self) -> Result<bool, RoundError> {
        match self.round.state {
            RoundState::PlayerTurn | RoundState::HouseTurn => {}
            RoundState::AwaitingBet | RoundState::Resolved => {
                return Err(RoundError::NotInProgress);
            }
        }
        if self.deck.remaining_count() > 0 {
            return Err(RoundError::DeckNotExhausted);
        }

        let refund = self.player.bet();
        self.player.credit(refund);
        self.player.clear_bet();
        warn!(refund, "round abandoned with an exhausted deck");

        self.round.state = RoundState::Resolved;
        self.new_round()
    }

    /// Returns the table options.
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.round.state
    }

    /// Returns the round in play.
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the current instruction for the player.
    pub const fn instruction(&self) -> Instruction {
        self.round.instruction
    }

    /// Returns the settlement of the current round, once resolved.
    pub const fn last_result(&self) -> Option<RoundResult> {
        self.round.result
    }

    /// Returns the player.
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the house.
    pub const fn house(&self) -> &House {
        &self.house
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining_count()
    }

    /// Returns a snapshot of the session statistics.
    pub const fn stats(&self) -> StatsSummary {
        self.stats.summary()
    }

    /// Returns whether the player has no capital left to bet.
    pub const fn is_broke(&self) -> bool {
        self.player.capital() == 0 && self.player.bet() == 0
    }

    /// Returns everything the presentation layer renders.
    pub fn view(&self) -> TableView {
        TableView {
            player_name: String::from(self.player.name()),
            player_cards: self.player.hand().cards().to_vec(),
            player_value: self.player.hand().score(),
            house_cards: self.house.hand().cards().to_vec(),
            house_value: self.house.hand().score(),
            capital: self.player.capital(),
            bet: self.player.bet(),
            instruction: self.round.instruction,
            state: self.round.state,
            stats: self.stats.summary(),
            cards_remaining: self.deck.remaining_count(),
        }
    }
}

/// Snapshot of the table after an intent has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// The player's name.
    pub player_name: String,
    /// The player's cards.
    pub player_cards: Vec<Card>,
    /// The player's hand value, `None` before the deal.
    pub player_value: Option<u8>,
    /// The house's cards.
    pub house_cards: Vec<Card>,
    /// The house's hand value, `None` before the deal.
    pub house_value: Option<u8>,
    /// Capital not currently staked.
    pub capital: usize,
    /// Bet staked on the round.
    pub bet: usize,
    /// What to tell the player.
    pub instruction: Instruction,
    /// Round state.
    pub state: RoundState,
    /// Session statistics.
    pub stats: StatsSummary,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}
