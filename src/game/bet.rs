use alloc::string::String;

use tracing::{debug, error};

use crate::error::{BetError, EmptyDeckError};
use crate::participant::Participant;

use super::{Instruction, RoundState, Table};

/// Player, house, player.
const OPENING_CARDS: usize = 3;

/// A bet as supplied by the presentation layer: raw text or a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BetInput {
    /// Text typed by the player.
    Text(String),
    /// An amount that is already numeric.
    Amount(i64),
}

impl From<&str> for BetInput {
    fn from(text: &str) -> Self {
        Self::Text(String::from(text))
    }
}

impl From<String> for BetInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for BetInput {
    fn from(amount: i64) -> Self {
        Self::Amount(amount)
    }
}

impl From<usize> for BetInput {
    fn from(amount: usize) -> Self {
        Self::Amount(i64::try_from(amount).unwrap_or(i64::MAX))
    }
}

/// Parses a bet and checks it against the available capital.
///
/// # Errors
///
/// Returns [`BetError::InvalidInput`] for empty or non-numeric text,
/// [`BetError::NonPositive`] for zero or negative amounts, and
/// [`BetError::ExceedsCapital`] when the amount is larger than `capital`.
///
/// # Example
///
/// ```
/// use bjtable::{BetError, parse_bet};
///
/// assert_eq!(parse_bet(&"25".into(), 100), Ok(25));
/// assert_eq!(parse_bet(&"ten".into(), 100), Err(BetError::InvalidInput));
/// assert_eq!(parse_bet(&0_i64.into(), 100), Err(BetError::NonPositive));
/// assert_eq!(parse_bet(&101_i64.into(), 100), Err(BetError::ExceedsCapital));
/// ```
pub fn parse_bet(input: &BetInput, capital: usize) -> Result<usize, BetError> {
    let amount = match input {
        BetInput::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| BetError::InvalidInput)?,
        BetInput::Amount(amount) => *amount,
    };

    if amount <= 0 {
        return Err(BetError::NonPositive);
    }

    let amount = usize::try_from(amount).map_err(|_| BetError::ExceedsCapital)?;
    if amount > capital {
        return Err(BetError::ExceedsCapital);
    }

    Ok(amount)
}

impl Table {
    /// Places the player's bet and deals the opening cards.
    ///
    /// On success the bet is taken from capital, the player receives two
    /// cards, the house one, and the round moves to the player's turn.
    /// Returns the accepted amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for a bet or the bet is
    /// invalid. Nothing changes on error.
    pub fn place_bet(&mut self, input: impl Into<BetInput>) -> Result<usize, BetError> {
        if self.round.state != RoundState::AwaitingBet {
            return Err(BetError::InvalidState);
        }

        let amount = parse_bet(&input.into(), self.player.capital())?;

        if self.deck.remaining_count() < OPENING_CARDS {
            error!(
                remaining = self.deck.remaining_count(),
                "deck cannot cover the opening deal"
            );
            return Err(EmptyDeckError.into());
        }

        self.player.stake(amount);
        self.deal_opening_cards()?;

        self.round.state = RoundState::PlayerTurn;
        self.round.instruction = Instruction::DecideNextMove;

        debug!(
            amount,
            capital = self.player.capital(),
            player_value = self.player.hand_value(),
            house_value = self.house.hand_value(),
            "bet accepted"
        );

        Ok(amount)
    }

    fn deal_opening_cards(&mut self) -> Result<(), EmptyDeckError> {
        self.player.draw(self.deck.deal_card()?);
        self.house.draw(self.deck.deal_card()?);
        self.player.draw(self.deck.deal_card()?);
        Ok(())
    }
}
