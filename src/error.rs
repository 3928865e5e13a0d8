//! Error types for table operations.

use thiserror::Error;

/// A card was requested from an empty deck.
///
/// The table replenishes the deck between rounds so this only surfaces when
/// that invariant is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur while placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet text is empty or not a whole number.
    #[error("enter a valid amount to bet")]
    InvalidInput,
    /// Bet is larger than the player's capital.
    #[error("the bet cannot be larger than your capital")]
    ExceedsCapital,
    /// Bet is zero or negative.
    #[error("the bet must be greater than zero")]
    NonPositive,
    /// Invalid round state for betting.
    #[error("invalid round state for betting")]
    InvalidState,
    /// Not enough cards to deal the opening hands.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during a player draw or stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The deck ran out mid-round.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur when starting a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The current round has not been resolved yet.
    #[error("the current round is still in progress")]
    InProgress,
    /// There is no round in play to abandon.
    #[error("no round is in progress")]
    NotInProgress,
    /// A round can only be abandoned once the deck has run out.
    #[error("the deck still has cards; finish the round")]
    DeckNotExhausted,
}

/// Any error returned while dispatching an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// Betting failed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Drawing or standing failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Starting a new round failed.
    #[error(transparent)]
    Round(#[from] RoundError),
}

impl TableError {
    /// Returns whether the error is a user mistake the table can recover
    /// from by prompting again.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::Bet(BetError::EmptyDeck(_)) | Self::Action(ActionError::EmptyDeck(_))
        )
    }
}
