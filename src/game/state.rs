//! Round state types.

use crate::result::RoundResult;

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the player's bet.
    AwaitingBet,
    /// Waiting for the player to draw or stand.
    PlayerTurn,
    /// The house plays out its hand.
    HouseTurn,
    /// Round has been settled; waiting for a new round.
    Resolved,
}

/// What the presentation layer should tell the player next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Ask for a bet.
    PlaceBet,
    /// Ask for a draw or a stand.
    DecideNextMove,
    /// The player went over 21.
    Busted,
    /// The player won the round.
    WonRound,
    /// The player lost the round.
    LostRound,
    /// The round was a draw.
    DrawRound,
}

impl Instruction {
    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlaceBet => "Place your bet.",
            Self::DecideNextMove => "Draw another card or stand.",
            Self::Busted => "Busted! You went over 21.",
            Self::WonRound => "You won the round!",
            Self::LostRound => "You lost the round.",
            Self::DrawRound => "The round is a draw.",
        }
    }
}

/// Transient state of the round in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    /// Current state.
    pub state: RoundState,
    /// Whether the player went over 21 this round.
    pub player_busted: bool,
    /// Instruction for the presentation layer.
    pub instruction: Instruction,
    /// Settlement of the round, once resolved.
    pub result: Option<RoundResult>,
}

impl Round {
    /// Returns a round waiting for its bet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RoundState::AwaitingBet,
            player_busted: false,
            instruction: Instruction::PlaceBet,
            result: None,
        }
    }

    /// Returns whether the bet for this round is locked in.
    #[must_use]
    pub fn betting_closed(&self) -> bool {
        self.state != RoundState::AwaitingBet
    }

    /// Returns whether the house is playing.
    #[must_use]
    pub fn is_house_turn(&self) -> bool {
        self.state == RoundState::HouseTurn
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
