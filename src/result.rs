//! Round result types.

use crate::hand::BLACKJACK;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player won; `payout` was added to capital.
    Win {
        /// Stake returned plus equal winnings.
        payout: usize,
    },
    /// Player lost the stake.
    Lose,
    /// Nobody won; the stake is not returned.
    Draw,
}

/// Which side takes the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The player.
    Player,
    /// The house.
    House,
    /// Neither.
    Tie,
}

/// Decides the winner from the final hand values.
///
/// A player bust loses even if the house also busts.
///
/// # Example
///
/// ```
/// use bjtable::{Winner, determine_winner};
///
/// assert_eq!(determine_winner(22, 23), Winner::House);
/// assert_eq!(determine_winner(20, 23), Winner::Player);
/// assert_eq!(determine_winner(19, 19), Winner::Tie);
/// ```
#[must_use]
pub const fn determine_winner(player_value: u8, house_value: u8) -> Winner {
    if player_value > BLACKJACK {
        Winner::House
    } else if house_value > BLACKJACK {
        Winner::Player
    } else if player_value > house_value {
        Winner::Player
    } else if player_value < house_value {
        Winner::House
    } else {
        Winner::Tie
    }
}

/// Everything the presentation layer needs to report a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The bet that was staked.
    pub bet: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The house's final hand value.
    pub house_value: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the house busted.
    pub house_bust: bool,
}

impl RoundResult {
    /// Returns the amount paid back to the player.
    #[must_use]
    pub const fn payout(&self) -> usize {
        match self.outcome {
            RoundOutcome::Win { payout } => payout,
            RoundOutcome::Lose | RoundOutcome::Draw => 0,
        }
    }
}
