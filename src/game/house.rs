use alloc::vec::Vec;

use tracing::{error, info};

use crate::card::Card;
use crate::error::EmptyDeckError;
use crate::participant::Participant;
use crate::result::{RoundOutcome, RoundResult, Winner, determine_winner};

use super::{Instruction, RoundState, Table};

impl Table {
    /// House plays its hand: it draws while its value is below the stand
    /// value. An empty house hand never draws.
    ///
    /// Returns the cards drawn by the house.
    pub(super) fn house_play(&mut self) -> Result<Vec<Card>, EmptyDeckError> {
        let mut drawn_cards = Vec::new();

        while self.house.wants_card() {
            let card = self.deck.deal_card().inspect_err(|_| {
                error!("deck ran out during the house's turn");
            })?;
            self.house.draw(card);
            drawn_cards.push(card);
        }

        Ok(drawn_cards)
    }

    /// Settles the round: decides the winner, records it once in the
    /// statistics, pays out and clears the bet.
    pub(super) fn resolve(&mut self) -> RoundResult {
        let player_value = self.player.hand_value();
        let house_value = self.house.hand_value();
        let bet = self.player.bet();

        let outcome = match determine_winner(player_value, house_value) {
            Winner::Player => {
                let payout = bet.saturating_mul(2);
                self.player.credit(payout);
                self.stats.increment_wins();
                RoundOutcome::Win { payout }
            }
            Winner::House => {
                self.stats.increment_losses();
                RoundOutcome::Lose
            }
            Winner::Tie => {
                self.stats.increment_draws();
                RoundOutcome::Draw
            }
        };

        let result = RoundResult {
            outcome,
            bet,
            player_value,
            house_value,
            player_bust: self.player.is_bust(),
            house_bust: self.house.is_bust(),
        };

        self.round.instruction = if self.round.player_busted {
            Instruction::Busted
        } else {
            match outcome {
                RoundOutcome::Win { .. } => Instruction::WonRound,
                RoundOutcome::Lose => Instruction::LostRound,
                RoundOutcome::Draw => Instruction::DrawRound,
            }
        };

        self.player.clear_bet();
        self.round.state = RoundState::Resolved;
        self.round.result = Some(result);

        info!(
            ?outcome,
            player_value,
            house_value,
            capital = self.player.capital(),
            "round resolved"
        );

        result
    }
}
