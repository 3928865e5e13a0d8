use tracing::{debug, error};

use crate::card::Card;
use crate::error::ActionError;
use crate::participant::Participant;
use crate::result::RoundResult;

use super::{RoundState, Table};

impl Table {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.round.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: draw a card.
    ///
    /// If the card takes the player over 21 the round is settled as a loss
    /// right away and the house does not play. Check
    /// [`Table::last_result`] for the settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn draw_card(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.deal_card().inspect_err(|_| {
            error!("deck ran out during the player's turn");
        })?;
        self.player.draw(card);

        let value = self.player.hand_value();
        debug!(%card, value, "player drew");

        if self.player.is_bust() {
            self.round.player_busted = true;
            self.resolve();
        }

        Ok(card)
    }

    /// Player action: stand.
    ///
    /// The house then draws while below its stand value and the round is
    /// settled.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck runs out
    /// while the house is drawing. In the latter case the house hand and the
    /// round are put back as they were before the stand; use
    /// [`Table::abandon_round`] to get out of the round.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;

        let dealt = self.house.hand().len();
        self.round.state = RoundState::HouseTurn;
        let drawn = match self.house_play() {
            Ok(drawn) => drawn,
            Err(err) => {
                self.house.hand_mut().truncate(dealt);
                self.round.state = RoundState::PlayerTurn;
                return Err(err.into());
            }
        };
        debug!(
            drawn = drawn.len(),
            house_value = self.house.hand_value(),
            "house finished"
        );

        Ok(self.resolve())
    }
}
