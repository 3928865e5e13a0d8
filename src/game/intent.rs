//! The boundary between the table and whatever renders it.

use crate::error::TableError;
use crate::result::RoundResult;
use crate::stats::StatsSummary;

use super::{BetInput, RoundState, Table, TableView};

/// Table rules shown on request.
pub const RULES: &str = "\
Get closer to 21 than the house without going over.
Number cards count their face value, jacks, queens and kings count 10,
and an ace counts 11 or 1, whichever keeps the hand at 21 or under.
Place a bet no larger than your capital to receive two cards; the house
receives one. Draw as many cards as you like: going over 21 loses the bet.
When you stand, the house draws until it reaches 17 or more.
The higher hand wins. A win pays twice the bet; a draw pays nothing.";

/// Something the player asked the table to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Stake a bet for the round.
    PlaceBet(BetInput),
    /// Take another card.
    DrawCard,
    /// Stop drawing and let the house play.
    Stand,
    /// Start the next round.
    NewRound,
    /// Give up a round the deck ran out on and take the stake back.
    AbandonRound,
    /// Show the table rules.
    ShowRules,
    /// Leave the table.
    Quit,
}

/// What the table hands back after an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The table changed; render the new view.
    Table(TableView),
    /// The round was settled.
    Resolved {
        /// The settlement.
        result: RoundResult,
        /// The table after settlement.
        view: TableView,
    },
    /// The rules text.
    Rules(&'static str),
    /// The player left; final statistics.
    Quit(StatsSummary),
}

impl Table {
    /// Handles a single intent from the presentation layer.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying operation. User-input errors leave
    /// the table unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Intent, Response, RoundState, Table, TableOptions};
    ///
    /// let mut table = Table::new(TableOptions::default().with_starting_capital(100), 3);
    /// let Ok(Response::Table(view)) = table.dispatch(Intent::PlaceBet("10".into())) else {
    ///     panic!("bet should be accepted");
    /// };
    /// assert_eq!(view.capital, 90);
    /// assert_eq!(view.state, RoundState::PlayerTurn);
    /// ```
    pub fn dispatch(&mut self, intent: Intent) -> Result<Response, TableError> {
        match intent {
            Intent::PlaceBet(input) => {
                self.place_bet(input)?;
                Ok(Response::Table(self.view()))
            }
            Intent::DrawCard => {
                self.draw_card()?;
                Ok(self.settled_or_view())
            }
            Intent::Stand => {
                let result = self.stand()?;
                Ok(Response::Resolved {
                    result,
                    view: self.view(),
                })
            }
            Intent::NewRound => {
                self.new_round()?;
                Ok(Response::Table(self.view()))
            }
            Intent::AbandonRound => {
                self.abandon_round()?;
                Ok(Response::Table(self.view()))
            }
            Intent::ShowRules => Ok(Response::Rules(RULES)),
            Intent::Quit => Ok(Response::Quit(self.stats())),
        }
    }

    fn settled_or_view(&self) -> Response {
        match (self.round.state, self.round.result) {
            (RoundState::Resolved, Some(result)) => Response::Resolved {
                result,
                view: self.view(),
            },
            _ => Response::Table(self.view()),
        }
    }
}
