//! Table configuration options.

use alloc::string::String;

use crate::participant::HOUSE_STANDS_ON;

/// Capital given to a player when none (or garbage) is supplied.
pub const DEFAULT_CAPITAL: usize = 1000;

/// Remaining card count below which a new round starts from a fresh deck.
pub const DEFAULT_LOW_WATER_MARK: usize = 15;

/// Smallest accepted low-water mark: the cards needed for the opening deal.
pub const MIN_LOW_WATER_MARK: usize = 3;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(2)
///     .with_starting_capital(500)
///     .with_player_name("Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of standard decks in the shoe, at least 1.
    pub decks: u8,
    /// The deck is rebuilt at the start of a round when fewer cards remain.
    /// Never below [`MIN_LOW_WATER_MARK`].
    pub low_water_mark: usize,
    /// Value at which the house stops drawing.
    pub house_stands_on: u8,
    /// Capital the player starts the session with.
    pub starting_capital: usize,
    /// Name shown for the player.
    pub player_name: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            low_water_mark: DEFAULT_LOW_WATER_MARK,
            house_stands_on: HOUSE_STANDS_ON,
            starting_capital: DEFAULT_CAPITAL,
            player_name: String::from("Player"),
        }
    }
}

impl TableOptions {
    /// Sets the number of decks. Zero is raised to one.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// assert_eq!(TableOptions::default().with_decks(0).decks, 1);
    /// ```
    #[must_use]
    pub fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks.max(1);
        self
    }

    /// Sets the low-water mark that triggers a fresh deck.
    ///
    /// Values below [`MIN_LOW_WATER_MARK`] are raised to it so a new round
    /// always has enough cards for the opening deal.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{MIN_LOW_WATER_MARK, TableOptions};
    ///
    /// let options = TableOptions::default().with_low_water_mark(20);
    /// assert_eq!(options.low_water_mark, 20);
    /// let options = TableOptions::default().with_low_water_mark(0);
    /// assert_eq!(options.low_water_mark, MIN_LOW_WATER_MARK);
    /// ```
    #[must_use]
    pub fn with_low_water_mark(mut self, cards: usize) -> Self {
        self.low_water_mark = cards.max(MIN_LOW_WATER_MARK);
        self
    }

    /// Raises out-of-range values set directly on the fields.
    #[must_use]
    pub(crate) fn normalized(mut self) -> Self {
        self.decks = self.decks.max(1);
        self.low_water_mark = self.low_water_mark.max(MIN_LOW_WATER_MARK);
        self
    }

    /// Sets the value the house stands on.
    #[must_use]
    pub fn with_house_stands_on(mut self, value: u8) -> Self {
        self.house_stands_on = value;
        self
    }

    /// Sets the player's starting capital.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_capital(250);
    /// assert_eq!(options.starting_capital, 250);
    /// ```
    #[must_use]
    pub fn with_starting_capital(mut self, capital: usize) -> Self {
        self.starting_capital = capital;
        self
    }

    /// Sets the player's display name.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }
}

/// Parses a starting capital, falling back to [`DEFAULT_CAPITAL`] when the
/// text is not a whole non-negative number.
///
/// # Example
///
/// ```
/// use bjtable::{DEFAULT_CAPITAL, parse_capital};
///
/// assert_eq!(parse_capital(" 300 "), 300);
/// assert_eq!(parse_capital("lots"), DEFAULT_CAPITAL);
/// ```
#[must_use]
pub fn parse_capital(text: &str) -> usize {
    text.trim().parse().unwrap_or(DEFAULT_CAPITAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_raise_out_of_range_values() {
        let options = TableOptions::default()
            .with_decks(0)
            .with_low_water_mark(1);
        assert_eq!(options.decks, 1);
        assert_eq!(options.low_water_mark, MIN_LOW_WATER_MARK);
    }

    #[test]
    fn normalized_fixes_fields_set_directly() {
        let options = TableOptions {
            decks: 0,
            low_water_mark: 0,
            ..TableOptions::default()
        }
        .normalized();
        assert_eq!(options.decks, 1);
        assert_eq!(options.low_water_mark, MIN_LOW_WATER_MARK);

        let options = TableOptions::default().with_decks(4).normalized();
        assert_eq!(options.decks, 4);
        assert_eq!(options.low_water_mark, DEFAULT_LOW_WATER_MARK);
    }
}
