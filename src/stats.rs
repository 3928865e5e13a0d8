//! Win/loss/draw counters kept across rounds.

use core::fmt;

/// Running round counters for a session.
///
/// Counters only ever go up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    wins: u32,
    losses: u32,
    draws: u32,
}

impl Statistics {
    /// Creates zeroed statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    /// Records a round won by the player.
    pub const fn increment_wins(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }

    /// Records a round lost by the player.
    pub const fn increment_losses(&mut self) {
        self.losses = self.losses.saturating_add(1);
    }

    /// Records a drawn round.
    pub const fn increment_draws(&mut self) {
        self.draws = self.draws.saturating_add(1);
    }

    /// Returns a snapshot of the counters.
    #[must_use]
    pub const fn summary(&self) -> StatsSummary {
        StatsSummary {
            wins: self.wins,
            losses: self.losses,
            draws: self.draws,
        }
    }
}

/// Read-only copy of the counters for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSummary {
    /// Rounds won.
    pub wins: u32,
    /// Rounds lost.
    pub losses: u32,
    /// Rounds drawn.
    pub draws: u32,
}

impl StatsSummary {
    /// Total number of settled rounds.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.wins.saturating_add(self.losses).saturating_add(self.draws)
    }
}

impl fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wins: {}  Losses: {}  Draws: {}",
            self.wins, self.losses, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reflects_increments() {
        let mut stats = Statistics::new();
        stats.increment_wins();
        stats.increment_wins();
        stats.increment_losses();
        stats.increment_draws();

        let summary = stats.summary();
        assert_eq!(
            summary,
            StatsSummary {
                wins: 2,
                losses: 1,
                draws: 1
            }
        );
        assert_eq!(summary.rounds(), 4);
        assert_eq!(
            alloc::format!("{summary}"),
            "Wins: 2  Losses: 1  Draws: 1"
        );
    }

    #[test]
    fn rounds_saturate_instead_of_wrapping() {
        let summary = StatsSummary {
            wins: u32::MAX,
            losses: 2,
            draws: 1,
        };
        assert_eq!(summary.rounds(), u32::MAX);
    }
}
