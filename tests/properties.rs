//! Property tests for hand values and session bookkeeping.

use bjtable::{Card, Hand, Intent, Rank, Response, RoundOutcome, Suit, Table, TableOptions};
use proptest::prelude::*;

fn rank_for(points: u8) -> Rank {
    // 2..=10 map onto Two..=Ten, which follow Ace in `Rank::ALL`.
    Rank::ALL[usize::from(points) - 1]
}

fn arb_card() -> impl Strategy<Value = Card> {
    (0..4_usize, 0..13_usize).prop_map(|(suit, rank)| Card::new(Suit::ALL[suit], Rank::ALL[rank]))
}

fn arb_intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        (1..60_i64).prop_map(|amount| Intent::PlaceBet(amount.into())),
        Just(Intent::PlaceBet("not a number".into())),
        Just(Intent::DrawCard),
        Just(Intent::Stand),
        Just(Intent::NewRound),
    ]
}

proptest! {
    /// One Ace plus number cards worth at most 10 counts the Ace as 11.
    #[test]
    fn single_ace_counts_eleven_when_it_fits(
        points in prop::collection::vec(2..=10_u8, 0..4),
    ) {
        let sum: u8 = points.iter().sum();
        prop_assume!(sum <= 10);

        let mut hand = Hand::new();
        hand.add_card(Card::new(Suit::Spades, Rank::Ace));
        for &p in &points {
            hand.add_card(Card::new(Suit::Hearts, rank_for(p)));
        }

        prop_assert_eq!(hand.value(), sum + 11);
        prop_assert!(hand.is_soft());
    }

    /// A bust hand counts every Ace as 1.
    #[test]
    fn bust_hands_have_every_ace_demoted(cards in prop::collection::vec(arb_card(), 1..12)) {
        let mut hand = Hand::new();
        for &card in &cards {
            hand.add_card(card);
        }

        let hard_total: u32 = cards
            .iter()
            .map(|card| if card.is_ace() { 1 } else { u32::from(card.rank.points()) })
            .sum();

        if hand.is_bust() {
            prop_assert_eq!(u32::from(hand.value()), hard_total);
        } else {
            prop_assert!(hand.value() <= 21);
            prop_assert!(u32::from(hand.value()) >= hard_total);
        }
    }

    /// Statistics never go down and count every settled round exactly once.
    #[test]
    fn statistics_only_increase(
        seed in any::<u64>(),
        intents in prop::collection::vec(arb_intent(), 1..80),
    ) {
        let options = TableOptions::default().with_starting_capital(500);
        let mut table = Table::new(options, seed);
        let mut previous = table.stats();
        let mut settled = 0_u32;
        let mut expected_capital = 500_usize;

        for intent in intents {
            let staked = matches!(intent, Intent::PlaceBet(_));
            match table.dispatch(intent) {
                Ok(Response::Resolved { result, view }) => {
                    settled += 1;
                    if let RoundOutcome::Win { payout } = result.outcome {
                        prop_assert_eq!(payout, result.bet * 2);
                        expected_capital += payout;
                    }
                    prop_assert_eq!(view.bet, 0);
                }
                Ok(Response::Table(view)) if staked => {
                    expected_capital -= view.bet;
                }
                Ok(_) | Err(_) => {}
            }

            let stats = table.stats();
            prop_assert!(stats.wins >= previous.wins);
            prop_assert!(stats.losses >= previous.losses);
            prop_assert!(stats.draws >= previous.draws);
            prop_assert_eq!(stats.rounds(), settled);
            prop_assert_eq!(table.player().capital(), expected_capital);
            previous = stats;
        }
    }
}
