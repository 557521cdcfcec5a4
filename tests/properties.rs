//! Property-based tests for the shoe, odds, and pot lifecycle.

#![allow(clippy::cast_precision_loss, clippy::float_cmp)]

use std::collections::HashMap;

use hilors::{BetCategory, BustMode, Card, GameOptions, GameSession, Multiplier, Shoe};
use proptest::prelude::*;

fn category_strategy() -> impl Strategy<Value = BetCategory> {
    prop::sample::select(BetCategory::ALL.to_vec())
}

fn options_strategy() -> impl Strategy<Value = GameOptions> {
    prop_oneof![Just(GameOptions::default()), Just(GameOptions::classic())]
}

proptest! {
    #[test]
    fn shoe_never_exceeds_deck_multiplicity(seed in any::<u64>(), decks in 1u8..=4) {
        let mut shoe = Shoe::new(decks, seed);
        let capacity = shoe.capacity();
        let mut seen: HashMap<Card, usize> = HashMap::new();

        for drawn_so_far in 1..=capacity {
            let drawn = shoe.draw();
            prop_assert!(!drawn.reshuffled);
            prop_assert_eq!(shoe.remaining(), capacity - drawn_so_far);
            let count = seen.entry(drawn.card).or_default();
            *count += 1;
            prop_assert!(*count <= usize::from(decks));
        }

        let drawn = shoe.draw();
        prop_assert!(drawn.reshuffled);
        prop_assert_eq!(shoe.remaining(), capacity - 1);
    }

    #[test]
    fn fair_odds_round_to_hundredths(total in 1usize..=416, count in 1usize..=416) {
        prop_assume!(count <= total);
        let fair = Multiplier::fair(count, total).unwrap();
        let expected = (100.0 * total as f64 / count as f64).round_ties_even();
        prop_assert_eq!(f64::from(fair.hundredths()), expected);
    }

    #[test]
    fn odds_stay_within_floor_and_ceiling(
        seed in any::<u64>(),
        options in options_strategy(),
        draws in 0usize..100,
    ) {
        let mut session = GameSession::new(options.clone(), seed);
        for _ in 0..draws {
            session.shoe_mut().draw();
        }
        let odds = session.odds();
        for multiplier in [odds.primary, odds.secondary] {
            prop_assert!(multiplier <= options.odds_ceiling);
            prop_assert!(multiplier >= options.odds_floor.min(Multiplier::ONE));
        }
        prop_assert_eq!(odds, session.odds());
    }

    #[test]
    fn winning_bet_floors_pot(
        seed in any::<u64>(),
        options in options_strategy(),
        stake in 1usize..=1_000_000,
        category in category_strategy(),
    ) {
        let mut session = GameSession::new(options, seed);
        session.add_to_pot(stake).unwrap();
        let multiplier = session.odds_for(category);
        let balance = session.balance();

        let outcome = session.place_bet(category).unwrap();
        prop_assert_eq!(outcome.multiplier, multiplier);
        prop_assert_eq!(session.balance(), balance);
        if outcome.is_win() {
            let expected = stake as u128 * u128::from(multiplier.hundredths()) / 100;
            prop_assert_eq!(outcome.pot_after as u128, expected);
            prop_assert_eq!(session.pot(), outcome.pot_after);
        } else {
            prop_assert_eq!(session.pot(), 0);
        }
    }

    #[test]
    fn cash_out_credits_exact_pot(
        seed in any::<u64>(),
        bets in prop::collection::vec(category_strategy(), 0..8),
    ) {
        let options = GameOptions::default().with_bust_mode(BustMode::Immediate);
        let mut session = GameSession::new(options, seed);
        session.add_to_pot(10_000).unwrap();

        for category in bets {
            if session.pot() == 0 {
                break;
            }
            session.place_bet(category).unwrap();
        }

        let pot = session.pot();
        let balance = session.balance();
        if pot > 0 {
            let cash_out = session.cash_out().unwrap();
            prop_assert_eq!(cash_out.amount, pot);
            prop_assert_eq!(session.balance(), balance + pot);
            prop_assert_eq!(session.pot(), 0);
        } else {
            prop_assert!(session.cash_out().is_err());
            prop_assert_eq!(session.balance(), balance);
        }
    }
}
