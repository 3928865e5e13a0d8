//! A single-table blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that runs one player against the
//! house: betting, dealing, drawing, the house's fixed strategy, settlement
//! and session statistics. Presentation layers drive it with [`Intent`]
//! values and render the [`TableView`] it returns.
//!
//! # Example
//!
//! ```
//! use bjtable::{Intent, Response, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! table.dispatch(Intent::PlaceBet("50".into())).unwrap();
//! let response = table.dispatch(Intent::Stand).unwrap();
//! assert!(matches!(response, Response::Resolved { .. }));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod stats;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, EmptyDeckError, RoundError, TableError};
pub use game::{
    BetInput, Instruction, Intent, RULES, Response, Round, RoundState, Table, TableView, parse_bet,
};
pub use hand::{BLACKJACK, Hand};
pub use options::{
    DEFAULT_CAPITAL, DEFAULT_LOW_WATER_MARK, MIN_LOW_WATER_MARK, TableOptions, parse_capital,
};
pub use participant::{HOUSE_STANDS_ON, House, Participant, Player};
pub use result::{RoundOutcome, RoundResult, Winner, determine_winner};
pub use stats::{StatsSummary, Statistics};
