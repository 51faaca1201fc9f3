// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Three-card game scorer.
//!
//! Each input line has a player name and five cards, for example
//! `alice:KD,2S,10H,AC,5D`. The three cards with the highest face value are
//! each player's best hand, the player with the highest sum of face values
//! wins, and ties are broken by summing face values and suit weights:
//!
//! ```
//! # use threecard_core::{Winner, evaluate};
//! let winner = evaluate("alice:KD,QD,JD,2D,3D\nbob:KC,QD,JD,2D,3D").unwrap();
//! assert_eq!(winner.to_string(), "bob:42");
//! assert!(matches!(winner, Winner::BySuit { .. }));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod error;
pub mod hand;
pub mod ranking;

pub use error::{LineError, ScoreError};
pub use hand::{BEST_SIZE, HAND_SIZE, Hand, PlayerScore};
pub use ranking::{Ranking, Winner, evaluate, score_lines};

// Reexport cards types.
pub use threecard_cards::{Card, CardError, Face, Suit};
