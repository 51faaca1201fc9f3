// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Three-card game card types.
//!
//! A card is written as a face followed by a single suit letter, both case
//! insensitive, for example `KD`, `10h` or `as`:
//!
//! ```
//! # use threecard_cards::{Card, Face, Suit};
//! let kd: Card = "kd".parse().unwrap();
//! assert_eq!(kd, Card::new(Face::King, Suit::Diamonds));
//! assert_eq!(kd.value(), 13);
//! assert_eq!(kd.score(), 14);
//! ```
//!
//! The token functions work directly on the text of a card and report which
//! part of the token is wrong:
//!
//! ```
//! # use threecard_cards::{CardError, card_score, face_value, is_valid_face};
//! assert!(is_valid_face("10S"));
//! assert_eq!(face_value("10S"), Ok(10));
//! assert_eq!(card_score("10S"), Ok(13));
//! assert_eq!(card_score("1S"), Err(CardError::InvalidFace("1S".to_string())));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{
    Card, CardError, Face, Suit, card_score, face_value, is_valid_face, is_valid_suit,
};
