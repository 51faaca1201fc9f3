// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player lines parsing and best hand scoring.
use std::{array, cmp::Reverse};

use threecard_cards::{Card, CardError, face_value};

use crate::error::LineError;

/// The number of cards dealt to each player.
pub const HAND_SIZE: usize = 5;

/// The number of cards used for scoring.
pub const BEST_SIZE: usize = 3;

/// A player line split into a name and five card tokens.
///
/// The tokens have the right shape but their faces and suits are not checked
/// until the hand is scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    name: String,
    tokens: [String; HAND_SIZE],
}

impl Hand {
    /// Parses a `name:card,card,card,card,card` line.
    ///
    /// Whitespace anywhere in the line is ignored.
    pub fn parse(line: &str) -> Result<Hand, LineError> {
        let line = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();

        if line.is_empty() {
            return Err(LineError::Blank);
        }

        let (name, cards) = line.split_once(':').ok_or(LineError::MissingSeparator)?;
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(LineError::InvalidName(name.to_string()));
        }

        let tokens = cards.split(',').collect::<Vec<_>>();
        if tokens.len() != HAND_SIZE {
            return Err(LineError::CardCount(tokens.len()));
        }

        if let Some(token) = tokens.iter().find(|t| !is_card_shaped(t)) {
            return Err(LineError::InvalidCard(token.to_string()));
        }

        Ok(Hand {
            name: name.to_string(),
            tokens: array::from_fn(|idx| tokens[idx].to_string()),
        })
    }

    /// The player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The card tokens in line order.
    pub fn tokens(&self) -> &[String; HAND_SIZE] {
        &self.tokens
    }
}

fn is_card_shaped(token: &str) -> bool {
    (2..=3).contains(&token.len()) && token.chars().all(|c| c.is_ascii_alphanumeric())
}

/// A player best three cards and their sums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    name: String,
    best: [Card; BEST_SIZE],
    face_sum: u32,
    face_suit_sum: u32,
}

impl PlayerScore {
    /// Scores a hand.
    ///
    /// The best cards are the three with the highest face value, cards with the
    /// same value keep their line order. Both sums are computed over these same
    /// three cards.
    pub fn from_hand(hand: Hand) -> Result<PlayerScore, CardError> {
        // Check all faces before any suit.
        for token in &hand.tokens {
            face_value(token)?;
        }

        let mut cards = hand
            .tokens
            .iter()
            .map(|token| token.parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;

        // Stable sort.
        cards.sort_by_key(|card| Reverse(card.value()));

        let best: [Card; BEST_SIZE] = array::from_fn(|idx| cards[idx]);
        let face_sum = best.iter().map(Card::value).sum();
        let face_suit_sum = best.iter().map(Card::score).sum();

        Ok(PlayerScore {
            name: hand.name,
            best,
            face_sum,
            face_suit_sum,
        })
    }

    /// The player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The best three cards, highest face value first.
    pub fn best(&self) -> &[Card; BEST_SIZE] {
        &self.best
    }

    /// Sum of the best cards face values.
    pub fn face_sum(&self) -> u32 {
        self.face_sum
    }

    /// Sum of the best cards face values and suit weights.
    pub fn face_suit_sum(&self) -> u32 {
        self.face_suit_sum
    }
}
