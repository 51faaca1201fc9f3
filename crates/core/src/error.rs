// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Scoring errors.
use thiserror::Error;

use threecard_cards::CardError;

/// Why a line does not have the `name:card,card,card,card,card` shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The line has no characters other than whitespace.
    #[error("the line is blank")]
    Blank,
    /// There is no `:` between the name and the cards.
    #[error("missing ':' after the player name")]
    MissingSeparator,
    /// The name is empty or not alphanumeric.
    #[error("invalid player name '{0}'")]
    InvalidName(String),
    /// The line doesn't have five cards.
    #[error("expected 5 cards, found {0}")]
    CardCount(usize),
    /// A card is not 2 or 3 alphanumeric characters.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
}

/// Errors that abort scoring a batch of lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// There are no lines to score.
    #[error("input is empty")]
    EmptyInput,
    /// A line doesn't have the expected shape.
    #[error("line {line}: malformed row, {source}")]
    MalformedLine {
        /// The 1-based line number.
        line: usize,
        /// The shape error.
        source: LineError,
    },
    /// A card on a line has an unknown face or suit.
    #[error("line {line}: {source}")]
    Card {
        /// The 1-based line number.
        line: usize,
        /// The card error.
        source: CardError,
    },
    /// Ranking was requested without players.
    #[error("no players to rank")]
    NoPlayers,
}
