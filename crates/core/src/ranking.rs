// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Players ranking and winner selection.
use ahash::AHashSet;
use log::{debug, info, warn};
use std::{cmp::Reverse, fmt};

use crate::{
    error::ScoreError,
    hand::{Hand, PlayerScore},
};

/// The game winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Winner {
    /// A single player has the highest face sum.
    ByFace {
        /// The player name.
        name: String,
        /// The player face sum.
        score: u32,
    },
    /// A single player has the highest face and suit sum among the players
    /// tied on the face sum.
    BySuit {
        /// The player name.
        name: String,
        /// The player face and suit sum.
        score: u32,
    },
    /// Players tied on both sums.
    Tie {
        /// The players names in ranking order.
        names: Vec<String>,
        /// The shared face and suit sum.
        score: u32,
    },
}

impl Winner {
    /// The winners names.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Winner::ByFace { name, .. } | Winner::BySuit { name, .. } => vec![name.as_str()],
            Winner::Tie { names, .. } => names.iter().map(String::as_str).collect(),
        }
    }

    /// The reported score.
    pub fn score(&self) -> u32 {
        match self {
            Winner::ByFace { score, .. } | Winner::BySuit { score, .. } | Winner::Tie { score, .. } => {
                *score
            }
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::ByFace { name, score } | Winner::BySuit { name, score } => {
                write!(f, "{name}:{score}")
            }
            Winner::Tie { names, score } => write!(f, "{}:{score}", names.join(",")),
        }
    }
}

/// Players sorted by face sum, highest first.
#[derive(Debug, Clone)]
pub struct Ranking {
    players: Vec<PlayerScore>,
}

impl Ranking {
    /// Creates a ranking, players with the same face sum keep their order.
    pub fn new(mut players: Vec<PlayerScore>) -> Result<Self, ScoreError> {
        if players.is_empty() {
            return Err(ScoreError::NoPlayers);
        }

        players.sort_by_key(|p| Reverse(p.face_sum()));
        Ok(Self { players })
    }

    /// The ranked players.
    pub fn players(&self) -> &[PlayerScore] {
        &self.players
    }

    /// Consumes the ranking and returns the ranked players.
    pub fn into_players(self) -> Vec<PlayerScore> {
        self.players
    }

    /// Selects the winner.
    ///
    /// The players with the highest face sum win, if more than one player has
    /// this sum the tie is broken using the face and suit sum.
    pub fn winner(&self) -> Winner {
        let by_face = leaders(&self.players, |p| p.face_sum());
        if let [player] = by_face {
            return Winner::ByFace {
                name: player.name().to_string(),
                score: player.face_sum(),
            };
        }

        let mut tied = by_face.iter().collect::<Vec<_>>();
        tied.sort_by_key(|p| Reverse(p.face_suit_sum()));

        match leaders(&tied, |p| p.face_suit_sum()) {
            [player] => Winner::BySuit {
                name: player.name().to_string(),
                score: player.face_suit_sum(),
            },
            players => Winner::Tie {
                names: players.iter().map(|p| p.name().to_string()).collect(),
                score: players[0].face_suit_sum(),
            },
        }
    }
}

/// Returns the leading items with the same key as the first item.
///
/// The items must be sorted by key, highest first.
fn leaders<T, F>(items: &[T], key: F) -> &[T]
where
    F: Fn(&T) -> u32,
{
    let Some(first) = items.first() else {
        return items;
    };

    let top = key(first);
    let count = items.iter().take_while(|&item| key(item) == top).count();
    &items[..count]
}

/// Scores player lines and ranks the players.
///
/// Stops at the first line that fails to parse or score.
pub fn score_lines<I, S>(lines: I) -> Result<Ranking, ScoreError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter().peekable();
    if lines.peek().is_none() {
        return Err(ScoreError::EmptyInput);
    }

    let players = lines
        .enumerate()
        .try_fold(Vec::new(), |mut players, (idx, line)| {
            let line_no = idx + 1;
            let hand = Hand::parse(line.as_ref()).map_err(|source| ScoreError::MalformedLine {
                line: line_no,
                source,
            })?;
            let player = PlayerScore::from_hand(hand).map_err(|source| ScoreError::Card {
                line: line_no,
                source,
            })?;

            debug!(
                "Player {} best {:?} face {} face and suit {}",
                player.name(),
                player.best(),
                player.face_sum(),
                player.face_suit_sum()
            );

            players.push(player);
            Ok::<_, ScoreError>(players)
        })?;

    let mut names = AHashSet::with_capacity(players.len());
    for player in &players {
        if !names.insert(player.name()) {
            warn!("Duplicate player name {}", player.name());
        }
    }

    Ranking::new(players)
}

/// Scores the lines of a text and returns the winner.
pub fn evaluate(text: &str) -> Result<Winner, ScoreError> {
    let ranking = score_lines(text.lines())?;
    let winner = ranking.winner();
    info!("Winner {winner}");
    Ok(winner)
}
