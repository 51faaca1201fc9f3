// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card definitions and scoring tables.
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors returned when a card token cannot be scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The token face is not one of `2`-`10`, `J`, `Q`, `K`, `A`.
    #[error("invalid card face in '{0}', expected one of A, J, Q, K, 2 to 10")]
    InvalidFace(String),
    /// The token suit is not one of `D`, `H`, `S`, `C`.
    #[error("invalid card suit in '{0}', expected one of D, H, S, C")]
    InvalidSuit(String),
}

/// A three-card game card.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Card {
    face: Face,
    suit: Suit,
}

impl Card {
    /// Create a card given a face and suit.
    pub const fn new(face: Face, suit: Suit) -> Card {
        Card { face, suit }
    }

    /// Returns the card face.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The card face value.
    pub fn value(&self) -> u32 {
        self.face.value()
    }

    /// The card face value plus the suit weight.
    pub fn score(&self) -> u32 {
        self.face.value() + self.suit.weight()
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card token, the face is checked before the suit.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (face, suit) = split_token(token);
        let face = face
            .parse::<Face>()
            .map_err(|_| CardError::InvalidFace(token.to_string()))?;
        let suit = suit
            .parse::<Suit>()
            .map_err(|_| CardError::InvalidSuit(token.to_string()))?;
        Ok(Card::new(face, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.face, self.suit)
    }
}

/// Card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Two
    Two,
    /// Three
    Three,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Face {
    /// Returns all faces.
    pub fn faces() -> impl DoubleEndedIterator<Item = Face> {
        use Face::*;
        [
            Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The face value used for scoring.
    ///
    /// Ace and Jack are both worth 11 and the King is the highest face.
    pub const fn value(&self) -> u32 {
        match self {
            Face::Two => 2,
            Face::Three => 3,
            Face::Four => 4,
            Face::Five => 5,
            Face::Six => 6,
            Face::Seven => 7,
            Face::Eight => 8,
            Face::Nine => 9,
            Face::Ten => 10,
            Face::Jack => 11,
            Face::Queen => 12,
            Face::King => 13,
            Face::Ace => 11,
        }
    }
}

impl FromStr for Face {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let face = match s.to_ascii_uppercase().as_str() {
            "2" => Face::Two,
            "3" => Face::Three,
            "4" => Face::Four,
            "5" => Face::Five,
            "6" => Face::Six,
            "7" => Face::Seven,
            "8" => Face::Eight,
            "9" => Face::Nine,
            "10" => Face::Ten,
            "J" => Face::Jack,
            "Q" => Face::Queen,
            "K" => Face::King,
            "A" => Face::Ace,
            _ => return Err(CardError::InvalidFace(s.to_string())),
        };

        Ok(face)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = match self {
            Face::Two => "2",
            Face::Three => "3",
            Face::Four => "4",
            Face::Five => "5",
            Face::Six => "6",
            Face::Seven => "7",
            Face::Eight => "8",
            Face::Nine => "9",
            Face::Ten => "10",
            Face::Jack => "J",
            Face::Queen => "Q",
            Face::King => "K",
            Face::Ace => "A",
        };

        write!(f, "{face}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs].into_iter()
    }

    /// The suit weight added to the face value to break ties.
    pub const fn weight(&self) -> u32 {
        match self {
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
            Suit::Clubs => 4,
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            'C' => Ok(Suit::Clubs),
            _ => Err(CardError::InvalidSuit(c.to_string())),
        }
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::try_from(c),
            _ => Err(CardError::InvalidSuit(s.to_string())),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
        };

        write!(f, "{suit}")
    }
}

/// Splits a token into its face and its trailing suit character.
fn split_token(token: &str) -> (&str, &str) {
    match token.char_indices().next_back() {
        Some((idx, _)) => token.split_at(idx),
        None => ("", ""),
    }
}

/// Checks if the token without its last character is a known face.
pub fn is_valid_face(token: &str) -> bool {
    split_token(token).0.parse::<Face>().is_ok()
}

/// Checks if the last character of the token is a known suit.
pub fn is_valid_suit(token: &str) -> bool {
    split_token(token).1.parse::<Suit>().is_ok()
}

/// Returns the face value of a card token.
pub fn face_value(token: &str) -> Result<u32, CardError> {
    split_token(token)
        .0
        .parse::<Face>()
        .map(|face| face.value())
        .map_err(|_| CardError::InvalidFace(token.to_string()))
}

/// Returns the face value plus the suit weight of a card token.
///
/// Face errors take precedence over suit errors.
pub fn card_score(token: &str) -> Result<u32, CardError> {
    token.parse::<Card>().map(|card| card.score())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_values() {
        let values = Face::faces().map(|f| f.value()).collect::<Vec<_>>();
        assert_eq!(values, [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 11]);
    }

    #[test]
    fn suit_weights() {
        let weights = Suit::suits().map(|s| s.weight()).collect::<Vec<_>>();
        assert_eq!(weights, [1, 2, 3, 4]);
    }

    #[test]
    fn parse_faces_and_suits() {
        for face in Face::faces() {
            assert_eq!(face.to_string().parse::<Face>(), Ok(face));
            assert_eq!(face.to_string().to_lowercase().parse::<Face>(), Ok(face));
        }

        for suit in Suit::suits() {
            assert_eq!(suit.to_string().parse::<Suit>(), Ok(suit));
            assert_eq!(suit.to_string().to_lowercase().parse::<Suit>(), Ok(suit));
        }

        assert!("1".parse::<Face>().is_err());
        assert!("T".parse::<Face>().is_err());
        assert!("11".parse::<Face>().is_err());
        assert!("".parse::<Face>().is_err());
        assert!("X".parse::<Suit>().is_err());
        assert!("DD".parse::<Suit>().is_err());
        assert!("".parse::<Suit>().is_err());
    }

    #[test]
    fn parse_card() {
        let c = "KD".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Face::King, Suit::Diamonds));
        assert_eq!(c.value(), 13);
        assert_eq!(c.score(), 14);

        let c = "10c".parse::<Card>().unwrap();
        assert_eq!(c.face(), Face::Ten);
        assert_eq!(c.suit(), Suit::Clubs);
        assert_eq!(c.score(), 14);

        let c = "aS".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Face::Ace, Suit::Spades));
        assert_eq!(c.score(), 14);
    }

    #[test]
    fn case_insensitive_tokens() {
        assert_eq!(face_value("kd"), face_value("KD"));
        assert_eq!(card_score("kd"), card_score("KD"));
        assert_eq!(card_score("Jh"), Ok(13));
        assert!(is_valid_face("q1"));
        assert!(is_valid_suit("qs"));
    }

    #[test]
    fn ten_token() {
        assert!(is_valid_face("10D"));
        assert!(is_valid_suit("10D"));
        assert_eq!(face_value("10D"), Ok(10));
        assert_eq!(card_score("10D"), Ok(11));
    }

    #[test]
    fn invalid_tokens() {
        assert!(!is_valid_face("1D"));
        assert_eq!(face_value("1D"), Err(CardError::InvalidFace("1D".to_string())));

        assert!(!is_valid_suit("KX"));
        assert_eq!(face_value("KX"), Ok(13));
        assert_eq!(card_score("KX"), Err(CardError::InvalidSuit("KX".to_string())));

        // The face is checked first.
        assert_eq!(card_score("1X"), Err(CardError::InvalidFace("1X".to_string())));

        // Too short to have a face.
        assert!(!is_valid_face("D"));
        assert!(!is_valid_face(""));
        assert!(!is_valid_suit(""));
        assert_eq!(card_score(""), Err(CardError::InvalidFace(String::new())));

        // Multi byte characters are split on char boundaries.
        assert!(is_valid_face("Kä"));
        assert!(!is_valid_suit("Kä"));
        assert!(!is_valid_face("éD"));
        assert!(is_valid_suit("éD"));
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Face::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");
        assert_eq!(format!("{c:?}"), "Card(KD)");

        let c = Card::new(Face::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10H");

        let c = "js".parse::<Card>().unwrap();
        assert_eq!(c.to_string(), "JS");
    }
}
