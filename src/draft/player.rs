// Player model: normalized ranking records and cross-source identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Offensive positions eligible for the board. Kickers and team defenses are
/// filtered out at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Quarterback,
    RunningBack,
    WideReceiver,
    TightEnd,
}

impl Position {
    /// Parse a position string into a Position enum.
    ///
    /// Ranking feeds label positions with a trailing positional rank
    /// ("WR1", "RB24"); the digits are stripped before matching. Anything
    /// that is not QB/RB/WR/TE after normalization (K, DST, malformed
    /// values) returns None.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match normalize_position(s).as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            _ => None,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// Strip a trailing positional rank and uppercase ("wr12" -> "WR").
///
/// Idempotent: normalizing an already-normalized value returns it unchanged.
pub fn normalize_position(raw: &str) -> String {
    raw.trim()
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .to_uppercase()
}

/// Tier for an index-based feed: 0-based row index, one tier per 15 picks.
/// Rows 0-14 are tier 1, rows 15-29 tier 2, and so on.
pub fn tier_from_index(index: usize) -> u32 {
    (index / 15) as u32 + 1
}

/// Tier for a rank-based feed: 1-based overall rank, ceiling division by 15.
/// Ranks 1-15 are tier 1, 16-30 tier 2. A rank of 0 clamps to tier 1.
pub fn tier_from_rank(rank: u32) -> u32 {
    if rank == 0 {
        1
    } else {
        (rank + 14) / 15
    }
}

/// The cross-source identity of a player, derived from the display name.
///
/// Feeds disagree on name formatting (punctuation, generational suffixes,
/// casing), so ownership keys off a normalized form rather than the raw
/// display name or the source-qualified id. Two distinct real players who
/// share a full name collapse to one key; that collision is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerKey(String);

/// Generational suffixes dropped during key normalization.
const NAME_SUFFIXES: &[&str] = &["jr", "sr", "ii", "iii", "iv", "v"];

impl PlayerKey {
    pub fn new(name: &str) -> Self {
        let cleaned: String = name
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
        while tokens.len() > 1 && NAME_SUFFIXES.contains(&tokens[tokens.len() - 1]) {
            tokens.pop();
        }
        PlayerKey(tokens.join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A normalized ranking record. Immutable once constructed: a Player is only
/// built when name, position, and a finite ADP are all present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique within a source: `"<source>-<row index>"`.
    pub id: String,
    /// Display name as reported by the feed.
    pub name: String,
    /// NFL team abbreviation. May be empty.
    pub team: String,
    /// Bye week as text. May be empty.
    pub bye: String,
    pub position: Position,
    /// Average draft position, the rank-ordering key.
    pub adp: f64,
    /// Coarse value grouping, one tier per 15 picks. Always >= 1.
    pub tier: u32,
}

impl Player {
    /// The cross-source identity key for this player.
    pub fn key(&self) -> PlayerKey {
        PlayerKey::new(&self.name)
    }
}
