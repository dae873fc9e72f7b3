// Roster construction and bucket assignment.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::player::{PlayerKey, Position};

/// A roster slot designation. FLEX is the fallback bucket for positions
/// without a dedicated slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Quarterback,
    RunningBack,
    WideReceiver,
    TightEnd,
    Flex,
}

impl Slot {
    /// Parse a slot string from the roster config.
    pub fn from_str_slot(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Slot::Quarterback),
            "RB" => Some(Slot::RunningBack),
            "WR" => Some(Slot::WideReceiver),
            "TE" => Some(Slot::TightEnd),
            "FLEX" => Some(Slot::Flex),
            _ => None,
        }
    }

    /// The dedicated slot for a player position.
    pub fn for_position(pos: Position) -> Self {
        match pos {
            Position::Quarterback => Slot::Quarterback,
            Position::RunningBack => Slot::RunningBack,
            Position::WideReceiver => Slot::WideReceiver,
            Position::TightEnd => Slot::TightEnd,
        }
    }

    pub fn display_str(&self) -> &'static str {
        match self {
            Slot::Quarterback => "QB",
            Slot::RunningBack => "RB",
            Slot::WideReceiver => "WR",
            Slot::TightEnd => "TE",
            Slot::Flex => "FLEX",
        }
    }

    /// Deterministic ordering index for bucket display.
    pub fn sort_order(&self) -> u8 {
        match self {
            Slot::Quarterback => 0,
            Slot::RunningBack => 1,
            Slot::WideReceiver => 2,
            Slot::TightEnd => 3,
            Slot::Flex => 4,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// One roster bucket: a slot designation and the drafted names in it,
/// in draft order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterBucket {
    pub slot: Slot,
    pub players: Vec<String>,
}

/// A team's roster, one bucket per configured slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub buckets: Vec<RosterBucket>,
}

impl Roster {
    /// Create an empty roster with the given slots, deduplicated and in
    /// deterministic display order.
    pub fn new(slots: &[Slot]) -> Self {
        let mut unique: Vec<Slot> = Vec::new();
        for &slot in slots {
            if !unique.contains(&slot) {
                unique.push(slot);
            }
        }
        unique.sort_by_key(|s| s.sort_order());

        Roster {
            buckets: unique
                .into_iter()
                .map(|slot| RosterBucket {
                    slot,
                    players: Vec::new(),
                })
                .collect(),
        }
    }

    fn bucket_mut(&mut self, slot: Slot) -> Option<&mut RosterBucket> {
        self.buckets.iter_mut().find(|b| b.slot == slot)
    }

    /// The bucket a position drafts into: the dedicated slot when the roster
    /// has one, FLEX otherwise.
    fn target_slot(&self, pos: Position) -> Option<Slot> {
        let dedicated = Slot::for_position(pos);
        if self.buckets.iter().any(|b| b.slot == dedicated) {
            Some(dedicated)
        } else if self.buckets.iter().any(|b| b.slot == Slot::Flex) {
            Some(Slot::Flex)
        } else {
            None
        }
    }

    /// Add a player to the bucket matching their position (or FLEX).
    ///
    /// Idempotent: a name already present (by identity key) is not appended
    /// again. Returns `false` only when the roster has no bucket that can
    /// hold the position.
    pub fn add(&mut self, name: &str, pos: Position) -> bool {
        let key = PlayerKey::new(name);
        let Some(bucket) = self.target_slot(pos).and_then(|slot| self.bucket_mut(slot)) else {
            return false;
        };
        if !bucket.players.iter().any(|n| PlayerKey::new(n) == key) {
            bucket.players.push(name.to_string());
        }
        true
    }

    /// Remove a player from the bucket matching their position, falling back
    /// to FLEX when the dedicated bucket does not hold them. Returns whether
    /// anything was removed.
    pub fn remove(&mut self, name: &str, pos: Position) -> bool {
        let key = PlayerKey::new(name);
        let dedicated = Slot::for_position(pos);
        for slot in [dedicated, Slot::Flex] {
            if let Some(bucket) = self.bucket_mut(slot) {
                let before = bucket.players.len();
                bucket.players.retain(|n| PlayerKey::new(n) != key);
                if bucket.players.len() != before {
                    return true;
                }
            }
        }
        false
    }

    /// Whether any bucket holds this player (by identity key).
    pub fn contains(&self, name: &str) -> bool {
        let key = PlayerKey::new(name);
        self.buckets
            .iter()
            .any(|b| b.players.iter().any(|n| PlayerKey::new(n) == key))
    }

    /// The names in a given bucket, if the roster has it.
    pub fn bucket(&self, slot: Slot) -> Option<&[String]> {
        self.buckets
            .iter()
            .find(|b| b.slot == slot)
            .map(|b| b.players.as_slice())
    }

    /// Total drafted players across all buckets.
    pub fn filled_count(&self) -> usize {
        self.buckets.iter().map(|b| b.players.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_slots() -> Vec<Slot> {
        vec![
            Slot::Quarterback,
            Slot::RunningBack,
            Slot::WideReceiver,
            Slot::TightEnd,
            Slot::Flex,
        ]
    }

    #[test]
    fn new_roster_is_empty_with_ordered_buckets() {
        let roster = Roster::new(&standard_slots());
        assert_eq!(roster.buckets.len(), 5);
        assert_eq!(roster.filled_count(), 0);
        let order: Vec<Slot> = roster.buckets.iter().map(|b| b.slot).collect();
        assert_eq!(order, standard_slots());
    }

    #[test]
    fn new_roster_dedupes_slots() {
        let roster = Roster::new(&[Slot::Quarterback, Slot::Quarterback, Slot::Flex]);
        assert_eq!(roster.buckets.len(), 2);
    }

    #[test]
    fn add_places_in_dedicated_bucket() {
        let mut roster = Roster::new(&standard_slots());
        assert!(roster.add("Bijan Robinson", Position::RunningBack));
        assert_eq!(
            roster.bucket(Slot::RunningBack).unwrap(),
            &["Bijan Robinson".to_string()]
        );
        assert!(roster.bucket(Slot::Flex).unwrap().is_empty());
    }

    #[test]
    fn add_falls_back_to_flex_without_dedicated_bucket() {
        // A league without a TE slot routes tight ends to FLEX.
        let mut roster = Roster::new(&[Slot::Quarterback, Slot::RunningBack, Slot::Flex]);
        assert!(roster.add("Sam LaPorta", Position::TightEnd));
        assert_eq!(
            roster.bucket(Slot::Flex).unwrap(),
            &["Sam LaPorta".to_string()]
        );
    }

    #[test]
    fn add_fails_with_no_eligible_bucket() {
        let mut roster = Roster::new(&[Slot::Quarterback]);
        assert!(!roster.add("Sam LaPorta", Position::TightEnd));
        assert_eq!(roster.filled_count(), 0);
    }

    #[test]
    fn add_is_idempotent() {
        let mut roster = Roster::new(&standard_slots());
        for _ in 0..3 {
            assert!(roster.add("CeeDee Lamb", Position::WideReceiver));
        }
        assert_eq!(roster.bucket(Slot::WideReceiver).unwrap().len(), 1);
    }

    #[test]
    fn add_dedupes_by_identity_key() {
        let mut roster = Roster::new(&standard_slots());
        roster.add("Odell Beckham Jr.", Position::WideReceiver);
        roster.add("odell beckham", Position::WideReceiver);
        assert_eq!(roster.bucket(Slot::WideReceiver).unwrap().len(), 1);
    }

    #[test]
    fn remove_clears_dedicated_bucket() {
        let mut roster = Roster::new(&standard_slots());
        roster.add("Jalen Hurts", Position::Quarterback);
        assert!(roster.remove("Jalen Hurts", Position::Quarterback));
        assert!(roster.bucket(Slot::Quarterback).unwrap().is_empty());
    }

    #[test]
    fn remove_falls_back_to_flex() {
        let mut roster = Roster::new(&[Slot::Quarterback, Slot::Flex]);
        roster.add("Travis Kelce", Position::TightEnd);
        assert!(roster.remove("Travis Kelce", Position::TightEnd));
        assert!(roster.bucket(Slot::Flex).unwrap().is_empty());
    }

    #[test]
    fn remove_missing_player_is_noop() {
        let mut roster = Roster::new(&standard_slots());
        roster.add("Tyreek Hill", Position::WideReceiver);
        assert!(!roster.remove("Davante Adams", Position::WideReceiver));
        assert_eq!(roster.filled_count(), 1);
    }

    #[test]
    fn contains_matches_across_buckets() {
        let mut roster = Roster::new(&standard_slots());
        roster.add("Josh Allen", Position::Quarterback);
        assert!(roster.contains("Josh Allen"));
        assert!(roster.contains("josh allen"));
        assert!(!roster.contains("Keenan Allen"));
    }
}
