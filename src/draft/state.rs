// Draft state: ownership mapping, team rosters, team naming.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::player::{Player, PlayerKey};
use super::roster::{Roster, Slot};

/// The state of a single team on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamState {
    /// Team identifier (e.g. "team1").
    pub team_id: String,
    /// Display name of the team.
    pub team_name: String,
    /// The team's position-bucketed roster.
    pub roster: Roster,
}

/// The result of toggling a player's draft status for a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The player was unowned and is now on the acting team's roster.
    Drafted,
    /// The acting team owned the player and released them.
    Undrafted,
    /// Another team owns the player; nothing changed.
    OwnedByOther,
}

/// The complete state of the draft board.
///
/// Explicitly constructed and owned by the app loop; all mutation goes
/// through the methods below. Ownership keys off `PlayerKey` so the same
/// real-world player cannot be drafted twice across different ranking feeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftState {
    /// All teams, in league order. Ids are `team1..teamN`.
    pub teams: Vec<TeamState>,
    /// Player identity -> owning team id.
    owners: HashMap<PlayerKey, String>,
}

impl DraftState {
    /// Create a draft state with `num_teams` empty rosters built from the
    /// configured slots. Default display names are `Team 1..Team N`.
    pub fn new(num_teams: usize, slots: &[Slot]) -> Self {
        let teams = (1..=num_teams)
            .map(|i| TeamState {
                team_id: format!("team{i}"),
                team_name: format!("Team {i}"),
                roster: Roster::new(slots),
            })
            .collect();

        DraftState {
            teams,
            owners: HashMap::new(),
        }
    }

    /// The owning team id for a player, if drafted.
    pub fn owner_of(&self, player: &Player) -> Option<&str> {
        self.owner_of_key(&player.key())
    }

    /// The owning team id for an identity key, if drafted.
    pub fn owner_of_key(&self, key: &PlayerKey) -> Option<&str> {
        self.owners.get(key).map(String::as_str)
    }

    /// Draft a player for a team.
    ///
    /// A player already owned by a different team is left untouched and the
    /// call is a no-op. Drafting a player the team already owns is
    /// idempotent. Returns whether the player is owned by the team after the
    /// call.
    pub fn draft(&mut self, player: &Player, team_id: &str) -> bool {
        let key = player.key();
        if let Some(owner) = self.owners.get(&key) {
            if owner != team_id {
                debug!(
                    "ignoring draft of '{}' by {}: owned by {}",
                    player.name, team_id, owner
                );
                return false;
            }
        }

        let Some(team) = self.team_mut(team_id) else {
            debug!("ignoring draft by unknown team '{}'", team_id);
            return false;
        };
        if !team.roster.add(&player.name, player.position) {
            return false;
        }
        self.owners.insert(key, team_id.to_string());
        true
    }

    /// Release a player from a team.
    ///
    /// The same ownership predicate guards both mutation paths: a team that
    /// does not currently own the player cannot remove them, so rosters and
    /// the ownership map never disagree. Returns whether anything changed.
    pub fn undraft(&mut self, player: &Player, team_id: &str) -> bool {
        let key = player.key();
        match self.owners.get(&key) {
            Some(owner) if owner == team_id => {}
            _ => {
                debug!(
                    "ignoring undraft of '{}' by {}: not the owner",
                    player.name, team_id
                );
                return false;
            }
        }

        if let Some(team) = self.team_mut(team_id) {
            team.roster.remove(&player.name, player.position);
        }
        self.owners.remove(&key);
        true
    }

    /// The cell-click semantic: draft when unowned, release when owned by
    /// the acting team, ignore when owned elsewhere.
    pub fn toggle(&mut self, player: &Player, team_id: &str) -> ToggleOutcome {
        match self.owner_of(player) {
            Some(owner) if owner != team_id => ToggleOutcome::OwnedByOther,
            Some(_) => {
                self.undraft(player, team_id);
                ToggleOutcome::Undrafted
            }
            None => {
                self.draft(player, team_id);
                ToggleOutcome::Drafted
            }
        }
    }

    /// Replace the display name at `team_index`. Empty or whitespace-only
    /// names are rejected. Returns whether the name changed.
    pub fn rename(&mut self, team_index: usize, new_name: &str) -> bool {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return false;
        }
        let Some(team) = self.teams.get_mut(team_index) else {
            return false;
        };
        team.team_name = trimmed.to_string();
        true
    }

    /// Overwrite all display names from a stored list. Applied only when the
    /// list length matches the team count; otherwise ignored.
    pub fn apply_names(&mut self, names: &[String]) -> bool {
        if names.len() != self.teams.len() {
            return false;
        }
        for (team, name) in self.teams.iter_mut().zip(names) {
            team.team_name = name.clone();
        }
        true
    }

    /// The current display names, in league order.
    pub fn team_names(&self) -> Vec<String> {
        self.teams.iter().map(|t| t.team_name.clone()).collect()
    }

    /// Look up a team by id.
    pub fn team(&self, team_id: &str) -> Option<&TeamState> {
        self.teams.iter().find(|t| t.team_id == team_id)
    }

    fn team_mut(&mut self, team_id: &str) -> Option<&mut TeamState> {
        self.teams.iter_mut().find(|t| t.team_id == team_id)
    }

    /// Number of drafted players across all teams.
    pub fn drafted_count(&self) -> usize {
        self.owners.len()
    }
}
