// Application state and user-intent handling.
//
// `BoardApp` owns the draft state, the loaded rankings, and the view
// selection (source, acting team, cursor). The TUI translates key events
// into the methods below; every mutation is picked up by the next render
// tick, which redraws the full grid.

use anyhow::Result;
use tracing::{info, warn};

use crate::board;
use crate::config::Config;
use crate::db::Database;
use crate::draft::player::Player;
use crate::draft::state::{DraftState, ToggleOutcome};
use crate::sources::{RankingSet, Source, ALL_SOURCES};

/// Input interpretation mode for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing a new name for the acting team.
    Rename,
}

pub struct BoardApp {
    pub config: Config,
    pub rankings: RankingSet,
    pub draft: DraftState,
    pub db: Database,
    /// The ranking feed currently displayed.
    pub source: Source,
    /// Index into `draft.teams` for the acting team.
    pub team_index: usize,
    pub cursor_row: usize,
    pub cursor_col: usize,
    pub mode: InputMode,
    /// Buffer for the in-progress rename.
    pub rename_input: String,
    /// One-shot feedback line for the status bar.
    pub status: Option<String>,
}

impl BoardApp {
    pub fn new(config: Config, rankings: RankingSet, draft: DraftState, db: Database) -> Self {
        BoardApp {
            config,
            rankings,
            draft,
            db,
            source: Source::Espn,
            team_index: 0,
            cursor_row: 0,
            cursor_col: 0,
            mode: InputMode::Normal,
            rename_input: String::new(),
            status: None,
        }
    }

    /// The players of the displayed source, in feed order.
    pub fn players(&self) -> &[Player] {
        self.rankings.players(self.source)
    }

    pub fn current_team_id(&self) -> &str {
        &self.draft.teams[self.team_index].team_id
    }

    pub fn current_team_name(&self) -> &str {
        &self.draft.teams[self.team_index].team_name
    }

    pub fn select_source(&mut self, source: Source) {
        self.source = source;
        self.status = None;
    }

    /// Map the 1-5 number keys onto sources in display order.
    pub fn select_source_by_number(&mut self, n: usize) {
        if let Some(&source) = ALL_SOURCES.get(n.wrapping_sub(1)) {
            self.select_source(source);
        }
    }

    pub fn next_team(&mut self) {
        self.team_index = (self.team_index + 1) % self.draft.teams.len();
        self.status = None;
    }

    pub fn prev_team(&mut self) {
        let count = self.draft.teams.len();
        self.team_index = (self.team_index + count - 1) % count;
        self.status = None;
    }

    /// Move the cursor, clamped to the board.
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let max_row = self.config.board.rows - 1;
        let max_col = self.config.board.cols - 1;
        self.cursor_row = self
            .cursor_row
            .saturating_add_signed(d_row)
            .min(max_row);
        self.cursor_col = self
            .cursor_col
            .saturating_add_signed(d_col)
            .min(max_col);
    }

    /// The player in the cell under the cursor, if the cell is populated.
    pub fn player_under_cursor(&self) -> Option<&Player> {
        let players = self.players();
        board::player_at(
            players.len(),
            self.cursor_row,
            self.cursor_col,
            self.config.board.cols,
        )
        .map(|i| &players[i])
    }

    /// Toggle the draft status of the player under the cursor for the acting
    /// team. A cell owned by another team reports the owner instead.
    pub fn toggle_at_cursor(&mut self) {
        let Some(player) = self.player_under_cursor().cloned() else {
            return;
        };
        let team_id = self.current_team_id().to_string();

        match self.draft.toggle(&player, &team_id) {
            ToggleOutcome::Drafted => {
                info!("{} drafted {}", team_id, player.name);
                self.status = Some(format!("Drafted {}", player.name));
            }
            ToggleOutcome::Undrafted => {
                info!("{} released {}", team_id, player.name);
                self.status = Some(format!("Released {}", player.name));
            }
            ToggleOutcome::OwnedByOther => {
                let owner = self
                    .draft
                    .owner_of(&player)
                    .and_then(|id| self.draft.team(id))
                    .map(|t| t.team_name.clone())
                    .unwrap_or_default();
                self.status = Some(format!("{} already drafted by {}", player.name, owner));
            }
        }
    }

    pub fn begin_rename(&mut self) {
        self.mode = InputMode::Rename;
        self.rename_input.clear();
        self.status = None;
    }

    pub fn rename_push(&mut self, c: char) {
        self.rename_input.push(c);
    }

    pub fn rename_backspace(&mut self) {
        self.rename_input.pop();
    }

    pub fn cancel_rename(&mut self) {
        self.mode = InputMode::Normal;
        self.rename_input.clear();
    }

    /// Commit the rename buffer to the acting team and persist the name list.
    /// An empty buffer is rejected by the draft state and changes nothing.
    pub fn commit_rename(&mut self) {
        if self.draft.rename(self.team_index, &self.rename_input) {
            if let Err(e) = self.db.save_team_names(&self.draft.team_names()) {
                warn!("failed to persist team names: {e:#}");
            }
            self.status = Some(format!("Renamed to {}", self.rename_input.trim()));
        }
        self.mode = InputMode::Normal;
        self.rename_input.clear();
    }
}

/// Apply a previously saved team-name list, if one exists and matches the
/// configured team count. Returns whether names were applied.
pub fn restore_team_names(app: &mut BoardApp) -> Result<bool> {
    let Some(names) = app.db.load_team_names()? else {
        return Ok(false);
    };
    if app.draft.apply_names(&names) {
        info!("restored {} team names from previous session", names.len());
        Ok(true)
    } else {
        warn!(
            "ignoring stored team names: {} entries for {} teams",
            names.len(),
            app.draft.teams.len()
        );
        Ok(false)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::sources::mock;

    /// A 12-team app on mock ESPN data with an in-memory database.
    pub fn test_app() -> BoardApp {
        let config = Config::default();
        let mut rankings = RankingSet::default();
        rankings.insert(Source::Espn, mock::generate("ESPN"));
        let draft = DraftState::new(
            config.league.num_teams,
            &config.roster.parsed_slots(),
        );
        let db = Database::open(":memory:").unwrap();
        BoardApp::new(config, rankings, draft, db)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::test_app;
    use super::*;

    #[test]
    fn starts_on_espn_with_first_team() {
        let app = test_app();
        assert_eq!(app.source, Source::Espn);
        assert_eq!(app.current_team_id(), "team1");
        assert_eq!(app.players().len(), 180);
    }

    #[test]
    fn select_source_by_number_maps_display_order() {
        let mut app = test_app();
        app.select_source_by_number(1);
        assert_eq!(app.source, Source::FantasyPros);
        app.select_source_by_number(5);
        assert_eq!(app.source, Source::RotoViz);
        // Out-of-range numbers leave the selection alone.
        app.select_source_by_number(9);
        assert_eq!(app.source, Source::RotoViz);
    }

    #[test]
    fn team_cycling_wraps() {
        let mut app = test_app();
        app.prev_team();
        assert_eq!(app.current_team_id(), "team12");
        app.next_team();
        assert_eq!(app.current_team_id(), "team1");
    }

    #[test]
    fn cursor_clamps_to_board_edges() {
        let mut app = test_app();
        app.move_cursor(-1, -1);
        assert_eq!((app.cursor_row, app.cursor_col), (0, 0));
        app.move_cursor(100, 100);
        assert_eq!((app.cursor_row, app.cursor_col), (14, 11));
    }

    #[test]
    fn cursor_follows_snake_order() {
        let mut app = test_app();
        // Row 1, rightmost column is pick 13 on a 12-wide board.
        app.move_cursor(1, 0);
        app.cursor_col = 11;
        let player = app.player_under_cursor().unwrap();
        assert_eq!(player.id, "ESPN-12");
    }

    #[test]
    fn toggle_drafts_and_releases() {
        let mut app = test_app();
        let name = app.player_under_cursor().unwrap().name.clone();

        app.toggle_at_cursor();
        assert_eq!(app.draft.drafted_count(), 1);
        assert_eq!(app.status.as_deref(), Some(format!("Drafted {name}").as_str()));

        app.toggle_at_cursor();
        assert_eq!(app.draft.drafted_count(), 0);
    }

    #[test]
    fn toggle_on_foreign_pick_reports_owner() {
        let mut app = test_app();
        app.toggle_at_cursor();
        app.next_team();
        app.toggle_at_cursor();

        assert_eq!(app.draft.drafted_count(), 1);
        let status = app.status.clone().unwrap();
        assert!(status.contains("already drafted by Team 1"), "{status}");
    }

    #[test]
    fn empty_cell_toggle_is_noop() {
        let mut app = test_app();
        app.rankings.insert(Source::Espn, Vec::new());
        app.toggle_at_cursor();
        assert_eq!(app.draft.drafted_count(), 0);
        assert!(app.status.is_none());
    }

    #[test]
    fn rename_flow_commits_and_persists() {
        let mut app = test_app();
        app.begin_rename();
        assert_eq!(app.mode, InputMode::Rename);
        for c in "Wolves".chars() {
            app.rename_push(c);
        }
        app.commit_rename();

        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.current_team_name(), "Wolves");
        let stored = app.db.load_team_names().unwrap().unwrap();
        assert_eq!(stored[0], "Wolves");
    }

    #[test]
    fn empty_rename_is_rejected_and_not_persisted() {
        let mut app = test_app();
        app.begin_rename();
        app.commit_rename();
        assert_eq!(app.current_team_name(), "Team 1");
        assert!(app.db.load_team_names().unwrap().is_none());
    }

    #[test]
    fn rename_backspace_edits_buffer() {
        let mut app = test_app();
        app.begin_rename();
        app.rename_push('a');
        app.rename_push('b');
        app.rename_backspace();
        assert_eq!(app.rename_input, "a");
        app.cancel_rename();
        assert_eq!(app.mode, InputMode::Normal);
        assert!(app.rename_input.is_empty());
    }

    #[test]
    fn restore_applies_matching_name_list() {
        let mut app = test_app();
        let names: Vec<String> = (1..=12).map(|i| format!("Squad {i}")).collect();
        app.db.save_team_names(&names).unwrap();

        assert!(restore_team_names(&mut app).unwrap());
        assert_eq!(app.current_team_name(), "Squad 1");
    }

    #[test]
    fn restore_ignores_length_mismatch() {
        let mut app = test_app();
        app.db
            .save_team_names(&["Only".to_string(), "Two".to_string()])
            .unwrap();

        assert!(!restore_team_names(&mut app).unwrap());
        assert_eq!(app.current_team_name(), "Team 1");
    }
}
