// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones for the draft board:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +-----------------------------------+--------------+
// | Board Grid (75%)                  | Roster (25%) |
// |                                   |              |
// |                                   |              |
// +-----------------------------------+--------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct BoardLayout {
    /// Top row: active source, acting team, feedback messages.
    pub status_bar: Rect,
    /// The snake-ordered player grid.
    pub board: Rect,
    /// Right sidebar: the acting team's roster buckets.
    pub roster: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the board layout from the available terminal area.
pub fn build_layout(area: Rect) -> BoardLayout {
    // Vertical: status(1) | middle(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

    let status_bar = vertical[0];
    let middle = vertical[1];
    let help_bar = vertical[2];

    // Horizontal: board grid (75%) | roster sidebar (25%)
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(middle);

    BoardLayout {
        status_bar,
        board: horizontal[0],
        roster: horizontal[1],
        help_bar,
    }
}
