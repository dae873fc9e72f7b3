// Board grid widget: the snake-ordered player cells.

use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::BoardApp;
use crate::board::player_at;
use crate::draft::player::Player;

/// Render the draft board grid into the given area.
///
/// Cells walk the player list in snake order. An empty source renders a
/// notice instead of a bare grid.
pub fn render(frame: &mut Frame, area: Rect, app: &BoardApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Draft Board [{}]", app.source));

    let players = app.players();
    if players.is_empty() {
        let notice = Paragraph::new(format!("No data available for {}", app.source))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(notice, area);
        return;
    }

    let rows_count = app.config.board.rows;
    let cols_count = app.config.board.cols;

    let rows: Vec<Row> = (0..rows_count)
        .map(|row| {
            let cells: Vec<Cell> = (0..cols_count)
                .map(|col| {
                    match player_at(players.len(), row, col, cols_count) {
                        Some(index) => {
                            player_cell(app, &players[index], (row, col) == (app.cursor_row, app.cursor_col))
                        }
                        None => empty_cell((row, col) == (app.cursor_row, app.cursor_col)),
                    }
                })
                .collect();
            Row::new(cells).height(3)
        })
        .collect();

    let widths = vec![Constraint::Ratio(1, cols_count as u32); cols_count];
    let table = Table::new(rows, widths).block(block);
    frame.render_widget(table, area);
}

fn player_cell(app: &BoardApp, player: &Player, under_cursor: bool) -> Cell<'static> {
    let mut style = cell_style(app, player);
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let detail = if player.bye.is_empty() {
        format!("{} {}", player.position, player.team)
    } else {
        format!("{} {} (Bye {})", player.position, player.team, player.bye)
    };

    Cell::from(Text::from(vec![
        Line::from(player.name.clone()),
        Line::from(format!("ADP {:.1}", player.adp)),
        Line::from(detail),
    ]))
    .style(style)
}

fn empty_cell(under_cursor: bool) -> Cell<'static> {
    let mut style = Style::default();
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Cell::from("").style(style)
}

/// Cell coloring: the acting team's picks stand out, other teams' picks
/// recede, and undrafted players carry their tier color.
fn cell_style(app: &BoardApp, player: &Player) -> Style {
    match app.draft.owner_of(player) {
        Some(owner) if owner == app.current_team_id() => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(_) => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
        None => Style::default().fg(tier_color(player.tier)),
    }
}

/// A repeating palette keyed by tier, echoing the board's tier bands.
fn tier_color(tier: u32) -> Color {
    const PALETTE: [Color; 6] = [
        Color::White,
        Color::Cyan,
        Color::Yellow,
        Color::Magenta,
        Color::LightBlue,
        Color::LightRed,
    ];
    PALETTE[((tier.max(1) - 1) % PALETTE.len() as u32) as usize]
}
