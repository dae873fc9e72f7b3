// Roster widget: the acting team's buckets in slot order.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::BoardApp;

/// Render the acting team's roster into the given area.
pub fn render(frame: &mut Frame, area: Rect, app: &BoardApp) {
    let team = &app.draft.teams[app.team_index];

    let lines: Vec<Line> = team
        .roster
        .buckets
        .iter()
        .map(|bucket| {
            let names = if bucket.players.is_empty() {
                "—".to_string()
            } else {
                bucket.players.join(", ")
            };
            Line::from(vec![
                Span::styled(
                    format!("{}: ", bucket.slot),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(names),
            ])
        })
        .collect();

    let title = format!(
        "{} ({} drafted)",
        team.team_name,
        team.roster.filled_count()
    );
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}
