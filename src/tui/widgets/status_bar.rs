// Status bar widget: source, acting team, and one-shot feedback.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{BoardApp, InputMode};

/// Render the top status line.
pub fn render(frame: &mut Frame, area: Rect, app: &BoardApp) {
    let text = status_text(app);
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default().fg(Color::White),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// The status line content. Rename mode shows the live input buffer;
/// otherwise the latest action feedback, if any.
fn status_text(app: &BoardApp) -> String {
    let base = format!(
        " Source: {} | Team: {} | {} players",
        app.source,
        app.current_team_name(),
        app.players().len()
    );

    match app.mode {
        InputMode::Rename => format!("{} | Rename: {}_", base, app.rename_input),
        InputMode::Normal => match &app.status {
            Some(message) => format!("{} | {}", base, message),
            None => base,
        },
    }
}
