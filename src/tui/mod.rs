// TUI: terminal setup, the event loop, and frame rendering.
//
// The loop multiplexes crossterm key events with a ~30 fps render tick in a
// `tokio::select!`. Every mutation from the input handler is visible on the
// next tick; the grid is redrawn in full each frame, which is comfortably
// cheap at this data scale.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{BoardApp, InputMode};
use layout::{build_layout, BoardLayout};

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs the select loop: keyboard input and render ticks.
/// 4. Restores the terminal on exit.
pub async fn run(mut app: BoardApp) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal before the default panic output, otherwise the
    // message lands inside the alternate screen and vanishes.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if input::handle_key(key_event, &mut app) {
                            break;
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events need no handling; the next
                        // render tick picks up the new frame size.
                    }
                    Some(Err(_)) | None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &app))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

/// Render the complete board frame.
fn render_frame(frame: &mut Frame, app: &BoardApp) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, app);
    widgets::board::render(frame, layout.board, app);
    widgets::roster::render(frame, layout.roster, app);
    render_help_bar(frame, &layout, app);
}

fn render_help_bar(frame: &mut Frame, layout: &BoardLayout, app: &BoardApp) {
    let text = match app.mode {
        InputMode::Normal => {
            " q:Quit | Arrows:Move | Enter:Draft/Release | Tab:Team | 1-5:Source | r:Rename"
        }
        InputMode::Rename => " Enter:Save | Esc:Cancel",
    };
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use crate::sources::Source;

    #[test]
    fn full_frame_renders_without_panicking() {
        let app = test_app();
        let backend = ratatui::backend::TestBackend::new(140, 50);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|frame| render_frame(frame, &app)).unwrap();
    }

    #[test]
    fn full_frame_renders_with_empty_source() {
        let mut app = test_app();
        app.select_source(Source::Sleeper);
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|frame| render_frame(frame, &app)).unwrap();
    }

    #[test]
    fn full_frame_renders_in_rename_mode() {
        let mut app = test_app();
        app.begin_rename();
        app.rename_push('x');
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|frame| render_frame(frame, &app)).unwrap();
    }
}
