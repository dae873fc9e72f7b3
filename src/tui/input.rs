// Keyboard input handling.
//
// Translates crossterm key events into `BoardApp` mutations. Returns whether
// the event loop should exit.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{BoardApp, InputMode};

/// Handle a keyboard event. Returns `true` when the app should quit.
pub fn handle_key(key_event: KeyEvent, app: &mut BoardApp) -> bool {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    // Ctrl+C always quits immediately regardless of mode (escape hatch)
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return true;
    }

    if app.mode == InputMode::Rename {
        handle_rename_mode(key_event, app);
        return false;
    }

    match key_event.code {
        KeyCode::Char('q') => return true,

        // Cursor movement
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1, 0),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(0, -1),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(0, 1),

        // Draft/release the player under the cursor
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_at_cursor(),

        // Acting team selection
        KeyCode::Tab => app.next_team(),
        KeyCode::BackTab => app.prev_team(),

        // Source selection
        KeyCode::Char(c @ '1'..='5') => {
            app.select_source_by_number(c as usize - '0' as usize);
        }

        // Team rename
        KeyCode::Char('r') => app.begin_rename(),

        _ => {}
    }

    false
}

/// Rename mode captures printable characters until Enter commits or Esc
/// cancels.
fn handle_rename_mode(key_event: KeyEvent, app: &mut BoardApp) {
    match key_event.code {
        KeyCode::Enter => app.commit_rename(),
        KeyCode::Esc => app.cancel_rename(),
        KeyCode::Backspace => app.rename_backspace(),
        KeyCode::Char(c) => app.rename_push(c),
        _ => {}
    }
}
