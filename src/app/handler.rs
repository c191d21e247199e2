use crate::app::state::{AppState, FocusPanel};
use crate::ui::layout::{self, Hit};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

const SCROLL_STEP: usize = 5;

pub fn handle_event(state: &mut AppState, event: CEvent) {
    match event {
        CEvent::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return;
            }
            state.dirty = true;
            handle_key(state, key);
        }
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = (width, height);
            state.dirty = true;
        }
        _ => {}
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if key.code == KeyCode::Tab {
        state.cycle_focus();
        return;
    }

    // Alt+1..9 jumps straight to a channel from any panel
    if key.modifiers.contains(KeyModifiers::ALT) {
        if let KeyCode::Char(c @ '1'..='9') = key.code {
            let idx = c as usize - '1' as usize;
            if let Some(name) = state.channels.get(idx).cloned() {
                state.switch_channel(&name);
            }
            return;
        }
    }

    match state.focus {
        FocusPanel::Input => handle_input_key(state, key),
        FocusPanel::ChannelList => handle_channel_list_key(state, key),
        FocusPanel::ThemeToggle => handle_theme_toggle_key(state, key),
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => state.submit_input(),
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.input.delete_word_back();
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.input.insert_char(c);
        }
        KeyCode::Backspace => state.input.delete_back(),
        KeyCode::Delete => state.input.delete_forward(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_home(),
        KeyCode::End => state.input.move_end(),
        KeyCode::Up => state.input.history_up(),
        KeyCode::Down => state.input.history_down(),
        KeyCode::PageUp => scroll_up(state),
        KeyCode::PageDown => scroll_down(state),
        _ => {}
    }
}

fn handle_channel_list_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up => state.channel_cursor = state.channel_cursor.saturating_sub(1),
        KeyCode::Down => {
            let last = state.channels.len().saturating_sub(1);
            state.channel_cursor = (state.channel_cursor + 1).min(last);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(name) = state.channels.get(state.channel_cursor).cloned() {
                state.switch_channel(&name);
            }
        }
        KeyCode::Esc => state.focus = FocusPanel::Input,
        _ => {}
    }
}

fn handle_theme_toggle_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => state.toggle_theme(),
        KeyCode::Esc => state.focus = FocusPanel::Input,
        _ => {}
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let (width, height) = state.viewport;
    let app_layout = layout::compute_layout(Rect::new(0, 0, width, height));
    match app_layout.hit_test(mouse.column, mouse.row) {
        Some(Hit::Channel(idx)) => {
            if let Some(name) = state.channels.get(idx).cloned() {
                state.switch_channel(&name);
            }
        }
        Some(Hit::ThemeToggle) => state.toggle_theme(),
        None => {}
    }
}

fn scroll_up(state: &mut AppState) {
    let total = state.messages(&state.active_channel).len();
    let max = total.saturating_sub(1);
    state.scroll_offset = (state.scroll_offset + SCROLL_STEP).min(max);
}

fn scroll_down(state: &mut AppState) {
    state.scroll_offset = state.scroll_offset.saturating_sub(SCROLL_STEP);
}
