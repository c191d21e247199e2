use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// The theme toggle control: click it, or focus it and press Enter/Space.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == FocusPanel::ThemeToggle;
    let border_style = if focused {
        theme.border_focused()
    } else {
        theme.border()
    };

    let block = Block::default()
        .title(" Theme ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let icon = match state.theme {
        crate::ui::theme::ThemeMode::Dark => "◐ ",
        crate::ui::theme::ThemeMode::Light => "◑ ",
    };

    let line = Line::from(vec![
        Span::styled(icon, theme.accent()),
        Span::styled(state.theme.label(), theme.text()),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
