use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == FocusPanel::Input;
    let border_style = if focused {
        theme.border_focused()
    } else {
        theme.border()
    };

    let block = Block::default()
        .title(format!(" {} ", state.local_nick()))
        .title_style(if focused { theme.title() } else { theme.border() })
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_text = &state.input.text;

    if focused {
        let line = Line::from(vec![
            Span::styled("❯ ", theme.accent()),
            Span::styled(input_text.as_str(), theme.input_text()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        // Cursor offset: chevron "❯ " plus the display width before the cursor
        let prompt_offset = 2u16;
        let before_cursor = input_text[..state.input.cursor].width() as u16;
        let cursor_x = inner.x + prompt_offset + before_cursor;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    } else {
        let paragraph = Paragraph::new(input_text.as_str()).style(theme.input_text());
        frame.render_widget(paragraph, inner);
    }
}
