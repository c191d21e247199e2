use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Single-line room name label for the active channel.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let count = state.messages(&state.active_channel).len();

    let line = Line::from(vec![
        Span::styled(" ▪ ", theme.accent()),
        Span::styled(
            state.active_channel.clone(),
            theme.accent().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", theme.text_muted()),
        Span::styled(
            format!(
                "{} message{}",
                count,
                if count == 1 { "" } else { "s" }
            ),
            theme.text_muted(),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
