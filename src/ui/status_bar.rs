use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let bar = theme.status_bar();
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" [{}] ", state.local_nick()),
        bar.patch(theme.accent()),
    ));
    parts.push(Span::styled(format!(" {} ", state.status_line()), bar));
    parts.push(Span::styled(
        " Tab focus · Alt+1..3 channels · Ctrl+C quit ",
        bar.patch(theme.text_muted()),
    ));

    let focus_name = match state.focus {
        FocusPanel::Input => "INPUT",
        FocusPanel::ChannelList => "CHANNELS",
        FocusPanel::ThemeToggle => "THEME",
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), bar));
    parts.push(Span::styled(format!(" [{}] ", focus_name), bar));

    let paragraph = Paragraph::new(Line::from(parts)).style(bar);
    frame.render_widget(paragraph, area);
}
