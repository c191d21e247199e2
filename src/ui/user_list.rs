use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

/// Decorative roster: one color-coded row per fixed user, no interaction.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(format!(" Users ({}) ", state.users.len()))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border());

    let items: Vec<ListItem> = state
        .users
        .iter()
        .map(|nick| {
            ListItem::new(Line::from(vec![
                Span::styled(" · ", theme.text_muted()),
                Span::styled(nick.clone(), theme.nick_color(nick)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
