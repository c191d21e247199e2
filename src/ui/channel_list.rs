use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == FocusPanel::ChannelList;
    let border_style = if focused {
        theme.border_focused()
    } else {
        theme.border()
    };

    let block = Block::default()
        .title(" Channels ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = state
        .channels
        .iter()
        .enumerate()
        .map(|(i, name)| {
            // Exactly one entry carries the active marker
            let is_active = *name == state.active_channel;
            let marker = if is_active { "▸ " } else { "  " };
            let mut style = if is_active {
                theme.channel_active()
            } else {
                theme.channel_normal()
            };
            if focused && i == state.channel_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(vec![
                Span::styled(marker, theme.accent()),
                Span::styled(name.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
