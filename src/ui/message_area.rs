use crate::app::state::{AppState, Message};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let messages = state.messages(&state.active_channel);
    let available_height = inner.height as usize;
    let total = messages.len();

    // Visible window, anchored at the bottom minus the scroll offset
    let end = total.saturating_sub(state.scroll_offset.min(total));
    let start = end.saturating_sub(available_height);

    let nick_width = state.config.ui.nick_column_width;
    let ts_format = &state.config.ui.timestamp_format;

    let lines: Vec<Line> = messages[start..end]
        .iter()
        .map(|msg| format_message(msg, theme, nick_width, ts_format))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);

    if total > available_height {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(available_height)).position(start);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_symbol("┃")
            .track_symbol(Some("│"))
            .thumb_style(theme.accent())
            .track_style(theme.text_muted());
        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

/// One message row: dim time label, fixed-width color-coded author, and the
/// message text as a plain span. Text is never parsed as markup, color
/// codes, or commands — whatever was typed is what gets shown.
fn format_message<'a>(
    msg: &Message,
    theme: &Theme,
    nick_width: usize,
    ts_format: &str,
) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{} ", format_timestamp(msg.timestamp, ts_format)),
            theme.timestamp(),
        ),
        Span::styled(pad_nick(&msg.author, nick_width), theme.nick_color(&msg.author)),
        Span::styled(": ", theme.text_muted()),
        Span::styled(msg.text.clone(), theme.message_text()),
    ])
}

/// Truncate or space-pad `nick` to exactly `width` characters.
fn pad_nick(nick: &str, width: usize) -> String {
    let mut out: String = nick.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

fn format_timestamp(ms: i64, format: &str) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.with_timezone(&chrono::Local).format(format).to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeMode;

    #[test]
    fn test_pad_nick_is_always_eight_wide() {
        assert_eq!(pad_nick("alice", 8), "alice   ");
        assert_eq!(pad_nick("bob", 8), "bob     ");
        assert_eq!(pad_nick("exactly8", 8), "exactly8");
        assert_eq!(pad_nick("supercalifragilistic", 8), "supercal");
        assert_eq!(pad_nick("", 8), "        ");
        for nick in ["a", "you", "channel_op_9000"] {
            assert_eq!(pad_nick(nick, 8).chars().count(), 8);
        }
    }

    #[test]
    fn test_markup_in_text_stays_literal() {
        let msg = Message {
            timestamp: 0,
            author: "alice".to_string(),
            text: "<b>hi</b>".to_string(),
        };
        let line = format_message(&msg, &Theme::new(ThemeMode::Dark), 8, "%H:%M");
        let text_span = line.spans.last().unwrap();
        assert_eq!(text_span.content.as_ref(), "<b>hi</b>");
    }

    #[test]
    fn test_format_timestamp_hour_minute() {
        let out = format_timestamp(1_700_000_000_000, "%H:%M");
        assert_eq!(out.len(), 5);
        assert_eq!(out.as_bytes()[2], b':');
    }

    #[test]
    fn test_format_timestamp_out_of_range_falls_back() {
        assert_eq!(format_timestamp(i64::MAX, "%H:%M"), "--:--");
    }
}
