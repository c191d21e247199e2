use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

pub struct AppLayout {
    pub channel_list: Rect,
    pub user_list: Rect,
    pub theme_toggle: Rect,
    pub room_bar: Rect,
    pub message_area: Rect,
    pub input_box: Rect,
    pub status_bar: Rect,
}

/// An interactive element under a click position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    /// Row index within the channel list (may be past the roster end).
    Channel(usize),
    ThemeToggle,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: left panel | right content
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(20), // Left panel
            Constraint::Min(30),    // Right content
        ])
        .split(content);

    let left_panel = h_chunks[0];
    let right_panel = h_chunks[1];

    // Left panel: channel list | user list | theme toggle
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Channels
            Constraint::Min(4),         // Users
            Constraint::Length(3),      // Theme toggle
        ])
        .split(left_panel);

    let channel_list = left_chunks[0];
    let user_list = left_chunks[1];
    let theme_toggle = left_chunks[2];

    // Right panel: room bar | messages | input
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Room name bar
            Constraint::Min(5),    // Messages
            Constraint::Length(3), // Input box
        ])
        .split(right_panel);

    let room_bar = right_chunks[0];
    let message_area = right_chunks[1];
    let input_box = right_chunks[2];

    AppLayout {
        channel_list,
        user_list,
        theme_toggle,
        room_bar,
        message_area,
        input_box,
        status_bar,
    }
}

impl AppLayout {
    /// Map a click position to an interactive element. Channel rows start
    /// directly under the panel's top border, one row per entry.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        if self.theme_toggle.contains(pos) {
            return Some(Hit::ThemeToggle);
        }
        if self.channel_list.contains(pos) {
            let first_row = self.channel_list.y + 1;
            let last_row = self.channel_list.y + self.channel_list.height.saturating_sub(1);
            if row >= first_row && row < last_row {
                return Some(Hit::Channel((row - first_row) as usize));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> AppLayout {
        compute_layout(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_panels_fill_the_frame() {
        let l = layout();
        assert_eq!(l.status_bar.height, 1);
        assert_eq!(l.room_bar.height, 1);
        assert_eq!(l.input_box.height, 3);
        assert_eq!(l.theme_toggle.height, 3);
        assert!(l.message_area.height >= 5);
        assert_eq!(l.status_bar.y, 23);
    }

    #[test]
    fn test_hit_test_channel_rows() {
        let l = layout();
        let x = l.channel_list.x + 1;
        assert_eq!(
            l.hit_test(x, l.channel_list.y + 1),
            Some(Hit::Channel(0))
        );
        assert_eq!(
            l.hit_test(x, l.channel_list.y + 3),
            Some(Hit::Channel(2))
        );
        // Border rows are not rows
        assert_eq!(l.hit_test(x, l.channel_list.y), None);
    }

    #[test]
    fn test_hit_test_theme_toggle() {
        let l = layout();
        let hit = l.hit_test(l.theme_toggle.x + 1, l.theme_toggle.y + 1);
        assert_eq!(hit, Some(Hit::ThemeToggle));
    }

    #[test]
    fn test_hit_test_misses_message_area() {
        let l = layout();
        let hit = l.hit_test(l.message_area.x + 5, l.message_area.y + 5);
        assert_eq!(hit, None);
    }
}
