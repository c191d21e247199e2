use crate::config::AppConfig;
use crate::ui::theme::ThemeMode;
use std::collections::BTreeMap;

/// A single chat line. Immutable once stored; channel buffers are
/// append-only and never reordered, edited, or truncated.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub author: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Input,
    ChannelList,
    ThemeToggle,
}

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Clear the input and return its contents, recording non-empty
    /// submissions in the recall history.
    pub fn take_text(&mut self) -> String {
        let text = self.text.clone();
        self.text.clear();
        self.cursor = 0;
        self.history_index = None;
        if !text.is_empty() {
            self.history.push(text.clone());
        }
        text
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(i) if i > 0 => i - 1,
            Some(_) => return,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.text.len();
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                let idx = i + 1;
                self.history_index = Some(idx);
                self.text = self.history[idx].clone();
                self.cursor = self.text.len();
            }
            Some(_) => {
                self.history_index = None;
                self.text.clear();
                self.cursor = 0;
            }
            None => {}
        }
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

/// All mutable application state. Only `submit_input`, `switch_channel`,
/// and the input editing methods write to it; rendering reads it.
pub struct AppState {
    pub config: AppConfig,
    /// Fixed channel roster, in display order.
    pub channels: Vec<String>,
    /// Fixed user roster, in display order.
    pub users: Vec<String>,
    buffers: BTreeMap<String, Vec<Message>>,
    /// The single channel shown in the message area. The highlight in the
    /// channel list is a rendering of this field, never its source.
    pub active_channel: String,
    /// Selection cursor in the channel list while it has focus.
    pub channel_cursor: usize,
    pub input: InputState,
    pub focus: FocusPanel,
    pub theme: ThemeMode,
    /// Lines scrolled up from the bottom of the active channel's log.
    pub scroll_offset: usize,
    /// Terminal size, kept for mouse hit-testing.
    pub viewport: (u16, u16),
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let channels = config.channels.clone();
        let users = config.users.clone();
        // Every known channel gets a buffer up front, so lookups and writes
        // never need a create-on-demand branch.
        let buffers = channels
            .iter()
            .map(|name| (name.clone(), Vec::new()))
            .collect();
        let active_channel = channels
            .first()
            .cloned()
            .unwrap_or_else(|| "#general".to_string());
        let theme = config.ui.theme;
        Self {
            config,
            channels,
            users,
            buffers,
            active_channel,
            channel_cursor: 0,
            input: InputState::new(),
            focus: FocusPanel::Input,
            theme,
            scroll_offset: 0,
            viewport: (80, 24),
            should_quit: false,
            dirty: true,
        }
    }

    /// Messages for `channel`, oldest first. Unknown channels read as an
    /// empty log rather than an error.
    pub fn messages(&self, channel: &str) -> &[Message] {
        self.buffers.get(channel).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn push_message(&mut self, channel: &str, author: &str, text: &str) {
        self.push_message_at(channel, author, text, chrono::Utc::now().timestamp_millis());
    }

    pub fn push_message_at(&mut self, channel: &str, author: &str, text: &str, timestamp: i64) {
        // Buffers exist for every known channel; a write to an unknown name
        // is dropped rather than creating a buffer outside the roster.
        if let Some(buf) = self.buffers.get_mut(channel) {
            buf.push(Message {
                timestamp,
                author: author.to_string(),
                text: text.to_string(),
            });
            self.dirty = true;
        } else {
            tracing::warn!(channel, "dropping message for unknown channel");
        }
    }

    /// Make `name` the sole active channel and show its log from the
    /// bottom. No roster validation: an unknown name shows an empty log.
    pub fn switch_channel(&mut self, name: &str) {
        self.active_channel = name.to_string();
        if let Some(idx) = self.channels.iter().position(|c| c == name) {
            self.channel_cursor = idx;
        }
        self.scroll_offset = 0;
        self.dirty = true;
        tracing::debug!(channel = name, "switched channel");
    }

    /// Submit the composer contents to the active channel, authored by the
    /// local identity. Whitespace-only input is discarded without touching
    /// any buffer or the input field.
    pub fn submit_input(&mut self) {
        let trimmed = self.input.text.trim();
        if trimmed.is_empty() {
            return;
        }
        let text = trimmed.to_string();
        self.input.take_text();
        let channel = self.active_channel.clone();
        let author = self.local_nick().to_string();
        self.push_message(&channel, &author, &text);
        self.scroll_offset = 0;
    }

    pub fn local_nick(&self) -> &str {
        &self.config.user.nickname
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Input => FocusPanel::ChannelList,
            FocusPanel::ChannelList => FocusPanel::ThemeToggle,
            FocusPanel::ThemeToggle => FocusPanel::Input,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        format!(
            "{} · {} channels · {} users",
            self.active_channel,
            self.channels.len(),
            self.users.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::seed;

    fn seeded_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        seed::apply(&mut state);
        state
    }

    #[test]
    fn test_first_channel_is_active_by_default() {
        let state = seeded_state();
        assert_eq!(state.active_channel, "#general");
    }

    #[test]
    fn test_every_known_channel_has_a_buffer() {
        let mut state = AppState::new(AppConfig::default());
        for name in state.channels.clone() {
            assert!(state.messages(&name).is_empty());
            state.push_message_at(&name, "alice", "hi", 0);
            assert_eq!(state.messages(&name).len(), 1);
        }
    }

    #[test]
    fn test_unknown_channel_reads_empty() {
        let state = seeded_state();
        assert!(state.messages("#nope").is_empty());
    }

    #[test]
    fn test_unknown_channel_write_is_dropped() {
        let mut state = seeded_state();
        state.push_message_at("#nope", "alice", "hi", 0);
        assert!(state.messages("#nope").is_empty());
    }

    #[test]
    fn test_switch_away_and_back_preserves_order() {
        let mut state = seeded_state();
        let before: Vec<String> = state
            .messages("#general")
            .iter()
            .map(|m| m.text.clone())
            .collect();
        assert_eq!(before, ["hello world", "hi!", "/join #cozy-outpost"]);

        state.switch_channel("#random");
        assert!(state.messages(&state.active_channel).is_empty());

        state.switch_channel("#general");
        let after: Vec<String> = state
            .messages(&state.active_channel)
            .iter()
            .map(|m| m.text.clone())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_submit_trims_and_appends_as_local_identity() {
        let mut state = seeded_state();
        for c in "  hello  ".chars() {
            state.input.insert_char(c);
        }
        state.submit_input();

        let messages = state.messages("#general");
        assert_eq!(messages.len(), 4);
        let last = messages.last().unwrap();
        assert_eq!(last.author, "you");
        assert_eq!(last.text, "hello");
        assert!(state.input.text.is_empty());
    }

    #[test]
    fn test_whitespace_only_submit_is_a_noop() {
        let mut state = seeded_state();
        for c in "   ".chars() {
            state.input.insert_char(c);
        }
        state.submit_input();

        for name in state.channels.clone() {
            let expected = if name == "#general" { 3 } else { 0 };
            assert_eq!(state.messages(&name).len(), expected);
        }
    }

    #[test]
    fn test_submit_goes_to_the_active_channel() {
        let mut state = seeded_state();
        state.switch_channel("#random");
        for c in "anyone here?".chars() {
            state.input.insert_char(c);
        }
        state.submit_input();

        assert_eq!(state.messages("#random").len(), 1);
        assert_eq!(state.messages("#general").len(), 3);
    }

    #[test]
    fn test_submit_resets_scroll_to_bottom() {
        let mut state = seeded_state();
        state.scroll_offset = 2;
        for c in "hi".chars() {
            state.input.insert_char(c);
        }
        state.submit_input();
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_theme_toggle_is_binary() {
        let mut state = seeded_state();
        let initial = state.theme;
        state.toggle_theme();
        assert_ne!(state.theme, initial);
        state.toggle_theme();
        assert_eq!(state.theme, initial);
    }

    #[test]
    fn test_input_history_recall() {
        let mut input = InputState::new();
        for c in "first".chars() {
            input.insert_char(c);
        }
        input.take_text();
        for c in "second".chars() {
            input.insert_char(c);
        }
        input.take_text();

        input.history_up();
        assert_eq!(input.text, "second");
        input.history_up();
        assert_eq!(input.text, "first");
        input.history_down();
        assert_eq!(input.text, "second");
        input.history_down();
        assert_eq!(input.text, "");
    }

    #[test]
    fn test_input_word_delete() {
        let mut input = InputState::new();
        for c in "hello world".chars() {
            input.insert_char(c);
        }
        input.delete_word_back();
        assert_eq!(input.text, "hello ");
        input.delete_word_back();
        assert_eq!(input.text, "");
    }
}
