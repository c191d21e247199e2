//! Hardcoded seed data: the fixed rosters and the initial messages shown
//! before any interaction. Everything lives only for the process run.

use crate::app::state::AppState;

pub const DEFAULT_CHANNELS: [&str; 3] = ["#general", "#random", "#cozy-outpost"];
pub const DEFAULT_USERS: [&str; 4] = ["alice", "bob", "carol", "dave"];
pub const DEFAULT_LOCAL_NICK: &str = "you";

/// Push the initial messages into `#general`.
///
/// The `/join` line is inert sample text; nothing parses slash commands.
pub fn apply(state: &mut AppState) {
    state.push_message("#general", "alice", "hello world");
    state.push_message("#general", "bob", "hi!");
    state.push_message("#general", "you", "/join #cozy-outpost");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_seed_fills_general_only() {
        let mut state = AppState::new(AppConfig::default());
        apply(&mut state);
        assert_eq!(state.messages("#general").len(), 3);
        assert!(state.messages("#random").is_empty());
        assert!(state.messages("#cozy-outpost").is_empty());
    }

    #[test]
    fn test_seed_timestamps_are_in_order() {
        let mut state = AppState::new(AppConfig::default());
        apply(&mut state);
        let messages = state.messages("#general");
        assert!(messages.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }
}
