mod channel_list;
mod input_box;
pub mod layout;
mod message_area;
pub mod nick_color;
mod room_bar;
mod status_bar;
pub mod theme;
mod theme_toggle;
mod user_list;

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Block;

/// Full rebuild on every draw: each panel is rendered from state alone, so
/// the frame always matches the buffers regardless of what changed.
pub fn render(frame: &mut Frame, state: &AppState) {
    let theme = Theme::new(state.theme);
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.app_bg()), area);

    let app_layout = layout::compute_layout(area);
    channel_list::render(frame, app_layout.channel_list, state, &theme);
    user_list::render(frame, app_layout.user_list, state, &theme);
    theme_toggle::render(frame, app_layout.theme_toggle, state, &theme);
    room_bar::render(frame, app_layout.room_bar, state, &theme);
    message_area::render(frame, app_layout.message_area, state, &theme);
    input_box::render(frame, app_layout.input_box, state, &theme);
    status_bar::render(frame, app_layout.status_bar, state, &theme);
}
