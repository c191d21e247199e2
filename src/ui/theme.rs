use crate::ui::nick_color;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// The two display modes of the theme toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }
}

/// Six-slot nickname palettes. Slot assignment (`nick_color::palette_slot`)
/// is theme-independent; only the rendered color changes with the mode.
const NICK_PALETTE_DARK: [Color; nick_color::PALETTE_SIZE] = [
    Color::Rgb(80, 200, 210),  // teal
    Color::Rgb(100, 170, 230), // blue
    Color::Rgb(175, 140, 220), // lavender
    Color::Rgb(220, 150, 180), // pink
    Color::Rgb(230, 180, 80),  // amber
    Color::Rgb(90, 210, 130),  // green
];

const NICK_PALETTE_LIGHT: [Color; nick_color::PALETTE_SIZE] = [
    Color::Rgb(0, 130, 140),
    Color::Rgb(30, 100, 180),
    Color::Rgb(110, 70, 170),
    Color::Rgb(170, 70, 110),
    Color::Rgb(150, 110, 10),
    Color::Rgb(30, 140, 70),
];

#[derive(Clone, Copy)]
pub struct Theme {
    mode: ThemeMode,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    fn dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn app_bg(&self) -> Style {
        if self.dark() {
            Style::default().bg(Color::Rgb(18, 18, 24)).fg(Color::Rgb(220, 220, 220))
        } else {
            Style::default().bg(Color::Rgb(244, 242, 236)).fg(Color::Rgb(40, 40, 48))
        }
    }

    pub fn border(&self) -> Style {
        if self.dark() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Rgb(170, 166, 156))
        }
    }

    pub fn border_focused(&self) -> Style {
        if self.dark() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Rgb(20, 110, 160))
        }
    }

    pub fn title(&self) -> Style {
        self.text().add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        if self.dark() {
            Style::default().fg(Color::Rgb(220, 220, 220))
        } else {
            Style::default().fg(Color::Rgb(40, 40, 48))
        }
    }

    pub fn text_muted(&self) -> Style {
        if self.dark() {
            Style::default().fg(Color::Rgb(120, 120, 130))
        } else {
            Style::default().fg(Color::Rgb(140, 136, 128))
        }
    }

    pub fn accent(&self) -> Style {
        if self.dark() {
            Style::default().fg(Color::Rgb(80, 200, 210))
        } else {
            Style::default().fg(Color::Rgb(0, 130, 140))
        }
    }

    pub fn timestamp(&self) -> Style {
        self.text_muted()
    }

    pub fn message_text(&self) -> Style {
        self.text()
    }

    pub fn input_text(&self) -> Style {
        self.text()
    }

    pub fn channel_normal(&self) -> Style {
        self.text()
    }

    pub fn channel_active(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    pub fn status_bar(&self) -> Style {
        if self.dark() {
            Style::default().fg(Color::White).bg(Color::Rgb(50, 50, 62))
        } else {
            Style::default().fg(Color::Rgb(40, 40, 48)).bg(Color::Rgb(214, 210, 200))
        }
    }

    /// Color for a nickname, bucketed deterministically into the six-slot
    /// palette of the current mode.
    pub fn nick_color(&self, nick: &str) -> Style {
        let palette = if self.dark() {
            &NICK_PALETTE_DARK
        } else {
            &NICK_PALETTE_LIGHT
        };
        Style::default().fg(palette[nick_color::palette_slot(nick)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nick_color_is_stable_per_mode() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let theme = Theme::new(mode);
            assert_eq!(theme.nick_color("alice"), theme.nick_color("alice"));
        }
    }

    #[test]
    fn test_nick_slot_is_mode_independent() {
        // The two palettes share slot assignment; alice is slot 0 in both.
        assert_eq!(
            Theme::new(ThemeMode::Dark).nick_color("alice").fg,
            Some(NICK_PALETTE_DARK[0])
        );
        assert_eq!(
            Theme::new(ThemeMode::Light).nick_color("alice").fg,
            Some(NICK_PALETTE_LIGHT[0])
        );
    }

    #[test]
    fn test_toggled_flips_between_the_two_modes() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_mode_parses_from_config_strings() {
        #[derive(serde::Deserialize)]
        struct Wrap {
            theme: ThemeMode,
        }
        let parsed: Wrap = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(parsed.theme, ThemeMode::Light);
    }
}
