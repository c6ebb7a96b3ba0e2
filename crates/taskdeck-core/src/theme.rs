use crate::notice::NoticeStyle;

pub const THEME_ICON: &str = "⭐";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Green,
    Blue,
}

/// Hardcoded color pair behind a theme's toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub primary: &'static str,
    pub accent: &'static str,
}

impl Theme {
    pub fn from_storage(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("blue") => Theme::Blue,
            _ => Theme::Green,
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            Theme::Green => "green",
            Theme::Blue => "blue",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Theme::Green => Theme::Blue,
            Theme::Blue => Theme::Green,
        }
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            Theme::Green => ThemePalette {
                primary: "#1f8f4e",
                accent: "#7dffb0",
            },
            Theme::Blue => ThemePalette {
                primary: "#1f5f9f",
                accent: "#7dc8ff",
            },
        }
    }

    pub fn notice_style(self) -> NoticeStyle {
        let palette = self.palette();
        NoticeStyle {
            background: palette.primary.to_string(),
            foreground: "#ffffff".to_string(),
            border: format!("2px solid {}", palette.accent),
            glow: format!("0 0 18px {}", palette.accent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_is_a_two_cycle() {
        assert_eq!(Theme::Green.next(), Theme::Blue);
        assert_eq!(Theme::Green.next().next(), Theme::Green);
    }

    #[test]
    fn unknown_stored_values_mean_green() {
        assert_eq!(Theme::from_storage(None), Theme::Green);
        assert_eq!(Theme::from_storage(Some("purple")), Theme::Green);
        assert_eq!(Theme::from_storage(Some("blue")), Theme::Blue);
    }

    #[test]
    fn each_theme_has_its_own_notice_colors() {
        let green = Theme::Green.notice_style();
        let blue = Theme::Blue.notice_style();
        assert_ne!(green, blue);
        assert!(green.border.contains(Theme::Green.palette().accent));
        assert!(blue.inline_css().contains("background:#1f5f9f"));
    }
}
