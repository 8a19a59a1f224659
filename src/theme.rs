//! Decorative color themes, rotated on a half-hour wall-clock schedule.
//!
//! The active theme is a pure function of the local minute of day, so two
//! guests opening the invitation in the same half-hour window see the
//! same colors.

use std::time::Duration;

use chrono::{Local, Timelike};
use ratatui::style::Color;

pub const ROTATION_MINUTES: u32 = 30;

/// Named palettes, in rotation order. The first is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Marigold,
    Rose,
    Peacock,
}

pub const THEMES: [Theme; 3] = [Theme::Marigold, Theme::Rose, Theme::Peacock];

impl Theme {
    /// Theme for a minute of the local day: `floor(M / 30) mod 3`.
    pub fn for_minute_of_day(minute: u32) -> Theme {
        THEMES[(minute / ROTATION_MINUTES) as usize % THEMES.len()]
    }

    /// Theme for the current wall-clock time.
    pub fn current() -> Theme {
        let now = Local::now();
        Self::for_minute_of_day(now.hour() * 60 + now.minute())
    }

    /// Next theme in cyclic order.
    pub fn next(self) -> Theme {
        let index = THEMES.iter().position(|theme| *theme == self).unwrap_or(0);
        THEMES[(index + 1) % THEMES.len()]
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Marigold => &MARIGOLD,
            Theme::Rose => &ROSE,
            Theme::Peacock => &PEACOCK,
        }
    }
}

/// Time until the next half-hour boundary, from seconds-into-the-hour.
pub fn until_boundary(minute: u32, second: u32) -> Duration {
    let into_window = u64::from(minute % ROTATION_MINUTES) * 60 + u64::from(second);
    Duration::from_secs(u64::from(ROTATION_MINUTES) * 60 - into_window)
}

/// Time until the next half-hour boundary from now.
pub fn until_next_boundary() -> Duration {
    let now = Local::now();
    until_boundary(now.minute(), now.second())
}

pub struct Palette {
    pub bg: Color,
    pub panel_bg: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focus: Color,
    pub digits: Color,
    pub error: Color,
    /// Cycled through by the particle layer.
    pub sparks: [Color; 4],
}

pub const MARIGOLD: Palette = Palette {
    bg: Color::Rgb(24, 14, 6),
    panel_bg: Color::Rgb(38, 24, 10),
    text: Color::Rgb(245, 230, 200),
    dim: Color::Rgb(160, 140, 110),
    accent: Color::Rgb(255, 176, 32),
    border: Color::Rgb(140, 96, 32),
    border_focus: Color::Rgb(255, 176, 32),
    digits: Color::Rgb(255, 210, 110),
    error: Color::Rgb(255, 68, 68),
    sparks: [
        Color::Rgb(255, 176, 32),
        Color::Rgb(255, 210, 110),
        Color::Rgb(240, 120, 40),
        Color::Rgb(255, 240, 180),
    ],
};

pub const ROSE: Palette = Palette {
    bg: Color::Rgb(26, 8, 16),
    panel_bg: Color::Rgb(42, 14, 26),
    text: Color::Rgb(250, 225, 235),
    dim: Color::Rgb(170, 125, 145),
    accent: Color::Rgb(240, 98, 146),
    border: Color::Rgb(140, 52, 84),
    border_focus: Color::Rgb(240, 98, 146),
    digits: Color::Rgb(255, 170, 200),
    error: Color::Rgb(255, 68, 68),
    sparks: [
        Color::Rgb(240, 98, 146),
        Color::Rgb(255, 170, 200),
        Color::Rgb(200, 80, 120),
        Color::Rgb(255, 230, 240),
    ],
};

pub const PEACOCK: Palette = Palette {
    bg: Color::Rgb(4, 18, 22),
    panel_bg: Color::Rgb(8, 32, 38),
    text: Color::Rgb(215, 240, 240),
    dim: Color::Rgb(120, 160, 160),
    accent: Color::Rgb(38, 198, 218),
    border: Color::Rgb(24, 110, 120),
    border_focus: Color::Rgb(38, 198, 218),
    digits: Color::Rgb(130, 225, 235),
    error: Color::Rgb(255, 68, 68),
    sparks: [
        Color::Rgb(38, 198, 218),
        Color::Rgb(130, 225, 235),
        Color::Rgb(60, 140, 200),
        Color::Rgb(220, 250, 250),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minute_of_day_formula() {
        assert_eq!(Theme::for_minute_of_day(0), Theme::Marigold);
        assert_eq!(Theme::for_minute_of_day(29), Theme::Marigold);
        assert_eq!(Theme::for_minute_of_day(30), Theme::Rose);
        assert_eq!(Theme::for_minute_of_day(60), Theme::Peacock);
        assert_eq!(Theme::for_minute_of_day(90), Theme::Marigold);
        // Independent of the day: same residue, same theme.
        assert_eq!(
            Theme::for_minute_of_day(90),
            Theme::for_minute_of_day(90 + 24 * 60)
        );
    }

    #[test]
    fn rotation_cycles_through_all_themes() {
        let mut theme = Theme::Marigold;
        for expected in [Theme::Rose, Theme::Peacock, Theme::Marigold] {
            theme = theme.next();
            assert_eq!(theme, expected);
        }
    }

    #[test]
    fn boundary_alignment() {
        assert_eq!(until_boundary(0, 0), Duration::from_secs(1800));
        assert_eq!(until_boundary(29, 59), Duration::from_secs(1));
        assert_eq!(until_boundary(30, 0), Duration::from_secs(1800));
        assert_eq!(until_boundary(47, 30), Duration::from_secs(750));
    }
}
