use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::countdown::{CountdownDisplay, PASSED_GLYPHS};
use crate::i18n::strings;

const BOX_WIDTH: u16 = 12;
const BOX_GAP: u16 = 2;

/// Title plus the four digit slots. Once the wedding has passed, the
/// slots carry their fixed celebratory glyphs instead of numbers.
pub fn render_countdown(app: &App, buf: &mut Buffer, area: Rect) {
    let palette = app.active_theme.palette();
    let catalog = strings(app.lang);

    let title = catalog.countdown_title();
    let title_x = area.x + centered_offset(area.width, title.width() as u16);
    buf.set_string(
        title_x,
        area.y,
        title,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    let labels = [
        catalog.days_label(),
        catalog.hours_label(),
        catalog.minutes_label(),
        catalog.seconds_label(),
    ];
    let values: [String; 4] = match &app.countdown_display {
        CountdownDisplay::Counting {
            days,
            hours,
            minutes,
            seconds,
        } => [days.clone(), hours.clone(), minutes.clone(), seconds.clone()],
        CountdownDisplay::Passed => PASSED_GLYPHS.map(String::from),
    };

    let total = 4 * BOX_WIDTH + 3 * BOX_GAP;
    let left = area.x + centered_offset(area.width, total);
    let top = area.y + 2;
    for (index, (value, label)) in values.iter().zip(labels).enumerate() {
        let slot = Rect::new(
            left + index as u16 * (BOX_WIDTH + BOX_GAP),
            top,
            BOX_WIDTH,
            5,
        );
        if slot.right() > area.right() || slot.bottom() > area.bottom() {
            continue;
        }
        Widget::render(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border)),
            slot,
            buf,
        );
        let value_x = slot.x + 1 + centered_offset(BOX_WIDTH - 2, value.width() as u16);
        buf.set_string(
            value_x,
            slot.y + 1,
            value,
            Style::default()
                .fg(palette.digits)
                .add_modifier(Modifier::BOLD),
        );
        let label_x = slot.x + 1 + centered_offset(BOX_WIDTH - 2, label.width() as u16);
        buf.set_string(label_x, slot.y + 3, label, Style::default().fg(palette.dim));
    }
}

fn centered_offset(available: u16, content: u16) -> u16 {
    available.saturating_sub(content) / 2
}
