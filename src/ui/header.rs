use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::definitions::ControlKind;

/// Title bar: couple names on the left, the language toggle control on
/// the right. The toggle is labelled with the language a press would
/// switch *to*.
pub fn render_header(app: &mut App, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let palette = app.active_theme.palette();
    let buf = frame.buffer_mut();
    buf.set_style(area, Style::default().bg(palette.panel_bg));

    let title = format!(
        " {} ♥ {} ",
        app.config.groom.resolve(app.lang),
        app.config.bride.resolve(app.lang)
    );
    buf.set_string(
        area.x,
        area.y,
        &title,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    let label = format!(" {} ", app.lang.toggle_label());
    let label_width = label.width() as u16;
    if label_width >= area.width {
        return;
    }
    let x = area.x + area.width - label_width;
    buf.set_string(
        x,
        area.y,
        &label,
        Style::default()
            .fg(palette.panel_bg)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );
    app.controls.register(
        ControlKind::LangToggle,
        Rect::new(x, area.y, label_width, 1),
    );
}
