use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::i18n::strings;

/// Opening section: names, blessing and the wedding date line.
pub fn render_hero(app: &App, buf: &mut Buffer, area: Rect) {
    let palette = app.active_theme.palette();
    let date_line = app
        .config
        .wedding_instant()
        .format("%d %B %Y · %H:%M")
        .to_string();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "❀ ❀ ❀",
            Style::default().fg(palette.dim),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} ♥ {}",
                app.config.groom.resolve(app.lang),
                app.config.bride.resolve(app.lang)
            ),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            app.config.blessing.resolve(app.lang).to_string(),
            Style::default().fg(palette.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            date_line,
            Style::default().fg(palette.digits),
        )),
    ];
    Widget::render(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
        buf,
    );
}

/// Closing section: the venue.
pub fn render_venue(app: &App, buf: &mut Buffer, area: Rect) {
    let palette = app.active_theme.palette();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            strings(app.lang).venue_title().to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            app.config.venue.resolve(app.lang).to_string(),
            Style::default().fg(palette.text),
        )),
        Line::from(""),
        Line::from(Span::styled("❀ ❀ ❀", Style::default().fg(palette.dim))),
    ];
    Widget::render(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
        buf,
    );
}
