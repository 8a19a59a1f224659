//! Rendering. The card is drawn immediate-mode from `App` state every
//! frame, so re-rendering with unchanged state is trivially idempotent.

mod countdown;
mod header;
mod page;
mod particles;
mod popup;
mod rsvp;
mod sections;
mod story;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;

pub fn render(app: &mut App, frame: &mut Frame) {
    let palette = app.active_theme.palette();
    let area = frame.size();
    frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    // Geometry feeds back into the app: the scroll clamp and the story
    // visibility trigger both read the body area.
    app.controls.clear();
    app.body_area = chunks[1];
    if app.scroll > app.max_scroll() {
        app.scroll = app.max_scroll();
    }

    header::render_header(app, frame, chunks[0]);
    page::render_page(app, frame, chunks[1]);
    particles::render_particles(app, frame, chunks[1]);
    render_status_bar(app, frame, chunks[2]);

    if app.overlay.is_some() {
        popup::render_popup(app, frame);
    }
}

fn render_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let palette = app.active_theme.palette();
    let lang_tag = format!(" {} ", app.lang.code().to_uppercase());
    let message_width = area.width.saturating_sub(lang_tag.len() as u16) as usize;
    let line = Line::from(vec![
        Span::styled(
            format!("{:<width$}", app.status_message, width = message_width),
            Style::default().fg(palette.dim),
        ),
        Span::styled(lang_tag, Style::default().fg(palette.accent)),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(palette.panel_bg)),
        area,
    );
}
