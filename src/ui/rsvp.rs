use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::definitions::FocusArea;
use crate::i18n::strings;
use crate::rsvp::{InputBuffer, RsvpField, PARTY_CHOICES};

/// Page-coordinate rects of the form's interactive pieces. Shared by
/// the renderer and the mouse registration in `page.rs` so the two can
/// never disagree.
pub struct FormLayout {
    pub name: Rect,
    pub phone: Rect,
    pub party: Rect,
    pub accept: Rect,
    pub decline: Rect,
}

const FIELD_WIDTH: u16 = 36;
const BUTTON_WIDTH: u16 = 24;

pub fn form_layout(area: Rect) -> FormLayout {
    let left = area.x + area.width.saturating_sub(FIELD_WIDTH) / 2;
    let field = |row: u16| Rect::new(left, area.y + row, FIELD_WIDTH.min(area.width), 3);
    let buttons_left = area.x + area.width.saturating_sub(2 * BUTTON_WIDTH + 2) / 2;
    FormLayout {
        name: field(2),
        phone: field(5),
        party: field(8),
        accept: Rect::new(buttons_left, area.y + 12, BUTTON_WIDTH, 3),
        decline: Rect::new(buttons_left + BUTTON_WIDTH + 2, area.y + 12, BUTTON_WIDTH, 3),
    }
}

pub fn render_rsvp(app: &App, buf: &mut Buffer, area: Rect) {
    let palette = app.active_theme.palette();
    let catalog = strings(app.lang);
    let form = form_layout(area);
    let form_focused = app.focus == FocusArea::Rsvp;

    let title = catalog.rsvp_title();
    let title_x = area.x + area.width.saturating_sub(title.width() as u16) / 2;
    buf.set_string(
        title_x,
        area.y,
        title,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    // The name field jitters sideways while the shake cue is active.
    let mut name_rect = form.name;
    if app.rsvp_shake && app.shake_phase {
        name_rect.x = name_rect.x.saturating_add(1);
    }
    render_text_field(
        app,
        buf,
        name_rect,
        catalog.rsvp_name_label(),
        &app.rsvp.name,
        form_focused && app.rsvp.focus == RsvpField::Name,
        app.rsvp_shake,
    );
    render_text_field(
        app,
        buf,
        form.phone,
        catalog.rsvp_phone_label(),
        &app.rsvp.phone,
        form_focused && app.rsvp.focus == RsvpField::Phone,
        false,
    );
    render_party_field(
        app,
        buf,
        form.party,
        form_focused && app.rsvp.focus == RsvpField::Party,
    );
    render_button(
        app,
        buf,
        form.accept,
        catalog.rsvp_accept(),
        form_focused && app.rsvp.focus == RsvpField::Accept,
    );
    render_button(
        app,
        buf,
        form.decline,
        catalog.rsvp_decline(),
        form_focused && app.rsvp.focus == RsvpField::Decline,
    );
}

fn render_text_field(
    app: &App,
    buf: &mut Buffer,
    rect: Rect,
    label: &str,
    value: &InputBuffer,
    focused: bool,
    error: bool,
) {
    let palette = app.active_theme.palette();
    let border = if error {
        palette.error
    } else if focused {
        palette.border_focus
    } else {
        palette.border
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {label} "),
            Style::default().fg(palette.dim),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(rect);
    Widget::render(block, rect, buf);
    if inner.width < 2 {
        return;
    }

    buf.set_string(
        inner.x + 1,
        inner.y,
        value.as_str(),
        Style::default().fg(palette.text),
    );
    if focused {
        let cursor_x = inner.x + 1 + value.cursor_prefix().width() as u16;
        if cursor_x < inner.right() {
            buf.set_string(
                cursor_x,
                inner.y,
                " ",
                Style::default().bg(palette.accent),
            );
        }
    }
}

fn render_party_field(app: &App, buf: &mut Buffer, rect: Rect, focused: bool) {
    let palette = app.active_theme.palette();
    let border = if focused {
        palette.border_focus
    } else {
        palette.border
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", strings(app.lang).rsvp_party_label()),
            Style::default().fg(palette.dim),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(rect);
    Widget::render(block, rect, buf);

    let value = format!("◀ {} ▶", app.rsvp.party_size());
    let x = inner.x + inner.width.saturating_sub(value.width() as u16) / 2;
    buf.set_string(x, inner.y, &value, Style::default().fg(palette.text));
    // Show the range so the arrows are discoverable.
    let hint = format!(
        "{}–{}",
        PARTY_CHOICES.first().unwrap_or(&1),
        PARTY_CHOICES.last().unwrap_or(&1)
    );
    let hint_x = inner.right().saturating_sub(hint.width() as u16 + 1);
    buf.set_string(hint_x, inner.y, &hint, Style::default().fg(palette.dim));
}

fn render_button(app: &App, buf: &mut Buffer, rect: Rect, label: &str, focused: bool) {
    let palette = app.active_theme.palette();
    let (border, text_style) = if focused {
        (
            palette.border_focus,
            Style::default()
                .fg(palette.panel_bg)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (palette.border, Style::default().fg(palette.accent))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(rect);
    Widget::render(block, rect, buf);

    let x = inner.x + inner.width.saturating_sub(label.width() as u16) / 2;
    buf.set_string(x, inner.y, label, text_style);
}
