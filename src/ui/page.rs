//! Offscreen page composition.
//!
//! Sections draw into a full-height buffer in page coordinates; the
//! window at the scroll offset is then blitted onto the frame. That
//! keeps partially scrolled sections (borders and all) pixel-correct
//! without per-widget clipping logic.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, Frame};

use super::{countdown, rsvp, sections, story};
use crate::app::layout::{self, page_height};
use crate::app::App;
use crate::definitions::{ControlKind, SectionId};

pub fn render_page(app: &mut App, frame: &mut Frame, body: Rect) {
    if body.width == 0 || body.height == 0 {
        return;
    }
    let palette = app.active_theme.palette();
    let page_rect = Rect::new(0, 0, body.width, page_height());
    let mut page = Buffer::empty(page_rect);
    page.set_style(
        page_rect,
        Style::default().bg(palette.bg).fg(palette.text),
    );

    for (id, _) in layout::SECTIONS {
        let (start, height) = layout::section_range(id);
        let rect = Rect::new(0, start, body.width, height);
        match id {
            SectionId::Hero => sections::render_hero(app, &mut page, rect),
            SectionId::Countdown => countdown::render_countdown(app, &mut page, rect),
            SectionId::Story => story::render_story(app, &mut page, rect),
            SectionId::Rsvp => rsvp::render_rsvp(app, &mut page, rect),
            SectionId::Venue => sections::render_venue(app, &mut page, rect),
        }
    }

    // Blit the visible window.
    let buf = frame.buffer_mut();
    for row in 0..body.height {
        let src_y = app.scroll + row;
        if src_y >= page_rect.height {
            break;
        }
        for col in 0..body.width {
            *buf.get_mut(body.x + col, body.y + row) = page.get(col, src_y).clone();
        }
    }

    // Re-register the form's clickable rects in screen coordinates.
    let (rsvp_start, rsvp_height) = layout::section_range(SectionId::Rsvp);
    let form = rsvp::form_layout(Rect::new(0, rsvp_start, body.width, rsvp_height));
    for (kind, rect) in [
        (ControlKind::RsvpName, form.name),
        (ControlKind::RsvpPhone, form.phone),
        (ControlKind::RsvpParty, form.party),
        (ControlKind::RsvpAccept, form.accept),
        (ControlKind::RsvpDecline, form.decline),
    ] {
        if let Some(on_screen) = to_screen(rect, app.scroll, body) {
            app.controls.register(kind, on_screen);
        }
    }
}

/// Translates a page-coordinate rect into the visible screen window,
/// clipping vertically; `None` when scrolled out of view.
fn to_screen(rect: Rect, scroll: u16, body: Rect) -> Option<Rect> {
    let top = rect.y.max(scroll);
    let bottom = (rect.y + rect.height).min(scroll + body.height);
    if bottom <= top || rect.x >= body.width {
        return None;
    }
    Some(Rect {
        x: body.x + rect.x,
        y: body.y + (top - scroll),
        width: rect.width.min(body.width - rect.x),
        height: bottom - top,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_screen_clips_vertically() {
        let body = Rect::new(0, 1, 80, 20);
        // Fully above the window.
        assert_eq!(to_screen(Rect::new(2, 0, 10, 3), 5, body), None);
        // Straddling the top edge.
        assert_eq!(
            to_screen(Rect::new(2, 3, 10, 4), 5, body),
            Some(Rect::new(2, 1, 10, 2))
        );
        // Fully inside.
        assert_eq!(
            to_screen(Rect::new(2, 8, 10, 3), 5, body),
            Some(Rect::new(2, 4, 10, 3))
        );
    }
}
