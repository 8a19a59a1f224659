//! Page geometry: the invitation is a fixed stack of sections rendered
//! into an offscreen buffer and windowed by the scroll offset.

use super::App;
use crate::definitions::SectionId;

/// Section order and heights, in page rows.
pub const SECTIONS: [(SectionId, u16); 5] = [
    (SectionId::Hero, 9),
    (SectionId::Countdown, 8),
    (SectionId::Story, 13),
    (SectionId::Rsvp, 16),
    (SectionId::Venue, 6),
];

/// Total page height in rows.
pub fn page_height() -> u16 {
    SECTIONS.iter().map(|(_, height)| height).sum()
}

/// `(start_row, height)` of a section in page coordinates.
pub fn section_range(id: SectionId) -> (u16, u16) {
    let mut start = 0;
    for (section, height) in SECTIONS {
        if section == id {
            return (start, height);
        }
        start += height;
    }
    (0, 0)
}

impl App {
    /// Largest valid scroll offset for the current viewport.
    pub fn max_scroll(&self) -> u16 {
        page_height().saturating_sub(self.body_area.height)
    }

    /// Scrolls the page, clamped to content. A visible overlay locks
    /// scrolling entirely.
    pub fn scroll_by(&mut self, delta: i32) {
        if self.overlay.is_some() {
            return;
        }
        let current = i32::from(self.scroll);
        let next = (current + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = next as u16;
    }

    pub fn scroll_to_top(&mut self) {
        if self.overlay.is_none() {
            self.scroll = 0;
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        if self.overlay.is_none() {
            self.scroll = self.max_scroll();
        }
    }

    /// Fraction of the section currently inside the scrolled viewport.
    pub fn visible_fraction(&self, id: SectionId) -> f32 {
        let (start, height) = section_range(id);
        if height == 0 || self.body_area.height == 0 {
            return 0.0;
        }
        let view_top = self.scroll;
        let view_bottom = self.scroll.saturating_add(self.body_area.height);
        let top = start.max(view_top);
        let bottom = (start + height).min(view_bottom);
        if bottom <= top {
            return 0.0;
        }
        f32::from(bottom - top) / f32::from(height)
    }
}
