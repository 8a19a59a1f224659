use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::App;
use crate::definitions::{rect_contains, ControlKind, FocusArea};
use crate::rsvp::{Attendance, RsvpField};

impl App {
    /// The main entry point for mouse events: wheel scrolling plus
    /// hit-testing of the registered controls.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_mouse_down(event),
            MouseEventKind::ScrollUp => self.scroll_by(-2),
            MouseEventKind::ScrollDown => self.scroll_by(2),
            _ => {}
        }
    }

    fn handle_mouse_down(&mut self, event: MouseEvent) {
        let (column, row) = (event.column, event.row);

        // A visible overlay captures the click: its close control
        // dismisses, anywhere outside its content dismisses, inside is
        // inert.
        if self.overlay.is_some() {
            if let Some(ControlKind::ModalClose) = self.controls.hit_test(column, row) {
                self.close_overlay();
                return;
            }
            let inside = self
                .controls
                .area(ControlKind::ModalContent)
                .map(|rect| rect_contains(&rect, column, row))
                .unwrap_or(false);
            if !inside {
                self.close_overlay();
            }
            return;
        }

        match self.controls.hit_test(column, row) {
            Some(ControlKind::LangToggle) => self.toggle_language(),
            Some(ControlKind::RsvpName) => self.focus_rsvp(RsvpField::Name),
            Some(ControlKind::RsvpPhone) => self.focus_rsvp(RsvpField::Phone),
            Some(ControlKind::RsvpParty) => self.focus_rsvp(RsvpField::Party),
            Some(ControlKind::RsvpAccept) => self.submit_rsvp(Attendance::Accept),
            Some(ControlKind::RsvpDecline) => self.submit_rsvp(Attendance::Decline),
            _ => {}
        }
    }

    fn focus_rsvp(&mut self, field: RsvpField) {
        self.focus = FocusArea::Rsvp;
        self.rsvp.focus = field;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EventConfig;
    use crate::prefs::PrefStore;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app() -> App {
        let mut app = App::with_parts(PrefStore::unavailable(), EventConfig::default());
        app.body_area = Rect::new(0, 1, 80, 20);
        app
    }

    #[test]
    fn clicking_the_toggle_switches_language() {
        let mut app = app();
        app.controls
            .register(ControlKind::LangToggle, Rect::new(60, 0, 12, 1));
        let lang = app.lang;
        app.handle_mouse(click(61, 0));
        assert_ne!(app.lang, lang);
    }

    #[test]
    fn clicking_a_field_moves_focus_into_the_form() {
        let mut app = app();
        app.controls
            .register(ControlKind::RsvpPhone, Rect::new(4, 10, 30, 3));
        app.handle_mouse(click(5, 11));
        assert_eq!(app.focus, FocusArea::Rsvp);
        assert_eq!(app.rsvp.focus, RsvpField::Phone);
    }

    #[test]
    fn click_outside_modal_content_closes_it() {
        use crate::app::{ConfirmationState, OverlayState};
        let mut app = app();
        app.overlay = Some(OverlayState::Confirmation(ConfirmationState {
            attendance: Attendance::Accept,
        }));
        app.controls
            .register(ControlKind::ModalContent, Rect::new(20, 5, 40, 10));

        // Inside the content: stays open.
        app.handle_mouse(click(25, 7));
        assert!(app.overlay.is_some());

        // Outside: closes.
        app.handle_mouse(click(2, 2));
        assert!(app.overlay.is_none());
    }

    #[test]
    fn wheel_scrolling_moves_the_page() {
        let mut app = app();
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(wheel);
        assert_eq!(app.scroll, 2);
    }
}
