use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;
use crate::definitions::FocusArea;
use crate::rsvp::{Attendance, RsvpField};

impl App {
    /// The main entry point for keyboard events.
    ///
    /// Routing order: a visible overlay captures everything, then global
    /// shortcuts, then the focused area.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.overlay.is_some() {
            self.handle_overlay_key(key);
            return;
        }

        if self.handle_global_shortcuts(key) {
            return;
        }

        match self.focus {
            FocusArea::Page => self.handle_page_key(key),
            FocusArea::Rsvp => self.handle_rsvp_key(key),
        }
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')) {
            self.close_overlay();
        }
    }

    /// Returns `true` if the key was consumed.
    fn handle_global_shortcuts(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::CONTROL)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.quit();
                true
            }
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
                self.toggle_language();
                true
            }
            (KeyCode::Tab, _) if self.focus == FocusArea::Page => {
                self.focus = FocusArea::Rsvp;
                true
            }
            _ => false,
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-i32::from(self.body_area.height.max(1))),
            KeyCode::PageDown => self.scroll_by(i32::from(self.body_area.height.max(1))),
            KeyCode::Home => self.scroll_to_top(),
            KeyCode::End => self.scroll_to_bottom(),
            _ => {}
        }
    }

    fn handle_rsvp_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.focus = FocusArea::Page;
                return;
            }
            KeyCode::Tab => {
                self.rsvp.focus_next();
                return;
            }
            KeyCode::BackTab => {
                self.rsvp.focus_prev();
                return;
            }
            KeyCode::Up => {
                self.rsvp.focus_prev();
                return;
            }
            KeyCode::Down => {
                self.rsvp.focus_next();
                return;
            }
            _ => {}
        }

        match self.rsvp.focus {
            RsvpField::Name | RsvpField::Phone => self.handle_text_field_key(key),
            RsvpField::Party => match key.code {
                KeyCode::Left => self.rsvp.cycle_party(-1),
                KeyCode::Right => self.rsvp.cycle_party(1),
                KeyCode::Enter => self.rsvp.focus_next(),
                _ => {}
            },
            RsvpField::Accept => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.submit_rsvp(Attendance::Accept),
                KeyCode::Left | KeyCode::Right => self.rsvp.focus = RsvpField::Decline,
                _ => {}
            },
            RsvpField::Decline => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.submit_rsvp(Attendance::Decline),
                KeyCode::Left | KeyCode::Right => self.rsvp.focus = RsvpField::Accept,
                _ => {}
            },
        }
    }

    fn handle_text_field_key(&mut self, key: KeyEvent) {
        let Some(input) = self.rsvp.focused_input() else {
            return;
        };
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.insert_char(ch);
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Enter => self.rsvp.focus_next(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EventConfig;
    use crate::prefs::PrefStore;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn app() -> App {
        let mut app = App::with_parts(PrefStore::unavailable(), EventConfig::default());
        app.body_area = Rect::new(0, 1, 80, 20);
        app
    }

    #[test]
    fn ctrl_q_quits_and_ctrl_l_toggles_language() {
        let mut app = app();
        let lang = app.lang;
        app.handle_key(ctrl('l'));
        assert_ne!(app.lang, lang);
        app.handle_key(ctrl('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn tab_enters_the_form_and_cycles_fields() {
        let mut app = app();
        assert_eq!(app.focus, FocusArea::Page);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, FocusArea::Rsvp);
        assert_eq!(app.rsvp.focus, RsvpField::Name);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.rsvp.focus, RsvpField::Phone);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.focus, FocusArea::Page);
    }

    #[test]
    fn typed_name_reaches_the_form_and_enter_submits() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        for ch in "Anand".chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
        assert_eq!(app.rsvp.name.as_str(), "Anand");

        // Walk to the accept button and press it.
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.rsvp.focus, RsvpField::Accept);
        app.handle_key(key(KeyCode::Enter));
        assert!(app.overlay.is_some());

        // Overlay captures keys; Esc dismisses it.
        app.handle_key(key(KeyCode::Esc));
        assert!(app.overlay.is_none());
    }

    #[test]
    fn overlay_blocks_page_scrolling_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        for ch in "Ravi".chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Tab));
        }
        app.handle_key(key(KeyCode::Enter));
        assert!(app.overlay.is_some());

        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.scroll, 0, "scroll is locked under the overlay");
    }
}
