use std::time::Duration;

use log::{info, warn};

use super::{App, ConfirmationState, OverlayState};
use crate::definitions::FocusArea;
use crate::i18n::strings;
use crate::prefs::Preferences;
use crate::rsvp::{Attendance, RsvpField};
use crate::sched::Task;
use crate::story;

/// How long the name field shakes after a failed validation.
const SHAKE_DURATION: Duration = Duration::from_millis(500);

impl App {
    /// Flips the display language, persists the choice, and restarts an
    /// in-flight story reveal in the new language. Rendering picks up
    /// the change on the next frame; applying it twice lands back on
    /// the original text everywhere.
    pub fn toggle_language(&mut self) {
        self.lang = self.lang.toggle();
        info!("language switched to {}", self.lang.code());
        self.prefs.save(&Preferences {
            language: Some(self.lang),
        });
        if self.story.started() {
            let session = self.story.restart(self.lang);
            self.sched.schedule_in(
                self.last_tick,
                story::START_DELAY,
                Task::StoryStart { session },
            );
        } else {
            self.story.set_language(self.lang);
        }
        self.status_message = String::from(strings(self.lang).help_line());
    }

    /// Validates and records the guest's response. Failure shakes the
    /// name field and pulls focus back to it; success logs the record,
    /// resets the form and opens the confirmation overlay.
    pub fn submit_rsvp(&mut self, attendance: Attendance) {
        match self.rsvp.submit(attendance) {
            Ok(record) => {
                match serde_json::to_string(&record) {
                    Ok(json) => info!("rsvp submitted: {}", json),
                    Err(err) => warn!("rsvp submitted, but not serializable: {}", err),
                }
                self.overlay = Some(OverlayState::Confirmation(ConfirmationState {
                    attendance,
                }));
                self.status_message = String::from(strings(self.lang).response_recorded());
            }
            Err(err) => {
                warn!("rsvp rejected: {}", err);
                self.rsvp_shake = true;
                self.sched
                    .schedule_in(self.last_tick, SHAKE_DURATION, Task::ShakeClear);
                self.focus = FocusArea::Rsvp;
                self.rsvp.focus = RsvpField::Name;
                self.status_message = String::from(strings(self.lang).name_required());
            }
        }
    }

    /// Dismisses the confirmation overlay, unlocking page scrolling.
    pub fn close_overlay(&mut self) {
        self.overlay = None;
        self.status_message = String::from(strings(self.lang).help_line());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EventConfig;
    use crate::definitions::Lang;
    use crate::prefs::PrefStore;
    use std::env;
    use std::fs;

    fn fresh_app() -> App {
        App::with_parts(PrefStore::unavailable(), EventConfig::default())
    }

    #[test]
    fn toggling_twice_restores_the_original_language() {
        let mut app = fresh_app();
        let original = app.lang;
        app.toggle_language();
        assert_ne!(app.lang, original);
        app.toggle_language();
        assert_eq!(app.lang, original);
    }

    #[test]
    fn toggle_persists_the_choice() {
        let dir = env::temp_dir().join(format!("kalyanam-actions-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let mut app = App::with_parts(PrefStore::with_dir(dir.clone()), EventConfig::default());
        assert_eq!(app.lang, Lang::En);
        app.toggle_language();

        // A later launch reads Telugu back.
        let reopened = App::with_parts(PrefStore::with_dir(dir), EventConfig::default());
        assert_eq!(reopened.lang, Lang::Te);
    }

    #[test]
    fn empty_name_keeps_overlay_hidden_and_refocuses_name() {
        let mut app = fresh_app();
        app.submit_rsvp(Attendance::Accept);
        assert!(app.overlay.is_none());
        assert!(app.rsvp_shake);
        assert_eq!(app.focus, FocusArea::Rsvp);
        assert_eq!(app.rsvp.focus, RsvpField::Name);
    }

    #[test]
    fn valid_submission_opens_overlay_and_resets_fields() {
        let mut app = fresh_app();
        for ch in "Sita".chars() {
            app.rsvp.name.insert_char(ch);
        }
        for ch in "12345".chars() {
            app.rsvp.phone.insert_char(ch);
        }
        app.rsvp.cycle_party(1);
        app.submit_rsvp(Attendance::Accept);

        assert!(matches!(
            app.overlay,
            Some(OverlayState::Confirmation(ConfirmationState {
                attendance: Attendance::Accept,
            }))
        ));
        assert!(app.rsvp.name.is_empty());
        assert!(app.rsvp.phone.is_empty());
        assert_eq!(app.rsvp.party_index, 0);

        app.close_overlay();
        assert!(app.overlay.is_none());
    }
}
