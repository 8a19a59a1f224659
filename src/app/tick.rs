use std::time::{Duration, Instant};

use chrono::Utc;
use log::debug;

use super::App;
use crate::definitions::SectionId;
use crate::sched::Task;
use crate::story::{self, Phase, StepOutcome};
use crate::theme::{self, Theme};

/// Story reveal begins once this much of its section is in view.
const STORY_VISIBILITY_THRESHOLD: f32 = 0.3;

impl App {
    /// Called on every tick of the event loop: integrates the particle
    /// layer, checks the story visibility trigger, then drains and
    /// dispatches due timer tasks in deadline order.
    pub fn on_tick(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.shake_phase = !self.shake_phase;

        let (width, height) = (self.body_area.width, self.body_area.height);
        self.particles.advance(dt.as_secs_f32(), width, height);
        self.story.tick_blink(dt);

        if !self.story.started()
            && self.visible_fraction(SectionId::Story) >= STORY_VISIBILITY_THRESHOLD
        {
            let session = self.story.trigger();
            debug!("story section in view, starting session {}", session);
            self.sched
                .schedule_in(now, story::START_DELAY, Task::StoryStart { session });
        }

        for task in self.sched.due(now) {
            self.dispatch(task, now);
        }
    }

    fn dispatch(&mut self, task: Task, now: Instant) {
        match task {
            Task::CountdownTick => {
                self.countdown_display = self.countdown.display_at(Utc::now());
                self.sched
                    .schedule_in(now, Duration::from_secs(1), Task::CountdownTick);
            }
            Task::ThemeAlign => {
                // Realign from the wall clock, then rotate on the fixed
                // period from here.
                self.active_theme = Theme::current();
                self.sched
                    .schedule_in(now, rotation_period(), Task::ThemeRotate);
            }
            Task::ThemeRotate => {
                self.active_theme = self.active_theme.next();
                debug!("theme rotated to {:?}", self.active_theme);
                self.sched
                    .schedule_in(now, rotation_period(), Task::ThemeRotate);
            }
            Task::StoryStart { session } => {
                // Stale sessions are dropped, never acted on.
                if session == self.story.session() {
                    self.story.begin();
                    self.sched
                        .schedule_in(now, Duration::ZERO, Task::StoryStep { session });
                }
            }
            Task::StoryStep { session } => {
                if session != self.story.session() {
                    return;
                }
                match self.story.step() {
                    StepOutcome::Continue { delay } => {
                        self.sched
                            .schedule_in(now, delay, Task::StoryStep { session });
                    }
                    StepOutcome::Done => {
                        self.sched.schedule_in(
                            now,
                            story::CURSOR_LINGER,
                            Task::StoryCursorHide { session },
                        );
                    }
                }
            }
            Task::StoryCursorHide { session } => {
                if session == self.story.session() && self.story.phase() == Phase::Complete {
                    self.story.hide_cursor();
                }
            }
            Task::Spawn(kind) => {
                let (width, height) = (self.body_area.width, self.body_area.height);
                self.particles.spawn(kind, width, height);
                let delay = kind.spawn_interval(&mut rand::thread_rng());
                self.sched.schedule_in(now, delay, Task::Spawn(kind));
            }
            Task::ShakeClear => {
                self.rsvp_shake = false;
            }
        }
    }
}

fn rotation_period() -> Duration {
    Duration::from_secs(u64::from(theme::ROTATION_MINUTES) * 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EventConfig;
    use crate::i18n::story_text;
    use crate::prefs::PrefStore;
    use ratatui::layout::Rect;

    fn ticking_app() -> (App, Instant) {
        let mut app = App::with_parts(PrefStore::unavailable(), EventConfig::default());
        app.body_area = Rect::new(0, 1, 80, 24);
        let now = app.last_tick;
        (app, now)
    }

    /// Drives ticks at a fixed cadence for `total` simulated time.
    fn run_for(app: &mut App, start: Instant, total: Duration) -> Instant {
        let step = Duration::from_millis(50);
        let mut now = start;
        let end = start + total;
        while now < end {
            now += step;
            app.on_tick(now);
        }
        now
    }

    #[test]
    fn story_triggers_once_visible_and_reveals_everything() {
        let (mut app, start) = ticking_app();
        // 24 rows of viewport over a 52-row page: the story section is
        // already ≥30% visible at scroll 0.
        app.on_tick(start + Duration::from_millis(50));
        assert!(app.story.started());

        run_for(&mut app, start, Duration::from_secs(90));
        assert_eq!(app.story.revealed_text(), story_text(app.lang));
        assert_eq!(app.story.phase(), Phase::Complete);
    }

    #[test]
    fn language_change_mid_reveal_restarts_cleanly() {
        let (mut app, start) = ticking_app();
        let now = run_for(&mut app, start, Duration::from_secs(3));
        assert!(app.story.started());
        assert!(!app.story.revealed_text().is_empty());

        app.toggle_language();
        run_for(&mut app, now, Duration::from_secs(120));
        // Exactly the new language's string, no leftovers.
        assert_eq!(app.story.revealed_text(), story_text(app.lang));
    }

    #[test]
    fn countdown_task_keeps_rescheduling() {
        let (mut app, start) = ticking_app();
        run_for(&mut app, start, Duration::from_secs(3));
        // Still ticking: the display matches a fresh computation.
        assert_eq!(
            app.countdown_display,
            app.countdown.display_at(Utc::now())
        );
    }

    #[test]
    fn shake_cue_clears_after_its_task_fires() {
        let (mut app, start) = ticking_app();
        app.rsvp_shake = true;
        app.sched
            .schedule_in(start, Duration::from_millis(500), Task::ShakeClear);
        run_for(&mut app, start, Duration::from_secs(1));
        assert!(!app.rsvp_shake);
    }
}
