use std::env;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;
use log::{debug, info};
use ratatui::layout::Rect;

use super::App;
use crate::config::EventConfig;
use crate::countdown::Countdown;
use crate::definitions::{ControlRegistry, FocusArea};
use crate::i18n::strings;
use crate::particles::{EmitterKind, Particles};
use crate::prefs::PrefStore;
use crate::rsvp::RsvpForm;
use crate::sched::{Scheduler, Task};
use crate::story::Story;
use crate::theme::{self, Theme};

impl App {
    /// Builds the app from the default preference store and the event
    /// config found under the working directory.
    pub fn new() -> Result<Self> {
        let root = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let config = EventConfig::load_or_default(&root);
        Ok(Self::with_parts(PrefStore::open_default(), config))
    }

    /// Wires every component and schedules the initial task set. Split
    /// from [`App::new`] so tests can inject a store and config.
    pub fn with_parts(prefs: PrefStore, config: EventConfig) -> Self {
        let lang = prefs.load().language.unwrap_or_default();
        info!("starting invitation, language {}", lang.code());

        let countdown = Countdown::new(config.wedding_instant());
        let countdown_display = countdown.display_at(Utc::now());

        let now = Instant::now();
        let mut sched = Scheduler::new();
        // Countdown refreshes once per second from here on.
        sched.schedule_in(now, Duration::from_secs(1), Task::CountdownTick);
        // One-shot alignment to the next half-hour boundary; rotation
        // proper starts there.
        sched.schedule_in(now, theme::until_next_boundary(), Task::ThemeAlign);
        // Stagger the emitters so they do not all fire on the same tick.
        for (index, kind) in EmitterKind::ALL.into_iter().enumerate() {
            sched.schedule_in(
                now,
                Duration::from_millis(400 + 350 * index as u64),
                Task::Spawn(kind),
            );
        }
        debug!("initial schedule primed");

        Self {
            should_quit: false,
            lang,
            focus: FocusArea::Page,
            prefs,
            config,
            countdown,
            countdown_display,
            active_theme: Theme::current(),
            story: Story::new(lang),
            particles: Particles::new(),
            rsvp: RsvpForm::new(),
            rsvp_shake: false,
            overlay: None,
            scroll: 0,
            body_area: Rect::default(),
            status_message: String::from(strings(lang).help_line()),
            controls: ControlRegistry::default(),
            sched,
            last_tick: now,
            shake_phase: false,
        }
    }
}
