//! The central application state.

use std::time::Instant;

use ratatui::layout::Rect;

use crate::config::EventConfig;
use crate::countdown::{Countdown, CountdownDisplay};
use crate::definitions::{ControlRegistry, FocusArea, Lang};
use crate::event::Event;
use crate::particles::Particles;
use crate::prefs::PrefStore;
use crate::rsvp::{Attendance, RsvpForm};
use crate::sched::Scheduler;
use crate::story::Story;
use crate::theme::Theme;

/// Single source of truth for everything the renderer draws and the
/// event handlers mutate. Constructed once in `App::new`; there are no
/// module-level singletons.
pub struct App {
    /// Flag to indicate the application should quit.
    pub should_quit: bool,
    /// Active display language.
    pub lang: Lang,
    /// Which area receives non-global keys.
    pub focus: FocusArea,
    /// Persisted-preference handle.
    pub(crate) prefs: PrefStore,
    /// Invitation content (names, instant, venue).
    pub config: EventConfig,
    /// Countdown engine and its last computed display.
    pub countdown: Countdown,
    pub countdown_display: CountdownDisplay,
    /// Palette currently applied to the whole card.
    pub active_theme: Theme,
    /// The typewriter.
    pub story: Story,
    /// Decorative layer.
    pub particles: Particles,
    /// The RSVP form.
    pub rsvp: RsvpForm,
    /// True while the name field shows the validation shake cue.
    pub rsvp_shake: bool,
    /// The currently active overlay, if any. Page scrolling is locked
    /// while one is visible.
    pub overlay: Option<OverlayState>,

    // --- UI & layout ---
    /// First visible page row.
    pub scroll: u16,
    /// Body area of the last rendered frame (page viewport).
    pub body_area: Rect,
    /// Message shown in the status bar.
    pub status_message: String,
    /// Clickable control rects, rebuilt by the renderer each frame.
    pub controls: ControlRegistry,

    // --- Internal ---
    /// Timer queue driving all time-based behavior.
    pub(crate) sched: Scheduler,
    /// Timestamp of the previous tick, for dt integration.
    pub(crate) last_tick: Instant,
    /// Frame parity used by the shake cue's horizontal jitter.
    pub(crate) shake_phase: bool,
}

/// State of any overlay panel drawn on top of the card.
#[derive(Debug, Clone)]
pub enum OverlayState {
    Confirmation(ConfirmationState),
}

/// The post-submission thank-you overlay.
#[derive(Debug, Clone)]
pub struct ConfirmationState {
    pub attendance: Attendance,
}

impl App {
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusGained => self.particles.set_paused(false),
            Event::FocusLost => self.particles.set_paused(true),
            Event::Tick => {}
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
