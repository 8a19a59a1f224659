//! Typewriter reveal of the couple's story.
//!
//! A reveal belongs to a *writing session*, identified by a counter that
//! only ever moves forward. Scheduled steps carry the session they were
//! queued for; a step whose session is no longer current is stale and
//! must be dropped, which is how a restart (visibility re-trigger or
//! language change) cancels an in-flight reveal without touching the
//! timer queue.

use std::time::Duration;

use crate::definitions::Lang;
use crate::i18n::story_text;

/// Delay before the first character after the section scrolls into view.
pub const START_DELAY: Duration = Duration::from_millis(600);
/// Cursor stays on screen this long after the reveal completes.
pub const CURSOR_LINGER: Duration = Duration::from_millis(1500);

const CHAR_PAUSE: Duration = Duration::from_millis(55);
const SPACE_PAUSE: Duration = Duration::from_millis(30);
const COMMA_PAUSE: Duration = Duration::from_millis(280);
const SENTENCE_PAUSE: Duration = Duration::from_millis(620);
const LINE_PAUSE: Duration = Duration::from_millis(150);
const PARAGRAPH_PAUSE: Duration = Duration::from_millis(900);

const BLINK_PERIOD: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Writing,
    Complete,
}

/// Outcome of advancing a session by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// More to reveal; schedule the next step after `delay`.
    Continue { delay: Duration },
    /// The whole source string is out.
    Done,
}

#[derive(Debug)]
pub struct Story {
    text: &'static str,
    /// Byte offset of the reveal frontier into `text`.
    revealed: usize,
    session: u64,
    phase: Phase,
    started: bool,
    cursor_hidden: bool,
    blink_clock: Duration,
}

impl Story {
    pub fn new(lang: Lang) -> Self {
        Self {
            text: story_text(lang),
            revealed: 0,
            session: 0,
            phase: Phase::Idle,
            started: false,
            cursor_hidden: false,
            blink_clock: Duration::ZERO,
        }
    }

    pub fn revealed_text(&self) -> &str {
        &self.text[..self.revealed]
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the section has scrolled into view at least once.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Switches the source text before the reveal has ever been
    /// triggered. After the trigger, use [`Story::restart`].
    pub fn set_language(&mut self, lang: Lang) {
        debug_assert!(!self.started);
        self.text = story_text(lang);
    }

    /// First visibility trigger. Returns the session the caller should
    /// schedule a start task for.
    pub fn trigger(&mut self) -> u64 {
        self.started = true;
        self.session += 1;
        self.session
    }

    /// Discards all revealed text and begins a fresh session over the
    /// given language's string. Any in-flight session becomes stale.
    pub fn restart(&mut self, lang: Lang) -> u64 {
        self.text = story_text(lang);
        self.revealed = 0;
        self.phase = Phase::Idle;
        self.cursor_hidden = false;
        self.blink_clock = Duration::ZERO;
        self.session += 1;
        self.session
    }

    /// Start task fired for the current session.
    pub fn begin(&mut self) {
        self.phase = Phase::Writing;
    }

    /// Reveals the next character. A double line-break is consumed whole
    /// (both characters) as a paragraph break with the longest pause; a
    /// lone line-break is whitespace with a short one.
    pub fn step(&mut self) -> StepOutcome {
        let rest = &self.text[self.revealed..];
        let mut chars = rest.chars();
        let Some(ch) = chars.next() else {
            self.phase = Phase::Complete;
            return StepOutcome::Done;
        };
        if ch == '\n' && chars.next() == Some('\n') {
            self.revealed += 2;
            return StepOutcome::Continue {
                delay: PARAGRAPH_PAUSE,
            };
        }
        self.revealed += ch.len_utf8();
        let delay = match ch {
            '.' | '!' | '?' => SENTENCE_PAUSE,
            ',' => COMMA_PAUSE,
            ' ' => SPACE_PAUSE,
            '\n' => LINE_PAUSE,
            _ => CHAR_PAUSE,
        };
        StepOutcome::Continue { delay }
    }

    /// Cursor-hide task fired after completion.
    pub fn hide_cursor(&mut self) {
        self.cursor_hidden = true;
    }

    /// Advances the blink clock; called once per app tick.
    pub fn tick_blink(&mut self, dt: Duration) {
        self.blink_clock += dt;
    }

    /// Whether the cursor glyph should be drawn this frame. Blinks while
    /// writing, holds steady once complete, disappears after the linger.
    pub fn cursor_visible(&self) -> bool {
        match self.phase {
            Phase::Idle => false,
            Phase::Writing => {
                (self.blink_clock.as_millis() / BLINK_PERIOD.as_millis()) % 2 == 0
            }
            Phase::Complete => !self.cursor_hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(story: &mut Story) -> usize {
        let mut steps = 0;
        loop {
            match story.step() {
                StepOutcome::Continue { .. } => steps += 1,
                StepOutcome::Done => break,
            }
            assert!(steps < 10_000, "reveal did not terminate");
        }
        steps
    }

    #[test]
    fn reveals_the_full_string_exactly_once() {
        let mut story = Story::new(Lang::En);
        story.trigger();
        story.begin();
        run_to_completion(&mut story);
        assert_eq!(story.revealed_text(), story_text(Lang::En));
        assert_eq!(story.phase(), Phase::Complete);
        // Further steps stay terminal and add nothing.
        assert_eq!(story.step(), StepOutcome::Done);
        assert_eq!(story.revealed_text(), story_text(Lang::En));
    }

    #[test]
    fn restart_discards_previous_language_text() {
        let mut story = Story::new(Lang::En);
        let first = story.trigger();
        story.begin();
        for _ in 0..25 {
            story.step();
        }
        assert!(!story.revealed_text().is_empty());

        let second = story.restart(Lang::Te);
        assert!(second > first, "sessions are monotonically increasing");
        assert_eq!(story.revealed_text(), "");

        story.begin();
        run_to_completion(&mut story);
        assert_eq!(story.revealed_text(), story_text(Lang::Te));
    }

    #[test]
    fn stale_session_detection() {
        let mut story = Story::new(Lang::En);
        let old = story.trigger();
        let new = story.restart(Lang::Te);
        // A scheduled step tagged with `old` must be dropped by the
        // dispatcher; the current session is `new`.
        assert_ne!(old, story.session());
        assert_eq!(new, story.session());
    }

    #[test]
    fn paragraph_break_consumes_both_characters() {
        let mut story = Story::new(Lang::En);
        story.text = "ab\n\ncd";
        story.trigger();
        story.begin();
        story.step();
        story.step();
        let outcome = story.step();
        assert_eq!(
            outcome,
            StepOutcome::Continue {
                delay: PARAGRAPH_PAUSE
            }
        );
        assert_eq!(story.revealed_text(), "ab\n\n");
    }

    #[test]
    fn punctuation_pacing() {
        let mut story = Story::new(Lang::En);
        story.text = "a, b.\nc";
        story.trigger();
        story.begin();
        assert_eq!(story.step(), StepOutcome::Continue { delay: CHAR_PAUSE });
        assert_eq!(story.step(), StepOutcome::Continue { delay: COMMA_PAUSE });
        assert_eq!(story.step(), StepOutcome::Continue { delay: SPACE_PAUSE });
        assert_eq!(story.step(), StepOutcome::Continue { delay: CHAR_PAUSE });
        assert_eq!(
            story.step(),
            StepOutcome::Continue {
                delay: SENTENCE_PAUSE
            }
        );
        assert_eq!(story.step(), StepOutcome::Continue { delay: LINE_PAUSE });
    }

    #[test]
    fn cursor_lifecycle() {
        let mut story = Story::new(Lang::En);
        assert!(!story.cursor_visible());
        story.trigger();
        story.begin();
        assert!(story.cursor_visible());
        story.tick_blink(Duration::from_millis(600));
        assert!(!story.cursor_visible(), "cursor blinks off mid-period");

        story.text = "x";
        story.revealed = 0;
        story.step();
        story.step();
        assert_eq!(story.phase(), Phase::Complete);
        assert!(story.cursor_visible(), "steady after completion");
        story.hide_cursor();
        assert!(!story.cursor_visible());
    }
}
