//! RSVP form state, validation and the submission record.
//!
//! Submission is a local diagnostic record only; transport to a real
//! backend is somebody else's job.

use serde::Serialize;
use thiserror::Error;

use crate::definitions::Lang;
use crate::i18n::strings;

/// Party sizes offered by the guests selector; the first is the default.
pub const PARTY_CHOICES: [u8; 6] = [1, 2, 3, 4, 5, 6];

/// The button the guest pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attendance {
    Accept,
    Decline,
}

impl Attendance {
    pub fn label(&self, lang: Lang) -> &'static str {
        match self {
            Attendance::Accept => strings(lang).rsvp_accept(),
            Attendance::Decline => strings(lang).rsvp_decline(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RsvpError {
    #[error("name must not be empty")]
    EmptyName,
}

/// A validated submission, logged as the delivery record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RsvpRecord {
    pub name: String,
    pub phone: String,
    pub guests: u8,
    pub attendance: Attendance,
}

/// Form controls in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpField {
    Name,
    Phone,
    Party,
    Accept,
    Decline,
}

impl RsvpField {
    const ORDER: [RsvpField; 5] = [
        RsvpField::Name,
        RsvpField::Phone,
        RsvpField::Party,
        RsvpField::Accept,
        RsvpField::Decline,
    ];

    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Single-line text buffer with a byte cursor.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    buffer: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Cursor position in characters, for rendering.
    pub fn cursor_chars(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }

    /// Text before the cursor; the renderer measures its display width.
    pub fn cursor_prefix(&self) -> &str {
        &self.buffer[..self.cursor]
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            return;
        }
        self.buffer.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.buffer.drain(idx..self.cursor);
            self.cursor = idx;
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        } else {
            self.cursor = 0;
        }
    }

    pub fn move_right(&mut self) {
        if let Some((_, ch)) = self.buffer[self.cursor..].char_indices().next() {
            self.cursor += ch.len_utf8();
        } else {
            self.cursor = self.buffer.len();
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}

#[derive(Debug, Default)]
pub struct RsvpForm {
    pub name: InputBuffer,
    pub phone: InputBuffer,
    /// Index into [`PARTY_CHOICES`].
    pub party_index: usize,
    pub focus: RsvpField,
}

impl Default for RsvpField {
    fn default() -> Self {
        RsvpField::Name
    }
}

impl RsvpForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn party_size(&self) -> u8 {
        PARTY_CHOICES[self.party_index.min(PARTY_CHOICES.len() - 1)]
    }

    pub fn cycle_party(&mut self, delta: isize) {
        let len = PARTY_CHOICES.len() as isize;
        let mut next = self.party_index as isize + delta;
        if next < 0 {
            next += len;
        }
        self.party_index = (next % len) as usize;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// The text buffer under focus, if the focused control is one.
    pub fn focused_input(&mut self) -> Option<&mut InputBuffer> {
        match self.focus {
            RsvpField::Name => Some(&mut self.name),
            RsvpField::Phone => Some(&mut self.phone),
            _ => None,
        }
    }

    /// Validates and takes a submission. On success the fields reset to
    /// their defaults; on failure everything is left as typed so the
    /// guest can fix it.
    pub fn submit(&mut self, attendance: Attendance) -> Result<RsvpRecord, RsvpError> {
        let name = self.name.as_str().trim();
        if name.is_empty() {
            return Err(RsvpError::EmptyName);
        }
        let record = RsvpRecord {
            name: name.to_string(),
            phone: self.phone.as_str().trim().to_string(),
            guests: self.party_size(),
            attendance,
        };
        self.reset();
        Ok(record)
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.party_index = 0;
        self.focus = RsvpField::Name;
    }
}
