use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The two display languages of the invitation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Te,
}

impl Lang {
    /// The other member of the two-language set.
    pub fn toggle(self) -> Self {
        match self {
            Lang::En => Lang::Te,
            Lang::Te => Lang::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Te => "te",
        }
    }

    /// Label for the toggle control: names the language you would switch *to*.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Lang::En => "తెలుగు",
            Lang::Te => "English",
        }
    }
}

/// Which part of the screen receives keys that are not global shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusArea {
    Page,
    Rsvp,
}

/// Sections of the invitation card, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Countdown,
    Story,
    Rsvp,
    Venue,
}

/// Clickable controls registered by the renderer each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    LangToggle,
    RsvpName,
    RsvpPhone,
    RsvpParty,
    RsvpAccept,
    RsvpDecline,
    ModalClose,
    ModalContent,
}

/// Screen rects of the clickable controls, rebuilt every frame.
///
/// Mouse dispatch hit-tests against this instead of re-deriving layout.
#[derive(Default, Debug, Clone)]
pub struct ControlRegistry {
    entries: HashMap<ControlKind, Rect>,
}

impl ControlRegistry {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn register(&mut self, kind: ControlKind, area: Rect) {
        self.entries.insert(kind, area);
    }

    pub fn area(&self, kind: ControlKind) -> Option<Rect> {
        self.entries.get(&kind).copied()
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<ControlKind> {
        self.entries.iter().find_map(|(kind, rect)| {
            if rect_contains(rect, column, row) {
                Some(*kind)
            } else {
                None
            }
        })
    }
}

pub fn rect_contains(rect: &Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Lang::En.toggle(), Lang::Te);
        assert_eq!(Lang::Te.toggle(), Lang::En);
        assert_eq!(Lang::En.toggle().toggle(), Lang::En);
    }

    #[test]
    fn toggle_label_names_the_other_language() {
        assert_eq!(Lang::En.toggle_label(), "తెలుగు");
        assert_eq!(Lang::Te.toggle_label(), "English");
    }

    #[test]
    fn registry_hit_testing() {
        let mut controls = ControlRegistry::default();
        controls.register(ControlKind::LangToggle, Rect::new(10, 0, 12, 1));
        assert_eq!(controls.hit_test(10, 0), Some(ControlKind::LangToggle));
        assert_eq!(controls.hit_test(21, 0), Some(ControlKind::LangToggle));
        assert_eq!(controls.hit_test(22, 0), None);
        assert_eq!(controls.hit_test(10, 1), None);
    }
}
