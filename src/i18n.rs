use serde::{Deserialize, Serialize};

use crate::definitions::Lang;

/// Fixed UI copy, one implementation per display language.
pub trait Strings {
    fn countdown_title(&self) -> &'static str;
    fn days_label(&self) -> &'static str;
    fn hours_label(&self) -> &'static str;
    fn minutes_label(&self) -> &'static str;
    fn seconds_label(&self) -> &'static str;
    fn story_title(&self) -> &'static str;
    fn rsvp_title(&self) -> &'static str;
    fn rsvp_name_label(&self) -> &'static str;
    fn rsvp_phone_label(&self) -> &'static str;
    fn rsvp_party_label(&self) -> &'static str;
    fn rsvp_accept(&self) -> &'static str;
    fn rsvp_decline(&self) -> &'static str;
    fn modal_title(&self) -> &'static str;
    fn modal_message(&self) -> &'static str;
    fn modal_close(&self) -> &'static str;
    fn venue_title(&self) -> &'static str;
    fn name_required(&self) -> &'static str;
    fn response_recorded(&self) -> &'static str;
    fn help_line(&self) -> &'static str;
}

pub struct English;
impl Strings for English {
    fn countdown_title(&self) -> &'static str { "Counting Down to the Big Day" }
    fn days_label(&self) -> &'static str { "Days" }
    fn hours_label(&self) -> &'static str { "Hours" }
    fn minutes_label(&self) -> &'static str { "Minutes" }
    fn seconds_label(&self) -> &'static str { "Seconds" }
    fn story_title(&self) -> &'static str { "Our Story" }
    fn rsvp_title(&self) -> &'static str { "Will You Join Us?" }
    fn rsvp_name_label(&self) -> &'static str { "Your Name" }
    fn rsvp_phone_label(&self) -> &'static str { "Phone" }
    fn rsvp_party_label(&self) -> &'static str { "Guests" }
    fn rsvp_accept(&self) -> &'static str { "Joyfully Accept" }
    fn rsvp_decline(&self) -> &'static str { "Regretfully Decline" }
    fn modal_title(&self) -> &'static str { "Thank You!" }
    fn modal_message(&self) -> &'static str { "Your response has been recorded. We can't wait to celebrate with you!" }
    fn modal_close(&self) -> &'static str { "Close" }
    fn venue_title(&self) -> &'static str { "Venue" }
    fn name_required(&self) -> &'static str { "Please tell us your name" }
    fn response_recorded(&self) -> &'static str { "Response recorded" }
    fn help_line(&self) -> &'static str { "Ctrl+L language · Tab form · ↑/↓ scroll · Ctrl+Q quit" }
}

pub struct Telugu;
impl Strings for Telugu {
    fn countdown_title(&self) -> &'static str { "శుభ ఘడియలకు ఇంకా..." }
    fn days_label(&self) -> &'static str { "రోజులు" }
    fn hours_label(&self) -> &'static str { "గంటలు" }
    fn minutes_label(&self) -> &'static str { "నిమిషాలు" }
    fn seconds_label(&self) -> &'static str { "సెకన్లు" }
    fn story_title(&self) -> &'static str { "మా కథ" }
    fn rsvp_title(&self) -> &'static str { "మీరు వస్తున్నారా?" }
    fn rsvp_name_label(&self) -> &'static str { "మీ పేరు" }
    fn rsvp_phone_label(&self) -> &'static str { "ఫోన్ నంబర్" }
    fn rsvp_party_label(&self) -> &'static str { "అతిథుల సంఖ్య" }
    fn rsvp_accept(&self) -> &'static str { "తప్పకుండా వస్తాం" }
    fn rsvp_decline(&self) -> &'static str { "క్షమించండి, రాలేము" }
    fn modal_title(&self) -> &'static str { "ధన్యవాదాలు!" }
    fn modal_message(&self) -> &'static str { "మీ సమాధానం నమోదు అయింది. మీతో కలిసి వేడుక జరుపుకోవాలని ఎదురుచూస్తున్నాం!" }
    fn modal_close(&self) -> &'static str { "మూసివేయి" }
    fn venue_title(&self) -> &'static str { "వేదిక" }
    fn name_required(&self) -> &'static str { "దయచేసి మీ పేరు తెలపండి" }
    fn response_recorded(&self) -> &'static str { "సమాధానం నమోదు అయింది" }
    fn help_line(&self) -> &'static str { "Ctrl+L భాష · Tab ఫారం · ↑/↓ స్క్రోల్ · Ctrl+Q నిష్క్రమణ" }
}

/// Catalog for the active language.
pub fn strings(lang: Lang) -> &'static dyn Strings {
    match lang {
        Lang::En => &English,
        Lang::Te => &Telugu,
    }
}

/// A piece of invitation copy carrying both language payloads.
///
/// The Telugu payload is optional: an entry without one keeps showing its
/// English text in Telugu mode instead of going blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub te: Option<String>,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, te: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            te: Some(te.into()),
        }
    }

    pub fn english_only(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            te: None,
        }
    }

    pub fn resolve(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Te => self.te.as_deref().unwrap_or(&self.en),
        }
    }
}

/// The couple's story, revealed by the typewriter. Double line-breaks mark
/// paragraph boundaries and drive the longest pacing pause.
pub fn story_text(lang: Lang) -> &'static str {
    match lang {
        Lang::En => STORY_EN,
        Lang::Te => STORY_TE,
    }
}

const STORY_EN: &str = "We met on a rainy evening in Hyderabad, sharing one umbrella and two cups of chai. What began as a conversation about books became a friendship, and the friendship quietly became everything.\n\nSeven monsoons later, under the same sky, he asked and she said yes. Now we begin our forever, and we want you there when it starts!";

const STORY_TE: &str = "హైదరాబాద్‌లో ఒక వర్షపు సాయంత్రం, ఒకే గొడుగు కింద, రెండు కప్పుల చాయ్‌తో మేము కలిశాం. పుస్తకాల గురించి మొదలైన మాటలు స్నేహంగా మారాయి, ఆ స్నేహం నెమ్మదిగా సర్వస్వం అయింది.\n\nఏడు వానాకాలాల తరువాత, అదే ఆకాశం కింద, అతను అడిగాడు, ఆమె సరే అంది. ఇప్పుడు మా జీవన ప్రయాణం మొదలవుతోంది, ఆ క్షణంలో మీరూ ఉండాలని మా కోరిక!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_round_trips_through_a_double_toggle() {
        let text = LocalizedText::new("Welcome", "స్వాగతం");
        let original = text.resolve(Lang::En).to_string();
        let mut lang = Lang::En;
        lang = lang.toggle();
        assert_eq!(text.resolve(lang), "స్వాగతం");
        lang = lang.toggle();
        assert_eq!(text.resolve(lang), original);
    }

    #[test]
    fn missing_payload_leaves_text_unchanged() {
        let text = LocalizedText::english_only("Garden Gate 3");
        assert_eq!(text.resolve(Lang::Te), "Garden Gate 3");
    }

    #[test]
    fn story_texts_have_paragraph_breaks() {
        assert!(STORY_EN.contains("\n\n"));
        assert!(STORY_TE.contains("\n\n"));
    }
}
