//! Rule-based assistant replies.
//!
//! The assistant understands a handful of keywords. A section keyword makes
//! it point the user at that section; otherwise it answers greetings and
//! thanks, and falls back to a short usage hint.

/// The sections of the app an assistant reply can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Symptoms,
    DrugInfo,
    Reminder,
}

impl Section {
    pub fn page_id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Symptoms => "symptoms",
            Self::DrugInfo => "drug-info",
            Self::Reminder => "reminder",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.page_id())
    }
}

/// Checked in order against the lower-cased message.
const SECTION_KEYWORDS: &[(&str, Section)] = &[
    ("symptom", Section::Symptoms),
    ("symptoms", Section::Symptoms),
    ("drug", Section::DrugInfo),
    ("drugs", Section::DrugInfo),
    ("reminder", Section::Reminder),
    ("reminders", Section::Reminder),
    ("home", Section::Home),
];

pub const GREETING: &str = "Hi! I can jump to sections or remind you how to set reminders.";
pub const WELCOME: &str = "You're welcome! Good luck at the hackathon 🎉";
pub const FALLBACK: &str =
    "Sorry, I can only do simple navigation hints: try \"symptom\", \"drug\", or \"reminder\".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: String,
    /// Section the user asked for, if any.
    pub navigate_to: Option<Section>,
}

/// Reply to `message`, or `None` when it is blank.
pub fn respond(message: &str) -> Option<AssistantReply> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_lowercase();

    let reply = if let Some(&(_, section)) = SECTION_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(*keyword))
    {
        AssistantReply {
            text: format!("Opened the {section} section for you."),
            navigate_to: Some(section),
        }
    } else {
        let text = if lower.contains("hello") {
            GREETING
        } else if lower.contains("thanks") {
            WELCOME
        } else {
            FALLBACK
        };
        AssistantReply {
            text: text.to_string(),
            navigate_to: None,
        }
    };

    tracing::debug!(navigate_to = ?reply.navigate_to, "assistant replied");
    Some(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_keyword_navigates() {
        let reply = respond("take me to my Reminders please").unwrap();
        assert_eq!(reply.navigate_to, Some(Section::Reminder));
        assert_eq!(reply.text, "Opened the reminder section for you.");

        let reply = respond("drug info").unwrap();
        assert_eq!(reply.text, "Opened the drug-info section for you.");
    }

    #[test]
    fn section_keywords_take_priority_over_greetings() {
        let reply = respond("hello, go home").unwrap();
        assert_eq!(reply.navigate_to, Some(Section::Home));
    }

    #[test]
    fn earliest_keyword_in_table_wins() {
        // "drug" precedes "home" in the keyword table regardless of word order
        let reply = respond("home drug").unwrap();
        assert_eq!(reply.navigate_to, Some(Section::DrugInfo));
    }

    #[test]
    fn greetings_and_thanks() {
        assert_eq!(respond("Hello there").unwrap().text, GREETING);
        assert_eq!(respond("thanks!").unwrap().text, WELCOME);
        let reply = respond("what's the weather").unwrap();
        assert_eq!(reply.text, FALLBACK);
        assert_eq!(reply.navigate_to, None);
    }

    #[test]
    fn blank_message_gets_no_reply() {
        assert_eq!(respond("  \t"), None);
    }
}
