// File: ./src/model/classifier.rs
//! Intent classification: an ordered cascade of predicate rules over the
//! normalized message plus its extracted entities. The first rule that
//! matches decides; nothing matching means plain conversation.

use crate::lexicon::Lexicon;
use crate::model::parser::{self, Normalized, ParsedMessage};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// What the user wants from the assistant. Serialized names are the wire
/// contract with hosts ("delete_all_events" etc.), so they never change
/// casually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ScheduleEvent,
    AnalyzeProgress,
    SuggestActivities,
    GeneralChat,
    CreateSchedule,
    DirectCreateEvent,
    EditEvent,
    DeleteEvent,
    DeleteAllEvents,
    DeleteWeekEvents,
    ListEvents,
}

impl Intent {
    /// Stable snake_case name, identical to the serde form.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Intent::ScheduleEvent => "schedule_event",
            Intent::AnalyzeProgress => "analyze_progress",
            Intent::SuggestActivities => "suggest_activities",
            Intent::GeneralChat => "general_chat",
            Intent::CreateSchedule => "create_schedule",
            Intent::DirectCreateEvent => "direct_create_event",
            Intent::EditEvent => "edit_event",
            Intent::DeleteEvent => "delete_event",
            Intent::DeleteAllEvents => "delete_all_events",
            Intent::DeleteWeekEvents => "delete_week_events",
            Intent::ListEvents => "list_events",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// Everything a rule may look at. Rules never touch the raw string.
pub(crate) struct RuleInput<'a> {
    pub text: &'a Normalized,
    pub parsed: &'a ParsedMessage,
    pub lexicon: &'a Lexicon,
}

type Predicate = fn(&RuleInput<'_>) -> bool;

/// The cascade. Order is behavior: queries are checked before destructive
/// verbs, destructive before creations, and the two bulk deletions before
/// the single-event one.
const RULES: &[(Intent, Predicate)] = &[
    (Intent::ListEvents, wants_listing),
    (Intent::DeleteAllEvents, wants_full_purge),
    (Intent::DeleteWeekEvents, wants_week_purge),
    (Intent::DeleteEvent, wants_deletion),
    (Intent::EditEvent, wants_modification),
    (Intent::DirectCreateEvent, wants_direct_creation),
    (Intent::ScheduleEvent, confirms_scheduling),
    (Intent::CreateSchedule, wants_study_plan),
    (Intent::AnalyzeProgress, wants_progress_report),
    (Intent::SuggestActivities, wants_suggestions),
];

/// Classifies one message. Total: every input lands on some intent, the
/// fallback being [`Intent::GeneralChat`].
pub fn detect_intent(raw: &str, lexicon: &Lexicon, today: NaiveDate) -> Intent {
    let text = Normalized::new(raw);
    let parsed = parser::parse_normalized(raw, &text, lexicon, today);
    if parsed.is_greeting {
        return Intent::GeneralChat;
    }
    let input = RuleInput {
        text: &text,
        parsed: &parsed,
        lexicon,
    };
    for (intent, applies) in RULES {
        if applies(&input) {
            log::debug!("message classified as {intent}");
            return *intent;
        }
    }
    Intent::GeneralChat
}

// --- RULES ---

fn wants_listing(input: &RuleInput) -> bool {
    if input.parsed.is_list_request {
        return true;
    }
    let text = input.text;
    let lexicon = input.lexicon;
    let has_have = text.has_any(&lexicon.have_markers);
    (has_have && text.has_any(&lexicon.query_day_markers))
        || (has_have && text.has_any(&lexicon.question_words))
}

/// Wiping the whole calendar. Refuses to fire when the message pins the
/// deletion to a date ("do dia", any digit): those are single-target.
fn wants_full_purge(input: &RuleInput) -> bool {
    let text = input.text;
    let lexicon = input.lexicon;
    let noun = text.has_any(&lexicon.calendar_nouns);
    let purge = text.has_any(&lexicon.purge_verbs);
    let deletion = purge || text.has_any(&lexicon.deletion_verbs);
    let totality = text.has_any(&lexicon.totality_markers) || (purge && noun);
    deletion
        && totality
        && noun
        && !text.has_any(&lexicon.specific_date_markers)
        && !text.has_digit()
}

fn wants_week_purge(input: &RuleInput) -> bool {
    let text = input.text;
    let lexicon = input.lexicon;
    (text.has_any(&lexicon.deletion_verbs) || text.has_any(&lexicon.purge_verbs))
        && text.has_any(&lexicon.calendar_nouns)
        && text.has_any(&lexicon.week_phrases)
}

fn wants_deletion(input: &RuleInput) -> bool {
    input.text.has_any(&input.lexicon.deletion_verbs)
}

fn wants_modification(input: &RuleInput) -> bool {
    input.text.has_any(&input.lexicon.modification_verbs)
}

/// "agende física para amanhã": actionable phrasing plus at least one
/// concrete entity to act on.
fn wants_direct_creation(input: &RuleInput) -> bool {
    input.parsed.is_direct_request
        && (input.parsed.subject.is_some() || input.parsed.date.is_some())
}

/// Short agreements to a previously proposed event. Bare "sim"/"ok" only
/// count when they are the entire message.
fn confirms_scheduling(input: &RuleInput) -> bool {
    let text = input.text;
    let lexicon = input.lexicon;
    if lexicon.confirmation_phrases.iter().any(|c| text.has_term(c)) {
        return true;
    }
    let joined = text.joined();
    lexicon.exact_confirmations.iter().any(|c| *c == joined)
}

fn wants_study_plan(input: &RuleInput) -> bool {
    let text = input.text;
    let lexicon = input.lexicon;
    text.has_any(&lexicon.plan_phrases)
        || (text.has_any(&lexicon.activity_plan_markers)
            && text.has_any(&lexicon.horizon_markers))
}

fn wants_progress_report(input: &RuleInput) -> bool {
    input.text.has_any(&input.lexicon.progress_terms)
}

fn wants_suggestions(input: &RuleInput) -> bool {
    input.text.has_any(&input.lexicon.suggestion_terms)
}
