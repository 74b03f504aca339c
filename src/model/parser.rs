// File: ./src/model/parser.rs
//! Entity extraction: turns one raw user message into the subject, date and
//! request flags the classification rules work with. Pure functions, no
//! clock access; "today" is always injected by the caller.

use crate::lexicon::{self, Lexicon};
use crate::model::subject::Subject;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

// --- NORMALIZED VIEW ---

/// A message folded once, tokenized once. Every stage downstream matches
/// against this instead of re-normalizing the raw text.
#[derive(Debug, Clone)]
pub(crate) struct Normalized {
    folded: String,
    tokens: Vec<String>,
}

impl Normalized {
    pub fn new(raw: &str) -> Self {
        let folded = lexicon::fold(raw);
        let tokens = lexicon::split_tokens(&folded);
        Normalized { folded, tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens re-joined with single spaces; the form whole-message tables
    /// (greetings, exact confirmations) are compared against.
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn has_token(&self, term: &str) -> bool {
        self.tokens.iter().any(|t| t == term)
    }

    pub fn has_phrase(&self, phrase: &str) -> bool {
        self.folded.contains(phrase)
    }

    /// Single words match whole tokens only; spaced phrases match as
    /// substrings. Keeps "mat" from firing inside "informática" while
    /// "toda a agenda" still matches.
    pub fn has_term(&self, term: &str) -> bool {
        if term.contains(' ') {
            self.has_phrase(term)
        } else {
            self.has_token(term)
        }
    }

    pub fn has_any(&self, terms: &[String]) -> bool {
        terms.iter().any(|t| self.has_term(t))
    }

    pub fn has_digit(&self) -> bool {
        self.folded.chars().any(|c| c.is_ascii_digit())
    }
}

// --- PARSED MESSAGE ---

/// Everything extraction managed to read out of one message. Absent pieces
/// stay `None`/`false`; extraction itself never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    pub subject: Option<Subject>,
    pub date: Option<NaiveDate>,
    /// Scheduling verb present, or a subject tied to "para"/"de".
    pub is_direct_request: bool,
    /// Listing phrasing present ("quais", "mostrar", ...).
    pub is_list_request: bool,
    /// The whole message is a greeting; when set, every other field is empty.
    pub is_greeting: bool,
    pub original_message: String,
}

impl ParsedMessage {
    fn bare(raw: &str) -> Self {
        ParsedMessage {
            subject: None,
            date: None,
            is_direct_request: false,
            is_list_request: false,
            is_greeting: false,
            original_message: raw.to_string(),
        }
    }
}

/// Extracts entities from `raw`. Relative dates ("amanhã") and rollover
/// rules ("dia 5" said on the 25th) are resolved against `today`.
pub fn parse_message(raw: &str, lexicon: &Lexicon, today: NaiveDate) -> ParsedMessage {
    let text = Normalized::new(raw);
    parse_normalized(raw, &text, lexicon, today)
}

pub(crate) fn parse_normalized(
    raw: &str,
    text: &Normalized,
    lexicon: &Lexicon,
    today: NaiveDate,
) -> ParsedMessage {
    if is_greeting(text, lexicon) {
        return ParsedMessage {
            is_greeting: true,
            ..ParsedMessage::bare(raw)
        };
    }

    let subject = extract_subject(text, lexicon);
    let date = extract_date(text, lexicon, today);

    let is_direct_request = text.has_any(&lexicon.scheduling_verbs)
        || (subject.is_some() && lexicon.prepositions.iter().any(|p| text.has_token(p)));
    let is_list_request = text.has_any(&lexicon.list_phrases);

    ParsedMessage {
        subject,
        date,
        is_direct_request,
        is_list_request,
        is_greeting: false,
        original_message: raw.to_string(),
    }
}

/// A greeting is the *entire* message, so "bom dia, agende física" still
/// parses as a scheduling request.
fn is_greeting(text: &Normalized, lexicon: &Lexicon) -> bool {
    let joined = text.joined();
    !joined.is_empty() && lexicon.greetings.iter().any(|g| *g == joined)
}

// --- SUBJECT ---

/// First hit in the ordered alias table wins.
fn extract_subject(text: &Normalized, lexicon: &Lexicon) -> Option<Subject> {
    lexicon
        .subjects
        .iter()
        .find(|(alias, _)| text.has_term(alias))
        .map(|(_, subject)| *subject)
}

// --- DATES ---

/// Three mutually exclusive stages, checked in order: relative keywords,
/// day-of-month, weekday names. The first stage that recognizes anything
/// decides the date.
fn extract_date(text: &Normalized, lexicon: &Lexicon, today: NaiveDate) -> Option<NaiveDate> {
    if let Some(date) = relative_date(text, lexicon, today) {
        return Some(date);
    }
    if let Some(date) = day_of_month_date(text, lexicon, today) {
        return Some(date);
    }
    weekday_date(text, lexicon, today)
}

fn relative_date(text: &Normalized, lexicon: &Lexicon, today: NaiveDate) -> Option<NaiveDate> {
    for (keyword, offset) in &lexicon.relative_days {
        if text.has_term(keyword) {
            return today.checked_add_signed(Duration::days(*offset));
        }
    }
    None
}

/// "dia 15", "no dia 15", "15 de março" or a bare 1-31 number. An explicit
/// "dia N" wins over any earlier bare number ("tenho 2 provas dia 15").
fn day_of_month_date(text: &Normalized, lexicon: &Lexicon, today: NaiveDate) -> Option<NaiveDate> {
    let tokens = text.tokens();

    for (i, token) in tokens.iter().enumerate() {
        if *token == lexicon.day_word
            && let Some(next) = tokens.get(i + 1)
            && let Some(day) = parse_day_number(next)
        {
            let month = month_after(tokens, i + 1, lexicon);
            return resolve_day_of_month(day, month, today);
        }
    }

    for (i, token) in tokens.iter().enumerate() {
        if let Some(day) = parse_day_number(token) {
            let month = month_after(tokens, i, lexicon);
            return resolve_day_of_month(day, month, today);
        }
    }
    None
}

/// Accepts "15", "05" and ordinal spellings like "1º". Anything outside
/// 1..=31 is not a day.
fn parse_day_number(token: &str) -> Option<u32> {
    let digits = token.trim_end_matches(['º', 'ª']);
    let n = digits.parse::<u32>().ok()?;
    (1..=31).contains(&n).then_some(n)
}

/// Month name directly after the day token, with or without a preposition:
/// "15 de março", "15 março".
fn month_after(tokens: &[String], day_idx: usize, lexicon: &Lexicon) -> Option<u32> {
    let mut next = tokens.get(day_idx + 1)?;
    if lexicon.prepositions.iter().any(|p| p == next) {
        next = tokens.get(day_idx + 2)?;
    }
    lexicon
        .months
        .iter()
        .find(|(name, _)| name == next)
        .map(|(_, month)| *month)
}

/// Days always resolve forwards. A passed day-of-month rolls to the next
/// month that actually contains it (Jan 30 + "dia 31" -> Mar 31, never a
/// clamped Feb 28); a passed explicit month rolls to next year.
fn resolve_day_of_month(day: u32, month: Option<u32>, today: NaiveDate) -> Option<NaiveDate> {
    match month {
        Some(month) => match NaiveDate::from_ymd_opt(today.year(), month, day) {
            Some(date) if date >= today => Some(date),
            Some(_) => NaiveDate::from_ymd_opt(today.year() + 1, month, day),
            None => None,
        },
        None => {
            if day >= today.day()
                && let Some(date) = NaiveDate::from_ymd_opt(today.year(), today.month(), day)
            {
                return Some(date);
            }
            next_month_with_day(today, day)
        }
    }
}

fn next_month_with_day(today: NaiveDate, day: u32) -> Option<NaiveDate> {
    let (mut year, mut month) = (today.year(), today.month());
    for _ in 0..12 {
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }
    None
}

fn weekday_date(text: &Normalized, lexicon: &Lexicon, today: NaiveDate) -> Option<NaiveDate> {
    lexicon
        .weekdays
        .iter()
        .find(|(name, _)| text.has_token(name))
        .map(|(_, weekday)| next_weekday(today, *weekday))
}

/// Strictly-future walk: naming today's weekday means next week's.
fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let mut date = from + Duration::days(1);
    while date.weekday() != target {
        date += Duration::days(1);
    }
    date
}
