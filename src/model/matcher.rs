// File: ./src/model/matcher.rs
// Resolution of which existing calendar event a message talks about.
//
// Used for edits and single-event deletions: the host hands in its event
// list and the message, and gets back at most one target. The cascade tries
// the most specific signal first (a named subject), then day references,
// then positional words ("próximo", "último"). A step only decides when it
// actually finds an event; otherwise the next step gets its chance.

use crate::lexicon::{Lexicon, fold};
use crate::model::event::CalendarEvent;
use crate::model::parser::{self, Normalized};
use chrono::{Duration, NaiveDate};

/// Picks the event `raw` most plausibly refers to, or `None` when nothing
/// matches. For a fixed event order the outcome is fully deterministic.
pub fn find_target_event<'a>(
    raw: &str,
    events: &'a [CalendarEvent],
    lexicon: &Lexicon,
    today: NaiveDate,
) -> Option<&'a CalendarEvent> {
    if events.is_empty() {
        return None;
    }

    let text = Normalized::new(raw);
    let parsed = parser::parse_normalized(raw, &text, lexicon, today);

    // A named subject beats everything; earliest matching event wins.
    if let Some(subject) = parsed.subject {
        let needle = fold(subject.canonical_name());
        let hit = events
            .iter()
            .filter(|e| fold(&e.subject).contains(&needle) || fold(&e.title).contains(&needle))
            .min_by_key(|e| e.start_date);
        if let Some(event) = hit {
            log::debug!("resolved '{}' by subject to event {}", subject, event.id);
            return Some(event);
        }
    }

    let mentions_offset = |offset: i64| {
        lexicon
            .relative_days
            .iter()
            .any(|(keyword, o)| *o == offset && text.has_term(keyword))
    };

    if mentions_offset(0)
        && let Some(event) = events.iter().find(|e| e.start_day() == today)
    {
        return Some(event);
    }

    let tomorrow = today + Duration::days(1);
    if mentions_offset(1)
        && let Some(event) = events.iter().find(|e| e.start_day() == tomorrow)
    {
        return Some(event);
    }

    if text.has_any(&lexicon.next_markers)
        && let Some(event) = events
            .iter()
            .filter(|e| e.start_day() > today)
            .min_by_key(|e| e.start_date)
    {
        return Some(event);
    }

    if text.has_any(&lexicon.last_markers)
        && let Some(event) = events.iter().max_by_key(|e| e.start_date)
    {
        return Some(event);
    }

    None
}
