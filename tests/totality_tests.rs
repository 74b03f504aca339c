use chrono::NaiveDate;
use entendi::{
    CalendarEvent, Intent, Lexicon, analyze_progress, detect_intent, find_target_event,
    parse_message,
};
use std::collections::HashSet;
use strum::IntoEnumIterator;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn garbage_inputs() -> Vec<String> {
    vec![
        String::new(),
        "   ".to_string(),
        "!!!???...".to_string(),
        "🤖🤖🤖📅".to_string(),
        "\u{0}\u{1}\t\n\r".to_string(),
        "1234567890".to_string(),
        "99999999999999999999".to_string(),
        "31 31 31 dia dia dia".to_string(),
        "𝕬𝖌𝖊𝖓𝖉𝖊 𝖋í𝖘𝖎𝖈𝖆".to_string(),
        "مرحبا بالعالم".to_string(),
        "null undefined NaN".to_string(),
        "a".repeat(10_000),
        "dia ".repeat(500),
        "excluir ".repeat(200),
    ]
}

#[test]
fn test_every_input_lands_on_some_intent() {
    let lexicon = Lexicon::builtin();
    let today = day(2025, 3, 10);
    for input in garbage_inputs() {
        // The call itself must not panic; the wire name proves we got a
        // real variant back.
        let intent = detect_intent(&input, lexicon, today);
        assert!(!intent.wire_name().is_empty());
    }
}

#[test]
fn test_extraction_never_fails_and_keeps_the_input() {
    let lexicon = Lexicon::builtin();
    let today = day(2025, 3, 10);
    for input in garbage_inputs() {
        let parsed = parse_message(&input, lexicon, today);
        assert_eq!(parsed.original_message, input);
    }
}

#[test]
fn test_resolver_survives_garbage_with_and_without_events() {
    let lexicon = Lexicon::builtin();
    let today = day(2025, 3, 10);
    let events = vec![CalendarEvent::new(
        "Prova",
        "Física",
        day(2025, 3, 12).and_hms_opt(8, 0, 0).unwrap(),
        day(2025, 3, 12).and_hms_opt(9, 0, 0).unwrap(),
    )];
    for input in garbage_inputs() {
        let _ = find_target_event(&input, &[], lexicon, today);
        let _ = find_target_event(&input, &events, lexicon, today);
    }
}

#[test]
fn test_progress_survives_odd_subject_strings() {
    let subjects = ["", " ", "🤖", "Física\nQuímica", "x"];
    let events: Vec<CalendarEvent> = subjects
        .iter()
        .map(|s| {
            CalendarEvent::new(
                s,
                s,
                day(2025, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
                day(2025, 1, 1).and_hms_opt(1, 0, 0).unwrap(),
            )
        })
        .collect();
    let snapshot = analyze_progress(&events);
    assert_eq!(snapshot.total_events, subjects.len());
}

#[test]
fn test_rollovers_near_year_and_month_boundaries() {
    let lexicon = Lexicon::builtin();
    // New Year's Eve: a passed day rolls into January of the next year.
    let eve = day(2024, 12, 31);
    assert_eq!(
        parse_message("prova dia 30", lexicon, eve).date,
        Some(day(2025, 1, 30))
    );
    // November has no 31st: "dia 31" said on Nov 30 lands on Dec 31.
    let november = day(2024, 11, 30);
    assert_eq!(
        parse_message("prova dia 31", lexicon, november).date,
        Some(day(2024, 12, 31))
    );
    // Leap day exists in 2024...
    let leap = day(2024, 2, 1);
    assert_eq!(
        parse_message("prova dia 29", lexicon, leap).date,
        Some(day(2024, 2, 29))
    );
    // ...but not in 2025.
    let non_leap = day(2025, 2, 1);
    assert_eq!(
        parse_message("prova dia 29", lexicon, non_leap).date,
        Some(day(2025, 3, 29))
    );
}

#[test]
fn test_identical_inputs_yield_identical_outputs() {
    let lexicon = Lexicon::builtin();
    let today = day(2025, 3, 10);
    let messages = [
        "agende física para amanhã",
        "excluir todos os eventos",
        "oi",
        "dia 31",
    ];
    for message in messages {
        assert_eq!(
            detect_intent(message, lexicon, today),
            detect_intent(message, lexicon, today)
        );
        assert_eq!(
            parse_message(message, lexicon, today),
            parse_message(message, lexicon, today)
        );
    }
}

#[test]
fn test_wire_names_are_unique_across_all_intents() {
    let names: HashSet<&str> = Intent::iter().map(|i| i.wire_name()).collect();
    assert_eq!(names.len(), Intent::iter().count());
    assert_eq!(names.len(), 11);
}
