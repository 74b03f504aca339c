// File: ./src/model/progress.rs
use crate::model::event::CalendarEvent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Completion statistics over a whole event list. Maps are `BTreeMap` so
/// iteration (and therefore any rendering a host does) is alphabetical and
/// stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub total_events: usize,
    pub completed_events: usize,
    pub scheduled_events: usize,
    /// Rounded percentage, 0..=100. An empty calendar reads as 0, not an
    /// error.
    pub completion_rate: u8,
    /// Events per subject name, completed or not.
    pub subject_counts: BTreeMap<String, u32>,
    /// Completed events per subject name. Subjects without completions are
    /// absent rather than zero.
    pub completed_subject_counts: BTreeMap<String, u32>,
    pub most_studied_subject: Option<String>,
    pub least_studied_subject: Option<String>,
}

/// Single pass over the events; never fails. Subjects are bucketed by their
/// stored display name, untouched, so hosts see their own strings back.
pub fn analyze_progress(events: &[CalendarEvent]) -> ProgressSnapshot {
    let mut snapshot = ProgressSnapshot {
        total_events: events.len(),
        ..ProgressSnapshot::default()
    };

    for event in events {
        *snapshot
            .subject_counts
            .entry(event.subject.clone())
            .or_insert(0) += 1;
        if event.is_completed() {
            snapshot.completed_events += 1;
            *snapshot
                .completed_subject_counts
                .entry(event.subject.clone())
                .or_insert(0) += 1;
        }
    }
    snapshot.scheduled_events = snapshot.total_events - snapshot.completed_events;
    snapshot.completion_rate = if snapshot.total_events == 0 {
        0
    } else {
        let ratio = snapshot.completed_events as f64 / snapshot.total_events as f64;
        (ratio * 100.0).round() as u8
    };

    // Strict comparisons over the alphabetical map: ties keep the first
    // (alphabetically smallest) subject.
    let mut most: Option<(&String, u32)> = None;
    let mut least: Option<(&String, u32)> = None;
    for (subject, count) in &snapshot.subject_counts {
        if most.is_none_or(|(_, best)| *count > best) {
            most = Some((subject, *count));
        }
        if least.is_none_or(|(_, worst)| *count < worst) {
            least = Some((subject, *count));
        }
    }
    snapshot.most_studied_subject = most.map(|(subject, _)| subject.clone());
    snapshot.least_studied_subject = least.map(|(subject, _)| subject.clone());

    snapshot
}
