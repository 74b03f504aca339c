// File: ./src/model/event.rs
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_event_type() -> String {
    "study".to_string()
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Scheduled,
    Completed,
}

impl EventStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// One entry in the host's study calendar. The interpreter never persists
/// these; the host hands in a slice and gets references (or aggregates) back.
/// Serde derives exist so hosts can move events over JSON unchanged.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default = "default_id")]
    pub id: String,
    pub title: String,
    /// Display-form subject name ("Física"), compared accent-insensitively.
    pub subject: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub status: EventStatus,
    #[serde(default = "default_event_type")]
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl CalendarEvent {
    pub fn new(title: &str, subject: &str, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        CalendarEvent {
            id: default_id(),
            title: title.to_string(),
            subject: subject.to_string(),
            start_date: start,
            end_date: end,
            status: EventStatus::Scheduled,
            event_type: default_event_type(),
            color: None,
            description: String::new(),
            topic: None,
        }
    }

    /// Calendar day the event starts on; all date matching works on days,
    /// never on times.
    pub fn start_day(&self) -> NaiveDate {
        self.start_date.date()
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}
